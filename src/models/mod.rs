//! Value types shared across the crate: nucleotides and sequences,
//! splice classes, strands and annotation records

mod gene;
mod sequence;
mod splice;
mod strand;

pub use gene::GeneRecord;
pub use sequence::{Nucleotide, Sequence, BASE_ONE_HOT};
pub use splice::{SpliceSite, SPLICE_ONE_HOT};
pub use strand::Strand;
