//! Read the tab-separated gene annotation table
//!
//! The table carries one gene per row with nine columns:
//!
//! ```text
//! gene  paralog  chrom  strand  tx_start  tx_end  jn_start  jn_end  seq
//! ```
//!
//! `jn_start` and `jn_end` are comma-separated coordinate lists, each
//! terminated by a trailing comma. `seq` is the transcript sequence
//! with the genomic flank of one context length on each side. Blank
//! lines and lines starting with `#` are skipped.

mod reader;

pub use crate::annotation::reader::Reader;
