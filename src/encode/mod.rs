//! Sequence/Label Encoder
//!
//! Turns one [`GeneRecord`] into two aligned code arrays, both in the
//! gene's biological 5'→3' orientation regardless of the chromosome
//! strand:
//!
//! - the *base codes*: one [`Nucleotide`] code per position, with the
//!   genomic flank of the input replaced by a sentinel (`N`) buffer of
//!   the same width on each side
//! - the *splice codes*: one [`SpliceSite`] code per transcript
//!   position, right-padded with the padding class out to a whole
//!   context length
//!
//! Three coordinate systems meet here: absolute genomic positions
//! (`tx_start`, `tx_end`, junction boundaries), transcript-relative
//! array offsets, and (one layer up, in [`crate::tile`]) tile-local
//! offsets. The genomic→transcript conversions are the named functions
//! [`forward_offset`] and [`reverse_offset`]; everything else indexes
//! arrays directly.
//!
//! # Examples
//!
//! ```rust
//! use splicedata::encode::encode;
//! use splicedata::models::SpliceSite;
//! use splicedata::tests::records::{standard_record, TEST_CONTEXT};
//!
//! let record = standard_record();
//! let (base_codes, splice_codes) = encode(&record, TEST_CONTEXT).unwrap();
//!
//! assert_eq!(base_codes.len(), record.tx_length() + 2 * TEST_CONTEXT);
//! assert_eq!(splice_codes.len(), record.tx_length() + TEST_CONTEXT);
//! assert_eq!(splice_codes[10], SpliceSite::Donor.code());
//! assert_eq!(splice_codes[40], SpliceSite::Acceptor.code());
//! ```

use crate::models::{GeneRecord, Nucleotide, Sequence, SpliceSite, Strand};
use crate::utils::errors::RecordError;

/// Array offset of a genomic coordinate on a forward-strand transcript
///
/// # Examples
///
/// ```rust
/// use splicedata::encode::forward_offset;
///
/// assert_eq!(forward_offset(110, 100), 10);
/// ```
pub fn forward_offset(coord: u32, tx_start: u32) -> usize {
    (coord - tx_start) as usize
}

/// Array offset of a genomic coordinate on a reverse-strand transcript
///
/// Reverse-strand introns run antiparallel to the array's 5'→3'
/// orientation, so the offset is mirrored at the transcript end.
///
/// # Examples
///
/// ```rust
/// use splicedata::encode::reverse_offset;
///
/// assert_eq!(reverse_offset(110, 149), 39);
/// ```
pub fn reverse_offset(coord: u32, tx_end: u32) -> usize {
    (tx_end - coord) as usize
}

/// Writes one splice class at every in-range junction boundary
///
/// Boundaries outside `[tx_start, tx_end]` are ignored: junctions may
/// extend past the annotated transcript.
fn place_sites(
    splice: &mut [i8],
    record: &GeneRecord,
    coords: &[u32],
    site: SpliceSite,
    mirrored: bool,
) {
    for &coord in coords {
        if coord < record.tx_start() || coord > record.tx_end() {
            log::trace!(
                "junction boundary {} outside transcript {}",
                coord,
                record.label()
            );
            continue;
        }
        let offset = if mirrored {
            reverse_offset(coord, record.tx_end())
        } else {
            forward_offset(coord, record.tx_start())
        };
        splice[offset] = site.code();
    }
}

/// Encodes one record into aligned base-code and splice-code arrays
///
/// `context` is the flank width `L`. The returned base codes have
/// length `tx_length + 2 * context` (sentinel buffer on both sides),
/// the splice codes `tx_length + context` (padding class on the right
/// only), so splice position 0 lines up with base position `context`.
///
/// # Errors
///
/// Fails with a [`RecordError`] naming the record when the sequence
/// length does not match `tx_length + 2 * context` or a sequence
/// character is not one of `{N, A, C, G, T}`.
pub fn encode(record: &GeneRecord, context: usize) -> Result<(Vec<u8>, Vec<i8>), RecordError> {
    let tx_len = record.tx_length();
    let expected = tx_len + 2 * context;
    if record.seq().len() != expected {
        return Err(RecordError::schema(
            record.label(),
            format!(
                "sequence length {} does not match transcript length {} with {} flanking bases per side",
                record.seq().len(),
                tx_len,
                context
            ),
        ));
    }

    // Drop the genomic flank, keep a sentinel buffer of the same width.
    // All characters are validated, including the discarded flank.
    let mut seq = Sequence::with_capacity(expected);
    seq.push_n(context);
    for (position, c) in record.seq().chars().enumerate() {
        let base =
            Nucleotide::new(&c).map_err(|_| RecordError::invalid_base(record.label(), c))?;
        if position >= context && position < context + tx_len {
            seq.push(base);
        }
    }
    seq.push_n(context);

    if !record.strand().forward() {
        seq.reverse_complement();
    }

    let mut splice = vec![SpliceSite::Neither.code(); tx_len];
    // Fixed processing order: jn_start before jn_end. On a collision at
    // one offset the later write wins, so on '+' an acceptor overwrites
    // a donor and on '-' a donor overwrites an acceptor.
    match record.strand() {
        Strand::Plus => {
            place_sites(&mut splice, record, record.jn_start(), SpliceSite::Donor, false);
            place_sites(&mut splice, record, record.jn_end(), SpliceSite::Acceptor, false);
        }
        Strand::Minus => {
            place_sites(&mut splice, record, record.jn_start(), SpliceSite::Acceptor, true);
            place_sites(&mut splice, record, record.jn_end(), SpliceSite::Donor, true);
        }
    }
    splice.resize(tx_len + context, SpliceSite::Padding.code());

    Ok((seq.codes(), splice))
}
