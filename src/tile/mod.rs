//! Window Tiler
//!
//! Decomposes the encoder's full-length code arrays into fixed-size
//! training units. Each unit covers one label tile of `context` bases
//! and an input window of `3 * context` bases centered on it, so the
//! model sees one context length of lookbehind and lookahead around
//! every labelled position.
//!
//! The base codes arrive with a sentinel buffer on both sides; the
//! tiler adds one more sentinel run on the right so the transcript
//! occupies a whole number of tiles. The last tile may therefore carry
//! padding labels and sentinel context; that is intentional and is
//! preserved, never trimmed.
//!
//! # Examples
//!
//! ```rust
//! use splicedata::encode::encode;
//! use splicedata::tile::{tile, tile_count};
//! use splicedata::tests::records::{standard_record, TEST_CONTEXT};
//!
//! let record = standard_record();
//! let (base_codes, splice_codes) = encode(&record, TEST_CONTEXT).unwrap();
//! let tiles = tile(&base_codes, &splice_codes, TEST_CONTEXT).unwrap();
//!
//! assert_eq!(tiles.len(), tile_count(record.tx_length(), TEST_CONTEXT));
//! assert_eq!(tiles[0].x.shape(), &[3 * TEST_CONTEXT, 4]);
//! assert_eq!(tiles[0].y.shape(), &[TEST_CONTEXT, 3]);
//! ```

use ndarray::Array2;

use crate::models::{Nucleotide, SpliceSite};
use crate::utils::errors::SpliceError;

/// One training unit: an input window and its label tile
///
/// `x` is the one-hot base window of shape `(3 * context, 4)`, `y` the
/// one-hot splice tile of shape `(context, 3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub x: Array2<i8>,
    pub y: Array2<i8>,
}

/// Number of tiles a transcript of `label_length` bases decomposes into
///
/// # Examples
///
/// ```rust
/// use splicedata::tile::tile_count;
///
/// assert_eq!(tile_count(50, 10), 5);
/// assert_eq!(tile_count(51, 10), 6);
/// assert_eq!(tile_count(9, 10), 1);
/// ```
pub fn tile_count(label_length: usize, context: usize) -> usize {
    (label_length + context - 1) / context
}

/// One-hot expansion of a base-code window into a `(len, 4)` tensor
fn expand_bases(codes: &[u8]) -> Result<Array2<i8>, SpliceError> {
    let mut flat = Vec::with_capacity(codes.len() * 4);
    for &code in codes {
        flat.extend_from_slice(&Nucleotide::from_code(code)?.one_hot());
    }
    Ok(Array2::from_shape_vec((codes.len(), 4), flat).unwrap()) // cannot fail
}

/// One-hot expansion of a splice-code tile into a `(len, 3)` tensor
fn expand_labels(codes: &[i8]) -> Result<Array2<i8>, SpliceError> {
    let mut flat = Vec::with_capacity(codes.len() * 3);
    for &code in codes {
        flat.extend_from_slice(&SpliceSite::from_code(code)?.one_hot());
    }
    Ok(Array2::from_shape_vec((codes.len(), 3), flat).unwrap()) // cannot fail
}

/// Slices the encoder output of one record into training units
///
/// Expects `splice_codes` right-padded by one context (as produced by
/// [`crate::encode::encode`]) and `seq_codes` two contexts longer than
/// the label region. Tiles are returned in increasing offset order.
///
/// # Errors
///
/// Fails when `context` is zero, the arrays disagree on the transcript
/// length, or a code is outside its category alphabet.
pub fn tile(
    seq_codes: &[u8],
    splice_codes: &[i8],
    context: usize,
) -> Result<Vec<Tile>, SpliceError> {
    if context == 0 {
        return Err(SpliceError::new("context length must be greater than zero"));
    }
    let label_length = splice_codes
        .len()
        .checked_sub(context)
        .ok_or_else(|| SpliceError::new("splice codes shorter than one context"))?;
    if seq_codes.len() != label_length + 2 * context {
        return Err(SpliceError::new(format!(
            "base codes length {} does not match label length {} plus two context flanks",
            seq_codes.len(),
            label_length
        )));
    }

    // the post-encoder pad: one more sentinel run so every input window
    // is a full 3 * context wide
    let mut padded = Vec::with_capacity(seq_codes.len() + context);
    padded.extend_from_slice(seq_codes);
    padded.resize(seq_codes.len() + context, Nucleotide::N.code());

    let count = tile_count(label_length, context);
    let mut tiles = Vec::with_capacity(count);
    for index in 0..count {
        let x = expand_bases(&padded[index * context..index * context + 3 * context])?;
        let y = expand_labels(&splice_codes[index * context..index * context + context])?;
        tiles.push(Tile { x, y });
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use crate::tests::records::{standard_record, TEST_CONTEXT};

    #[test]
    fn test_tile_count_is_ceiling() {
        assert_eq!(tile_count(1, 10), 1);
        assert_eq!(tile_count(10, 10), 1);
        assert_eq!(tile_count(11, 10), 2);
        assert_eq!(tile_count(20, 10), 2);
        assert_eq!(tile_count(0, 10), 0);
    }

    #[test]
    fn test_shapes_and_count() {
        let record = standard_record();
        let (base_codes, splice_codes) = encode(&record, TEST_CONTEXT).unwrap();
        let tiles = tile(&base_codes, &splice_codes, TEST_CONTEXT).unwrap();

        assert_eq!(tiles.len(), 5);
        for t in &tiles {
            assert_eq!(t.x.shape(), &[30, 4]);
            assert_eq!(t.y.shape(), &[10, 3]);
        }
    }

    #[test]
    fn test_window_centered_on_label_tile() {
        let record = standard_record();
        let (base_codes, splice_codes) = encode(&record, TEST_CONTEXT).unwrap();
        let tiles = tile(&base_codes, &splice_codes, TEST_CONTEXT).unwrap();

        // the middle third of X_i is the one-hot of the bases under Y_i
        for (index, t) in tiles.iter().enumerate() {
            for offset in 0..TEST_CONTEXT {
                let base = base_codes[TEST_CONTEXT + index * TEST_CONTEXT + offset];
                let row = t.x.row(TEST_CONTEXT + offset);
                assert_eq!(
                    row.as_slice().unwrap(),
                    crate::models::Nucleotide::from_code(base).unwrap().one_hot()
                );
            }
        }
    }

    #[test]
    fn test_first_tile_context_is_sentinel() {
        let record = standard_record();
        let (base_codes, splice_codes) = encode(&record, TEST_CONTEXT).unwrap();
        let tiles = tile(&base_codes, &splice_codes, TEST_CONTEXT).unwrap();

        // lookbehind of the first tile is the left sentinel buffer
        for offset in 0..TEST_CONTEXT {
            assert_eq!(tiles[0].x.row(offset).sum(), 0);
        }
    }

    #[test]
    fn test_uneven_transcript_pads_last_tile() {
        // 55-base transcript: 6 tiles, the last label tile is half padding
        let splice_codes: Vec<i8> = (0..55)
            .map(|_| 0)
            .chain(std::iter::repeat(-1).take(TEST_CONTEXT))
            .collect();
        let seq_codes = vec![1u8; 55 + 2 * TEST_CONTEXT];
        let tiles = tile(&seq_codes, &splice_codes, TEST_CONTEXT).unwrap();

        assert_eq!(tiles.len(), 6);
        let last = &tiles[5];
        // labelled half fires the neither class, padded half fires none
        for offset in 0..5 {
            assert_eq!(last.y.row(offset).as_slice().unwrap(), &[1, 0, 0]);
        }
        for offset in 5..TEST_CONTEXT {
            assert_eq!(last.y.row(offset).sum(), 0);
        }
        // trailing input context beyond the sequence is sentinel
        for offset in 2 * TEST_CONTEXT + 5..3 * TEST_CONTEXT {
            assert_eq!(last.x.row(offset).sum(), 0);
        }
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let splice_codes = vec![0i8; 20];
        let seq_codes = vec![1u8; 10];
        assert!(tile(&seq_codes, &splice_codes, 10).is_err());
        assert!(tile(&seq_codes, &splice_codes, 0).is_err());
        assert!(tile(&[], &[0i8; 5], 10).is_err());
    }
}
