//! Fixture gene records

use crate::models::{GeneRecord, Strand};

/// Context/tile length used by the fixture records
pub const TEST_CONTEXT: usize = 10;

fn fixture_seq() -> String {
    // 10 bases of genomic flank, 50 transcript bases, 10 bases of flank
    let flank = "G".repeat(TEST_CONTEXT);
    let inner = "ACGTACGTAC".repeat(5);
    format!("{flank}{inner}{flank}")
}

/// A forward-strand record on chr2 (train split)
///
/// Transcript 100–149 (50 bases), one intron from 110 to 140, so the
/// donor lands at transcript offset 10 and the acceptor at offset 40.
///
/// # Examples
///
/// ```rust
/// use splicedata::tests::records::standard_record;
///
/// let record = standard_record();
/// assert_eq!(record.tx_length(), 50);
/// assert_eq!(record.seq().len(), 70);
/// ```
pub fn standard_record() -> GeneRecord {
    GeneRecord::new(
        "Test-Gene".to_string(),
        "0".to_string(),
        "chr2".to_string(),
        Strand::Plus,
        100,
        149,
        vec![110],
        vec![140],
        fixture_seq(),
    )
}

/// The mirror of [`standard_record`]: reverse strand, on chr1 (test
/// split), identical boundaries and junctions
pub fn reverse_record() -> GeneRecord {
    GeneRecord::new(
        "Test-Gene-Rev".to_string(),
        "0".to_string(),
        "chr1".to_string(),
        Strand::Minus,
        100,
        149,
        vec![110],
        vec![140],
        fixture_seq(),
    )
}

/// Renders a record back into one annotation-table row
pub fn annotation_line(record: &GeneRecord) -> String {
    let join = |coords: &[u32]| {
        coords
            .iter()
            .map(|c| format!("{c},"))
            .collect::<String>()
    };
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.gene(),
        record.paralog(),
        record.chrom(),
        record.strand(),
        record.tx_start(),
        record.tx_end(),
        join(record.jn_start()),
        join(record.jn_end()),
        record.seq(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fixture_line_roundtrip() {
        let record = standard_record();
        let parsed = GeneRecord::from_str(&annotation_line(&record)).unwrap();
        assert_eq!(parsed, record);
    }
}
