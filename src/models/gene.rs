use core::str::FromStr;
use std::fmt;

use crate::models::Strand;
use crate::utils::errors::RecordError;

/// One row of the annotation table: a gene with its transcript
/// boundaries, intron junction boundaries and raw sequence
///
/// Coordinates are genomic, inclusive, with `tx_start <= tx_end`. The
/// sequence is expected to carry a genomic flank of the context length
/// on each side of the transcript; the length is validated against the
/// context by the encoder, not at parse time, because the record itself
/// does not know the context width.
///
/// # Examples
///
/// ```rust
/// use splicedata::models::GeneRecord;
/// use std::str::FromStr;
///
/// let line = "GENE\t0\tchr2\t+\t100\t119\t105,\t110,\tAAAACCCCGGGGTTTTAAAACCCCGGGG";
/// let record = GeneRecord::from_str(line).unwrap();
/// assert_eq!(record.gene(), "GENE");
/// assert_eq!(record.tx_length(), 20);
/// assert_eq!(record.jn_start(), &[105]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GeneRecord {
    gene: String,
    paralog: String,
    chrom: String,
    strand: Strand,
    tx_start: u32,
    tx_end: u32,
    jn_start: Vec<u32>,
    jn_end: Vec<u32>,
    seq: String,
}

impl GeneRecord {
    /// Creates a record from its parts
    ///
    /// Mostly useful for tests; annotation tables are parsed with
    /// [`FromStr`] or via [`crate::annotation::Reader`].
    #[allow(clippy::too_many_arguments)]
    pub fn new<S: Into<String>>(
        gene: S,
        paralog: S,
        chrom: S,
        strand: Strand,
        tx_start: u32,
        tx_end: u32,
        jn_start: Vec<u32>,
        jn_end: Vec<u32>,
        seq: S,
    ) -> Self {
        GeneRecord {
            gene: gene.into(),
            paralog: paralog.into(),
            chrom: chrom.into(),
            strand,
            tx_start,
            tx_end,
            jn_start,
            jn_end,
            seq: seq.into(),
        }
    }

    pub fn gene(&self) -> &str {
        &self.gene
    }

    pub fn paralog(&self) -> &str {
        &self.paralog
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// First genomic position of the transcript (inclusive)
    pub fn tx_start(&self) -> u32 {
        self.tx_start
    }

    /// Last genomic position of the transcript (inclusive)
    pub fn tx_end(&self) -> u32 {
        self.tx_end
    }

    /// Genomic start coordinates of the introns
    pub fn jn_start(&self) -> &[u32] {
        &self.jn_start
    }

    /// Genomic end coordinates of the introns
    pub fn jn_end(&self) -> &[u32] {
        &self.jn_end
    }

    /// The raw nucleotide sequence, including the genomic flank
    pub fn seq(&self) -> &str {
        &self.seq
    }

    /// Number of bases of the transcript itself, without any flank
    pub fn tx_length(&self) -> usize {
        (self.tx_end - self.tx_start + 1) as usize
    }

    /// Identity of the record, used in error messages and logs
    pub fn label(&self) -> String {
        format!(
            "{} ({}:{}-{})",
            self.gene, self.chrom, self.tx_start, self.tx_end
        )
    }
}

impl fmt::Display for GeneRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn parse_coord(token: &str, record: &str) -> Result<u32, RecordError> {
    token
        .parse::<u32>()
        .map_err(|_| RecordError::invalid_coord(record, token))
}

/// Parses a comma-separated coordinate list, discarding the final token
///
/// The annotation format terminates every list with a trailing comma,
/// so the last token after splitting is an empty sentinel.
fn parse_coordinate_list(field: &str, record: &str) -> Result<Vec<u32>, RecordError> {
    let tokens: Vec<&str> = field.split(',').collect();
    let mut coords = Vec::with_capacity(tokens.len().saturating_sub(1));
    for token in &tokens[..tokens.len() - 1] {
        coords.push(parse_coord(token, record)?);
    }
    Ok(coords)
}

impl FromStr for GeneRecord {
    type Err = RecordError;

    /// Parses one tab-separated annotation row with the columns
    /// `gene paralog chrom strand tx_start tx_end jn_start jn_end seq`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() != 9 {
            return Err(RecordError::schema(
                cols.first().copied().unwrap_or("<empty>"),
                format!("expected 9 columns, found {}", cols.len()),
            ));
        }

        let gene = cols[0];
        let chrom = cols[2];
        let context = format!("{} ({})", gene, chrom);

        let strand =
            Strand::from_str(cols[3]).map_err(|_| RecordError::invalid_strand(&context, cols[3]))?;
        let tx_start = parse_coord(cols[4], &context)?;
        let tx_end = parse_coord(cols[5], &context)?;

        let label = format!("{} ({}:{}-{})", gene, chrom, tx_start, tx_end);
        if tx_start > tx_end {
            return Err(RecordError::schema(
                &label,
                format!("tx_start {} greater than tx_end {}", tx_start, tx_end),
            ));
        }

        Ok(GeneRecord {
            gene: gene.to_string(),
            paralog: cols[1].to_string(),
            chrom: chrom.to_string(),
            strand,
            tx_start,
            tx_end,
            jn_start: parse_coordinate_list(cols[6], &label)?,
            jn_end: parse_coordinate_list(cols[7], &label)?,
            seq: cols[8].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::RecordErrorKind;

    fn line(strand: &str, jn_start: &str, jn_end: &str) -> String {
        format!("GENE\t0\tchr2\t{strand}\t100\t119\t{jn_start}\t{jn_end}\tACGT")
    }

    #[test]
    fn test_parse_record() {
        let record = GeneRecord::from_str(&line("+", "105,110,", "108,115,")).unwrap();
        assert_eq!(record.gene(), "GENE");
        assert_eq!(record.paralog(), "0");
        assert_eq!(record.chrom(), "chr2");
        assert_eq!(record.strand(), Strand::Plus);
        assert_eq!(record.tx_start(), 100);
        assert_eq!(record.tx_end(), 119);
        assert_eq!(record.jn_start(), &[105, 110]);
        assert_eq!(record.jn_end(), &[108, 115]);
        assert_eq!(record.seq(), "ACGT");
        assert_eq!(record.label(), "GENE (chr2:100-119)");
    }

    #[test]
    fn test_trailing_sentinel_token_dropped() {
        // an empty field yields an empty list
        let record = GeneRecord::from_str(&line("-", "", "")).unwrap();
        assert!(record.jn_start().is_empty());
        assert!(record.jn_end().is_empty());

        // a lone comma encodes an empty token, which is not a coordinate
        let err = GeneRecord::from_str(&line("-", ",", ",")).unwrap_err();
        assert!(matches!(err.kind(), RecordErrorKind::InvalidCoord(_)));
    }

    #[test]
    fn test_wrong_column_count() {
        let err = GeneRecord::from_str("GENE\t0\tchr2\t+\t100\t119\t105,\t110,").unwrap_err();
        assert!(matches!(err.kind(), RecordErrorKind::Schema(_)));
    }

    #[test]
    fn test_invalid_strand() {
        let err = GeneRecord::from_str(&line(".", "105,", "110,")).unwrap_err();
        assert!(matches!(err.kind(), RecordErrorKind::InvalidStrand(_)));
        assert_eq!(err.record(), "GENE (chr2)");
    }

    #[test]
    fn test_invalid_junction_token() {
        let err = GeneRecord::from_str(&line("+", "105,abc,", "110,")).unwrap_err();
        assert!(matches!(err.kind(), RecordErrorKind::InvalidCoord(_)));
        assert_eq!(err.record(), "GENE (chr2:100-119)");
    }

    #[test]
    fn test_inverted_boundaries() {
        let err =
            GeneRecord::from_str("GENE\t0\tchr2\t+\t119\t100\t105,\t110,\tACGT").unwrap_err();
        assert!(matches!(err.kind(), RecordErrorKind::Schema(_)));
    }
}
