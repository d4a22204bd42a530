//! Assemble training datasets from annotated gene records
//!
//! The builder filters records by chromosome split, encodes and tiles
//! each kept record, and hands every tile to a [`TileWrite`] sink under
//! a gap-free running key. The bundled sink is the npz
//! [`Writer`](crate::dataset::Writer); tests or other storage layers
//! can implement [`TileWrite`] themselves.

mod writer;

pub use crate::dataset::writer::Writer;

use core::str::FromStr;
use std::fmt;

use crate::encode::encode;
use crate::models::GeneRecord;
use crate::tile::{tile, Tile};
use crate::utils::errors::SpliceError;

/// Chromosomes whose genes end up in the training dataset
pub const TRAIN_CHROMOSOMES: [&str; 19] = [
    "chr2", "chr4", "chr6", "chr8", "chr10", "chr11", "chr12", "chr13", "chr14", "chr15", "chr16",
    "chr17", "chr18", "chr19", "chr20", "chr21", "chr22", "chrX", "chrY",
];

/// Chromosomes held out for the test dataset
pub const TEST_CHROMOSOMES: [&str; 5] = ["chr1", "chr3", "chr5", "chr7", "chr9"];

/// The two disjoint chromosome partitions
///
/// Genes on a chromosome outside both partitions belong to neither
/// dataset and are dropped.
///
/// # Examples
///
/// ```rust
/// use splicedata::dataset::Split;
///
/// assert!(Split::Train.contains("chr2"));
/// assert!(Split::Test.contains("chr1"));
/// assert!(!Split::Train.contains("chr1"));
/// assert!(!Split::Test.contains("chr2_alt"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// The chromosomes belonging to this partition
    pub fn chromosomes(&self) -> &'static [&'static str] {
        match self {
            Split::Train => &TRAIN_CHROMOSOMES,
            Split::Test => &TEST_CHROMOSOMES,
        }
    }

    /// `true` if `chrom` belongs to this partition
    ///
    /// The comparison is exact, so e.g. alternate-locus names like
    /// `chr1_KI270706v1_random` never match.
    pub fn contains(&self, chrom: &str) -> bool {
        self.chromosomes().contains(&chrom)
    }
}

impl FromStr for Split {
    type Err = SpliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Split::Train),
            "test" => Ok(Split::Test),
            _ => Err(SpliceError::new(format!(
                "invalid split '{}' (use 'train' or 'test')",
                s
            ))),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Test => write!(f, "test"),
        }
    }
}

/// What to do when a record fails to encode
///
/// Skipping keeps the running key gap-free: a skipped record simply
/// contributes no tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the whole run on the first defective record
    #[default]
    Abort,
    /// Log the defect and continue with the next record
    Skip,
}

/// Storage sink for finished training units
///
/// `key` is a gap-free running index across the whole dataset.
pub trait TileWrite {
    fn write_tile(&mut self, key: u64, tile: &Tile) -> Result<(), SpliceError>;
}

/// Counts of one dataset run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct DatasetSummary {
    /// Records encoded into tiles
    pub records_encoded: usize,
    /// Records on chromosomes outside the split
    pub records_dropped: usize,
    /// Defective records skipped under [`ErrorPolicy::Skip`]
    pub records_skipped: usize,
    /// Tiles handed to the sink
    pub tiles_written: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} records encoded into {} tiles ({} dropped, {} skipped)",
            self.records_encoded, self.tiles_written, self.records_dropped, self.records_skipped
        )
    }
}

/// Drives the record → tile → sink pipeline for one split
///
/// # Examples
///
/// ```rust
/// use splicedata::dataset::{DatasetBuilder, Split, TileWrite};
/// use splicedata::tests::records::{standard_record, TEST_CONTEXT};
/// use splicedata::tile::Tile;
///
/// struct Count(usize);
/// impl TileWrite for Count {
///     fn write_tile(&mut self, _: u64, _: &Tile) -> Result<(), splicedata::utils::errors::SpliceError> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let mut sink = Count(0);
/// let summary = DatasetBuilder::new(Split::Train)
///     .context_length(TEST_CONTEXT)
///     .process(&[standard_record()], &mut sink)
///     .unwrap();
/// assert_eq!(summary.tiles_written, 5);
/// assert_eq!(sink.0, 5);
/// ```
pub struct DatasetBuilder {
    split: Split,
    context: usize,
    policy: ErrorPolicy,
}

impl DatasetBuilder {
    pub fn new(split: Split) -> Self {
        DatasetBuilder {
            split,
            context: crate::CONTEXT_LENGTH,
            policy: ErrorPolicy::default(),
        }
    }

    /// Overrides the context length, mainly for tests
    pub fn context_length(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Encodes every record of the split and writes its tiles to `sink`
    ///
    /// Records are processed in input order and tiles keyed by a single
    /// running counter, so the same input always produces the same
    /// key→tile mapping.
    pub fn process<W: TileWrite>(
        &self,
        records: &[GeneRecord],
        sink: &mut W,
    ) -> Result<DatasetSummary, SpliceError> {
        let mut summary = DatasetSummary::default();
        let mut key: u64 = 0;

        for record in records {
            if !self.split.contains(record.chrom()) {
                log::debug!(
                    "dropping {}: {} not in the {} split",
                    record.label(),
                    record.chrom(),
                    self.split
                );
                summary.records_dropped += 1;
                continue;
            }

            let (base_codes, splice_codes) = match encode(record, self.context) {
                Ok(codes) => codes,
                Err(err) => match self.policy {
                    ErrorPolicy::Abort => return Err(SpliceError::from(err)),
                    ErrorPolicy::Skip => {
                        log::warn!("skipping record: {}", err);
                        summary.records_skipped += 1;
                        continue;
                    }
                },
            };

            let tiles = tile(&base_codes, &splice_codes, self.context)?;
            for t in &tiles {
                sink.write_tile(key, t)?;
                key += 1;
            }
            summary.records_encoded += 1;
            summary.tiles_written += tiles.len();
        }

        log::info!("{} dataset: {}", self.split, summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::records::{reverse_record, standard_record, TEST_CONTEXT};
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MemorySink {
        tiles: BTreeMap<u64, Tile>,
    }

    impl TileWrite for MemorySink {
        fn write_tile(&mut self, key: u64, tile: &Tile) -> Result<(), SpliceError> {
            self.tiles.insert(key, tile.clone());
            Ok(())
        }
    }

    fn builder(split: Split) -> DatasetBuilder {
        DatasetBuilder::new(split).context_length(TEST_CONTEXT)
    }

    #[test]
    fn test_train_split_keeps_chr2() {
        let records = vec![standard_record(), reverse_record()];
        let mut sink = MemorySink::default();
        let summary = builder(Split::Train).process(&records, &mut sink).unwrap();

        assert_eq!(summary.records_encoded, 1);
        assert_eq!(summary.records_dropped, 1);
        assert_eq!(summary.tiles_written, 5);
        assert_eq!(sink.tiles.len(), 5);
    }

    #[test]
    fn test_test_split_keeps_chr1() {
        let records = vec![standard_record(), reverse_record()];
        let mut sink = MemorySink::default();
        let summary = builder(Split::Test).process(&records, &mut sink).unwrap();

        assert_eq!(summary.records_encoded, 1);
        assert_eq!(summary.records_dropped, 1);
        assert_eq!(sink.tiles.len(), 5);
    }

    #[test]
    fn test_keys_are_gap_free_across_records() {
        let records = vec![standard_record(), standard_record()];
        let mut sink = MemorySink::default();
        builder(Split::Train).process(&records, &mut sink).unwrap();

        let keys: Vec<u64> = sink.tiles.keys().copied().collect();
        assert_eq!(keys, (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_abort_policy_fails_on_defect() {
        let broken = crate::models::GeneRecord::new(
            "Broken".to_string(),
            "0".to_string(),
            "chr2".to_string(),
            crate::models::Strand::Plus,
            100,
            149,
            vec![],
            vec![],
            "ACGT".to_string(),
        );
        let mut sink = MemorySink::default();
        let result = builder(Split::Train).process(&[broken], &mut sink);
        assert!(result.is_err());
    }

    #[test]
    fn test_skip_policy_keeps_keys_gap_free() {
        let broken = crate::models::GeneRecord::new(
            "Broken".to_string(),
            "0".to_string(),
            "chr2".to_string(),
            crate::models::Strand::Plus,
            100,
            149,
            vec![],
            vec![],
            "ACGT".to_string(),
        );
        let records = vec![standard_record(), broken, standard_record()];
        let mut sink = MemorySink::default();
        let summary = builder(Split::Train)
            .error_policy(ErrorPolicy::Skip)
            .process(&records, &mut sink)
            .unwrap();

        assert_eq!(summary.records_encoded, 2);
        assert_eq!(summary.records_skipped, 1);
        let keys: Vec<u64> = sink.tiles.keys().copied().collect();
        assert_eq!(keys, (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_same_input_same_tiles() {
        let records = vec![standard_record(), reverse_record()];
        let mut first = MemorySink::default();
        let mut second = MemorySink::default();
        builder(Split::Test).process(&records, &mut first).unwrap();
        builder(Split::Test).process(&records, &mut second).unwrap();
        assert_eq!(first.tiles, second.tiles);
    }

    #[test]
    fn test_split_partitions_are_disjoint() {
        for chrom in TRAIN_CHROMOSOMES {
            assert!(!Split::Test.contains(chrom));
        }
        for chrom in TEST_CHROMOSOMES {
            assert!(!Split::Train.contains(chrom));
        }
    }

    #[test]
    fn test_split_from_str() {
        assert_eq!(Split::from_str("train").unwrap(), Split::Train);
        assert_eq!(Split::from_str("test").unwrap(), Split::Test);
        assert!(Split::from_str("validation").is_err());
    }
}
