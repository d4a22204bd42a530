#![doc = include_str!("../README.md")]

pub mod annotation;
pub mod dataset;
pub mod encode;
pub mod models;
pub mod tests;
pub mod tile;
pub mod utils;

use std::path::Path;

use crate::dataset::{DatasetBuilder, DatasetSummary, Split, Writer};
use crate::utils::errors::SpliceError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context length `L` of the production datasets, in bases
///
/// Every label tile covers `L` positions and every input window
/// `3 * L` bases.
pub const CONTEXT_LENGTH: usize = 5000;

/// Builds one dataset archive from an annotation table
///
/// Reads the table at `input`, keeps the genes of `split`, and writes
/// their tiles into an npz archive at `output`. This is the end-to-end
/// path with the production context length; compose
/// [`annotation::Reader`], [`DatasetBuilder`] and [`dataset::Writer`]
/// directly for anything more specific.
pub fn create_dataset<P: AsRef<Path>>(
    input: P,
    split: Split,
    output: P,
) -> Result<DatasetSummary, SpliceError> {
    let records = annotation::Reader::from_file(input)?.records()?;
    let mut writer = Writer::from_file(output)?;
    let summary = DatasetBuilder::new(split).process(&records, &mut writer)?;
    writer.finish()?;
    Ok(summary)
}
