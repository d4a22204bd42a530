use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::models::GeneRecord;
use crate::utils::errors::ReadWriteError;

/// Reads [`GeneRecord`]s from a tab-separated annotation table
///
/// The reader is an iterator over parse results, one per data line, so
/// callers decide whether a defective row aborts the run or is skipped.
/// Header lines (`#`) and blank lines are not yielded at all.
///
/// # Examples
///
/// ```rust
/// use splicedata::annotation::Reader;
///
/// let table = b"# my annotation\n\
///     GENE\t0\tchr2\t+\t100\t119\t105,\t110,\tAAAACCCCGGGGTTTTAAAACCCCGGGG\n";
///
/// let mut reader = Reader::new(&table[..]);
/// let records = reader.records().unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].gene(), "GENE");
/// ```
pub struct Reader<R> {
    inner: BufReader<R>,
    line_number: usize,
}

impl Reader<File> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReadWriteError> {
        match File::open(path.as_ref()) {
            Ok(file) => Ok(Self::new(file)),
            Err(err) => Err(ReadWriteError::new(err)),
        }
    }
}

impl<R: std::io::Read> Reader<R> {
    /// Creates a new generic Reader for any `std::io::Read` object
    ///
    /// Use this method when you want to read from stdin or
    /// a remote source, e.g. via HTTP
    pub fn new(reader: R) -> Self {
        Reader {
            inner: BufReader::new(reader),
            line_number: 0,
        }
    }

    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Reader {
            inner: BufReader::with_capacity(capacity, reader),
            line_number: 0,
        }
    }

    /// Parses all remaining data lines, failing on the first defect
    pub fn records(&mut self) -> Result<Vec<GeneRecord>, ReadWriteError> {
        self.collect()
    }
}

impl<R: std::io::Read> Iterator for Reader<R> {
    type Item = Result<GeneRecord, ReadWriteError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = String::new();
            self.line_number += 1;
            match self.inner.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(ReadWriteError::new(err))),
            }
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Some(GeneRecord::from_str(line).map_err(|err| {
                ReadWriteError::new(format!("line {}: {}", self.line_number, err))
            }));
        }
    }
}
