use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use ndarray_npy::NpzWriter;

use crate::dataset::TileWrite;
use crate::tile::Tile;
use crate::utils::errors::{ReadWriteError, SpliceError};

/// Writes [`Tile`]s into an npz archive
///
/// Every tile becomes two archive members, `X{key}` for the input
/// window and `Y{key}` for the label tile. The archive is only valid
/// after [`finish`](Writer::finish) has run.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use splicedata::dataset::{TileWrite, Writer};
/// use splicedata::encode::encode;
/// use splicedata::tests::records::{standard_record, TEST_CONTEXT};
/// use splicedata::tile::tile;
///
/// let (base_codes, splice_codes) = encode(&standard_record(), TEST_CONTEXT).unwrap();
/// let tiles = tile(&base_codes, &splice_codes, TEST_CONTEXT).unwrap();
///
/// let mut writer = Writer::new(Cursor::new(Vec::new()));
/// writer.write_tile(0, &tiles[0]).unwrap();
/// let archive = writer.finish().unwrap().into_inner();
/// assert!(!archive.is_empty());
/// ```
pub struct Writer<W: Write + Seek> {
    inner: NpzWriter<W>,
}

impl Writer<BufWriter<File>> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReadWriteError> {
        match File::create(path.as_ref()) {
            Ok(file) => Ok(Self::new(BufWriter::new(file))),
            Err(err) => Err(ReadWriteError::new(err)),
        }
    }
}

impl<W: Write + Seek> Writer<W> {
    /// Creates a new generic Writer for any `Write + Seek` object
    ///
    /// Use this method when you want to write to an in-memory buffer
    /// instead of a file
    pub fn new(writer: W) -> Self {
        Writer {
            inner: NpzWriter::new(writer),
        }
    }

    /// Finalizes the archive directory and returns the inner writer
    pub fn finish(self) -> Result<W, SpliceError> {
        Ok(self.inner.finish()?)
    }
}

impl<W: Write + Seek> TileWrite for Writer<W> {
    fn write_tile(&mut self, key: u64, tile: &Tile) -> Result<(), SpliceError> {
        self.inner.add_array(format!("X{}", key), &tile.x)?;
        self.inner.add_array(format!("Y{}", key), &tile.y)?;
        Ok(())
    }
}
