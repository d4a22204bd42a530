use std::fmt;

use crate::utils::errors::SpliceError;

/// One-hot rows of the splice categories
///
/// Row order is Neither, Acceptor, Donor, Padding. Padding maps to the
/// zero vector, so label positions beyond the transcript's extent fire
/// no class.
pub const SPLICE_ONE_HOT: [[i8; 3]; 4] = [
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    [0, 0, 0],
];

/// The per-base splice class of a transcript position
///
/// `Donor` marks an intron start, `Acceptor` an intron end, both in
/// the gene's 5'→3' orientation, so the genomic role of a junction
/// boundary depends on the strand. `Padding` marks synthetic positions
/// past the real transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpliceSite {
    Neither,
    Acceptor,
    Donor,
    Padding,
}

impl SpliceSite {
    /// The integer category code of the splice class
    ///
    /// # Examples
    ///
    /// ```rust
    /// use splicedata::models::SpliceSite;
    ///
    /// assert_eq!(SpliceSite::Neither.code(), 0);
    /// assert_eq!(SpliceSite::Acceptor.code(), 1);
    /// assert_eq!(SpliceSite::Donor.code(), 2);
    /// assert_eq!(SpliceSite::Padding.code(), -1);
    /// ```
    pub fn code(self) -> i8 {
        match self {
            Self::Neither => 0,
            Self::Acceptor => 1,
            Self::Donor => 2,
            Self::Padding => -1,
        }
    }

    /// Creates a `SpliceSite` back from its category code
    pub fn from_code(code: i8) -> Result<Self, SpliceError> {
        match code {
            0 => Ok(Self::Neither),
            1 => Ok(Self::Acceptor),
            2 => Ok(Self::Donor),
            -1 => Ok(Self::Padding),
            _ => Err(SpliceError::new(format!("invalid splice code {}", code))),
        }
    }

    /// The one-hot row of the splice class
    ///
    /// # Examples
    ///
    /// ```rust
    /// use splicedata::models::SpliceSite;
    ///
    /// assert_eq!(SpliceSite::Donor.one_hot(), [0, 0, 1]);
    /// // padding positions fire no class
    /// assert_eq!(SpliceSite::Padding.one_hot(), [0, 0, 0]);
    /// ```
    pub fn one_hot(self) -> [i8; 3] {
        match self {
            Self::Neither => SPLICE_ONE_HOT[0],
            Self::Acceptor => SPLICE_ONE_HOT[1],
            Self::Donor => SPLICE_ONE_HOT[2],
            Self::Padding => SPLICE_ONE_HOT[3],
        }
    }
}

impl fmt::Display for SpliceSite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Neither => "neither",
                Self::Acceptor => "acceptor",
                Self::Donor => "donor",
                Self::Padding => "padding",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for s in [
            SpliceSite::Neither,
            SpliceSite::Acceptor,
            SpliceSite::Donor,
            SpliceSite::Padding,
        ] {
            assert_eq!(SpliceSite::from_code(s.code()).unwrap(), s);
        }
        assert!(SpliceSite::from_code(3).is_err());
        assert!(SpliceSite::from_code(-2).is_err());
    }

    #[test]
    fn test_one_hot_exactly_one_class() {
        assert_eq!(SpliceSite::Padding.one_hot().iter().sum::<i8>(), 0);
        for s in [SpliceSite::Neither, SpliceSite::Acceptor, SpliceSite::Donor] {
            let row = s.one_hot();
            assert_eq!(row.iter().sum::<i8>(), 1);
            assert_eq!(row[s.code() as usize], 1);
        }
    }
}
