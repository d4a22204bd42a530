use core::str::FromStr;
use std::fmt;

use crate::utils::errors::SpliceError;

/// The genomic strand of a gene
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    /// Returns true for the forward (`+`) strand
    pub fn forward(&self) -> bool {
        matches!(self, Strand::Plus)
    }
}

impl FromStr for Strand {
    type Err = SpliceError;

    /// # Examples
    ///
    /// ```rust
    /// use splicedata::models::Strand;
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Strand::from_str("+").unwrap(), Strand::Plus);
    /// assert_eq!(Strand::from_str("-").unwrap(), Strand::Minus);
    /// assert!(Strand::from_str(".").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            _ => Err(SpliceError::new(format!("invalid strand {}", s))),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strand::Plus => "+",
                Strand::Minus => "-",
            }
        )
    }
}
