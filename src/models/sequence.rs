use core::str::FromStr;
use std::convert::TryFrom;
use std::fmt;

use crate::utils::errors::SpliceError;

/// One-hot rows of the base categories, indexed by [`Nucleotide::code`]
///
/// Row order is N, A, C, G, T. `N` is the sentinel category and maps to
/// the zero vector, so no channel fires for sentinel positions.
pub const BASE_ONE_HOT: [[i8; 4]; 5] = [
    [0, 0, 0, 0],
    [1, 0, 0, 0],
    [0, 1, 0, 0],
    [0, 0, 1, 0],
    [0, 0, 0, 1],
];

/// Nucleotide is a single DNA nucleotide (N A C G T)
///
/// `N` doubles as the sentinel base used for neutral padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nucleotide {
    N,
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Creates a `Nucleotide` from a character, case-insensitive
    pub fn new(c: &char) -> Result<Self, SpliceError> {
        match c {
            'n' | 'N' => Ok(Self::N),
            'a' | 'A' => Ok(Self::A),
            'c' | 'C' => Ok(Self::C),
            'g' | 'G' => Ok(Self::G),
            't' | 'T' => Ok(Self::T),
            _ => Err(SpliceError::new(format!("invalid nucleotide {}", c))),
        }
    }

    /// The integer category code of the base
    ///
    /// # Examples
    ///
    /// ```rust
    /// use splicedata::models::Nucleotide;
    ///
    /// assert_eq!(Nucleotide::N.code(), 0);
    /// assert_eq!(Nucleotide::A.code(), 1);
    /// assert_eq!(Nucleotide::T.code(), 4);
    /// ```
    pub fn code(self) -> u8 {
        match self {
            Self::N => 0,
            Self::A => 1,
            Self::C => 2,
            Self::G => 3,
            Self::T => 4,
        }
    }

    /// Creates a `Nucleotide` back from its category code
    pub fn from_code(code: u8) -> Result<Self, SpliceError> {
        match code {
            0 => Ok(Self::N),
            1 => Ok(Self::A),
            2 => Ok(Self::C),
            3 => Ok(Self::G),
            4 => Ok(Self::T),
            _ => Err(SpliceError::new(format!("invalid base code {}", code))),
        }
    }

    /// The one-hot row of the base
    ///
    /// # Examples
    ///
    /// ```rust
    /// use splicedata::models::Nucleotide;
    ///
    /// assert_eq!(Nucleotide::C.one_hot(), [0, 1, 0, 0]);
    /// // the sentinel base fires no channel
    /// assert_eq!(Nucleotide::N.one_hot(), [0, 0, 0, 0]);
    /// ```
    pub fn one_hot(self) -> [i8; 4] {
        BASE_ONE_HOT[self.code() as usize]
    }

    /// Returns the complementary nucleotide
    pub fn complement(&self) -> Self {
        match self {
            Self::A => Self::T,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::T => Self::A,
            Self::N => Self::N,
        }
    }
}

impl FromStr for Nucleotide {
    type Err = SpliceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" | "N" => Ok(Self::N),
            "a" | "A" => Ok(Self::A),
            "c" | "C" => Ok(Self::C),
            "g" | "G" => Ok(Self::G),
            "t" | "T" => Ok(Self::T),
            _ => Err(SpliceError::new(format!("invalid nucleotide {}", s))),
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::N => "N",
                Self::A => "A",
                Self::C => "C",
                Self::G => "G",
                Self::T => "T",
            }
        )
    }
}

impl TryFrom<&char> for Nucleotide {
    type Error = SpliceError;
    fn try_from(c: &char) -> Result<Self, Self::Error> {
        Nucleotide::new(c)
    }
}

impl From<&Nucleotide> for char {
    fn from(n: &Nucleotide) -> Self {
        match n {
            Nucleotide::N => 'N',
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

/// A DNA sequence consisting of Nucleotides.
///
/// It provides the utility methods the encoder needs, like
/// [`reverse_complement`](`Sequence::reverse_complement`) and
/// [`push_n`](`Sequence::push_n`) for sentinel runs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    sequence: Vec<Nucleotide>,
}

impl FromStr for Sequence {
    type Err = SpliceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sequence: Vec<Nucleotide> = Vec::with_capacity(s.len());
        for c in s.chars() {
            sequence.push(Nucleotide::new(&c)?)
        }
        Ok(Self { sequence })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::with_capacity(self.len());
        for n in &self.sequence {
            s.push(n.into())
        }
        write!(f, "{}", s)
    }
}

impl Sequence {
    /// Creates a new sequence
    ///
    /// # Examples
    ///
    /// ```rust
    /// use splicedata::models::Sequence;
    ///
    /// let seq = Sequence::new();
    /// assert_eq!(seq.len(), 0)
    /// ```
    pub fn new() -> Self {
        Sequence {
            sequence: Vec::new(),
        }
    }

    /// Creates a new sequence with the specified capacity
    ///
    /// Use this method if you know in advance the final size of the
    /// Sequence. The returned Sequence has a zero length.
    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            sequence: Vec::with_capacity(capacity),
        }
    }

    /// Returns the length of the Sequence
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the Sequence contains no Nucleotides.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Appends a Nucleotide to the back of the Sequence.
    ///
    /// # Examples
    /// ```rust
    /// use splicedata::models::{Nucleotide, Sequence};
    /// use std::str::FromStr;
    ///
    /// let mut seq = Sequence::from_str("AC").unwrap();
    /// seq.push(Nucleotide::T);
    /// assert_eq!(seq.to_string(), "ACT".to_string());
    /// ```
    pub fn push(&mut self, n: Nucleotide) {
        self.sequence.push(n);
    }

    /// Appends a run of `count` sentinel (`N`) bases.
    ///
    /// # Examples
    /// ```rust
    /// use splicedata::models::Sequence;
    ///
    /// let mut seq = Sequence::new();
    /// seq.push_n(3);
    /// assert_eq!(seq.to_string(), "NNN".to_string());
    /// ```
    pub fn push_n(&mut self, count: usize) {
        for _ in 0..count {
            self.sequence.push(Nucleotide::N);
        }
    }

    /// Changes `Self` to the complementary sequence
    ///
    /// # Examples
    /// ```rust
    /// use splicedata::models::Sequence;
    /// use std::str::FromStr;
    ///
    /// let mut seq = Sequence::from_str("AC").unwrap();
    /// seq.complement();
    /// assert_eq!(seq.to_string(), "TG".to_string());
    /// ```
    pub fn complement(&mut self) {
        for n in &mut self.sequence {
            *n = n.complement();
        }
    }

    /// Reverses the `Sequence`, in place
    ///
    /// # Examples
    /// ```rust
    /// use splicedata::models::Sequence;
    /// use std::str::FromStr;
    ///
    /// let mut seq = Sequence::from_str("AC").unwrap();
    /// seq.reverse();
    /// assert_eq!(seq.to_string(), "CA".to_string());
    /// ```
    pub fn reverse(&mut self) {
        self.sequence.reverse()
    }

    /// Changes `Self` into the reverse complement sequence
    ///
    /// This puts a reverse-strand gene into its biological 5'→3'
    /// orientation.
    ///
    /// # Examples
    /// ```rust
    /// use splicedata::models::Sequence;
    /// use std::str::FromStr;
    ///
    /// let mut seq = Sequence::from_str("AAC").unwrap();
    /// seq.reverse_complement();
    /// assert_eq!(seq.to_string(), "GTT".to_string());
    /// ```
    pub fn reverse_complement(&mut self) {
        self.reverse();
        self.complement();
    }

    /// Returns the Sequence as a vector of base category codes
    ///
    /// # Examples
    /// ```rust
    /// use splicedata::models::Sequence;
    /// use std::str::FromStr;
    ///
    /// let seq = Sequence::from_str("NACGT").unwrap();
    /// assert_eq!(seq.codes(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn codes(&self) -> Vec<u8> {
        self.sequence.iter().map(|n| n.code()).collect()
    }
}

impl AsRef<[Nucleotide]> for Sequence {
    fn as_ref(&self) -> &[Nucleotide] {
        &self.sequence
    }
}

/// implementing slice indexing operations for Sequence
/// so that seq[1..3] operations are possible.
impl<Idx> std::ops::Index<Idx> for Sequence
where
    Idx: std::slice::SliceIndex<[Nucleotide]>,
{
    type Output = Idx::Output;

    fn index(&self, idx: Idx) -> &Self::Output {
        &self.sequence[idx]
    }
}
