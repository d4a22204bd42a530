//! Ready-made records for unit tests and doc examples
//!
//! The fixtures use a reduced context length of
//! [`records::TEST_CONTEXT`] (10 bases) so test arrays stay readable;
//! production data uses [`crate::CONTEXT_LENGTH`].

pub mod records;
