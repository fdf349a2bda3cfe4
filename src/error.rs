use std::fmt;
use thiserror::Error;

/// A convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The text encoding a decode operation was reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8 byte sequences.
    Utf8,
    /// UTF-16 code-unit sequences.
    Utf16,
    /// UTF-32 scalar sequences.
    Utf32,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf32 => "UTF-32",
        };
        f.write_str(name)
    }
}

/// Errors produced by this crate.
///
/// Single-character decoding is strict and reports [`Error::InvalidEncoding`];
/// whole-sequence decoding never fails and instead skips malformed characters.
/// Spell application is total over well-formed sequences and has no error path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The supplied bytes or code units do not form one well-formed encoded
    /// character: truncated multi-byte sequence, invalid continuation byte,
    /// overlong encoding, unpaired surrogate, or an out-of-range scalar value.
    #[error("invalid {encoding} data: {reason}")]
    InvalidEncoding {
        /// The encoding being decoded.
        encoding: Encoding,
        /// A short static description of what was malformed.
        reason: &'static str,
    },
    /// Checked element access past the end of a sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The sequence length at the time of access.
        len: usize,
    },
}

impl Error {
    pub(crate) fn invalid(encoding: Encoding, reason: &'static str) -> Self {
        Error::InvalidEncoding { encoding, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid(Encoding::Utf8, "truncated sequence");
        assert_eq!("invalid UTF-8 data: truncated sequence", err.to_string());

        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            "index 7 out of range for sequence of length 3",
            err.to_string()
        );
    }
}
