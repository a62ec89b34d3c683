//! Error type shared by the transforms, the stream framing and the command line.
//!
//! Every variant is a caller contract violation or an I/O failure. Nothing here is retried
//! or corrected: the first failure is returned to the caller as is.

use std::io;

use thiserror::Error;

/// Errors returned by the Burrows-Wheeler and Move-To-Front stages.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A suffix array rank outside `0..len` was requested.
    #[error("rank {index} is out of range for a suffix array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The Burrows-Wheeler transform is undefined for a zero-length buffer.
    #[error("cannot transform an empty buffer")]
    EmptyInput,

    /// The key (`first`) handed to the inverse transform does not name a row of the column.
    #[error("key {first} does not address a column of length {len}")]
    InvalidFirst { first: u32, len: usize },

    /// The buffer is too long for its key to fit the 32-bit stream header.
    #[error("buffer of {0} bytes is too large for a 32-bit key")]
    BufferTooLarge(usize),

    /// The direction token was neither `-` (encode) nor `+` (decode).
    #[error("illegal direction '{0}', expected '-' to encode or '+' to decode")]
    InvalidMode(String),

    /// The requested stage is not one of `bwt`, `mtf` or `pipeline`.
    #[error("unknown transform '{0}', expected bwt, mtf or pipeline")]
    InvalidTransform(String),

    /// A byte was fed to a Move-To-Front coder whose alphabet does not contain it.
    #[error("symbol {0:#04x} is not part of the alphabet")]
    UnknownSymbol(u8),

    /// A Move-To-Front rank points past the end of the alphabet.
    #[error("rank {rank} is out of range for an alphabet of {len} symbols")]
    RankOutOfRange { rank: u8, len: usize },

    /// A custom Move-To-Front alphabet lists the same symbol twice.
    #[error("symbol {0:#04x} appears more than once in the alphabet")]
    DuplicateSymbol(u8),

    /// A framed stream ended before its header was complete.
    #[error("stream truncated: expected {expected} header bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<TransformError> for io::Error {
    fn from(err: TransformError) -> io::Error {
        match err {
            TransformError::Io(err) => err,
            TransformError::Truncated { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            TransformError::InvalidFirst { .. }
            | TransformError::RankOutOfRange { .. }
            | TransformError::UnknownSymbol(_) => io::Error::new(io::ErrorKind::InvalidData, err),
            _ => io::Error::new(io::ErrorKind::InvalidInput, err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::TransformError;
    use std::io;

    #[test]
    fn io_kind_test() {
        let err: io::Error = TransformError::InvalidMode("*".to_string()).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err: io::Error = TransformError::Truncated { expected: 4, found: 1 }.into();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let err: io::Error = TransformError::InvalidFirst { first: 9, len: 3 }.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn io_passthrough_test() {
        let err: io::Error =
            TransformError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone")).into();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn message_test() {
        let err = TransformError::IndexOutOfRange { index: 12, len: 12 };
        assert_eq!(
            err.to_string(),
            "rank 12 is out of range for a suffix array of length 12"
        );
    }
}
