//! Burrows-Wheeler and Move-To-Front transforms, the two reversible stages that sit in front of the
//! entropy coder in a block-sorting compressor such as bzip2.
//!
//! Both stages work on whole in-memory buffers and keep no state between calls.
//!
//! Basic usage:
//!
//! ```
//! use bwt_mtf::{bwt_decode, bwt_encode, mtf_decode, mtf_encode};
//!
//! let (key, column) = bwt_encode(b"ABRACADABRA!").unwrap();
//! assert_eq!(key, 3);
//! assert_eq!(column, b"ARD!RCAAAABB");
//!
//! let ranks = mtf_encode(&column);
//! assert_eq!(bwt_decode(key, &mtf_decode(&ranks)).unwrap(), b"ABRACADABRA!");
//! ```
//!
//! The binary wraps the same calls: `bwt-mtf - < abra.txt | bwt-mtf +`.
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;

pub use bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
pub use bwt_algorithms::circular_suffix_array::CircularSuffixArray;
pub use compression::compress::compress;
pub use compression::decompress::decompress;
pub use error::TransformError;
pub use tools::mtf::{mtf_decode, mtf_encode, MoveToFront};
