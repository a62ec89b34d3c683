//! The compression module runs the transform stages for the binary and for library callers.
//!
//! Encoding happens in the following steps:
//! - Burrow Wheeler Transform: Sort the circular rotations of the buffer and keep the last column, so that
//!   bytes sharing a context end up next to each other.
//! - Move To Front transform: Replace each byte by its rank in a recently-used list, turning those runs
//!   into runs of small values (mostly zeros).
//!
//! The result is ready for an entropy coder, which lives outside this crate.
//!
//! Decoding follows the inverse of the encoding process.
//! - MTF transform: Convert from the Move-To-Front indecies to the symbols represented by the indecies.
//! - BWT reversal: Restore the original data from the BWT transform.
//!

pub mod compress;
pub mod decompress;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use log::info;

use crate::error::TransformError;
use crate::tools::cli::{Mode, TransformOpts};

/// Run the transform described by opts, from its input to its output.
/// Returns the number of bytes written.
pub fn transform(opts: &TransformOpts) -> Result<usize, TransformError> {
    let reader: Box<dyn Read> = match &opts.input {
        Some(fname) => Box::new(BufReader::new(File::open(fname)?)),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &opts.output {
        Some(fname) => Box::new(BufWriter::new(File::create(fname)?)),
        None => Box::new(io::stdout().lock()),
    };

    let written = match opts.mode {
        Mode::Encode => compress::encode_stream(opts.transform, reader, writer)?,
        Mode::Decode => decompress::decode_stream(opts.transform, reader, writer)?,
    };
    info!("Wrote {} bytes.", written);
    Ok(written)
}
