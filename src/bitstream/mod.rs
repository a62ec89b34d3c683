//! The bitstream module forms the I/O subsystem for the transform library.
//!
//! The transforms themselves work on whole in-memory buffers. This module moves those buffers
//! on and off a stream: the Burrows-Wheeler output is framed as a 32-bit big-endian key ahead of
//! the column, while Move-To-Front streams are written bare.
//!
//! Malformed streams (a header cut short) are caught here, so the transforms never see a
//! partial buffer.
//!
pub mod frame;
