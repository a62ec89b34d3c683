//! The tools module provides the Move-To-Front stage and helper functions for the transform library.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Byte frequency count, used by the Burrows-Wheeler inverse.
//! - mtf: Move-To-Front encoding and decoding.
//!
pub mod cli;
pub mod freq_count;
pub mod mtf;
