//! The bwt_algorithms module forms the critical sorting subsystem for the transform library.
//!
//! The Burrow-Wheeler Transform (BWT) alters the data in such a way that runs of similar bytes are more likely
//! to occur. This allows for more effective compression further down the line.
//!
//! The forward transform needs the sorted order of every circular rotation of the block, which the
//! circular suffix array provides with a three-way string quicksort. The inverse transform needs no sorting
//! of rotations at all: a stable counting sort of the transformed column is enough to chain the rows back
//! together.
//!
pub mod bwt_sort;
pub mod circular_suffix_array;
