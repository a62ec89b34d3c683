use super::circular_suffix_array::CircularSuffixArray;
use crate::error::TransformError;
use crate::tools::freq_count::freqs;
use log::{debug, error, info};

/// Burrows-Wheeler-Transform. Sorts the circular suffixes of the input and returns the key
/// (the rank at which the unrotated input landed) and the last column of the sorted rotations.
///
/// The column is a permutation of the input bytes. An empty input is rejected.
pub fn bwt_encode(text: &[u8]) -> Result<(u32, Vec<u8>), TransformError> {
    if text.is_empty() {
        error!("Refusing to transform an empty buffer.");
        return Err(TransformError::EmptyInput);
    }
    info!("Encoding {} bytes with the circular suffix array.", text.len());

    let csa = CircularSuffixArray::new(text);
    let end = text.len();

    // Get key and BWT output
    let mut key = 0;
    let mut bwt = vec![0; end];
    for (rank, &offset) in csa.as_slice().iter().enumerate() {
        if offset == 0 {
            key = rank;
            bwt[rank] = text[end - 1];
        } else {
            bwt[rank] = text[offset - 1];
        }
    }
    let key = u32::try_from(key).map_err(|_| TransformError::BufferTooLarge(end))?;
    debug!("Key is {}.", key);

    Ok((key, bwt))
}

/// Decode a Burrows-Wheeler-Transform.
///
/// A stable counting sort of the column gives the first column of the sorted rotations, and
/// for each sorted row the column position its successor came from. Following that chain
/// from the key walks the original buffer front to back.
pub fn bwt_decode(key: u32, bwt_in: &[u8]) -> Result<Vec<u8>, TransformError> {
    let end = bwt_in.len();
    if end == 0 {
        error!("Refusing to decode an empty buffer.");
        return Err(TransformError::EmptyInput);
    }
    if key as usize >= end {
        error!("Key {} does not fit a block of {} bytes.", key, end);
        return Err(TransformError::InvalidFirst {
            first: key,
            len: end,
        });
    }
    info!("Decoding {} bytes.", end);

    // Convert frequency count to a cumulative sum of frequencies. starts[c] is the first row
    // of the sorted matrix beginning with byte c; starts[256] == end.
    let freq = freqs(bwt_in);
    let mut starts = [0_usize; 257];
    for c in 0..256 {
        starts[c + 1] = starts[c] + freq[c] as usize;
    }

    // Walking the column in order keeps equal bytes in their original relative order.
    // That stability is what makes next[] chain rows correctly.
    let mut sorted = vec![0_u8; end];
    let mut next = vec![0_usize; end];
    for (i, &c) in bwt_in.iter().enumerate() {
        let target = starts[c as usize];
        sorted[target] = c;
        next[target] = i;
        starts[c as usize] += 1;
    }

    let mut idx = key as usize;
    let mut text = Vec::with_capacity(end);
    text.push(sorted[idx]);
    for _ in 1..end {
        idx = next[idx];
        text.push(sorted[idx]);
    }

    Ok(text)
}
