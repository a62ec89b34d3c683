use std::io::{Read, Write};

use log::{debug, info};

use crate::bitstream::frame::{FrameReader, FrameWriter};
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::error::TransformError;
use crate::tools::cli::Transform;
use crate::tools::mtf::mtf_encode;

/// Burrows-Wheeler transform followed by move-to-front coding.
/// Returns the BWT key and the move-to-front ranks of the BWT column.
pub fn compress(text: &[u8]) -> Result<(u32, Vec<u8>), TransformError> {
    let (key, bwt) = bwt_encode(text)?;
    let codes = mtf_encode(&bwt);
    debug!(
        "{} of {} ranks are zero.",
        codes.iter().filter(|&&c| c == 0).count(),
        codes.len()
    );
    Ok((key, codes))
}

/// Read the whole input, run the encoding side of `transform`, and write the result.
/// Returns the number of bytes written.
pub fn encode_stream<R: Read, W: Write>(
    transform: Transform,
    reader: R,
    writer: W,
) -> Result<usize, TransformError> {
    let text = FrameReader::new(reader).rest()?;
    info!("Encoding {} bytes with {}.", text.len(), transform);

    let mut fw = FrameWriter::new(writer);
    match transform {
        Transform::Bwt => {
            let (key, bwt) = bwt_encode(&text)?;
            fw.write_frame(key, &bwt)?;
        }
        Transform::Mtf => {
            fw.write_raw(&mtf_encode(&text))?;
        }
        Transform::Pipeline => {
            let (key, codes) = compress(&text)?;
            fw.write_frame(key, &codes)?;
        }
    }
    let written = fw.written();
    fw.finish()?;
    Ok(written)
}
