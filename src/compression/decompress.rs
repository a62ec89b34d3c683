use std::io::{Read, Write};

use log::info;

use crate::bitstream::frame::{FrameReader, FrameWriter};
use crate::bwt_algorithms::bwt_sort::bwt_decode;
use crate::error::TransformError;
use crate::tools::cli::Transform;
use crate::tools::mtf::mtf_decode;

/// Undo `compress`: move-to-front decode the ranks, then invert the Burrows-Wheeler transform.
pub fn decompress(key: u32, codes: &[u8]) -> Result<Vec<u8>, TransformError> {
    let bwt = mtf_decode(codes);
    bwt_decode(key, &bwt)
}

/// Read the whole input, run the decoding side of `transform`, and write the result.
/// Returns the number of bytes written.
pub fn decode_stream<R: Read, W: Write>(
    transform: Transform,
    reader: R,
    writer: W,
) -> Result<usize, TransformError> {
    let fr = FrameReader::new(reader);
    let mut fw = FrameWriter::new(writer);

    let text = match transform {
        Transform::Bwt => {
            let (key, bwt) = fr.read_frame()?;
            info!("Key is {}, decoding {} bytes.", key, bwt.len());
            bwt_decode(key, &bwt)?
        }
        Transform::Mtf => {
            let mut fr = fr;
            mtf_decode(&fr.rest()?)
        }
        Transform::Pipeline => {
            let (key, codes) = fr.read_frame()?;
            info!("Key is {}, decoding {} ranks.", key, codes.len());
            decompress(key, &codes)?
        }
    };

    fw.write_raw(&text)?;
    let written = fw.written();
    fw.finish()?;
    Ok(written)
}
