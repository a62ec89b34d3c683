//! Frame: reads and writes the byte layout the transforms exchange on a stream.
//!
//! A framed stream is a 32-bit big-endian key followed by the payload bytes; the payload length
//! is whatever remains of the stream. Unframed streams are just the payload.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

use std::io::{self, Read, Write};

use log::{error, trace};

use crate::error::TransformError;

/// Size of the key that leads a framed stream.
pub const HEADER_SIZE: usize = 4;

/// Reads a framed or unframed stream into memory.
#[derive(Debug)]
pub struct FrameReader<R> {
    source: R,
}

impl<R: Read> FrameReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the 32-bit key. Fails if the stream ends before all four bytes arrive.
    pub fn key(&mut self) -> Result<u32, TransformError> {
        let mut header = [0_u8; HEADER_SIZE];
        let mut found = 0;
        while found < HEADER_SIZE {
            match self.source.read(&mut header[found..]) {
                Ok(0) => {
                    error!("Stream ended after {} of {} header bytes.", found, HEADER_SIZE);
                    return Err(TransformError::Truncated {
                        expected: HEADER_SIZE,
                        found,
                    });
                }
                Ok(size) => found += size,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        let key = u32::from_be_bytes(header);
        trace!("Read key {}.", key);
        Ok(key)
    }

    /// Read everything left on the stream.
    pub fn rest(&mut self) -> Result<Vec<u8>, TransformError> {
        let mut payload = Vec::new();
        self.source.read_to_end(&mut payload)?;
        trace!("Read {} payload bytes.", payload.len());
        Ok(payload)
    }

    /// Read a whole framed stream: key, then payload.
    pub fn read_frame(mut self) -> Result<(u32, Vec<u8>), TransformError> {
        let key = self.key()?;
        let payload = self.rest()?;
        Ok((key, payload))
    }
}

/// Writes a framed or unframed stream.
pub struct FrameWriter<W> {
    /// Handle to the output stream
    writer: W,
    /// Bytes written so far, for reporting.
    written: usize,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write the key as 4 big-endian bytes followed by the payload.
    pub fn write_frame(&mut self, key: u32, payload: &[u8]) -> Result<usize, TransformError> {
        self.writer.write_all(&key.to_be_bytes())?;
        self.writer.write_all(payload)?;
        self.written += HEADER_SIZE + payload.len();
        Ok(HEADER_SIZE + payload.len())
    }

    /// Write the payload with no header.
    pub fn write_raw(&mut self, payload: &[u8]) -> Result<usize, TransformError> {
        self.writer.write_all(payload)?;
        self.written += payload.len();
        Ok(payload.len())
    }

    /// Flush the stream and return the underlying writer.
    pub fn finish(mut self) -> Result<W, TransformError> {
        self.writer.flush()?;
        trace!("Wrote {} bytes.", self.written);
        Ok(self.writer)
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_frame_test() {
        let x = [0x00_u8, 0x00, 0x00, 0x03, b'A', b'R', b'D'].as_slice();
        let (key, payload) = FrameReader::new(x).read_frame().unwrap();
        assert_eq!(key, 3);
        assert_eq!(payload, b"ARD".to_vec());
    }

    #[test]
    fn big_endian_test() {
        let x = [0x01_u8, 0x02, 0x03, 0x04].as_slice();
        let mut fr = FrameReader::new(x);
        assert_eq!(fr.key().unwrap(), 0x0102_0304);
        assert!(fr.rest().unwrap().is_empty());
    }

    #[test]
    fn truncated_test() {
        let x = [0x00_u8, 0x01].as_slice();
        assert!(matches!(
            FrameReader::new(x).read_frame(),
            Err(TransformError::Truncated {
                expected: 4,
                found: 2
            })
        ));
        let x: &[u8] = &[];
        assert!(matches!(
            FrameReader::new(x).key(),
            Err(TransformError::Truncated { found: 0, .. })
        ));
    }

    #[test]
    fn write_frame_test() {
        let mut fw = FrameWriter::new(Vec::new());
        assert_eq!(fw.write_frame(3, b"ARD!RCAAAABB").unwrap(), 16);
        let out = fw.finish().unwrap();
        assert_eq!(
            out,
            vec![0x00, 0x00, 0x00, 0x03, 0x41, 0x52, 0x44, 0x21, 0x52, 0x43, 0x41, 0x41, 0x41, 0x41, 0x42, 0x42]
        );
    }

    #[test]
    fn write_raw_test() {
        let mut fw = FrameWriter::new(Vec::new());
        fw.write_raw(b"Hello").unwrap();
        fw.write_raw(b", world!").unwrap();
        assert_eq!(fw.written(), 13);
        assert_eq!(fw.finish().unwrap(), b"Hello, world!".to_vec());
    }
}
