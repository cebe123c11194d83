//! L-file reader (C2): sequential streaming reads and random single-byte
//! / bounded-block reads over the L-column file.
//!
//! Single-threaded, non-reentrant, as spec.md §4.2/§5 require: the file
//! descriptor's offset is repositioned by every random read, and no
//! state is assumed to persist between calls.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use crate::config::BLOCK_SIZE;
use crate::error::DecodeError;

pub struct LReader {
    file: File,
}

impl LReader {
    pub fn new(file: File) -> Self {
        Self { file }
    }

    /// Sequential read into `buf`, returning the number of bytes read
    /// (0 at EOF). Does not retry on partial reads itself — unlike the
    /// random-access methods below, a short sequential read is a
    /// meaningful signal (how many bytes this slab contains), so the
    /// caller (the index builder) drives the read loop.
    pub fn next_chunk(&mut self, buf: &mut [u8]) -> Result<usize, DecodeError> {
        debug_assert!(!buf.is_empty(), "next_chunk requires a positive-sized buffer");
        Ok(self.file.read(buf)?)
    }

    /// Reads exactly one byte at absolute offset `pos`.
    pub fn read_byte(&mut self, pos: u64) -> Result<u8, DecodeError> {
        let mut byte = [0u8; 1];
        self.read_exact_at(pos, &mut byte)?;
        Ok(byte[0])
    }

    /// Reads up to `BLOCK_SIZE` contiguous bytes starting at absolute
    /// offset `pos`, retrying short reads to completion (classical
    /// read-loop discipline per spec.md §5).
    pub fn read_block(&mut self, pos: u64, len: usize) -> Result<Vec<u8>, DecodeError> {
        debug_assert!(len as u64 <= BLOCK_SIZE);
        let mut buf = vec![0u8; len];
        self.read_exact_at(pos, &mut buf)?;
        Ok(buf)
    }

    fn read_exact_at(&mut self, pos: u64, buf: &mut [u8]) -> Result<(), DecodeError> {
        self.file.seek(SeekFrom::Start(pos))?;
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.file.read(&mut buf[filled..])?;
            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "short read past end of L-column file",
                )
                .into());
            }
            filled += n;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_with(contents: &[u8]) -> File {
        let mut f = tempfile::tempfile().unwrap();
        f.write_all(contents).unwrap();
        f.seek(SeekFrom::Start(0)).unwrap();
        f
    }

    #[test]
    fn reads_single_byte_at_offset() {
        let mut reader = LReader::new(temp_with(b"\nACGT"));
        assert_eq!(reader.read_byte(0).unwrap(), b'\n');
        assert_eq!(reader.read_byte(4).unwrap(), b'T');
    }

    #[test]
    fn reads_block_of_requested_length() {
        let mut reader = LReader::new(temp_with(b"\nACGTACGT"));
        let block = reader.read_block(1, 4).unwrap();
        assert_eq!(block, b"ACGT");
    }

    #[test]
    fn sequential_chunks_advance_position() {
        let mut reader = LReader::new(temp_with(b"\nACGT"));
        let mut buf = [0u8; 3];
        let n = reader.next_chunk(&mut buf).unwrap();
        assert_eq!(n, 3);
        assert_eq!(&buf[..n], b"\nAC");
        let n = reader.next_chunk(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"GT");
    }
}
