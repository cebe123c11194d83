//! Index builder (C3), C-table (C4), occurrence oracle (C5), and L
//! lookup (C6).
//!
//! The streaming pass (`IndexTables::build`) unifies the original
//! `bwtdecode.c`'s special-cased "bootstrap" branch (`g == 0`) with its
//! general checkpoint/sample snapshot condition: since position 0 is
//! always a multiple of both `BLOCK_SIZE` and `FILE_BLOCK`, the general
//! condition `g % BLOCK_SIZE == 0 || g == N - 1` already covers it, so
//! both paths reduce to one loop, with no separately maintained write
//! -index counters — the Occ/Ls row is derived from `g` alone.

use crate::alphabet::{idx, SENTINEL};
use crate::config::{BLOCK_SIZE, FILE_BLOCK, SYMBOL_COUNT};
use crate::error::DecodeError;
use crate::reader::LReader;

/// Which checkpoint/sample row a given position `g` (0-based, within a
/// file of `n` total bytes) is written to, for a grid spaced every
/// `stride` bytes. Row 0 is reserved for `g == 0`; a final row is
/// appended for `g == n - 1` when that position doesn't already fall on
/// the regular grid. See DESIGN.md open-question 2 for why the final
/// row is a dedicated slot rather than always landing on the grid.
fn row_of(g: u64, n: u64, stride: u64) -> u64 {
    if g == 0 {
        return 0;
    }
    if g % stride == 0 {
        g / stride
    } else {
        debug_assert_eq!(g, n - 1);
        (n - 1) / stride + 1
    }
}

pub struct IndexTables {
    pub n: u64,
    pub t: u64,
    pub cnt: [u64; SYMBOL_COUNT],
    pub c_table: [u64; SYMBOL_COUNT],
    occ: Vec<u64>,
    occ_rows: u64,
    ls: Vec<u8>,
    ls_rows: u64,
}

impl IndexTables {
    /// Runs the single streaming pass (C3) over `reader`, whose
    /// underlying file is known to be `n` bytes long, producing the
    /// count table, checkpointed occurrence table, sparse L-sample,
    /// and sentinel position. Also derives the C-table (C4).
    pub fn build(reader: &mut LReader, n: u64) -> Result<Self, DecodeError> {
        if n == 0 {
            // No bytes means no sentinel; `n - 1` below would underflow.
            return Err(DecodeError::MissingSentinel);
        }

        let occ_rows = row_of(n - 1, n, BLOCK_SIZE) + 1;
        let ls_rows = row_of(n - 1, n, FILE_BLOCK) + 1;

        let mut cnt = [0u64; SYMBOL_COUNT];
        let mut occ = vec![0u64; SYMBOL_COUNT * occ_rows as usize];
        let mut ls = vec![0u8; ls_rows as usize];

        let mut t: Option<u64> = None;
        let mut g: u64 = 0;
        let mut buf = [0u8; crate::config::CHUNK_SIZE];

        loop {
            let read = reader.next_chunk(&mut buf)?;
            if read == 0 {
                break;
            }
            for &b in &buf[..read] {
                if b == SENTINEL {
                    if let Some(first) = t {
                        return Err(DecodeError::MultipleSentinels { first, second: g });
                    }
                    t = Some(g);
                }

                let sym_idx = idx(b, g)?;
                cnt[sym_idx] += 1;

                if g % BLOCK_SIZE == 0 || g == n - 1 {
                    let row = row_of(g, n, BLOCK_SIZE);
                    for (s, &c) in cnt.iter().enumerate() {
                        occ[s * occ_rows as usize + row as usize] = c;
                    }
                }
                if g % FILE_BLOCK == 0 || g == n - 1 {
                    let row = row_of(g, n, FILE_BLOCK);
                    ls[row as usize] = b;
                }

                g += 1;
            }
        }

        let t = t.ok_or(DecodeError::MissingSentinel)?;

        let mut c_table = [0u64; SYMBOL_COUNT];
        c_table[1] = cnt[0];
        for s in 2..SYMBOL_COUNT {
            c_table[s] = c_table[s - 1] + cnt[s - 1];
        }

        Ok(Self {
            n,
            t,
            cnt,
            c_table,
            occ,
            occ_rows,
            ls,
            ls_rows,
        })
    }

    fn occ_checkpoint(&self, s: usize, row: u64) -> u64 {
        self.occ[s * self.occ_rows as usize + row as usize]
    }

    /// Occurrence oracle (C5): `Occ(s, p)` = count of symbol `s` in
    /// `L[0..=p]`.
    pub fn occ(&self, reader: &mut LReader, s: usize, p: u64) -> Result<u64, DecodeError> {
        if p == self.n - 1 {
            let final_row = row_of(self.n - 1, self.n, BLOCK_SIZE);
            return Ok(self.occ_checkpoint(s, final_row));
        }

        let q = p / BLOCK_SIZE;
        let r = p % BLOCK_SIZE;
        if r == 0 {
            return Ok(self.occ_checkpoint(s, q));
        }

        let checkpoint_pos = q * BLOCK_SIZE;
        let scan_start = checkpoint_pos + 1;
        let scan_len = r as usize;
        let window = reader.read_block(scan_start, scan_len)?;
        let target = crate::alphabet::sym(s);
        let count = window.iter().filter(|&&b| b == target).count() as u64;
        Ok(self.occ_checkpoint(s, q) + count)
    }

    /// L lookup (C6): returns `L[i]` from the sparse sample when `i` is
    /// sampled, else falls back to a single random byte read.
    pub fn l_at(&self, reader: &mut LReader, i: u64) -> Result<u8, DecodeError> {
        if i == self.n - 1 {
            let row = row_of(self.n - 1, self.n, FILE_BLOCK);
            return Ok(self.ls[row as usize]);
        }
        if i % FILE_BLOCK == 0 {
            return Ok(self.ls[(i / FILE_BLOCK) as usize]);
        }
        reader.read_byte(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};

    fn build_from(bytes: &[u8]) -> (IndexTables, LReader) {
        let mut f = tempfile::tempfile().unwrap();
        f.write_all(bytes).unwrap();
        f.seek(SeekFrom::Start(0)).unwrap();
        let mut reader = LReader::new(f);
        let tables = IndexTables::build(&mut reader, bytes.len() as u64).unwrap();
        (tables, reader)
    }

    #[test]
    fn counts_and_sentinel_single_byte() {
        let (tables, _reader) = build_from(b"\n");
        assert_eq!(tables.cnt[0], 1);
        assert_eq!(tables.t, 0);
        assert_eq!(tables.c_table, [0, 1, 1, 1, 1]);
    }

    #[test]
    fn occ_matches_naive_prefix_count() {
        let l = b"A\nAA";
        let (tables, mut reader) = build_from(l);
        for p in 0..l.len() as u64 {
            for s in 0..SYMBOL_COUNT {
                let expected = l[..=p as usize]
                    .iter()
                    .filter(|&&b| b == crate::alphabet::sym(s))
                    .count() as u64;
                assert_eq!(tables.occ(&mut reader, s, p).unwrap(), expected);
            }
        }
    }

    #[test]
    fn final_occ_row_equals_total_counts() {
        let l = b"A\nAA";
        let (tables, mut reader) = build_from(l);
        let n = l.len() as u64;
        for s in 0..SYMBOL_COUNT {
            assert_eq!(tables.occ(&mut reader, s, n - 1).unwrap(), tables.cnt[s]);
        }
    }

    #[test]
    fn l_at_matches_raw_bytes() {
        let l = b"A\nAA";
        let (tables, mut reader) = build_from(l);
        for (i, &b) in l.iter().enumerate() {
            assert_eq!(tables.l_at(&mut reader, i as u64).unwrap(), b);
        }
    }

    #[test]
    fn checkpoint_boundary_row_is_exact() {
        // N-1 a multiple of BLOCK_SIZE: 65 bytes, positions 0..64.
        let mut l = vec![b'A'; 65];
        l[64] = b'\n';
        let (tables, mut reader) = build_from(&l);
        for s in 0..SYMBOL_COUNT {
            let expected = l.iter().filter(|&&b| b == crate::alphabet::sym(s)).count() as u64;
            assert_eq!(tables.occ(&mut reader, s, 64).unwrap(), expected);
        }
    }

    #[test]
    fn rejects_multiple_sentinels() {
        let err = {
            let mut f = tempfile::tempfile().unwrap();
            f.write_all(b"\n\n").unwrap();
            f.seek(SeekFrom::Start(0)).unwrap();
            let mut reader = LReader::new(f);
            IndexTables::build(&mut reader, 2).unwrap_err()
        };
        assert!(matches!(err, DecodeError::MultipleSentinels { first: 0, second: 1 }));
    }

    #[test]
    fn rejects_invalid_symbol() {
        let mut f = tempfile::tempfile().unwrap();
        f.write_all(b"\nX").unwrap();
        f.seek(SeekFrom::Start(0)).unwrap();
        let mut reader = LReader::new(f);
        let err = IndexTables::build(&mut reader, 2).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidSymbol { byte: b'X', offset: 1 }));
    }

    #[test]
    fn rejects_zero_length_input_without_underflow() {
        let f = tempfile::tempfile().unwrap();
        let mut reader = LReader::new(f);
        let err = IndexTables::build(&mut reader, 0).unwrap_err();
        assert!(matches!(err, DecodeError::MissingSentinel));
    }
}
