//! Session (C11): gathers cnt, C-table, Occ, Ls, t, and the open `L`
//! file handle into a single owned value for the duration of one
//! decode, per spec.md §9 ("all mutable state ... should be gathered
//! into a single owned session value; no process-wide singletons").

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::max_input_len;
use crate::error::DecodeError;
use crate::index::IndexTables;
use crate::inverter;
use crate::reader::LReader;

/// Owns everything needed to invert one L-column: the built index
/// tables and the file handle random reads fall back to. Dropping a
/// `Session` closes the L file, satisfying spec.md §5's "release is
/// scoped to the session end on every exit path" without manual
/// cleanup.
pub struct Session {
    tables: IndexTables,
    reader: LReader,
}

impl Session {
    /// Opens `path`, checks its length against the configured capacity
    /// ceiling, and runs the streaming index-build pass (C3/C4) over it.
    pub fn build(path: &Path) -> Result<Self, DecodeError> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let limit = max_input_len();
        log::debug!("capacity check: len={len} limit={limit}");
        if len > limit {
            return Err(DecodeError::CapacityExceeded { len, limit });
        }

        let mut reader = LReader::new(file);
        let tables = IndexTables::build(&mut reader, len)?;

        log::debug!(
            "index built: n={} sentinel={} cnt={:?}",
            tables.n, tables.t, tables.cnt
        );

        Ok(Self { tables, reader })
    }

    /// Runs the LF-mapping reverse walk (C7), writing the decoded
    /// bytes in "reverse-line, reverse-order" form to `out`.
    pub fn invert<W: Write>(&mut self, out: W) -> Result<(), DecodeError> {
        inverter::invert(&self.tables, &mut self.reader, out)
    }
}
