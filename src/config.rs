//! Fixed sizing constants for the decoder, mirroring the `#define`s of
//! the original `bwtdecode.c`.

/// Size of an I/O slab used both for sequential L-column reads and for
/// the LF-inverter's output buffer.
pub const CHUNK_SIZE: usize = 4096;

/// `|Σ|`: the sentinel plus the four nucleotide symbols.
pub const SYMBOL_COUNT: usize = 5;

/// Checkpoint spacing for the occurrence table.
pub const BLOCK_SIZE: u64 = 64;

/// Sample spacing for the sparse L-column cache.
pub const FILE_BLOCK: u64 = 320;

/// Capacity ceiling: largest `N` this decoder will accept, expressed as
/// `MAX_TABLE_SIZE * BLOCK_SIZE` in the original. Kept as a startup
/// capacity check rather than a static allocation size (§3 EXPANSION).
pub const MAX_TABLE_SIZE: u64 = 235_000;

/// Capacity ceiling expressed in FILE_BLOCK units for the sparse sample.
pub const MAX_FILE_TABLE_SIZE: u64 = 46_880;

/// Largest L-column length this decoder will accept before its callers
/// hit `DecodeError::CapacityExceeded`.
pub fn max_input_len() -> u64 {
    (MAX_TABLE_SIZE * BLOCK_SIZE).min(MAX_FILE_TABLE_SIZE * FILE_BLOCK)
}
