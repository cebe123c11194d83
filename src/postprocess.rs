//! Post-processor (C8): normalizes the LF inverter's "reverse-line,
//! reverse-order" output into forward-order text.
//!
//! The original `bwtdecode.c` shells out to `rev` and `tac` via
//! `system()` to get this effect (see `examples/original_source/
//! bwtdecode.c`'s `main`). Per SPEC_FULL.md's REDESIGN FLAGS, this
//! crate performs the same two passes in-process instead of spawning
//! external text utilities: each line's bytes are reversed, then the
//! order of lines is reversed, with each line carrying its own
//! trailing-newline flag through the reorder (the way `tac` treats a
//! trailing newline as part of the record it terminates).

use std::io::{Read, Write};

use crate::error::DecodeError;

/// Reverses line content, then line order, over the full contents of
/// `input`, writing the result to `output`.
pub fn normalize<R: Read, W: Write>(mut input: R, mut output: W) -> Result<(), DecodeError> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let mut lines: Vec<(Vec<u8>, bool)> = Vec::new();
    let mut start = 0;
    for i in 0..data.len() {
        if data[i] == b'\n' {
            lines.push((data[start..i].to_vec(), true));
            start = i + 1;
        }
    }
    if start < data.len() {
        lines.push((data[start..].to_vec(), false));
    }

    for (content, _) in lines.iter_mut() {
        content.reverse();
    }
    lines.reverse();

    for (content, had_newline) in &lines {
        output.write_all(content)?;
        if *had_newline {
            output.write_all(b"\n")?;
        }
    }
    Ok(())
}
