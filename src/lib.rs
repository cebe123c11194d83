//! Library surface for the BWT-decode engine (C1-C8, C10-C11).
//!
//! `main.rs` is a thin CLI driver over this library: it opens the two
//! paths, builds a [`session::Session`], runs the LF inversion, then
//! hands the result to [`postprocess::normalize`].

pub mod alphabet;
pub mod config;
pub mod error;
pub mod index;
pub mod inverter;
pub mod postprocess;
pub mod reader;
pub mod session;

pub use error::{DecodeError, Result};
pub use session::Session;
