//! CLI driver (C9): parses the two path arguments, builds a decode
//! session, runs the LF inversion, then applies the C8 post-processing
//! pass, writing the original text to the output path.

use std::fs::File;
use std::io::Cursor;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rust_bwt_decode::error::DecodeError;
use rust_bwt_decode::{postprocess, Session};

/// Inverts a Burrows-Wheeler Transform over the fixed `{\n,A,C,G,T}`
/// alphabet, recovering the original text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the L-column file (the BWT to invert).
    input: PathBuf,

    /// Path to write the reconstructed text to.
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            log::info!("decode complete: {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("decode failed: {err}");
            exit_code_for(&err)
        }
    }
}

fn run(args: &Args) -> Result<(), DecodeError> {
    log::info!("session start: {}", args.input.display());
    let mut session = Session::build(&args.input)?;

    // The LF walk's output is bounded by the same capacity ceiling the
    // session already checked the input against, so an in-memory
    // buffer is fine here rather than a second file on disk.
    let mut intermediate = Vec::new();
    session.invert(&mut intermediate)?;
    log::debug!(
        "LF inversion complete ({} bytes), starting post-processing",
        intermediate.len()
    );

    let output = File::create(&args.output)?;
    postprocess::normalize(Cursor::new(intermediate), output)?;
    log::debug!("post-processing complete");

    Ok(())
}

/// Maps a `DecodeError` to a distinct non-zero process exit code.
/// Hardens spec.md §9 item 3's open-failure case and §7's decode-error
/// case, both of which the original silently ignored.
fn exit_code_for(err: &DecodeError) -> ExitCode {
    let code: u8 = match err {
        DecodeError::Io(_) => 1,
        DecodeError::InvalidSymbol { .. } => 2,
        DecodeError::CapacityExceeded { .. } => 3,
        DecodeError::MissingSentinel => 4,
        DecodeError::MultipleSentinels { .. } => 5,
    };
    ExitCode::from(code)
}
