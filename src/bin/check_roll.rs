//! Standalone roll checker.
//!
//! Reads a JSON roll record from a file or stdin and prints the verdict the
//! way the verification page renders it. Exit code: 0 when the roll and the
//! commitment both check out, 1 on a mismatch, 2 when nothing could be
//! verified.

use clap::Parser;
use fairroll::api::render::render_message;
use fairroll::verify::{check_roll, RollRecord, Verdict};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "check_roll")]
#[command(about = "Check a provably-fair roll record", long_about = None)]
struct Args {
    /// Path to a JSON roll record (reads stdin when omitted)
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let raw = match read_input(&args) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("❌ Failed to read roll data: {err}");
            return ExitCode::from(2);
        }
    };

    let verdict = match serde_json::from_str::<RollRecord>(&raw) {
        Ok(record) => check_roll(&record),
        Err(_) => Verdict::InvalidInput,
    };

    println!("{}", render_message(&verdict));

    match verdict {
        Verdict::Verified(result) if result.rolls_match && result.hashes_match => {
            println!("\n✅ Roll verified");
            ExitCode::SUCCESS
        }
        Verdict::Verified(_) => {
            println!("\n❌ Roll does NOT verify");
            ExitCode::from(1)
        }
        _ => ExitCode::from(2),
    }
}

fn read_input(args: &Args) -> std::io::Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
