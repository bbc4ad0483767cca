//! Emits the reachable package catalog as one versioned JSON record.
//!
//! The record is the `tier-catalog-v1` dump: a schema version plus the
//! snapshot of every tier the factory maps, in declared order. Platinum
//! never appears because it has no discriminator. The record goes to stdout
//! by default; `--out` writes the same newline-terminated line to a file.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tierdesk::quote_support;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match parse_out_arg() {
        Some(path) => quote_support::write_dump(&path),
        None => {
            println!("{}", quote_support::dump_line()?);
            Ok(())
        }
    }
}

fn parse_out_arg() -> Option<PathBuf> {
    let mut out = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let Some(path) = args.next() else { usage(1) };
                if out.is_some() {
                    usage(1);
                }
                out = Some(PathBuf::from(path));
            }
            "--help" | "-h" => usage(0),
            _ => usage(1),
        }
    }
    out
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: catalog-dump [--out FILE]\n\nEmits the reachable package catalog as a single tier-catalog-v1 JSON record.\n\nFlags:\n  --out, -o FILE  Write the record to FILE instead of stdout.\n  --help, -h      Show this message."
    );
    std::process::exit(code);
}
