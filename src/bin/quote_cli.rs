//! Resolves a service tier and prints what the package includes.
//!
//! This is the default-run display host: it obtains a tier token from the
//! CLI (falling back to `TIERDESK_TIER`), asks the catalog for the package,
//! and prints the strings the capability methods return. Output is plain
//! lines by default or a single JSON record with `--json`; `--list` covers
//! every tier the factory can reach.

use anyhow::{Context, Result, bail};
use std::env;
use tierdesk::quote_support;
use tierdesk::{CatalogError, PackageTier, ServicePackage, TierOffer, resolve};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        let code = err
            .downcast_ref::<CatalogError>()
            .map(CatalogError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    match Cli::parse() {
        Cli::List { json } => print_list(json),
        Cli::Quote {
            token,
            discount,
            json,
        } => print_quote(&token, discount, json),
    }
}

enum Cli {
    List {
        json: bool,
    },
    Quote {
        token: String,
        discount: bool,
        json: bool,
    },
}

impl Cli {
    fn parse() -> Cli {
        let mut list = false;
        let mut discount = false;
        let mut json = false;
        let mut token: Option<String> = None;

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--list" | "-l" => list = true,
                "--discount" | "-d" => discount = true,
                "--json" | "-j" => json = true,
                "--help" | "-h" => usage(0),
                flag if flag.starts_with('-') => usage(1),
                value => {
                    if token.is_some() {
                        usage(1);
                    }
                    token = Some(value.to_string());
                }
            }
        }

        if list {
            // --list quotes nothing, so a tier or --discount alongside it is
            // a contract violation rather than something to silently ignore.
            if discount || token.is_some() {
                usage(1);
            }
            return Cli::List { json };
        }

        let Some(token) = quote_support::tier_from_sources(token) else {
            usage(1)
        };
        Cli::Quote {
            token,
            discount,
            json,
        }
    }
}

fn print_quote(token: &str, discount: bool, json: bool) -> Result<()> {
    let tier: PackageTier = token.parse()?;
    let package = resolve(tier);

    // Premium is the only package carrying a discount; reject the flag up
    // front so the text and JSON paths behave the same.
    if discount {
        let ServicePackage::Premium(_) = package else {
            bail!(
                "the {} package does not offer a discount (only premium does)",
                package.tier_token()
            );
        };
    }

    if json {
        let line = serde_json::to_string(&TierOffer::for_tier(tier))
            .context("serializing tier offer")?;
        println!("{line}");
        return Ok(());
    }

    println!("{}", package.services()?);
    if discount {
        if let ServicePackage::Premium(premium) = package {
            println!("{}", premium.discount());
        }
    }
    Ok(())
}

fn print_list(json: bool) -> Result<()> {
    if json {
        println!("{}", quote_support::dump_line()?);
        return Ok(());
    }
    for tier in PackageTier::ALL {
        println!("{}", quote_support::list_line(tier));
    }
    Ok(())
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: tier-quote [TIER] [--discount] [--json]\n       tier-quote --list [--json]\n\nArguments:\n  TIER            Package tier to quote: standard or premium. Falls back to the\n                  TIERDESK_TIER environment variable when the argument is omitted.\n\nFlags:\n  --discount, -d  Also print the premium discount line.\n  --json, -j      Emit one JSON record instead of plain lines.\n  --list, -l      Print every reachable tier with its services line.\n  --help, -h      Show this message.\n\nExamples:\n  tier-quote premium --discount\n  TIERDESK_TIER=standard tier-quote\n  tier-quote --list --json"
    );
    std::process::exit(code);
}
