//! Shared plumbing for the CLI hosts.
//!
//! Keeps tier-token acquisition, plain-text rendering, and the versioned
//! dump record in one place so `tier-quote`, `catalog-dump`, and the test
//! suite agree on wording and shape. Catalog semantics stay in
//! `crate::catalog`; this module only adapts them for display.

use crate::catalog::{PackageTier, TierOffer, services_for};
use anyhow::{Context, Result};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment fallback consulted when no tier argument is given.
pub const TIER_ENV: &str = "TIERDESK_TIER";

/// Version tag carried by every emitted catalog record.
pub const CATALOG_SCHEMA_VERSION: &str = "tier-catalog-v1";

/// Pick the tier token: explicit argument first, then `TIERDESK_TIER`.
///
/// Blank and whitespace-only environment values count as unset so an
/// exported-but-empty variable does not shadow the usage message.
pub fn tier_from_sources(arg: Option<String>) -> Option<String> {
    arg.or_else(|| env_non_empty(TIER_ENV))
}

fn env_non_empty(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `token: services` line used by `--list`.
pub fn list_line(tier: PackageTier) -> String {
    format!("{}: {}", tier.as_str(), services_for(tier))
}

#[derive(Clone, Debug, Serialize)]
/// Versioned record covering every reachable tier.
///
/// Platinum never appears: it has no discriminator, so the factory cannot
/// reach it and the record honestly reflects only what `resolve` can build.
pub struct CatalogDump {
    pub schema_version: &'static str,
    pub tiers: Vec<TierOffer>,
}

impl CatalogDump {
    /// Snapshot the reachable catalog in declared order.
    pub fn capture() -> CatalogDump {
        CatalogDump {
            schema_version: CATALOG_SCHEMA_VERSION,
            tiers: PackageTier::ALL
                .iter()
                .copied()
                .map(TierOffer::for_tier)
                .collect(),
        }
    }
}

/// Serialize the current catalog as the single-line record the emitters
/// print.
pub fn dump_line() -> Result<String> {
    serde_json::to_string(&CatalogDump::capture()).context("serializing catalog dump")
}

/// Write the dump record to `path`, newline-terminated.
pub fn write_dump(path: &Path) -> Result<()> {
    let line = dump_line()?;
    fs::write(path, format!("{line}\n"))
        .with_context(|| format!("writing catalog dump to {}", path.display()))
}
