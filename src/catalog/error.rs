//! Typed failures for the package catalog.
//!
//! Exactly two kinds exist, and they stay distinguishable on purpose:
//! `UnrecognizedTier` guards the token boundary where discriminators enter
//! the system, while `Unimplemented` marks the platinum stub. Neither is
//! retried or recovered; the CLI hosts map each kind to its own exit code so
//! scripts can tell bad input apart from a stub hit without parsing stderr.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CatalogError {
    /// A tier token arrived that maps to no declared discriminator.
    #[error("unrecognized package tier '{token}' (expected standard|premium)")]
    UnrecognizedTier { token: String },

    /// A stubbed package was asked to describe its services.
    #[error("{package} package services are not yet implemented")]
    Unimplemented { package: &'static str },
}

impl CatalogError {
    /// Exit code the CLI hosts use for this failure.
    ///
    /// 2 for rejected input, 3 for a stub hit; unclassified host failures
    /// exit 1, and 0 stays reserved for success.
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::UnrecognizedTier { .. } => 2,
            CatalogError::Unimplemented { .. } => 3,
        }
    }
}
