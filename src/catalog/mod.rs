//! Package catalog wiring.
//!
//! The catalog is a closed, compiled-in set: a tier discriminator, three
//! package types, and the factory mapping one to the other. Callers use
//! `resolve` to construct a variant and `TierOffer` when a serializable view
//! of a tier is required. Failures are the two `CatalogError` kinds; nothing
//! here performs I/O.

pub mod error;
pub mod package;
pub mod tier;

pub use error::{CatalogError, Result};
pub use package::{
    PlatinumPackage, PremiumPackage, ServicePackage, StandardPackage, TierOffer, resolve,
    services_for,
};
pub use tier::PackageTier;
