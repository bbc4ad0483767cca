//! Service-package catalog shared by the tierdesk helper binaries.
//!
//! The crate exposes the closed tier catalog (discriminator, package
//! variants, factory) and the host-layer plumbing the CLIs depend on: tier
//! token acquisition, plain-text rendering, and the versioned dump record.
//! Public items here form the contract the binaries and the test suite rely
//! on; the catalog itself performs no I/O and holds no state.

pub mod catalog;
pub mod quote_support;

pub use catalog::{
    CatalogError, PackageTier, PlatinumPackage, PremiumPackage, Result, ServicePackage,
    StandardPackage, TierOffer, resolve, services_for,
};
