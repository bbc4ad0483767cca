//! Service packages and the factory that selects among them.
//!
//! The catalog is compiled in rather than loaded from disk: three stateless
//! package types, a sum type dispatching the shared `services` capability
//! over the tag, and `resolve` mapping each declared tier to a fresh
//! instance. Platinum exists only as a stub; it has no tier token and
//! `resolve` cannot produce it.

use crate::catalog::error::{CatalogError, Result};
use crate::catalog::tier::PackageTier;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// Base offering: the flat service summary and nothing else.
pub struct StandardPackage;

impl StandardPackage {
    /// Fixed summary of what the standard package includes.
    pub fn services(&self) -> &'static str {
        "standard package"
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// Paid offering: the shared capability surface plus a discount quote.
pub struct PremiumPackage;

impl PremiumPackage {
    /// Fixed summary of what the premium package includes.
    pub fn services(&self) -> &'static str {
        "premium package"
    }

    /// Current discount quote.
    ///
    /// Only premium carries this capability. No trait or enum method exposes
    /// it elsewhere, so asking another package for a discount does not
    /// compile; the CLIs reject the request at their own boundary instead.
    pub fn discount(&self) -> &'static str {
        "15 %"
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// Unreleased offering kept as a stub.
pub struct PlatinumPackage;

impl PlatinumPackage {
    /// Always fails with `Unimplemented`.
    ///
    /// The stub must never answer with a default, and the failure kind stays
    /// distinct from an unrecognized tier so callers can tell a reached stub
    /// apart from bad input.
    pub fn services(&self) -> Result<&'static str> {
        Err(CatalogError::Unimplemented { package: "platinum" })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// One concrete package, tagged by kind.
///
/// Callers that need the premium-only discount match the `Premium` arm out
/// of this enum; there is intentionally no downcast accessor, so holding a
/// `PremiumPackage` is the only route to `discount`.
pub enum ServicePackage {
    Standard(StandardPackage),
    Premium(PremiumPackage),
    Platinum(PlatinumPackage),
}

impl ServicePackage {
    /// Shared services capability, dispatched over the tag.
    ///
    /// Standard and premium always answer; the platinum arm delegates to the
    /// stub and propagates its `Unimplemented` failure.
    pub fn services(&self) -> Result<&'static str> {
        match self {
            ServicePackage::Standard(package) => Ok(package.services()),
            ServicePackage::Premium(package) => Ok(package.services()),
            ServicePackage::Platinum(package) => package.services(),
        }
    }

    /// Lowercase package name for diagnostics and records.
    pub fn tier_token(&self) -> &'static str {
        match self {
            ServicePackage::Standard(_) => "standard",
            ServicePackage::Premium(_) => "premium",
            ServicePackage::Platinum(_) => "platinum",
        }
    }
}

/// Map a declared tier to a fresh package instance.
///
/// Pure and deterministic. The match is exhaustive over `PackageTier`, so a
/// new tier without an arm here is a compile error; no runtime "unknown
/// tier" path exists past the token boundary in `FromStr`.
pub fn resolve(tier: PackageTier) -> ServicePackage {
    match tier {
        PackageTier::Standard => ServicePackage::Standard(StandardPackage),
        PackageTier::Premium => ServicePackage::Premium(PremiumPackage),
    }
}

/// One-shot lookup: resolve a tier and return its services line.
///
/// Infallible because every declared tier implements `services`; only the
/// unmapped platinum stub does not, and it is unreachable from here.
pub fn services_for(tier: PackageTier) -> &'static str {
    match tier {
        PackageTier::Standard => StandardPackage.services(),
        PackageTier::Premium => PremiumPackage.services(),
    }
}

#[derive(Clone, Debug, Serialize)]
/// Serializable snapshot of one reachable tier.
///
/// `discount` is populated from the premium package value and omitted from
/// the JSON entirely for other tiers, matching how the emitters skip absent
/// optional fields rather than printing null.
pub struct TierOffer {
    pub tier: PackageTier,
    pub services: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<&'static str>,
}

impl TierOffer {
    /// Build the snapshot for a declared tier.
    pub fn for_tier(tier: PackageTier) -> TierOffer {
        match tier {
            PackageTier::Standard => TierOffer {
                tier,
                services: StandardPackage.services(),
                discount: None,
            },
            PackageTier::Premium => {
                let package = PremiumPackage;
                TierOffer {
                    tier,
                    services: package.services(),
                    discount: Some(package.discount()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_declared_tiers_to_their_services() {
        let standard = resolve(PackageTier::Standard);
        assert_eq!(standard.services().unwrap(), "standard package");
        assert_eq!(standard.tier_token(), "standard");

        let premium = resolve(PackageTier::Premium);
        assert_eq!(premium.services().unwrap(), "premium package");
        assert_eq!(premium.tier_token(), "premium");
    }

    #[test]
    fn services_for_matches_the_resolved_package() {
        for tier in PackageTier::ALL {
            assert_eq!(services_for(tier), resolve(tier).services().unwrap());
        }
    }

    #[test]
    fn premium_discount_is_fixed() {
        let ServicePackage::Premium(premium) = resolve(PackageTier::Premium) else {
            panic!("premium tier must resolve to the premium package");
        };
        assert_eq!(premium.discount(), "15 %");
    }

    #[test]
    fn platinum_services_always_fail_with_unimplemented() {
        let stub = PlatinumPackage;
        let direct = stub.services().expect_err("stub must not answer");
        assert_eq!(direct, CatalogError::Unimplemented { package: "platinum" });

        let via_dispatch = ServicePackage::Platinum(stub)
            .services()
            .expect_err("dispatch must propagate the stub failure");
        assert_eq!(via_dispatch, direct);
    }

    #[test]
    fn repeated_resolution_is_stable() {
        // No hidden state: every lookup yields an equal package and the same
        // fixed strings.
        for _ in 0..3 {
            assert_eq!(resolve(PackageTier::Standard), resolve(PackageTier::Standard));
            assert_eq!(
                resolve(PackageTier::Standard).services().unwrap(),
                "standard package"
            );
            assert_eq!(services_for(PackageTier::Premium), "premium package");
        }
    }

    #[test]
    fn premium_offer_carries_the_discount() {
        let offer = TierOffer::for_tier(PackageTier::Premium);
        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(json.get("tier").and_then(|v| v.as_str()), Some("premium"));
        assert_eq!(
            json.get("services").and_then(|v| v.as_str()),
            Some("premium package")
        );
        assert_eq!(json.get("discount").and_then(|v| v.as_str()), Some("15 %"));
    }

    #[test]
    fn standard_offer_omits_the_discount_field() {
        let offer = TierOffer::for_tier(PackageTier::Standard);
        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(json.get("tier").and_then(|v| v.as_str()), Some("standard"));
        assert!(json.get("discount").is_none(), "absent discount must be skipped, not null");
    }
}
