//! Location Content Registry
//!
//! Immutable table of service-area fact sheets keyed by canonical slug.
//! Lookups never fail loudly: an unknown key is `None`, an unresolvable
//! nearby-area name is skipped.

use crate::error::ContentError;
use crate::locations;
use crate::normalize::{is_canonical_slug, name_to_slug, strip_hyphens};
use lazy_static::lazy_static;
use shared_types::Location;
use std::collections::HashMap;

lazy_static! {
    static ref REGISTRY: LocationRegistry = LocationRegistry::new(locations::all())
        .unwrap_or_else(|e| panic!("built-in location table is malformed: {}", e));
}

/// Ordered set of locations with exact and hyphen-insensitive indexes
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    by_slug: HashMap<String, usize>,
    by_compact_slug: HashMap<String, usize>,
}

impl LocationRegistry {
    /// Build a registry, rejecting malformed or duplicate slugs
    ///
    /// Insertion order is preserved for `all()`. When two slugs share a
    /// hyphen-stripped form, the earlier one wins the fallback lookup.
    pub fn new(locations: Vec<Location>) -> Result<Self, ContentError> {
        let mut by_slug = HashMap::with_capacity(locations.len());
        let mut by_compact_slug = HashMap::with_capacity(locations.len());

        for (index, location) in locations.iter().enumerate() {
            if !is_canonical_slug(&location.slug) {
                return Err(ContentError::InvalidSlug(location.slug.clone()));
            }
            if by_slug.insert(location.slug.clone(), index).is_some() {
                return Err(ContentError::DuplicateSlug(location.slug.clone()));
            }
            by_compact_slug
                .entry(strip_hyphens(&location.slug))
                .or_insert(index);
        }

        Ok(Self {
            locations,
            by_slug,
            by_compact_slug,
        })
    }

    /// Look up a location: exact slug first, then hyphen-insensitive
    pub fn get(&self, key: &str) -> Option<&Location> {
        if let Some(&index) = self.by_slug.get(key) {
            return Some(&self.locations[index]);
        }

        let compact = strip_hyphens(key);
        let index = *self.by_compact_slug.get(&compact)?;
        tracing::debug!(
            key,
            slug = %self.locations[index].slug,
            "location lookup resolved through hyphen-insensitive fallback"
        );
        Some(&self.locations[index])
    }

    /// All locations in table order
    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    /// Resolve the subject's `nearby_areas` names to registered locations
    ///
    /// Unknown subjects and unresolvable names yield nothing. Order and
    /// duplicates follow the source list.
    pub fn nearby(&self, key: &str) -> Vec<&Location> {
        let Some(subject) = self.get(key) else {
            return Vec::new();
        };

        subject
            .nearby_areas
            .iter()
            .filter_map(|name| {
                let resolved = self.get(&name_to_slug(name));
                if resolved.is_none() {
                    tracing::debug!(
                        subject = %subject.slug,
                        area = %name,
                        "nearby area not registered"
                    );
                }
                resolved
            })
            .collect()
    }

    /// Canonical slugs in table order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|l| l.slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// The compiled-in registry
pub fn registry() -> &'static LocationRegistry {
    &REGISTRY
}

/// Look up a built-in location by slug (with hyphen-insensitive fallback)
pub fn get_location_data(key: &str) -> Option<&'static Location> {
    REGISTRY.get(key)
}

/// All built-in locations in navigation order
pub fn get_all_locations() -> &'static [Location] {
    REGISTRY.all()
}

/// Built-in locations named in the subject's nearby areas
pub fn get_nearby_locations(key: &str) -> Vec<&'static Location> {
    REGISTRY.nearby(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::tampa;
    use pretty_assertions::assert_eq;

    fn location(slug: &str, name: &str, nearby: &[&str]) -> Location {
        let mut location = tampa::location();
        location.slug = slug.to_string();
        location.name = name.to_string();
        location.nearby_areas = nearby.iter().map(|n| n.to_string()).collect();
        location
    }

    #[test]
    fn test_st_petersburg_lookup() {
        let record = get_location_data("st-petersburg").unwrap();
        assert_eq!(record.name, "St. Petersburg");
        assert_eq!(record.county, "Pinellas County");
    }

    #[test]
    fn test_hyphenless_key_falls_back() {
        let record = get_location_data("stpetersburg").unwrap();
        assert_eq!(record.slug, "st-petersburg");
    }

    #[test]
    fn test_misplaced_hyphens_fall_back() {
        let record = get_location_data("town-ncountry").unwrap();
        assert_eq!(record.slug, "town-n-country");
    }

    #[test]
    fn test_unknown_location_is_none() {
        assert!(get_location_data("miami").is_none());
        assert!(get_location_data("").is_none());
        assert!(get_location_data("---").is_none());
    }

    #[test]
    fn test_tampa_nearby_locations() {
        let names: Vec<&str> = get_nearby_locations("tampa")
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Brandon", "Temple Terrace", "Town 'n' Country", "Riverview"]
        );
    }

    #[test]
    fn test_nearby_of_unknown_is_empty() {
        assert!(get_nearby_locations("orlando").is_empty());
    }

    #[test]
    fn test_pinellas_neighbors_include_st_petersburg() {
        for key in ["clearwater", "largo"] {
            let slugs: Vec<&str> = get_nearby_locations(key)
                .iter()
                .map(|l| l.slug.as_str())
                .collect();
            assert!(slugs.contains(&"st-petersburg"), "{}", key);
        }
    }

    #[test]
    fn test_builtin_nearby_names_are_undotted() {
        for location in get_all_locations() {
            for name in &location.nearby_areas {
                assert!(!name.contains('.'), "{}: {}", location.slug, name);
            }
        }
    }

    #[test]
    fn test_dotted_names_do_not_resolve() {
        // "St. Petersburg" normalizes to "st.-petersburg"
        let registry = LocationRegistry::new(vec![
            location("st-petersburg", "St. Petersburg", &[]),
            location(
                "clearwater",
                "Clearwater",
                &["St. Petersburg", "St Petersburg"],
            ),
        ])
        .unwrap();
        let nearby = registry.nearby("clearwater");
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].slug, "st-petersburg");
    }

    #[test]
    fn test_all_locations_order_is_stable() {
        let first: Vec<&str> = get_all_locations()
            .iter()
            .map(|l| l.slug.as_str())
            .collect();
        let second: Vec<&str> = registry().slugs().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "tampa");
        assert_eq!(registry().len(), locations::all().len());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = LocationRegistry::new(vec![
            location("tampa", "Tampa", &[]),
            location("tampa", "Tampa Again", &[]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ContentError::DuplicateSlug("tampa".to_string())
        );
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let result = LocationRegistry::new(vec![location("New Port Richey", "NPR", &[])]);
        assert!(matches!(result, Err(ContentError::InvalidSlug(_))));
    }

    #[test]
    fn test_nearby_keeps_order_and_duplicates() {
        let registry = LocationRegistry::new(vec![
            location("alpha", "Alpha", &["Gamma", "Beta", "Nowhere", "Gamma"]),
            location("beta", "Beta", &[]),
            location("gamma", "Gamma", &[]),
        ])
        .unwrap();
        let slugs: Vec<&str> = registry
            .nearby("alpha")
            .iter()
            .map(|l| l.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["gamma", "beta", "gamma"]);
    }

    #[test]
    fn test_nearby_includes_self_only_when_named() {
        let registry = LocationRegistry::new(vec![
            location("alpha", "Alpha", &["Alpha"]),
            location("beta", "Beta", &["Alpha"]),
        ])
        .unwrap();
        assert_eq!(registry.nearby("alpha")[0].slug, "alpha");
        let beta_nearby = registry.nearby("beta");
        assert!(beta_nearby.iter().all(|l| l.slug != "beta"));
    }

    #[test]
    fn test_exact_match_beats_fallback() {
        let registry = LocationRegistry::new(vec![
            location("st-pete", "St. Pete", &[]),
            location("stpete", "Stpete", &[]),
        ])
        .unwrap();
        assert_eq!(registry.get("stpete").unwrap().name, "Stpete");
        assert_eq!(registry.get("s-t-pete").unwrap().name, "St. Pete");
    }

    #[test]
    fn test_empty_registry() {
        let registry = LocationRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.get("tampa").is_none());
        assert!(registry.nearby("tampa").is_empty());
    }
}
