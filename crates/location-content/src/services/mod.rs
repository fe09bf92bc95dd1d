//! Service-location content resolvers
//!
//! Each service produces location-specific marketing copy through one of
//! two strategies:
//!
//! - **Table**: hand-authored entries keyed by location slug, with a default
//!   entry for any location the table does not list
//! - **Template**: a pure function that interpolates Location fields into
//!   fixed copy, so new locations need no authoring
//!
//! `Service::strategy` is the single place that decides which one a service
//! uses.

pub mod balcony;
pub mod commercial;
pub mod disaster_recovery;
pub mod historic;
pub mod luxury_homes;
pub mod multifamily;
pub mod table;
pub mod template;
pub mod waterproofing;

pub use table::{validate_content, ContentTable};

use crate::error::ContentError;
use crate::locations;
use crate::registry::LocationRegistry;
use serde::{Deserialize, Serialize};
use shared_types::{Location, ServiceLocationContent};

/// Template strategy: content derived purely from the Location record
pub type ContentTemplate = fn(&Location) -> ServiceLocationContent;

/// How a service turns a Location into content
#[derive(Clone, Copy)]
pub enum ContentStrategy {
    Table(&'static ContentTable),
    Template(ContentTemplate),
}

/// Marketing service categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    CommercialConstruction,
    HistoricRestoration,
    MultiFamily,
    DisasterRecovery,
    BalconyReconstruction,
    Waterproofing,
    LuxuryHomes,
}

impl Service {
    /// All services in menu order
    pub fn all() -> Vec<Self> {
        vec![
            Service::CommercialConstruction,
            Service::HistoricRestoration,
            Service::MultiFamily,
            Service::DisasterRecovery,
            Service::BalconyReconstruction,
            Service::Waterproofing,
            Service::LuxuryHomes,
        ]
    }

    /// URL segment for the service
    pub fn slug(&self) -> &'static str {
        match self {
            Service::CommercialConstruction => "commercial-construction",
            Service::HistoricRestoration => "historic-restoration",
            Service::MultiFamily => "multi-family",
            Service::DisasterRecovery => "disaster-recovery",
            Service::BalconyReconstruction => "balcony-reconstruction",
            Service::Waterproofing => "waterproofing",
            Service::LuxuryHomes => "luxury-homes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Service::CommercialConstruction => "Commercial Construction",
            Service::HistoricRestoration => "Historic Restoration",
            Service::MultiFamily => "Multi-Family Construction",
            Service::DisasterRecovery => "Disaster Recovery",
            Service::BalconyReconstruction => "Balcony Reconstruction",
            Service::Waterproofing => "Waterproofing",
            Service::LuxuryHomes => "Luxury Homes",
        }
    }

    /// Parse from a URL segment (case-insensitive)
    pub fn from_slug(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|service| service.slug() == wanted)
    }

    /// The content strategy this service is registered with
    pub fn strategy(&self) -> ContentStrategy {
        match self {
            Service::CommercialConstruction => ContentStrategy::Table(commercial::table()),
            Service::HistoricRestoration => ContentStrategy::Table(historic::table()),
            Service::MultiFamily => ContentStrategy::Template(multifamily::content),
            Service::DisasterRecovery => ContentStrategy::Template(disaster_recovery::content),
            Service::BalconyReconstruction => ContentStrategy::Template(balcony::content),
            Service::Waterproofing => ContentStrategy::Template(waterproofing::content),
            Service::LuxuryHomes => ContentStrategy::Template(luxury_homes::content),
        }
    }

    /// Resolve location-specific content for this service
    ///
    /// Always returns content: table services fall back to their default
    /// entry, template services work for any Location.
    pub fn resolve(&self, location: &Location) -> ServiceLocationContent {
        match self.strategy() {
            ContentStrategy::Table(table) => table.resolve(location),
            ContentStrategy::Template(template) => template(location),
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Build and validate every compiled-in table from scratch
///
/// Checks the location registry, every hand-authored service table, and
/// every template's output for every built-in location. Intended for an
/// eager startup check so authoring bugs surface before the first render.
pub fn validate_builtin_content() -> Result<(), ContentError> {
    let registry = LocationRegistry::new(locations::all())?;
    commercial::build_table()?;
    historic::build_table()?;

    for service in Service::all() {
        if let ContentStrategy::Template(template) = service.strategy() {
            for location in registry.all() {
                validate_content(service, &location.slug, &template(location))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::get_location_data;

    #[test]
    fn test_builtin_content_is_valid() {
        assert_eq!(validate_builtin_content(), Ok(()));
    }

    #[test]
    fn test_service_slug_roundtrip() {
        for service in Service::all() {
            assert_eq!(Service::from_slug(service.slug()), Some(service));
        }
        assert_eq!(
            Service::from_slug("Multi-Family"),
            Some(Service::MultiFamily)
        );
        assert_eq!(Service::from_slug("roofing"), None);
    }

    #[test]
    fn test_strategies_are_registered() {
        assert!(matches!(
            Service::CommercialConstruction.strategy(),
            ContentStrategy::Table(_)
        ));
        assert!(matches!(
            Service::HistoricRestoration.strategy(),
            ContentStrategy::Table(_)
        ));
        assert!(matches!(
            Service::MultiFamily.strategy(),
            ContentStrategy::Template(_)
        ));
        assert!(matches!(
            Service::LuxuryHomes.strategy(),
            ContentStrategy::Template(_)
        ));
    }

    #[test]
    fn test_every_service_resolves_every_location() {
        for service in Service::all() {
            for location in locations::all() {
                let content = service.resolve(&location);
                assert!(
                    !content.local_context.trim().is_empty(),
                    "{} / {} has empty context",
                    service,
                    location.slug
                );
                assert!(
                    !content.local_faqs.is_empty(),
                    "{} / {} has no FAQs",
                    service,
                    location.slug
                );
            }
        }
    }

    #[test]
    fn test_multifamily_tampa_first_faq_mentions_tampa() {
        let tampa = get_location_data("tampa").unwrap();
        let content = Service::MultiFamily.resolve(tampa);
        assert!(content.local_faqs[0].question.contains("Tampa"));
    }

    #[test]
    fn test_service_serializes_as_slug() {
        let json = serde_json::to_string(&Service::BalconyReconstruction).unwrap();
        assert_eq!(json, "\"balcony-reconstruction\"");
    }
}
