//! Page metadata and structured data for service-location pages

use crate::registry::LocationRegistry;
use crate::services::Service;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared_types::{Location, ServiceLocationContent};

/// Title/description metadata for one service-location page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_path: String,
    pub keywords: Vec<String>,
}

/// Route for a service-location page, e.g. "/waterproofing/st-petersburg"
pub fn page_path(service: Service, location: &Location) -> String {
    format!("/{}/{}", service.slug(), location.slug)
}

pub fn page_metadata(service: Service, location: &Location) -> PageMetadata {
    let service_name = service.display_name();
    let term = service_name.to_lowercase();
    let mut keywords = vec![
        format!("{} {}", term, location.name),
        format!("{} contractor {}", term, location.county),
        format!("{} {} FL", location.name, term),
    ];
    keywords.extend(
        location
            .neighborhoods
            .iter()
            .take(2)
            .map(|n| format!("{} {}", term, n)),
    );

    PageMetadata {
        title: format!("{} in {}, FL", service_name, location.name),
        description: format!(
            "{} in {}, {}. Licensed Florida contractor serving {} with local permitting, flood \
             zone and hurricane code expertise.",
            service_name, location.name, location.county, location.metro
        ),
        canonical_path: page_path(service, location),
        keywords,
    }
}

/// schema.org FAQPage object built from the bundle's local FAQs
pub fn faq_json_ld(content: &ServiceLocationContent) -> Value {
    let entities: Vec<Value> = content
        .local_faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

/// Every service-location route, services outermost, locations in registry order
pub fn sitemap_paths(registry: &LocationRegistry) -> Vec<String> {
    Service::all()
        .into_iter()
        .flat_map(|service| {
            registry
                .all()
                .iter()
                .map(move |location| page_path(service, location))
        })
        .collect()
}
