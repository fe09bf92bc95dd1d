//! Multi-family construction content, templated from the Location record

use super::template::{first_or, list_phrase, lowercase_first, neighborhood_phrase};
use shared_types::{KeyFactor, LocalFaq, Location, ServiceLocationContent};

pub fn content(location: &Location) -> ServiceLocationContent {
    let context = &location.construction_context;

    ServiceLocationContent {
        local_context: format!(
            "Multi-family construction in {} means designing for {} while moving plans through {}. \
             With a population of {} and {}, demand for apartments and townhomes in {} keeps \
             growing.",
            location.name,
            list_phrase(&location.weather_factors, 3, "Florida's climate"),
            context.permit_authority,
            location.population,
            growth_clause(&location.commercial_growth),
            location.county,
        ),
        key_factors: vec![
            KeyFactor::new(
                "Permitting",
                format!(
                    "{} reviews multi-family projects; expect {}.",
                    context.permit_authority, context.avg_permit_time
                ),
            ),
            KeyFactor::new("Flood zones", context.flood_zones.clone()),
            KeyFactor::new("Site conditions", context.soil_conditions.clone()),
            KeyFactor::new(
                "Fire separation",
                "Buildings with three or more units need rated separations, sprinklers and \
                 accessible routes under the Florida Building Code and Fire Prevention Code."
                    .to_string(),
            ),
        ],
        comparison_data: None,
        local_faqs: vec![
            LocalFaq::new(
                format!(
                    "What permits are needed for multi-family construction in {}?",
                    location.name
                ),
                format!(
                    "Multi-family projects in {} are permitted through {}. Site plan, building and \
                     fire reviews typically take {}.",
                    location.name, context.permit_authority, context.avg_permit_time
                ),
            ),
            LocalFaq::new(
                format!(
                    "How does flood zoning affect apartment projects in {}?",
                    location.county
                ),
                format!(
                    "{} Buildings in AE or VE zones are elevated or floodproofed to meet FEMA and \
                     local requirements.",
                    context.flood_zones
                ),
            ),
            LocalFaq::new(
                format!(
                    "Where do you build multi-family housing around {}?",
                    location.name
                ),
                format!(
                    "We build in {}, with most recent work near {}.",
                    neighborhood_phrase(location),
                    first_or(&location.landmarks, &location.name)
                ),
            ),
        ],
        project_types: Some(vec![
            "Garden-style apartments".to_string(),
            "Townhome communities".to_string(),
            "Mid-rise apartments".to_string(),
            "Senior living".to_string(),
            "Mixed-use residential".to_string(),
        ]),
    }
}

fn growth_clause(commercial_growth: &str) -> String {
    if commercial_growth.trim().is_empty() {
        "steady local development".to_string()
    } else {
        lowercase_first(commercial_growth)
    }
}
