//! Waterproofing content, templated from the Location record

use super::template::{has_weather_factor, list_phrase};
use shared_types::{KeyFactor, LocalFaq, Location, ServiceLocationContent};

pub fn content(location: &Location) -> ServiceLocationContent {
    let context = &location.construction_context;

    let mut key_factors = vec![
        KeyFactor::new(
            "Wind-driven rain",
            "Hurricane-force wind pushes water through joints and penetrations that stay dry in \
             ordinary storms, so sealant and flashing details are tested for pressure.",
        ),
        KeyFactor::new("Groundwater", context.soil_conditions.clone()),
    ];
    if has_weather_factor(location, "flood") {
        key_factors.push(KeyFactor::new(
            "Flood-resistant materials",
            format!(
                "{} Below-flood-elevation assemblies use flood-damage-resistant materials per FEMA \
                 Technical Bulletin 2.",
                context.flood_zones
            ),
        ));
    }

    ServiceLocationContent {
        local_context: format!(
            "Waterproofing in {} has to hold up against {}. We seal below-grade walls, plaza \
             decks, balconies and building envelopes for owners throughout {}.",
            location.name,
            list_phrase(&location.weather_factors, 3, "heavy rain and humidity"),
            location.county,
        ),
        key_factors,
        comparison_data: None,
        local_faqs: vec![
            LocalFaq::new(
                format!("What waterproofing systems work best in {}?", location.name),
                format!(
                    "For {} conditions we typically specify fluid-applied membranes on decks, \
                     crystalline treatments below grade and silicone sealants at joints.",
                    location.name
                ),
            ),
            LocalFaq::new(
                "How long does commercial waterproofing last in Florida?".to_string(),
                "Quality membrane systems last 10 to 20 years; sealant joints should be inspected \
                 every five years."
                    .to_string(),
            ),
        ],
        project_types: Some(vec![
            "Below-grade waterproofing".to_string(),
            "Plaza and parking deck coatings".to_string(),
            "Building envelope sealing".to_string(),
            "Window and door perimeter sealing".to_string(),
        ]),
    }
}
