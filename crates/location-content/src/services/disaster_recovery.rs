//! Disaster recovery content, templated from the Location record

use super::template::{has_weather_factor, list_phrase};
use shared_types::{KeyFactor, LocalFaq, Location, ServiceLocationContent};

pub fn content(location: &Location) -> ServiceLocationContent {
    let context = &location.construction_context;

    let mut key_factors = vec![
        KeyFactor::new(
            "Emergency response",
            format!(
                "Crews are staged across {} before named storms make landfall so board-up and \
                 dry-out start as soon as roads open.",
                location.metro
            ),
        ),
        KeyFactor::new(
            "Insurance documentation",
            "Photo and moisture-map documentation is prepared in the format adjusters expect to \
             speed claim approval.",
        ),
        KeyFactor::new(
            "Rebuild permitting",
            format!(
                "{} issues post-storm repair permits; substantial damage determinations decide \
                 whether a rebuild must meet current flood elevation.",
                context.permit_authority
            ),
        ),
    ];

    if has_weather_factor(location, "surge") || has_weather_factor(location, "tidal") {
        key_factors.push(KeyFactor::new(
            "Saltwater intrusion",
            "Surge water leaves salt in drywall, insulation and framing, which must be removed \
             rather than dried in place.",
        ));
    }
    if has_weather_factor(location, "sinkhole") {
        key_factors.push(KeyFactor::new(
            "Ground subsidence",
            format!(
                "Heavy rain can open sinkholes in {} soils; we coordinate geotechnical testing \
                 before structural repair.",
                location.county
            ),
        ));
    }

    ServiceLocationContent {
        local_context: format!(
            "Properties in {} face {}. When a storm hits {}, recovery means securing the building, \
             drying it out and rebuilding to current code under {} rules for {}.",
            location.name,
            list_phrase(&location.weather_factors, 4, "severe weather"),
            location.county,
            context.permit_authority,
            flood_zone_clause(&context.flood_zones),
        ),
        key_factors,
        comparison_data: None,
        local_faqs: vec![
            LocalFaq::new(
                format!(
                    "How fast can you respond to storm damage in {}?",
                    location.name
                ),
                format!(
                    "We respond across {} within 24 to 48 hours of a storm clearing, starting with \
                     emergency board-up, tarping and water extraction.",
                    location.county
                ),
            ),
            LocalFaq::new(
                format!("Do I need a permit for storm repairs in {}?", location.name),
                format!(
                    "Most structural, roofing and electrical repairs require a permit from {}. \
                     Emergency temporary repairs can usually start before the permit is issued.",
                    context.permit_authority
                ),
            ),
            LocalFaq::new(
                "Will you work with my insurance company?",
                "Yes. We document damage, prepare scopes in Xactimate format and meet adjusters on \
                 site.",
            ),
        ],
        project_types: Some(vec![
            "Hurricane damage repair".to_string(),
            "Flood restoration".to_string(),
            "Emergency board-up".to_string(),
            "Structural rebuilds".to_string(),
            "Roof replacement".to_string(),
        ]),
    }
}

fn flood_zone_clause(flood_zones: &str) -> &str {
    if flood_zones.trim().is_empty() {
        "local flood zones"
    } else {
        flood_zones
    }
}
