//! Luxury custom home content, templated from the Location record

use super::template::{first_or, list_phrase, neighborhood_phrase};
use shared_types::{KeyFactor, LocalFaq, Location, ServiceLocationContent};

pub fn content(location: &Location) -> ServiceLocationContent {
    let context = &location.construction_context;

    let mut key_factors = vec![
        KeyFactor::new(
            "Hurricane-rated envelope",
            format!(
                "Homes in {} are engineered for {} with impact glazing, sealed roof decks and \
                 continuous load paths.",
                location.name,
                list_phrase(&location.weather_factors, 2, "Florida storms")
            ),
        ),
        KeyFactor::new("Flood elevation", context.flood_zones.clone()),
    ];
    if !context.historic_districts.is_empty() {
        key_factors.push(KeyFactor::new(
            "Historic district design review",
            format!(
                "New homes in {} need design approval that matches the district's character.",
                list_phrase(&context.historic_districts, 3, "historic districts")
            ),
        ));
    }
    if let Some(ref requirements) = context.special_requirements {
        for requirement in requirements {
            key_factors.push(KeyFactor::new("Local requirement", requirement.clone()));
        }
    }

    ServiceLocationContent {
        local_context: format!(
            "Custom homes in {} are built for waterfront views, outdoor living and {}. From {} to \
             the edges of {}, every design starts with the site's flood zone, soil report and \
             permit path through {}.",
            location.name,
            list_phrase(&location.weather_factors, 2, "Florida weather"),
            first_or(&location.neighborhoods, &location.name),
            location.county,
            context.permit_authority,
        ),
        key_factors,
        comparison_data: None,
        local_faqs: vec![
            LocalFaq::new(
                format!(
                    "How long does it take to build a custom home in {}?",
                    location.name
                ),
                format!(
                    "Design and permitting usually take four to eight months, with permit review \
                     alone around {}. Construction typically runs 12 to 18 months.",
                    context.avg_permit_time.replace(" for commercial projects", "")
                ),
            ),
            LocalFaq::new(
                format!("Which {} neighborhoods do you build in?", location.name),
                format!(
                    "We build custom homes in {}.",
                    neighborhood_phrase(location)
                ),
            ),
        ],
        project_types: Some(vec![
            "Waterfront estates".to_string(),
            "Custom single-family homes".to_string(),
            "Whole-home renovations".to_string(),
            "Guest houses and pool pavilions".to_string(),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::{brandon, sarasota};

    #[test]
    fn test_historic_and_special_requirements_become_factors() {
        let content = content(&sarasota::location());
        assert!(content
            .key_factors
            .iter()
            .any(|f| f.title == "Historic district design review"));
        assert_eq!(
            content
                .key_factors
                .iter()
                .filter(|f| f.title == "Local requirement")
                .count(),
            2
        );
    }

    #[test]
    fn test_location_without_extras_keeps_base_factors() {
        let content = content(&brandon::location());
        assert_eq!(content.key_factors.len(), 2);
        assert!(content.local_faqs[0].answer.contains("4-8 weeks"));
        assert!(!content.local_faqs[0].answer.contains("commercial"));
    }
}
