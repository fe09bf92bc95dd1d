//! Balcony reconstruction content, templated from the Location record

use super::template::{has_weather_factor, list_phrase};
use shared_types::{
    ComparisonData, ComparisonRow, KeyFactor, LocalFaq, Location, ServiceLocationContent,
};

pub fn content(location: &Location) -> ServiceLocationContent {
    let context = &location.construction_context;
    let coastal = has_weather_factor(location, "salt") || has_weather_factor(location, "surge");

    let exposure = if coastal {
        "Salt air drives chloride into concrete, so rebar corrosion and spalling show up years \
         sooner than inland."
    } else {
        "Heavy seasonal rain and humidity keep slab edges wet, so failed coatings lead to rebar \
         corrosion and spalling."
    };
    let (coating_life, inspection_interval) = if coastal {
        ("5-7 years", "Every 3 years")
    } else {
        ("8-10 years", "Every 5 years")
    };

    ServiceLocationContent {
        local_context: format!(
            "Balconies in {} take the brunt of {}. Condominium and apartment associations across \
             {} rely on periodic structural inspections, and repairs are permitted through {}.",
            location.name,
            list_phrase(&location.weather_factors, 3, "Florida weather"),
            location.county,
            context.permit_authority,
        ),
        key_factors: vec![
            KeyFactor::new("Concrete exposure", exposure),
            KeyFactor::new(
                "Milestone inspections",
                "Florida requires milestone structural inspections for condominiums three stories \
                 and taller, and balcony findings must be repaired on a set timeline.",
            ),
            KeyFactor::new(
                "Guardrail code",
                "Rebuilt balconies need 42-inch guards that resist 200-pound loads under the \
                 Florida Building Code.",
            ),
        ],
        comparison_data: Some(ComparisonData {
            headers: vec![location.name.clone(), "Inland Florida".to_string()],
            rows: vec![
                ComparisonRow::new("Typical coating life", &[coating_life, "8-10 years"]),
                ComparisonRow::new(
                    "Recommended inspection interval",
                    &[inspection_interval, "Every 5 years"],
                ),
            ],
        }),
        local_faqs: vec![
            LocalFaq::new(
                format!(
                    "How often should balconies in {} be inspected?",
                    location.name
                ),
                if coastal {
                    format!(
                        "Because {} buildings face salt exposure, we recommend a visual inspection \
                         every three years in addition to the state milestone schedule.",
                        location.name
                    )
                } else {
                    "We recommend a visual inspection every five years in addition to the state \
                     milestone schedule."
                        .to_string()
                },
            ),
            LocalFaq::new(
                format!("Do balcony repairs in {} need a permit?", location.county),
                format!(
                    "Structural concrete and guardrail work requires a permit from {}. Typical \
                     review time is {}.",
                    context.permit_authority, context.avg_permit_time
                ),
            ),
        ],
        project_types: Some(vec![
            "Concrete spalling repair".to_string(),
            "Balcony slab replacement".to_string(),
            "Guardrail replacement".to_string(),
            "Traffic coating systems".to_string(),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::{clearwater, wesley_chapel};

    #[test]
    fn test_coastal_comparison_uses_location_header() {
        let content = content(&clearwater::location());
        let data = content.comparison_data.unwrap();
        assert_eq!(data.headers[0], "Clearwater");
        assert_eq!(data.rows[0].values[0], "5-7 years");
        assert_eq!(data.first_misaligned_row(), None);
    }

    #[test]
    fn test_inland_location_gets_inland_guidance() {
        let content = content(&wesley_chapel::location());
        assert!(content.local_faqs[0].answer.contains("every five years"));
        let data = content.comparison_data.unwrap();
        assert_eq!(data.rows[0].values[0], "8-10 years");
        assert_eq!(data.rows[1].values[0], "Every 5 years");
    }
}
