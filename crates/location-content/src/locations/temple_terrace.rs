//! Temple Terrace, Hillsborough County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "temple-terrace".to_string(),
        name: "Temple Terrace".to_string(),
        county: "Hillsborough County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~27,000".to_string(),
        median_income: "$63,000".to_string(),
        commercial_growth: "Downtown Temple Terrace mixed-use redevelopment on 56th Street"
            .to_string(),
        development_notes: "Built-out city with a large stock of 1920s Mediterranean Revival homes"
            .to_string(),
        major_employers: strings(&[
            "University of South Florida (adjacent)",
            "AdventHealth Tampa",
            "City of Temple Terrace",
        ]),
        landmarks: strings(&[
            "Hillsborough River",
            "Temple Terrace Golf and Country Club",
            "Riverhills Park",
        ]),
        neighborhoods: strings(&["Riverhills", "Lettuce Lake", "Downtown Temple Terrace"]),
        construction_context: ConstructionContext {
            flood_zones: "AE zones along the Hillsborough River; X zones on higher ground"
                .to_string(),
            soil_conditions: "Sandy soils with karst features near the river".to_string(),
            historic_districts: strings(&["Temple Terrace Historic District"]),
            permit_authority: "City of Temple Terrace Community Development".to_string(),
            avg_permit_time: "3-5 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "Historic Preservation Board review for designated homes",
            ])),
        },
        weather_factors: strings(&[
            "Riverine flooding",
            "Frequent lightning strikes",
            "Hurricane wind",
        ]),
        nearby_areas: strings(&["Tampa", "Thonotosassa", "Brandon"]),
    }
}
