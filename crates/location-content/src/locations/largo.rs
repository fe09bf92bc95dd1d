//! Largo, Pinellas County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "largo".to_string(),
        name: "Largo".to_string(),
        county: "Pinellas County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~84,000".to_string(),
        median_income: "$52,000".to_string(),
        commercial_growth: "Medical office and light industrial renovation along Ulmerton Road and \
                            East Bay Drive"
            .to_string(),
        development_notes: "Aging condominium and mobile-home communities undergoing structural \
                            recertification"
            .to_string(),
        major_employers: strings(&[
            "HCA Florida Largo Hospital",
            "Pinellas County Schools",
            "City of Largo",
        ]),
        landmarks: strings(&[
            "Largo Central Park",
            "Florida Botanical Gardens",
            "Heritage Village",
        ]),
        neighborhoods: strings(&["Downtown Largo", "Harbor Bluffs", "Ridgecrest"]),
        construction_context: ConstructionContext {
            flood_zones: "AE zones near the Intracoastal Waterway and McKay Creek; X zones inland"
                .to_string(),
            soil_conditions: "Sandy soils with moderate drainage".to_string(),
            historic_districts: Vec::new(),
            permit_authority: "City of Largo Development Services".to_string(),
            avg_permit_time: "3-5 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "Milestone structural inspections for condominiums three stories and up",
            ])),
        },
        weather_factors: strings(&["Hurricane wind", "Tidal flooding", "Saltwater corrosion"]),
        nearby_areas: strings(&[
            "Clearwater",
            "Seminole",
            "Pinellas Park",
            "St Petersburg",
        ]),
    }
}
