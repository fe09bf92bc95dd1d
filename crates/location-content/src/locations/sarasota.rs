//! Sarasota, Sarasota County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "sarasota".to_string(),
        name: "Sarasota".to_string(),
        county: "Sarasota County".to_string(),
        metro: "North Port-Sarasota-Bradenton".to_string(),
        population: "~57,000".to_string(),
        median_income: "$68,000".to_string(),
        commercial_growth: "Luxury condominium towers downtown and cultural district renovation \
                            along the bayfront"
            .to_string(),
        development_notes: "High-end residential demand on the keys and strict height and setback \
                            rules downtown"
            .to_string(),
        major_employers: strings(&[
            "Sarasota Memorial Health Care System",
            "FCCI Insurance Group",
            "Roper Technologies",
        ]),
        landmarks: strings(&[
            "The Ringling",
            "Selby Botanical Gardens",
            "St. Armands Circle",
            "Siesta Key Beach",
        ]),
        neighborhoods: strings(&[
            "Laurel Park",
            "Burns Court",
            "Lido Key",
            "Towles Court",
            "Indian Beach",
        ]),
        construction_context: ConstructionContext {
            flood_zones: "VE zones on Lido, Siesta and Longboat Keys; AE zones along Sarasota Bay"
                .to_string(),
            soil_conditions: "Sandy soils with shell layers and a shallow water table".to_string(),
            historic_districts: strings(&["Laurel Park", "Burns Court"]),
            permit_authority: "City of Sarasota Development Services".to_string(),
            avg_permit_time: "4-8 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "Coastal setback variance review on the keys",
                "Sarasota School of Architecture preservation considerations",
            ])),
        },
        weather_factors: strings(&[
            "Hurricane storm surge",
            "Saltwater corrosion",
            "Red tide and salt air exposure",
        ]),
        nearby_areas: strings(&["Bradenton", "Venice", "Lakewood Ranch"]),
    }
}
