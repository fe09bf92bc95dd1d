//! Wesley Chapel, Pasco County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "wesley-chapel".to_string(),
        name: "Wesley Chapel".to_string(),
        county: "Pasco County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~65,000".to_string(),
        median_income: "$89,000".to_string(),
        commercial_growth: "Hospital campuses, sports complexes and retail centers along State \
                            Road 56"
            .to_string(),
        development_notes: "Master-planned communities such as Wiregrass Ranch and Epperson drive \
                            greenfield construction"
            .to_string(),
        major_employers: strings(&[
            "AdventHealth Wesley Chapel",
            "BayCare Hospital Wesley Chapel",
            "Pasco County Schools",
        ]),
        landmarks: strings(&[
            "Tampa Premium Outlets",
            "The Shops at Wiregrass",
            "Wiregrass Ranch Sports Campus",
        ]),
        neighborhoods: strings(&[
            "Wiregrass Ranch",
            "Meadow Pointe",
            "Seven Oaks",
            "Epperson",
        ]),
        construction_context: ConstructionContext {
            flood_zones: "Mostly X zones with AE wetlands along Cypress Creek".to_string(),
            soil_conditions: "Clayey sands over limestone in a known sinkhole region".to_string(),
            historic_districts: Vec::new(),
            permit_authority: "Pasco County Building Construction Services".to_string(),
            avg_permit_time: "5-8 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "Geotechnical sinkhole investigation for large foundations",
            ])),
        },
        weather_factors: strings(&[
            "Sinkhole activity after heavy rain",
            "Severe thunderstorms",
            "Hurricane wind",
        ]),
        nearby_areas: strings(&["Land O' Lakes", "Zephyrhills", "Tampa"]),
    }
}
