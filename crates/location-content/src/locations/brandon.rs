//! Brandon, unincorporated Hillsborough County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "brandon".to_string(),
        name: "Brandon".to_string(),
        county: "Hillsborough County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~115,000".to_string(),
        median_income: "$72,000".to_string(),
        commercial_growth: "Retail, medical office and flex warehouse construction along State \
                            Road 60 and I-75"
            .to_string(),
        development_notes: "Suburban infill and redevelopment of 1980s retail centers".to_string(),
        major_employers: strings(&[
            "HCA Florida Brandon Hospital",
            "Hillsborough County Public Schools",
            "Westfield Brandon retail district",
        ]),
        landmarks: strings(&[
            "Westfield Brandon",
            "Brandon Sports and Aquatic Center",
            "Lake Brandon",
        ]),
        neighborhoods: strings(&[
            "Bloomingdale",
            "Providence Lakes",
            "Kings Avenue",
            "Brandon Town Center",
        ]),
        construction_context: ConstructionContext {
            flood_zones: "Mostly X zones with AE pockets along Delaney Creek and the Alafia \
                          tributaries"
                .to_string(),
            soil_conditions: "Sandy soils over limestone with documented sinkhole activity"
                .to_string(),
            historic_districts: Vec::new(),
            permit_authority: "Hillsborough County Development Services".to_string(),
            avg_permit_time: "4-8 weeks for commercial projects".to_string(),
            special_requirements: None,
        },
        weather_factors: strings(&[
            "Severe thunderstorms",
            "Frequent lightning strikes",
            "Hurricane wind",
            "Sinkhole activity after heavy rain",
        ]),
        nearby_areas: strings(&["Tampa", "Riverview", "Valrico", "Seffner"]),
    }
}
