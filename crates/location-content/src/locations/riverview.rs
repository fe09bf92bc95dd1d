//! Riverview, unincorporated Hillsborough County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "riverview".to_string(),
        name: "Riverview".to_string(),
        county: "Hillsborough County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~107,000".to_string(),
        median_income: "$78,000".to_string(),
        commercial_growth: "New townhome communities, neighborhood retail and schools following \
                            rapid residential growth"
            .to_string(),
        development_notes: "One of the fastest-growing communities in the county, largely \
                            master-planned subdivisions"
            .to_string(),
        major_employers: strings(&[
            "HCA Florida South Shore Hospital",
            "Hillsborough County Public Schools",
            "Amazon fulfillment centers in the I-75 corridor",
        ]),
        landmarks: strings(&[
            "Alafia River",
            "Riverview Civic Center",
            "Alderman's Ford Park",
        ]),
        neighborhoods: strings(&["Panther Trace", "Summerfield", "Boyette", "Rivercrest"]),
        construction_context: ConstructionContext {
            flood_zones: "AE zones along the Alafia River floodplain; X zones elsewhere"
                .to_string(),
            soil_conditions: "Poorly drained sands with seasonal high water table".to_string(),
            historic_districts: Vec::new(),
            permit_authority: "Hillsborough County Development Services".to_string(),
            avg_permit_time: "4-8 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&["Community Development District coordination"])),
        },
        weather_factors: strings(&[
            "Riverine flooding",
            "Hurricane wind",
            "Severe thunderstorms",
        ]),
        nearby_areas: strings(&["Brandon", "Apollo Beach", "Gibsonton", "Tampa"]),
    }
}
