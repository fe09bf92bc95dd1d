//! Town 'n' Country, unincorporated Hillsborough County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "town-n-country".to_string(),
        name: "Town 'n' Country".to_string(),
        county: "Hillsborough County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~90,000".to_string(),
        median_income: "$58,000".to_string(),
        commercial_growth: "Logistics, hotel and office construction around Tampa International \
                            Airport"
            .to_string(),
        development_notes: "Mature 1960s-70s housing stock with steady renovation and multi-family \
                            infill"
            .to_string(),
        major_employers: strings(&[
            "Tampa International Airport",
            "Citi",
            "Hillsborough County Public Schools",
        ]),
        landmarks: strings(&[
            "Upper Tampa Bay Trail",
            "Old Tampa Bay shoreline",
            "Skyway Park",
        ]),
        neighborhoods: strings(&["Bay Port Colony", "Pine Crest", "Countryway"]),
        construction_context: ConstructionContext {
            flood_zones: "AE and VE zones along Old Tampa Bay and Rocky Creek".to_string(),
            soil_conditions: "Low-lying sands with shallow groundwater".to_string(),
            historic_districts: Vec::new(),
            permit_authority: "Hillsborough County Development Services".to_string(),
            avg_permit_time: "4-8 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "FAA airspace review near Tampa International Airport",
            ])),
        },
        weather_factors: strings(&[
            "Hurricane storm surge",
            "Tidal flooding",
            "Severe thunderstorms",
        ]),
        nearby_areas: strings(&["Tampa", "Westchase", "Oldsmar"]),
    }
}
