//! Tampa, Hillsborough County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "tampa".to_string(),
        name: "Tampa".to_string(),
        county: "Hillsborough County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~403,000".to_string(),
        median_income: "$66,000".to_string(),
        commercial_growth: "Office, mixed-use and medical construction concentrated in Water \
                            Street, Westshore and the Midtown corridor"
            .to_string(),
        development_notes: "Downtown infill and riverfront redevelopment continue alongside \
                            adaptive reuse of industrial buildings in Ybor City and Tampa Heights"
            .to_string(),
        major_employers: strings(&[
            "Tampa General Hospital",
            "MacDill Air Force Base",
            "University of South Florida",
            "BayCare Health System",
            "Hillsborough County Public Schools",
        ]),
        landmarks: strings(&[
            "Tampa Riverwalk",
            "Ybor City",
            "Bayshore Boulevard",
            "Amalie Arena",
            "Raymond James Stadium",
        ]),
        neighborhoods: strings(&[
            "Hyde Park",
            "Seminole Heights",
            "Channelside",
            "Westshore",
            "Davis Islands",
            "Tampa Heights",
        ]),
        construction_context: ConstructionContext {
            flood_zones: "AE and VE zones along Hillsborough Bay, Davis Islands and South Tampa; X \
                          zones inland"
                .to_string(),
            soil_conditions: "Sandy soils over limestone with sinkhole potential in northern \
                              neighborhoods"
                .to_string(),
            historic_districts: strings(&[
                "Ybor City",
                "Hyde Park",
                "Seminole Heights",
                "Tampa Heights",
            ]),
            permit_authority: "City of Tampa Development Services".to_string(),
            avg_permit_time: "4-8 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "Architectural Review Commission approval in historic districts",
                "Tree protection ordinance compliance",
                "Stormwater management plan for new impervious area",
            ])),
        },
        weather_factors: strings(&[
            "Hurricane storm surge",
            "Frequent lightning strikes",
            "Intense summer thunderstorms",
            "Tidal and rainfall flooding",
        ]),
        nearby_areas: strings(&[
            "Brandon",
            "Temple Terrace",
            "Town 'n' Country",
            "Riverview",
        ]),
    }
}
