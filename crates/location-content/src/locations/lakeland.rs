//! Lakeland, Polk County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "lakeland".to_string(),
        name: "Lakeland".to_string(),
        county: "Polk County".to_string(),
        metro: "Lakeland-Winter Haven".to_string(),
        population: "~120,000".to_string(),
        median_income: "$55,000".to_string(),
        commercial_growth: "Distribution centers along the I-4 corridor and downtown mixed-use \
                            around Munn Park"
            .to_string(),
        development_notes: "Logistics growth between Tampa and Orlando alongside preservation of a \
                            historic downtown"
            .to_string(),
        major_employers: strings(&[
            "Publix Super Markets",
            "Lakeland Regional Health",
            "GEICO",
            "Florida Southern College",
        ]),
        landmarks: strings(&[
            "Lake Mirror",
            "Florida Southern College Frank Lloyd Wright buildings",
            "Munn Park",
            "Lake Morton",
        ]),
        neighborhoods: strings(&[
            "Dixieland",
            "Lake Morton",
            "Beacon Hill",
            "South Lake Hollingsworth",
        ]),
        construction_context: ConstructionContext {
            flood_zones: "Mostly X zones with AE areas around the city's lakes".to_string(),
            soil_conditions: "Clayey sands over karst limestone with high sinkhole risk"
                .to_string(),
            historic_districts: strings(&["Munn Park", "Dixieland", "Lake Morton", "Beacon Hill"]),
            permit_authority: "City of Lakeland Building Inspection".to_string(),
            avg_permit_time: "3-6 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "Historic Preservation Board review in downtown districts",
            ])),
        },
        weather_factors: strings(&[
            "Sinkhole activity after heavy rain",
            "Severe thunderstorms",
            "Hurricane wind inland",
        ]),
        nearby_areas: strings(&["Winter Haven", "Plant City", "Auburndale"]),
    }
}
