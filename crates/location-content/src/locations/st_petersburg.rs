//! St. Petersburg, Pinellas County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "st-petersburg".to_string(),
        name: "St. Petersburg".to_string(),
        county: "Pinellas County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~258,000".to_string(),
        median_income: "$67,000".to_string(),
        commercial_growth: "Downtown high-rise residential, Edge District mixed-use and marine \
                            science facilities"
            .to_string(),
        development_notes: "Limited vacant land drives redevelopment of older commercial strips \
                            and waterfront parcels"
            .to_string(),
        major_employers: strings(&[
            "Raymond James Financial",
            "Jabil",
            "Bayfront Health",
            "Johns Hopkins All Children's Hospital",
            "USF St. Petersburg",
        ]),
        landmarks: strings(&[
            "The Dali Museum",
            "St. Pete Pier",
            "Tropicana Field",
            "Sunken Gardens",
            "Vinoy Park",
        ]),
        neighborhoods: strings(&[
            "Old Northeast",
            "Kenwood",
            "Snell Isle",
            "Crescent Lake",
            "Roser Park",
            "Grand Central",
        ]),
        construction_context: ConstructionContext {
            flood_zones: "Large share of the city in AE and VE coastal high hazard areas, \
                          including Snell Isle and Shore Acres"
                .to_string(),
            soil_conditions: "Fine sands with a high water table close to the bay".to_string(),
            historic_districts: strings(&["Old Northeast", "Roser Park", "Kenwood", "Round Lake"]),
            permit_authority: "City of St. Petersburg Construction Services and Permitting"
                .to_string(),
            avg_permit_time: "3-6 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "Substantial improvement (50% rule) review in flood zones",
                "Certificate of Appropriateness in local historic districts",
            ])),
        },
        weather_factors: strings(&[
            "Hurricane storm surge",
            "Saltwater corrosion",
            "Tidal flooding",
            "High winds off Tampa Bay and the Gulf",
        ]),
        nearby_areas: strings(&[
            "Clearwater",
            "Largo",
            "Pinellas Park",
            "Gulfport",
            "Tampa",
        ]),
    }
}
