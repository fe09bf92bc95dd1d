//! Clearwater, Pinellas County

use super::strings;
use shared_types::{ConstructionContext, Location};

pub fn location() -> Location {
    Location {
        slug: "clearwater".to_string(),
        name: "Clearwater".to_string(),
        county: "Pinellas County".to_string(),
        metro: "Tampa Bay".to_string(),
        population: "~117,000".to_string(),
        median_income: "$61,000".to_string(),
        commercial_growth: "Hospitality and beachfront resort work on Clearwater Beach; downtown \
                            waterfront redevelopment around Coachman Park"
            .to_string(),
        development_notes: "Beach properties sit seaward of the Coastal Construction Control Line \
                            and face state-level review"
            .to_string(),
        major_employers: strings(&[
            "BayCare Health System",
            "Morton Plant Hospital",
            "TD SYNNEX",
            "Honeywell Aerospace",
        ]),
        landmarks: strings(&[
            "Clearwater Beach",
            "Pier 60",
            "Clearwater Marine Aquarium",
            "Coachman Park",
        ]),
        neighborhoods: strings(&[
            "Clearwater Beach",
            "Island Estates",
            "Countryside",
            "Downtown Clearwater",
        ]),
        construction_context: ConstructionContext {
            flood_zones: "VE zones on the barrier island; AE zones along Clearwater Harbor"
                .to_string(),
            soil_conditions: "Beach sands on the island, sandy loam on the mainland bluff"
                .to_string(),
            historic_districts: strings(&["Harbor Oaks"]),
            permit_authority: "City of Clearwater Planning and Development".to_string(),
            avg_permit_time: "4-6 weeks for commercial projects".to_string(),
            special_requirements: Some(strings(&[
                "FDEP Coastal Construction Control Line permit for beachfront work",
                "Beach by Design overlay standards",
            ])),
        },
        weather_factors: strings(&[
            "Hurricane storm surge",
            "Saltwater corrosion",
            "Beach erosion",
            "High winds",
        ]),
        nearby_areas: strings(&["Largo", "Dunedin", "Safety Harbor", "St Petersburg"]),
    }
}
