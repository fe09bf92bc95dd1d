//! Commercial construction content
//!
//! Hand-authored per market. Tampa is the primary market and the default for
//! any location without its own entry.

use super::table::ContentTable;
use super::Service;
use crate::error::ContentError;
use lazy_static::lazy_static;
use shared_types::{ComparisonData, ComparisonRow, KeyFactor, LocalFaq, ServiceLocationContent};

lazy_static! {
    static ref TABLE: ContentTable = build_table()
        .unwrap_or_else(|e| panic!("commercial construction content table is malformed: {}", e));
}

pub fn table() -> &'static ContentTable {
    &TABLE
}

pub fn build_table() -> Result<ContentTable, ContentError> {
    ContentTable::new(
        Service::CommercialConstruction,
        "tampa",
        vec![
            ("tampa", tampa()),
            ("st-petersburg", st_petersburg()),
            ("clearwater", clearwater()),
            ("sarasota", sarasota()),
        ],
    )
}

fn project_types() -> Vec<String> {
    vec![
        "Office buildings".to_string(),
        "Retail centers".to_string(),
        "Medical office buildings".to_string(),
        "Restaurants".to_string(),
        "Warehouses and flex space".to_string(),
        "Tenant improvements".to_string(),
    ]
}

fn tampa() -> ServiceLocationContent {
    ServiceLocationContent {
        local_context: "Tampa's commercial market is split between downtown towers around Water \
                        Street, the Westshore business district and medical campuses near Tampa \
                        General. Projects here move through City of Tampa Development Services, \
                        and sites in Ybor City, Hyde Park and Tampa Heights add Architectural \
                        Review Commission approval to the schedule."
            .to_string(),
        key_factors: vec![
            KeyFactor::new(
                "Wind-borne debris region",
                "Most of Tampa sits inside the wind-borne debris region, so storefronts and \
                 curtain walls need impact-rated glazing or approved shutters.",
            ),
            KeyFactor::new(
                "Flood zone elevation",
                "Sites in South Tampa and along Hillsborough Bay fall in AE and VE zones and must \
                 meet FEMA elevation or dry floodproofing requirements.",
            ),
            KeyFactor::new(
                "Sinkhole screening",
                "Northern Tampa's limestone geology calls for geotechnical borings before \
                 foundation design on larger buildings.",
            ),
            KeyFactor::new(
                "Historic review",
                "Exterior changes inside Ybor City and Hyde Park require a Certificate of \
                 Appropriateness before permits issue.",
            ),
        ],
        comparison_data: Some(ComparisonData {
            headers: vec!["Tampa".to_string(), "Florida average".to_string()],
            rows: vec![
                ComparisonRow::new("Commercial permit review", &["4-8 weeks", "6-10 weeks"]),
                ComparisonRow::new("Design wind speed (Risk II)", &["145 mph", "130-170 mph"]),
                ComparisonRow::new("Annual lightning days", &["80-100", "70-90"]),
                ComparisonRow::new("Historic districts", &["4 local districts", "Varies"]),
            ],
        }),
        local_faqs: vec![
            LocalFaq::new(
                "How long does commercial permitting take in Tampa?",
                "Most commercial permits through City of Tampa Development Services take four to \
                 eight weeks. Projects in historic districts add Architectural Review Commission \
                 time, typically another three to six weeks.",
            ),
            LocalFaq::new(
                "Do commercial buildings in Tampa need impact windows?",
                "Yes for most of the city. Tampa lies within the wind-borne debris region, so \
                 glazed openings need impact-rated products or tested shutter systems.",
            ),
            LocalFaq::new(
                "Can you build in a Tampa flood zone?",
                "Yes. Buildings in AE and VE zones are designed with the lowest floor at or above \
                 base flood elevation, or are dry floodproofed where the code allows for \
                 non-residential use.",
            ),
        ],
        project_types: Some(project_types()),
    }
}

fn st_petersburg() -> ServiceLocationContent {
    ServiceLocationContent {
        local_context: "St. Petersburg has little vacant land left, so most commercial work is \
                        redevelopment: downtown ground-floor retail, Edge District mixed-use and \
                        conversions along Central Avenue. A large share of the city lies in \
                        coastal high hazard areas, which puts the FEMA 50% substantial improvement \
                        rule at the center of many renovation budgets."
            .to_string(),
        key_factors: vec![
            KeyFactor::new(
                "Substantial improvement rule",
                "Renovations costing 50% or more of a building's market value in a flood zone \
                 trigger full flood compliance for the whole structure.",
            ),
            KeyFactor::new(
                "Salt air exposure",
                "Fasteners, rebar cover and exterior finishes are specified for a marine \
                 environment within a few blocks of the bay.",
            ),
            KeyFactor::new(
                "Infill logistics",
                "Tight downtown lots mean staging plans, right-of-way permits and coordinated \
                 deliveries.",
            ),
        ],
        comparison_data: Some(ComparisonData {
            headers: vec!["St. Petersburg".to_string(), "Tampa".to_string()],
            rows: vec![
                ComparisonRow::new("Commercial permit review", &["3-6 weeks", "4-8 weeks"]),
                ComparisonRow::new(
                    "Share of land in flood zones",
                    &["Roughly half", "About a quarter"],
                ),
                ComparisonRow::new(
                    "Typical project type",
                    &["Redevelopment", "New and redevelopment"],
                ),
            ],
        }),
        local_faqs: vec![
            LocalFaq::new(
                "What is the 50% rule in St. Petersburg?",
                "If improvements to a building in a flood zone cost 50% or more of its market \
                 value, the entire building must be brought up to current flood standards. We \
                 estimate against this threshold during preconstruction.",
            ),
            LocalFaq::new(
                "Who issues commercial permits in St. Petersburg?",
                "The City of St. Petersburg Construction Services and Permitting division reviews \
                 and issues commercial building permits.",
            ),
            LocalFaq::new(
                "Do you build in downtown St. Petersburg?",
                "Yes. Downtown, the Edge District and Grand Central are active areas for our \
                 tenant improvement and mixed-use work.",
            ),
        ],
        project_types: Some(project_types()),
    }
}

fn clearwater() -> ServiceLocationContent {
    ServiceLocationContent {
        local_context: "Clearwater work divides into two very different markets: resort and \
                        hospitality projects on Clearwater Beach, seaward of the Coastal \
                        Construction Control Line, and mainland office and medical buildings \
                        serving BayCare and the downtown waterfront. Beach projects need a state \
                        FDEP permit in addition to the city's review."
            .to_string(),
        key_factors: vec![
            KeyFactor::new(
                "Coastal Construction Control Line",
                "Construction seaward of the CCCL requires a Florida Department of Environmental \
                 Protection permit with its own structural and siting standards.",
            ),
            KeyFactor::new(
                "Beach by Design",
                "Clearwater Beach projects follow the Beach by Design special area plan for \
                 height, setbacks and streetscape.",
            ),
            KeyFactor::new(
                "Corrosion protection",
                "Direct Gulf exposure means stainless or hot-dip galvanized connectors and sealed \
                 concrete.",
            ),
        ],
        comparison_data: None,
        local_faqs: vec![
            LocalFaq::new(
                "Do Clearwater Beach projects need a state permit?",
                "Yes, if they are seaward of the Coastal Construction Control Line. The FDEP CCCL \
                 permit runs alongside the City of Clearwater building permit.",
            ),
            LocalFaq::new(
                "How long does commercial permitting take in Clearwater?",
                "Mainland commercial permits typically take four to six weeks. Beach projects \
                 requiring CCCL review can take several months.",
            ),
        ],
        project_types: Some(vec![
            "Hotels and resorts".to_string(),
            "Restaurants".to_string(),
            "Medical office buildings".to_string(),
            "Retail centers".to_string(),
        ]),
    }
}

fn sarasota() -> ServiceLocationContent {
    ServiceLocationContent {
        local_context: "Sarasota's commercial projects lean toward cultural venues, boutique \
                        retail on St. Armands Circle and ground-floor space beneath downtown \
                        condominium towers. The city's form-based downtown code and coastal \
                        setbacks on the keys shape massing early in design."
            .to_string(),
        key_factors: vec![
            KeyFactor::new(
                "Form-based downtown code",
                "Downtown Sarasota uses a form-based code that fixes frontage, height and \
                 ground-floor use requirements.",
            ),
            KeyFactor::new(
                "Coastal setbacks",
                "Projects on Lido, Siesta and Longboat Keys are subject to coastal setback lines \
                 and variance review.",
            ),
        ],
        comparison_data: Some(ComparisonData {
            headers: vec!["Sarasota".to_string(), "Tampa".to_string()],
            rows: vec![
                ComparisonRow::new("Commercial permit review", &["4-8 weeks", "4-8 weeks"]),
                ComparisonRow::new(
                    "Downtown zoning",
                    &["Form-based code", "Euclidean with overlays"],
                ),
            ],
        }),
        local_faqs: vec![
            LocalFaq::new(
                "Do you build commercial projects on St. Armands Circle?",
                "Yes. St. Armands work involves tight staging, limited hours and coordination with \
                 the business district.",
            ),
            LocalFaq::new(
                "Who reviews commercial permits in Sarasota?",
                "The City of Sarasota Development Services department handles building and zoning \
                 review inside city limits.",
            ),
        ],
        project_types: Some(project_types()),
    }
}
