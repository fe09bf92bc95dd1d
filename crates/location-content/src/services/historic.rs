//! Historic restoration content

use super::table::ContentTable;
use super::Service;
use crate::error::ContentError;
use lazy_static::lazy_static;
use shared_types::{ComparisonData, ComparisonRow, KeyFactor, LocalFaq, ServiceLocationContent};

lazy_static! {
    static ref TABLE: ContentTable = build_table()
        .unwrap_or_else(|e| panic!("historic restoration content table is malformed: {}", e));
}

pub fn table() -> &'static ContentTable {
    &TABLE
}

pub fn build_table() -> Result<ContentTable, ContentError> {
    ContentTable::new(
        Service::HistoricRestoration,
        "tampa",
        vec![
            ("tampa", tampa()),
            ("st-petersburg", st_petersburg()),
            ("lakeland", lakeland()),
        ],
    )
}

fn tampa() -> ServiceLocationContent {
    ServiceLocationContent {
        local_context: "Tampa's historic fabric ranges from Ybor City's brick cigar factories and \
                        cast-iron balconies to the bungalows of Seminole Heights and the Queen \
                        Anne homes of Hyde Park. Restoration inside these districts runs through \
                        the Architectural Review Commission, which reviews materials, window \
                        replacements and additions against the district guidelines."
            .to_string(),
        key_factors: vec![
            KeyFactor::new(
                "Certificate of Appropriateness",
                "Exterior work visible from the street in a local district needs ARC approval \
                 before a building permit issues.",
            ),
            KeyFactor::new(
                "Historic brick and mortar",
                "Ybor City's soft, low-fired brick needs lime-based mortar; modern Portland mixes \
                 crack the masonry.",
            ),
            KeyFactor::new(
                "Wood window repair",
                "Original wood windows are repaired and fitted with storm protection rather than \
                 replaced wherever guidelines require it.",
            ),
        ],
        comparison_data: Some(ComparisonData {
            headers: vec![
                "Ybor City".to_string(),
                "Hyde Park".to_string(),
                "Seminole Heights".to_string(),
            ],
            rows: vec![
                ComparisonRow::new("Predominant era", &["1886-1930", "1886-1933", "1911-1940"]),
                ComparisonRow::new(
                    "Typical construction",
                    &["Brick masonry", "Wood frame", "Wood frame bungalow"],
                ),
                ComparisonRow::new("Review body", &["Barrio Latino Commission", "ARC", "ARC"]),
            ],
        }),
        local_faqs: vec![
            LocalFaq::new(
                "Do I need approval to restore a building in Ybor City?",
                "Yes. The Barrio Latino Commission reviews exterior work in Ybor City, and a \
                 Certificate of Appropriateness is required before permitting.",
            ),
            LocalFaq::new(
                "Can historic homes in Tampa get hurricane protection?",
                "Yes. Removable panels, interior storm windows and concealed reinforcement are \
                 routinely approved when they preserve the historic appearance.",
            ),
        ],
        project_types: Some(vec![
            "Masonry restoration".to_string(),
            "Wood window restoration".to_string(),
            "Facade rehabilitation".to_string(),
            "Adaptive reuse".to_string(),
        ]),
    }
}

fn st_petersburg() -> ServiceLocationContent {
    ServiceLocationContent {
        local_context: "St. Petersburg's Old Northeast, Roser Park and Kenwood districts hold the \
                        city's 1910s-1920s Mediterranean Revival and Craftsman homes. Many sit in \
                        flood zones, so restoration often balances preservation guidelines with \
                        elevation and the 50% rule, where historic designation can provide relief."
            .to_string(),
        key_factors: vec![
            KeyFactor::new(
                "Flood relief for designated structures",
                "Locally designated historic buildings can qualify for exemption from the \
                 substantial improvement rule when work preserves their historic character.",
            ),
            KeyFactor::new(
                "Stucco and hollow clay tile",
                "Mediterranean Revival walls often use hollow clay tile behind stucco and need \
                 compatible patching materials.",
            ),
        ],
        comparison_data: None,
        local_faqs: vec![
            LocalFaq::new(
                "Does historic designation help with St. Petersburg flood rules?",
                "It can. Designated historic structures may be exempt from substantial improvement \
                 requirements when the work keeps their historic designation.",
            ),
            LocalFaq::new(
                "Which St. Petersburg neighborhoods are historic districts?",
                "Old Northeast (North Shore), Roser Park, Kenwood and Round Lake are among the \
                 city's local and national districts.",
            ),
        ],
        project_types: Some(vec![
            "Mediterranean Revival restoration".to_string(),
            "Craftsman bungalow restoration".to_string(),
            "Historic elevation projects".to_string(),
        ]),
    }
}

fn lakeland() -> ServiceLocationContent {
    ServiceLocationContent {
        local_context: "Lakeland's downtown around Munn Park and the Dixieland, Lake Morton and \
                        Beacon Hill neighborhoods make up one of Central Florida's largest \
                        collections of historic districts. Restoration here also contends with \
                        karst soils, so foundation work often starts with a geotechnical review."
            .to_string(),
        key_factors: vec![
            KeyFactor::new(
                "Historic Preservation Board",
                "Exterior changes in Lakeland's districts go before the Historic Preservation \
                 Board or its staff for review.",
            ),
            KeyFactor::new(
                "Foundation settlement",
                "Sinkhole-prone soils cause settlement in older pier foundations, which are \
                 stabilized before finishes are restored.",
            ),
        ],
        comparison_data: None,
        local_faqs: vec![
            LocalFaq::new(
                "Do you restore homes in Lakeland's Dixieland district?",
                "Yes. We work across Dixieland, Lake Morton, Beacon Hill and the Munn Park \
                 commercial district.",
            ),
            LocalFaq::new(
                "How do you handle settlement in historic Lakeland homes?",
                "We start with a geotechnical evaluation, then stabilize piers or footings before \
                 repairing plaster, framing and finishes.",
            ),
        ],
        project_types: Some(vec![
            "Bungalow restoration".to_string(),
            "Foundation stabilization".to_string(),
            "Downtown storefront rehabilitation".to_string(),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::get_location_data;

    #[test]
    fn test_table_builds() {
        let table = build_table().unwrap();
        let slugs: Vec<&str> = table.slugs().collect();
        assert_eq!(slugs, vec!["tampa", "st-petersburg", "lakeland"]);
    }

    #[test]
    fn test_lakeland_has_own_entry() {
        let location = get_location_data("lakeland").unwrap();
        let content = table().resolve(location);
        assert!(content.local_context.contains("Munn Park"));
    }

    #[test]
    fn test_sarasota_falls_back_to_default() {
        let location = get_location_data("sarasota").unwrap();
        assert_eq!(&table().resolve(location), table().default_entry());
    }
}
