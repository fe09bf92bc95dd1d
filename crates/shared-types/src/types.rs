#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub slug: String, // e.g., "st-petersburg"
    pub name: String, // e.g., "St. Petersburg"
    pub county: String,
    pub metro: String,
    pub population: String,
    pub median_income: String,
    pub commercial_growth: String,
    pub development_notes: String,
    pub major_employers: Vec<String>,
    pub landmarks: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub construction_context: ConstructionContext,
    pub weather_factors: Vec<String>,
    pub nearby_areas: Vec<String>, // Display names, resolved by name at lookup time
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionContext {
    pub flood_zones: String,
    pub soil_conditions: String,
    pub historic_districts: Vec<String>,
    pub permit_authority: String,
    pub avg_permit_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocationContent {
    pub local_context: String,
    pub key_factors: Vec<KeyFactor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_data: Option<ComparisonData>,
    pub local_faqs: Vec<LocalFaq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyFactor {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonData {
    pub headers: Vec<String>,
    pub rows: Vec<ComparisonRow>, // Each row carries one value per header
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LocalFaq {
    pub question: String,
    pub answer: String,
}

impl ComparisonData {
    /// Index of the first row whose width differs from the header count
    pub fn first_misaligned_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.values.len() != self.headers.len())
    }
}

impl KeyFactor {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl LocalFaq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl ComparisonRow {
    pub fn new(label: impl Into<String>, values: &[&str]) -> Self {
        Self {
            label: label.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}
