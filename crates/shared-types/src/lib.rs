pub mod types;

pub use types::{
    ComparisonData, ComparisonRow, ConstructionContext, KeyFactor, LocalFaq, Location,
    ServiceLocationContent,
};
