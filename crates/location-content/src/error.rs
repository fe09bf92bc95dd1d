use thiserror::Error;

/// Authoring errors in compiled-in location or service content tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Invalid location slug: {0:?}")]
    InvalidSlug(String),

    #[error("Duplicate location slug: {0}")]
    DuplicateSlug(String),

    #[error("{service}: duplicate content entry for '{slug}'")]
    DuplicateEntry { service: String, slug: String },

    #[error("{service}: default entry '{default_key}' is not in the table")]
    MissingDefault { service: String, default_key: String },

    #[error("{service}/{slug}: comparison row {row} has {found} values but {expected} headers")]
    ComparisonShape {
        service: String,
        slug: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{service}/{slug}: local context is empty")]
    EmptyLocalContext { service: String, slug: String },

    #[error("{service}/{slug}: at least one local FAQ is required")]
    MissingFaqs { service: String, slug: String },
}
