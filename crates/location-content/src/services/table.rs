//! Hand-authored content tables keyed by location slug

use super::Service;
use crate::error::ContentError;
use shared_types::{Location, ServiceLocationContent};
use std::collections::HashMap;

/// Per-location content for one service, with a designated default entry
#[derive(Debug, Clone)]
pub struct ContentTable {
    service: Service,
    entries: Vec<(String, ServiceLocationContent)>,
    index: HashMap<String, usize>,
    default_index: usize,
}

impl ContentTable {
    /// Build a table, validating every entry up front
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two entries share a slug
    /// - `default_key` has no entry
    /// - Any entry fails [`validate_content`]
    pub fn new(
        service: Service,
        default_key: &str,
        entries: Vec<(&str, ServiceLocationContent)>,
    ) -> Result<Self, ContentError> {
        let mut index = HashMap::with_capacity(entries.len());
        let mut owned = Vec::with_capacity(entries.len());

        for (position, (slug, content)) in entries.into_iter().enumerate() {
            validate_content(service, slug, &content)?;
            if index.insert(slug.to_string(), position).is_some() {
                return Err(ContentError::DuplicateEntry {
                    service: service.slug().to_string(),
                    slug: slug.to_string(),
                });
            }
            owned.push((slug.to_string(), content));
        }

        let default_index =
            *index
                .get(default_key)
                .ok_or_else(|| ContentError::MissingDefault {
                    service: service.slug().to_string(),
                    default_key: default_key.to_string(),
                })?;

        Ok(Self {
            service,
            entries: owned,
            index,
            default_index,
        })
    }

    /// Exact-slug entry, if the table has one
    pub fn get(&self, slug: &str) -> Option<&ServiceLocationContent> {
        self.index.get(slug).map(|&i| &self.entries[i].1)
    }

    pub fn default_entry(&self) -> &ServiceLocationContent {
        &self.entries[self.default_index].1
    }

    pub fn default_key(&self) -> &str {
        &self.entries[self.default_index].0
    }

    /// Slugs with hand-authored entries, in authoring order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(slug, _)| slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for the location's slug, or the default entry
    pub fn resolve(&self, location: &Location) -> ServiceLocationContent {
        match self.get(&location.slug) {
            Some(content) => content.clone(),
            None => {
                tracing::debug!(
                    service = %self.service,
                    slug = %location.slug,
                    default = %self.default_key(),
                    "no authored content for location, using default entry"
                );
                self.default_entry().clone()
            }
        }
    }
}

/// Check the authoring rules every content bundle must satisfy
///
/// - `local_context` is not blank
/// - at least one local FAQ
/// - every comparison row has one value per header
pub fn validate_content(
    service: Service,
    slug: &str,
    content: &ServiceLocationContent,
) -> Result<(), ContentError> {
    if content.local_context.trim().is_empty() {
        return Err(ContentError::EmptyLocalContext {
            service: service.slug().to_string(),
            slug: slug.to_string(),
        });
    }

    if content.local_faqs.is_empty() {
        return Err(ContentError::MissingFaqs {
            service: service.slug().to_string(),
            slug: slug.to_string(),
        });
    }

    if let Some(ref comparison) = content.comparison_data {
        if let Some(row) = comparison.first_misaligned_row() {
            return Err(ContentError::ComparisonShape {
                service: service.slug().to_string(),
                slug: slug.to_string(),
                row,
                expected: comparison.headers.len(),
                found: comparison.rows[row].values.len(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::{lakeland, tampa};
    use pretty_assertions::assert_eq;
    use shared_types::{ComparisonData, ComparisonRow, LocalFaq};

    fn content(context: &str) -> ServiceLocationContent {
        ServiceLocationContent {
            local_context: context.to_string(),
            key_factors: Vec::new(),
            comparison_data: None,
            local_faqs: vec![LocalFaq::new("Question?", "Answer.")],
            project_types: None,
        }
    }

    #[test]
    fn test_exact_entry_wins() {
        let table = ContentTable::new(
            Service::CommercialConstruction,
            "tampa",
            vec![
                ("tampa", content("Tampa copy")),
                ("lakeland", content("Lakeland copy")),
            ],
        )
        .unwrap();
        let resolved = table.resolve(&lakeland::location());
        assert_eq!(resolved.local_context, "Lakeland copy");
    }

    #[test]
    fn test_unlisted_location_gets_default() {
        let table = ContentTable::new(
            Service::CommercialConstruction,
            "tampa",
            vec![("tampa", content("Tampa copy"))],
        )
        .unwrap();
        let resolved = table.resolve(&lakeland::location());
        assert_eq!(resolved.local_context, "Tampa copy");
        assert!(table.get("lakeland").is_none());
        assert_eq!(table.default_key(), "tampa");
    }

    #[test]
    fn test_missing_default_rejected() {
        let result = ContentTable::new(
            Service::HistoricRestoration,
            "sarasota",
            vec![("tampa", content("Tampa copy"))],
        );
        assert!(matches!(result, Err(ContentError::MissingDefault { .. })));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let result = ContentTable::new(
            Service::HistoricRestoration,
            "tampa",
            vec![("tampa", content("One")), ("tampa", content("Two"))],
        );
        assert!(matches!(result, Err(ContentError::DuplicateEntry { .. })));
    }

    #[test]
    fn test_ragged_comparison_rejected() {
        let mut ragged = content("Copy");
        ragged.comparison_data = Some(ComparisonData {
            headers: vec!["Tampa".to_string(), "Florida".to_string()],
            rows: vec![
                ComparisonRow::new("Wind", &["145 mph", "130 mph"]),
                ComparisonRow::new("Permits", &["4-8 weeks"]),
            ],
        });
        let result = ContentTable::new(
            Service::CommercialConstruction,
            "tampa",
            vec![("tampa", ragged)],
        );
        assert_eq!(
            result.unwrap_err(),
            ContentError::ComparisonShape {
                service: "commercial-construction".to_string(),
                slug: "tampa".to_string(),
                row: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_blank_context_rejected() {
        let result = validate_content(Service::Waterproofing, "tampa", &content("   "));
        assert!(matches!(result, Err(ContentError::EmptyLocalContext { .. })));
    }

    #[test]
    fn test_missing_faqs_rejected() {
        let mut no_faqs = content("Copy");
        no_faqs.local_faqs.clear();
        let result = validate_content(Service::Waterproofing, "tampa", &no_faqs);
        assert!(matches!(result, Err(ContentError::MissingFaqs { .. })));
    }

    #[test]
    fn test_resolve_is_reproducible() {
        let table = ContentTable::new(
            Service::CommercialConstruction,
            "tampa",
            vec![("tampa", content("Tampa copy"))],
        )
        .unwrap();
        let location = tampa::location();
        assert_eq!(table.resolve(&location), table.resolve(&location));
    }
}
