//! Regex patterns for schema markers and content signals
//!
//! Matching is purely textual over page source. Markers detect schema-emitting
//! components (or inline JSON-LD of the same type); content signals detect
//! page content that implies a schema should be present.

use lazy_static::lazy_static;
use regex::Regex;

/// A named pattern applied to raw page source
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl NamedPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern {}: {}", name, e)),
        }
    }

    /// `<Name` component marker, or inline JSON-LD whose @type is one of `types`
    ///
    /// JSON-LD keys and values may use either quote style, so object literals
    /// written in page source match as well as serialized JSON.
    fn for_schema(name: &'static str, types: &str) -> Self {
        Self::new(
            name,
            &format!(r#"<{}\b|["']@type["']\s*:\s*["'](?:{})["']"#, name, types),
        )
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

lazy_static! {
    /// Schema-emitting components, or inline JSON-LD with the matching @type
    pub static ref SCHEMA_PATTERNS: Vec<NamedPattern> = vec![
        NamedPattern::for_schema("LocalBusinessSchema", "LocalBusiness|GeneralContractor"),
        NamedPattern::for_schema("ServiceSchema", "Service"),
        NamedPattern::for_schema("FAQSchema", "FAQPage"),
        NamedPattern::for_schema("BreadcrumbSchema", "BreadcrumbList"),
        NamedPattern::for_schema("ArticleSchema", "Article|BlogPosting"),
        NamedPattern::for_schema("OrganizationSchema", "Organization"),
        NamedPattern::for_schema("ReviewSchema", "Review|AggregateRating"),
    ];

    /// Content that implies a schema type belongs on the page
    pub static ref CONTENT_PATTERNS: Vec<NamedPattern> = vec![
        NamedPattern::new(
            "hasFAQ",
            r"(?i)frequently asked questions|\bfaqs?\b|localFaqs|<FAQ(?:Section|Accordion)\b",
        ),
        NamedPattern::new(
            "hasBreadcrumbs",
            r#"<Breadcrumbs?\b|aria-label=["']breadcrumb["']"#,
        ),
        NamedPattern::new(
            "hasReviews",
            r"(?i)testimonials?\b|<Reviews?\b|customer reviews|star rating",
        ),
        NamedPattern::new(
            "hasServiceContent",
            r"(?i)our services|services we offer|<ServiceCard\b|keyFactors|projectTypes",
        ),
        NamedPattern::new(
            "hasLocationContent",
            r"(?i)getLocationData|getNearbyLocations|areas we serve|service areas?\b",
        ),
        NamedPattern::new(
            "hasArticle",
            r"(?i)<article\b|datePublished|publishedAt|blog post",
        ),
    ];
}

/// "signal present AND schema missing" emits `code`
pub struct RecommendationRule {
    pub code: &'static str,
    pub signal: &'static str,
    pub missing_schema: &'static str,
}

pub const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        code: "ADD_FAQ_SCHEMA",
        signal: "hasFAQ",
        missing_schema: "FAQSchema",
    },
    RecommendationRule {
        code: "ADD_BREADCRUMB_SCHEMA",
        signal: "hasBreadcrumbs",
        missing_schema: "BreadcrumbSchema",
    },
    RecommendationRule {
        code: "ADD_REVIEW_SCHEMA",
        signal: "hasReviews",
        missing_schema: "ReviewSchema",
    },
    RecommendationRule {
        code: "ADD_SERVICE_SCHEMA",
        signal: "hasServiceContent",
        missing_schema: "ServiceSchema",
    },
    RecommendationRule {
        code: "ADD_LOCAL_BUSINESS_SCHEMA",
        signal: "hasLocationContent",
        missing_schema: "LocalBusinessSchema",
    },
    RecommendationRule {
        code: "ADD_ARTICLE_SCHEMA",
        signal: "hasArticle",
        missing_schema: "ArticleSchema",
    },
];

/// Names of every schema marker, in table order
pub fn schema_names() -> impl Iterator<Item = &'static str> {
    SCHEMA_PATTERNS.iter().map(|p| p.name)
}

/// Every recommendation code, in rule order
pub fn recommendation_codes() -> impl Iterator<Item = &'static str> {
    RECOMMENDATION_RULES.iter().map(|r| r.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(name: &str) -> &'static NamedPattern {
        SCHEMA_PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    fn signal(name: &str) -> &'static NamedPattern {
        CONTENT_PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_component_markers_match() {
        assert!(schema("FAQSchema").is_match("<FAQSchema faqs={content.localFaqs} />"));
        assert!(schema("LocalBusinessSchema").is_match("<LocalBusinessSchema\n  name=\"x\" />"));
        assert!(!schema("ServiceSchema").is_match("<ServiceSchemaWrapper />"));
    }

    #[test]
    fn test_inline_json_ld_matches() {
        assert!(schema("FAQSchema").is_match(r#"{"@type": "FAQPage", "mainEntity": []}"#));
        assert!(schema("ReviewSchema").is_match(r#""@type":"AggregateRating""#));
        assert!(!schema("ServiceSchema").is_match(r#""@type": "ServiceArea""#));
    }

    #[test]
    fn test_single_quoted_object_literal_matches() {
        let faq_object = "const faqSchema = { '@context': 'https://schema.org', \
                          '@type': 'FAQPage' };";
        assert!(schema("FAQSchema").is_match(faq_object));
        assert!(schema("LocalBusinessSchema").is_match("'@type': 'GeneralContractor'"));
        assert!(schema("BreadcrumbSchema").is_match("{ '@type':'BreadcrumbList' }"));
        assert!(!schema("ServiceSchema").is_match("'@type': 'ServiceArea'"));
    }

    #[test]
    fn test_faq_signal_ignores_schema_component_name() {
        assert!(!signal("hasFAQ").is_match("import FAQSchema from '@/components/FAQSchema'"));
        assert!(signal("hasFAQ").is_match("<h2>Frequently Asked Questions</h2>"));
        assert!(signal("hasFAQ").is_match("const faqs = ["));
    }

    #[test]
    fn test_location_signal() {
        let lookup = "const location = getLocationData(params.slug);";
        assert!(signal("hasLocationContent").is_match(lookup));
        assert!(signal("hasLocationContent").is_match("<h2>Areas We Serve</h2>"));
    }

    #[test]
    fn test_rules_reference_known_names() {
        let schemas: Vec<&str> = schema_names().collect();
        let signals: Vec<&str> = CONTENT_PATTERNS.iter().map(|p| p.name).collect();
        for rule in RECOMMENDATION_RULES {
            assert!(schemas.contains(&rule.missing_schema), "{}", rule.code);
            assert!(signals.contains(&rule.signal), "{}", rule.code);
        }
    }
}
