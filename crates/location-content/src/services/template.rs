//! Phrase helpers shared by template-backed services

use shared_types::Location;

/// Join up to `limit` items as prose ("a, b and c"), or `fallback` when empty
pub fn list_phrase(items: &[String], limit: usize, fallback: &str) -> String {
    let items: Vec<String> = items
        .iter()
        .take(limit)
        .map(|s| lowercase_first(s))
        .collect();

    match items.as_slice() {
        [] => fallback.to_string(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// First item or `fallback`
pub fn first_or<'a>(items: &'a [String], fallback: &'a str) -> &'a str {
    items.first().map(String::as_str).unwrap_or(fallback)
}

/// Short "Neighborhood, Neighborhood" list for FAQ answers
pub fn neighborhood_phrase(location: &Location) -> String {
    if location.neighborhoods.is_empty() {
        format!("every part of {}", location.name)
    } else {
        let names: Vec<&str> = location
            .neighborhoods
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        format!("{} and across {}", names.join(", "), location.name)
    }
}

/// Whether the location's weather factors mention a keyword
pub fn has_weather_factor(location: &Location, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    location
        .weather_factors
        .iter()
        .any(|factor| factor.to_lowercase().contains(&keyword))
}

/// "Hurricane storm surge" -> "hurricane storm surge"; acronyms like "FEMA" keep their case
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    if rest.chars().next().is_some_and(char::is_uppercase) {
        return s.to_string();
    }
    first.to_lowercase().chain(rest.chars()).collect()
}
