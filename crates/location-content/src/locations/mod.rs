//! Service-area fact sheets
//!
//! One module per location. Order here is the navigation order exposed by
//! the registry, with the primary market (Tampa) first.

pub mod brandon;
pub mod clearwater;
pub mod lakeland;
pub mod largo;
pub mod riverview;
pub mod sarasota;
pub mod st_petersburg;
pub mod tampa;
pub mod temple_terrace;
pub mod town_n_country;
pub mod wesley_chapel;

use shared_types::Location;

/// Every built-in location, in navigation order
pub fn all() -> Vec<Location> {
    vec![
        // Hillsborough County
        tampa::location(),
        brandon::location(),
        riverview::location(),
        temple_terrace::location(),
        town_n_country::location(),
        // Pinellas County
        st_petersburg::location(),
        clearwater::location(),
        largo::location(),
        // Surrounding counties
        wesley_chapel::location(),
        lakeland::location(),
        sarasota::location(),
    ]
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
