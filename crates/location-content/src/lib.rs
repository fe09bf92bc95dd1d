//! Location and service content for hyper-local service pages
//!
//! Two layers, leaves first:
//! - [`registry`]: immutable table of location fact sheets, looked up by slug
//! - [`services`]: per-service resolvers that turn a Location into page copy
//!
//! ```
//! use location_content::{get_location_data, Service};
//!
//! let tampa = get_location_data("tampa").expect("tampa is registered");
//! let content = Service::MultiFamily.resolve(tampa);
//! assert!(content.local_faqs[0].question.contains("Tampa"));
//! ```

pub mod error;
pub mod locations;
pub mod normalize;
pub mod registry;
pub mod seo;
pub mod services;

pub use error::ContentError;
pub use registry::{
    get_all_locations, get_location_data, get_nearby_locations, registry, LocationRegistry,
};
pub use services::{validate_builtin_content, ContentStrategy, ContentTable, Service};
pub use shared_types::{Location, ServiceLocationContent};

/// Resolve a page's content from a URL slug and service
///
/// Returns `None` only when the slug matches no registered location; callers
/// typically fall back to a default location or skip the optional section.
pub fn resolve_page(
    service: Service,
    location_slug: &str,
) -> Option<(&'static Location, ServiceLocationContent)> {
    let location = get_location_data(location_slug)?;
    Some((location, service.resolve(location)))
}
