//! Endpoint tables, one per URL category
//!
//! Each table lists the REST actions of one category exactly as the server
//! publishes them. [`CATEGORIES`] is the registry used for lookups by key.

mod admin;
mod alignment;
mod clinical;
mod families;
mod ga4gh;
mod meta;
mod projects;
mod samples;

pub use admin::ADMIN;
pub use alignment::ALIGNMENT;
pub use clinical::CLINICAL;
pub use families::FAMILIES;
pub use ga4gh::GA4GH;
pub use meta::META;
pub use projects::PROJECTS;
pub use samples::SAMPLES;

use crate::endpoint::Category;
use crate::error::{ClientError, Result};

/// Every category the client knows about
pub static CATEGORIES: &[&Category] = &[
    &ALIGNMENT, &CLINICAL, &FAMILIES, &SAMPLES, &PROJECTS, &META, &ADMIN, &GA4GH,
];

/// Find a category by key (`families`) or URL path (`analysis/clinical`)
pub fn category(name: &str) -> Result<&'static Category> {
    CATEGORIES
        .iter()
        .copied()
        .find(|c| c.key == name || c.path == name)
        .ok_or_else(|| ClientError::UnknownCategory(name.to_string()))
}
