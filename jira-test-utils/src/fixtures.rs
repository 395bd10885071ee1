//! Canned Jira payloads used by endpoint tests.

/// `GET rest/api/2/field`
pub const FIELDS: &str = include_str!("fixtures/fields.json");

/// `GET rest/api/2/resolution`
pub const RESOLUTIONS: &str = include_str!("fixtures/resolutions.json");

/// `GET rest/api/2/statuscategory`
pub const STATUS_CATEGORIES: &str = include_str!("fixtures/status_categories.json");

