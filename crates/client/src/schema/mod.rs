//! Static resource schema registry
//!
//! Maps Logs API resource names to their documented field sets. The registry
//! is queried only to default the field list when the caller does not supply
//! one; an unknown resource is non-fatal here and surfaces as `None`.
//!
//! Exportability is tracked separately from field knowledge: every resource
//! the Logs API serves is listed in [`EXPORTABLE_RESOURCES`], while only
//! `events` and `installations` ship with a built-in field set.

pub mod events;
pub mod installations;

pub use events::EVENTS_FIELDS;
pub use installations::INSTALLATIONS_FIELDS;

/// Every resource the Logs API serves, independent of field knowledge.
pub const EXPORTABLE_RESOURCES: &[&str] = &[
    "events",
    "installations",
    "sessions_starts",
    "crashes",
    "errors",
    "deeplinks",
    "clicks",
    "postbacks",
    "revenue_events",
    "profiles",
    "push_tokens",
];

/// Resources that may be exported without a date range.
pub const DATELESS_RESOURCES: &[&str] = &["profiles", "push_tokens"];

/// Look up the documented field set for a resource.
///
/// Returns `None` for resources without a built-in schema; callers must
/// treat that as "field defaulting does not apply", not as a failure.
pub fn resource_fields(resource: &str) -> Option<&'static [&'static str]> {
    match resource {
        "events" => Some(EVENTS_FIELDS),
        "installations" => Some(INSTALLATIONS_FIELDS),
        _ => None,
    }
}

/// Check whether a resource is part of the documented Logs API surface.
pub fn is_exportable(resource: &str) -> bool {
    EXPORTABLE_RESOURCES.contains(&resource)
}

/// Check whether a resource requires `date_since` / `date_until`.
pub fn requires_date_range(resource: &str) -> bool {
    !DATELESS_RESOURCES.contains(&resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_resources_resolve_their_fields() {
        assert_eq!(resource_fields("events"), Some(EVENTS_FIELDS));
        assert_eq!(resource_fields("installations"), Some(INSTALLATIONS_FIELDS));
        assert_eq!(resource_fields("profiles"), None);
        assert_eq!(resource_fields("nonsense"), None);
    }

    #[test]
    fn test_field_order_is_preserved() {
        assert_eq!(EVENTS_FIELDS.first(), Some(&"application_id"));
        assert_eq!(EVENTS_FIELDS.last(), Some(&"session_id"));
        assert_eq!(INSTALLATIONS_FIELDS.last(), Some(&"match_type"));
    }

    #[test]
    fn test_exportable_set_is_a_superset_of_the_registry() {
        assert!(is_exportable("events"));
        assert!(is_exportable("installations"));
        assert!(is_exportable("profiles"));
        assert!(is_exportable("push_tokens"));
        assert!(!is_exportable("nonsense"));
    }

    #[test]
    fn test_only_profiles_and_push_tokens_skip_the_date_range() {
        assert!(!requires_date_range("profiles"));
        assert!(!requires_date_range("push_tokens"));
        assert!(requires_date_range("events"));
        assert!(requires_date_range("crashes"));
        assert!(requires_date_range("nonsense"));
    }
}
