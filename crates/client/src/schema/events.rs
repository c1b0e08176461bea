//! Field set of the `events` export resource.

/// All documented fields of the events export, in documentation order.
pub const EVENTS_FIELDS: &[&str] = &[
    "application_id",
    "ios_ifa",
    "ios_ifv",
    "android_id",
    "google_aid",
    "windows_aid",
    "profile_id",
    "os_name",
    "os_version",
    "device_manufacturer",
    "device_model",
    "device_type",
    "device_locale",
    "device_ipv6",
    "app_version_name",
    "app_package_name",
    "app_build_number",
    "event_name",
    "event_json",
    "event_datetime",
    "event_timestamp",
    "event_receive_datetime",
    "event_receive_timestamp",
    "connection_type",
    "operator_name",
    "mcc",
    "mnc",
    "country_iso_code",
    "city",
    "appmetrica_device_id",
    "installation_id",
    "session_id",
];
