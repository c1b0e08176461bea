//! Field set of the `installations` export resource.

/// All documented fields of the installations export, in documentation order.
pub const INSTALLATIONS_FIELDS: &[&str] = &[
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
    "app_package_name",
    "app_version_name",
    "country_iso_code",
    "city",
    "appmetrica_device_id",
    "connection_type",
    "operator_name",
    "mcc",
    "mnc",
    "click_datetime",
    "click_id",
    "click_ipv6",
    "click_timestamp",
    "click_url_parameters",
    "click_user_agent",
    "publisher_id",
    "publisher_name",
    "tracker_name",
    "tracking_id",
    "install_datetime",
    "install_ipv6",
    "install_receive_datetime",
    "install_receive_timestamp",
    "install_timestamp",
    "is_reinstallation",
    "match_type",
];
