//! Validation for the `[api]` section.

use crate::schema::SenseiConfig;

use super::helpers::validate_range;

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &SenseiConfig) {
    let api = &config.api;

    if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }

    validate_range(errors, "api.timeout_secs", api.timeout_secs, 1, 600);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        600,
    );

    if api.connect_timeout_secs > api.timeout_secs {
        errors.push(format!(
            "api.connect_timeout_secs = {} exceeds api.timeout_secs = {}",
            api.connect_timeout_secs, api.timeout_secs
        ));
    }
}
