//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# sensei configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "http://localhost:8000"
# review_path = "/api/review"
# timeout_secs = 60          # 1-600, covers connect + full stream
# connect_timeout_secs = 10  # must not exceed timeout_secs

[conversation]
# history_length = 5         # 1-100 prior messages sent as context
# default_language = "python"  # python, javascript, typescript, java, cpp, go, rust, unknown
# focus = "security"         # performance, security, best-practices, refactoring,
                             # debug, checklist, beginner, advanced

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
