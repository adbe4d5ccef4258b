//! Validation for the `[conversation]` section.

use crate::schema::SenseiConfig;

use super::helpers::validate_range;

pub(crate) fn validate_conversation(errors: &mut Vec<String>, config: &SenseiConfig) {
    validate_range(
        errors,
        "conversation.history_length",
        u64::from(config.conversation.history_length),
        1,
        100,
    );
}
