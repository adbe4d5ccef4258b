pub mod errors;
pub mod focus;
pub mod id;
pub mod language;

pub use errors::{ConfigError, SenseiError};
pub use focus::{ParseFocusError, ReviewFocus};
pub use id::{new_id, ConversationId};
pub use language::{Language, ParseLanguageError};

pub type Result<T> = std::result::Result<T, SenseiError>;
