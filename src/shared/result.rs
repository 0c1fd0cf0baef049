/// Type alias for Result with anyhow::Error as the error type.
/// Used by dataset loading and configuration; lookups return [`LynxError`](super::LynxError) directly.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
