/// Type alias for Result with anyhow::Error as the error type.
/// Application-level code uses this; the pure parsing core returns typed errors instead.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
