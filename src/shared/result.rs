/// Result alias used by the application and adapter layers.
///
/// The domain layer returns its own typed errors; they convert into
/// `anyhow::Error` at the use case boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
