use crate::shared::Result;

/// OutputPresenter port for presenting the normalized template
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the serialized template
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is rejected by a security check
    fn present(&self, content: &str) -> Result<()>;
}
