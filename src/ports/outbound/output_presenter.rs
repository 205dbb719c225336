use crate::shared::Result;

/// OutputPresenter port for the final rendered output
///
/// Reports, comparisons and trees all leave the application through this
/// port, whether they end up on stdout or in a file.
pub trait OutputPresenter {
    /// Writes `content` to the destination.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, or if it is a
    /// file that already exists and overwriting was not allowed.
    fn present(&self, content: &str) -> Result<()>;
}
