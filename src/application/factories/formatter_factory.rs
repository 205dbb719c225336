use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{ComparisonFormatter, TreeFormatter};

/// Factory for creating comparison and tree formatters
///
/// Selects the infrastructure adapter for an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a comparison formatter
    ///
    /// `plain` disables colors and only affects [`OutputFormat::Text`].
    ///
    /// # Examples
    /// ```
    /// use gradle_depdiff::application::dto::OutputFormat;
    /// use gradle_depdiff::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::comparison(OutputFormat::Markdown, false);
    /// ```
    pub fn comparison(format: OutputFormat, plain: bool) -> Box<dyn ComparisonFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(plain)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Creates a tree formatter
    pub fn tree(format: OutputFormat) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(true)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
