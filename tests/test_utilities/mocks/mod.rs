/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_template_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_template_reader::MockTemplateReader;
