/// ProgressReporter port for reporting what a run is doing
///
/// This port abstracts diagnostics (e.g. to stderr) so that stdout only
/// ever carries the normalized template.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a diagnostic message, shown only in verbose mode
    fn report_debug(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
