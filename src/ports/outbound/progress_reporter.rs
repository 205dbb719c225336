/// ProgressReporter port for user-facing status messages
///
/// Everything reported here goes to the user (typically stderr), never into
/// the command's output. Diagnostic logging goes through `tracing` instead.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Starts an indeterminate task, e.g. loading a report
    ///
    /// The task stays visible until the next call to any other method.
    fn start_task(&self, message: &str);

    /// Reports a non-fatal problem, such as an exclusion pattern that matched nothing
    fn report_warning(&self, message: &str);

    /// Reports completion of the command
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn start_task(&self, message: &str) {
        (**self).start_task(message)
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
