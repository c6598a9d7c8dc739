//! User-facing messages.
//!
//! Kept apart from `log` output: these lines are the tool's interface, while
//! log records are diagnostics enabled with `-v` or `RUST_LOG`.

use std::io::{self, Write};

/// Receives the messages a run shows to the user.
pub trait Reporter {
    /// Neutral progress or informational line.
    fn info(&mut self, message: &str);
    /// A step completed, e.g. a file was written.
    fn success(&mut self, message: &str);
    /// A step failed.
    fn error(&mut self, message: &str);
}

/// Prefix for info lines.
pub const INFO_PREFIX: &str = "   ";
/// Prefix for success lines.
pub const SUCCESS_PREFIX: &str = "ok: ";
/// Prefix for error lines.
pub const ERROR_PREFIX: &str = "error: ";

/// Writes info and success lines to one stream and errors to another.
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    /// Reports to standard output and standard error.
    pub fn stdio() -> Self {
        ConsoleReporter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// Reports to the given writers.
    pub fn new(out: O, err: E) -> Self {
        ConsoleReporter { out, err }
    }

    #[cfg(test)]
    fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

// Write errors are logged, never propagated.
impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn info(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}{}", INFO_PREFIX, message) {
            log::debug!("dropped info line: {}", e);
        }
    }

    fn success(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}{}", SUCCESS_PREFIX, message) {
            log::debug!("dropped success line: {}", e);
        }
    }

    fn error(&mut self, message: &str) {
        if let Err(e) = writeln!(self.err, "{}{}", ERROR_PREFIX, message) {
            log::debug!("dropped error line: {}", e);
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn info(&mut self, message: &str) {
        (**self).info(message)
    }

    fn success(&mut self, message: &str) {
        (**self).success(message)
    }

    fn error(&mut self, message: &str) {
        (**self).error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        let mut reporter = ConsoleReporter::new(Vec::new(), Vec::new());
        reporter.info("hello");
        reporter.success("Generated out/icon_16.png");
        reporter.error("boom");
        let (out, err) = reporter.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "   hello\nok: Generated out/icon_16.png\n");
        assert_eq!(String::from_utf8(err).unwrap(), "error: boom\n");
    }
}
