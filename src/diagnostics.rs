use std::fmt::Debug;
use std::io::{self, Write};

pub const DEFAULT_PREFIX: &str = "??";

pub struct Diagnostics {
    prefix: String,
    writer: Box<dyn Write>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_writer(prefix, io::stderr())
    }

    pub fn with_writer(prefix: impl Into<String>, writer: impl Write + 'static) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Box::new(writer),
            warnings: vec![],
        }
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();

        tracing::debug!(prefix = %self.prefix, %message, "warning");

        // write failures are ignored, the warning is still recorded
        let _ = writeln!(self.writer, "{}: {}", self.prefix, message);

        self.warnings.push(message);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("prefix", &self.prefix)
            .field("warnings", &self.warnings)
            .finish()
    }
}
