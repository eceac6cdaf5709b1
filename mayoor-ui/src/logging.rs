//! Logging setup
//!
//! Events go through `tracing`; the subscriber formats them without
//! timestamps (the browser console adds its own) and writes each one to
//! the console.

use crate::config::ClientConfig;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,      // filter directive, e.g. "info" or "mayoor_ui=debug"
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_client(config: &ClientConfig) -> Self {
        Self {
            level: config.log_level.clone(),
            ..Self::default()
        }
    }

    pub fn init(&self) -> Result<(), TryInitError> {
        let filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .without_time()
            .with_ansi(false)
            .with_level(true)
            .with_target(self.with_target)
            .with_writer(ConsoleWriter::default);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .try_init()
    }
}

/// Buffers one formatted event and hands it to the console when dropped
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            leptos::logging::log!("{}", line.trim_end());
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
