// crates/cli/src/logging.rs
use std::io::Write;

use log::LevelFilter;

/// Environment variable holding an `env_logger` filter spec, e.g. `debug`.
pub const LOG_ENV: &str = "TEXTSCAN_LOG";

/// Route `log` records to stderr. Stdout carries only the report.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level);
    if let Ok(spec) = std::env::var(LOG_ENV) {
        builder.parse_filters(&spec);
    }
    if builder.try_init().is_err() {
        log::debug!("logger already installed; keeping the existing one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_the_first_logger() {
        init(true);
        init(false);
        assert!(log::log_enabled!(log::Level::Debug));
    }
}
