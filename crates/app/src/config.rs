//! Application configuration.
//!
//! Every setting can come from a flag, an environment variable, or a
//! `.env` file loaded at startup.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Canteen backend connection settings.
#[derive(Debug, Clone, Args)]
pub struct BackendConfig {
    /// Canteen backend base URL
    #[arg(long, env = "CANTEEN_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,

    /// Backend request timeout in seconds
    #[arg(long, env = "CANTEEN_API_TIMEOUT_SECS", default_value = "10")]
    pub api_timeout_secs: u64,
}

/// Where the registered student identity is kept between runs.
#[derive(Debug, Clone, Args)]
pub struct IdentityConfig {
    /// Path of the saved student identity file
    #[arg(
        long,
        env = "CANTEEN_IDENTITY_FILE",
        default_value = ".tiffin/student.json"
    )]
    pub identity_file: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level filter applied when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

/// Everything the application needs from flags and environment.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    #[command(flatten)]
    pub backend: BackendConfig,

    #[command(flatten)]
    pub identity: IdentityConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: AppConfig,
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cli = TestCli::try_parse_from(["test"]).expect("defaults should parse");

        assert_eq!(cli.config.backend.api_url, "http://localhost:3000");
        assert_eq!(cli.config.backend.api_timeout_secs, 10);
        assert_eq!(cli.config.logging.log_level, "info");
        assert_eq!(cli.config.logging.log_format, LogFormat::Compact);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::try_parse_from([
            "test",
            "--api-url",
            "https://canteen.example",
            "--log-format",
            "json",
        ])
        .expect("flags should parse");

        assert_eq!(cli.config.backend.api_url, "https://canteen.example");
        assert_eq!(cli.config.logging.log_format, LogFormat::Json);
    }
}
