//! Server configuration from command-line flags and environment variables.
//!
//! Flags win over the environment, the environment wins over defaults.

use std::env;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024; // 100 MiB

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
    /// Only log errors.
    pub quiet: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            quiet: false,
        }
    }
}

impl ServerConfig {
    pub fn command() -> Command {
        Command::new("pdf-text-server")
            .version(env!("CARGO_PKG_VERSION"))
            .about("HTTP service that extracts plain text from uploaded PDF files")
            .long_about(
                "Serves two endpoints:\n\
                - POST /extract: multipart PDF upload, returns filename, page_count and text\n\
                - GET /health: liveness probe",
            )
            .arg(
                Arg::new("host")
                    .long("host")
                    .value_name("HOST")
                    .help("Address to bind [env: PDF_TEXT_HOST] [default: 127.0.0.1]")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("port")
                    .long("port")
                    .short('p')
                    .value_name("PORT")
                    .help("Port to listen on [env: PDF_TEXT_PORT] [default: 8000]")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("max-upload-bytes")
                    .long("max-upload-bytes")
                    .value_name("BYTES")
                    .help("Largest accepted upload [env: PDF_TEXT_MAX_UPLOAD_BYTES] [default: 104857600]")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("quiet")
                    .long("quiet")
                    .short('q')
                    .help("Only log errors")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Self::from_matches_with(matches, |key| env::var(key).ok())
    }

    /// Resolves settings from `matches`, falling back to `lookup` for
    /// environment values.
    pub fn from_matches_with(
        matches: &ArgMatches,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let setting = |arg: &str, key: &str| {
            matches
                .get_one::<String>(arg)
                .cloned()
                .or_else(|| lookup(key))
        };

        let host = setting("host", "PDF_TEXT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match setting("port", "PDF_TEXT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match setting("max-upload-bytes", "PDF_TEXT_MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid upload limit: {raw:?}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            host,
            port,
            max_upload_bytes,
            quiet: matches.get_flag("quiet"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(args: &[&str], env: &[(&str, &str)]) -> Result<ServerConfig> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let matches = ServerConfig::command().try_get_matches_from(args.iter().copied())?;
        ServerConfig::from_matches_with(&matches, |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let config = resolve(&["pdf-text-server"], &[]).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = resolve(
            &["pdf-text-server"],
            &[("PDF_TEXT_HOST", "0.0.0.0"), ("PDF_TEXT_PORT", "9000")],
        )
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn flags_override_environment() {
        let config = resolve(
            &["pdf-text-server", "--port", "8080", "--max-upload-bytes", "1024", "-q"],
            &[("PDF_TEXT_PORT", "9000")],
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(config.quiet);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = resolve(&["pdf-text-server", "--port", "http"], &[]).unwrap_err();
        assert!(err.to_string().contains("invalid port"));
    }
}
