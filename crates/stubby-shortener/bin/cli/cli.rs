use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};

pub const URL_ENV: &str = "STUBBY_URL";
pub const BASE_URL_ENV: &str = "STUBBY_BASE_URL";
pub const SEED_ENV: &str = "STUBBY_SEED";
pub const LOG_FORMAT_ENV: &str = "STUBBY_LOG_FORMAT";

pub const DEFAULT_BASE_URL: &str = "bit.ly";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Pretty => write!(f, "pretty"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

/// Shortens one URL, then walks it through resolve, clicks, list and delete.
#[derive(Debug, Parser)]
#[command(name = "stubby")]
pub struct CLI {
    /// URL to shorten. Read from stdin when omitted.
    #[arg(long, env = URL_ENV)]
    pub url: Option<String>,

    /// Prefix printed in front of the alias.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seed for the alias generator. Seeded from OS entropy when omitted.
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,
}
