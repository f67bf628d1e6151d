//! Command-line arguments.

use clap::Parser;

use cashreg_observability::{LogFormat, ObservabilityConfig};
use cashreg_register::RegisterConfig;

/// Interactive inventory and sales register.
///
/// Values not given on the command line fall back to `CASHREG_*` environment
/// variables, then to built-in defaults.
#[derive(Parser, Debug, Clone)]
#[command(name = "cashreg")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog slots reserved before the first growth
    #[arg(long, value_name = "N")]
    pub initial_slots: Option<usize>,

    /// Maximum number of recorded sales
    #[arg(long, value_name = "N")]
    pub max_sales: Option<usize>,

    /// Last id considered used; the first inserted item gets this plus one
    #[arg(long, value_name = "ID")]
    pub first_item_id: Option<u32>,

    /// Seed for reproducible stock quantities and prices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format for listings
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Log line format (logs go to stderr)
    #[arg(long, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl Args {
    /// Layer command-line values over `config`.
    pub fn apply(&self, mut config: RegisterConfig) -> RegisterConfig {
        if let Some(slots) = self.initial_slots {
            config.initial_catalog_slots = slots;
        }
        if let Some(max_sales) = self.max_sales {
            config.max_sales = max_sales;
        }
        if let Some(first) = self.first_item_id {
            config.first_item_id = first;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }

    pub fn observability(&self) -> ObservabilityConfig {
        ObservabilityConfig {
            default_filter: self.log_level.clone(),
            format: match self.log_format {
                LogFormatArg::Json => LogFormat::Json,
                LogFormatArg::Pretty => LogFormat::Pretty,
            },
        }
    }
}
