use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Generate `.pyi` interface files for the spdl extension modules.
#[derive(Parser, Debug, Clone)]
#[command(name = "spdl-stubgen", version, about)]
pub struct Config {
    /// Directory the stub files are written into; created if missing
    #[arg(long, short = 'o')]
    pub output_dir: PathBuf,

    /// Log level filter (off, error, warn, info, debug, trace)
    #[arg(long, env = "SPDL_STUBGEN_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}
