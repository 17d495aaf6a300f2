use std::ffi::OsString;

use crate::config::Config;
use crate::logger::init_logger;

/// Parses the CLI configuration and brings up logging.
pub fn init_main<I, T>(args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = Config::from_cli(args);
    init_logger(Some(config.log_level.as_str()));
    config
}
