use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::{api::err::CustomError, config::AppConfig};

/// install the terminal logger; only this crate's records are printed
pub fn init_logger(config: &AppConfig) -> Result<(), CustomError> {
    let log_config = ConfigBuilder::new()
        .add_filter_allow_str("student_manager_lib")
        .set_time_format_rfc3339()
        .build();

    TermLogger::init(
        config.log_level,
        log_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .map_err(|e| CustomError::Logger(e.to_string()))
}
