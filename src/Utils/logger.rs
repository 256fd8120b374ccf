use simplelog::{ColorChoice, Config, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Terminal logger for the binary, filtering at `Info` so that configuration loading is
/// already logged. The level from the configuration is applied later with [`set_log_level`].
/// A second call only resets the level.
pub fn init_logger() {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    let _ = TermLogger::init(
        LevelFilter::Trace,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    set_log_level(LevelFilter::Info);
}

/// Global filter applied by the `log` macros; the terminal logger itself passes everything.
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Plain logger for tests; ignores "already initialized".
pub fn init_test_logger() {
    let _ = simplelog::SimpleLogger::init(LevelFilter::Info, Config::default());
}
