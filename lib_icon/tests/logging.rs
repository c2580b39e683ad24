use log::{Level, LevelFilter, Log, Metadata};

fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
    logger.enabled(&Metadata::builder().target(target).level(level).build())
}

#[test]
fn test_default_logger_is_quiet() {
    let logger = lib_icon::logger_builder().build();

    assert_eq!(logger.filter(), LevelFilter::Warn);
    for target in ["lib_icon", "lib_icon::image::encoder", "icon_gen"] {
        assert!(!enabled(&logger, target, Level::Info), "{}", target);
        assert!(!enabled(&logger, target, Level::Debug), "{}", target);
    }
}

#[test]
fn test_default_logger_reports_failures() {
    let logger = lib_icon::logger_builder().build();

    for target in ["lib_icon::icons", "icon_gen"] {
        assert!(enabled(&logger, target, Level::Warn), "{}", target);
        assert!(enabled(&logger, target, Level::Error), "{}", target);
    }
}
