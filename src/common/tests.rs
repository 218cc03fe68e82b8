#[cfg(test)]
mod common_tests {
    use crate::common::common::parse_log_level;
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level_known() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("warn").unwrap(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_parse_log_level_unknown() {
        let error = parse_log_level("loud").unwrap_err();
        assert_eq!(error.to_string(), "Unknown log level encountered: 'loud'");
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
        assert_eq!(error.message(), "could not create config.toml file");
    }
}
