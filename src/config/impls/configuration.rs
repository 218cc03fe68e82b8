use std::fs::File;
use std::io::Write;
use std::time::Duration;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::identity_config::{IdentityConfig, DEFAULT_REFRESH_INTERVAL_MS};
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::verification_config::VerificationConfig;
use crate::ssl::enums::verification_mode::VerificationMode;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            identity: IdentityConfig {
                key_path: String::from("key.pem"),
                cert_path: String::from("cert.pem"),
                refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS
            },
            verification: VerificationConfig {
                mode: VerificationMode::FullVerification,
                trust_bundle_path: Some(String::from("ca.pem"))
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        let path_regex = r"^[^\x00]+$";
        let mut check_map = vec![
            ("[LOG] Level", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$"),
            ("[IDENTITY] Key path", self.identity.key_path.clone(), path_regex),
            ("[IDENTITY] Certificate path", self.identity.cert_path.clone(), path_regex),
        ];
        if let Some(trust_bundle_path) = &self.verification.trust_bundle_path {
            check_map.push(("[VERIFICATION] Trust bundle path", trust_bundle_path.clone(), path_regex));
        }

        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        if self.identity.refresh_interval_ms == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] Error checking [IDENTITY] Refresh interval [:] must be greater than zero"));
        }
        if self.log_console_interval == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] Error checking [LOG] Console interval [:] must be greater than zero"));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), CustomError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| CustomError::new(&format!("[VALIDATE CONFIG] Invalid pattern for {}: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(CustomError::new(&format!(
                "[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.identity.refresh_interval_ms)
    }

    pub fn console_interval(&self) -> Duration {
        Duration::from_secs(self.log_console_interval)
    }
}
