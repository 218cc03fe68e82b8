mod common;

use common::CA;
use identity_reloader::config::structs::configuration::Configuration;
use identity_reloader::ssl::enums::verification_mode::VerificationMode;
use identity_reloader::ssl::structs::peer_verification_policy::PeerVerificationPolicy;
use std::time::Duration;

fn write_config(dir: &std::path::Path, verification: &str) -> String {
    let path = dir.join("config.toml");
    let contents = format!(
        r#"
log_level = "info"
log_console_interval = 15

[identity]
key_path = "{key}"
cert_path = "{cert}"
refresh_interval_ms = 250

{verification}

[sentry_config]
enabled = false
dsn = ""
debug = false
sample_rate = 1.0
max_breadcrumbs = 100
attach_stacktrace = true
send_default_pii = false
traces_sample_rate = 1.0
"#,
        key = dir.join("key.pem").display(),
        cert = dir.join("cert.pem").display(),
        verification = verification
    );
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_load_from_file_reads_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[verification]\nmode = \"chain_only\"\n");
    let config = Configuration::load_from_file(&path, false).unwrap();
    assert_eq!(config.refresh_interval(), Duration::from_millis(250));
    assert_eq!(config.console_interval(), Duration::from_secs(15));
    assert_eq!(config.verification.mode, VerificationMode::ChainOnlyVerification);
    assert!(config.identity.key_path.ends_with("key.pem"));
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "");
    let contents = std::fs::read_to_string(&path).unwrap().replace("refresh_interval_ms = 250", "refresh_interval_ms = 0");
    std::fs::write(&path, contents).unwrap();
    assert!(Configuration::load_from_file(&path, false).is_err());
}

#[test]
fn test_load_from_file_rejects_broken_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "log_level = [").unwrap();
    assert!(Configuration::load_from_file(path.to_str().unwrap(), false).is_err());
}

#[test]
fn test_policy_from_config_uses_trust_bundle_file() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("ca.pem");
    std::fs::write(&bundle, CA).unwrap();
    let path = write_config(
        dir.path(),
        &format!("[verification]\nmode = \"full\"\ntrust_bundle_path = \"{}\"\n", bundle.display()),
    );
    let config = Configuration::load_from_file(&path, false).unwrap();

    let policy = PeerVerificationPolicy::from_config(&config.verification);
    assert_eq!(policy.mode, VerificationMode::FullVerification);
    assert!(policy.peer_check.is_none());
    assert_eq!(policy.load_roots().unwrap().len(), 1);
}

#[test]
fn test_policy_from_config_without_bundle() {
    let config = Configuration::init();
    let mut verification = config.verification.clone();
    verification.trust_bundle_path = None;
    let policy = PeerVerificationPolicy::from_config(&verification);
    assert!(policy.trust_bundle.is_none());
    assert!(policy.load_roots().is_err());
}
