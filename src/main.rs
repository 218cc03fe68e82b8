use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use identity_reloader::common::common::setup_logging;
use identity_reloader::config::structs::configuration::Configuration;
use identity_reloader::ssl::enums::credential_error::CredentialError;
use identity_reloader::ssl::ssl::{file_trust_bundle, load_snapshot_from_files, validate_server_config};
use identity_reloader::ssl::structs::identity_key_manager::IdentityKeyManager;
use identity_reloader::ssl::structs::peer_verification_policy::PeerVerificationPolicy;
use identity_reloader::structs::Cli;

fn validate_tls(manager: Arc<IdentityKeyManager>, policy: Option<PeerVerificationPolicy>) -> Result<(), CredentialError> {
    let client_auth = policy.as_ref().map(|policy| policy.mode);
    match validate_server_config(manager, policy) {
        Ok(()) => {
            info!("[BOOT] TLS server configuration validated (client auth: {:?})", client_auth);
            Ok(())
        }
        Err(error) => {
            error!("[BOOT] Unable to build TLS server configuration: {}", error);
            Err(error)
        }
    }
}

fn check_identity(config: &Configuration) -> i32 {
    let key_path = Path::new(&config.identity.key_path);
    let cert_path = Path::new(&config.identity.cert_path);
    match load_snapshot_from_files(key_path, cert_path) {
        Ok(snapshot) => {
            info!(
                "[CHECK] {} / {}: {:?} key ({} bits), leaf serial {} ({}), {} certificate(s)",
                key_path.display(),
                cert_path.display(),
                snapshot.key().algorithm(),
                snapshot.key().modulus_bits(),
                snapshot.leaf().serial(),
                snapshot.leaf().subject(),
                snapshot.chain().len()
            );
        }
        Err(error) => {
            error!("[CHECK] {} / {}: {}", key_path.display(), cert_path.display(), error);
            sentry::capture_error(&error);
            return 1;
        }
    }

    if let Some(path) = &config.verification.trust_bundle_path {
        let supplier = file_trust_bundle(path);
        match supplier() {
            Ok(roots) => info!("[CHECK] {}: {} trusted root(s)", path, roots.len()),
            Err(error) => {
                error!("[CHECK] {}", error);
                sentry::capture_error(&error);
                return 1;
            }
        }
    }
    0
}

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    if args.check {
        exit(check_identity(&config));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let manager = Arc::new(IdentityKeyManager::new());
            let tokio_shutdown = Shutdown::new().map_err(|e| std::io::Error::other(format!("{e:?}")))?;

            let policy = match &config.verification.trust_bundle_path {
                Some(_) => Some(PeerVerificationPolicy::from_config(&config.verification)),
                None => {
                    warn!("[BOOT] No trust bundle configured, peers will not be asked for certificates");
                    None
                }
            };
            validate_tls(manager.clone(), policy).map_err(std::io::Error::other)?;

            info!("[BOOT] Starting identity refresh...");
            let refresh = manager.update_identity_from_files(
                &config.identity.key_path,
                &config.identity.cert_path,
                config.refresh_interval(),
                &tokio::runtime::Handle::current()
            );

            let status_handler = tokio_shutdown.clone();
            let status_manager = manager.clone();
            let console_interval = config.console_interval();
            info!("[BOOT] Starting thread for console updates with {:?} delay...", console_interval);
            let status = tokio::spawn(async move {
                let mut interval = tokio::time::interval(console_interval);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            match status_manager.current_snapshot() {
                                Ok(snapshot) => info!(
                                    "[STATS] Serial: {} - Subject: {} - Chain: {} - Loaded: {}",
                                    snapshot.leaf().serial(),
                                    snapshot.leaf().subject(),
                                    snapshot.chain().len(),
                                    snapshot.loaded_at().to_rfc3339()
                                ),
                                Err(error) => warn!("[STATS] {}", error)
                            }
                        }
                        _ = status_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            refresh.shutdown().await;
            if let Err(error) = status.await {
                error!("Console update thread ended abnormally: {error}");
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
