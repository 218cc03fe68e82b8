#![allow(dead_code)]
use identity_reloader::ssl::pem::{decode_certificates, decode_private_key};
use identity_reloader::ssl::structs::certificate_chain::CertificateChain;
use identity_reloader::ssl::structs::private_key::PrivateKey;
use identity_reloader::ssl::traits::file_system::FileSystem;
use parking_lot::Mutex;
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, Connection, ServerConfig, ServerConnection};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant, SystemTime};

pub const CA: &str = include_str!("../fixtures/ca.pem");
pub const LEAF1_KEY: &str = include_str!("../fixtures/leaf1.key.pem");
pub const LEAF2_KEY: &str = include_str!("../fixtures/leaf2.key.pem");
pub const CHAIN1: &str = include_str!("../fixtures/chain1.pem");
pub const CHAIN2: &str = include_str!("../fixtures/chain2.pem");
pub const EC_KEY: &str = include_str!("../fixtures/ec.key.pem");
pub const RSA1024_KEY: &str = include_str!("../fixtures/rsa1024.key.pem");

pub const LEAF1_SERIAL: &str = "010001";
pub const LEAF2_SERIAL: &str = "010002";
pub const CA_SERIAL: &str = "0a0b0c";

/// Key and chain PEM text for one of the two fixture identities.
pub fn identity_pem(identity: u8) -> (&'static str, &'static str) {
    match identity {
        1 => (LEAF1_KEY, CHAIN1),
        2 => (LEAF2_KEY, CHAIN2),
        _ => panic!("no fixture identity {identity}"),
    }
}

pub fn identity(identity: u8) -> (PrivateKey, CertificateChain) {
    let (key, chain) = identity_pem(identity);
    (
        decode_private_key(key.as_bytes()).unwrap(),
        decode_certificates(chain.as_bytes()).unwrap(),
    )
}

pub fn at(seconds: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(seconds)
}

/// Writes `contents` to `path` and pins its modification time.
pub fn write_with_mtime(path: &Path, contents: &str, modified: SystemTime) {
    std::fs::write(path, contents).unwrap();
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(modified).unwrap();
}

pub fn identity_files(dir: &Path) -> (PathBuf, PathBuf) {
    (dir.join("key.pem"), dir.join("cert.pem"))
}

/// In-memory filesystem with explicit modification times.
#[derive(Default)]
pub struct FakeFileSystem {
    files: Mutex<HashMap<PathBuf, (SystemTime, Vec<u8>)>>,
    reads: AtomicUsize,
}

impl FakeFileSystem {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn write(&self, path: &str, contents: &str, modified: SystemTime) {
        self.files
            .lock()
            .insert(PathBuf::from(path), (modified, contents.as_bytes().to_vec()));
    }

    /// Changes the timestamp only, like `touch`.
    pub fn touch(&self, path: &str, modified: SystemTime) {
        if let Some(entry) = self.files.lock().get_mut(Path::new(path)) {
            entry.0 = modified;
        }
    }

    pub fn remove(&self, path: &str) {
        self.files.lock().remove(Path::new(path));
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl FileSystem for FakeFileSystem {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.files
            .lock()
            .get(path)
            .map(|(modified, _)| *modified)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .get(path)
            .map(|(_, contents)| contents.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

fn transfer(from: &mut Connection, to: &mut Connection) -> Result<(), rustls::Error> {
    let mut buffer = Vec::new();
    while from.wants_write() {
        from.write_tls(&mut buffer)
            .map_err(|e| rustls::Error::General(e.to_string()))?;
    }
    let mut cursor = buffer.as_slice();
    while !cursor.is_empty() {
        to.read_tls(&mut cursor)
            .map_err(|e| rustls::Error::General(e.to_string()))?;
        to.process_new_packets()?;
    }
    Ok(())
}

/// Drives a full handshake between the two configs over memory buffers.
///
/// Returns the first error either side raised.
pub fn handshake(
    client_config: ClientConfig,
    server_config: ServerConfig,
    server_name: &str,
) -> Result<(Connection, Connection), rustls::Error> {
    let name = ServerName::try_from(server_name.to_string())
        .map_err(|e| rustls::Error::General(e.to_string()))?;
    let mut client = Connection::from(ClientConnection::new(Arc::new(client_config), name)?);
    let mut server = Connection::from(ServerConnection::new(Arc::new(server_config))?);

    for _ in 0..16 {
        if !client.is_handshaking() && !server.is_handshaking() {
            return Ok((client, server));
        }
        transfer(&mut client, &mut server)?;
        transfer(&mut server, &mut client)?;
    }
    Err(rustls::Error::General("handshake did not complete".to_string()))
}

/// Serial of the leaf the peer presented on `connection`.
pub fn peer_leaf_serial(connection: &Connection) -> String {
    let certificates = connection.peer_certificates().unwrap();
    identity_reloader::ssl::structs::certificate::Certificate::from_der(certificates[0].to_vec())
        .unwrap()
        .serial()
        .to_string()
}

/// Polls `condition` until it holds or `timeout` passes.
pub async fn wait_until<F: Fn() -> bool>(timeout: Duration, condition: F) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
