use std::net::SocketAddr;
use std::path::PathBuf;

// Fixed listen port and asset root for the demo host.
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const INDEX_FILE: &str = "index.html";

#[derive(Clone, Debug)]
pub struct HostConfig {
    pub addr: SocketAddr,
    pub public_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl HostConfig {
    pub fn index_path(&self) -> PathBuf {
        self.public_dir.join(INDEX_FILE)
    }
}
