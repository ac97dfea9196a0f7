use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything the image subsystem needs, resolved at startup.
#[derive(Debug, Clone)]
pub struct ImageSettings {
    pub storage_dir: PathBuf,
    pub secret_key: String,
    pub max_bytes: u64,
    pub min_bytes: u64,
    /// Variant name -> edge length in pixels
    pub sizes: BTreeMap<String, u32>,
}
