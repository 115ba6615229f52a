use crate::error::{Error, Result};
use chrono::{DateTime, Local, TimeZone};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const SHORT_HASH_LEN: usize = 6;

/// First `SHORT_HASH_LEN` lowercase hex characters of the SHA-256 of `input`.
///
/// Only used to make run folder names harder to collide by hand, not for
/// integrity.
pub fn short_hash(input: &str) -> String {
    let mut hash = hex::encode(Sha256::digest(input.as_bytes()));
    hash.truncate(SHORT_HASH_LEN);
    hash
}

/// Output directory of a single run: `<results_root>/<timestamp>_<hash>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunFolder {
    timestamp: String,
    hash: String,
    path: PathBuf,
}

impl RunFolder {
    pub fn for_timestamp(results_root: &Path, timestamp: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        let hash = short_hash(&timestamp);
        let path = results_root.join(format!("{}_{}", timestamp, hash));

        Self {
            timestamp,
            hash,
            path,
        }
    }

    pub fn at<Tz: TimeZone>(results_root: &Path, time: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self::for_timestamp(results_root, time.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn now(results_root: &Path) -> Self {
        Self::at(results_root, &Local::now())
    }

    /// Creates the folder and any missing parents. An existing folder is fine.
    pub fn create(&self) -> Result<()> {
        std::fs::create_dir_all(&self.path).map_err(|source| Error::CreateRunFolder {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("created run folder {}", self.path.display());

        Ok(())
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for RunFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
