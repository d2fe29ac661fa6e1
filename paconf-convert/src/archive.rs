//! Raw configuration bytes from a plain file or a support bundle.
//!
//! PAN-OS tech-support bundles are gzip-compressed tar archives carrying the
//! device configuration at a fixed member path. Anything that does not look
//! like a bundle is read verbatim.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

/// Canonical configuration member inside a support bundle.
pub const CONFIG_MEMBER: &str = "./running-config.xml";

const ARCHIVE_SUFFIXES: [&str; 2] = [".tar.gz", ".tgz"];

/// Errors that can occur while loading configuration bytes.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to open or read the input path.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Archive stream was malformed or truncated.
    #[error("malformed archive {path}: {source}")]
    Archive {
        path: String,
        source: std::io::Error,
    },
    /// Archive was readable but holds no configuration member.
    #[error("archive {path} contains no '{member}' member")]
    MemberNotFound { path: String, member: &'static str },
}

/// Return the raw configuration document bytes behind `path`.
///
/// Paths ending in a recognized bundle suffix are opened as gzip-compressed
/// tar streams and scanned in member order for [`CONFIG_MEMBER`]; everything
/// else is read as a plain file.
pub fn load(path: &Path) -> Result<Vec<u8>, LoadError> {
    if is_bundle(path) {
        load_bundle(path)
    } else {
        fs::read(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

fn is_bundle(path: &Path) -> bool {
    let name = path.to_string_lossy();
    ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn load_bundle(path: &Path) -> Result<Vec<u8>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.display().to_string(),
        source,
    };
    let archive_err = |source| LoadError::Archive {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));

    for entry in archive.entries().map_err(archive_err)? {
        let mut entry = entry.map_err(archive_err)?;
        let name = entry.path().map_err(archive_err)?.to_string_lossy().into_owned();
        if member_matches(&name) {
            let mut data = Vec::new();
            entry.read_to_end(&mut data).map_err(archive_err)?;
            return Ok(data);
        }
    }

    Err(LoadError::MemberNotFound {
        path: path.display().to_string(),
        member: CONFIG_MEMBER,
    })
}

/// Tar writers disagree on the leading `./`; compare with it stripped.
fn member_matches(name: &str) -> bool {
    name.trim_start_matches("./") == CONFIG_MEMBER.trim_start_matches("./")
}
