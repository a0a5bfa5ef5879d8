// src/jwt.rs

//! JWT shared-secret provisioning.
//!
//! The execution and consensus clients authenticate their engine-API
//! channel with a shared 32-byte secret, stored hex-encoded on disk.
//! Both clients must be pointed at the same file; regenerating the
//! secret invalidates any previously paired processes. Whether
//! the two `--jwt-path` flags actually name the same file is the
//! operator's responsibility.

use std::fs;
use std::path::Path;

use rand::RngCore;
use rand::rngs::OsRng;
use tracing::debug;

use crate::errors::{Result, StakerError};
use crate::output::OutputSink;

/// Raw secret length in bytes.
const SECRET_BYTES: usize = 32;

/// Length of the hex-encoded secret as written to disk.
const SECRET_HEX_CHARS: usize = 64;

/// Generate a fresh secret and return its lowercase hex encoding.
///
/// The length and character-class checks guard against a broken RNG or
/// encoder. A violation is fatal: the caller gets
/// [`StakerError::SecretInvariant`] and nothing is written.
pub(crate) fn generate_secret_hex() -> Result<String> {
    let mut secret = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut secret);

    let encoded = hex::encode(secret);

    if encoded.len() != SECRET_HEX_CHARS {
        return Err(StakerError::SecretInvariant(
            "hex encoding must be exactly 64 characters",
        ));
    }
    if !encoded.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(StakerError::SecretInvariant(
            "hex encoding must contain only [0-9a-f]",
        ));
    }

    Ok(encoded)
}

/// Generate a JWT secret and write it to `path`.
///
/// Missing parent directories are created first. An existing file at
/// `path` is overwritten. The file content is exactly the 64 hex
/// characters, with no trailing newline.
pub fn provision(path: impl AsRef<Path>, sink: &dyn OutputSink) -> Result<()> {
    let path = path.as_ref();
    let encoded = generate_secret_hex()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StakerError::WriteSecret {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, &encoded).map_err(|source| StakerError::WriteSecret {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "JWT secret written");
    sink.line(&format!("Generated JWT at {}", path.display()));

    Ok(())
}
