//! Password hashing with bcrypt.
//!
//! Each call to [`hash_password`] draws a fresh random salt, so hashing the
//! same password twice yields two different strings. The salt and cost are
//! embedded in the hash and [`verify_password`] reads them back. bcrypt
//! compares digests in constant time.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use anyhow::anyhow;
use bcrypt::{hash, verify};

use crate::errors::AppError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 10;

const DUMMY_PASSWORD: &str = "notebook-timing-equalizer";

// One dummy hash per cost, built on first use.
static DUMMY_HASHES: LazyLock<Mutex<HashMap<u32, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Returns `false` for a mismatch and for a hash that cannot be parsed.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    match verify(password, hashed) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting malformed password hash");
            false
        }
    }
}

/// Burns the same amount of work as verifying against a hash of `cost` and
/// always fails.
///
/// Used on the unknown-email login path so that response time does not reveal
/// whether an account exists. `cost` must be the cost real hashes are stored
/// with.
pub fn verify_dummy(password: &str, cost: u32) -> bool {
    let _ = verify(password, &dummy_hash(cost));
    false
}

fn dummy_hash(cost: u32) -> String {
    let mut hashes = DUMMY_HASHES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    hashes
        .entry(cost)
        .or_insert_with(|| hash(DUMMY_PASSWORD, cost).unwrap_or_default())
        .clone()
}
