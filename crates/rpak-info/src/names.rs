//! Asset name derivation.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Turn a stored asset path into a display name.
///
/// Directories and the last extension are stripped and the result is
/// lower-cased, so `"Models\\Weapons\\R97.rmdl"` becomes `"r97"`.
pub fn normalize_name(path: &str) -> String {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };
    stem.to_lowercase()
}

/// Identifier for assets without a stored name: `<prefix>_0x<hash>`.
pub fn synthesized_name(prefix: &str, hash: u64) -> String {
    format!("{prefix}_0x{hash:x}")
}

/// External hash to name lookup, used for assets whose names are not stored inline.
pub trait NameLookup: Sync {
    /// Look up the name for an asset hash.
    fn lookup(&self, hash: u64) -> Option<String>;
}

/// A lookup that knows no names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNames;

impl NameLookup for NoNames {
    fn lookup(&self, _hash: u64) -> Option<String> {
        None
    }
}

impl<S: BuildHasher + Sync> NameLookup for HashMap<u64, String, S> {
    fn lookup(&self, hash: u64) -> Option<String> {
        self.get(&hash).cloned()
    }
}
