use crate::{Error, Result};

/// Rejects empty keys for operations that need at least one symbol.
pub fn require_key<'a>(operation: &'static str, key: &'a str) -> Result<&'a str> {
    if key.is_empty() {
        return Err(Error::InvalidArgument {
            operation,
            reason: "key must be a non-empty string",
        });
    }
    Ok(key)
}
