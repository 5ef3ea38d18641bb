use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValueError;

pub static _VALID_STORAGE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[A-Za-z0-9_\-.]+(:\d+)?(/[^?#\s]*)?$").unwrap());

static _IS_URLENCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9a-zA-Z-.~_]|(%[0-9A-F]{2}))*$").unwrap());

pub const MAX_CONTAINER_NAME_LENGTH: usize = 256;

/// Check whether container name is valid
pub fn check_container_name(name: &str) -> Result<bool, ValueError> {
    if name.is_empty() {
        Err(ValueError::from("Container name cannot be empty."))?;
    }
    if name.len() > MAX_CONTAINER_NAME_LENGTH {
        Err(ValueError::from(
            "Container name must be at most 256 bytes long.",
        ))?;
    }
    if name.contains('/') {
        Err(ValueError::from("Container name cannot contain a slash (/)."))?;
    }
    return Ok(true);
}

/// uri encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
#[inline]
pub fn urlencode(data: &str) -> String {
    urlencoding::encode(data).into_owned()
}

/// check text is be url encode
pub fn is_urlencoded(text: &str) -> bool {
    _IS_URLENCODE.is_match(text)
}
