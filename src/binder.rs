use std::collections::HashMap;

use hyper::{header::HeaderName, HeaderMap};

use crate::error::ValueError;
use crate::headers::{CONTAINER_METADATA_PREFIX, CONTAINER_REMOVE_METADATA_PREFIX};

/// Converts user metadata into request headers under a fixed prefix.
///
/// key:
/// - requirement is ASCII and cannot contain non-ASCII characters
/// - Cannot contain invisible characters and spaces
/// - does't need to start with the prefix
/// - ignoring case
#[derive(Debug, Clone)]
pub struct BindMetadataToHeaders {
    prefix: String,
}

impl BindMetadataToHeaders {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into().to_ascii_lowercase(),
        }
    }

    /// Binder for `x-container-meta-` headers.
    pub fn container() -> Self {
        Self::new(CONTAINER_METADATA_PREFIX)
    }

    /// Binder for `x-remove-container-meta-` headers.
    pub fn container_remove() -> Self {
        Self::new(CONTAINER_REMOVE_METADATA_PREFIX)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns one header per metadata entry.
    ///
    /// Keys that only differ in case, or in the presence of the prefix, map to
    /// the same header name and are kept as separate values.
    pub fn to_headers(&self, metadata: &HashMap<String, String>) -> Result<HeaderMap, ValueError> {
        let mut meta_header = HeaderMap::new();
        for (key, value) in metadata {
            let key = key.to_ascii_lowercase();
            let name = if key.starts_with(&self.prefix) {
                key
            } else {
                format!("{}{}", self.prefix, key)
            };
            if name.len() == self.prefix.len() {
                return Err(ValueError::from("Metadata key cannot be empty."));
            }
            let name = HeaderName::from_bytes(name.as_bytes())?;
            meta_header.append(name, value.parse()?);
        }
        Ok(meta_header)
    }
}
