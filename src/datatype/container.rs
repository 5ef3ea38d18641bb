use std::collections::HashMap;
use std::str::FromStr;

use hyper::HeaderMap;
use serde::Deserialize;

use crate::error::ValueError;
use crate::headers::{
    CONTAINER_ACL_ANYBODY_READ, CONTAINER_BYTES_USED, CONTAINER_METADATA_PREFIX,
    CONTAINER_OBJECT_COUNT, CONTAINER_READ, CONTAINER_VERSIONS_LOCATION, CONTAINER_WRITE,
    TIMESTAMP,
};
use crate::time::{deserialize_listing_time, UtcTime};

/// One entry of an account's json container listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ContainerSummary {
    pub name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default, deserialize_with = "deserialize_listing_time")]
    pub last_modified: Option<UtcTime>,
}

/// Container attributes returned by a `HEAD` on the container.
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    pub(crate) name: String,
    pub(crate) object_count: u64,
    pub(crate) bytes_used: u64,
    pub(crate) read_acl: Option<String>,
    pub(crate) write_acl: Option<String>,
    pub(crate) versions_location: Option<String>,
    pub(crate) created: Option<UtcTime>,
    pub(crate) metadata: HashMap<String, String>,
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_num<T>(headers: &HeaderMap, name: &str) -> Result<T, ValueError>
where
    T: FromStr + Default,
{
    match header_str(headers, name) {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ValueError::new(format!("Invalid {} header: {}", name, v))),
        None => Ok(T::default()),
    }
}

impl ContainerInfo {
    pub(crate) fn from_headers(name: &str, headers: &HeaderMap) -> Result<Self, ValueError> {
        let created = match header_str(headers, TIMESTAMP) {
            Some(t) => Some(UtcTime::from_swift_timestamp(t)?),
            None => None,
        };
        let mut metadata = HashMap::new();
        for (key, value) in headers {
            if let Some(k) = key.as_str().strip_prefix(CONTAINER_METADATA_PREFIX) {
                let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
                metadata.insert(k.to_string(), value);
            }
        }
        Ok(Self {
            name: name.to_string(),
            object_count: header_num(headers, CONTAINER_OBJECT_COUNT)?,
            bytes_used: header_num(headers, CONTAINER_BYTES_USED)?,
            read_acl: header_str(headers, CONTAINER_READ).map(str::to_string),
            write_acl: header_str(headers, CONTAINER_WRITE).map(str::to_string),
            versions_location: header_str(headers, CONTAINER_VERSIONS_LOCATION)
                .map(str::to_string),
            created,
            metadata,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn object_count(&self) -> u64 {
        self.object_count
    }

    pub fn bytes_used(&self) -> u64 {
        self.bytes_used
    }

    pub fn read_acl(&self) -> Option<&str> {
        self.read_acl.as_deref()
    }

    /// Whether the read ACL grants anybody read and listing access.
    pub fn is_anybody_read(&self) -> bool {
        self.read_acl() == Some(CONTAINER_ACL_ANYBODY_READ)
    }

    pub fn write_acl(&self) -> Option<&str> {
        self.write_acl.as_deref()
    }

    /// The container that keeps older versions of this container's objects.
    pub fn versions_location(&self) -> Option<&str> {
        self.versions_location.as_deref()
    }

    pub fn created(&self) -> Option<&UtcTime> {
        self.created.as_ref()
    }

    /// User metadata, keys without the `x-container-meta-` prefix.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }
}
