use hyper::HeaderMap;

use super::HttpOptions;
use crate::client::QueryMap;
use crate::error::ValueError;

/// Custom `list_containers` request parameters.
/// ## parmas
/// - `limit`: *Optional*, at most this many containers, the service caps it at 10000.
/// - `marker`: *Optional*, containers with names greater than marker.
/// - `end_marker`: *Optional*, containers with names less than end_marker.
/// - `prefix`: *Optional*, containers whose names start with prefix.
#[derive(Debug, Clone, Default)]
pub struct ListContainerOptions {
    inner: HttpOptions,
}

impl ListContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.inner = self.inner.query("limit", limit.to_string());
        self
    }

    pub fn marker<T: Into<String>>(mut self, marker: T) -> Self {
        self.inner = self.inner.query("marker", marker);
        self
    }

    pub fn end_marker<T: Into<String>>(mut self, end_marker: T) -> Self {
        self.inner = self.inner.query("end_marker", end_marker);
        self
    }

    pub fn prefix<T: Into<String>>(mut self, prefix: T) -> Self {
        self.inner = self.inner.query("prefix", prefix);
        self
    }

    pub fn querys(&self) -> &QueryMap {
        self.inner.querys()
    }

    /// Returns the query map, `format=json` included.
    pub(crate) fn into_parts(self) -> Result<(HeaderMap, QueryMap), ValueError> {
        self.inner.query("format", "json").into_parts()
    }
}
