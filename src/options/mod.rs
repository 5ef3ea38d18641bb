//! Request options for container operations.
mod create_container;
mod list_containers;

pub use create_container::{builder, CreateContainerOptions};
pub use list_containers::ListContainerOptions;

use hyper::header::{HeaderName, HeaderValue};
use hyper::HeaderMap;

use crate::client::QueryMap;
use crate::error::ValueError;

/// Base request options: the extra headers and query parameters of one request.
///
/// Setters never fail. An invalid header is recorded and returned when the
/// options are consumed by [`HttpOptions::into_parts`].
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    headers: HeaderMap,
    querys: QueryMap,
    build_err: Option<ValueError>,
}

impl HttpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key-value pair into the request header.
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<ValueError>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<ValueError>,
    {
        let key = <HeaderName as TryFrom<K>>::try_from(key).map_err(Into::into);
        let value = <HeaderValue as TryFrom<V>>::try_from(value).map_err(Into::into);
        match (key, value) {
            (Ok(key), Ok(val)) => {
                self.headers.insert(key, val);
                self
            }
            (Err(e), _) => self.fail(e),
            (_, Err(e)) => self.fail(e),
        }
    }

    /// Merge header into request header.
    #[inline]
    pub fn headers_merge(mut self, header: HeaderMap) -> Self {
        self.headers.extend(header);
        self
    }

    /// Inserts a key-value pair into the query map.
    pub fn query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.querys.insert(key.into(), value.into());
        self
    }

    /// Keep the first error, later setters are still applied.
    pub(crate) fn fail(mut self, err: ValueError) -> Self {
        if self.build_err.is_none() {
            self.build_err = Some(err);
        }
        self
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn querys(&self) -> &QueryMap {
        &self.querys
    }

    pub fn is_valid(&self) -> bool {
        self.build_err.is_none()
    }

    pub(crate) fn into_parts(self) -> Result<(HeaderMap, QueryMap), ValueError> {
        match self.build_err {
            Some(err) => Err(err),
            None => Ok((self.headers, self.querys)),
        }
    }
}
