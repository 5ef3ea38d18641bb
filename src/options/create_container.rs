use std::collections::HashMap;

use hyper::HeaderMap;
use once_cell::sync::Lazy;

use super::HttpOptions;
use crate::binder::BindMetadataToHeaders;
use crate::client::QueryMap;
use crate::error::{Error, Result, ValueError};
use crate::headers::CONTAINER_VERSIONS_LOCATION;

static BIND_METADATA_TO_HEADERS: Lazy<BindMetadataToHeaders> =
    Lazy::new(BindMetadataToHeaders::container);

/// Options for creating a container.
///
/// Used by [`CloudFiles::create_container_if_absent`](crate::CloudFiles::create_container_if_absent).
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use cloudfiles_rsc::options::CreateContainerOptions;
///
/// let mut metadata = HashMap::new();
/// metadata.insert("owner".to_string(), "alice".to_string());
/// let options = CreateContainerOptions::new()
///     .metadata(metadata)
///     .versions_location("photos-versions");
/// assert_eq!(options.headers().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateContainerOptions {
    inner: HttpOptions,
}

impl CreateContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that add nothing to the request.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the metadata on a container at creation.
    ///
    /// Every entry becomes a `x-container-meta-<key>` header.
    /// An empty map leaves the options unchanged.
    pub fn metadata(mut self, metadata: HashMap<String, String>) -> Self {
        if metadata.is_empty() {
            return self;
        }
        match BIND_METADATA_TO_HEADERS.to_headers(&metadata) {
            Ok(headers) => {
                self.inner = self.inner.headers_merge(headers);
                self
            }
            Err(e) => {
                self.inner = self.inner.fail(e);
                self
            }
        }
    }

    /// Sets the container that will contain object versions.
    pub fn versions_location<T: Into<String>>(mut self, container_name: T) -> Self {
        let container_name: String = container_name.into();
        self.inner = self.inner.header(CONTAINER_VERSIONS_LOCATION, container_name);
        self
    }

    /// Sets the public ACL on the container so that anybody can read it.
    ///
    /// On plain Swift this sets `x-container-read` to
    /// [`CONTAINER_ACL_ANYBODY_READ`](crate::headers::CONTAINER_ACL_ANYBODY_READ).
    /// Cloud Files does not accept it at creation, so this always returns
    /// [`Error::Unsupported`].
    pub fn anybody_read(self) -> Result<Self> {
        Err(Error::Unsupported("anybody_read"))
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    pub(crate) fn into_parts(self) -> std::result::Result<(HeaderMap, QueryMap), ValueError> {
        self.inner.into_parts()
    }
}

/// Shortcuts creating a [`CreateContainerOptions`] with one option set.
pub mod builder {
    use std::collections::HashMap;

    use super::CreateContainerOptions;
    use crate::error::Result;

    /// See [`CreateContainerOptions::metadata`].
    pub fn metadata(metadata: HashMap<String, String>) -> CreateContainerOptions {
        CreateContainerOptions::new().metadata(metadata)
    }

    /// See [`CreateContainerOptions::versions_location`].
    pub fn versions_location<T: Into<String>>(container_name: T) -> CreateContainerOptions {
        CreateContainerOptions::new().versions_location(container_name)
    }

    /// See [`CreateContainerOptions::anybody_read`].
    pub fn anybody_read() -> Result<CreateContainerOptions> {
        CreateContainerOptions::new().anybody_read()
    }
}
