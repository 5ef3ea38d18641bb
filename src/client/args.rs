use hyper::HeaderMap;

/// Custom request parameters for container operations.
/// ## parmas
/// - `container_name`: The container name.
/// - `extra_headers`: *Optional*, Extra headers for advanced usage.
#[derive(Debug, Clone)]
pub struct ContainerArgs {
    pub(crate) name: String,
    pub(crate) extra_headers: Option<HeaderMap>,
}

impl ContainerArgs {
    pub fn new<S: Into<String>>(container_name: S) -> Self {
        Self {
            name: container_name.into(),
            extra_headers: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set extra headers for advanced usage.
    pub fn extra_headers(mut self, extra_headers: Option<HeaderMap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }
}

impl<S> From<S> for ContainerArgs
where
    S: Into<String>,
{
    fn from(s: S) -> Self {
        Self::new(s)
    }
}
