use std::sync::Arc;

use crate::error::{Result, ValueError};
use crate::headers::AUTH_TOKEN;
use crate::provider::Provider;
use crate::utils::{check_container_name, urlencode, _VALID_STORAGE_URL};
use crate::Credentials;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{header, HeaderMap, Method};
use reqwest::{Request, Response};

use super::{Container, ContainerArgs, QueryMap};

/// A `CloudFilesBuilder` can be used to create a [`CloudFiles`] with custom configuration.
pub struct CloudFilesBuilder {
    storage_url: Option<String>,
    agent: String,
    provider: Option<Box<dyn Provider>>,
    client: Option<reqwest::Client>,
}

impl CloudFilesBuilder {
    pub fn new() -> Self {
        CloudFilesBuilder {
            storage_url: None,
            agent: "CloudFiles (Linux; x86_64) cloudfiles-rs".to_string(),
            provider: None,
            client: None,
        }
    }

    /// Set the storage url of the account, like
    /// `https://storage101.dfw1.clouddrive.com/v1/MossoCloudFS_1234`.
    ///
    /// **Required**.
    pub fn storage_url<T: Into<String>>(mut self, storage_url: T) -> Self {
        self.storage_url = Some(storage_url.into());
        self
    }

    /// Set agent header for cloudfiles client.
    ///
    /// Default: `CloudFiles (Linux; x86_64) cloudfiles-rs`
    pub fn agent<T: Into<String>>(mut self, agent: T) -> Self {
        self.agent = agent.into();
        self
    }

    /// Set custom http [reqwest::Client].
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set credentials provider of your account.
    ///
    /// **Required**.
    pub fn provider<P>(mut self, provider: P) -> Self
    where
        P: Provider + 'static,
    {
        self.provider = Some(Box::new(provider));
        self
    }

    pub fn build(self) -> std::result::Result<CloudFiles, ValueError> {
        let storage_url = self.storage_url.ok_or("Miss storage url")?;
        let storage_url = storage_url.trim_end_matches('/').to_string();
        if !_VALID_STORAGE_URL.is_match(&storage_url) {
            return Err("Invalid storage url".into());
        }
        let provider = self.provider.ok_or("Miss provide")?;

        let agent: HeaderValue = self
            .agent
            .parse()
            .map_err(|_| ValueError::from("Invalid agent"))?;

        let client = match self.client {
            Some(client) => client,
            None => {
                let mut headers = header::HeaderMap::new();
                headers.insert(header::USER_AGENT, agent.clone());
                reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .map_err(|e| ValueError::new(e.to_string()))?
            }
        };
        Ok(CloudFiles {
            inner: Arc::new(CloudFilesRef {
                storage_url,
                client,
                agent,
                provider,
            }),
        })
    }
}

/// Rackspace Cloud Files client to perform container operations.
///
/// You do **not** have to wrap the `CloudFiles` in an [`Rc`] or [`Arc`] to **reuse** it,
/// because it already uses an [`Arc`] internally.
///
/// ## Create CloudFiles client
/// ```rust
/// use cloudfiles_rsc::{provider::StaticProvider, CloudFiles};
/// let provider = StaticProvider::new("auth-token");
/// let cloudfiles = CloudFiles::builder()
///     .storage_url("https://storage101.dfw1.clouddrive.com/v1/MossoCloudFS_1234")
///     .provider(provider)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct CloudFiles {
    inner: Arc<CloudFilesRef>,
}

struct CloudFilesRef {
    storage_url: String,
    client: reqwest::Client,
    agent: HeaderValue,
    provider: Box<dyn Provider>,
}

impl CloudFiles {
    /// get a cloudfiles [`CloudFilesBuilder`]
    pub fn builder() -> CloudFilesBuilder {
        CloudFilesBuilder::new()
    }

    pub fn storage_url(&self) -> &str {
        self.inner.storage_url.as_ref()
    }

    #[inline]
    pub(super) async fn fetch_credentials(&self) -> Credentials {
        self.inner.provider.fetch().await
    }

    /// build uri for the account or a container.
    ///
    /// uriencode(container)
    pub(super) fn _build_uri(&self, container: Option<&str>) -> String {
        let storage_url = self.inner.storage_url.as_str();
        match container {
            Some(c) => format!("{storage_url}/{}", urlencode(c)),
            None => storage_url.to_string(),
        }
    }

    /// Build an authenticated HTTP request.
    pub(super) async fn _build_request(
        &self,
        method: Method,
        container_name: Option<String>,
        headers: HeaderMap,
        querys: QueryMap,
    ) -> Result<Request> {
        // check container_name
        if let Some(container_name) = &container_name {
            check_container_name(container_name)?;
        }
        let uri = self._build_uri(container_name.as_deref());

        // add query to uri
        let uri = if querys.is_empty() {
            uri
        } else {
            format!("{}?{}", uri, querys.to_query_string())
        };

        let mut headers = headers;
        headers.insert(header::USER_AGENT, self.inner.agent.clone());
        let credentials = self.fetch_credentials().await;
        if credentials.is_expired() {
            log::warn!("auth token expired, the request will likely be rejected");
        }
        let token: HeaderValue = credentials
            .auth_token()
            .parse()
            .map_err(|_| ValueError::from("Invalid auth token"))?;
        headers.insert(HeaderName::from_static(AUTH_TOKEN), token);

        let request = self
            .inner
            .client
            .request(method, uri)
            .headers(headers)
            .build()?;
        Ok(request)
    }

    /// Execute HTTP request.
    pub(super) async fn _url_open(&self, request: Request) -> Result<Response> {
        log::debug!("{} {}", request.method(), request.url());
        let response = self.inner.client.execute(request).await?;
        log::debug!("response status {}", response.status());
        Ok(response)
    }

    #[inline]
    pub fn executor(&self, method: Method) -> super::BaseExecutor<'_> {
        super::BaseExecutor::new(method, self)
    }

    /// Instantiate a [Container]
    pub fn container<C>(&self, container: C) -> Container
    where
        C: Into<ContainerArgs>,
    {
        Container {
            client: self.clone(),
            container: container.into(),
        }
    }
}
