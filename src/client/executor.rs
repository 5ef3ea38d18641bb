use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method};
use reqwest::{Request, Response};

use super::{CloudFiles, QueryMap};
use crate::error::{Error, Result, SwiftError, ValueError};

/// An executor builds the Swift request.
/// ```rust
/// use hyper::Method;
/// use reqwest::Response;
/// use cloudfiles_rsc::CloudFiles;
/// use cloudfiles_rsc::error::Result;
///
/// async fn head_container(cloudfiles: CloudFiles) -> Result<Response> {
///     let executor = cloudfiles.executor(Method::HEAD);
///     let res: Response = executor
///         .container_name("photos")
///         .send_ok()
///         .await?;
///     Ok(res)
/// }
///
/// async fn set_write_acl(cloudfiles: CloudFiles) -> Result<()> {
///     cloudfiles
///         .executor(Method::POST)
///         .container_name("photos")
///         .header("x-container-write", "alice")
///         .send_ok()
///         .await?;
///     Ok(())
/// }
/// ```
pub struct BaseExecutor<'a> {
    method: Method,
    container_name: Option<String>,
    headers: HeaderMap,
    querys: QueryMap,
    client: &'a CloudFiles,
    build_err: Result<()>,
}

impl<'a> BaseExecutor<'a> {
    pub fn new(method: Method, client: &'a CloudFiles) -> Self {
        return Self {
            method,
            container_name: None,
            headers: HeaderMap::new(),
            client,
            querys: QueryMap::new(),
            build_err: Ok(()),
        };
    }

    /// Set the request method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the container name.
    pub fn container_name<T: Into<String>>(mut self, name: T) -> Self {
        self.container_name = Some(name.into());
        self
    }

    /// Set the new request header.
    pub fn headers(mut self, header: HeaderMap) -> Self {
        self.headers = header;
        self
    }

    /// Inserts a key-value pair into the request header.
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<crate::error::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<crate::error::Error>,
    {
        let key = <HeaderName as TryFrom<K>>::try_from(key).map_err(Into::into);
        let value = <HeaderValue as TryFrom<V>>::try_from(value).map_err(Into::into);
        match (key, value) {
            (Ok(key), Ok(val)) => {
                self.headers.insert(key, val);
            }
            (Err(e), _) => self.build_err = Err(e),
            (_, Err(e)) => self.build_err = Err(e),
        };
        self
    }

    /// Merge header into request header.
    #[inline]
    pub fn headers_merge(mut self, header: HeaderMap) -> Self {
        self.headers.extend(header);
        self
    }

    /// Merge header into request header.
    #[inline]
    pub fn headers_merge2(self, header: Option<HeaderMap>) -> Self {
        if let Some(header) = header {
            self.headers_merge(header)
        } else {
            self
        }
    }

    /// Set up a new request query.
    pub fn querys(mut self, querys: QueryMap) -> Self {
        self.querys = querys;
        self
    }

    /// Merge querys into request query.
    pub fn querys_merge(mut self, querys: QueryMap) -> Self {
        self.querys.merge(querys);
        self
    }

    /// Inserts a key-value pair into the query map.
    pub fn query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.querys.insert(key.into(), value.into());
        self
    }

    /// Merge the headers and querys of request options.
    pub(crate) fn options(
        mut self,
        parts: std::result::Result<(HeaderMap, QueryMap), ValueError>,
    ) -> Self {
        match parts {
            Ok((headers, querys)) => self.headers_merge(headers).querys_merge(querys),
            Err(e) => {
                self.build_err = Err(e.into());
                self
            }
        }
    }

    pub fn apply<F>(self, apply: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        apply(self)
    }

    /// Build the authenticated [Request] without sending it.
    pub async fn build(self) -> Result<Request> {
        self.build_err?;
        self.client
            ._build_request(self.method, self.container_name, self.headers, self.querys)
            .await
    }

    /// Send an HTTP request to Swift and return a Result<[Response]>.
    ///
    /// note: this is just a response from the swift service, probably a wrong response.
    pub async fn send(self) -> Result<Response> {
        let client = self.client;
        let request = self.build().await?;
        client._url_open(request).await
    }

    /// Send an HTTP request to Swift and return a Result<[Response]>.
    ///
    /// This checks if the response status is a success.
    pub async fn send_ok(self) -> Result<Response> {
        let container_name = self.container_name.clone();
        let res = self.send().await?;
        if res.status().is_success() {
            Ok(res)
        } else {
            Err(swift_error(res, container_name).await)
        }
    }

    /// Send an HTTP request to Swift and return a Result<[String]>.
    ///
    /// This checks if the response status is a success.
    pub async fn send_text_ok(self) -> Result<String> {
        let res = self.send_ok().await?;
        let text = res.text().await?;
        Ok(text)
    }
}

/// Read the body of a failed response into an [Error].
pub(crate) async fn swift_error(res: Response, container_name: Option<String>) -> Error {
    let status = res.status();
    match res.text().await {
        Ok(text) => SwiftError::new(status, text.trim(), container_name).into(),
        Err(e) => e.into(),
    }
}
