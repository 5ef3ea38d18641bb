use std::collections::HashMap;

use hyper::{Method, StatusCode};

use super::executor::swift_error;
use super::ContainerArgs;
use crate::binder::BindMetadataToHeaders;
use crate::datatype::{ContainerInfo, ContainerSummary};
use crate::error::{Error, Result};
use crate::options::{CreateContainerOptions, ListContainerOptions};
use crate::CloudFiles;

/// Operating the container
impl CloudFiles {
    #[inline]
    pub(crate) fn _container_executor(
        &self,
        container: ContainerArgs,
        method: Method,
    ) -> super::BaseExecutor<'_> {
        self.executor(method)
            .container_name(container.name)
            .headers_merge2(container.extra_headers)
    }

    /// List the containers of the account.
    /// ## Example
    /// ```rust
    /// use cloudfiles_rsc::options::ListContainerOptions;
    /// # use cloudfiles_rsc::CloudFiles;
    /// # async fn example(cloudfiles: CloudFiles){
    /// let options = ListContainerOptions::new().prefix("photos").limit(100);
    /// let containers = cloudfiles.list_containers(options).await;
    /// # }
    /// ```
    pub async fn list_containers(
        &self,
        options: ListContainerOptions,
    ) -> Result<Vec<ContainerSummary>> {
        let text = self
            .executor(Method::GET)
            .options(options.into_parts())
            .send_text_ok()
            .await?;
        // an account without containers answers 204 with no body
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Create a container if it does not exist yet.
    ///
    /// Return [Ok(true)] if the container was created, [Ok(false)] if it already existed.
    /// ## Example
    /// ```rust
    /// use cloudfiles_rsc::options::{builder, CreateContainerOptions};
    /// # use cloudfiles_rsc::CloudFiles;
    /// # async fn example(cloudfiles: CloudFiles){
    /// cloudfiles.create_container_if_absent("photos", CreateContainerOptions::none()).await;
    /// cloudfiles.create_container_if_absent("docs", builder::versions_location("docs-versions")).await;
    /// # }
    /// ```
    pub async fn create_container_if_absent<C>(
        &self,
        container: C,
        options: CreateContainerOptions,
    ) -> Result<bool>
    where
        C: Into<ContainerArgs>,
    {
        let container: ContainerArgs = container.into();
        let res = self
            ._container_executor(container, Method::PUT)
            .options(options.into_parts())
            .send_ok()
            .await?;
        match res.status() {
            StatusCode::CREATED => Ok(true),
            StatusCode::ACCEPTED => Ok(false),
            _ => Err(res.into()),
        }
    }

    /// Check if a container exists.
    /// If container exists and you have permission to access it, return [Ok(true)], otherwise [Ok(false)]
    pub async fn container_exists<C>(&self, container: C) -> Result<bool>
    where
        C: Into<ContainerArgs>,
    {
        let container: ContainerArgs = container.into();
        self._container_executor(container, Method::HEAD)
            .send()
            .await
            .map(|res| res.status().is_success())
    }

    /// Get the attributes and metadata of a container.
    /// Return [Ok(None)] if the container does not exist.
    pub async fn get_container<C>(&self, container: C) -> Result<Option<ContainerInfo>>
    where
        C: Into<ContainerArgs>,
    {
        let container: ContainerArgs = container.into();
        let name = container.name.clone();
        let res = self._container_executor(container, Method::HEAD).send().await?;
        match res.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(ContainerInfo::from_headers(&name, res.headers())?)),
            _ => Err(swift_error(res, Some(name)).await),
        }
    }

    /// Add or replace metadata of a container.
    /// Return [Ok(false)] if the container does not exist.
    pub async fn update_container_metadata<C>(
        &self,
        container: C,
        metadata: HashMap<String, String>,
    ) -> Result<bool>
    where
        C: Into<ContainerArgs>,
    {
        let headers = BindMetadataToHeaders::container().to_headers(&metadata)?;
        self._post_metadata(container.into(), headers).await
    }

    /// Remove metadata keys from a container, values are ignored.
    /// Return [Ok(false)] if the container does not exist.
    pub async fn delete_container_metadata<C>(
        &self,
        container: C,
        metadata: HashMap<String, String>,
    ) -> Result<bool>
    where
        C: Into<ContainerArgs>,
    {
        let metadata: HashMap<String, String> = metadata
            .into_keys()
            .map(|k| (k, String::new()))
            .collect();
        let headers = BindMetadataToHeaders::container_remove().to_headers(&metadata)?;
        self._post_metadata(container.into(), headers).await
    }

    async fn _post_metadata(
        &self,
        container: ContainerArgs,
        headers: hyper::HeaderMap,
    ) -> Result<bool> {
        let name = container.name.clone();
        let res = self
            ._container_executor(container, Method::POST)
            .headers_merge(headers)
            .send()
            .await?;
        match res.status() {
            StatusCode::NOT_FOUND => Ok(false),
            s if s.is_success() => Ok(true),
            _ => Err(swift_error(res, Some(name)).await),
        }
    }

    /// Delete an **empty** container.
    ///
    /// Return [Ok(true)] if deleted, [Ok(false)] if the container does not exist,
    /// and [Error::ContainerNotEmpty] if it still holds objects.
    /// ## Example
    /// ```rust
    /// # use cloudfiles_rsc::CloudFiles;
    /// # async fn example(cloudfiles: CloudFiles){
    /// cloudfiles.delete_container_if_empty("photos").await;
    /// # }
    /// ```
    pub async fn delete_container_if_empty<C>(&self, container: C) -> Result<bool>
    where
        C: Into<ContainerArgs>,
    {
        let container: ContainerArgs = container.into();
        let name = container.name.clone();
        let res = self
            ._container_executor(container, Method::DELETE)
            .send()
            .await?;
        match res.status() {
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::CONFLICT => {
                log::debug!("container {} is not empty", name);
                Err(Error::ContainerNotEmpty(name))
            }
            s if s.is_success() => Ok(true),
            _ => Err(swift_error(res, Some(name)).await),
        }
    }
}
