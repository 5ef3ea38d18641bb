use std::collections::HashMap;

use super::ContainerArgs;
use crate::datatype::ContainerInfo;
use crate::options::CreateContainerOptions;
use crate::{error::Result, CloudFiles};

/// Instantiate a Container which wrap [CloudFiles] and [ContainerArgs].
/// ## Example
/// ```rust
/// use cloudfiles_rsc::options::CreateContainerOptions;
/// # use cloudfiles_rsc::{CloudFiles, error::Result};
/// # async fn example(cloudfiles: CloudFiles) -> Result<()> {
/// let container = cloudfiles.container("photos");
/// container.create_if_absent(CreateContainerOptions::none()).await?;
/// let info = container.info().await?;
/// # Ok(())}
/// ```
#[derive(Clone)]
pub struct Container {
    pub(super) client: CloudFiles,
    pub(super) container: ContainerArgs,
}

macro_rules! proxy_container {
    ($name:ident=>$name2:ident, $reponse:ty) => {
        #[inline]
        pub async fn $name2(&self) -> Result<$reponse> {
            self.client.$name(self.container.clone()).await
        }
    };

    ($name:ident=>$name2:ident, $reponse:ty, $args:ty) => {
        #[inline]
        pub async fn $name2(&self, args: $args) -> Result<$reponse> {
            self.client.$name(self.container.clone(), args).await
        }
    };
}

impl Container {
    #[inline]
    pub fn container_args(&self) -> ContainerArgs {
        self.container.clone()
    }

    pub fn name(&self) -> &str {
        self.container.name()
    }

    proxy_container!(container_exists=>exists, bool);
    proxy_container!(get_container=>info, Option<ContainerInfo>);
    proxy_container!(delete_container_if_empty=>delete_if_empty, bool);
    #[rustfmt::skip]
    proxy_container!(create_container_if_absent=>create_if_absent, bool, CreateContainerOptions);
    #[rustfmt::skip]
    proxy_container!(update_container_metadata=>update_metadata, bool, HashMap<String, String>);
    #[rustfmt::skip]
    proxy_container!(delete_container_metadata=>delete_metadata, bool, HashMap<String, String>);
}
