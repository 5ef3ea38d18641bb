//! Well-known Swift header names.
//!
//! Names are lower case so they can be used with [`hyper::header::HeaderName::from_static`].

/// Prefix of user metadata headers on a container.
pub const CONTAINER_METADATA_PREFIX: &str = "x-container-meta-";
/// Prefix used to remove user metadata from a container.
pub const CONTAINER_REMOVE_METADATA_PREFIX: &str = "x-remove-container-meta-";
/// Name of the container that keeps older versions of the objects.
pub const CONTAINER_VERSIONS_LOCATION: &str = "x-versions-location";
/// Read ACL of a container.
pub const CONTAINER_READ: &str = "x-container-read";
/// Write ACL of a container.
pub const CONTAINER_WRITE: &str = "x-container-write";
pub const CONTAINER_OBJECT_COUNT: &str = "x-container-object-count";
pub const CONTAINER_BYTES_USED: &str = "x-container-bytes-used";

pub const AUTH_TOKEN: &str = "x-auth-token";
pub const TIMESTAMP: &str = "x-timestamp";

/// Read ACL value granting anybody read and listing access.
pub const CONTAINER_ACL_ANYBODY_READ: &str = ".r:*,.rlistings";
