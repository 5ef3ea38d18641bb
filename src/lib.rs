#![cfg_attr(not(doctest), doc = include_str!("../README.md"))]

mod binder;
pub mod client;
mod credentials;
pub mod datatype;
pub mod error;
pub mod headers;
pub mod options;
pub mod provider;
pub mod time;
mod utils;

pub use crate::binder::BindMetadataToHeaders;
pub use crate::client::CloudFiles;
pub use crate::credentials::Credentials;
