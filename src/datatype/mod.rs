//! Data types
mod container;

pub use container::{ContainerInfo, ContainerSummary};
