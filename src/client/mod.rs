//! Cloud Files client
mod args;
mod client;
mod container;
mod executor;
mod operate_container;
mod querymap;

pub use args::ContainerArgs;
pub use client::*;
pub use container::Container;
pub use executor::BaseExecutor;
pub use querymap::QueryMap;
