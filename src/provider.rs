//! Credential provider
use futures::Future;
use std::{env, pin::Pin};

use crate::Credentials;

pub type CredentialFuture = Pin<Box<dyn Future<Output = Credentials> + Send>>;

/// define Credential retriever.
pub trait Provider: Send + Sync {
    fn fetch(&self) -> CredentialFuture;
}

#[derive(Debug, Clone)]
pub struct StaticProvider(Credentials);

impl StaticProvider {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self(Credentials::new(token, None))
    }

    /// load Credentials from environment variables.
    /// - `CLOUDFILES_AUTH_TOKEN` or `OS_AUTH_TOKEN`
    pub fn from_env() -> Option<Self> {
        let token = env::var("CLOUDFILES_AUTH_TOKEN");
        let token = if !token.is_ok() {
            env::var("OS_AUTH_TOKEN")
        } else {
            token
        };
        token.ok().filter(|t| !t.is_empty()).map(Self::new)
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> CredentialFuture {
        let cred = self.0.clone();
        Box::pin(async move { cred })
    }
}
