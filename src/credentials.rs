use crate::time::UtcTime;

/// An auth token issued by the identity service for a Cloud Files account.
#[derive(Debug, Clone)]
pub struct Credentials {
    auth_token: String,
    expiration: Option<UtcTime>,
}

impl Credentials {
    pub fn new<T: Into<String>>(token: T, exp: Option<UtcTime>) -> Self {
        Credentials {
            auth_token: token.into(),
            expiration: exp,
        }
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn expiration(&self) -> Option<&UtcTime> {
        self.expiration.as_ref()
    }

    pub fn is_expired(&self) -> bool {
        if let Some(exp) = &self.expiration {
            exp.is_past()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::Credentials;
    use crate::time::UtcTime;

    #[test]
    fn test_expired() {
        assert!(!Credentials::new("token", None).is_expired());
        let past = UtcTime::new(Utc::now() - Duration::hours(1));
        assert!(Credentials::new("token", Some(past)).is_expired());
        let future = UtcTime::new(Utc::now() + Duration::hours(1));
        assert!(!Credentials::new("token", Some(future)).is_expired());
    }
}
