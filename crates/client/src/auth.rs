//! Basic-auth credentials shared by both platform APIs.

use secrecy::{ExposeSecret, SecretString};

/// Username/password pair attached to every outgoing request.
///
/// Both the Elasticsearch and the Kibana API accept the same credential
/// pair; there is no session or token exchange.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach basic auth to a request builder.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The password must not leak through `Debug`.
    #[test]
    fn test_debug_does_not_expose_password() {
        let creds = Credentials::new(
            "elastic",
            SecretString::new("super-secret".to_string().into()),
        );
        let debug_output = format!("{:?}", creds);
        assert!(!debug_output.contains("super-secret"));
        assert!(debug_output.contains("elastic"));
    }
}
