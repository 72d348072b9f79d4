//! Google ID-token verification via the tokeninfo endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use postforge_core::ports::{AuthError, IdentityVerifier, VerifiedIdentity};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
const ACCEPTED_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Verifies Google sign-in ID tokens against the configured OAuth client id.
pub struct GoogleTokenVerifier {
    client_id: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    iss: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

impl GoogleTokenVerifier {
    pub fn new(client_id: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client_id, client }
    }

    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID").ok()?;
        if client_id.trim().is_empty() {
            return None;
        }
        Some(Self::new(client_id))
    }

    fn check_identity(&self, info: TokenInfo) -> Result<VerifiedIdentity, AuthError> {
        if info.aud != self.client_id {
            return Err(AuthError::InvalidToken(
                "Token issued for a different client".to_string(),
            ));
        }

        if !ACCEPTED_ISSUERS.contains(&info.iss.as_str()) {
            return Err(AuthError::InvalidToken("Wrong issuer".to_string()));
        }

        Ok(VerifiedIdentity {
            email: info.email,
            fullname: info.name.unwrap_or_default(),
            picture: info.picture,
        })
    }
}

#[async_trait]
impl IdentityVerifier for GoogleTokenVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AuthError> {
        let response = self
            .client
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidToken(
                "Token rejected by provider".to_string(),
            ));
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        self.check_identity(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(aud: &str, iss: &str) -> TokenInfo {
        TokenInfo {
            aud: aud.to_string(),
            iss: iss.to_string(),
            email: "user@example.com".to_string(),
            name: Some("Example User".to_string()),
            picture: None,
        }
    }

    #[test]
    fn accepts_matching_audience_and_issuer() {
        let verifier = GoogleTokenVerifier::new("client-123".to_string());

        let identity = verifier
            .check_identity(info("client-123", "accounts.google.com"))
            .unwrap();

        assert_eq!(identity.email, "user@example.com");
        assert_eq!(identity.fullname, "Example User");
    }

    #[test]
    fn rejects_foreign_audience() {
        let verifier = GoogleTokenVerifier::new("client-123".to_string());

        let result = verifier.check_identity(info("other-client", "accounts.google.com"));
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn rejects_unknown_issuer() {
        let verifier = GoogleTokenVerifier::new("client-123".to_string());

        let result = verifier.check_identity(info("client-123", "evil.example.com"));
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
