use octocrab::Octocrab;
use octocrab::models::repos::secrets::{CreateRepositorySecret, CreateRepositorySecretResponse};
use serde::Deserialize;

use crate::batch::EncryptedSecret;
use crate::constants::api;
use crate::errors::GitHubError;

/// A repository's secrets encryption key, as published by GitHub.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepositoryPublicKey {
    /// Identifier sent back alongside every encrypted value.
    pub key_id: String,
    /// Base64-encoded Curve25519 public key.
    pub key: String,
}

pub struct GitHubClient {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Build a client authenticated with a personal access token.
    ///
    /// `api_url` replaces `https://api.github.com`, e.g. for GitHub Enterprise Server.
    pub fn new(
        token: String,
        owner: String,
        repo: String,
        api_url: Option<&str>,
    ) -> Result<Self, GitHubError> {
        let mut builder = Octocrab::builder().personal_token(token);
        if let Some(url) = api_url {
            builder = builder
                .base_uri(url)
                .map_err(|e| GitHubError::UriError(e.to_string()))?;
        }
        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientError(e.to_string()))?;

        Ok(Self::with_octocrab(octocrab, owner, repo))
    }

    pub fn with_octocrab(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// Fetch the repository public key used to seal secret values.
    pub async fn get_public_key(&self) -> Result<RepositoryPublicKey, GitHubError> {
        let path = api::repo_path(api::PUBLIC_KEY_PATH, &self.owner, &self.repo);

        let public_key: RepositoryPublicKey = self.octocrab.get(path, None::<&()>).await?;
        tracing::debug!(key_id = %public_key.key_id, "fetched repository public key");

        Ok(public_key)
    }

    /// Create or update a repository secret from an already sealed value.
    pub async fn put_secret(&self, secret: &EncryptedSecret) -> Result<(), GitHubError> {
        let body = CreateRepositorySecret {
            key_id: &secret.key_id,
            encrypted_value: &secret.encrypted_value,
        };

        let response = self
            .octocrab
            .repos(self.owner.as_str(), self.repo.as_str())
            .secrets()
            .create_or_update_secret(&secret.name, &body)
            .await?;

        match response {
            CreateRepositorySecretResponse::Created => {
                tracing::debug!(secret = %secret.name, "secret created");
            }
            CreateRepositorySecretResponse::Updated => {
                tracing::debug!(secret = %secret.name, "secret updated");
            }
        }

        Ok(())
    }
}
