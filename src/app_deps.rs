use async_trait::async_trait;

use crate::batch::EncryptedSecret;
use crate::config::Settings;
use crate::errors::GitHubError;
use crate::github::{self, RepositoryPublicKey};

/// The two Actions secrets endpoints a run needs.
#[async_trait]
pub trait SecretsApi: Send + Sync {
    async fn get_public_key(&self) -> Result<RepositoryPublicKey, GitHubError>;
    async fn put_secret(&self, secret: &EncryptedSecret) -> Result<(), GitHubError>;
}

pub trait SecretsApiFactory: Send + Sync {
    fn create(&self, settings: &Settings) -> Result<Box<dyn SecretsApi>, GitHubError>;
}

pub struct RealSecretsApi {
    inner: github::GitHubClient,
}

#[async_trait]
impl SecretsApi for RealSecretsApi {
    async fn get_public_key(&self) -> Result<RepositoryPublicKey, GitHubError> {
        self.inner.get_public_key().await
    }

    async fn put_secret(&self, secret: &EncryptedSecret) -> Result<(), GitHubError> {
        self.inner.put_secret(secret).await
    }
}

pub struct RealSecretsApiFactory;

impl SecretsApiFactory for RealSecretsApiFactory {
    fn create(&self, settings: &Settings) -> Result<Box<dyn SecretsApi>, GitHubError> {
        let client = github::GitHubClient::new(
            settings.token.clone(),
            settings.owner.clone(),
            settings.repo.clone(),
            settings.api_url.as_deref(),
        )?;
        Ok(Box::new(RealSecretsApi { inner: client }))
    }
}
