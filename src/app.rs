use anyhow::{Context, Result};

use crate::app_deps::{RealSecretsApiFactory, SecretsApiFactory};
use crate::batch::{self, BatchResult};
use crate::cli::Cli;
use crate::config::{Environment, Settings};
use crate::paths;

pub struct App;

impl App {
    /// Run against the real GitHub API using the process environment.
    pub async fn run(cli: Cli) -> Result<BatchResult> {
        paths::load_env_file();
        let env = Environment::from_process();
        Self::run_with_deps(&cli, &env, &RealSecretsApiFactory).await
    }

    /// Load settings, fetch the repository key once and process every secret.
    ///
    /// Configuration and key-fetch failures are returned as errors before any
    /// secret is processed. Per-secret failures only show up in the returned
    /// [`BatchResult`].
    pub async fn run_with_deps(
        cli: &Cli,
        env: &Environment,
        factory: &dyn SecretsApiFactory,
    ) -> Result<BatchResult> {
        let settings = Settings::load(cli, env)?;
        tracing::info!(
            repository = %settings.repository(),
            secrets = settings.secrets.len(),
            "setting secrets"
        );

        let api = factory
            .create(&settings)
            .context("Failed to create GitHub client")?;

        let public_key = api
            .get_public_key()
            .await
            .context("Failed to get public key")?;

        let requests = settings.requests();
        let result = batch::run(&requests, &public_key, api.as_ref()).await;

        println!("{}", result.summary());
        Ok(result)
    }
}
