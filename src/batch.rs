//! Batch processing of secrets.
//!
//! Each secret runs through validate → resolve → encrypt → submit on its
//! own. A failure at any stage is logged and the secret is skipped; the
//! remaining secrets are still processed.

use crate::app_deps::SecretsApi;
use crate::crypto;
use crate::errors::{EncryptError, SecretError};
use crate::github::RepositoryPublicKey;
use crate::resolve;
use crate::validation;

/// One secret to set, with its value as written by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRequest {
    pub name: String,
    /// Literal value or `file(<path>)` reference.
    pub raw_value: String,
}

impl SecretRequest {
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// Payload for the create-or-update secret endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSecret {
    pub name: String,
    pub key_id: String,
    /// Base64 sealed box.
    pub encrypted_value: String,
}

impl EncryptedSecret {
    /// Seal `plaintext` for `public_key`.
    pub fn seal(
        name: &str,
        public_key: &RepositoryPublicKey,
        plaintext: &[u8],
    ) -> Result<Self, EncryptError> {
        Ok(Self {
            name: name.to_string(),
            key_id: public_key.key_id.clone(),
            encrypted_value: crypto::encrypt_secret(&public_key.key, plaintext)?,
        })
    }
}

/// Outcome counters for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
}

impl BatchResult {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    /// Whether every secret in the batch was set.
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.total
    }

    /// Final line printed after the batch.
    pub fn summary(&self) -> String {
        if self.is_complete() {
            format!("All {} secrets set successfully!", self.succeeded)
        } else {
            format!(
                "Warning: {} of {} secrets set successfully",
                self.succeeded, self.total
            )
        }
    }
}

/// Validate, resolve, seal and submit a single secret.
pub async fn process_secret(
    request: &SecretRequest,
    public_key: &RepositoryPublicKey,
    api: &dyn SecretsApi,
) -> Result<(), SecretError> {
    validation::validate_secret_key(&request.name)?;
    let plaintext = resolve::resolve(&request.raw_value)?;
    let encrypted = EncryptedSecret::seal(&request.name, public_key, &plaintext)?;
    api.put_secret(&encrypted).await?;
    Ok(())
}

/// Process every request in order and tally the successes.
///
/// Prints one line per secret that was set. Failures never abort the batch.
pub async fn run(
    requests: &[SecretRequest],
    public_key: &RepositoryPublicKey,
    api: &dyn SecretsApi,
) -> BatchResult {
    let mut result = BatchResult {
        total: requests.len(),
        succeeded: 0,
    };

    for request in requests {
        match process_secret(request, public_key, api).await {
            Ok(()) => {
                println!("Secret '{}' set successfully", request.name);
                result.succeeded += 1;
            }
            Err(err) => {
                tracing::error!(
                    "Failed to {} secret '{}': {}",
                    err.stage(),
                    request.name,
                    err
                );
            }
        }
    }

    result
}
