use thiserror::Error;

/// Errors that can occur when working with GitHub API.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub API error (status {status_code}): {message}")]
    ApiError {
        status_code: u16,
        message: String,
        documentation_url: Option<String>,
    },
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("URI error: {0}")]
    UriError(String),
    #[error("Failed to build GitHub client: {0}")]
    ClientError(String),
}

/// Fatal errors raised while assembling the run settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },
    #[error("Missing required values: owner, repo")]
    MissingIdentity,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("GitHub token not provided via flag, config, or GITHUB_TOKEN env var")]
    MissingToken,
    #[error("No secrets to set. Use --secret/--value flags or 'secrets' in config file")]
    NoSecrets,
    #[error("Both --secret and --value must be provided when using CLI flags")]
    UnpairedSecretFlag,
}

/// Errors that can occur during validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Secret key validation failed: {0}")]
    SecretKey(String),
    #[error("Repository owner validation failed: {0}")]
    RepositoryOwner(String),
    #[error("Repository name validation failed: {0}")]
    RepositoryName(String),
}

/// Failure to turn a raw secret value into plaintext.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("empty file path in file() syntax")]
    EmptyFilePath,
    #[error("failed to read file '{path}': {cause}")]
    FileReadFailed {
        path: String,
        #[source]
        cause: std::io::Error,
    },
}

/// Failure to seal a plaintext for the repository public key.
#[derive(Error, Debug)]
pub enum EncryptError {
    #[error("failed to decode public key: {0}")]
    InvalidKeyEncoding(#[source] base64::DecodeError),
    #[error("public key must be 32 bytes, got {got}")]
    InvalidKeyLength { got: usize },
    #[error("failed to seal secret")]
    SealFailed,
}

/// Why a single secret in a batch was skipped.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error(transparent)]
    InvalidName(#[from] ValidationError),
    #[error(transparent)]
    Resolve(#[from] ResolutionError),
    #[error(transparent)]
    Encrypt(#[from] EncryptError),
    #[error(transparent)]
    Submit(#[from] GitHubError),
}

impl SecretError {
    /// Pipeline stage the secret failed at, used in log lines.
    pub fn stage(&self) -> &'static str {
        match self {
            SecretError::InvalidName(_) => "validate",
            SecretError::Resolve(_) => "resolve",
            SecretError::Encrypt(_) => "encrypt",
            SecretError::Submit(_) => "set",
        }
    }
}

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => GitHubError::ApiError {
                status_code: source.status_code.as_u16(),
                message: source.message,
                documentation_url: source.documentation_url,
            },
            octocrab::Error::Http { source, .. } => GitHubError::HttpError(source.to_string()),
            octocrab::Error::Uri { source, .. } => GitHubError::UriError(source.to_string()),
            _ => GitHubError::HttpError(err.to_string()),
        }
    }
}
