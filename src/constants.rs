//! Application constants for API endpoints, environment variables, value syntax,
//! and validation rules.

/// GitHub API endpoint constants.
pub mod api {
    /// Path to get the public key for encrypting secrets.
    pub const PUBLIC_KEY_PATH: &str = "/repos/{owner}/{repo}/actions/secrets/public-key";

    /// Render a path template for a repository.
    pub fn repo_path(template: &str, owner: &str, repo: &str) -> String {
        template.replace("{owner}", owner).replace("{repo}", repo)
    }
}

/// Environment variables consulted at startup.
pub mod env {
    /// Token fallback when neither flag nor config supplies one.
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

    /// API base URL fallback (GitHub Enterprise Server).
    pub const GITHUB_API_URL: &str = "GITHUB_API_URL";

    /// Log filter directive, e.g. `gh_secret_seal=debug`.
    pub const LOG_FILTER: &str = "GH_SECRET_SEAL_LOG";
}

/// Secret value indirection syntax.
pub mod value {
    /// Prefix marking a value that should be read from a file.
    pub const FILE_PREFIX: &str = "file(";

    /// Suffix closing a `file(...)` reference.
    pub const FILE_SUFFIX: &str = ")";
}

/// Sealed-box parameters.
pub mod crypto {
    /// Length of a Curve25519 public key.
    pub const PUBLIC_KEY_LENGTH: usize = 32;

    /// Length of the Poly1305 authentication tag.
    pub const TAG_LENGTH: usize = 16;

    /// Bytes a sealed box adds on top of the plaintext.
    pub const SEAL_OVERHEAD: usize = PUBLIC_KEY_LENGTH + TAG_LENGTH;
}

/// Secret validation constants.
pub mod validation {
    /// Maximum length for a secret key name (GitHub API limit).
    pub const MAX_SECRET_KEY_LENGTH: usize = 100;

    /// Valid characters for secret key names (alphanumeric, underscore, hyphen).
    pub const VALID_SECRET_KEY_PATTERN: &str = r"^[a-zA-Z0-9_-]+$";
}

/// Repository validation constants.
pub mod repo {
    /// Maximum length for repository owner name.
    pub const MAX_OWNER_LENGTH: usize = 39; // GitHub username limit

    /// Maximum length for repository name.
    pub const MAX_REPO_NAME_LENGTH: usize = 100;
}
