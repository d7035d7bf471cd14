use clap::Parser;

/// Set encrypted GitHub Actions secrets on a repository.
///
/// Values of the form `file(<path>)` are read from disk.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to optional YAML (or .toml) config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// GitHub repository owner
    #[arg(long)]
    pub owner: Option<String>,

    /// GitHub repository name
    #[arg(long)]
    pub repo: Option<String>,

    /// Name of the secret to set (for single secret)
    #[arg(long)]
    pub secret: Option<String>,

    /// Value of the secret (for single secret)
    #[arg(long)]
    pub value: Option<String>,

    /// GitHub personal access token (optional, can use GITHUB_TOKEN env var)
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub API base URL (GitHub Enterprise Server)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
