use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pr_reminder::{GitHubClient, Notifier, Orchestrator, ReminderOptions};

#[derive(Parser)]
#[command(name = "pr-reminder")]
#[command(about = "Remind reviewers about open pull requests via Slack or Microsoft Teams")]
struct Cli {
    /// Repository to scan (owner/repo)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: String,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    api_url: String,

    /// Incoming webhook URL for the chat provider
    #[arg(long, env = "WEBHOOK_URL", hide_env_values = true)]
    webhook_url: String,

    /// Chat provider (slack or msteams)
    #[arg(long, env = "PROVIDER", default_value = "slack")]
    provider: String,

    /// Channel to post into (Slack only)
    #[arg(long, env = "CHANNEL")]
    channel: Option<String>,

    /// Mapping from GitHub logins to provider ids (login1:id1,login2:id2)
    #[arg(long, env = "GITHUB_PROVIDER_MAP", default_value = "")]
    github_provider_map: String,

    /// Pull requests carrying this label are skipped
    #[arg(long, env = "IGNORE_LABEL")]
    ignore_label: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pr_reminder=info".parse()?))
        .init();

    let cli = Cli::parse();

    let github = GitHubClient::new(cli.api_url, cli.token);
    let notifier = Notifier::new(cli.webhook_url);
    let orchestrator = Orchestrator::new(github, notifier);

    let options = ReminderOptions {
        repo: cli.repo,
        provider: cli.provider,
        channel: cli.channel,
        github_provider_map: cli.github_provider_map,
        ignore_label: cli.ignore_label,
    };

    orchestrator.run(&options).await
}
