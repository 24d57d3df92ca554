use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::models::{PullRequest, RawPullRequest};

/// GitHub API client for listing open pull requests
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `api_url` authenticating with `token`
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// Fetch the open pull requests for `repo` (`owner/name`).
    ///
    /// Single request, first page only; a failed or non-success response
    /// aborts the run. Records are validated into [`PullRequest`] here so
    /// core logic never sees a partial record.
    pub async fn list_open_pull_requests(&self, repo: &str) -> Result<Vec<PullRequest>> {
        let url = format!("{}/repos/{}/pulls", self.api_url, repo);
        debug!(url = %url, "Fetching open pull requests");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "pr-reminder")
            .send()
            .await
            .context("Failed to fetch pull requests")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Pull request fetch returned error: {} - {}", status, body);
        }

        let raw: Vec<RawPullRequest> = response
            .json()
            .await
            .context("Failed to decode pull request list")?;

        let pull_requests: Vec<PullRequest> = raw
            .into_iter()
            .map(PullRequest::try_from)
            .collect::<Result<_, _>>()
            .context("GitHub returned a malformed pull request record")?;

        info!(count = pull_requests.len(), "Fetched open pull requests");

        Ok(pull_requests)
    }
}
