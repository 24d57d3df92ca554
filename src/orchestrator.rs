use anyhow::Result;
use tracing::{info, warn};

use crate::aggregate::ReviewGroup;
use crate::config::{Provider, ReviewerMap};
use crate::filter::{exclude_by_label, select_reviewable};
use crate::github::GitHubClient;
use crate::message::{render_text, resolve_mentions};
use crate::notifications::Notifier;
use crate::payload::{format_flat, format_with_mentions, NotificationPayload};

/// Inputs for a single reminder run
#[derive(Debug, Clone)]
pub struct ReminderOptions {
    /// Repository to scan (`owner/name`)
    pub repo: String,
    /// Provider tag (`slack` or `msteams`)
    pub provider: String,
    /// Channel to post into, when the provider supports it
    pub channel: Option<String>,
    /// Raw `login:id` mapping string
    pub github_provider_map: String,
    /// Pull requests carrying this label are not reminded about
    pub ignore_label: Option<String>,
}

/// Runs the reminder pipeline: fetch, filter, group, compose, deliver
pub struct Orchestrator {
    github: GitHubClient,
    notifier: Notifier,
}

impl Orchestrator {
    pub fn new(github: GitHubClient, notifier: Notifier) -> Self {
        Self { github, notifier }
    }

    /// Execute one reminder run.
    ///
    /// Skips delivery (and succeeds) when no pull request survives filtering
    /// or when the provider tag is unrecognized. A failed fetch or delivery
    /// propagates to the caller.
    pub async fn run(&self, options: &ReminderOptions) -> Result<()> {
        info!(repo = %options.repo, "Getting open pull requests");
        let pull_requests = self.github.list_open_pull_requests(&options.repo).await?;
        info!(count = pull_requests.len(), "Open pull requests");

        let reviewable = select_reviewable(&pull_requests);
        let ignore_label = options.ignore_label.as_deref().unwrap_or_default();
        let awaiting = exclude_by_label(&reviewable, ignore_label);
        info!(count = awaiting.len(), "Pull requests waiting for reviews");

        if awaiting.is_empty() {
            info!("Nothing to remind about");
            return Ok(());
        }

        let group = ReviewGroup::group_by_reviewer(&awaiting);
        let reviewer_map = ReviewerMap::parse(&options.github_provider_map)?;

        let payload = match Provider::from_tag(&options.provider) {
            Some(provider) => {
                build_payload(provider, &group, &reviewer_map, options.channel.as_deref())
            }
            None => {
                warn!(provider = %options.provider, "Unrecognized provider, skipping notification");
                return Ok(());
            }
        };

        self.notifier.send(&payload).await?;
        info!("Notification sent successfully");

        Ok(())
    }
}

/// Route a review group to the provider's payload formatter.
pub fn build_payload(
    provider: Provider,
    group: &ReviewGroup,
    reviewer_map: &ReviewerMap,
    channel: Option<&str>,
) -> NotificationPayload {
    let text = render_text(group, reviewer_map, provider);
    match provider {
        Provider::Slack => format_flat(channel, &text),
        Provider::MsTeams => {
            let mentions = resolve_mentions(reviewer_map, group);
            format_with_mentions(&text, &mentions)
        }
    }
}
