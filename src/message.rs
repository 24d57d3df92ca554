use crate::aggregate::ReviewGroup;
use crate::config::{Provider, ReviewerMap};

/// A reviewer mention to be declared as a separate payload entity.
///
/// Teams adaptive cards validate inline `<at>` tokens against an explicit
/// entity registry in the payload; Slack needs no such registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub id: String,
    pub login: String,
}

/// Render one reminder line per reviewer/pull-request pair, reviewers in
/// first-seen order. The provider affects only mention and link syntax.
pub fn render_text(group: &ReviewGroup, map: &ReviewerMap, provider: Provider) -> String {
    let mut message = String::new();

    for (reviewer, prs) in group.iter() {
        let mention = mention(provider, reviewer, map);
        for pr in prs {
            let line = match provider {
                Provider::Slack => format!(
                    "Hey {mention}, the PR \"{}\" is waiting for your review: {}\n",
                    pr.title, pr.url
                ),
                // Markdown link; the trailing double space is a hard line break
                Provider::MsTeams => format!(
                    "Hey {mention}, the PR \"{}\" is waiting for your review: [{}]({})  \n",
                    pr.title, pr.url, pr.url
                ),
            };
            message.push_str(&line);
        }
    }

    message
}

/// Resolve each reviewer with pending pull requests to a declared mention.
/// Reviewers without a mapping entry are omitted; they render by handle only.
pub fn resolve_mentions(map: &ReviewerMap, group: &ReviewGroup) -> Vec<Mention> {
    group
        .iter()
        .filter_map(|(login, _)| {
            map.get(login).map(|id| Mention {
                id: id.to_string(),
                login: login.to_string(),
            })
        })
        .collect()
}

fn mention(provider: Provider, login: &str, map: &ReviewerMap) -> String {
    match (provider, map.get(login)) {
        (Provider::Slack, Some(id)) => format!("<@{id}>"),
        (Provider::MsTeams, Some(_)) => format!("<at>{login}</at>"),
        (_, None) => format!("@{login}"),
    }
}
