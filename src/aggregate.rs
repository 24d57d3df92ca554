use crate::models::PullRequest;

/// Pull requests grouped by requested reviewer.
///
/// Reviewers iterate in first-seen order across the input sequence; each
/// reviewer's pull requests keep their input order. A pull request with
/// several requested reviewers appears once per reviewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewGroup {
    entries: Vec<(String, Vec<PullRequest>)>,
}

impl ReviewGroup {
    pub fn group_by_reviewer(pull_requests: &[PullRequest]) -> Self {
        let mut group = Self::default();
        for pr in pull_requests {
            for reviewer in &pr.requested_reviewers {
                group.push(reviewer, pr.clone());
            }
        }
        group
    }

    fn push(&mut self, reviewer: &str, pr: PullRequest) {
        match self.entries.iter_mut().find(|(login, _)| login == reviewer) {
            Some((_, prs)) => prs.push(pr),
            None => self.entries.push((reviewer.to_string(), vec![pr])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PullRequest])> {
        self.entries
            .iter()
            .map(|(login, prs)| (login.as_str(), prs.as_slice()))
    }

    /// Flatten back to (reviewer, pull request) pairs in iteration order.
    pub fn flatten(&self) -> Vec<(String, PullRequest)> {
        self.entries
            .iter()
            .flat_map(|(login, prs)| prs.iter().map(|pr| (login.clone(), pr.clone())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
