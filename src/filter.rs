use crate::models::PullRequest;

/// Keep only pull requests with at least one requested reviewer.
pub fn select_reviewable(pull_requests: &[PullRequest]) -> Vec<PullRequest> {
    pull_requests
        .iter()
        .filter(|pr| !pr.requested_reviewers.is_empty())
        .cloned()
        .collect()
}

/// Drop pull requests carrying `ignore_label` (exact, case-sensitive match).
/// An empty label disables the check entirely.
pub fn exclude_by_label(pull_requests: &[PullRequest], ignore_label: &str) -> Vec<PullRequest> {
    if ignore_label.is_empty() {
        return pull_requests.to_vec();
    }

    pull_requests
        .iter()
        .filter(|pr| !pr.labels.iter().any(|label| label == ignore_label))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(number: u64, reviewers: &[&str], labels: &[&str]) -> PullRequest {
        PullRequest {
            number,
            title: format!("PR #{number}"),
            url: format!("https://github.com/org/repo/pull/{number}"),
            author: "carol".to_string(),
            requested_reviewers: reviewers.iter().map(|r| r.to_string()).collect(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_select_reviewable_drops_reviewerless() {
        let input = vec![
            pr(1, &["alice"], &[]),
            pr(2, &[], &[]),
            pr(3, &["bob", "alice"], &[]),
        ];

        let result = select_reviewable(&input);
        let numbers: Vec<u64> = result.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_select_reviewable_preserves_order() {
        let input = vec![pr(5, &["a"], &[]), pr(2, &["b"], &[]), pr(9, &["c"], &[])];

        let result = select_reviewable(&input);
        let numbers: Vec<u64> = result.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![5, 2, 9]);
    }

    #[test]
    fn test_exclude_by_label() {
        let input = vec![
            pr(1, &["alice"], &["no-review"]),
            pr(2, &["bob"], &["bug"]),
            pr(3, &["alice"], &[]),
        ];

        let result = exclude_by_label(&input, "no-review");
        let numbers: Vec<u64> = result.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn test_exclude_by_label_is_case_sensitive() {
        let input = vec![pr(1, &["alice"], &["No-Review"])];

        let result = exclude_by_label(&input, "no-review");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_label_excludes_nothing() {
        let input = vec![pr(1, &["alice"], &["no-review"]), pr(2, &["bob"], &[])];

        let result = exclude_by_label(&input, "");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let input = vec![pr(1, &[], &[]), pr(2, &["alice"], &["no-review"])];
        let snapshot = input.clone();

        let _ = select_reviewable(&input);
        let _ = exclude_by_label(&input, "no-review");
        assert_eq!(input, snapshot);
    }
}
