use serde::Deserialize;
use thiserror::Error;

/// An open pull request awaiting review, validated at the fetch boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub requested_reviewers: Vec<String>,
    pub labels: Vec<String>,
}

/// The repository host returned a record missing a required field
#[derive(Debug, Error)]
#[error("malformed pull request record: missing `{field}`")]
pub struct MalformedRecordError {
    pub field: &'static str,
}

/// Pull request record as returned by the repository host, before validation
#[derive(Debug, Deserialize)]
pub struct RawPullRequest {
    pub number: Option<u64>,
    pub title: Option<String>,
    pub html_url: Option<String>,
    pub user: Option<RawUser>,
    #[serde(default)]
    pub requested_reviewers: Vec<RawReviewer>,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
}

#[derive(Debug, Deserialize)]
pub struct RawUser {
    pub login: Option<String>,
}

/// Reviewers arrive either as bare login strings or as user objects
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawReviewer {
    Login(String),
    User(RawUser),
}

impl RawReviewer {
    fn into_login(self) -> Result<String, MalformedRecordError> {
        match self {
            RawReviewer::Login(login) => Ok(login),
            RawReviewer::User(user) => user.login.ok_or(MalformedRecordError {
                field: "requested_reviewers.login",
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawLabel {
    pub name: Option<String>,
}

impl TryFrom<RawPullRequest> for PullRequest {
    type Error = MalformedRecordError;

    fn try_from(raw: RawPullRequest) -> Result<Self, Self::Error> {
        let number = raw.number.ok_or(MalformedRecordError { field: "number" })?;
        let title = raw.title.ok_or(MalformedRecordError { field: "title" })?;
        let url = raw
            .html_url
            .ok_or(MalformedRecordError { field: "html_url" })?;
        let author = raw
            .user
            .and_then(|user| user.login)
            .ok_or(MalformedRecordError { field: "user.login" })?;

        let requested_reviewers = raw
            .requested_reviewers
            .into_iter()
            .map(RawReviewer::into_login)
            .collect::<Result<Vec<_>, _>>()?;

        let labels = raw
            .labels
            .into_iter()
            .map(|label| {
                label.name.ok_or(MalformedRecordError {
                    field: "labels.name",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PullRequest {
            number,
            title,
            url,
            author,
            requested_reviewers,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_from_json(json: &str) -> RawPullRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_record() {
        let raw = raw_from_json(
            r#"{
                "number": 1,
                "title": "Fix bug",
                "html_url": "https://github.com/org/repo/pull/1",
                "user": {"login": "carol"},
                "requested_reviewers": [{"login": "alice"}, {"login": "bob"}],
                "labels": [{"name": "bug"}]
            }"#,
        );

        let pr = PullRequest::try_from(raw).unwrap();
        assert_eq!(pr.number, 1);
        assert_eq!(pr.title, "Fix bug");
        assert_eq!(pr.author, "carol");
        assert_eq!(pr.requested_reviewers, vec!["alice", "bob"]);
        assert_eq!(pr.labels, vec!["bug"]);
    }

    #[test]
    fn test_reviewers_as_bare_strings() {
        let raw = raw_from_json(
            r#"{
                "number": 2,
                "title": "Add feature",
                "html_url": "https://github.com/org/repo/pull/2",
                "user": {"login": "carol"},
                "requested_reviewers": ["alice"],
                "labels": []
            }"#,
        );

        let pr = PullRequest::try_from(raw).unwrap();
        assert_eq!(pr.requested_reviewers, vec!["alice"]);
    }

    #[test]
    fn test_missing_reviewers_and_labels_default_empty() {
        let raw = raw_from_json(
            r#"{
                "number": 3,
                "title": "Docs",
                "html_url": "https://github.com/org/repo/pull/3",
                "user": {"login": "carol"}
            }"#,
        );

        let pr = PullRequest::try_from(raw).unwrap();
        assert!(pr.requested_reviewers.is_empty());
        assert!(pr.labels.is_empty());
    }

    #[test]
    fn test_missing_title_fails() {
        let raw = raw_from_json(
            r#"{
                "number": 4,
                "html_url": "https://github.com/org/repo/pull/4",
                "user": {"login": "carol"}
            }"#,
        );

        let err = PullRequest::try_from(raw).unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn test_missing_author_login_fails() {
        let raw = raw_from_json(
            r#"{
                "number": 5,
                "title": "Refactor",
                "html_url": "https://github.com/org/repo/pull/5",
                "user": {}
            }"#,
        );

        let err = PullRequest::try_from(raw).unwrap_err();
        assert_eq!(err.field, "user.login");
    }

    #[test]
    fn test_label_without_name_fails() {
        let raw = raw_from_json(
            r#"{
                "number": 6,
                "title": "Chore",
                "html_url": "https://github.com/org/repo/pull/6",
                "user": {"login": "carol"},
                "labels": [{}]
            }"#,
        );

        let err = PullRequest::try_from(raw).unwrap_err();
        assert_eq!(err.field, "labels.name");
    }
}
