use std::collections::HashMap;

use thiserror::Error;

/// The reviewer mapping string could not be parsed
#[derive(Debug, Error)]
#[error("malformed reviewer mapping pair `{pair}`: expected `login:id`")]
pub struct ConfigFormatError {
    pub pair: String,
}

/// Mapping from repository-host login to chat-provider identifier.
///
/// Built once per run from a configuration string of the form
/// `login1:id1,login2:id2` and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct ReviewerMap {
    entries: HashMap<String, String>,
}

impl ReviewerMap {
    /// Parse the mapping string. Empty input yields an empty map; a pair
    /// without a `:` separator is an error. Duplicate logins: last wins.
    pub fn parse(raw: &str) -> Result<Self, ConfigFormatError> {
        let mut entries = HashMap::new();

        if raw.is_empty() {
            return Ok(Self { entries });
        }

        for pair in raw.split(',') {
            let (login, id) = pair.split_once(':').ok_or_else(|| ConfigFormatError {
                pair: pair.to_string(),
            })?;
            entries.insert(login.to_string(), id.to_string());
        }

        Ok(Self { entries })
    }

    pub fn get(&self, login: &str) -> Option<&str> {
        self.entries.get(login).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Destination chat platform. Each variant carries its own mention syntax
/// and payload shape; adding a provider means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Slack,
    MsTeams,
}

impl Provider {
    /// Parse a provider tag. An unrecognized tag is not an error: the run
    /// produces no payload and skips delivery.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "slack" => Some(Provider::Slack),
            "msteams" => Some(Provider::MsTeams),
            _ => None,
        }
    }
}
