//! `owner/name` repository identifiers

use serde::{Deserialize, Serialize};

/// A GitHub repository split into owner and name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoWithOwner {
    pub owner: String,
    pub name: String,
}

/// Split an `owner/name` string.
///
/// No validation is done: a missing name is empty and extra segments are ignored.
pub fn parse_repo_with_owner(repo_with_owner: &str) -> RepoWithOwner {
    let mut parts = repo_with_owner.split('/');
    RepoWithOwner {
        owner: parts.next().unwrap_or_default().to_string(),
        name: parts.next().unwrap_or_default().to_string(),
    }
}
