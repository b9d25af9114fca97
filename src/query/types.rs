//! Externally defined payload shape.

use serde::Deserialize;

/// The repository fields rendered by the query view.
///
/// The payload is externally defined and not validated: absent fields
/// fall back to defaults and the description may be null.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RepoSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subscribers_count: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let payload = r#"{
            "name": "react-query",
            "description": "Hooks for fetching",
            "subscribers_count": 10,
            "stargazers_count": 20,
            "forks_count": 30,
            "open_issues_count": 40
        }"#;
        let repo: RepoSummary = serde_json::from_str(payload).expect("payload should decode");
        assert_eq!(repo.name, "react-query");
        assert_eq!(repo.description.as_deref(), Some("Hooks for fetching"));
        assert_eq!(repo.subscribers_count, 10);
        assert_eq!(repo.stargazers_count, 20);
        assert_eq!(repo.forks_count, 30);
    }

    #[test]
    fn absent_and_null_fields_default() {
        let repo: RepoSummary =
            serde_json::from_str(r#"{"description": null}"#).expect("payload should decode");
        assert_eq!(repo.name, "");
        assert_eq!(repo.description, None);
        assert_eq!(repo.forks_count, 0);
    }
}
