use super::*;
use serde_json::from_str;

#[test]
fn test_pull_request_commit_deserialization() {
    let json = r#"{"sha": "abc123", "author": {"login": "renovate-bot", "id": 42}}"#;
    let commit: PullRequestCommit = from_str(json).expect("Failed to deserialize commit");
    assert_eq!(
        commit.author,
        Some(Account {
            login: "renovate-bot".to_string()
        })
    );
}

#[test]
fn test_pull_request_commit_without_author() {
    let json = r#"{"sha": "abc123", "author": null}"#;
    let commit: PullRequestCommit = from_str(json).expect("Failed to deserialize commit");
    assert_eq!(commit.author, None);
}

#[test]
fn test_pull_request_summary_deserialization() {
    let json = r#"{"number": 17, "state": "open", "user": {"login": "release-please"}}"#;
    let summary: PullRequestSummary = from_str(json).expect("Failed to deserialize summary");
    assert_eq!(summary.number, 17);
    assert_eq!(summary.user.unwrap().login, "release-please");
}

#[test]
fn test_decoded_content_round_trip() {
    // "hello world" encoded, wrapped the way GitHub wraps payloads.
    let content = RepositoryContent {
        path: ".repo-metadata.json".to_string(),
        content: Some("aGVsbG8g\nd29ybGQ=\n".to_string()),
        encoding: Some("base64".to_string()),
    };
    assert_eq!(content.decoded_content().unwrap(), "hello world");
}

#[test]
fn test_decoded_content_rejects_missing_body() {
    let content = RepositoryContent {
        path: ".repo-metadata.json".to_string(),
        content: None,
        encoding: Some("base64".to_string()),
    };
    assert!(matches!(
        content.decoded_content(),
        Err(Error::InvalidResponse)
    ));
}

#[test]
fn test_decoded_content_rejects_unknown_encoding() {
    let content = RepositoryContent {
        path: ".repo-metadata.json".to_string(),
        content: Some("aGVsbG8=".to_string()),
        encoding: Some("utf-7".to_string()),
    };
    assert!(matches!(
        content.decoded_content(),
        Err(Error::InvalidResponse)
    ));
}

#[test]
fn test_decoded_content_rejects_invalid_base64() {
    let content = RepositoryContent {
        path: ".repo-metadata.json".to_string(),
        content: Some("!!! not base64 !!!".to_string()),
        encoding: Some("base64".to_string()),
    };
    assert!(matches!(
        content.decoded_content(),
        Err(Error::InvalidResponse)
    ));
}
