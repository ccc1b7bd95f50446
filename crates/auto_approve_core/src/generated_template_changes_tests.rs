use super::*;
use crate::pull_request::PullRequest;
use crate::test_support::{base_pr, StaticContentReader};

fn template_pr() -> PullRequest {
    let mut pull_request = base_pr();
    pull_request.author = "api-generator[bot]".to_string();
    pull_request.title = "chore: regenerate templates [autoapprove]".to_string();
    pull_request.body = "Provenance-RevId: 412095820".to_string();
    pull_request
}

fn generated_rule() -> GeneratedTemplateChanges {
    GeneratedTemplateChanges::new(Arc::new(StaticContentReader::with_library_type(
        "GENERATED_AUTO",
    )))
    .unwrap()
}

#[tokio::test]
async fn test_tagged_template_regeneration_is_approved() {
    let evaluation = generated_rule().evaluate(&template_pr()).await;

    let summary: Vec<(&str, bool)> = evaluation
        .results()
        .iter()
        .map(|r| (r.name.as_str(), r.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("titleMatches", true),
            ("titleMatches", true),
            ("authorshipMatches", true),
            ("bodyMatches", true),
            ("libraryTypeMatches", true),
        ]
    );
    assert!(evaluation.approved());
}

#[tokio::test]
async fn test_missing_opt_in_tag_is_rejected() {
    let mut pull_request = template_pr();
    pull_request.title = "chore: regenerate templates".to_string();

    assert!(!generated_rule().check_pr(&pull_request).await);
}

#[tokio::test]
async fn test_behavioral_title_is_rejected() {
    let mut pull_request = template_pr();
    pull_request.title = "feat: regenerate templates [autoapprove]".to_string();

    let evaluation = generated_rule().evaluate(&pull_request).await;
    // The opt-in title check passes, the inverted one fails.
    let titles: Vec<bool> = evaluation
        .results()
        .iter()
        .filter(|r| r.name == "titleMatches")
        .map(|r| r.status)
        .collect();
    assert_eq!(titles, vec![true, false]);
    assert!(!evaluation.approved());
}

#[tokio::test]
async fn test_missing_provenance_marker_is_rejected() {
    let mut pull_request = template_pr();
    pull_request.body = "Regenerated templates.".to_string();

    assert!(!generated_rule().check_pr(&pull_request).await);
}

#[tokio::test]
async fn test_missing_metadata_file_is_rejected() {
    use crate::test_support::ContentOutcome;

    let rule =
        GeneratedTemplateChanges::new(Arc::new(StaticContentReader(ContentOutcome::NotFound)))
            .unwrap();

    assert!(!rule.check_pr(&template_pr()).await);
}
