use super::*;
use crate::test_support::{base_pr, changed_file};

const POM_PATCH: &str = concat!(
    "@@ -15,7 +15,7 @@\n",
    "     <groupId>com.google.cloud</groupId>\n",
    "     <artifactId>google-cloud-datacatalog</artifactId>\n",
    "-    <version>1.4.1</version>\n",
    "+    <version>1.4.2</version>\n",
);

fn pom_bump_pr() -> PullRequest {
    let mut pull_request = base_pr();
    pull_request.title =
        "chore(deps): update dependency com.google.cloud:google-cloud-datacatalog to v1.4.2"
            .to_string();
    pull_request.changed_files = vec![changed_file("pom.xml", POM_PATCH)];
    pull_request
}

#[tokio::test]
async fn test_pom_semver_bump_is_approved() {
    let rule = JavaDependency::new().unwrap();
    let evaluation = rule.evaluate(&pom_bump_pr()).await;

    let summary: Vec<(&str, bool)> = evaluation
        .results()
        .iter()
        .map(|r| (r.name.as_str(), r.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("titleMatches", true),
            ("authorshipMatches", true),
            ("maxFilesMatches", true),
            ("allowedFileMatches", true),
            ("doesDependencyMatch", true),
            ("isVersionValid", true),
            ("oneDependencyChanged", true),
        ]
    );
    assert!(evaluation.approved());
}

#[tokio::test]
async fn test_pom_revision_stamp_bump_is_approved() {
    let mut pull_request = base_pr();
    pull_request.title = concat!(
        "chore(deps): update dependency ",
        "com.google.apis:google-api-services-policytroubleshooter to v1-rev20210319-1.32.1"
    )
    .to_string();
    pull_request.changed_files = vec![changed_file(
        "pom.xml",
        concat!(
            "     <groupId>com.google.apis</groupId>\n",
            "     <artifactId>google-api-services-policytroubleshooter</artifactId>\n",
            "-    <version>v1-rev20210319-1.31.5</version>\n",
            "+    <version>v1-rev20210319-1.32.1</version>\n",
        ),
    )];

    let rule = JavaDependency::new().unwrap();
    assert!(rule.check_pr(&pull_request).await);
}

#[tokio::test]
async fn test_revision_rollback_is_rejected() {
    let mut pull_request = base_pr();
    pull_request.title = concat!(
        "chore(deps): update dependency ",
        "com.google.apis:google-api-services-policytroubleshooter to v1-rev20200101-1.32.1"
    )
    .to_string();
    pull_request.changed_files = vec![changed_file(
        "pom.xml",
        concat!(
            "     <groupId>com.google.apis</groupId>\n",
            "     <artifactId>google-api-services-policytroubleshooter</artifactId>\n",
            "-    <version>v1-rev20210319-1.31.5</version>\n",
            "+    <version>v1-rev20200101-1.32.1</version>\n",
        ),
    )];

    let rule = JavaDependency::new().unwrap();
    let evaluation = rule.evaluate(&pull_request).await;

    let version = evaluation
        .results()
        .iter()
        .find(|r| r.name == "isVersionValid")
        .expect("version check should run");
    assert!(!version.status);
    assert!(!evaluation.approved());
}

#[tokio::test]
async fn test_gradle_classpath_bump_is_approved() {
    let mut pull_request = base_pr();
    pull_request.title = concat!(
        "chore(deps): update dependency ",
        "com.google.cloud.tools:endpoints-framework-gradle-plugin to v1.0.4"
    )
    .to_string();
    pull_request.changed_files = vec![changed_file(
        "build.gradle",
        concat!(
            "-    classpath 'com.google.cloud.tools:endpoints-framework-gradle-plugin:1.0.3'\n",
            "+    classpath 'com.google.cloud.tools:endpoints-framework-gradle-plugin:1.0.4'\n",
        ),
    )];

    let rule = JavaDependency::new().unwrap();
    assert!(rule.check_pr(&pull_request).await);
}

#[tokio::test]
async fn test_unparsable_manifest_diff_is_rejected() {
    let mut pull_request = pom_bump_pr();
    pull_request.changed_files = vec![changed_file(
        "pom.xml",
        "-    <scope>test</scope>\n+    <scope>provided</scope>\n",
    )];

    let rule = JavaDependency::new().unwrap();
    let evaluation = rule.evaluate(&pull_request).await;

    let parse_failure = evaluation
        .results()
        .iter()
        .find(|r| r.name == "javaDependencyCheck")
        .expect("unparsable diff should surface a failing result");
    assert!(!parse_failure.status);
    assert_eq!(parse_failure.scope.as_deref(), Some("pom.xml"));
    assert!(!evaluation.approved());
}

#[tokio::test]
async fn test_title_naming_other_artifact_is_rejected() {
    let mut pull_request = pom_bump_pr();
    pull_request.title =
        "chore(deps): update dependency com.google.cloud:google-cloud-storage to v1.4.2"
            .to_string();

    let rule = JavaDependency::new().unwrap();
    let evaluation = rule.evaluate(&pull_request).await;

    let correlation = evaluation
        .results()
        .iter()
        .find(|r| r.name == "doesDependencyMatch")
        .expect("correlation check should run");
    assert!(!correlation.status);
    assert!(!evaluation.approved());
}
