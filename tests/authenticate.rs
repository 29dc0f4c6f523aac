//! Authentication pipeline tests.
//!
//! Drive the full pipeline against the in-memory directory: input
//! validation, credential rejection, username derivation, tag metadata and
//! graceful degradation.

mod support;

use iamgate::{
    Authenticator, CredentialPair, FailureKind, MemoryDirectory, ProviderError, Resolver,
    TagKeys, TeamTable,
};
use support::*;

fn authenticator(dir: &MemoryDirectory) -> Authenticator<&MemoryDirectory, &MemoryDirectory> {
    Authenticator::new(dir, Resolver::new(dir, TeamTable::default(), TagKeys::default()))
}

fn alice() -> CredentialPair {
    CredentialPair::new(ALICE_ACCESS_KEY, ALICE_SECRET_KEY)
}

#[test]
fn test_full_identity_from_tags() {
    let dir = alice_directory();
    let user = authenticator(&dir).authenticate(&alice()).unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.account, ACCOUNT);
    assert_eq!(user.arn, ALICE_ARN);
    assert_eq!(user.team.as_deref(), Some("darwin"));
    assert_eq!(user.team_full.as_deref(), Some("Equipo Darwin"));
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.full_name.as_deref(), Some("Alice A."));
}

#[test]
fn test_username_from_colon_delimited_arn() {
    let dir = MemoryDirectory::new()
        .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, "arn:aws:iam::123456789012:alice", ACCOUNT)
        .with_tags("alice", ALICE_TAGS);

    let user = authenticator(&dir).authenticate(&alice()).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.team.as_deref(), Some("darwin"));
}

#[test]
fn test_malformed_arn_uses_whole_arn() {
    let dir = MemoryDirectory::new().with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, "alice", ACCOUNT);

    let user = authenticator(&dir).authenticate(&alice()).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice");
}

#[test]
fn test_specific_team_alias_wins() {
    let dir = MemoryDirectory::new()
        .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT)
        .with_tags("alice", &[("Team", "SAPL Corp Team")]);

    let user = authenticator(&dir).authenticate(&alice()).unwrap();
    assert_eq!(user.team.as_deref(), Some("saplcorp"));
    assert_eq!(user.team_full.as_deref(), Some("SAPL Corp Team"));
}

#[test]
fn test_team_full_keeps_whitespace_as_tagged() {
    let dir = MemoryDirectory::new()
        .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT)
        .with_tags("alice", &[("Team", "  Equipo Darwin ")]);

    let user = authenticator(&dir).authenticate(&alice()).unwrap();
    assert_eq!(user.team.as_deref(), Some("darwin"));
    assert_eq!(user.team_full.as_deref(), Some("  Equipo Darwin "));
}

#[test]
fn test_unmatched_team_keeps_raw_label() {
    let dir = MemoryDirectory::new()
        .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT)
        .with_tags("alice", &[("Team", "DeltaSmile Team")]);

    let user = authenticator(&dir).authenticate(&alice()).unwrap();
    assert_eq!(user.team, None);
    assert_eq!(user.team_full.as_deref(), Some("DeltaSmile Team"));
}

#[test]
fn test_email_falls_back_to_username() {
    let dir = MemoryDirectory::new()
        .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT)
        .with_tags("alice", &[("Team", "Darwin"), ("Person", "Alice A.")]);

    let user = authenticator(&dir).authenticate(&alice()).unwrap();
    assert_eq!(user.email, "alice");
    assert_eq!(user.full_name.as_deref(), Some("Alice A."));
}

#[test]
fn test_untagged_user() {
    let dir = MemoryDirectory::new().with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT);

    let user = authenticator(&dir).authenticate(&alice()).unwrap();
    assert_eq!(user.team, None);
    assert_eq!(user.team_full, None);
    assert_eq!(user.full_name, None);
    assert_eq!(user.email, "alice");
}

#[test]
fn test_metadata_failures_degrade_gracefully() {
    let failures = [
        ProviderError::rejected("AccessDenied", "not authorized to perform iam:ListUserTags"),
        ProviderError::rejected("NoSuchEntity", "The user with name alice cannot be found."),
        ProviderError::rejected("Throttling", "Rate exceeded"),
        ProviderError::Fault("dispatch failure: io error".to_string()),
    ];

    for failure in failures {
        let dir = alice_directory().with_tag_error("alice", failure.clone());
        let user = authenticator(&dir)
            .authenticate(&alice())
            .unwrap_or_else(|f| panic!("{:?} should not fail the request: {}", failure, f));

        assert_eq!(user.team, None);
        assert_eq!(user.team_full, None);
        assert_eq!(user.full_name, None);
        assert_eq!(user.email, "alice");
        assert_eq!(dir.tag_calls(), 1);
    }
}

#[test]
fn test_invalid_credentials() {
    let dir = alice_directory();

    let failure = authenticator(&dir)
        .authenticate(&CredentialPair::new(ALICE_ACCESS_KEY, "not-the-secret"))
        .unwrap_err();
    assert_eq!(failure.kind, FailureKind::AuthenticationFailed);
    assert!(failure.message.starts_with("AWS Error: SignatureDoesNotMatch - "));

    let failure = authenticator(&dir)
        .authenticate(&CredentialPair::new("AKIAUNKNOWN", "x"))
        .unwrap_err();
    assert_eq!(failure.kind, FailureKind::AuthenticationFailed);
    assert!(failure.message.contains("InvalidClientTokenId"));
    assert_eq!(dir.tag_calls(), 0);
}

#[test]
fn test_empty_access_key_makes_no_calls() {
    let dir = alice_directory();

    let failure = authenticator(&dir)
        .authenticate(&CredentialPair::new("", ALICE_SECRET_KEY))
        .unwrap_err();
    assert_eq!(failure.kind, FailureKind::InvalidRequest);

    let failure = authenticator(&dir)
        .authenticate(&CredentialPair::new(ALICE_ACCESS_KEY, "   "))
        .unwrap_err();
    assert_eq!(failure.kind, FailureKind::InvalidRequest);

    assert_eq!(dir.verify_calls(), 0);
    assert_eq!(dir.tag_calls(), 0);
}

#[test]
fn test_failures_never_echo_secret() {
    let dir = alice_directory();
    let failure = authenticator(&dir)
        .authenticate(&CredentialPair::new(ALICE_ACCESS_KEY, "hunter2-secret"))
        .unwrap_err();
    assert!(!failure.message.contains("hunter2-secret"));
    assert!(!failure.to_string().contains("hunter2-secret"));
}

#[test]
fn test_repeat_authentication_is_identical() {
    let dir = alice_directory();
    let auth = authenticator(&dir);

    let first = auth.authenticate(&alice()).unwrap();
    let second = auth.authenticate(&alice()).unwrap();
    assert_eq!(first, second);
    assert_eq!(dir.verify_calls(), 2);
    assert_eq!(dir.tag_calls(), 2);
}

#[test]
fn test_team_is_always_canonical() {
    let labels = ["Equipo Darwin", "mule soft", "SAPL-Corp", "SAP", "Other", ""];
    let table = TeamTable::default();

    for label in labels {
        let dir = MemoryDirectory::new()
            .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT)
            .with_tags("alice", &[("Team", label)]);
        let user = authenticator(&dir).authenticate(&alice()).unwrap();
        if let Some(team) = &user.team {
            assert!(table.contains(team), "{} is not canonical", team);
        }
    }
}

#[test]
fn test_from_config_uses_custom_table() {
    let config = iamgate::Config::parse(CUSTOM_TEAMS_CONFIG).unwrap();
    let dir = MemoryDirectory::new()
        .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT)
        .with_tags("alice", &[("Team", "Delta Smile Squad")]);

    let user = Authenticator::from_config(&dir, &dir, &config)
        .authenticate(&alice())
        .unwrap();
    assert_eq!(user.team.as_deref(), Some("deltasmile"));
}
