//! Test fixtures and constants.

use iamgate::MemoryDirectory;

pub const ACCOUNT: &str = "123456789012";
pub const ALICE_ARN: &str = "arn:aws:iam::123456789012:user/alice";
pub const ALICE_ACCESS_KEY: &str = "AKIAALICEEXAMPLE";
pub const ALICE_SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG/alice";

/// Tags for the canonical alice scenario.
pub const ALICE_TAGS: &[(&str, &str)] = &[
    ("Team", "Equipo Darwin"),
    ("Email", "alice@example.com"),
    ("Person", "Alice A."),
];

/// Config with a custom, order-sensitive team table.
pub const CUSTOM_TEAMS_CONFIG: &str = r#"
[[teams]]
keyword = "deltasmile"
aliases = ["deltasmile", "delta smile"]

[[teams]]
keyword = "delta"
aliases = ["delta"]
"#;

/// Directory with alice registered and tagged.
pub fn alice_directory() -> MemoryDirectory {
    MemoryDirectory::new()
        .with_user(ALICE_ACCESS_KEY, ALICE_SECRET_KEY, ALICE_ARN, ACCOUNT)
        .with_tags("alice", ALICE_TAGS)
}
