use std::fs;

use proptest::prelude::*;
use version_file::{resolve_version, VersionRecord};

proptest! {
    #[test]
    fn surrounding_whitespace_is_dropped(
        token in "[0-9A-Za-z][0-9A-Za-z.+-]{0,20}",
        lead in "[ \t\r\n]{0,8}",
        trail in "[ \t\r\n]{0,8}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("VERSION"), format!("{lead}{token}{trail}")).unwrap();

        let version = resolve_version(dir.path()).unwrap();
        prop_assert_eq!(&version, &token);
    }

    #[test]
    fn trimming_is_idempotent(content in "\\PC{0,64}") {
        let once = VersionRecord::new("VERSION", content);
        let twice = VersionRecord::new("VERSION", once.resolved_value().to_string());
        prop_assert_eq!(once.resolved_value(), twice.resolved_value());
    }
}
