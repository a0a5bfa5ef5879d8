// tests/jwt_provisioning.rs

use std::collections::HashSet;
use std::error::Error;
use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use staker::jwt::provision;
use staker_test_utils::capture::CaptureSink;
use staker_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn is_valid_secret(content: &str) -> bool {
    content.len() == 64 && content.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[test]
fn secret_file_holds_exactly_64_lowercase_hex_chars() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let path = dir.path().join("secret.hex");
    let sink = CaptureSink::new();

    provision(&path, sink.as_ref())?;

    // Read raw bytes: the content must be the encoding verbatim, with no
    // trailing newline.
    let content = fs::read(&path)?;
    assert_eq!(content.len(), 64);
    assert!(is_valid_secret(std::str::from_utf8(&content)?));

    Ok(())
}

/// The invariant must hold over repeated generation, not just once.
#[test]
fn repeated_provisioning_never_violates_the_secret_format() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let path = dir.path().join("secret.hex");
    let sink = CaptureSink::new();

    let mut seen = HashSet::new();
    for _ in 0..1000 {
        provision(&path, sink.as_ref())?;
        let content = fs::read_to_string(&path)?;
        assert!(is_valid_secret(&content), "invalid secret: {content:?}");
        seen.insert(content);
    }

    // 256 bits of entropy: any collision across 1000 draws means the
    // random source is broken.
    assert_eq!(seen.len(), 1000, "duplicate secrets generated");

    Ok(())
}

#[test]
fn two_provisioned_paths_hold_different_secrets() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let sink = CaptureSink::new();

    let first = dir.path().join("a.hex");
    let second = dir.path().join("b.hex");
    provision(&first, sink.as_ref())?;
    provision(&second, sink.as_ref())?;

    assert_ne!(fs::read_to_string(&first)?, fs::read_to_string(&second)?);

    Ok(())
}

#[test]
fn provisioning_creates_missing_parent_directories() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let path = dir.path().join("a").join("b").join("c").join("secret.hex");
    assert!(!path.parent().unwrap().exists());

    let sink = CaptureSink::new();
    provision(&path, sink.as_ref())?;

    assert!(path.is_file());
    assert!(is_valid_secret(&fs::read_to_string(&path)?));

    Ok(())
}

#[test]
fn provisioning_overwrites_an_existing_file() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let path = dir.path().join("secret.hex");
    fs::write(&path, "stale contents that are not a secret")?;

    let sink = CaptureSink::new();
    provision(&path, sink.as_ref())?;

    assert!(is_valid_secret(&fs::read_to_string(&path)?));

    Ok(())
}

#[test]
fn provisioning_emits_a_notice_naming_the_path() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let path = dir.path().join("secret.hex");
    let sink = CaptureSink::new();

    provision(&path, sink.as_ref())?;

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], format!("Generated JWT at {}", path.display()));

    Ok(())
}

#[test]
fn unwritable_parent_surfaces_an_io_failure() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    // A regular file where a directory is needed makes create_dir_all fail.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "")?;

    let sink = CaptureSink::new();
    let res = provision(blocker.join("secret.hex"), sink.as_ref());

    assert!(res.is_err(), "expected an IO failure, got {res:?}");
    assert!(sink.lines().is_empty(), "no notice on failure");

    Ok(())
}

proptest! {
    /// Provisioning works for arbitrary nested relative paths, and the
    /// written secret always satisfies the format invariant.
    #[test]
    fn provisioning_arbitrary_nested_paths_upholds_the_invariant(
        segments in proptest::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        init_tracing();

        let dir = tempdir().expect("tempdir");
        let mut path = dir.path().to_path_buf();
        for seg in &segments {
            path.push(seg);
        }
        path.push("secret.hex");

        let sink = CaptureSink::new();
        provision(&path, sink.as_ref()).expect("provisioning should succeed");

        let content = fs::read_to_string(&path).expect("secret file readable");
        prop_assert!(is_valid_secret(&content));
    }
}
