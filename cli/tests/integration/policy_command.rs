//! Integration tests for `netstack policy`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::netstack;

#[test]
fn test_policy_json_matches_literal_document() {
    let output = netstack()
        .args(["policy", "my-bucket", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let expected: serde_json::Value = serde_json::from_str(
        r#"{"Version":"2012-10-17","Statement":[{"Sid":"PublicReadGetObject","Effect":"Allow","Principal":"*","Action":["s3:GetObject"],"Resource":["arn:aws:s3:::my-bucket/*"]}]}"#,
    )
    .expect("literal");
    assert_eq!(value, expected);
}

#[test]
fn test_policy_human_prints_document() {
    netstack()
        .args(["policy", "assets.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arn:aws:s3:::assets.example.com/*"))
        .stdout(predicate::str::contains("\"Principal\": \"*\""));
}

#[test]
fn test_policy_rejects_invalid_bucket_name() {
    netstack()
        .args(["policy", "Not_A_Bucket"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bucket name 'Not_A_Bucket'"));
}

#[test]
fn test_policy_error_json_shape() {
    let output = netstack()
        .args(["policy", "x", "--json"])
        .output()
        .expect("run");
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "COMMAND_FAILED");
    assert!(
        value["message"]
            .as_str()
            .expect("message")
            .contains("between 3 and 63 characters")
    );
}
