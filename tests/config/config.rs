use docuhook::config::{Config, SharedSecret, DEFAULT_MAX_BODY_BYTES};
use docuhook::connect::verify::HmacAlgorithm;
use docuhook::error::ConfigError;
use std::collections::HashMap;

fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<&str, &str> = vars.iter().copied().collect();
    Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
}

#[test]
fn test_defaults() {
    let config = load(&[("DS_CONNECT_KEY", "s3cr3t")]).unwrap();

    assert_eq!(config.connect.secret.as_bytes(), b"s3cr3t");
    assert_eq!(config.connect.signature_header, "x-docusign-signature-1");
    assert_eq!(config.connect.algorithm, HmacAlgorithm::Sha256);
    assert_eq!(config.host.to_string(), "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
}

#[test]
fn test_missing_or_empty_secret() {
    assert_eq!(load(&[]).unwrap_err(), ConfigError::MissingSecret);
    assert_eq!(
        load(&[("DS_CONNECT_KEY", "")]).unwrap_err(),
        ConfigError::MissingSecret
    );
    assert_eq!(
        SharedSecret::new(Vec::new()).unwrap_err(),
        ConfigError::MissingSecret
    );
}

#[test]
fn test_overrides() {
    let config = load(&[
        ("DS_CONNECT_KEY", "k"),
        ("DS_CONNECT_SIGNATURE_HEADER", "X-DocuSign-Signature-2"),
        ("DS_CONNECT_HMAC_ALGORITHM", "SHA512"),
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("MAX_BODY_BYTES", "1024"),
    ])
    .unwrap();

    assert_eq!(config.connect.signature_header, "x-docusign-signature-2");
    assert_eq!(config.connect.algorithm, HmacAlgorithm::Sha512);
    assert_eq!(config.host.to_string(), "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.max_body_bytes, 1024);
}

#[test]
fn test_invalid_values_fail_fast() {
    let cases = [
        ("HOST", "localhost"),
        ("HOST", "10.0.0"),
        ("PORT", "http"),
        ("PORT", "70000"),
        ("MAX_BODY_BYTES", "0"),
        ("DS_CONNECT_HMAC_ALGORITHM", "md5"),
        ("DS_CONNECT_SIGNATURE_HEADER", "bad header"),
    ];

    for (key, value) in cases {
        let err = load(&[("DS_CONNECT_KEY", "k"), (key, value)]).unwrap_err();
        assert!(
            matches!(&err, ConfigError::Invalid { key: k, .. } if *k == key),
            "{key}={value} gave {err:?}"
        );
    }
}

#[test]
fn test_secret_is_redacted() {
    let config = load(&[("DS_CONNECT_KEY", "hunter2")]).unwrap();

    assert!(!format!("{:?}", config).contains("hunter2"));
    assert_eq!(
        format!("{:?}", config.connect.secret),
        "SharedSecret(<redacted>)"
    );
}
