use std::fs;
use std::path::Path;

use textreuse::{
    compare_documents, CanonicalError, FingerprintConfig, NormalizationContext, NormalizeConfig,
    PipelineConfig, PipelineError, TextReuseConfig,
};

fn default_ctx() -> NormalizationContext {
    NormalizationContext::with_defaults(NormalizeConfig::default()).unwrap()
}

fn write(dir: &Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_document_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let present = write(dir.path(), "a.txt", b"The whale surfaced near the ship.");
    let absent = dir.path().join("b.txt");
    let cfg = PipelineConfig::new(FingerprintConfig::new(3, 1, 2));

    match compare_documents(&present, &absent, &default_ctx(), &cfg) {
        Err(PipelineError::MalformedInput { path, .. }) => assert_eq!(path, absent),
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn non_utf8_document_is_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(dir.path(), "a.txt", b"The whale surfaced near the ship.");
    let binary = write(dir.path(), "b.bin", &[0x77, 0x68, 0xc3, 0x28, 0xff]);
    let cfg = PipelineConfig::new(FingerprintConfig::new(3, 1, 2));

    let err = compare_documents(&text, &binary, &default_ctx(), &cfg).unwrap_err();
    match &err {
        PipelineError::MalformedInput { path, reason } => {
            assert_eq!(path, &binary);
            assert!(reason.contains("UTF-8"), "{reason}");
        }
        other => panic!("expected malformed input, got {other:?}"),
    }
    assert!(err.to_string().contains("b.bin"));
}

#[test]
fn zero_parameters_rejected_before_reading() {
    // Neither path exists: a parameter error proves nothing was opened.
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("missing-a.txt");
    let b = dir.path().join("missing-b.txt");
    let ctx = default_ctx();

    for (cfg, expected) in [
        (FingerprintConfig::new(0, 1, 2), "window_size"),
        (FingerprintConfig::new(3, 0, 2), "step"),
        (FingerprintConfig::new(3, 1, 0), "arity"),
    ] {
        match compare_documents(&a, &b, &ctx, &PipelineConfig::new(cfg)) {
            Err(PipelineError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
            other => panic!("expected invalid {expected}, got {other:?}"),
        }
    }
}

#[test]
fn malformed_resource_table_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let table = write(dir.path(), "frequencies.txt", b"whale\t0.01\nsea\tplenty\n");

    let err = NormalizationContext::from_resource_dir(NormalizeConfig::default(), dir.path())
        .unwrap_err();
    let err = PipelineError::from(err);
    match err {
        PipelineError::Canonical(CanonicalError::Resource { path, reason }) => {
            assert_eq!(path, table);
            assert!(reason.contains("line 2"), "{reason}");
        }
        other => panic!("expected resource error, got {other:?}"),
    }
}

#[test]
fn config_without_window_parameters_is_invalid() {
    let config = TextReuseConfig::from_yaml("version: \"1.0\"\nfingerprint:\n  step: 2\n").unwrap();
    match config.pipeline_config() {
        Err(PipelineError::InvalidParameter { name, reason }) => {
            assert!(name.contains("window_size"), "{name}");
            assert!(reason.contains("missing"), "{reason}");
        }
        other => panic!("expected invalid parameter, got {other:?}"),
    }
}

#[test]
fn invalid_report_format_in_config_fails_to_load() {
    let yaml = r#"
version: "1.0"
fingerprint:
  window_size: 4
  step: 2
  arity: 2
matcher:
  format: xml
"#;
    assert!(TextReuseConfig::from_yaml(yaml).is_err());
}
