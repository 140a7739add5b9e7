use std::fs;
use std::path::Path;

use tempfile::TempDir;
use textreuse::{
    compare_documents, compare_sources, FingerprintConfig, NormalizationContext, NormalizeConfig,
    PipelineConfig, ReportFormat, SourceDocument, UnicodeSentenceSplitter,
};

fn write_doc(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write document");
    path
}

fn default_ctx() -> NormalizationContext {
    NormalizationContext::with_defaults(NormalizeConfig::default()).expect("context")
}

#[test]
fn cat_example_reported_at_threshold_one() {
    let dir = TempDir::new().unwrap();
    let a = write_doc(dir.path(), "a.txt", "the cat sat on the mat");
    let b = write_doc(dir.path(), "b.txt", "a cat sat near a mat");
    let cfg = PipelineConfig::new(FingerprintConfig::new(3, 3, 2)).with_threshold(1);

    let report = compare_documents(&a, &b, &default_ctx(), &cfg).unwrap();

    assert_eq!(report.summary.shared_vocabulary, 3);
    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.count, 3);
    assert_eq!(record.sentence_a, "the cat sat on the mat");
    assert_eq!(record.sentence_b, "a cat sat near a mat");
    assert_eq!(record.path_a, a);
    assert_eq!(record.path_b, b);
}

#[test]
fn cat_example_suppressed_at_threshold_three() {
    let dir = TempDir::new().unwrap();
    let a = write_doc(dir.path(), "a.txt", "the cat sat on the mat");
    let b = write_doc(dir.path(), "b.txt", "a cat sat near a mat");
    let cfg = PipelineConfig::new(FingerprintConfig::new(3, 3, 2)).with_threshold(3);

    let report = compare_documents(&a, &b, &default_ctx(), &cfg).unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.summary.candidate_pairs, 1);
}

#[test]
fn disjoint_documents_yield_empty_report() {
    let a = SourceDocument::from_text("a.txt", "Whales breach the cold grey ocean.");
    let b = SourceDocument::from_text("b.txt", "Camels cross burning desert dunes.");
    let cfg = PipelineConfig::new(FingerprintConfig::new(4, 1, 2)).with_threshold(0);

    let report =
        compare_sources(&a, &b, &UnicodeSentenceSplitter, &default_ctx(), &cfg).unwrap();
    assert_eq!(report.summary.shared_vocabulary, 0);
    assert_eq!(report.summary.index_a.fingerprints, 0);
    assert_eq!(report.summary.index_b.fingerprints, 0);
    assert_eq!(report.summary.candidate_pairs, 0);
    assert!(report.records.is_empty());
}

#[test]
fn reused_sentence_found_among_unrelated_ones() {
    let a = SourceDocument::from_text(
        "moby.txt",
        "Call me Ishmael. Some years ago, never mind how long precisely, having little \
         money in my purse, I thought I would sail about a little and see the watery part \
         of the world. It is a way I have of driving off the spleen.",
    );
    let b = SourceDocument::from_text(
        "essay.txt",
        "Trains were late again today. Having little money in his purse and nothing \
         particular on shore, he thought he would sail about and see the watery part of \
         the world. Lunch was soup.",
    );
    let cfg = PipelineConfig::new(FingerprintConfig::new(6, 2, 2)).with_threshold(5);

    let report =
        compare_sources(&a, &b, &UnicodeSentenceSplitter, &default_ctx(), &cfg).unwrap();

    assert!(!report.records.is_empty());
    let top = &report.records[0];
    assert_eq!(top.pair.a, 1);
    assert_eq!(top.pair.b, 1);
    assert!(top.sentence_a.starts_with("Some years ago"));
    assert!(top.sentence_b.starts_with("Having little money"));
    assert!(report.records.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn single_short_sentence_still_indexed() {
    let a = SourceDocument::from_text("a.txt", "Ocean whale harpoon.");
    let b = SourceDocument::from_text("b.txt", "Whale ocean harpoon!");
    let cfg = PipelineConfig::new(FingerprintConfig::new(10, 5, 2)).with_threshold(0);

    let report =
        compare_sources(&a, &b, &UnicodeSentenceSplitter, &default_ctx(), &cfg).unwrap();
    assert_eq!(report.summary.index_a.indexed_sentences, 1);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].count, 3);
}

#[test]
fn tsv_report_lines_have_five_fields() {
    let dir = TempDir::new().unwrap();
    let a = write_doc(dir.path(), "a.txt", "The cat sat\ton the mat.\nDogs bark loudly.");
    let b = write_doc(dir.path(), "b.txt", "A cat sat near a mat. Birds sing.");
    let cfg = PipelineConfig::new(FingerprintConfig::new(3, 3, 2)).with_threshold(0);

    let report = compare_documents(&a, &b, &default_ctx(), &cfg).unwrap();
    let mut out = Vec::new();
    report.write(ReportFormat::Tsv, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 1);
    let fields: Vec<&str> = text.trim_end().split('\t').collect();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[2], "3");
    assert_eq!(fields[3], "The cat sat on the mat.");
}

#[test]
fn resource_directory_changes_vocabulary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("orthographic_variants.txt"), "colour\tcolor\n").unwrap();
    fs::write(dir.path().join("stopwords.txt"), "the a of\n").unwrap();

    let ctx = NormalizationContext::from_resource_dir(
        NormalizeConfig::default().with_stemming(false),
        dir.path(),
    )
    .unwrap();
    let a = SourceDocument::from_text("a.txt", "The colour of the bright sky.");
    let b = SourceDocument::from_text("b.txt", "A bright sky color.");
    let cfg = PipelineConfig::new(FingerprintConfig::new(3, 1, 2)).with_threshold(0);

    let report = compare_sources(&a, &b, &UnicodeSentenceSplitter, &ctx, &cfg).unwrap();
    assert_eq!(report.summary.shared_vocabulary, 3);
    assert_eq!(report.records[0].count, 3);
}
