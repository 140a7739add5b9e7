//! Report serialization.

use std::io::Write;

use crate::types::{MatchError, MatchRecord, ReportFormat};

/// Write `records` to `out`, one per line, in the given format.
///
/// TSV rows carry path A, path B, count, sentence A and sentence B with no
/// header. Sentence texts are whitespace-collapsed upstream, so they never
/// contain a tab or newline.
pub fn write_report<W: Write>(
    records: &[MatchRecord],
    format: ReportFormat,
    mut out: W,
) -> Result<(), MatchError> {
    for record in records {
        match format {
            ReportFormat::Tsv => writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                record.path_a.display(),
                record.path_b.display(),
                record.count,
                record.sentence_a,
                record.sentence_b
            )?,
            ReportFormat::Jsonl => {
                serde_json::to_writer(&mut out, record)?;
                out.write_all(b"\n")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentencePair;
    use std::path::PathBuf;

    fn record(count: u64, a: &str, b: &str) -> MatchRecord {
        MatchRecord {
            path_a: PathBuf::from("moby.txt"),
            path_b: PathBuf::from("whale.txt"),
            count,
            pair: SentencePair::new(0, 0),
            sentence_a: a.to_string(),
            sentence_b: b.to_string(),
        }
    }

    #[test]
    fn tsv_rows_have_five_fields_and_no_header() {
        let mut buf = Vec::new();
        write_report(
            &[record(9, "Call me Ishmael.", "Call me, Ishmael!"), record(7, "x", "y")],
            ReportFormat::Tsv,
            &mut buf,
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "moby.txt\twhale.txt\t9\tCall me Ishmael.\tCall me, Ishmael!"
        );
        assert!(lines.iter().all(|l| l.split('\t').count() == 5));
    }

    #[test]
    fn jsonl_emits_one_object_per_line() {
        let mut buf = Vec::new();
        write_report(&[record(6, "a b", "c d")], ReportFormat::Jsonl, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["count"], 6);
        assert_eq!(value["path_a"], "moby.txt");
        assert_eq!(value["sentence_b"], "c d");
        assert!(value.get("pair").is_none());
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn empty_report_writes_nothing() {
        let mut buf = Vec::new();
        write_report(&[], ReportFormat::Tsv, &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
