use crate::api::error::ApiError;
use crate::api::persist::Persister;
use crate::api::types::envelope::ResponseEnvelope;
use crate::api::utils::display_or;
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

/// Width of the rule lines framing each section
pub const RULE_WIDTH: usize = 70;

/// Number of records shown per response unless configured otherwise
pub const DEFAULT_PREVIEW: usize = 3;

/// Prints a bounded summary of a response and hands it to the [`Persister`]
#[derive(Debug, Clone)]
pub struct Reporter {
    persister: Persister,
    preview: usize,
}

impl Reporter {
    /// Creates a reporter showing [`DEFAULT_PREVIEW`] records
    pub fn new(persister: Persister) -> Self {
        Reporter {
            persister,
            preview: DEFAULT_PREVIEW,
        }
    }

    /// Change how many records are printed per response
    pub fn with_preview(mut self, preview: usize) -> Self {
        self.preview = preview;
        self
    }

    /// Persister the reporter writes through
    pub fn persister(&self) -> &Persister {
        &self.persister
    }

    /// Print the summary for `body` to `out`, then save it under `label`
    pub fn report<W: Write>(
        &self,
        out: &mut W,
        label: &str,
        body: &Value,
    ) -> Result<PathBuf, ApiError> {
        self.summarize(out, label, body)?;
        let path = self.persister.save(label, body)?;
        writeln!(out, "   💾 Saved to: {}", path.display())?;
        Ok(path)
    }

    fn summarize<W: Write>(&self, out: &mut W, label: &str, body: &Value) -> Result<(), ApiError> {
        let envelope = ResponseEnvelope::from_body(body);
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", label)?;
        writeln!(out, "{}", rule)?;
        writeln!(
            out,
            "Page: {} | Page Size: {}",
            display_or(envelope.page, "N/A"),
            display_or(envelope.page_size, "N/A")
        )?;
        writeln!(
            out,
            "Records: {} | Total: {}",
            display_or(envelope.count, "0"),
            display_or(envelope.total_count, "N/A")
        )?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

        let records = envelope.records();
        if records.is_empty() {
            writeln!(out, "No data found")?;
            return Ok(());
        }

        let shown = records.len().min(self.preview);
        for (i, record) in records.iter().take(shown).enumerate() {
            writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
            if i + 1 < shown {
                writeln!(out)?;
            }
        }
        if records.len() > self.preview {
            writeln!(out, "... and {} more records", records.len() - self.preview)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::persist::Persister;
    use crate::api::report::Reporter;
    use serde_json::json;

    fn run(reporter: &Reporter, label: &str, body: &serde_json::Value) -> String {
        let mut out = Vec::new();
        reporter.report(&mut out, label, body).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn missing_data_still_persists() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Persister::new(dir.path()));
        let text = run(&reporter, "1_health_check", &json!({"status": "healthy"}));
        assert!(text.contains("Page: N/A | Page Size: N/A"));
        assert!(text.contains("Records: 0 | Total: N/A"));
        assert!(text.contains("No data found"));
        assert!(dir.path().join("1_health_check.json").is_file());
        assert!(text.ends_with(&format!(
            "   💾 Saved to: {}\n",
            dir.path().join("1_health_check.json").display()
        )));
    }

    #[test]
    fn empty_data_prints_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Persister::new(dir.path()));
        let text = run(
            &reporter,
            "empty",
            &json!({"data": [], "count": 0, "page": 3, "page_size": 10, "total_count": 20}),
        );
        assert!(text.contains("Page: 3 | Page Size: 10"));
        assert!(text.contains("Records: 0 | Total: 20"));
        assert!(text.contains("No data found"));
    }

    #[test]
    fn five_records_show_three() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Persister::new(dir.path()));
        let data: Vec<_> = (1..=5).map(|i| json!({"loan_id": i})).collect();
        let text = run(&reporter, "loans", &json!({"data": data, "count": 5}));
        assert_eq!(text.matches("\"loan_id\"").count(), 3);
        assert!(text.contains("\"loan_id\": 3"));
        assert!(!text.contains("\"loan_id\": 4"));
        assert!(text.contains("... and 2 more records"));
        assert!(text.contains("Records: 5 | Total: N/A"));
    }

    #[test]
    fn records_separated_by_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Persister::new(dir.path()));
        let text = run(&reporter, "two", &json!({"data": [{"a": 1}, {"a": 2}]}));
        assert!(text.contains("{\n  \"a\": 1\n}\n\n{\n  \"a\": 2\n}\n   💾"));
        assert!(!text.contains("more records"));
    }

    #[test]
    fn custom_preview() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Persister::new(dir.path())).with_preview(1);
        let text = run(&reporter, "one", &json!({"data": [{"a": 1}, {"a": 2}]}));
        assert_eq!(text.matches("\"a\"").count(), 1);
        assert!(text.contains("... and 1 more records"));
    }

    #[test]
    fn frame_layout() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Persister::new(dir.path()));
        let text = run(&reporter, "label", &json!({}));
        let rule = "=".repeat(70);
        assert!(text.starts_with(&format!("\n{}\nlabel\n{}\n", rule, rule)));
        assert!(text.contains(&format!("{}\nNo data found\n", "-".repeat(70))));
    }
}
