use crate::domain::model::{EntryStatus, EnvEntry};
use crate::utils::error::{Result, ToolkitError};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_EXAMPLE: &str = ".env.example";

const PLACEHOLDER_MARKERS: [&str; 2] = ["your_", "changeme"];

impl EnvEntry {
    pub fn status(&self) -> EntryStatus {
        classify_value(&self.value)
    }
}

pub fn classify_value(value: &str) -> EntryStatus {
    let lowered = value.to_lowercase();
    if value.is_empty() || PLACEHOLDER_MARKERS.iter().any(|m| lowered.contains(m)) {
        EntryStatus::Placeholder
    } else {
        EntryStatus::Ok
    }
}

/// Extracts `KEY=VALUE` entries, skipping blank lines and `#` comments.
///
/// Only the first `=` separates key from value, so values may contain `=`.
/// A line without `=` becomes a key with an empty value. A leading UTF-8 BOM
/// is ignored.
pub fn parse_env_entries(content: &str) -> Vec<EnvEntry> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            EnvEntry {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct EnvReport {
    pub path: PathBuf,
    pub entries: Vec<EnvEntry>,
}

impl EnvReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.status() == EntryStatus::Placeholder)
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.is_empty() {
            writeln!(
                out,
                "⚠️ {} is empty or only contains comments.",
                self.file_name()
            )?;
            return Ok(());
        }

        writeln!(out, "🔎 Checking {} variables:", self.file_name())?;
        for entry in &self.entries {
            writeln!(out, "- {}: {}", entry.key, entry.status())?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "✅ Check finished. Make sure to keep real secrets in .env only."
        )?;
        Ok(())
    }
}

pub fn check_env_file<P: AsRef<Path>>(path: P) -> Result<EnvReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ToolkitError::EnvFileNotFound {
            path: path.display().to_string(),
        });
    }

    // invalid UTF-8 is replaced rather than rejected
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let entries = parse_env_entries(&content);
    tracing::debug!("Parsed {} entries from {}", entries.len(), path.display());

    Ok(EnvReport {
        path: path.to_path_buf(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> EnvEntry {
        EnvEntry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_example_file() {
        let entries = parse_env_entries("A=\n# comment\nB=your_key\nC=real_value\n\n");
        assert_eq!(
            entries,
            vec![entry("A", ""), entry("B", "your_key"), entry("C", "real_value")]
        );
        let statuses: Vec<EntryStatus> = entries.iter().map(EnvEntry::status).collect();
        assert_eq!(
            statuses,
            vec![EntryStatus::Placeholder, EntryStatus::Placeholder, EntryStatus::Ok]
        );
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let entries = parse_env_entries("DATABASE_URL = postgres://u:p@h/db?sslmode=require ");
        assert_eq!(
            entries,
            vec![entry("DATABASE_URL", "postgres://u:p@h/db?sslmode=require")]
        );
    }

    #[test]
    fn test_skips_indented_comments_and_whitespace_lines() {
        let entries = parse_env_entries("   # indented\n \t \r\nKEY=1\r\n");
        assert_eq!(entries, vec![entry("KEY", "1")]);
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let entries = parse_env_entries("\u{FEFF}# header comment\nA=real\n");
        assert_eq!(entries, vec![entry("A", "real")]);

        let entries = parse_env_entries("\u{FEFF}KEY=your_value");
        assert_eq!(entries, vec![entry("KEY", "your_value")]);
    }

    #[test]
    fn test_line_without_equals_is_empty_value() {
        let entries = parse_env_entries("JUST_A_KEY");
        assert_eq!(entries, vec![entry("JUST_A_KEY", "")]);
        assert_eq!(entries[0].status(), EntryStatus::Placeholder);
    }

    #[test]
    fn test_classify_value_markers_are_case_insensitive() {
        assert_eq!(classify_value(""), EntryStatus::Placeholder);
        assert_eq!(classify_value("YOUR_API_KEY"), EntryStatus::Placeholder);
        assert_eq!(classify_value("please-ChangeMe"), EntryStatus::Placeholder);
        assert_eq!(classify_value("sk_live_123"), EntryStatus::Ok);
        assert_eq!(classify_value("your-key"), EntryStatus::Ok);
    }

    #[test]
    fn test_render_lists_every_entry() {
        let report = EnvReport {
            path: PathBuf::from(".env.example"),
            entries: vec![entry("A", ""), entry("C", "real_value")],
        };
        let mut out = Vec::new();
        report.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("🔎 Checking .env.example variables:\n"));
        assert!(text.contains("- A: placeholder\n"));
        assert!(text.contains("- C: ok\n"));
        assert!(text.ends_with("keep real secrets in .env only.\n"));
    }

    #[test]
    fn test_render_empty_report_warns() {
        let report = EnvReport {
            path: PathBuf::from(".env.example"),
            entries: vec![],
        };
        let mut out = Vec::new();
        report.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "⚠️ .env.example is empty or only contains comments.\n"
        );
    }
}
