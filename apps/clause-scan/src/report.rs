//! Plain-text rendering of an analysis for the terminal

use std::fmt::Write;

use chrono::{DateTime, Utc};
use shared_types::{AnalysisResult, AnalysisSource, Severity};

/// Characters of red-flag context shown before eliding
pub const CONTEXT_PREVIEW: usize = 100;

pub fn render(result: &AnalysisResult, label: &str, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, result, label, generated_at);
    out
}

fn write_report(
    out: &mut String,
    result: &AnalysisResult,
    label: &str,
    generated_at: DateTime<Utc>,
) -> std::fmt::Result {
    writeln!(out, "Document Analysis: {}", label)?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out, "Type: {}", result.document_type)?;
    writeln!(out, "Source: {}", source_indicator(result.source))?;
    writeln!(out)?;

    writeln!(
        out,
        "Rating: {:.1}/10 - {} ({})",
        result.rating.score, result.rating.description, result.rating.color_tag
    )?;

    heading(out, "Summary")?;
    if result.summary.is_empty() {
        writeln!(out, "  No sections found")?;
    }
    for section in &result.summary {
        writeln!(out, "  Section {}: {}", section.number, section.content)?;
    }

    heading(out, "Key Points")?;
    if result.key_points.is_empty() {
        writeln!(out, "  No key points found")?;
    }
    for point in &result.key_points {
        writeln!(out, "  - {}", point)?;
    }

    heading(out, "Red Flags")?;
    if result.red_flags.is_empty() {
        writeln!(out, "  No red flags found")?;
    }
    for flag in &result.red_flags {
        writeln!(out, "  [{}] {}", severity_tag(flag.severity), flag.term)?;
        if !flag.description.is_empty() {
            writeln!(out, "      {}", flag.description)?;
        }
        if !flag.suggestion.is_empty() {
            writeln!(out, "      Suggestion: {}", flag.suggestion)?;
        }
        if !flag.context.is_empty() {
            writeln!(out, "      Context: \"{}\"", preview(&flag.context, CONTEXT_PREVIEW))?;
        }
    }

    heading(out, "Consent Checklist")?;
    for item in &result.consent_checklist {
        let marker = if item.is_red_flag { "!" } else { " " };
        writeln!(out, "  [ ]{} {}", marker, item.text)?;
    }

    Ok(())
}

fn heading(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

pub fn source_indicator(source: AnalysisSource) -> &'static str {
    match source {
        AnalysisSource::Local => "Local analysis",
        AnalysisSource::Remote => "Remote analysis",
    }
}

fn severity_tag(severity: Severity) -> String {
    severity.as_str().to_ascii_uppercase()
}

/// First `max` characters, with an ellipsis when anything was cut
pub fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use shared_types::{ConsentItem, ContractRating, DocumentType, RedFlag, Section};

    fn sample() -> AnalysisResult {
        let mut flag = RedFlag::new("penalty", "x".repeat(150), Severity::High);
        flag.description = "A charge for breaking the contract".to_string();
        flag.suggestion = "Ask for the penalty to be capped".to_string();

        AnalysisResult {
            summary: vec![Section {
                number: 1,
                content: "Rent is due monthly.".to_string(),
            }],
            key_points: vec!["Rent amount: $1000".to_string()],
            red_flags: vec![flag],
            consent_checklist: vec![
                ConsentItem::red_flag("I acknowledge the penalty terms", Severity::High, "ctx"),
                ConsentItem::key_point("I understand: Rent amount: $1000"),
            ],
            document_type: DocumentType::Lease,
            rating: ContractRating {
                score: 6.5,
                description: "Fair".to_string(),
                color_tag: "#ffa502".to_string(),
            },
            source: AnalysisSource::Local,
        }
    }

    #[test]
    fn test_render_sections() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let text = render(&sample(), "lease.txt", at);

        assert!(text.starts_with("Document Analysis: lease.txt\n"));
        assert!(text.contains("Generated: 2024-03-01 12:30 UTC"));
        assert!(text.contains("Type: lease"));
        assert!(text.contains("Source: Local analysis"));
        assert!(text.contains("Rating: 6.5/10 - Fair (#ffa502)"));
        assert!(text.contains("  Section 1: Rent is due monthly."));
        assert!(text.contains("  - Rent amount: $1000"));
        assert!(text.contains("  [HIGH] penalty"));
        assert!(text.contains("Suggestion: Ask for the penalty to be capped"));
        assert!(text.contains("  [ ]! I acknowledge the penalty terms"));
        assert!(text.contains("  [ ]  I understand: Rent amount: $1000"));
    }

    #[test]
    fn test_context_is_previewed() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let text = render(&sample(), "lease.txt", at);
        let expected = format!("Context: \"{}...\"", "x".repeat(CONTEXT_PREVIEW));
        assert!(text.contains(&expected));
    }

    #[test]
    fn test_empty_lists() {
        let mut result = sample();
        result.summary.clear();
        result.key_points.clear();
        result.red_flags.clear();
        result.source = AnalysisSource::Remote;

        let text = render(&result, "doc", Utc::now());
        assert!(text.contains("No sections found"));
        assert!(text.contains("No key points found"));
        assert!(text.contains("No red flags found"));
        assert!(text.contains("Source: Remote analysis"));
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("héllo", 2), "hé...");
    }
}
