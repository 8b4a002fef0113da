//! Output formatting and display logic for sitemap-probe

use std::io::{self, Write};

use crate::core::constants::{display, output_formats};
use crate::core::types::ValidationSummary;
use crate::discovery::UrlPair;
use crate::ui::color::{Colors, colorize, emphasize};

/// Announce how many URLs the sitemap tree resolved to
pub fn display_url_discovery(url_count: usize) {
    println!(
        "\nFound {} URLs to validate\n",
        colorize(&url_count.to_string(), Colors::BRIGHT_WHITE)
    );
}

/// Display the validation summary on stdout in the requested format
pub fn display_results(
    summary: &ValidationSummary,
    output_format: &str,
    expected_content_type: &str,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, summary, output_format, expected_content_type)?;
    out.flush()
}

pub fn write_results<W: Write>(
    out: &mut W,
    summary: &ValidationSummary,
    output_format: &str,
    expected_content_type: &str,
) -> io::Result<()> {
    match output_format {
        output_formats::JSON => write_json_report(out, summary),
        output_formats::MINIMAL => write_minimal_report(out, summary),
        _ => write_text_report(out, summary, expected_content_type),
    }
}

/// Summary block followed by an itemized listing of failures
pub fn write_text_report<W: Write>(
    out: &mut W,
    summary: &ValidationSummary,
    expected_content_type: &str,
) -> io::Result<()> {
    writeln!(out, "\n\n{}\n", emphasize("=== Validation Results ===", Colors::BRIGHT_CYAN))?;
    writeln!(out, "Total URLs: {}", summary.total)?;
    writeln!(
        out,
        "{} Successful ({expected_content_type}): {}",
        display::SUCCESS_EMOJI,
        colorize(&summary.successful.to_string(), Colors::BRIGHT_GREEN)
    )?;
    writeln!(
        out,
        "{} Failed: {}",
        display::ERROR_EMOJI,
        colorize(&summary.failed.to_string(), Colors::BRIGHT_RED)
    )?;

    if summary.has_failures() {
        writeln!(out, "\n{}\n", emphasize("=== Failed URLs ===", Colors::BRIGHT_RED))?;
        for failure in summary.failures() {
            writeln!(out, "URL: {}", failure.url)?;
            writeln!(
                out,
                "Content-Type: {}",
                failure
                    .content_type
                    .as_deref()
                    .filter(|ct| !ct.is_empty())
                    .unwrap_or(display::NOT_AVAILABLE)
            )?;
            if let Some(ref error) = failure.error {
                writeln!(out, "Error: {}", colorize(error, Colors::BRIGHT_YELLOW))?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}

/// One failing URL per line, with its content-type or error
pub fn write_minimal_report<W: Write>(out: &mut W, summary: &ValidationSummary) -> io::Result<()> {
    for failure in summary.failures() {
        let detail = failure
            .error
            .as_deref()
            .or(failure.content_type.as_deref())
            .unwrap_or(display::NOT_AVAILABLE);
        writeln!(out, "{} {}", failure.url, detail)?;
    }
    Ok(())
}

/// The full summary, results in resolution order
pub fn write_json_report<W: Write>(out: &mut W, summary: &ValidationSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}

/// Print the resolved URL sequence without validating it
pub fn write_url_list<W: Write>(out: &mut W, urls: &[String], output_format: &str) -> io::Result<()> {
    if output_format == output_formats::JSON {
        serde_json::to_writer_pretty(&mut *out, urls)?;
        return writeln!(out);
    }

    for url in urls {
        writeln!(out, "{url}")?;
    }
    Ok(())
}

/// Print pair records extracted from the resolved URL sequence
pub fn write_pairs<W: Write>(out: &mut W, pairs: &[UrlPair], output_format: &str) -> io::Result<()> {
    if output_format == output_formats::JSON {
        serde_json::to_writer_pretty(&mut *out, pairs)?;
        return writeln!(out);
    }

    for pair in pairs {
        writeln!(out, "{}\t{}\t{}", pair.url, pair.first, pair.second)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ValidationResult;

    fn sample_summary() -> ValidationSummary {
        ValidationSummary::from_results(vec![
            ValidationResult::from_response(
                "https://example.com/a.md".to_string(),
                true,
                Some("text/markdown".to_string()),
            ),
            ValidationResult::from_response(
                "https://example.com/b".to_string(),
                false,
                Some("text/html".to_string()),
            ),
            ValidationResult::from_error(
                "https://example.com/c".to_string(),
                "connection refused".to_string(),
            ),
        ])
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_report_with_failures() {
        let summary = sample_summary();
        let text = render(|out| write_text_report(out, &summary, "text/markdown"));

        assert!(text.contains("=== Validation Results ==="));
        assert!(text.contains("Total URLs: 3\n"));
        assert!(text.contains("✅ Successful (text/markdown): 1\n"));
        assert!(text.contains("❌ Failed: 2\n"));
        assert!(text.contains("=== Failed URLs ==="));
        assert!(text.contains("URL: https://example.com/b\nContent-Type: text/html\n\n"));
        assert!(text.contains(
            "URL: https://example.com/c\nContent-Type: N/A\nError: connection refused\n"
        ));
        assert!(!text.contains("URL: https://example.com/a.md"));
    }

    #[test]
    fn test_text_report_without_failures() {
        let summary = ValidationSummary::from_results(vec![ValidationResult::from_response(
            "https://example.com/a.md".to_string(),
            true,
            Some("text/markdown".to_string()),
        )]);
        let text = render(|out| write_text_report(out, &summary, "text/markdown"));

        assert!(text.contains("❌ Failed: 0\n"));
        assert!(!text.contains("=== Failed URLs ==="));
    }

    #[test]
    fn test_minimal_report() {
        let summary = sample_summary();
        let text = render(|out| write_minimal_report(out, &summary));

        assert_eq!(
            text,
            "https://example.com/b text/html\nhttps://example.com/c connection refused\n"
        );
    }

    #[test]
    fn test_json_report_round_trips_counts_and_order() {
        let summary = sample_summary();
        let text = render(|out| write_json_report(out, &summary));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["total"], 3);
        assert_eq!(json["successful"], 1);
        assert_eq!(json["failed"], 2);
        assert_eq!(json["results"][1]["url"], "https://example.com/b");
        assert_eq!(json["results"][2]["error"], "connection refused");
    }

    #[test]
    fn test_write_results_dispatches_on_format() {
        let summary = sample_summary();

        let minimal = render(|out| write_results(out, &summary, "minimal", "text/markdown"));
        assert!(minimal.starts_with("https://example.com/b"));

        let text = render(|out| write_results(out, &summary, "text", "text/markdown"));
        assert!(text.contains("Total URLs: 3"));
    }

    #[test]
    fn test_url_list_formats() {
        let urls = vec!["https://a.test/1".to_string(), "https://a.test/2".to_string()];

        let text = render(|out| write_url_list(out, &urls, "text"));
        assert_eq!(text, "https://a.test/1\nhttps://a.test/2\n");

        let json = render(|out| write_url_list(out, &urls, "json"));
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, urls);
    }

    #[test]
    fn test_pairs_formats() {
        let pairs = vec![UrlPair {
            url: "https://example.com/apps/slack/integrations/gmail".to_string(),
            first: "slack".to_string(),
            second: "gmail".to_string(),
        }];

        let text = render(|out| write_pairs(out, &pairs, "text"));
        assert_eq!(
            text,
            "https://example.com/apps/slack/integrations/gmail\tslack\tgmail\n"
        );

        let json = render(|out| write_pairs(out, &pairs, "json"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["first"], "slack");
        assert_eq!(parsed[0]["second"], "gmail");
    }
}
