//! Conversion driver
//!
//! Runs the load, extract, format and assemble pipeline for every configured
//! job in order, writes each JSON file and prints progress and a summary.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::{ConversionConfig, ConversionJob};
use crate::document::{DROPLET, extract_sections, load_paragraphs};
use crate::error::ConvertError;
use crate::export::{create_website_json, to_json};
use crate::web::format_sections;

/// Per-section statistics shown after a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub key: String,
    pub title: String,
    pub chars: usize,
    pub bullets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sections: Vec<SectionSummary>,
}

impl ConversionReport {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

/// Convert every configured document
///
/// The first job's input is checked before anything runs. Any later failure
/// stops the remaining jobs.
pub fn run(config: &ConversionConfig) -> Result<Vec<ConversionReport>, ConvertError> {
    let first = config.jobs.first().ok_or(ConvertError::NoJobs)?;
    if !first.input.exists() {
        return Err(ConvertError::MissingInput {
            path: first.input.clone(),
        });
    }

    let mut reports = Vec::with_capacity(config.jobs.len());
    for job in &config.jobs {
        println!("📄 Reading Word document {}...", job.input.display());
        let report = convert_file(job)?;
        print_summary(&report);
        reports.push(report);
    }

    Ok(reports)
}

/// Convert a single document and write its JSON output
pub fn convert_file(job: &ConversionJob) -> Result<ConversionReport, ConvertError> {
    info!(input = %job.input.display(), output = %job.output.display(), "converting");

    let paragraphs = load_paragraphs(&job.input)?;

    let sections = extract_sections(&paragraphs);
    println!(
        "📝 Found {} sections in {}",
        sections.len(),
        job.input.display()
    );

    let formatted = format_sections(&sections);
    println!("🔧 Formatted content for web display");

    let summaries: Vec<SectionSummary> = formatted
        .iter()
        .map(|(key, section)| SectionSummary {
            key: key.to_string(),
            title: section.title.clone(),
            chars: section.char_count(),
            bullets: section.bullet_count(),
        })
        .collect();

    let website = create_website_json(formatted);
    println!("📋 Created JSON structure");

    let json = to_json(&website)?;
    fs::write(&job.output, json).map_err(|source| ConvertError::Io {
        path: job.output.clone(),
        source,
    })?;
    println!("✅ Successfully converted to: {}", job.output.display());

    Ok(ConversionReport {
        input: job.input.clone(),
        output: job.output.clone(),
        sections: summaries,
    })
}

pub fn print_summary(report: &ConversionReport) {
    println!();
    println!("📊 Conversion Summary for {}:", report.input.display());
    println!("   • Total sections: {}", report.section_count());
    for section in &report.sections {
        println!(
            "   • {}: {} chars, {} bullets",
            section.title, section.chars, section.bullets
        );
    }

    println!();
    println!("💡 Usage Notes:");
    println!("   • Line breaks: <br><br> for paragraphs, <br> for bullets");
    println!("   • Bold text: <b>text</b> format");
    println!("   • Bullets: {DROPLET} emoji prefix");
    println!("   • Ready for copy-paste into your website JSON");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_jobs() {
        let config = ConversionConfig { jobs: Vec::new() };
        assert!(matches!(run(&config), Err(ConvertError::NoJobs)));
    }

    #[test]
    fn test_missing_first_input_stops_everything() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");
        let config = ConversionConfig::single(dir.path().join("missing.docx"), &output);

        let result = run(&config);

        assert!(matches!(result, Err(ConvertError::MissingInput { .. })));
        assert!(!output.exists());
    }

    fn write_sample(path: &std::path::Path) {
        let docx = docx_rs::Docx::new()
            .add_paragraph(
                docx_rs::Paragraph::new()
                    .add_run(docx_rs::Run::new().add_text("Intro"))
                    .style("Heading1"),
            )
            .add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("- one")),
            );
        let file = fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    #[test]
    fn test_convert_file_reports_sections() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.docx");
        write_sample(&input);

        let job = ConversionJob::new(&input, dir.path().join("sample.json"));
        let report = convert_file(&job).unwrap();

        assert_eq!(
            report.sections,
            vec![SectionSummary {
                key: "intro".to_string(),
                title: "Intro".to_string(),
                chars: 5,
                bullets: 1,
            }]
        );
        let json = fs::read_to_string(&job.output).unwrap();
        assert!(json.contains("\"text\": \"💧 one\""));
    }

    #[test]
    fn test_later_failure_stops_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.docx");
        write_sample(&input);

        let config = ConversionConfig {
            jobs: vec![
                ConversionJob::new(&input, dir.path().join("first.json")),
                ConversionJob::new(dir.path().join("absent.docx"), dir.path().join("second.json")),
            ],
        };

        assert!(matches!(run(&config), Err(ConvertError::Io { .. })));
        assert!(dir.path().join("first.json").exists());
        assert!(!dir.path().join("second.json").exists());
    }

    #[test]
    fn test_corrupt_document_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.docx");
        fs::write(&input, b"not a zip archive").unwrap();

        let job = ConversionJob::new(&input, dir.path().join("out.json"));
        assert!(matches!(
            convert_file(&job),
            Err(ConvertError::Read { .. })
        ));
    }
}
