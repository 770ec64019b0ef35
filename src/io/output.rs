use std::fs::File;
use std::io::Write;
use std::path::Path;

use colored::*;

use crate::core::{AssessmentReport, ScoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Persists the results of one invocation. Writing happens only after
/// aggregation has succeeded, so a sink never sees a partial report.
pub trait ResultSink {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultSink for JsonWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultSink for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_assessment(report)?;
        self.write_resources(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Resiliency Assessment Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Assessment")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(
            self.writer,
            "| Assessment | {} |",
            report.assessment.assessment_id
        )?;
        writeln!(self.writer, "| Workflow | {} |", report.scope.workflow_id)?;
        writeln!(self.writer, "| Area | {} |", report.assessment.area_id)?;
        writeln!(
            self.writer,
            "| Service type | {} |",
            report.assessment.service_type_id
        )?;
        writeln!(
            self.writer,
            "| Resource type | {} |",
            report.assessment.resource_type_id
        )?;
        writeln!(
            self.writer,
            "| Resources scored | {} |",
            report.resources.len()
        )?;
        writeln!(
            self.writer,
            "| Average score | {} |",
            report.assessment.average_percentage
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_resources(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        if report.resources.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Resources")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Resource | Raw score | Score | Notes |")?;
        writeln!(self.writer, "|----------|-----------|-------|-------|")?;
        for result in &report.resources {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                result.resource_id,
                result.raw_score,
                result.score_percentage,
                resource_notes(result)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn resource_notes(result: &ScoreResult) -> String {
    if result.unmapped_criteria.is_empty() {
        "-".to_string()
    } else {
        format!("unmapped: {}", result.unmapped_criteria.join(", "))
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for TerminalWriter {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        print_header(report);
        print_assessment(report);
        print_resources(report);
        Ok(())
    }
}

fn print_header(report: &AssessmentReport) {
    println!("{}", "Resiliency Assessment Report".bold().blue());
    println!("{}", "============================".blue());
    println!(
        "Generated: {}",
        report.generated.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

fn print_assessment(report: &AssessmentReport) {
    println!("Summary:");
    println!("  Assessment: {}", report.assessment.assessment_id);
    println!("  Workflow: {}", report.scope.workflow_id);
    println!(
        "  Scope: {} / {} / {}",
        report.assessment.area_id,
        report.assessment.service_type_id,
        report.assessment.resource_type_id
    );
    println!("  Resources scored: {}", report.resources.len());
    println!(
        "  Average score: {}",
        percentage_display(report.assessment.average_percentage.value())
    );
    println!();
}

fn print_resources(report: &AssessmentReport) {
    if report.resources.is_empty() {
        return;
    }

    println!("Resources:");
    for result in &report.resources {
        println!(
            "  {} - raw {}, score {}",
            result.resource_id,
            result.raw_score,
            percentage_display(result.score_percentage.value())
        );
        if !result.unmapped_criteria.is_empty() {
            println!(
                "    {} unmapped: {}",
                "!".yellow(),
                result.unmapped_criteria.join(", ")
            );
        }
    }
    println!();
}

fn percentage_display(value: f64) -> ColoredString {
    let text = format!("{value:.4}");
    match value {
        v if v >= 0.8 => text.green(),
        v if v >= 0.5 => text.yellow(),
        _ => text.red(),
    }
}

/// Select a sink for the requested format and destination.
///
/// The terminal writer always prints to stdout; the JSON and Markdown
/// writers target the output file when one is given.
pub fn create_sink(format: OutputFormat, output: Option<&Path>) -> anyhow::Result<Box<dyn ResultSink>> {
    match (format, output) {
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
        (OutputFormat::Terminal, output) => {
            if output.is_some() {
                log::warn!("terminal format always writes to stdout; ignoring output path");
            }
            Ok(Box::new(TerminalWriter::new()))
        }
    }
}
