//! Rendering of the reduced transcript.

use pr_phonetics::Text;
use pr_reducer::{ReductionReport, Substitution};
use serde::Serialize;

use crate::args::OutputFormat;

#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub replaced: String,
    pub replacement: String,
    pub distance: u32,
    pub replaced_count: usize,
    pub replacement_count: usize,
}

impl From<&Substitution> for StepRecord {
    fn from(s: &Substitution) -> Self {
        Self {
            replaced: s.replaced.to_string(),
            replacement: s.replacement.to_string(),
            distance: s.distance,
            replaced_count: s.replaced_count,
            replacement_count: s.replacement_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub text: String,
    pub target: usize,
    pub initial_distinct: usize,
    pub final_distinct: usize,
    pub steps: Vec<StepRecord>,
}

impl JsonReport {
    pub fn new(text: &Text, report: &ReductionReport) -> Self {
        Self {
            text: text.to_string(),
            target: report.target,
            initial_distinct: report.initial_distinct,
            final_distinct: report.final_distinct,
            steps: report.steps.iter().map(StepRecord::from).collect(),
        }
    }
}

pub fn render(format: OutputFormat, text: &Text, report: &ReductionReport) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{text}\n{}", report.target)),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonReport::new(text, report)),
    }
}
