//! Output formatting for CLI commands.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::Prediction;
use crate::cli::args::{MailtabArgs, OutputFormat};
use crate::error::Result;
use crate::evaluation::{Evaluation, EvaluationReport};
use crate::label::Label;

/// One classified document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub id: usize,
    pub label: Label,
    /// Scores indexed by label code.
    pub scores: [f64; Label::COUNT],
}

impl ClassificationResult {
    pub fn new(id: usize, prediction: &Prediction) -> Self {
        ClassificationResult {
            id,
            label: prediction.label,
            scores: prediction.scores,
        }
    }
}

/// Render the evaluation report the way it is printed to the console.
pub fn render_report(report: &EvaluationReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_report(&mut out, report).ok();
    out
}

fn write_report(out: &mut String, report: &EvaluationReport) -> fmt::Result {
    writeln!(
        out,
        "Out of {} tests {} were classified correctly",
        report.total, report.correct
    )?;
    match report.accuracy {
        Some(accuracy) => writeln!(out, "Correct: {accuracy}")?,
        None => writeln!(out, "Correct: undefined (no labeled test documents)")?,
    }
    if report.skipped > 0 {
        writeln!(out, "Skipped {} unlabeled documents", report.skipped)?;
    }
    writeln!(
        out,
        "Confusion matrix is below. Prediction in each column, actual for each row"
    )?;
    for i in 0..Label::COUNT {
        write!(out, "  {i}")?;
    }
    writeln!(out)?;
    for (i, row) in report.confusion_matrix.iter().enumerate() {
        writeln!(out, "{i}{row:?}")?;
    }
    writeln!(out, "Key: {}", Label::legend())
}

fn render_misclassified(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    write_misclassified(&mut out, evaluation).ok();
    out
}

fn write_misclassified(out: &mut String, evaluation: &Evaluation) -> fmt::Result {
    for m in &evaluation.misclassifications {
        write!(out, "doc {}: {} != {} [", m.id, m.truth, m.predicted)?;
        for (i, score) in m.scores.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write!(out, "{score:.4}")?;
        }
        writeln!(out, "]")?;
    }
    Ok(())
}

/// One `id<TAB>label<TAB>score` line per document, nothing else.
fn render_classifications(results: &[ClassificationResult]) -> String {
    let mut out = String::new();
    write_classifications(&mut out, results).ok();
    out
}

fn write_classifications(out: &mut String, results: &[ClassificationResult]) -> fmt::Result {
    for result in results {
        let best = result.scores[result.label.code()];
        writeln!(out, "{}\t{}\t{best:.4}", result.id, result.label)?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, args: &MailtabArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Output an evaluation in the selected format.
pub fn output_evaluation(
    evaluation: &Evaluation,
    show_misclassified: bool,
    args: &MailtabArgs,
) -> Result<()> {
    let report = evaluation.report();
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_report(&report));
            if show_misclassified || args.verbosity() > 1 {
                println!();
                print!("{}", render_misclassified(evaluation));
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&report, args),
    }
}

/// Output per-document classifications in the selected format.
pub fn output_classifications(results: &[ClassificationResult], args: &MailtabArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_classifications(results));
            info!(documents = results.len(), "classified corpus");
            Ok(())
        }
        OutputFormat::Json => print_json(&results, args),
    }
}
