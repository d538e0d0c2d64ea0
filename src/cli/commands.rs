//! Command implementations for the Mailtab CLI.

use std::time::Instant;

use anyhow::Context;
use tracing::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::read_corpus;
use crate::error::Result;
use crate::experiment::Experiment;

/// Execute a CLI command, naming the command in the error chain.
pub fn run(args: MailtabArgs) -> anyhow::Result<()> {
    let name = match &args.command {
        Command::Evaluate(_) => "evaluate",
        Command::Classify(_) => "classify",
    };
    execute_command(args).with_context(|| format!("{name} failed"))
}

/// Execute a CLI command.
pub fn execute_command(args: MailtabArgs) -> Result<()> {
    match &args.command {
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
        Command::Classify(classify_args) => classify(classify_args, &args),
    }
}

/// Train, then score the labeled test corpus.
fn evaluate(args: &EvaluateArgs, cli_args: &MailtabArgs) -> Result<()> {
    let start = Instant::now();
    let experiment = Experiment::new(args.resolve()?)?;
    let evaluation = experiment.run()?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "evaluation finished");

    output_evaluation(&evaluation, args.show_misclassified, cli_args)
}

/// Train, then label every document of the given corpus.
fn classify(args: &ClassifyArgs, cli_args: &MailtabArgs) -> Result<()> {
    let experiment = Experiment::new(args.experiment.resolve()?)?;
    let corpus = read_corpus(&args.corpus)?;
    let classifier = experiment.train_from_files()?;

    let results: Vec<ClassificationResult> = experiment
        .predict(&classifier, corpus)
        .iter()
        .map(|(id, prediction)| ClassificationResult::new(*id, prediction))
        .collect();

    output_classifications(&results, cli_args)
}
