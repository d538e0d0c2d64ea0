//! Command line argument parsing for the Mailtab CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::experiment::ExperimentConfig;
use crate::similarity::SimilarityMetric;
use crate::vectorize::VectorizerKind;

/// Mailtab - sort email into inbox categories by nearest centroid
#[derive(Parser, Debug, Clone)]
#[command(name = "mailtab")]
#[command(about = "Classify email into forums, personal, promotions, social and updates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MailtabArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MailtabArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on the training corpora and report accuracy on the test corpus
    Evaluate(EvaluateArgs),

    /// Train on the training corpora and label every document of a corpus
    Classify(ClassifyArgs),
}

/// Options shared by every command that builds profiles.
///
/// Values given here override the configuration file, which in turn
/// overrides the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ExperimentOptions {
    /// Experiment configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Training corpus file; repeat for several files
    #[arg(short, long = "training", value_name = "CORPUS")]
    pub training: Vec<PathBuf>,

    /// Stop word file (one word per line)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Stem body tokens
    #[arg(long)]
    pub stem: bool,

    /// Remove stop words from body tokens
    #[arg(long)]
    pub remove_stopwords: bool,

    /// Vectorizer: weighted or term_frequency
    #[arg(long, value_parser = parse_vectorizer)]
    pub vectorizer: Option<VectorizerKind>,

    /// Similarity metric: cosine, dice, jaccard or overlap
    #[arg(short, long, value_parser = parse_metric)]
    pub metric: Option<SimilarityMetric>,

    /// Vectorize documents in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl ExperimentOptions {
    /// Resolve the effective experiment configuration.
    pub fn resolve(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::from_file(path)?,
            None => ExperimentConfig::default(),
        };

        if !self.training.is_empty() {
            config.training = self.training.clone();
        }
        if let Some(stopwords) = &self.stopwords {
            config.stopwords = Some(stopwords.clone());
        }
        config.stem |= self.stem;
        config.remove_stopwords |= self.remove_stopwords;
        config.parallel |= self.parallel;
        if let Some(vectorizer) = self.vectorizer {
            config.vectorizer = vectorizer;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }

        Ok(config)
    }
}

/// Arguments for evaluating against a labeled test set
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub experiment: ExperimentOptions,

    /// Labeled test corpus
    #[arg(long, value_name = "CORPUS")]
    pub test: Option<PathBuf>,

    /// List misclassified documents with their scores
    #[arg(long)]
    pub show_misclassified: bool,
}

impl EvaluateArgs {
    pub fn resolve(&self) -> Result<ExperimentConfig> {
        let mut config = self.experiment.resolve()?;
        if let Some(test) = &self.test {
            config.test = test.clone();
        }
        Ok(config)
    }
}

/// Arguments for labeling a corpus
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub experiment: ExperimentOptions,

    /// Corpus to classify; labels in it are ignored
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_metric(s: &str) -> std::result::Result<SimilarityMetric, String> {
    SimilarityMetric::parse_str(s).map_err(|e| e.to_string())
}

fn parse_vectorizer(s: &str) -> std::result::Result<VectorizerKind, String> {
    VectorizerKind::parse_str(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_command() {
        let args = MailtabArgs::try_parse_from([
            "mailtab",
            "evaluate",
            "--training",
            "a.txt",
            "--training",
            "b.txt",
            "--test",
            "t.txt",
            "--stem",
            "--metric",
            "dice",
        ])
        .unwrap();

        if let Command::Evaluate(evaluate_args) = args.command {
            let config = evaluate_args.resolve().unwrap();
            assert_eq!(config.training, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
            assert_eq!(config.test, PathBuf::from("t.txt"));
            assert!(config.stem);
            assert!(!config.remove_stopwords);
            assert_eq!(config.metric, SimilarityMetric::Dice);
            assert_eq!(config.vectorizer, VectorizerKind::Weighted);
        } else {
            panic!("Expected Evaluate command");
        }
    }

    #[test]
    fn test_classify_command() {
        let args = MailtabArgs::try_parse_from([
            "mailtab",
            "classify",
            "inbox.txt",
            "--vectorizer",
            "tf",
        ])
        .unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.corpus, PathBuf::from("inbox.txt"));
            assert_eq!(
                classify_args.experiment.vectorizer,
                Some(VectorizerKind::TermFrequency)
            );
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let result = MailtabArgs::try_parse_from(["mailtab", "evaluate", "--metric", "euclid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = MailtabArgs::try_parse_from(["mailtab", "evaluate"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = MailtabArgs::try_parse_from(["mailtab", "-vv", "evaluate"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = MailtabArgs::try_parse_from(["mailtab", "--quiet", "evaluate"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            MailtabArgs::try_parse_from(["mailtab", "--format", "json", "evaluate"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
