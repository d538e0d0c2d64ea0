//! End-to-end experiment: load corpora, normalize, vectorize, train, evaluate.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{Normalizer, PorterStemmer, Stemmer, StopWords};
use crate::classify::{CentroidClassifier, Prediction, ProfileSet};
use crate::corpus::{Corpus, read_corpora, read_corpus};
use crate::document::Document;
use crate::error::{MailtabError, Result};
use crate::evaluation::{Evaluation, evaluate};
use crate::label::Label;
use crate::similarity::SimilarityMetric;
use crate::vectorize::{Vectorizer, VectorizerKind, WeightingConfig, vectorize_all};

/// Configuration for a single experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Labeled training corpora.
    pub training: Vec<PathBuf>,
    /// Labeled test corpus.
    pub test: PathBuf,
    /// Line-per-word stop word file. The built-in English list is used when unset.
    pub stopwords: Option<PathBuf>,
    /// Stem body tokens.
    pub stem: bool,
    /// Remove stop words from body tokens. Applied before stemming.
    pub remove_stopwords: bool,
    pub vectorizer: VectorizerKind,
    pub metric: SimilarityMetric,
    pub weighting: WeightingConfig,
    /// Vectorize documents on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            training: Label::ALL
                .iter()
                .map(|label| PathBuf::from(format!("training/{}.txt", label.name())))
                .collect(),
            test: PathBuf::from("test/test_set.txt"),
            stopwords: Some(PathBuf::from("common_words")),
            stem: false,
            remove_stopwords: false,
            vectorizer: VectorizerKind::default(),
            metric: SimilarityMetric::default(),
            weighting: WeightingConfig::default(),
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MailtabError::missing(path));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// A configured pipeline. Resources are loaded once and read-only afterwards.
pub struct Experiment {
    config: ExperimentConfig,
    normalizer: Normalizer,
    vectorizer: Box<dyn Vectorizer>,
}

impl std::fmt::Debug for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Experiment")
            .field("config", &self.config)
            .field("normalizer", &self.normalizer)
            .field("vectorizer", &self.vectorizer.name())
            .finish()
    }
}

impl Experiment {
    /// Create an experiment using the Porter stemmer.
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        Self::with_stemmer(config, Arc::new(PorterStemmer::new()))
    }

    /// Create an experiment with a custom stemmer.
    ///
    /// The stop word file is read here when stop word removal is enabled.
    pub fn with_stemmer(config: ExperimentConfig, stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        let mut normalizer = Normalizer::new();
        if config.remove_stopwords {
            let stop_words = match &config.stopwords {
                Some(path) => StopWords::from_file(path)?,
                None => StopWords::english(),
            };
            normalizer = normalizer.with_stop_words(Arc::new(stop_words));
        }
        if config.stem {
            normalizer = normalizer.with_stemmer(stemmer);
        }

        let vectorizer = config.vectorizer.build(&config.weighting);
        debug!(?normalizer, vectorizer = vectorizer.name(), metric = ?config.metric, "configured experiment");

        Ok(Experiment {
            config,
            normalizer,
            vectorizer,
        })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Normalize and vectorize documents.
    pub fn prepare(&self, docs: Vec<Document>) -> Vec<Document> {
        let docs = if self.normalizer.is_noop() {
            docs
        } else {
            self.normalizer.normalize_all(&docs)
        };
        vectorize_all(self.vectorizer.as_ref(), docs, self.config.parallel)
    }

    /// Build profiles from training documents.
    pub fn train(&self, docs: Vec<Document>) -> Result<CentroidClassifier> {
        let docs = self.prepare(docs);
        let profiles = ProfileSet::build(&docs)?;
        info!(
            documents = docs.len(),
            features = profiles.iter().map(|(_, p)| p.len()).sum::<usize>(),
            "built profiles"
        );
        Ok(CentroidClassifier::new(profiles).with_metric(self.config.metric))
    }

    /// Train on `training` and evaluate against `test`.
    pub fn run_with(&self, training: Vec<Document>, test: Vec<Document>) -> Result<Evaluation> {
        let classifier = self.train(training)?;
        let test = self.prepare(test);
        let evaluation = evaluate(&classifier, &test);
        info!(
            total = evaluation.total(),
            correct = evaluation.correct(),
            accuracy = evaluation.accuracy().unwrap_or(0.0),
            "evaluated test set"
        );
        Ok(evaluation)
    }

    /// Train a classifier from the configured training files.
    pub fn train_from_files(&self) -> Result<CentroidClassifier> {
        let training = self.load_training()?;
        self.train(training)
    }

    /// Run the configured experiment end to end.
    pub fn run(&self) -> Result<Evaluation> {
        let start = Instant::now();
        let training = self.load_training()?;
        let test = read_corpus(&self.config.test)?.into_documents();
        let evaluation = self.run_with(training, test)?;
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "experiment finished");
        Ok(evaluation)
    }

    /// Classify every document of a corpus, labeled or not.
    pub fn predict(&self, classifier: &CentroidClassifier, corpus: Corpus) -> Vec<(usize, Prediction)> {
        self.prepare(corpus.into_documents())
            .iter()
            .map(|doc| (doc.id, classifier.predict(&doc.vector)))
            .collect()
    }

    fn load_training(&self) -> Result<Vec<Document>> {
        if self.config.training.is_empty() {
            return Err(MailtabError::configuration("no training corpora configured"));
        }
        Ok(read_corpora(&self.config.training)?
            .into_iter()
            .flat_map(Corpus::into_documents)
            .collect())
    }
}
