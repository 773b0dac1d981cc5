// Scene configuration: vocabulary, geometry, and probability sources.
//
// All inputs to a choreography run live in `SceneConfig`, loaded once before
// the run and immutable thereafter. The probability tables the original
// teaching material hard-codes are available as the `classroom()` preset;
// `classroom_drawn()` keeps the same vocabulary but redraws every document's
// distributions from uniform Dirichlet priors.
//
// Validation is fail-fast: `validate()` runs before any event is produced,
// so a malformed config never yields a partial stream. Probability vectors
// must sum to 1 within `SUM_TOLERANCE` (1e-6 absolute) with non-negative
// entries; Drawn-mode concentrations must be strictly positive.
//
// Static tables are keyed by document index in a `BTreeMap` — deterministic
// iteration order, no hashing.
//
// See also: `model.rs` which consumes the `DistributionSource`,
// `choreography.rs` which owns the validated config for the run.

use crate::error::{Result, SceneError};
use crate::types::SUM_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One topic's display label and ordered word identifiers.
///
/// Word identifiers are abstract asset names (`banana`, `zebra`); resolving
/// them to icon files is the rendering engine's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicVocab {
    pub label: String,
    pub words: Vec<String>,
}

/// Ordered list of topics, each with its private vocabulary slice.
///
/// Slices need not be equal in size; the address map handles ragged
/// vocabularies via prefix-sum offsets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub topics: Vec<TopicVocab>,
}

impl Vocabulary {
    /// Number of topics (K).
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Vocabulary slice size per topic, in topic order.
    pub fn slice_sizes(&self) -> Vec<usize> {
        self.topics.iter().map(|t| t.words.len()).collect()
    }
}

/// Pre-registered probability tables for one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentTables {
    /// Topic-mixture vector, one entry per topic.
    pub mixture: Vec<f64>,
    /// Word distribution per topic, each over that topic's vocabulary slice.
    pub word_distributions: Vec<Vec<f64>>,
}

/// Where per-document distributions come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DistributionSource {
    /// Explicit tables keyed by document index. Every document in
    /// `[0, documents)` must have an entry.
    Static {
        documents: BTreeMap<usize, DocumentTables>,
    },
    /// Dirichlet priors: fresh, independent draws per document.
    Drawn {
        /// Concentration vector for the topic mixture (one entry per topic).
        mixture_alpha: Vec<f64>,
        /// Concentration vector per topic for that topic's word
        /// distribution.
        word_alpha: Vec<Vec<f64>>,
    },
}

/// Complete input configuration for one choreography run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub vocabulary: Vocabulary,
    /// Number of documents to generate.
    pub documents: usize,
    /// Word slots per document.
    pub slots_per_document: usize,
    pub source: DistributionSource,
}

impl SceneConfig {
    /// The classroom scene from the original teaching material: 2 topics
    /// (food, animals), 5 words each, 3 documents of 6 slots with explicit
    /// per-document tables.
    pub fn classroom() -> Self {
        let mut documents = BTreeMap::new();
        documents.insert(
            0,
            DocumentTables {
                mixture: vec![0.4, 0.6],
                word_distributions: vec![
                    vec![0.2, 0.1, 0.3, 0.15, 0.25],
                    vec![0.1, 0.15, 0.3, 0.25, 0.2],
                ],
            },
        );
        documents.insert(
            1,
            DocumentTables {
                mixture: vec![0.3, 0.7],
                word_distributions: vec![
                    vec![0.15, 0.05, 0.35, 0.25, 0.2],
                    vec![0.1, 0.25, 0.1, 0.3, 0.25],
                ],
            },
        );
        documents.insert(
            2,
            DocumentTables {
                mixture: vec![0.6, 0.4],
                word_distributions: vec![
                    vec![0.1, 0.15, 0.3, 0.25, 0.2],
                    vec![0.2, 0.1, 0.3, 0.15, 0.25],
                ],
            },
        );

        SceneConfig {
            vocabulary: classroom_vocabulary(),
            documents: 3,
            slots_per_document: 6,
            source: DistributionSource::Static { documents },
        }
    }

    /// The classroom vocabulary and geometry, but with every document's
    /// mixture and word distributions drawn fresh from uniform Dirichlet
    /// priors (concentration 1.0 everywhere).
    pub fn classroom_drawn() -> Self {
        let vocabulary = classroom_vocabulary();
        let word_alpha = vocabulary
            .slice_sizes()
            .iter()
            .map(|&n| vec![1.0; n])
            .collect();
        SceneConfig {
            documents: 3,
            slots_per_document: 6,
            source: DistributionSource::Drawn {
                mixture_alpha: vec![1.0; vocabulary.topic_count()],
                word_alpha,
            },
            vocabulary,
        }
    }

    /// Parse a config from JSON. Validation is separate — call `validate()`
    /// before handing the config to the engine.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Fail-fast structural and simplex checks. Runs before any event is
    /// produced; a config that passes never raises `Config` later in the
    /// run.
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.topics.is_empty() {
            return Err(SceneError::Config("vocabulary has no topics".into()));
        }
        for (t, topic) in self.vocabulary.topics.iter().enumerate() {
            if topic.words.is_empty() {
                return Err(SceneError::Config(format!(
                    "topic {t} ({}) has an empty vocabulary slice",
                    topic.label
                )));
            }
        }
        if self.documents == 0 {
            return Err(SceneError::Config("document count is zero".into()));
        }
        if self.slots_per_document == 0 {
            return Err(SceneError::Config("slots per document is zero".into()));
        }

        let k = self.vocabulary.topic_count();
        let sizes = self.vocabulary.slice_sizes();

        match &self.source {
            DistributionSource::Static { documents } => {
                for d in 0..self.documents {
                    let tables = documents.get(&d).ok_or_else(|| {
                        SceneError::Config(format!("document {d} has no registered tables"))
                    })?;
                    check_length(&format!("document {d} mixture"), tables.mixture.len(), k)?;
                    check_simplex(&format!("document {d} mixture"), &tables.mixture)?;
                    check_length(
                        &format!("document {d} word distributions"),
                        tables.word_distributions.len(),
                        k,
                    )?;
                    for (t, dist) in tables.word_distributions.iter().enumerate() {
                        check_length(
                            &format!("document {d} topic {t} word distribution"),
                            dist.len(),
                            sizes[t],
                        )?;
                        check_simplex(&format!("document {d} topic {t} word distribution"), dist)?;
                    }
                }
            }
            DistributionSource::Drawn {
                mixture_alpha,
                word_alpha,
            } => {
                check_length("mixture concentration", mixture_alpha.len(), k)?;
                check_concentration("mixture concentration", mixture_alpha)?;
                check_length("word concentrations", word_alpha.len(), k)?;
                for (t, alpha) in word_alpha.iter().enumerate() {
                    check_length(&format!("topic {t} word concentration"), alpha.len(), sizes[t])?;
                    check_concentration(&format!("topic {t} word concentration"), alpha)?;
                }
            }
        }
        Ok(())
    }
}

fn classroom_vocabulary() -> Vocabulary {
    Vocabulary {
        topics: vec![
            TopicVocab {
                label: "food".into(),
                words: ["banana", "kiwi", "lemon", "strawberry", "tomato"]
                    .map(String::from)
                    .to_vec(),
            },
            TopicVocab {
                label: "animals".into(),
                words: ["chicken", "piggy", "sheep", "crocodile", "zebra"]
                    .map(String::from)
                    .to_vec(),
            },
        ],
    }
}

fn check_length(what: &str, got: usize, want: usize) -> Result<()> {
    if got != want {
        return Err(SceneError::Config(format!(
            "{what} has {got} entries, expected {want}"
        )));
    }
    Ok(())
}

/// A probability vector: non-negative entries summing to 1 ± tolerance.
fn check_simplex(what: &str, values: &[f64]) -> Result<()> {
    if let Some(v) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(SceneError::Config(format!(
            "{what} contains invalid entry {v}"
        )));
    }
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(SceneError::Config(format!(
            "{what} sums to {sum}, expected 1 within {SUM_TOLERANCE}"
        )));
    }
    Ok(())
}

/// Dirichlet concentrations must be finite and strictly positive.
fn check_concentration(what: &str, values: &[f64]) -> Result<()> {
    if let Some(v) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(SceneError::Config(format!(
            "{what} contains non-positive entry {v}"
        )));
    }
    Ok(())
}
