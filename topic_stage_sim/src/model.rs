// Per-document probability sources.
//
// `ProbabilityModel` answers two questions for the choreography engine:
// what is document `d`'s topic mixture, and what is topic `t`'s word
// distribution for document `d`. The Static variant reads pre-registered
// tables; the Drawn variant samples fresh vectors from Dirichlet priors on
// every call, so redrawn documents are statistically independent — there is
// deliberately no cross-call memoization.
//
// Both variants take `&mut SceneRng` (Static ignores it), keeping the call
// shape uniform and the randomness source explicit.
//
// See also: `config.rs` for the validated `DistributionSource` this is
// built from, `dirichlet.rs` for the Drawn-mode draws.

use crate::config::{DistributionSource, DocumentTables, SceneConfig};
use crate::dirichlet;
use crate::error::{Result, SceneError};
use crate::types::ProbVec;
use std::collections::BTreeMap;
use topic_stage_prng::SceneRng;
use tracing::debug;

/// Supplies topic mixtures and word distributions per document.
#[derive(Clone, Debug)]
pub enum ProbabilityModel {
    /// Pre-registered tables keyed by document index.
    Static {
        tables: BTreeMap<usize, DocumentTables>,
    },
    /// Fresh Dirichlet draws per call.
    Drawn {
        mixture_alpha: Vec<f64>,
        word_alpha: Vec<Vec<f64>>,
    },
}

impl ProbabilityModel {
    /// Build the model from a validated config. The config's tables are
    /// cloned once here; the model is immutable for the rest of the run.
    pub fn from_config(config: &SceneConfig) -> Self {
        match &config.source {
            DistributionSource::Static { documents } => ProbabilityModel::Static {
                tables: documents.clone(),
            },
            DistributionSource::Drawn {
                mixture_alpha,
                word_alpha,
            } => ProbabilityModel::Drawn {
                mixture_alpha: mixture_alpha.clone(),
                word_alpha: word_alpha.clone(),
            },
        }
    }

    /// The topic-mixture vector for one document.
    pub fn topic_mixture(&self, document: usize, rng: &mut SceneRng) -> Result<ProbVec> {
        match self {
            ProbabilityModel::Static { tables } => {
                let tables = tables.get(&document).ok_or_else(|| {
                    SceneError::Config(format!("document {document} has no registered tables"))
                })?;
                Ok(ProbVec::from_slice(&tables.mixture))
            }
            ProbabilityModel::Drawn { mixture_alpha, .. } => {
                let mixture = dirichlet::draw(mixture_alpha, rng)?;
                debug!(document, ?mixture, "drew topic mixture");
                Ok(mixture)
            }
        }
    }

    /// The word distribution for one topic of one document.
    pub fn word_distribution(
        &self,
        document: usize,
        topic: usize,
        rng: &mut SceneRng,
    ) -> Result<ProbVec> {
        match self {
            ProbabilityModel::Static { tables } => {
                let tables = tables.get(&document).ok_or_else(|| {
                    SceneError::Config(format!("document {document} has no registered tables"))
                })?;
                let dist = tables.word_distributions.get(topic).ok_or_else(|| {
                    SceneError::Config(format!(
                        "document {document} has no word distribution for topic {topic}"
                    ))
                })?;
                Ok(ProbVec::from_slice(dist))
            }
            ProbabilityModel::Drawn { word_alpha, .. } => {
                let alpha = word_alpha.get(topic).ok_or_else(|| {
                    SceneError::Config(format!("no word concentration for topic {topic}"))
                })?;
                let dist = dirichlet::draw(alpha, rng)?;
                debug!(document, topic, ?dist, "drew word distribution");
                Ok(dist)
            }
        }
    }
}
