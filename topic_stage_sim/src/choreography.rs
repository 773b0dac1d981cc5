// The choreography engine: document × slot state machine over the sampling
// process, emitting the ordered event stream the renderer consumes.
//
// The engine is strictly single-threaded and pull-based. Each `next_event`
// call hands out exactly one event; sampling for a slot happens only when
// that slot's first event is requested, so no event is produced before its
// predecessor has been consumed. Runs restart from scratch — there is no
// mid-stream resume, and stopping consumption early needs no cleanup.
//
// Emission order per document:
//   HistogramUpdate(Topics), HistogramUpdate(Words),
//   RowAdvance (documents after the first only),
// then per slot:
//   MarkerMove(Topics), SymbolShow(TopicMarker),
//   MarkerMove(Words), SymbolShow(WordIcon), SymbolHide.
//
// Histogram updates are emitted at every document begin even when the
// values repeat (Static mode with identical tables) — duplicates keep the
// stream shape deterministic. After the final slot of the final document
// the engine is `Done` and further requests fail with `SequenceExhausted`.
//
// Any error from the model, sampler, or address map aborts the run; these
// are configuration or programming defects and nothing is retried.
//
// See also: `model.rs` (distributions are fetched once per document),
// `sampler.rs` (topic and word draws), `address.rs` (bar/row/column
// coordinates), `event.rs` (the emitted records).

use crate::address::AddressMap;
use crate::config::{SceneConfig, Vocabulary};
use crate::error::{Result, SceneError};
use crate::event::{SceneEvent, SymbolKind};
use crate::model::ProbabilityModel;
use crate::sampler;
use crate::types::{HistogramTarget, ProbVec, Sample};
use std::collections::VecDeque;
use topic_stage_prng::SceneRng;
use tracing::{debug, trace};

/// Where the engine's cursor sits between events.
#[derive(Clone, Copy, Debug)]
enum Phase {
    /// About to fetch distributions and emit document-begin events.
    DocumentBegin(usize),
    /// About to sample one slot and emit its events.
    Slot { document: usize, slot: usize },
    /// Past the last slot of the last document.
    Done,
}

/// One document's distributions, fetched from the model at document begin
/// and immutable while its slots are sampled.
#[derive(Clone, Debug)]
struct DocumentDraw {
    mixture: ProbVec,
    word_distributions: Vec<ProbVec>,
}

impl DocumentDraw {
    /// All word distributions concatenated in topic order — the word
    /// histogram's bar values, matching `AddressMap` flat indexing.
    fn flattened_words(&self) -> Vec<f64> {
        self.word_distributions
            .iter()
            .flat_map(|dist| dist.iter().copied())
            .collect()
    }
}

/// Orchestrates the sampling loop and produces the event stream.
pub struct Choreography {
    model: ProbabilityModel,
    address: AddressMap,
    vocabulary: Vocabulary,
    documents: usize,
    slots_per_document: usize,
    rng: SceneRng,
    phase: Phase,
    /// Events generated by the current phase, handed out one per call.
    pending: VecDeque<SceneEvent>,
    current: Option<DocumentDraw>,
}

impl Choreography {
    /// Validate the config and build an engine positioned before the first
    /// document. Validation failures surface here, before any event exists.
    pub fn new(config: SceneConfig, rng: SceneRng) -> Result<Self> {
        config.validate()?;
        let address = AddressMap::new(
            &config.vocabulary.slice_sizes(),
            config.documents,
            config.slots_per_document,
        );
        Ok(Choreography {
            model: ProbabilityModel::from_config(&config),
            address,
            vocabulary: config.vocabulary,
            documents: config.documents,
            slots_per_document: config.slots_per_document,
            rng,
            phase: Phase::DocumentBegin(0),
            pending: VecDeque::new(),
            current: None,
        })
    }

    /// Convenience constructor with a fresh seeded PRNG.
    pub fn with_seed(config: SceneConfig, seed: u64) -> Result<Self> {
        Self::new(config, SceneRng::new(seed))
    }

    /// True once every event has been handed out.
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done) && self.pending.is_empty()
    }

    /// Total number of events a full run produces: five per slot, two
    /// histogram refreshes per document, one row advance per document after
    /// the first.
    pub fn expected_event_count(&self) -> usize {
        self.documents * (self.slots_per_document * 5 + 2) + (self.documents - 1)
    }

    /// Produce the next event. Fails with `SequenceExhausted` once the run
    /// is complete. Any collaborator error aborts the whole run: the first
    /// error is surfaced and the engine produces no further events.
    pub fn next_event(&mut self) -> Result<SceneEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(event);
            }
            let stepped = match self.phase {
                Phase::DocumentBegin(document) => self.begin_document(document),
                Phase::Slot { document, slot } => self.step_slot(document, slot),
                Phase::Done => return Err(SceneError::SequenceExhausted),
            };
            if let Err(error) = stepped {
                self.pending.clear();
                self.phase = Phase::Done;
                return Err(error);
            }
        }
    }

    /// Drain the rest of the stream into a `Vec`. A fresh engine yields the
    /// full run.
    pub fn run_to_end(&mut self) -> Result<Vec<SceneEvent>> {
        let mut events = Vec::with_capacity(self.expected_event_count());
        while !self.is_done() {
            events.push(self.next_event()?);
        }
        Ok(events)
    }

    /// Fetch document `d`'s distributions and queue its begin events.
    fn begin_document(&mut self, document: usize) -> Result<()> {
        let mixture = self.model.topic_mixture(document, &mut self.rng)?;
        let word_distributions = (0..self.address.topic_count())
            .map(|topic| self.model.word_distribution(document, topic, &mut self.rng))
            .collect::<Result<Vec<_>>>()?;
        let draw = DocumentDraw {
            mixture,
            word_distributions,
        };
        debug!(document, "document begin");

        self.pending.push_back(SceneEvent::HistogramUpdate {
            target: HistogramTarget::Topics,
            values: draw.mixture.to_vec(),
        });
        self.pending.push_back(SceneEvent::HistogramUpdate {
            target: HistogramTarget::Words,
            values: draw.flattened_words(),
        });
        if document > 0 {
            self.pending.push_back(SceneEvent::RowAdvance { document });
        }

        self.current = Some(draw);
        self.phase = Phase::Slot { document, slot: 0 };
        Ok(())
    }

    /// Sample one slot and queue its five events.
    fn step_slot(&mut self, document: usize, slot: usize) -> Result<()> {
        let draw = self
            .current
            .as_ref()
            .expect("slot phase always follows document begin");

        let topic = sampler::draw(&draw.mixture, self.rng.next_f64())?;
        let word = sampler::draw(&draw.word_distributions[topic], self.rng.next_f64())?;
        let sample = Sample {
            document,
            slot,
            topic,
            word,
        };
        trace!(?sample, "slot sampled");

        let first_in_document = slot == 0;
        let row = self.address.row_of(document)?;
        let column = self.address.column_of(slot)?;
        let topic_bar = self.address.topic_bar(sample.topic)?;
        let word_bar = self.address.word_bar(sample.topic, sample.word)?;
        let icon = self.vocabulary.topics[sample.topic].words[sample.word].clone();

        self.pending.push_back(SceneEvent::MarkerMove {
            target: HistogramTarget::Topics,
            bar: topic_bar,
            first_in_document,
        });
        self.pending.push_back(SceneEvent::SymbolShow {
            row,
            column,
            kind: SymbolKind::TopicMarker {
                topic: sample.topic,
            },
        });
        self.pending.push_back(SceneEvent::MarkerMove {
            target: HistogramTarget::Words,
            bar: word_bar,
            first_in_document,
        });
        self.pending.push_back(SceneEvent::SymbolShow {
            row,
            column,
            kind: SymbolKind::WordIcon {
                topic: sample.topic,
                word: sample.word,
                icon,
            },
        });
        self.pending.push_back(SceneEvent::SymbolHide { row, column });

        self.phase = if slot + 1 < self.slots_per_document {
            Phase::Slot {
                document,
                slot: slot + 1,
            }
        } else if document + 1 < self.documents {
            Phase::DocumentBegin(document + 1)
        } else {
            Phase::Done
        };
        Ok(())
    }
}
