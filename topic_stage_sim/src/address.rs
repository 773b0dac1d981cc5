// Index arithmetic from sample coordinates to renderer coordinates.
//
// The word histogram concatenates every topic's vocabulary slice in topic
// order, so the flat bar for `(topic, word)` is `word` plus the total size
// of all earlier slices. The prefix sums are computed once at construction;
// every lookup after that is pure arithmetic with a bounds check — no
// allocation, no mutation.
//
// Consolidating this arithmetic here keeps the choreography loop free of
// scattered offset expressions that could drift out of sync with the
// histogram layout.

use crate::error::{Result, SceneError};
use crate::types::{BarIndex, ColumnIndex, RowIndex};

/// Translates `(topic, word)` pairs to flat histogram bars and
/// `(document, slot)` pairs to grid cells.
#[derive(Clone, Debug)]
pub struct AddressMap {
    /// Prefix sums of vocabulary slice sizes: `offsets[t]` is the flat bar
    /// of topic `t`'s first word.
    offsets: Vec<usize>,
    slice_sizes: Vec<usize>,
    total_words: usize,
    documents: usize,
    slots_per_document: usize,
}

impl AddressMap {
    /// Build the map from per-topic vocabulary slice sizes and the scene's
    /// document grid geometry. Slices may be unequal in size.
    pub fn new(slice_sizes: &[usize], documents: usize, slots_per_document: usize) -> Self {
        let mut offsets = Vec::with_capacity(slice_sizes.len());
        let mut total = 0;
        for &size in slice_sizes {
            offsets.push(total);
            total += size;
        }
        AddressMap {
            offsets,
            slice_sizes: slice_sizes.to_vec(),
            total_words: total,
            documents,
            slots_per_document,
        }
    }

    /// Number of topics (K).
    pub fn topic_count(&self) -> usize {
        self.slice_sizes.len()
    }

    /// Total number of bars in the word histogram.
    pub fn total_word_bars(&self) -> usize {
        self.total_words
    }

    /// Vocabulary slice size for one topic.
    pub fn vocab_size(&self, topic: usize) -> Result<usize> {
        self.slice_sizes
            .get(topic)
            .copied()
            .ok_or(SceneError::Address {
                what: "topic",
                index: topic,
                limit: self.slice_sizes.len(),
            })
    }

    /// Bar for a topic in the topic-mixture histogram.
    pub fn topic_bar(&self, topic: usize) -> Result<BarIndex> {
        if topic >= self.topic_count() {
            return Err(SceneError::Address {
                what: "topic",
                index: topic,
                limit: self.topic_count(),
            });
        }
        Ok(BarIndex(topic))
    }

    /// Flat bar for a word in the word histogram:
    /// `word + sum(vocab_size(t) for t < topic)`.
    pub fn word_bar(&self, topic: usize, word: usize) -> Result<BarIndex> {
        let size = self.vocab_size(topic)?;
        if word >= size {
            return Err(SceneError::Address {
                what: "word",
                index: word,
                limit: size,
            });
        }
        Ok(BarIndex(self.offsets[topic] + word))
    }

    /// Grid row for a document.
    pub fn row_of(&self, document: usize) -> Result<RowIndex> {
        if document >= self.documents {
            return Err(SceneError::Address {
                what: "document",
                index: document,
                limit: self.documents,
            });
        }
        Ok(RowIndex(document))
    }

    /// Grid column for a slot.
    pub fn column_of(&self, slot: usize) -> Result<ColumnIndex> {
        if slot >= self.slots_per_document {
            return Err(SceneError::Address {
                what: "slot",
                index: slot,
                limit: self.slots_per_document,
            });
        }
        Ok(ColumnIndex(slot))
    }
}
