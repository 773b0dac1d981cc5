// Core value types shared across the crate.
//
// Addressing newtypes (`BarIndex`, `RowIndex`, `ColumnIndex`) are the
// coordinates the external rendering engine understands: a flat bar position
// in a histogram, and a row/column cell in the document grid. They are
// produced exclusively by `address.rs` so that offset arithmetic lives in
// one place.
//
// `Sample` records one slot draw. It is built by the choreography engine,
// converted into events immediately, and never retained — there is no
// replay cache.
//
// See also: `event.rs` for the event records these coordinates appear in,
// `address.rs` for the arithmetic that produces them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A probability vector. Topic counts and vocabulary slices are small in
/// every known configuration, so entries live inline.
pub type ProbVec = SmallVec<[f64; 8]>;

/// Absolute tolerance for "sums to 1" checks on probability vectors.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Flat bar position within a histogram (0-based, left to right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BarIndex(pub usize);

/// Document row in the symbol grid (0-based, top to bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowIndex(pub usize);

/// Slot column within a document row (0-based, left to right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnIndex(pub usize);

/// Which of the two histograms an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistogramTarget {
    /// The topic-mixture histogram (one bar per topic).
    Topics,
    /// The word histogram (all topics' vocabulary slices, concatenated in
    /// topic order — the same order `AddressMap` flattens to).
    Words,
}

/// The result of one slot draw: which topic was sampled from the document's
/// mixture, and which word from that topic's distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Document being generated (0-based).
    pub document: usize,
    /// Slot within the document (0-based).
    pub slot: usize,
    /// Sampled topic index, in `[0, K)`.
    pub topic: usize,
    /// Sampled word index within the topic's vocabulary slice.
    pub word: usize,
}
