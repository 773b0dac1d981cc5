// topic_stage_sim — pure Rust sampling and choreography library.
//
// This crate contains all generative logic for topic_stage: the two-level
// topic-model sampling process (topic from a document's mixture, word from
// the topic's distribution) and the choreography that turns those samples
// into an ordered stream of visual update events. It has zero rendering
// dependencies and runs headless; the external rendering engine is a pure
// consumer of the `SceneEvent` stream.
//
// Module overview:
// - `choreography.rs`: `Choreography` — document × slot state machine, lazy event emission.
// - `model.rs`:        `ProbabilityModel` — Static tables or Drawn (Dirichlet) distributions.
// - `sampler.rs`:      inverse-CDF categorical draw.
// - `dirichlet.rs`:    gamma / Dirichlet sampling over the project PRNG.
// - `address.rs`:      `AddressMap` — (topic, word) → flat bar, (document, slot) → grid cell.
// - `event.rs`:        `SceneEvent` — the output contract.
// - `config.rs`:       `SceneConfig` — vocabulary, geometry, probability sources, presets.
// - `error.rs`:        `SceneError` taxonomy.
// - `types.rs`:        `Sample`, coordinate newtypes, `ProbVec`.
// - `prng`:            Re-exported from `topic_stage_prng` — xoshiro256++ with SplitMix64 seeding.
//
// **Critical constraint: determinism.** A run is a pure function of
// `(config, seed)`. All randomness comes from the seeded xoshiro256++ PRNG;
// config tables use `BTreeMap`, never `HashMap`. Two runs with the same
// config and seed produce byte-identical event streams.

pub mod address;
pub mod choreography;
pub mod config;
pub mod dirichlet;
pub mod error;
pub mod event;
pub mod model;
pub use topic_stage_prng as prng;
pub mod sampler;
pub mod types;
