// Integration smoke test for the choreography engine.
//
// Plays full classroom runs end-to-end the way the rendering engine would:
// pull one event at a time, check the stream against the emission contract,
// and confirm that seeded runs replay byte-identically through the JSON
// boundary. No rendering involved — the event stream is the whole contract.

use topic_stage_sim::choreography::Choreography;
use topic_stage_sim::config::SceneConfig;
use topic_stage_sim::error::SceneError;
use topic_stage_sim::event::{SceneEvent, SymbolKind};
use topic_stage_sim::prng::SceneRng;
use topic_stage_sim::types::HistogramTarget;

/// Helper: drain a full run, pulling one event at a time like a renderer.
fn play(config: SceneConfig, seed: u64) -> Vec<SceneEvent> {
    let mut engine = Choreography::new(config, SceneRng::new(seed)).unwrap();
    let mut events = Vec::new();
    while !engine.is_done() {
        events.push(engine.next_event().unwrap());
    }
    events
}

#[test]
fn classroom_run_produces_the_full_stream() {
    let events = play(SceneConfig::classroom(), 42);

    // 3 documents * (6 slots * 5 + 2 histogram refreshes) + 2 row advances.
    assert_eq!(events.len(), 98);

    // The stream opens with both histogram refreshes for document 0.
    assert!(matches!(
        events[0],
        SceneEvent::HistogramUpdate {
            target: HistogramTarget::Topics,
            ..
        }
    ));
    assert!(matches!(
        events[1],
        SceneEvent::HistogramUpdate {
            target: HistogramTarget::Words,
            ..
        }
    ));

    // Every icon identifier comes from the classroom vocabulary.
    let vocabulary = SceneConfig::classroom().vocabulary;
    for event in &events {
        if let SceneEvent::SymbolShow {
            kind: SymbolKind::WordIcon { topic, word, icon },
            ..
        } = event
        {
            assert_eq!(icon, &vocabulary.topics[*topic].words[*word]);
        }
    }
}

#[test]
fn seeded_replay_is_byte_identical_through_json() {
    let first = play(SceneConfig::classroom(), 2024);
    let second = play(SceneConfig::classroom(), 2024);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);

    // The stream survives the renderer boundary unchanged.
    let restored: Vec<SceneEvent> = serde_json::from_str(&first_json).unwrap();
    assert_eq!(restored, first);
}

#[test]
fn drawn_mode_runs_to_completion() {
    let events = play(SceneConfig::classroom_drawn(), 7);
    assert_eq!(events.len(), 98);

    // Every histogram refresh carries a valid simplex.
    for event in &events {
        if let SceneEvent::HistogramUpdate { values, .. } = event {
            let sum: f64 = values.iter().sum();
            assert!((sum - 1.0).abs() <= 1e-6, "histogram sums to {sum}");
            assert!(values.iter().all(|&v| v >= 0.0));
        }
    }
}

#[test]
fn config_loaded_from_json_drives_a_run() {
    let json = SceneConfig::classroom().to_json().unwrap();
    let config = SceneConfig::from_json(&json).unwrap();
    let events = play(config, 1);
    assert_eq!(events.len(), 98);
}

#[test]
fn stopping_mid_stream_needs_no_cleanup() {
    let mut engine = Choreography::with_seed(SceneConfig::classroom(), 9).unwrap();
    // Consume a handful of events, then simply stop.
    for _ in 0..10 {
        engine.next_event().unwrap();
    }
    drop(engine);

    // A fresh engine restarts from scratch and yields the same stream.
    let replay = play(SceneConfig::classroom(), 9);
    assert_eq!(replay.len(), 98);
}

#[test]
fn worked_example_chains_through_sampler_and_address_map() {
    // Mixture [0.4, 0.6] with u = 0.5 picks topic 1; that topic's word
    // distribution with u = 0.5 picks word 2; the flat word bar is
    // 2 + vocab_size(topic 0) = 7.
    use topic_stage_sim::address::AddressMap;
    use topic_stage_sim::sampler;
    use topic_stage_sim::types::BarIndex;

    let topic = sampler::draw(&[0.4, 0.6], 0.5).unwrap();
    assert_eq!(topic, 1);

    let word = sampler::draw(&[0.1, 0.15, 0.3, 0.25, 0.2], 0.5).unwrap();
    assert_eq!(word, 2);

    let map = AddressMap::new(&[5, 5], 3, 6);
    assert_eq!(map.word_bar(topic, word).unwrap(), BarIndex(7));
}

#[test]
fn exhausted_stream_reports_sequence_exhausted() {
    let mut engine = Choreography::with_seed(SceneConfig::classroom(), 3).unwrap();
    engine.run_to_end().unwrap();
    assert!(matches!(
        engine.next_event(),
        Err(SceneError::SequenceExhausted)
    ));
}
