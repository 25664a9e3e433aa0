// Integration tests for InfluMatch Algo
//
// Exercises the match engine end to end against the curated roster, the
// way the dashboard search uses it.

use influmatch_algo::core::MatchEngine;
use influmatch_algo::services::ProfileStore;

#[test]
fn test_end_to_end_fitness_query() {
    let engine = MatchEngine::with_default_weights();
    let store = ProfileStore::curated();

    let result = engine.find_matches("fitness influencers in hyderabad", store.profiles(), 4);

    assert!(!result.matches.is_empty());
    assert_eq!(result.total_profiles, store.len());

    // The acceptance profile must lead with a perfect score
    let top = &result.matches[0];
    assert_eq!(top.profile.id, "pavan-hari");
    assert_eq!(top.match_percent, 100);

    // Every returned match clears the noise threshold
    for m in &result.matches {
        assert!(m.match_percent > 10);
        assert!(m.match_percent <= 100);
    }
}

#[test]
fn test_example_prompts_return_relevant_niches() {
    let engine = MatchEngine::with_default_weights();
    let store = ProfileStore::curated();

    let cases = [
        ("Telugu food vlogs for restaurant promotion", "Food"),
        ("Travel vloggers from Hyderabad for resort stay", "Travel"),
        ("Comedy creators for viral brand campaign", "Comedy"),
    ];

    for (prompt, niche) in cases {
        let result = engine.find_matches(prompt, store.profiles(), 4);
        assert!(!result.matches.is_empty(), "no matches for {:?}", prompt);
        assert_eq!(
            result.matches[0].profile.niche, niche,
            "top match for {:?} should be a {} creator",
            prompt, niche
        );
    }
}

#[test]
fn test_results_sorted_and_capped() {
    let engine = MatchEngine::with_default_weights();
    // A larger roster guarantees more than 4 qualifying profiles
    let store = ProfileStore::generated(500, 42);

    let result = engine.find_matches("fashion creators mumbai", store.profiles(), 4);

    assert!(result.matches.len() <= 4);
    for pair in result.matches.windows(2) {
        assert!(pair[0].match_percent >= pair[1].match_percent);
    }
}

#[test]
fn test_cap_excludes_qualifying_overflow() {
    let engine = MatchEngine::with_default_weights();
    let store = ProfileStore::generated(500, 42);

    let capped = engine.find_matches("fitness", store.profiles(), 4);
    let uncapped = engine.find_matches("fitness", store.profiles(), 500);

    assert!(
        uncapped.matches.len() > capped.matches.len(),
        "expected more than 4 qualifying profiles in a 500-profile roster"
    );
    assert_eq!(capped.matches.len(), 4);

    // The capped list is exactly the head of the uncapped ranking
    for (a, b) in capped.matches.iter().zip(&uncapped.matches) {
        assert_eq!(a.profile.id, b.profile.id);
        assert_eq!(a.match_percent, b.match_percent);
    }
}

#[test]
fn test_determinism_across_invocations() {
    let engine = MatchEngine::with_default_weights();
    let store = ProfileStore::generated(300, 7);

    let first = engine.find_matches("tech reviews bangalore", store.profiles(), 10);
    let second = engine.find_matches("tech reviews bangalore", store.profiles(), 10);

    let ids_a: Vec<_> = first.matches.iter().map(|m| m.profile.id.clone()).collect();
    let ids_b: Vec<_> = second.matches.iter().map(|m| m.profile.id.clone()).collect();
    assert_eq!(ids_a, ids_b);

    let pcts_a: Vec<_> = first.matches.iter().map(|m| m.match_percent).collect();
    let pcts_b: Vec<_> = second.matches.iter().map(|m| m.match_percent).collect();
    assert_eq!(pcts_a, pcts_b);
}

#[test]
fn test_no_signal_queries_yield_empty_results() {
    let engine = MatchEngine::with_default_weights();
    let store = ProfileStore::curated();

    // Empty query
    assert!(engine.find_matches("", store.profiles(), 4).matches.is_empty());

    // Stop words only
    assert!(engine
        .find_matches("a an of", store.profiles(), 4)
        .matches
        .is_empty());

    // Token with no hits anywhere
    assert!(engine
        .find_matches("xyz123", store.profiles(), 4)
        .matches
        .is_empty());
}

#[test]
fn test_engine_handles_arbitrary_input() {
    let engine = MatchEngine::with_default_weights();
    let store = ProfileStore::curated();

    // Punctuation, emoji, and multi-byte text must not panic
    for query in [
        "!!! ??? ###",
        "🏋️ fitness 🏋️",
        "ఫిట్‌నెస్ హైదరాబాద్",
        "fitness\u{0}null",
    ] {
        let result = engine.find_matches(query, store.profiles(), 4);
        assert!(result.matches.len() <= 4);
    }
}
