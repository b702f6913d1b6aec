//! Property tests for the replacement policies.

use std::collections::HashSet;

use pagesim::{compare, pages, Outcome, PageId, PolicyKind, Session, SimConfig};
use proptest::prelude::*;

/// Fewest faults any eviction strategy can reach, by trying every victim on
/// every miss.
fn min_faults(sequence: &[u32], frames: &mut Vec<Option<u32>>) -> usize {
    let Some((&page, rest)) = sequence.split_first() else {
        return 0;
    };
    if frames.contains(&Some(page)) {
        return min_faults(rest, frames);
    }

    let mut best = usize::MAX;
    for slot in 0..frames.len() {
        let old = frames[slot].replace(page);
        best = best.min(1 + min_faults(rest, frames));
        frames[slot] = old;
    }
    best
}

fn sequence_strategy(max_page: u32, max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..max_page, 0..=max_len)
}

proptest! {
    #[test]
    fn prop_hits_plus_faults_is_length(
        ids in sequence_strategy(8, 40),
        frames_count in 1usize..=5,
    ) {
        let config = SimConfig::new(frames_count).unwrap();
        let cmp = compare(&pages(&ids), &config).unwrap();

        for eval in cmp.evaluations() {
            prop_assert_eq!(eval.fault_count() + eval.hit_count(), ids.len());
            prop_assert_eq!(eval.trace.len(), ids.len());
        }
    }

    #[test]
    fn prop_optimal_matches_exhaustive_minimum(
        ids in sequence_strategy(5, 6),
        frames_count in 1usize..=3,
    ) {
        let config = SimConfig::new(frames_count).unwrap();
        let eval = PolicyKind::Optimal.evaluate(&pages(&ids), &config).unwrap();

        let expected = min_faults(&ids, &mut vec![None; frames_count]);
        prop_assert_eq!(eval.fault_count(), expected);
    }

    #[test]
    fn prop_no_policy_beats_optimal(
        ids in sequence_strategy(6, 6),
        frames_count in 1usize..=3,
    ) {
        let config = SimConfig::new(frames_count).unwrap();
        let cmp = compare(&pages(&ids), &config).unwrap();

        prop_assert!(cmp.optimal.fault_count() <= cmp.fifo.fault_count());
        prop_assert!(cmp.optimal.fault_count() <= cmp.lru.fault_count());
    }

    #[test]
    fn prop_immediate_repeat_is_hit(
        ids in sequence_strategy(8, 30),
        frames_count in 1usize..=4,
    ) {
        let config = SimConfig::new(frames_count).unwrap();
        let cmp = compare(&pages(&ids), &config).unwrap();

        for eval in cmp.evaluations() {
            for pair in eval.trace.steps().windows(2) {
                if pair[0].page == pair[1].page {
                    prop_assert_eq!(pair[1].outcome, Outcome::Hit);
                }
            }
        }
    }

    #[test]
    fn prop_distinct_pages_within_capacity_all_miss(
        ids in prop::collection::hash_set(0u32..100, 0..=5),
        spare in 0usize..3,
    ) {
        let ids: Vec<u32> = ids.into_iter().collect();
        let config = SimConfig::new(ids.len().max(1) + spare).unwrap();
        let cmp = compare(&pages(&ids), &config).unwrap();

        for eval in cmp.evaluations() {
            prop_assert_eq!(eval.fault_count(), ids.len());
        }
    }

    #[test]
    fn prop_frames_never_hold_duplicates(
        ids in sequence_strategy(6, 30),
        frames_count in 1usize..=4,
    ) {
        let config = SimConfig::new(frames_count).unwrap();
        let cmp = compare(&pages(&ids), &config).unwrap();

        for eval in cmp.evaluations() {
            for step in eval.trace.steps() {
                let resident: Vec<_> = step.frames.iter().flatten().collect();
                let unique: HashSet<_> = resident.iter().collect();
                prop_assert_eq!(resident.len(), unique.len());
                prop_assert!(step.frames.contains(&Some(step.page)));
            }
        }
    }

    #[test]
    fn prop_session_growth_matches_fresh_run(
        first in sequence_strategy(6, 15),
        second in sequence_strategy(6, 15),
        frames_count in 1usize..=4,
    ) {
        let config = SimConfig::new(frames_count).unwrap();
        let mut session = Session::new(config);
        session.extend(&pages(&first)).unwrap();
        session.compare().unwrap();
        session.extend(&pages(&second)).unwrap();

        let full: Vec<u32> = first.iter().chain(second.iter()).copied().collect();
        let fresh = compare(&pages(&full), &config).unwrap();
        prop_assert_eq!(session.compare().unwrap(), fresh);
    }
}

/// Appending a reference to a page Optimal had written off changes the
/// earlier eviction.
#[test]
fn test_optimal_recomputed_after_append() {
    let config = SimConfig::new(2).unwrap();
    let mut session = Session::new(config);

    session.extend(&pages(&[1, 2, 3])).unwrap();
    let before = session.evaluate(PolicyKind::Optimal).unwrap();
    // 1 never comes back, so 2 overwrites it while slot 1 is still empty
    let steps = before.trace.steps();
    assert_eq!(steps[1].evicted, Some(PageId::new(1)));
    assert_eq!(steps[1].frames, vec![Some(PageId::new(2)), None]);
    assert_eq!(steps[2].evicted, Some(PageId::new(2)));
    assert_eq!(before.fault_count(), 3);

    session.extend(&pages(&[1])).unwrap();
    let after = session.evaluate(PolicyKind::Optimal).unwrap();
    // Now 1 is live: 2 goes into the empty slot, then 2 is the one evicted
    let steps = after.trace.steps();
    assert_eq!(steps[1].evicted, None);
    assert_eq!(steps[1].frames, vec![Some(PageId::new(1)), Some(PageId::new(2))]);
    assert_eq!(steps[2].evicted, Some(PageId::new(2)));
    assert_eq!(after.trace.outcome_string(), "MMMH");
    assert_eq!(after.fault_count(), 3);
}
