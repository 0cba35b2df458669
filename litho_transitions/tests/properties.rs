// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `TransitionIdMap` against a plain `HashMap` model.

use std::collections::HashMap;

use litho_transitions::{TransitionId, TransitionIdKind, TransitionIdMap};
use proptest::prelude::*;

const OWNERS: [&str; 2] = ["o0", "o1"];
const REFERENCES: [&str; 3] = ["r0", "r1", "r2"];

fn transition_id() -> impl Strategy<Value = TransitionId> {
    let reference = prop::sample::select(REFERENCES.to_vec());
    let owner = prop::sample::select(OWNERS.to_vec());
    prop_oneof![
        reference.clone().prop_map(|r| TransitionId::global(r)),
        (owner, reference.clone()).prop_map(|(o, r)| TransitionId::scoped(o, r)),
        reference.prop_map(|r| TransitionId::autogenerated(r)),
    ]
}

#[derive(Clone, Debug)]
enum Op {
    Put(TransitionId, u32),
    Remove(TransitionId),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (transition_id(), any::<u32>()).prop_map(|(id, v)| Op::Put(id, v)),
        3 => transition_id().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

/// Every id that the strategies above can produce.
fn every_id() -> Vec<TransitionId> {
    let mut ids = Vec::new();
    for r in REFERENCES {
        ids.push(TransitionId::global(r));
        ids.push(TransitionId::autogenerated(r));
        for o in OWNERS {
            ids.push(TransitionId::scoped(o, r));
        }
    }
    ids
}

fn index_lookup<'a>(map: &'a TransitionIdMap<u32>, id: &TransitionId) -> Option<&'a TransitionId> {
    match id {
        TransitionId::Global { reference } => map.global_id(reference),
        TransitionId::Scoped { owner, reference } => map.scoped_id(owner, reference),
        TransitionId::Autogenerated { reference } => map.autogenerated_id(reference),
    }
}

fn check_against_model(
    map: &TransitionIdMap<u32>,
    model: &HashMap<TransitionId, u32>,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(map.len(), model.len());
    prop_assert_eq!(map.ids().count(), model.len());
    prop_assert_eq!(map.values().count(), model.len());

    for id in every_id() {
        let expected = model.get(&id);
        prop_assert_eq!(map.get(&id), expected, "value for {}", id);
        prop_assert_eq!(map.contains(&id), expected.is_some());
        let indexed = index_lookup(map, &id);
        if expected.is_some() {
            prop_assert_eq!(indexed, Some(&id));
        } else {
            prop_assert_eq!(indexed, None, "stale index entry for {}", id);
        }
    }

    let by_kind = map.count_of(TransitionIdKind::Global)
        + map.count_of(TransitionIdKind::Scoped)
        + map.count_of(TransitionIdKind::Autogenerated);
    prop_assert_eq!(by_kind, map.len());

    for owner in map.owners() {
        prop_assert!(
            map.scoped_ids(owner).next().is_some(),
            "empty bucket for owner {}",
            owner
        );
    }
    Ok(())
}

proptest! {
    /// Any sequence of operations keeps the map equal to the model and the
    /// indexes in sync with the primary map.
    #[test]
    fn operations_match_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut map = TransitionIdMap::new();
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Put(id, v) => {
                    let previous = model.insert(id.clone(), v);
                    prop_assert_eq!(map.put(id, v), previous);
                }
                Op::Remove(id) => {
                    prop_assert_eq!(map.remove(&id), model.remove(&id));
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
            }
            check_against_model(&map, &model)?;
        }
    }

    /// Re-putting an id overwrites its value without growing the map.
    #[test]
    fn put_twice_keeps_size(id in transition_id(), a in any::<u32>(), b in any::<u32>()) {
        let mut map = TransitionIdMap::new();
        map.put(id.clone(), a);
        map.put(id.clone(), b);
        prop_assert_eq!(map.get(&id), Some(&b));
        prop_assert_eq!(map.ids().count(), 1);
        prop_assert_eq!(map.count_of(id.kind()), 1);
    }

    /// Removing an absent id changes nothing.
    #[test]
    fn remove_absent_is_noop(
        present in prop::collection::vec((transition_id(), any::<u32>()), 0..8),
        absent in transition_id(),
    ) {
        let mut map: TransitionIdMap<u32> = present.into_iter().collect();
        prop_assume!(!map.contains(&absent));

        let mut before: Vec<_> = map.iter().map(|(id, v)| (id.clone(), *v)).collect();
        before.sort_by_key(|(id, _)| id.to_string());
        prop_assert_eq!(map.remove(&absent), None);
        let mut after: Vec<_> = map.iter().map(|(id, v)| (id.clone(), *v)).collect();
        after.sort_by_key(|(id, _)| id.to_string());
        prop_assert_eq!(before, after);
    }

    /// Clearing forgets every id and every index entry.
    #[test]
    fn clear_forgets_everything(
        entries in prop::collection::vec((transition_id(), any::<u32>()), 0..16),
    ) {
        let mut map: TransitionIdMap<u32> = entries.iter().cloned().collect();
        map.clear();
        for (id, _) in &entries {
            prop_assert!(!map.contains(id));
            prop_assert_eq!(index_lookup(&map, id), None);
        }
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.owners().count(), 0);
    }
}

#[test]
fn global_and_scoped_ids_with_same_reference() {
    let mut map = TransitionIdMap::new();
    let global = TransitionId::global("key1");
    let scoped = TransitionId::scoped("ownerX", "key1");
    map.put(global.clone(), "A");
    map.put(scoped.clone(), "B");

    assert_eq!(map.get(&global), Some(&"A"));
    assert_eq!(map.get(&scoped), Some(&"B"));
    assert_eq!(map.global_id("key1"), Some(&global));
    assert_eq!(map.scoped_id("ownerX", "key1"), Some(&scoped));
    assert_eq!(map.ids().count(), 2);
}
