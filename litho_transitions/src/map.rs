// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-index map from [`TransitionId`]s to animation state.

use alloc::sync::Arc;

use hashbrown::HashMap;
use hashbrown::hash_map;

use crate::id::{TransitionId, TransitionIdKind};
use crate::trace::{ClearedEvent, IdEvent, OwnerPrunedEvent, Tracer};

/// Maps [`TransitionId`]s to values while tracking ids by kind.
///
/// Besides the primary `id → value` map, three secondary indexes partition the
/// live ids by [`TransitionIdKind`]:
///
/// - global ids by reference,
/// - scoped ids by owner, then by reference,
/// - autogenerated ids by reference.
///
/// This lets the transition manager find the canonical id for a key named in
/// a transition (see [`global_id`](Self::global_id) and
/// [`scoped_id`](Self::scoped_id)) without scanning every entry.
///
/// An owner bucket in the scoped index exists only while at least one id
/// lives under it.
#[derive(Clone, Debug)]
pub struct TransitionIdMap<V> {
    values: HashMap<TransitionId, V>,
    global_ids: HashMap<Arc<str>, TransitionId>,
    scoped_ids_by_owner: HashMap<Arc<str>, HashMap<Arc<str>, TransitionId>>,
    autogenerated_ids: HashMap<Arc<str>, TransitionId>,
}

impl<V> Default for TransitionIdMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TransitionIdMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            global_ids: HashMap::new(),
            scoped_ids_by_owner: HashMap::new(),
            autogenerated_ids: HashMap::new(),
        }
    }

    /// Returns `true` if the map holds a value for `id`.
    #[must_use]
    pub fn contains(&self, id: &TransitionId) -> bool {
        self.values.contains_key(id)
    }

    /// Associates `value` with `id`, returning the value it replaced.
    ///
    /// The secondary indexes only change when `id` is new. Replacing a value
    /// keeps the id instance already stored in the map.
    pub fn put(&mut self, id: TransitionId, value: V) -> Option<V> {
        self.put_traced(id, value, &mut Tracer::none())
    }

    /// Like [`put`](Self::put), reporting the insert or replace to `tracer`.
    pub fn put_traced(&mut self, id: TransitionId, value: V, tracer: &mut Tracer<'_>) -> Option<V> {
        if let Some(slot) = self.values.get_mut(&id) {
            tracer.value_replaced(&IdEvent { id: &id });
            return Some(core::mem::replace(slot, value));
        }

        match &id {
            TransitionId::Global { reference } => {
                self.global_ids.insert(reference.clone(), id.clone());
            }
            TransitionId::Scoped { owner, reference } => {
                self.scoped_ids_by_owner
                    .entry(owner.clone())
                    .or_default()
                    .insert(reference.clone(), id.clone());
            }
            TransitionId::Autogenerated { reference } => {
                self.autogenerated_ids.insert(reference.clone(), id.clone());
            }
        }
        tracer.id_inserted(&IdEvent { id: &id });
        self.values.insert(id, value);
        None
    }

    /// Returns the value for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &TransitionId) -> Option<&V> {
        self.values.get(id)
    }

    /// Returns a mutable reference to the value for `id`, if any.
    pub fn get_mut(&mut self, id: &TransitionId) -> Option<&mut V> {
        self.values.get_mut(id)
    }

    /// Removes `id` and returns its value.
    ///
    /// Removing an id that is not present does nothing. Removing the last
    /// scoped id of an owner drops that owner's bucket.
    pub fn remove(&mut self, id: &TransitionId) -> Option<V> {
        self.remove_traced(id, &mut Tracer::none())
    }

    /// Like [`remove`](Self::remove), reporting the removal to `tracer`.
    pub fn remove_traced(&mut self, id: &TransitionId, tracer: &mut Tracer<'_>) -> Option<V> {
        let (id, value) = self.values.remove_entry(id)?;

        match &id {
            TransitionId::Global { reference } => {
                let removed = self.global_ids.remove(&**reference);
                debug_assert!(removed.is_some(), "global index out of sync for {id}");
            }
            TransitionId::Scoped { owner, reference } => {
                let siblings = self.scoped_ids_by_owner.get_mut(&**owner);
                debug_assert!(siblings.is_some(), "scoped index has no bucket for {id}");
                if let Some(siblings) = siblings {
                    siblings.remove(&**reference);
                    if siblings.is_empty() {
                        self.scoped_ids_by_owner.remove(&**owner);
                        tracer.owner_pruned(&OwnerPrunedEvent { owner });
                    }
                }
            }
            TransitionId::Autogenerated { reference } => {
                let removed = self.autogenerated_ids.remove(&**reference);
                debug_assert!(removed.is_some(), "autogenerated index out of sync for {id}");
            }
        }
        tracer.id_removed(&IdEvent { id: &id });
        Some(value)
    }

    /// Returns the live global id with the given reference.
    #[must_use]
    pub fn global_id(&self, reference: &str) -> Option<&TransitionId> {
        self.global_ids.get(reference)
    }

    /// Returns the live scoped id with the given owner and reference.
    #[must_use]
    pub fn scoped_id(&self, owner: &str, reference: &str) -> Option<&TransitionId> {
        self.scoped_ids_by_owner.get(owner)?.get(reference)
    }

    /// Returns the live autogenerated id with the given reference.
    #[must_use]
    pub fn autogenerated_id(&self, reference: &str) -> Option<&TransitionId> {
        self.autogenerated_ids.get(reference)
    }

    /// Iterates over the ids in the map, in arbitrary order.
    pub fn ids(&self) -> hash_map::Keys<'_, TransitionId, V> {
        self.values.keys()
    }

    /// Iterates over the values in the map, in arbitrary order.
    pub fn values(&self) -> hash_map::Values<'_, TransitionId, V> {
        self.values.values()
    }

    /// Iterates mutably over the values in the map.
    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, TransitionId, V> {
        self.values.values_mut()
    }

    /// Iterates over `(id, value)` pairs.
    pub fn iter(&self) -> hash_map::Iter<'_, TransitionId, V> {
        self.values.iter()
    }

    /// Iterates over the live global ids.
    pub fn global_ids(&self) -> hash_map::Values<'_, Arc<str>, TransitionId> {
        self.global_ids.values()
    }

    /// Iterates over the live scoped ids under `owner`.
    pub fn scoped_ids<'a>(
        &'a self,
        owner: &str,
    ) -> impl Iterator<Item = &'a TransitionId> + use<'a, V> {
        self.scoped_ids_by_owner
            .get(owner)
            .into_iter()
            .flat_map(HashMap::values)
    }

    /// Iterates over the owners that have at least one live scoped id.
    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.scoped_ids_by_owner.keys().map(|owner| &**owner)
    }

    /// Returns the number of live ids of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: TransitionIdKind) -> usize {
        match kind {
            TransitionIdKind::Global => self.global_ids.len(),
            TransitionIdKind::Scoped => self.scoped_ids_by_owner.values().map(HashMap::len).sum(),
            TransitionIdKind::Autogenerated => self.autogenerated_ids.len(),
        }
    }

    /// Returns the number of ids in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the map holds no ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every id and value.
    pub fn clear(&mut self) {
        self.clear_traced(&mut Tracer::none());
    }

    /// Like [`clear`](Self::clear), reporting the number of dropped ids to
    /// `tracer`.
    pub fn clear_traced(&mut self, tracer: &mut Tracer<'_>) {
        let ids = self.values.len();

        self.global_ids.clear();
        self.scoped_ids_by_owner.clear();
        self.autogenerated_ids.clear();
        self.values.clear();

        tracer.cleared(&ClearedEvent { ids });
    }
}

impl<'a, V> IntoIterator for &'a TransitionIdMap<V> {
    type Item = (&'a TransitionId, &'a V);
    type IntoIter = hash_map::Iter<'a, TransitionId, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Extend<(TransitionId, V)> for TransitionIdMap<V> {
    fn extend<I: IntoIterator<Item = (TransitionId, V)>>(&mut self, iter: I) {
        for (id, value) in iter {
            self.put(id, value);
        }
    }
}

impl<V> FromIterator<(TransitionId, V)> for TransitionIdMap<V> {
    fn from_iter<I: IntoIterator<Item = (TransitionId, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
