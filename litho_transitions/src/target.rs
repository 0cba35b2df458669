// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of transition targets to live ids.
//!
//! A transition names the components it animates with a [`ComponentTarget`].
//! Keys in a target are the author's natural addressing (a global key, or a
//! local key under the declaring component's owner); [`TransitionIdMap::resolve`]
//! turns them into the canonical ids held by the map through its secondary
//! indexes, without scanning every entry.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::id::{TransitionId, TransitionIdKind, TransitionKeyType};
use crate::map::TransitionIdMap;
use crate::trace::{TargetResolvedEvent, Tracer};

/// The set of components a transition applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentTarget {
    /// Every id in the map.
    All,
    /// Every id that carries an author-supplied key.
    AutoLayout,
    /// A single key.
    Single {
        /// How `key` is scoped.
        key_type: TransitionKeyType,
        /// The transition key.
        key: Arc<str>,
    },
    /// Several keys sharing one key type.
    Set {
        /// How each key is scoped.
        key_type: TransitionKeyType,
        /// The transition keys.
        keys: Vec<Arc<str>>,
    },
}

/// Shape of a [`ComponentTarget`], without its keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// [`ComponentTarget::All`].
    All,
    /// [`ComponentTarget::AutoLayout`].
    AutoLayout,
    /// [`ComponentTarget::Single`].
    Single,
    /// [`ComponentTarget::Set`].
    Set,
}

impl ComponentTarget {
    /// Targets one key.
    #[must_use]
    pub fn single(key_type: TransitionKeyType, key: impl Into<Arc<str>>) -> Self {
        Self::Single {
            key_type,
            key: key.into(),
        }
    }

    /// Targets several keys of the same type.
    #[must_use]
    pub fn set<K: Into<Arc<str>>>(
        key_type: TransitionKeyType,
        keys: impl IntoIterator<Item = K>,
    ) -> Self {
        Self::Set {
            key_type,
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the shape of this target.
    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        match self {
            Self::All => TargetKind::All,
            Self::AutoLayout => TargetKind::AutoLayout,
            Self::Single { .. } => TargetKind::Single,
            Self::Set { .. } => TargetKind::Set,
        }
    }
}

impl<V> TransitionIdMap<V> {
    /// Returns the live ids matched by `target`.
    ///
    /// `owner` is the owner key of the component that declared the transition;
    /// local keys are looked up under it. Keys with no live id are skipped, and
    /// a local target without an owner matches nothing. Each id appears at
    /// most once, in key order for keyed targets.
    #[must_use]
    pub fn resolve(&self, target: &ComponentTarget, owner: Option<&str>) -> Vec<&TransitionId> {
        self.resolve_traced(target, owner, &mut Tracer::none())
    }

    /// Like [`resolve`](Self::resolve), reporting the match count to `tracer`.
    pub fn resolve_traced(
        &self,
        target: &ComponentTarget,
        owner: Option<&str>,
        tracer: &mut Tracer<'_>,
    ) -> Vec<&TransitionId> {
        let matched: Vec<&TransitionId> = match target {
            ComponentTarget::All => self.ids().collect(),
            ComponentTarget::AutoLayout => self
                .ids()
                .filter(|id| id.kind() != TransitionIdKind::Autogenerated)
                .collect(),
            ComponentTarget::Single { key_type, key } => {
                self.lookup_key(*key_type, key, owner).into_iter().collect()
            }
            ComponentTarget::Set { key_type, keys } => {
                let mut out = Vec::with_capacity(keys.len());
                for key in keys {
                    if let Some(id) = self.lookup_key(*key_type, key, owner)
                        && !out.contains(&id)
                    {
                        out.push(id);
                    }
                }
                out
            }
        };

        tracer.target_resolved(&TargetResolvedEvent {
            target: target.kind(),
            matched: matched.len(),
        });
        matched
    }

    fn lookup_key(
        &self,
        key_type: TransitionKeyType,
        key: &str,
        owner: Option<&str>,
    ) -> Option<&TransitionId> {
        match key_type {
            TransitionKeyType::Global => self.global_id(key),
            TransitionKeyType::Local => owner.and_then(|owner| self.scoped_id(owner, key)),
        }
    }
}
