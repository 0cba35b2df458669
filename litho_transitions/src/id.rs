// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition identity types.
//!
//! A [`TransitionId`] correlates an element of the layout tree across two
//! consecutive layout passes. Ids come in three flavours:
//!
//! - **Global** — the author-supplied key is unique across the whole tree.
//! - **Scoped** — the author-supplied key is unique only under an *owner*
//!   (the component that declared it).
//! - **Autogenerated** — no key was supplied; the framework falls back to the
//!   component's global key.

use alloc::sync::Arc;
use core::fmt;

/// Discriminates the three [`TransitionId`] namespaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionIdKind {
    /// Reference is unique across the whole tree.
    Global,
    /// Reference is unique within its owner.
    Scoped,
    /// Reference was synthesized by the framework.
    Autogenerated,
}

/// How an author-supplied transition key should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKeyType {
    /// The key is unique across the tree.
    Global,
    /// The key is unique among components sharing the same owner.
    Local,
}

/// Identifies an element across layout passes for animation purposes.
///
/// Equality and hashing use the full identity: two ids with the same
/// reference but a different kind or owner are distinct.
///
/// Strings are reference-counted, so cloning an id is cheap. The map's
/// secondary indexes keep clones of the canonical id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionId {
    /// An id whose reference is unique across the tree.
    Global {
        /// The transition key.
        reference: Arc<str>,
    },
    /// An id whose reference is unique only under `owner`.
    Scoped {
        /// Global key of the component that owns the reference.
        owner: Arc<str>,
        /// The transition key.
        reference: Arc<str>,
    },
    /// An id synthesized from a component's global key.
    Autogenerated {
        /// The component global key.
        reference: Arc<str>,
    },
}

impl TransitionId {
    /// Creates a [`Global`](Self::Global) id.
    #[must_use]
    pub fn global(reference: impl Into<Arc<str>>) -> Self {
        Self::Global {
            reference: reference.into(),
        }
    }

    /// Creates a [`Scoped`](Self::Scoped) id under `owner`.
    #[must_use]
    pub fn scoped(owner: impl Into<Arc<str>>, reference: impl Into<Arc<str>>) -> Self {
        Self::Scoped {
            owner: owner.into(),
            reference: reference.into(),
        }
    }

    /// Creates an [`Autogenerated`](Self::Autogenerated) id.
    #[must_use]
    pub fn autogenerated(reference: impl Into<Arc<str>>) -> Self {
        Self::Autogenerated {
            reference: reference.into(),
        }
    }

    /// Derives the id of a layout node from its keys.
    ///
    /// An explicit `transition_key` wins: it yields a global id or, for
    /// [`TransitionKeyType::Local`], an id scoped to `owner_key`. Without one,
    /// a node that has a `global_key` gets an autogenerated id. A node with
    /// neither has no transition identity.
    ///
    /// # Panics
    ///
    /// Panics if a local transition key has no owner key. Every component
    /// that declares a local key has an owner, so a missing one means the
    /// node was built incorrectly.
    #[must_use]
    pub fn from_keys(
        transition_key: Option<&str>,
        key_type: TransitionKeyType,
        owner_key: Option<&str>,
        global_key: Option<&str>,
    ) -> Option<Self> {
        match (transition_key, key_type) {
            (Some(key), TransitionKeyType::Global) => Some(Self::global(key)),
            (Some(key), TransitionKeyType::Local) => {
                let Some(owner) = owner_key else {
                    panic!("local transition key {key:?} has no owner key");
                };
                Some(Self::scoped(owner, key))
            }
            (None, _) => global_key.map(Self::autogenerated),
        }
    }

    /// Returns the namespace this id belongs to.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TransitionIdKind {
        match self {
            Self::Global { .. } => TransitionIdKind::Global,
            Self::Scoped { .. } => TransitionIdKind::Scoped,
            Self::Autogenerated { .. } => TransitionIdKind::Autogenerated,
        }
    }

    /// Returns the reference, meaningful within [`kind`](Self::kind)'s namespace.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::Global { reference }
            | Self::Scoped { reference, .. }
            | Self::Autogenerated { reference } => reference,
        }
    }

    /// Returns the owner of a scoped id, or `None` for other kinds.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        match self {
            Self::Scoped { owner, .. } => Some(owner),
            Self::Global { .. } | Self::Autogenerated { .. } => None,
        }
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global { reference } => write!(f, "global:{reference}"),
            Self::Scoped { owner, reference } => write!(f, "scoped:{owner}/{reference}"),
            Self::Autogenerated { reference } => write!(f, "auto:{reference}"),
        }
    }
}
