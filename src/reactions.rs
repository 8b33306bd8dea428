//! Emoji reactions and the viewer's single-select reaction bookkeeping
use std::hash::Hash;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCountMacro,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Laugh,
    Surprise,
    Sad,
    Angry,
}

impl ReactionKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::Like => "👍",
            ReactionKind::Love => "❤️",
            ReactionKind::Laugh => "😂",
            ReactionKind::Surprise => "😮",
            ReactionKind::Sad => "😢",
            ReactionKind::Angry => "😠",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-kind counters. Every kind always has a slot, so a lookup never misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reactions {
    counts: [u32; ReactionKind::COUNT],
}

impl Reactions {
    pub fn from_fn(mut count: impl FnMut(ReactionKind) -> u32) -> Self {
        let mut reactions = Self::default();
        for kind in ReactionKind::iter() {
            reactions.counts[kind.index()] = count(kind);
        }
        reactions
    }

    pub fn count(&self, kind: ReactionKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// All kinds in display order, including those at zero
    pub fn iter(&self) -> impl Iterator<Item = (ReactionKind, u32)> + '_ {
        ReactionKind::iter().map(|kind| (kind, self.count(kind)))
    }

    fn increment(&mut self, kind: ReactionKind) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(1);
    }

    fn decrement(&mut self, kind: ReactionKind) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_sub(1);
    }
}

/// Which kind the viewer has selected for each target of one sort
/// (articles, comments or replies).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveReactions<Id: Hash + Eq + Clone> {
    selected: im::HashMap<Id, ReactionKind>,
}

impl<Id: Hash + Eq + Clone> Default for ActiveReactions<Id> {
    fn default() -> Self {
        Self {
            selected: im::HashMap::new(),
        }
    }
}

impl<Id: Hash + Eq + Clone> ActiveReactions<Id> {
    pub fn active(&self, target: &Id) -> Option<ReactionKind> {
        self.selected.get(target).copied()
    }

    pub fn is_active(&self, target: &Id, kind: ReactionKind) -> bool {
        self.active(target) == Some(kind)
    }

    /// Select `kind` for `target`, or deselect it if it already is the
    /// selected one. `counts` are updated in the same step and the new
    /// selection is returned.
    pub fn toggle(
        &mut self,
        target: Id,
        kind: ReactionKind,
        counts: &mut Reactions,
    ) -> Option<ReactionKind> {
        match self.selected.remove(&target) {
            Some(previous) if previous == kind => {
                counts.decrement(kind);
                None
            }
            previous => {
                if let Some(previous) = previous {
                    counts.decrement(previous);
                }
                counts.increment(kind);
                self.selected.insert(target, kind);
                Some(kind)
            }
        }
    }
}
