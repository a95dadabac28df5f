// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The clamped, ordered set of active board languages.

use smallvec::SmallVec;

use crate::Language;

/// The ordered set of languages a configuration is being edited in.
///
/// The set is clamped to `1..=3` entries at all times:
/// - it is created non-empty and can never become empty — deselecting the
///   last remaining language is a no-op;
/// - it can never exceed [`LanguageSelection::MAX`] entries — selecting a
///   fourth language is a no-op.
///
/// Mutations report whether they changed anything, and a monotonically
/// increasing **revision** counter bumps on every real change, so hosts
/// get a cheap "did anything happen?" marker. After any reported change
/// the caller re-derives every slot's translation map (the draft session
/// does this automatically).
#[derive(Clone, Debug)]
pub struct LanguageSelection {
    items: SmallVec<[Language; 3]>,
    revision: u64,
}

impl LanguageSelection {
    /// The most languages a board can carry at once.
    pub const MAX: usize = 3;

    /// Creates a selection holding just `initial`.
    #[must_use]
    pub fn new(initial: Language) -> Self {
        Self {
            items: SmallVec::from_iter([initial]),
            revision: 0,
        }
    }

    /// Builds a selection from `languages`, keeping the first occurrence
    /// of each entry and ignoring everything past the third unique one
    /// (mirroring the no-op rule for a fourth selection).
    ///
    /// Returns `None` if `languages` yields nothing.
    #[must_use]
    pub fn from_languages<I>(languages: I) -> Option<Self>
    where
        I: IntoIterator<Item = Language>,
    {
        let mut items: SmallVec<[Language; 3]> = SmallVec::new();
        for lang in languages {
            if items.len() == Self::MAX {
                break;
            }
            if !items.contains(&lang) {
                items.push(lang);
            }
        }
        if items.is_empty() {
            None
        } else {
            Some(Self { items, revision: 0 })
        }
    }

    /// Returns the selected languages in selection order.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.items
    }

    /// Returns the first-selected language.
    ///
    /// This is the language translation sources default to.
    #[must_use]
    pub fn primary(&self) -> Language {
        self.items[0]
    }

    /// Returns the number of selected languages, always in `1..=3`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `false`; the selection is clamped to at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if no further language can be selected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == Self::MAX
    }

    /// Returns `true` if `language` is selected.
    #[must_use]
    pub fn contains(&self, language: Language) -> bool {
        self.items.contains(&language)
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only by mutations that change the selection; no-op calls
    /// (clamped or redundant ones) leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends `language` to the selection.
    ///
    /// No-op when `language` is already selected or the selection is full.
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, language: Language) -> bool {
        if self.contains(language) || self.is_full() {
            return false;
        }
        self.items.push(language);
        self.bump_revision();
        true
    }

    /// Removes `language` from the selection.
    ///
    /// No-op when `language` is not selected or is the last remaining
    /// entry. Returns `true` if the selection changed.
    pub fn deselect(&mut self, language: Language) -> bool {
        if self.items.len() == 1 {
            return false;
        }
        let Some(idx) = self.items.iter().position(|&lang| lang == language) else {
            return false;
        };
        self.items.remove(idx);
        self.bump_revision();
        true
    }

    /// Toggles `language`: deselects it when selected, selects it
    /// otherwise, subject to the same clamps as [`LanguageSelection::select`]
    /// and [`LanguageSelection::deselect`]. Returns `true` if the
    /// selection changed.
    pub fn toggle(&mut self, language: Language) -> bool {
        if self.contains(language) {
            self.deselect(language)
        } else {
            self.select(language)
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a LanguageSelection {
    type Item = &'a Language;
    type IntoIter = core::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
