// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The in-memory editing session for one route's configuration.

use alloc::string::String;

use crate::{
    DisplayConfig, DisplaySettings, Language, LanguageSelection, Route, Screen, ScreenFormat,
    ScreenKind, Screens, SlotAddress,
};

/// One route's display configuration while it is being edited.
///
/// The draft owns the route, the language selection, and the four screens,
/// and keeps them consistent: every language-selection change resizes all
/// translation maps in place, and every format change rebuilds that
/// screen's slot set seeded from the old one. Mutations report whether
/// they changed anything, mirroring the selection's no-op rules.
///
/// A draft stays alive across submission attempts — persistence failures
/// surface to the caller while the draft remains editable — so producing
/// the submission shape ([`DraftConfig::to_config`]) copies rather than
/// consumes.
#[derive(Clone, Debug)]
pub struct DraftConfig {
    route: Route,
    languages: LanguageSelection,
    screens: Screens,
}

impl DraftConfig {
    /// Starts a session for `route` with `initial` as the one selected
    /// language and the default screen layout.
    ///
    /// The route is normalized (uppercased) on the way in.
    #[must_use]
    pub fn new(route: Route, initial: Language) -> Self {
        Self::with_languages(route, LanguageSelection::new(initial))
    }

    /// Starts a session with a prepared language selection.
    #[must_use]
    pub fn with_languages(route: Route, languages: LanguageSelection) -> Self {
        let screens = Screens::new(languages.languages());
        Self {
            route: route.normalized(),
            languages,
            screens,
        }
    }

    /// The route under edit.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// The active language selection.
    #[must_use]
    pub const fn languages(&self) -> &LanguageSelection {
        &self.languages
    }

    /// The four screens as currently shaped.
    #[must_use]
    pub const fn screens(&self) -> &Screens {
        &self.screens
    }

    /// Changes `kind`'s format, rebuilding its slot set seeded from the
    /// current one. No-op (returns `false`) when the format is unchanged.
    pub fn set_format(&mut self, kind: ScreenKind, format: ScreenFormat) -> bool {
        let screen = self.screens.get_mut(kind);
        if screen.format() == format {
            return false;
        }
        *screen = Screen::resolve(format, self.languages.languages(), Some(screen));
        true
    }

    /// Selects `language`, resizing every translation map on success.
    ///
    /// Clamped exactly like [`LanguageSelection::select`]; returns `true`
    /// if the selection changed.
    pub fn select_language(&mut self, language: Language) -> bool {
        let changed = self.languages.select(language);
        if changed {
            self.screens.retranslate(self.languages.languages());
        }
        changed
    }

    /// Deselects `language`, resizing every translation map on success.
    ///
    /// Clamped exactly like [`LanguageSelection::deselect`]; returns
    /// `true` if the selection changed.
    pub fn deselect_language(&mut self, language: Language) -> bool {
        let changed = self.languages.deselect(language);
        if changed {
            self.screens.retranslate(self.languages.languages());
        }
        changed
    }

    /// Toggles `language`, resizing every translation map on success.
    pub fn toggle_language(&mut self, language: Language) -> bool {
        let changed = self.languages.toggle(language);
        if changed {
            self.screens.retranslate(self.languages.languages());
        }
        changed
    }

    /// Sets the translation at `addr` for `language`.
    ///
    /// Returns `false` — and stores nothing — when the screen's format has
    /// no such slot or the language is not currently selected.
    pub fn set_translation(&mut self, addr: SlotAddress, language: Language, text: &str) -> bool {
        if !self.languages.contains(language) {
            return false;
        }
        let Some(slot) = self.screens.slot_mut(addr) else {
            return false;
        };
        slot.translations.insert(language, String::from(text));
        true
    }

    /// Sets the display settings at `addr`.
    ///
    /// Returns `false` when the screen's format has no such slot.
    pub fn set_display(&mut self, addr: SlotAddress, settings: DisplaySettings) -> bool {
        let Some(slot) = self.screens.slot_mut(addr) else {
            return false;
        };
        slot.display = settings;
        true
    }

    /// Copies the draft into the record shape consumed by finalize,
    /// export, preview, and persistence.
    #[must_use]
    pub fn to_config(&self) -> DisplayConfig {
        DisplayConfig::new(self.route.clone(), self.screens.clone())
    }
}
