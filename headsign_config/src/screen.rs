// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screens, formats, text slots, and the format resolver.

use alloc::collections::BTreeMap;
use core::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{DisplaySettings, Language, Position, TextConfig};

/// One of the four physical display boards on a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    /// The front destination board.
    Front,
    /// The side board above the entry door.
    Side,
    /// The rear board.
    Rear,
    /// The internal passenger board.
    Internal,
}

impl ScreenKind {
    /// The four screens, in board order.
    pub const ALL: [Self; 4] = [Self::Front, Self::Side, Self::Rear, Self::Internal];

    /// Returns the screen's key in exported records, e.g. `"front"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Rear => "rear",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Slot arrangement of one screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenFormat {
    /// One full-board message: `{text}`.
    #[default]
    Single,
    /// Side strip plus main message: `{sideText, text}`.
    Two,
    /// Side strip plus stacked halves: `{sideText, upperHalfText, lowerHalfText}`.
    Three,
}

impl ScreenFormat {
    /// The slot set this format defines, in board order.
    #[must_use]
    pub const fn slots(self) -> &'static [TextSlot] {
        match self {
            Self::Single => &[TextSlot::Text],
            Self::Two => &[TextSlot::SideText, TextSlot::Text],
            Self::Three => &[
                TextSlot::SideText,
                TextSlot::UpperHalfText,
                TextSlot::LowerHalfText,
            ],
        }
    }
}

/// A named text position within a screen format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextSlot {
    /// The narrow side strip.
    SideText,
    /// Upper half of a split board.
    UpperHalfText,
    /// Lower half of a split board.
    LowerHalfText,
    /// The main (or only) message area.
    Text,
}

impl TextSlot {
    /// Returns the slot's key in exported records, e.g. `"sideText"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SideText => "sideText",
            Self::UpperHalfText => "upperHalfText",
            Self::LowerHalfText => "lowerHalfText",
            Self::Text => "text",
        }
    }

    /// Display settings a freshly created slot of this kind starts with.
    ///
    /// Side strips and upper halves hold short labels, so they default to
    /// fixed text; main areas and lower halves default to scrolling.
    #[must_use]
    pub fn default_display(self) -> DisplaySettings {
        match self {
            Self::SideText => DisplaySettings::fixed(Position::Left),
            Self::UpperHalfText => DisplaySettings::fixed(Position::Center),
            Self::LowerHalfText | Self::Text => DisplaySettings::default(),
        }
    }
}

impl fmt::Display for TextSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Typed address of one text slot on one screen.
///
/// Editing and finalize paths address slots with this pair instead of
/// string paths, so a typo'd path cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotAddress {
    /// Which screen.
    pub screen: ScreenKind,
    /// Which slot on that screen.
    pub slot: TextSlot,
}

impl SlotAddress {
    /// Creates an address.
    #[must_use]
    pub const fn new(screen: ScreenKind, slot: TextSlot) -> Self {
        Self { screen, slot }
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.screen, self.slot)
    }
}

/// One screen's format plus exactly the slots that format defines.
///
/// The slot set is carried by the enum variant, so a screen can never hold
/// stale slots from a previous format — the shape invariant is structural,
/// not checked. Serialization is adjacently tagged to match exported
/// records: `{"format": "two", "texts": {"sideText": …, "text": …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "texts", rename_all = "lowercase")]
pub enum Screen {
    /// A single full-board message.
    Single {
        /// The main message.
        text: TextConfig,
    },
    /// A side strip plus the main message.
    #[serde(rename_all = "camelCase")]
    Two {
        /// The side strip.
        side_text: TextConfig,
        /// The main message.
        text: TextConfig,
    },
    /// A side strip plus stacked upper/lower halves.
    #[serde(rename_all = "camelCase")]
    Three {
        /// The side strip.
        side_text: TextConfig,
        /// Upper half of the board.
        upper_half_text: TextConfig,
        /// Lower half of the board.
        lower_half_text: TextConfig,
    },
}

impl Screen {
    /// Builds a screen of `format` for `languages`, seeding from `prior`.
    ///
    /// For every slot the format defines and every language in `languages`,
    /// the translation is taken from the same-named slot of `prior` when
    /// present, else left empty — resolving never fabricates text, and a
    /// slot's text survives a format change exactly when the new format
    /// still has that slot. Carried-over slots keep their display settings;
    /// new slots start from [`TextSlot::default_display`]. Bitmaps are
    /// derived state and always start empty here.
    #[must_use]
    pub fn resolve(format: ScreenFormat, languages: &[Language], prior: Option<&Self>) -> Self {
        let seed = |slot: TextSlot| -> TextConfig {
            match prior.and_then(|screen| screen.slot(slot)) {
                Some(prev) => TextConfig {
                    translations: languages
                        .iter()
                        .map(|&lang| {
                            let value = prev.translations.get(&lang).cloned().unwrap_or_default();
                            (lang, value)
                        })
                        .collect(),
                    bitmaps: BTreeMap::new(),
                    display: prev.display,
                },
                None => TextConfig::new(languages, slot.default_display()),
            }
        };

        match format {
            ScreenFormat::Single => Self::Single {
                text: seed(TextSlot::Text),
            },
            ScreenFormat::Two => Self::Two {
                side_text: seed(TextSlot::SideText),
                text: seed(TextSlot::Text),
            },
            ScreenFormat::Three => Self::Three {
                side_text: seed(TextSlot::SideText),
                upper_half_text: seed(TextSlot::UpperHalfText),
                lower_half_text: seed(TextSlot::LowerHalfText),
            },
        }
    }

    /// Returns this screen's format.
    #[must_use]
    pub const fn format(&self) -> ScreenFormat {
        match self {
            Self::Single { .. } => ScreenFormat::Single,
            Self::Two { .. } => ScreenFormat::Two,
            Self::Three { .. } => ScreenFormat::Three,
        }
    }

    /// Returns the slot named `slot`, if this format has it.
    #[must_use]
    pub fn slot(&self, slot: TextSlot) -> Option<&TextConfig> {
        match (self, slot) {
            (Self::Single { text }, TextSlot::Text) => Some(text),
            (Self::Two { side_text, .. }, TextSlot::SideText) => Some(side_text),
            (Self::Two { text, .. }, TextSlot::Text) => Some(text),
            (Self::Three { side_text, .. }, TextSlot::SideText) => Some(side_text),
            (Self::Three { upper_half_text, .. }, TextSlot::UpperHalfText) => {
                Some(upper_half_text)
            }
            (Self::Three { lower_half_text, .. }, TextSlot::LowerHalfText) => {
                Some(lower_half_text)
            }
            _ => None,
        }
    }

    /// Mutable access to the slot named `slot`, if this format has it.
    pub fn slot_mut(&mut self, slot: TextSlot) -> Option<&mut TextConfig> {
        match (self, slot) {
            (Self::Single { text }, TextSlot::Text) => Some(text),
            (Self::Two { side_text, .. }, TextSlot::SideText) => Some(side_text),
            (Self::Two { text, .. }, TextSlot::Text) => Some(text),
            (Self::Three { side_text, .. }, TextSlot::SideText) => Some(side_text),
            (Self::Three { upper_half_text, .. }, TextSlot::UpperHalfText) => {
                Some(upper_half_text)
            }
            (Self::Three { lower_half_text, .. }, TextSlot::LowerHalfText) => {
                Some(lower_half_text)
            }
            _ => None,
        }
    }

    /// Iterates this screen's slots in board order.
    pub fn slots(&self) -> impl Iterator<Item = (TextSlot, &TextConfig)> {
        let pairs: SmallVec<[(TextSlot, &TextConfig); 3]> = match self {
            Self::Single { text } => SmallVec::from_iter([(TextSlot::Text, text)]),
            Self::Two { side_text, text } => {
                SmallVec::from_iter([(TextSlot::SideText, side_text), (TextSlot::Text, text)])
            }
            Self::Three {
                side_text,
                upper_half_text,
                lower_half_text,
            } => SmallVec::from_iter([
                (TextSlot::SideText, side_text),
                (TextSlot::UpperHalfText, upper_half_text),
                (TextSlot::LowerHalfText, lower_half_text),
            ]),
        };
        pairs.into_iter()
    }

    /// Iterates this screen's slots mutably, in board order.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = (TextSlot, &mut TextConfig)> {
        let pairs: SmallVec<[(TextSlot, &mut TextConfig); 3]> = match self {
            Self::Single { text } => SmallVec::from_iter([(TextSlot::Text, text)]),
            Self::Two { side_text, text } => {
                SmallVec::from_iter([(TextSlot::SideText, side_text), (TextSlot::Text, text)])
            }
            Self::Three {
                side_text,
                upper_half_text,
                lower_half_text,
            } => SmallVec::from_iter([
                (TextSlot::SideText, side_text),
                (TextSlot::UpperHalfText, upper_half_text),
                (TextSlot::LowerHalfText, lower_half_text),
            ]),
        };
        pairs.into_iter()
    }

    /// Resizes every slot's translation map to exactly `languages`,
    /// preserving values for retained languages.
    pub fn retranslate(&mut self, languages: &[Language]) {
        for (_, slot) in self.slots_mut() {
            slot.retranslate(languages);
        }
    }
}

/// The four per-vehicle screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screens {
    /// Front board.
    pub front: Screen,
    /// Side board.
    pub side: Screen,
    /// Rear board.
    pub rear: Screen,
    /// Internal board.
    pub internal: Screen,
}

impl Screens {
    /// Builds the default screen set for `languages`: front `two`, side
    /// `single`, rear `three`, internal `single`.
    #[must_use]
    pub fn new(languages: &[Language]) -> Self {
        Self {
            front: Screen::resolve(ScreenFormat::Two, languages, None),
            side: Screen::resolve(ScreenFormat::Single, languages, None),
            rear: Screen::resolve(ScreenFormat::Three, languages, None),
            internal: Screen::resolve(ScreenFormat::Single, languages, None),
        }
    }

    /// Returns the screen of `kind`.
    #[must_use]
    pub const fn get(&self, kind: ScreenKind) -> &Screen {
        match kind {
            ScreenKind::Front => &self.front,
            ScreenKind::Side => &self.side,
            ScreenKind::Rear => &self.rear,
            ScreenKind::Internal => &self.internal,
        }
    }

    /// Mutable access to the screen of `kind`.
    pub fn get_mut(&mut self, kind: ScreenKind) -> &mut Screen {
        match kind {
            ScreenKind::Front => &mut self.front,
            ScreenKind::Side => &mut self.side,
            ScreenKind::Rear => &mut self.rear,
            ScreenKind::Internal => &mut self.internal,
        }
    }

    /// Returns the slot at `addr`, if the screen's format has it.
    #[must_use]
    pub fn slot(&self, addr: SlotAddress) -> Option<&TextConfig> {
        self.get(addr.screen).slot(addr.slot)
    }

    /// Mutable access to the slot at `addr`, if the screen's format has it.
    pub fn slot_mut(&mut self, addr: SlotAddress) -> Option<&mut TextConfig> {
        self.get_mut(addr.screen).slot_mut(addr.slot)
    }

    /// Iterates every populated slot across all four screens.
    pub fn slots(&self) -> impl Iterator<Item = (SlotAddress, &TextConfig)> {
        ScreenKind::ALL.into_iter().flat_map(move |kind| {
            self.get(kind)
                .slots()
                .map(move |(slot, config)| (SlotAddress::new(kind, slot), config))
        })
    }

    /// Resizes every slot's translation map to exactly `languages`.
    pub fn retranslate(&mut self, languages: &[Language]) {
        for kind in ScreenKind::ALL {
            self.get_mut(kind).retranslate(languages);
        }
    }
}
