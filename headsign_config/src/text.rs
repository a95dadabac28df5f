// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slot text state: translations, bitmap results, display settings.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Language;

/// How text moves across a physical screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollType {
    /// Scroll toward the right edge.
    #[default]
    LeftToRight,
    /// Scroll toward the left edge.
    RightToLeft,
    /// Static text.
    Fixed,
    /// Blinking text.
    Flicker,
}

/// Horizontal anchor for fixed or short text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Flush left.
    Left,
    /// Flush right.
    Right,
    /// Centered.
    #[default]
    Center,
}

/// A scroll speed outside the 1–10 scale, reported when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("scroll speed {0} is outside 1..=10")]
pub struct SpeedOutOfRange(pub u8);

/// Scroll speed on a 1–10 scale.
///
/// [`ScrollSpeed::new`] clamps into range so hosts can feed slider values
/// straight in; deserialization instead rejects out-of-range values, so a
/// hand-edited export cannot smuggle an invalid speed past the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScrollSpeed(u8);

impl ScrollSpeed {
    /// The slowest speed.
    pub const MIN: Self = Self(1);
    /// The fastest speed.
    pub const MAX: Self = Self(10);

    /// Creates a speed, clamping `speed` into `1..=10`.
    #[must_use]
    pub const fn new(speed: u8) -> Self {
        if speed < Self::MIN.0 {
            Self::MIN
        } else if speed > Self::MAX.0 {
            Self::MAX
        } else {
            Self(speed)
        }
    }

    /// Returns the speed as a plain integer in `1..=10`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for ScrollSpeed {
    type Error = SpeedOutOfRange;

    fn try_from(speed: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&speed) {
            Ok(Self(speed))
        } else {
            Err(SpeedOutOfRange(speed))
        }
    }
}

impl From<ScrollSpeed> for u8 {
    fn from(speed: ScrollSpeed) -> Self {
        speed.0
    }
}

/// Presentation settings for one text slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Scroll behavior.
    pub scroll_type: ScrollType,
    /// Horizontal anchor.
    pub position: Position,
    /// Scroll speed, 1–10.
    pub scroll_speed: ScrollSpeed,
}

impl DisplaySettings {
    /// Fixed (non-scrolling) text anchored at `position`, default speed.
    #[must_use]
    pub fn fixed(position: Position) -> Self {
        Self {
            scroll_type: ScrollType::Fixed,
            position,
            ..Self::default()
        }
    }
}

/// The rasterized form of one translated string for one language.
///
/// Produced exclusively by the rasterization service. When that service
/// fails, the assembler substitutes the degraded [`BitmapRecord::fallback`]
/// record, which echoes the original text with zero dimensions; boards
/// recognize it and render the text through their own fallback font.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapRecord {
    /// Comma-joined pixel data, or the original text for a fallback record.
    pub bitmap: String,
    /// Width in pixels; 0 for a fallback record.
    pub width: u32,
    /// Height in pixels; 0 for a fallback record.
    pub height: u32,
}

impl BitmapRecord {
    /// Builds a record from the wire shape: a flat pixel sequence plus
    /// dimensions. The pixels are stored comma-joined.
    #[must_use]
    pub fn from_pixels(pixels: &[u32], width: u32, height: u32) -> Self {
        let mut bitmap = String::new();
        for (i, px) in pixels.iter().enumerate() {
            if i > 0 {
                bitmap.push(',');
            }
            bitmap.push_str(&px.to_string());
        }
        Self {
            bitmap,
            width,
            height,
        }
    }

    /// The degraded record substituted when rasterization fails: the
    /// original text echoed back with zero dimensions.
    #[must_use]
    pub fn fallback(text: &str) -> Self {
        Self {
            bitmap: text.to_string(),
            width: 0,
            height: 0,
        }
    }

    /// Returns `true` if this is a degraded fallback record.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Everything one text slot carries.
///
/// `translations` always holds exactly the active language set as keys —
/// the resolver maintains that shape on every format or language change.
/// `bitmaps` is derived state: empty in a draft, populated per language by
/// the assembler's finalize pass, and skipped during serialization while
/// empty so drafts and resolved configurations share one schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Raw text per language.
    pub translations: BTreeMap<Language, String>,
    /// Rasterized output per language; authoritative only after finalize.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub bitmaps: BTreeMap<Language, BitmapRecord>,
    /// Presentation settings.
    pub display: DisplaySettings,
}

impl TextConfig {
    /// Creates an empty slot for `languages` with the given settings.
    #[must_use]
    pub fn new(languages: &[Language], display: DisplaySettings) -> Self {
        Self {
            translations: languages.iter().map(|&lang| (lang, String::new())).collect(),
            bitmaps: BTreeMap::new(),
            display,
        }
    }

    /// Returns the translation for `language`, if that language is active.
    #[must_use]
    pub fn translation(&self, language: Language) -> Option<&str> {
        self.translations.get(&language).map(String::as_str)
    }

    /// Resizes the translation map to exactly `languages`: newly added
    /// languages get empty entries, retained languages keep their values,
    /// removed languages are dropped (along with any bitmap they had).
    pub fn retranslate(&mut self, languages: &[Language]) {
        let mut next = BTreeMap::new();
        for &lang in languages {
            let value = self.translations.remove(&lang).unwrap_or_default();
            next.insert(lang, value);
        }
        self.translations = next;
        self.bitmaps.retain(|lang, _| languages.contains(lang));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn scroll_speed_clamps_on_construction() {
        assert_eq!(ScrollSpeed::new(0), ScrollSpeed::MIN);
        assert_eq!(ScrollSpeed::new(7).get(), 7);
        assert_eq!(ScrollSpeed::new(42), ScrollSpeed::MAX);
    }

    #[test]
    fn scroll_speed_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<ScrollSpeed>("5").is_ok());
        assert!(serde_json::from_str::<ScrollSpeed>("0").is_err());
        assert!(serde_json::from_str::<ScrollSpeed>("11").is_err());
    }

    #[test]
    fn display_settings_use_legacy_defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.scroll_type, ScrollType::LeftToRight);
        assert_eq!(settings.position, Position::Center);
        assert_eq!(settings.scroll_speed.get(), 5);
    }

    #[test]
    fn scroll_type_serializes_kebab_case() {
        let json = serde_json::to_value(ScrollType::LeftToRight).unwrap();
        assert_eq!(json, serde_json::Value::String("left-to-right".into()));
    }

    #[test]
    fn from_pixels_joins_with_commas() {
        let record = BitmapRecord::from_pixels(&[1, 0, 255], 3, 1);
        assert_eq!(record.bitmap, "1,0,255");
        assert_eq!((record.width, record.height), (3, 1));
        assert!(!record.is_fallback());
    }

    #[test]
    fn fallback_echoes_text_with_zero_dimensions() {
        let record = BitmapRecord::fallback("UPPAL");
        assert_eq!(record.bitmap, "UPPAL");
        assert!(record.is_fallback());
    }

    #[test]
    fn retranslate_preserves_retained_and_drops_removed() {
        let mut slot = TextConfig::new(&[Language::En, Language::Hi], DisplaySettings::default());
        slot.translations.insert(Language::En, "UPPAL".to_string());
        slot.bitmaps.insert(Language::Hi, BitmapRecord::fallback("x"));

        slot.retranslate(&[Language::En, Language::Te]);

        assert_eq!(slot.translation(Language::En), Some("UPPAL"));
        assert_eq!(slot.translation(Language::Te), Some(""));
        assert_eq!(slot.translation(Language::Hi), None);
        assert!(slot.bitmaps.is_empty(), "stale bitmaps must drop");
    }

    #[test]
    fn empty_bitmaps_are_skipped_in_json() {
        let slot = TextConfig::new(&[Language::En], DisplaySettings::default());
        let json = serde_json::to_value(&slot).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("translations"));
        assert!(object.contains_key("display"));
        assert!(!object.contains_key("bitmaps"), "empty bitmaps must vanish");
    }
}
