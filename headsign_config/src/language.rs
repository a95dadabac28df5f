// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed language catalog display boards can carry text in.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One language from the fixed board catalog.
///
/// The catalog is closed on purpose: every variant carries a stable wire
/// code (its serialized form), an English display name, and the font file
/// the rasterization service renders it with — all as total functions. A
/// configuration therefore can never reference a language that lacks a font
/// mapping; that failure mode is unrepresentable rather than handled.
///
/// Variant order is catalog order and drives the `Ord` impl, so ordered
/// maps keyed by `Language` serialize deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (`en`).
    En,
    /// Hindi (`hi`).
    Hi,
    /// Telugu (`te`).
    Te,
    /// Tamil (`ta`).
    Ta,
    /// Kannada (`kn`).
    Kn,
    /// Malayalam (`ml`).
    Ml,
    /// Marathi (`mr`).
    Mr,
    /// Gujarati (`gu`).
    Gu,
    /// Punjabi (`pa`).
    Pa,
    /// Bengali (`bn`).
    Bn,
    /// Odia (`or`).
    Or,
    /// Assamese (`as`).
    As,
    /// Urdu (`ur`).
    Ur,
    /// Sindhi (`sd`).
    Sd,
    /// Kashmiri (`ks`).
    Ks,
    /// Sanskrit (`sa`).
    Sa,
    /// Nepali (`ne`).
    Ne,
    /// Konkani (`kok`).
    Kok,
    /// Maithili (`mai`).
    Mai,
    /// Bhojpuri (`bho`).
    Bho,
}

impl Language {
    /// Every catalog entry, in catalog order.
    pub const ALL: [Self; 20] = [
        Self::En,
        Self::Hi,
        Self::Te,
        Self::Ta,
        Self::Kn,
        Self::Ml,
        Self::Mr,
        Self::Gu,
        Self::Pa,
        Self::Bn,
        Self::Or,
        Self::As,
        Self::Ur,
        Self::Sd,
        Self::Ks,
        Self::Sa,
        Self::Ne,
        Self::Kok,
        Self::Mai,
        Self::Bho,
    ];

    /// Returns the wire code, e.g. `"en"` or `"kok"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Te => "te",
            Self::Ta => "ta",
            Self::Kn => "kn",
            Self::Ml => "ml",
            Self::Mr => "mr",
            Self::Gu => "gu",
            Self::Pa => "pa",
            Self::Bn => "bn",
            Self::Or => "or",
            Self::As => "as",
            Self::Ur => "ur",
            Self::Sd => "sd",
            Self::Ks => "ks",
            Self::Sa => "sa",
            Self::Ne => "ne",
            Self::Kok => "kok",
            Self::Mai => "mai",
            Self::Bho => "bho",
        }
    }

    /// Returns the English display name shown in pickers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Te => "Telugu",
            Self::Ta => "Tamil",
            Self::Kn => "Kannada",
            Self::Ml => "Malayalam",
            Self::Mr => "Marathi",
            Self::Gu => "Gujarati",
            Self::Pa => "Punjabi",
            Self::Bn => "Bengali",
            Self::Or => "Odia",
            Self::As => "Assamese",
            Self::Ur => "Urdu",
            Self::Sd => "Sindhi",
            Self::Ks => "Kashmiri",
            Self::Sa => "Sanskrit",
            Self::Ne => "Nepali",
            Self::Kok => "Konkani",
            Self::Mai => "Maithili",
            Self::Bho => "Bhojpuri",
        }
    }

    /// Returns the font file the rasterization service renders this
    /// language with.
    ///
    /// Several languages share a script and therefore a font file (for
    /// example Marathi, Nepali, and Sanskrit all use Devanagari).
    #[must_use]
    pub const fn font_file(self) -> &'static str {
        match self {
            Self::En => "NotoSans-Regular.ttf",
            Self::Hi | Self::Mr | Self::Sa | Self::Ne | Self::Kok | Self::Mai | Self::Bho => {
                "NotoSansDevanagari-Regular.ttf"
            }
            Self::Te => "NotoSansTelugu-Regular.ttf",
            Self::Ta => "NotoSansTamil-Regular.ttf",
            Self::Kn => "NotoSansKannada-Regular.ttf",
            Self::Ml => "NotoSansMalayalam-Regular.ttf",
            Self::Gu => "NotoSansGujarati-Regular.ttf",
            Self::Pa => "NotoSansGurmukhi-Regular.ttf",
            Self::Bn | Self::As => "NotoSansBengali-Regular.ttf",
            Self::Or => "NotoSansOriya-Regular.ttf",
            Self::Ur | Self::Sd | Self::Ks => "NotoNastaliqUrdu-Regular.ttf",
        }
    }

    /// Looks a language up by its wire code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
