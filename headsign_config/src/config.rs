// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled record shape shared by drafts, exports, and submissions.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::{Language, Route, Screens, SlotAddress};

/// The `displayConfig` envelope inside a route record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Per-screen formats and slots.
    pub screens: Screens,
}

/// A complete route display record: the route plus its four screens.
///
/// This is the shape that exports, previews, and the persistence call all
/// consume. Drafts produce it via [`DraftConfig::to_config`]; the
/// assembler's finalize pass turns it into a [`ResolvedConfig`] with
/// bitmaps populated.
///
/// [`DraftConfig::to_config`]: crate::DraftConfig::to_config
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// The route this configuration displays.
    pub route: Route,
    /// Screen configuration envelope.
    pub display_config: ScreenConfig,
}

impl DisplayConfig {
    /// Creates a record from its parts.
    #[must_use]
    pub const fn new(route: Route, screens: Screens) -> Self {
        Self {
            route,
            display_config: ScreenConfig { screens },
        }
    }

    /// Shorthand for the screen set.
    #[must_use]
    pub const fn screens(&self) -> &Screens {
        &self.display_config.screens
    }
}

/// A display configuration whose bitmaps have been resolved.
///
/// Produced only by the assembler's finalize pass, so holding one is proof
/// the bitmap maps are authoritative. `fallbacks` lists the
/// `(slot, language)` pairs whose rasterization degraded to the raw-text
/// record, letting callers tell full from partial success without
/// re-scanning every record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    config: DisplayConfig,
    fallbacks: Vec<(SlotAddress, Language)>,
}

impl ResolvedConfig {
    /// Wraps a finalized configuration with its fallback report.
    #[must_use]
    pub const fn new(config: DisplayConfig, fallbacks: Vec<(SlotAddress, Language)>) -> Self {
        Self { config, fallbacks }
    }

    /// The resolved record.
    #[must_use]
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Unwraps the resolved record.
    #[must_use]
    pub fn into_config(self) -> DisplayConfig {
        self.config
    }

    /// The `(slot, language)` pairs that degraded to fallback records.
    #[must_use]
    pub fn fallbacks(&self) -> &[(SlotAddress, Language)] {
        &self.fallbacks
    }

    /// Returns `true` if every pair rasterized successfully.
    #[must_use]
    pub fn is_fully_rasterized(&self) -> bool {
        self.fallbacks.is_empty()
    }
}
