// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headsign Config: the route display configuration model.
//!
//! This crate holds the data shapes and shape-preserving operations behind
//! a transit vehicle's LED display boards: routes, the fixed language
//! catalog, per-screen formats with their text slots, per-slot display
//! settings and bitmap records, and the editing session that keeps all of
//! them consistent. It knows nothing about HTTP, files, or rendering —
//! services and exporters live in sibling crates and consume these types.
//!
//! The model leans on the type system for its invariants:
//! - [`Screen`] is an enum whose variants carry exactly the slots their
//!   format defines, so a screen can never hold stale slots from a
//!   previous format.
//! - [`Language`] is a closed catalog whose code, name, and font-file
//!   lookups are total functions, so a configuration can never reference
//!   a language without a font mapping.
//! - [`LanguageSelection`] is clamped to 1–3 entries; violating mutations
//!   are no-ops that report "nothing changed".
//! - Slots are addressed by [`SlotAddress`] (screen × slot), never by
//!   string paths.
//!
//! ## Minimal example
//!
//! ```rust
//! use headsign_config::{
//!     DraftConfig, Language, Route, ScreenFormat, ScreenKind, SlotAddress, TextSlot,
//! };
//!
//! let route = Route {
//!     route_number: "300".into(),
//!     source: "Uppal".into(),
//!     destination: "Mehdipatnam".into(),
//!     ..Route::default()
//! };
//!
//! // A session starts with one language and the default screen layout.
//! let mut draft = DraftConfig::new(route, Language::En);
//! assert_eq!(draft.screens().front.format(), ScreenFormat::Two);
//!
//! // Route text was normalized on the way in.
//! assert_eq!(draft.route().source, "UPPAL");
//!
//! // Adding a language resizes every slot's translation map in place.
//! draft.select_language(Language::Hi);
//! let addr = SlotAddress::new(ScreenKind::Front, TextSlot::Text);
//! assert_eq!(draft.screens().slot(addr).unwrap().translations.len(), 2);
//!
//! // Slots are addressed with types, not string paths.
//! draft.set_translation(addr, Language::En, "UPPAL - MEHDIPATNAM");
//! let config = draft.to_config();
//! assert_eq!(
//!     config.screens().slot(addr).unwrap().translation(Language::En),
//!     Some("UPPAL - MEHDIPATNAM"),
//! );
//! ```
//!
//! ## Serialization
//!
//! Every record type serializes with `serde` into the exported-record
//! schema: camelCase keys, screens as `{"format": …, "texts": {…}}`
//! adjacent tagging, languages as their wire codes, and `bitmaps` omitted
//! while empty (they are derived state, authoritative only after the
//! assembler's finalize pass).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod draft;
mod language;
mod route;
mod screen;
mod selection;
mod text;

pub use config::{DisplayConfig, ResolvedConfig, ScreenConfig};
pub use draft::DraftConfig;
pub use language::Language;
pub use route::{Route, RouteError, RouteField, Separation};
pub use screen::{Screen, ScreenFormat, ScreenKind, Screens, SlotAddress, TextSlot};
pub use selection::LanguageSelection;
pub use text::{
    BitmapRecord, DisplaySettings, Position, ScrollSpeed, ScrollType, SpeedOutOfRange, TextConfig,
};
