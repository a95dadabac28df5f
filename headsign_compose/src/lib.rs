// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headsign Compose: placeholder text composition from route fields.
//!
//! Display boards usually show some combination of a route's fields —
//! `300 - UPPAL - MEHDIPATNAM`, say — and typing those out per slot and
//! per screen is busywork. This crate offers the fixed catalog of
//! field combinations ([`PlaceholderPattern`]) and a pure composition
//! function ([`compose`]) that expands one against a route: look up each
//! field, drop the empty ones, join the survivors with `" - "`, uppercase
//! the result.
//!
//! Composition only *prefills*: [`prefill`] writes the composed string
//! into a draft slot once, and nothing ever overwrites the user's later
//! edits automatically.
//!
//! ## Minimal example
//!
//! ```rust
//! use headsign_compose::{compose, PlaceholderPattern};
//! use headsign_config::Route;
//!
//! let route = Route {
//!     route_number: "300".into(),
//!     source: "UPPAL".into(),
//!     destination: "MEHDIPATNAM".into(),
//!     ..Route::default()
//! };
//!
//! assert_eq!(
//!     compose(PlaceholderPattern::SourceDestination, &route),
//!     "UPPAL - MEHDIPATNAM",
//! );
//!
//! // Empty fields drop out without leaving a dangling separator.
//! assert_eq!(
//!     compose(PlaceholderPattern::RouteNumberSourceDestinationVia, &route),
//!     "300 - UPPAL - MEHDIPATNAM",
//! );
//!
//! // Patterns parse from their dash-joined names.
//! let pattern: PlaceholderPattern = "source-via-destination".parse().unwrap();
//! assert_eq!(pattern, PlaceholderPattern::SourceViaDestination);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use headsign_config::{DraftConfig, Language, Route, RouteField, SlotAddress};

/// One of the fixed dash-joined field combinations a board can show.
///
/// The catalog is closed: patterns are parsed against it with
/// [`FromStr`], and unknown combinations are rejected rather than
/// interpreted, so a typo'd pattern cannot silently compose to nonsense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaceholderPattern {
    /// Just the route number.
    RouteNumber,
    /// Just the origin stop.
    Source,
    /// Just the destination stop.
    Destination,
    /// Just the via stops.
    Via,
    /// Origin and destination.
    SourceDestination,
    /// Destination first, for return-direction boards.
    DestinationSource,
    /// Origin, via stops, destination.
    SourceViaDestination,
    /// Number, origin, destination.
    RouteNumberSourceDestination,
    /// Number, origin, destination, via stops.
    RouteNumberSourceDestinationVia,
}

impl PlaceholderPattern {
    /// Every pattern in the catalog.
    pub const ALL: [Self; 9] = [
        Self::RouteNumber,
        Self::Source,
        Self::Destination,
        Self::Via,
        Self::SourceDestination,
        Self::DestinationSource,
        Self::SourceViaDestination,
        Self::RouteNumberSourceDestination,
        Self::RouteNumberSourceDestinationVia,
    ];

    /// The route fields this pattern expands to, in display order.
    #[must_use]
    pub const fn fields(self) -> &'static [RouteField] {
        match self {
            Self::RouteNumber => &[RouteField::RouteNumber],
            Self::Source => &[RouteField::Source],
            Self::Destination => &[RouteField::Destination],
            Self::Via => &[RouteField::Via],
            Self::SourceDestination => &[RouteField::Source, RouteField::Destination],
            Self::DestinationSource => &[RouteField::Destination, RouteField::Source],
            Self::SourceViaDestination => {
                &[RouteField::Source, RouteField::Via, RouteField::Destination]
            }
            Self::RouteNumberSourceDestination => &[
                RouteField::RouteNumber,
                RouteField::Source,
                RouteField::Destination,
            ],
            Self::RouteNumberSourceDestinationVia => &[
                RouteField::RouteNumber,
                RouteField::Source,
                RouteField::Destination,
                RouteField::Via,
            ],
        }
    }

    /// The pattern's dash-joined name, e.g. `"source-via-destination"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RouteNumber => "routeNumber",
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Via => "via",
            Self::SourceDestination => "source-destination",
            Self::DestinationSource => "destination-source",
            Self::SourceViaDestination => "source-via-destination",
            Self::RouteNumberSourceDestination => "routeNumber-source-destination",
            Self::RouteNumberSourceDestinationVia => "routeNumber-source-destination-via",
        }
    }
}

impl fmt::Display for PlaceholderPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pattern name that is not in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown placeholder pattern `{0}`")]
pub struct UnknownPattern(pub String);

impl FromStr for PlaceholderPattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| UnknownPattern(String::from(s)))
    }
}

/// Composes `pattern` against `route`.
///
/// Each field the pattern names is looked up on the route; empty fields
/// drop out entirely (no dangling separators), the survivors are joined
/// with `" - "`, and the result is uppercased. Pure — no side effects.
#[must_use]
pub fn compose(pattern: PlaceholderPattern, route: &Route) -> String {
    let mut out = String::new();
    for field in pattern.fields() {
        let value = route.field(*field);
        if value.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(" - ");
        }
        out.push_str(value);
    }
    out.to_uppercase()
}

/// Prefills the draft slot at `addr` for `language` with the composed
/// placeholder.
///
/// This is a one-shot write through [`DraftConfig::set_translation`]; the
/// user's subsequent edits are never overwritten by the generator.
/// Returns `false` (and writes nothing) when the slot or language is not
/// active in the draft.
pub fn prefill(
    draft: &mut DraftConfig,
    addr: SlotAddress,
    language: Language,
    pattern: PlaceholderPattern,
) -> bool {
    let text = compose(pattern, draft.route());
    draft.set_translation(addr, language, &text)
}
