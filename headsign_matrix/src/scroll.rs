// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-ticked scroll state machine.

use core::time::Duration;

use headsign_config::ScrollSpeed;

use crate::font::GLYPH_SIZE;

/// Scroll position for one text strip, advanced by host ticks.
///
/// The machine owns no timer: the host drives [`ScrollState::advance`]
/// from its own periodic tick (see [`frame_interval`] for a suggested
/// period) and must cancel that tick on teardown. Dropping the state
/// drops every bit of animation bookkeeping with it, so a leaked timer is
/// a host bug, not lingering state here.
///
/// Each tick advances the offset one pixel, wrapping modulo
/// `text length × 8 + 8` as a safety bound and snapping back to zero once
/// the offset reaches the text's pixel length — the strip scrolls fully
/// into view, then restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    text_px: usize,
    cycle: usize,
}

impl ScrollState {
    /// Creates scroll state for a strip of `char_count` characters.
    #[must_use]
    pub const fn new(char_count: usize) -> Self {
        let text_px = char_count * GLYPH_SIZE;
        Self {
            offset: 0,
            text_px,
            cycle: text_px + GLYPH_SIZE,
        }
    }

    /// Creates scroll state sized for `text`.
    #[must_use]
    pub fn for_text(text: &str) -> Self {
        Self::new(text.chars().count())
    }

    /// The current offset in pixels.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The pixel length of the strip this state was sized for.
    #[must_use]
    pub const fn text_px(&self) -> usize {
        self.text_px
    }

    /// Advances one tick and returns the new offset.
    pub fn advance(&mut self) -> usize {
        self.offset = (self.offset + 1) % self.cycle;
        if self.offset >= self.text_px {
            self.offset = 0;
        }
        self.offset
    }

    /// Snaps back to the start of the strip.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Suggests a tick period for `speed`.
///
/// Speed 1 maps to 500ms per pixel and speed 10 to 50ms; the scale is
/// linear in between. Advisory only — boards do not promise pixel-exact
/// scroll timing, and hosts may tick however suits their frame scheduling.
#[must_use]
pub fn frame_interval(speed: ScrollSpeed) -> Duration {
    Duration::from_millis(550 - 50 * u64::from(speed.get()))
}
