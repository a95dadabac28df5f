// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headsign Matrix: the simulated LED-matrix preview.
//!
//! This crate is the local stand-in for a physical display board: an 8x8
//! glyph table ([`glyph`]), a 16×16 monochrome [`Frame`] that lays glyphs
//! out the way the board does (8px pitch, hard clip at the right edge),
//! and a pure [`ScrollState`] machine the host ticks to animate the strip.
//! None of it touches the production bitmap path — real boards render
//! bitmaps produced by the rasterization service; this exists so an
//! operator can eyeball a configuration before submitting it.
//!
//! The crate is renderer-agnostic and timer-free. Hosts own the tick
//! (speeds map to suggested periods via [`frame_interval`]), draw frames
//! however they like ([`Frame::is_lit`], [`Frame::rows`], or the
//! [`Frame::to_ascii`] dump), and cancel their tick on teardown.
//!
//! ## Minimal example
//!
//! ```rust
//! use headsign_matrix::{Frame, ScrollState};
//!
//! let text = "300 UPPAL";
//! let mut scroll = ScrollState::for_text(text);
//!
//! // First frame: the first two characters, hard-clipped at 16px.
//! let frame = Frame::render_window(text, scroll.offset());
//! assert_eq!(frame, Frame::render_text(text));
//!
//! // One tick later the strip has moved one pixel left.
//! let offset = scroll.advance();
//! assert_eq!(offset, 1);
//! let _next = Frame::render_window(text, offset);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod font;
mod frame;
mod scroll;

pub use font::{GLYPH_SIZE, glyph, is_mapped};
pub use frame::Frame;
pub use scroll::{ScrollState, frame_interval};
