// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 16×16 preview frame and glyph layout.

use alloc::string::String;

use crate::font::{GLYPH_SIZE, glyph};

/// One 16×16 monochrome frame of the simulated LED matrix.
///
/// Rows are `u16` bitmasks with x = 0 at the most significant bit. Glyphs
/// occupy the top 8-pixel band, packed left-to-right at 8px pitch; the
/// lower band stays dark, matching the board preview this simulates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    rows: [u16; Self::HEIGHT],
}

impl Frame {
    /// Frame width in pixels.
    pub const WIDTH: usize = 16;
    /// Frame height in pixels.
    pub const HEIGHT: usize = 16;

    /// An all-dark frame.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [0; Self::HEIGHT],
        }
    }

    /// Renders the head of `text` into a frame.
    ///
    /// Glyphs are packed at 8px pitch from the left edge; once the next
    /// cell would start past the right edge, rendering stops. The clip is
    /// hard — no wraparound — so at most two characters are ever visible.
    #[must_use]
    pub fn render_text(text: &str) -> Self {
        let mut frame = Self::new();
        let mut x_offset = 0_usize;
        for c in text.chars() {
            frame.blit(glyph(c), x_offset);
            x_offset += GLYPH_SIZE;
            if x_offset >= Self::WIDTH {
                break;
            }
        }
        frame
    }

    /// Renders the 16px window of `text`'s glyph strip starting at pixel
    /// `offset`.
    ///
    /// The strip lays every glyph out at 8px pitch; the window shows strip
    /// pixels `offset..offset + 16`, with anything past the strip's end
    /// dark. Offset 0 matches [`Frame::render_text`], and advancing the
    /// offset one pixel per tick scrolls the text leftward.
    #[must_use]
    pub fn render_window(text: &str, offset: usize) -> Self {
        let mut frame = Self::new();
        for (i, c) in text.chars().enumerate() {
            let cell_start = i * GLYPH_SIZE;
            if cell_start + GLYPH_SIZE <= offset {
                continue;
            }
            if cell_start >= offset + Self::WIDTH {
                break;
            }
            let glyph = glyph(c);
            for (y, row) in glyph.iter().enumerate() {
                for gx in 0..GLYPH_SIZE {
                    if (row >> (GLYPH_SIZE - 1 - gx)) & 1 == 0 {
                        continue;
                    }
                    let strip_x = cell_start + gx;
                    if strip_x < offset {
                        continue;
                    }
                    let x = strip_x - offset;
                    if x < Self::WIDTH {
                        frame.rows[y] |= 1 << (Self::WIDTH - 1 - x);
                    }
                }
            }
        }
        frame
    }

    /// Returns `true` if the pixel at (`x`, `y`) is lit.
    ///
    /// Out-of-range coordinates are dark rather than an error.
    #[must_use]
    pub const fn is_lit(&self, x: usize, y: usize) -> bool {
        if x >= Self::WIDTH || y >= Self::HEIGHT {
            return false;
        }
        (self.rows[y] >> (Self::WIDTH - 1 - x)) & 1 == 1
    }

    /// The raw row bitmasks, x = 0 at the most significant bit.
    #[must_use]
    pub const fn rows(&self) -> &[u16; Self::HEIGHT] {
        &self.rows
    }

    /// Renders the frame as ASCII art, `#` for lit and `.` for dark, one
    /// line per row. Handy for demos and failing-test output.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(Self::HEIGHT * (Self::WIDTH + 1));
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                out.push(if self.is_lit(x, y) { '#' } else { '.' });
            }
            if y + 1 < Self::HEIGHT {
                out.push('\n');
            }
        }
        out
    }

    /// Blits an 8x8 glyph with its left edge at `x_offset`.
    fn blit(&mut self, glyph: [u8; 8], x_offset: usize) {
        debug_assert!(x_offset + GLYPH_SIZE <= Self::WIDTH, "glyph cell past the frame");
        for (y, row) in glyph.iter().enumerate() {
            self.rows[y] |= u16::from(*row) << (GLYPH_SIZE - x_offset);
        }
    }
}
