// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed 8x8 preview font.

/// Width and height of one glyph cell in pixels.
pub const GLYPH_SIZE: usize = 8;

/// Returns the 8x8 bitmask for `c`, one byte per row, MSB-first.
///
/// Input is folded to ASCII uppercase before lookup. The table covers
/// `A..=Z`, `0..=9`, space, `-`, `.`, and `,` — deliberately partial,
/// preview-only coverage; anything unmapped (including every non-Latin
/// script the boards actually run) renders as the blank glyph. Production
/// bitmaps come from the rasterization service, never from this table.
#[must_use]
pub const fn glyph(c: char) -> [u8; 8] {
    match c.to_ascii_uppercase() {
        'A' => [0x7E, 0x41, 0x41, 0x7E, 0x41, 0x41, 0x41, 0x41],
        'B' => [0x7F, 0x41, 0x41, 0x7F, 0x41, 0x41, 0x7F, 0x00],
        'C' => [0x3E, 0x41, 0x40, 0x40, 0x40, 0x41, 0x3E, 0x00],
        'D' => [0x7C, 0x42, 0x41, 0x41, 0x41, 0x42, 0x7C, 0x00],
        'E' => [0x7F, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x7F, 0x00],
        'F' => [0x7F, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00],
        'G' => [0x3E, 0x41, 0x40, 0x4F, 0x41, 0x41, 0x3E, 0x00],
        'H' => [0x41, 0x41, 0x41, 0x7F, 0x41, 0x41, 0x41, 0x00],
        'I' => [0x3E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00],
        'J' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x44, 0x38, 0x00],
        'K' => [0x41, 0x42, 0x44, 0x78, 0x44, 0x42, 0x41, 0x00],
        'L' => [0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7F, 0x00],
        'M' => [0x41, 0x63, 0x55, 0x49, 0x41, 0x41, 0x41, 0x00],
        'N' => [0x41, 0x61, 0x51, 0x49, 0x45, 0x43, 0x41, 0x00],
        'O' => [0x3E, 0x41, 0x41, 0x41, 0x41, 0x41, 0x3E, 0x00],
        'P' => [0x7E, 0x41, 0x41, 0x7E, 0x40, 0x40, 0x40, 0x00],
        'Q' => [0x3E, 0x41, 0x41, 0x41, 0x45, 0x42, 0x3D, 0x00],
        'R' => [0x7E, 0x41, 0x41, 0x7E, 0x44, 0x42, 0x41, 0x00],
        'S' => [0x3E, 0x41, 0x40, 0x3E, 0x01, 0x41, 0x3E, 0x00],
        'T' => [0x7F, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00],
        'U' => [0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x3E, 0x00],
        'V' => [0x41, 0x41, 0x41, 0x41, 0x22, 0x14, 0x08, 0x00],
        'W' => [0x41, 0x41, 0x41, 0x49, 0x55, 0x63, 0x41, 0x00],
        'X' => [0x41, 0x22, 0x14, 0x08, 0x14, 0x22, 0x41, 0x00],
        'Y' => [0x41, 0x22, 0x14, 0x08, 0x08, 0x08, 0x08, 0x00],
        'Z' => [0x7F, 0x02, 0x04, 0x08, 0x10, 0x20, 0x7F, 0x00],
        '0' => [0x3E, 0x43, 0x45, 0x49, 0x51, 0x61, 0x3E, 0x00],
        '1' => [0x08, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00],
        '2' => [0x3E, 0x41, 0x01, 0x3E, 0x40, 0x40, 0x7F, 0x00],
        '3' => [0x3E, 0x41, 0x01, 0x1E, 0x01, 0x41, 0x3E, 0x00],
        '4' => [0x04, 0x0C, 0x14, 0x24, 0x7F, 0x04, 0x04, 0x00],
        '5' => [0x7F, 0x40, 0x7E, 0x01, 0x01, 0x41, 0x3E, 0x00],
        '6' => [0x3E, 0x40, 0x40, 0x7E, 0x41, 0x41, 0x3E, 0x00],
        '7' => [0x7F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00],
        '8' => [0x3E, 0x41, 0x41, 0x3E, 0x41, 0x41, 0x3E, 0x00],
        '9' => [0x3E, 0x41, 0x41, 0x3F, 0x01, 0x01, 0x3E, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x08, 0x10],
        _ => [0x00; 8],
    }
}

/// Returns `true` if `c` has a real glyph (anything but the blank
/// fallback), after the same uppercase fold as [`glyph`].
#[must_use]
pub fn is_mapped(c: char) -> bool {
    c.to_ascii_uppercase() == ' ' || glyph(c) != [0x00; 8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_matches_the_board_font() {
        // The canonical 'A' the preview has always drawn.
        assert_eq!(
            glyph('A'),
            [
                0b0111_1110,
                0b0100_0001,
                0b0100_0001,
                0b0111_1110,
                0b0100_0001,
                0b0100_0001,
                0b0100_0001,
                0b0100_0001,
            ]
        );
    }

    #[test]
    fn lookup_folds_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn unmapped_characters_fall_back_to_blank() {
        assert_eq!(glyph('!'), [0x00; 8]);
        assert_eq!(glyph('ह'), [0x00; 8]);
        assert!(!is_mapped('!'));
        assert!(is_mapped(' '), "space is a real glyph, not a fallback");
        assert!(is_mapped('7'));
    }

    #[test]
    fn glyphs_leave_the_left_column_clear() {
        // Bit 7 is the inter-character gap; every printable glyph keeps it
        // empty so adjacent cells never touch.
        for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-.,".chars() {
            for row in glyph(c) {
                assert_eq!(row & 0x80, 0, "glyph {c} bleeds into the gap column");
            }
        }
    }
}
