//! 5x7 bitmap glyphs
//!
//! A tiny built-in font so indicator labels and host tooltips can be
//! measured and drawn without a font asset. Lookup is case-insensitive;
//! characters outside the table render as a solid block.

use crate::placement::Size;

/// Glyph width in font pixels, before spacing
pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance per character in font pixels
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

type Rows = [u8; GLYPH_HEIGHT as usize];

const UNKNOWN: Rows = [0b11111; GLYPH_HEIGHT as usize];

#[rustfmt::skip]
const GLYPHS: &[(char, Rows)] = &[
    ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]),
    ('D', [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]),
    ('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]),
    ('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('I', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1F]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]),
    ('M', [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
    ('S', [0x0E, 0x11, 0x10, 0x0E, 0x01, 0x11, 0x0E]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x11, 0x15, 0x1B, 0x11]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('2', [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F]),
    ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
    ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
    (':', [0x00, 0x00, 0x04, 0x00, 0x04, 0x00, 0x00]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
    (',', [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08]),
    ('\'', [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]),
    ('(', [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02]),
    (')', [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08]),
    ('✓', [0x00, 0x01, 0x02, 0x12, 0x14, 0x08, 0x00]),
    (' ', [0x00; 7]),
];

/// Bit rows for `c`, top to bottom; bit 4 is the leftmost column
pub fn glyph(c: char) -> Rows {
    let upper = c.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, rows)| *rows)
        .unwrap_or(UNKNOWN)
}

/// Screen extent of `text` drawn at `scale`
pub fn measure_text(text: &str, scale: i32) -> Size {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return Size::new(0, 0);
    }
    // The trailing spacing column after the last glyph is not part of the extent.
    Size::new((chars * GLYPH_ADVANCE - 1) * scale, GLYPH_HEIGHT * scale)
}

/// Visits every lit font pixel of `text` as `(column, row)` in font pixels
pub fn for_each_pixel(text: &str, mut visit: impl FnMut(i32, i32)) {
    for (index, c) in text.chars().enumerate() {
        let origin = index as i32 * GLYPH_ADVANCE;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    visit(origin + col, row as i32);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
    }

    #[test]
    fn test_unknown_glyph_is_solid() {
        assert_eq!(glyph('#'), UNKNOWN);
    }

    #[test]
    fn test_measure_text() {
        assert_eq!(measure_text("", 2), Size::new(0, 0));
        assert_eq!(measure_text("I", 1), Size::new(5, 7));
        assert_eq!(measure_text("Carp", 2), Size::new(46, 14));
    }

    #[test]
    fn test_pixels_stay_inside_measured_extent() {
        let text = "! Not Donated";
        let extent = measure_text(text, 1);
        let mut lit = 0;
        for_each_pixel(text, |x, y| {
            assert!(x >= 0 && x < extent.width);
            assert!(y >= 0 && y < extent.height);
            lit += 1;
        });
        assert!(lit > 0);
    }
}
