use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in 5x7 bitmap font.
///
/// Covers the glyph set the renderer emits: digits, point, dash, space
/// and the letters of the token labels. Each glyph is seven rows of
/// five bits, bit 4 being the leftmost column. Unknown glyphs advance
/// the pen without drawing.
pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
pub const GLYPH_SPACING: u32 = 1;

static GLYPHS: Lazy<HashMap<char, [u8; 7]>> = Lazy::new(|| {
    HashMap::from([
        (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
        ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
        ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
        ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
        ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
        ('2', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F]),
        ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
        ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
        ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
        ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
        ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
        ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
        ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
        ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
        ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
        ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
        ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
        ('e', [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E]),
        ('k', [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12]),
        ('n', [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11]),
        ('o', [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E]),
        ('p', [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10]),
        ('r', [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10]),
        ('s', [0x00, 0x00, 0x0F, 0x10, 0x0E, 0x01, 0x1E]),
        ('t', [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06]),
        ('u', [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D]),
        ('v', [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ])
});

/// Look up the bitmap for a character
pub fn glyph(c: char) -> Option<&'static [u8; 7]> {
    GLYPHS.get(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_glyphs_are_covered() {
        for c in "9.0909 TokenB output 16.6667 TokenA".chars() {
            assert!(glyph(c).is_some(), "missing glyph {:?}", c);
        }
    }

    #[test]
    fn test_unknown_glyph_is_none() {
        assert!(glyph('€').is_none());
        assert!(glyph('z').is_none());
    }

    #[test]
    fn test_glyphs_fit_five_columns() {
        for c in "0123456789.- ABRTeknoprstuv".chars() {
            let Some(rows) = glyph(c) else {
                panic!("missing glyph {:?}", c);
            };
            for row in rows {
                assert!(*row <= 0x1F);
            }
        }
    }
}
