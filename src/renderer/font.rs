// 3x5 bitmap glyphs for the debug overlay (coordinates and numbers only).

pub const GLYPH_W: i32 = 3;
pub const GLYPH_H: i32 = 5;
/// Horizontal distance between glyph origins.
pub const ADVANCE: i32 = GLYPH_W + 1;

/// Five rows per glyph, bit 2 = leftmost pixel.
pub fn glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        _ => [0; 5],
    }
}

/// Lit pixels of `c` as offsets from its top-left corner.
pub fn pixels(c: char) -> impl Iterator<Item = (i32, i32)> {
    let rows = glyph(c);
    (0..GLYPH_H).flat_map(move |gy| {
        (0..GLYPH_W)
            .filter(move |gx| (rows[gy as usize] >> (GLYPH_W - 1 - gx)) & 1 == 1)
            .map(move |gx| (gx, gy))
    })
}
