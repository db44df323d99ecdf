//! Metrics and encoding for the built-in Helvetica face.
//!
//! The document renderer uses the base-14 Helvetica font with WinAnsi
//! encoding, so measurement and output share one code table. Characters
//! outside the encoding render as `?`.

/// Glyph advance widths for codes 32..=126, in 1/1000 em (Helvetica AFM).
#[rustfmt::skip]
const WIDTHS: [u16; 95] = [
	278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
	556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
	1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
	667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
	333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
	556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance width for codes without a table entry.
const DEFAULT_WIDTH: u16 = 556;

/// Map a char to its output byte. ASCII and Latin-1 map through unchanged
/// (Latin-1 letters keep their codes under WinAnsi); tabs become spaces;
/// everything else becomes `?`.
pub(crate) fn encode_char(c: char) -> u8 {
	if c == '\t' {
		return b' ';
	}

	match u32::from(c) {
		code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
		_ => b'?',
	}
}

fn char_width_units(c: char) -> u16 {
	match encode_char(c) {
		byte @ 0x20..=0x7E => WIDTHS[usize::from(byte) - 0x20],
		_ => DEFAULT_WIDTH,
	}
}

/// Width of `text` at `size` points.
pub(crate) fn text_width(text: &str, size: f64) -> f64 {
	let units: u32 = text.chars().map(|c| u32::from(char_width_units(c))).sum();
	f64::from(units) * size / 1000.0
}

/// Width of a single char at `size` points.
pub(crate) fn char_width(c: char, size: f64) -> f64 {
	f64::from(char_width_units(c)) * size / 1000.0
}
