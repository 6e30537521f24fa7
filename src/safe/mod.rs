//! Conversion between raw data and its "safe" form: printable ASCII, with everything else
//! rendered as a two-letter backslash escape (`\n`) or a hex escape (`\xff`).
//!
//! Literal backslashes are always doubled in the safe form, and every escape introduced by the
//! encoder starts with a single backslash, so both directions are a single forward scan.

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_all, decode_bytes, Binary};
pub use encode::{encode, encode_all, encode_bytes};

pub const ESCAPE: u8 = b'\\';

/// Second byte of a hex escape, followed by exactly two hex digits
pub const HEX_MARKER: u8 = b'x';

/// Text-mode encoding leaves code points from here upwards as they are, assuming they are
/// displayable. Byte-mode encoding has no such exemption.
pub const DISPLAYABLE_FROM: u32 = 160;

/// Control characters with a two-letter escape, paired with their escape letter
pub const SLASH_REPLACEMENTS: [(u8, u8); 5] = [
	(b'\t', b't'),
	(b'\n', b'n'),
	(b'\r', b'r'),
	(0x0b, b'v'),
	(0x0c, b'f'),
];

/// Printable ASCII other than the backslash, i.e. bytes that appear as-is in the safe form
pub fn is_safe(byte: u8) -> bool {
	matches!(byte, b' '..=b'~') && byte != ESCAPE
}

pub fn slash_letter(control: u8) -> Option<u8> {
	SLASH_REPLACEMENTS
		.iter()
		.find(|(c, _)| *c == control)
		.map(|(_, letter)| *letter)
}

pub fn slash_control(letter: u8) -> Option<u8> {
	SLASH_REPLACEMENTS
		.iter()
		.find(|(_, l)| *l == letter)
		.map(|(control, _)| *control)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn safe_set_is_printable_ascii_without_backslash() {
		let safe: Vec<u8> = (0..=u8::MAX).filter(|b| is_safe(*b)).collect();
		assert_eq!(safe.len(), 94);
		assert!(safe.contains(&b' '));
		assert!(safe.contains(&b'~'));
		assert!(!safe.contains(&b'\\'));
		assert!(!safe.contains(&b'\t'));
		assert!(!safe.contains(&0x7f));
	}

	#[test]
	fn slash_table_is_a_bijection() {
		for (control, letter) in SLASH_REPLACEMENTS {
			assert_eq!(slash_letter(control), Some(letter));
			assert_eq!(slash_control(letter), Some(control));
		}
		assert_eq!(slash_letter(b'a'), None);
		assert_eq!(slash_control(HEX_MARKER), None);
	}
}
