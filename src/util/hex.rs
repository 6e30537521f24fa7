/// Lowercase digits, indexed by nibble value
const HEX_CHAR: &[u8; 16] = b"0123456789abcdef";

/// Produces the two lowercase hex digits of `byte`
pub fn digits(byte: u8) -> [u8; 2] {
	[HEX_CHAR[(byte >> 4) as usize], HEX_CHAR[(byte & 0x0F) as usize]]
}

/// Value of a single hex digit, either case
pub fn val_of(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}

/// Decodes exactly two hex digits into a byte, `None` if either digit is invalid
pub fn decode_pair(hi: u8, lo: u8) -> Option<u8> {
	Some(val_of(hi)? << 4 | val_of(lo)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn digits_are_lowercase_and_padded() {
		assert_eq!(&digits(0x00), b"00");
		assert_eq!(&digits(0x0b), b"0b");
		assert_eq!(&digits(0xff), b"ff");
	}

	#[test]
	fn decode_pair_accepts_either_case() {
		assert_eq!(decode_pair(b'f', b'F'), Some(0xff));
		assert_eq!(decode_pair(b'6', b'8'), Some(b'h'));
		assert_eq!(decode_pair(b'A', b'0'), Some(0xa0));
	}

	#[test]
	fn decode_pair_rejects_non_hex() {
		assert_eq!(decode_pair(b'G', b'G'), None);
		assert_eq!(decode_pair(b'1', b'z'), None);
		assert_eq!(decode_pair(b'\\', b'0'), None);
	}
}
