use std::borrow::Cow;

use super::{is_safe, slash_letter, DISPLAYABLE_FROM, ESCAPE, HEX_MARKER};
use crate::util::hex;

/// Safe form of a single byte, at most four ASCII bytes long
struct Escaped {
	buf: [u8; 4],
	len: usize,
}

impl Escaped {
	fn of(byte: u8) -> Self {
		let (buf, len) = if is_safe(byte) {
			([byte, 0, 0, 0], 1)
		} else if byte == ESCAPE {
			([ESCAPE, ESCAPE, 0, 0], 2)
		} else if let Some(letter) = slash_letter(byte) {
			([ESCAPE, letter, 0, 0], 2)
		} else {
			let [hi, lo] = hex::digits(byte);
			([ESCAPE, HEX_MARKER, hi, lo], 4)
		};
		Escaped { buf, len }
	}

	fn as_bytes(&self) -> &[u8] {
		&self.buf[..self.len]
	}
}

/// Returns the safe form of `bytes`. Every byte outside the safe set is escaped.
///
/// Input that is already entirely safe is returned borrowed.
pub fn encode_bytes(bytes: &[u8]) -> Cow<'_, [u8]> {
	if bytes.iter().all(|b| is_safe(*b)) {
		return Cow::Borrowed(bytes);
	}

	let mut result = Vec::with_capacity(bytes.len() * 2);
	for byte in bytes {
		result.extend_from_slice(Escaped::of(*byte).as_bytes());
	}
	Cow::Owned(result)
}

/// Returns the safe form of `text`.
///
/// Unlike [`encode_bytes`], characters at or above [`DISPLAYABLE_FROM`] are kept as they are.
/// Everything below it is escaped exactly like the corresponding byte would be.
pub fn encode(text: &str) -> Cow<'_, str> {
	if text.bytes().all(is_safe) {
		return Cow::Borrowed(text);
	}

	let mut result = String::with_capacity(text.len() * 2);
	for c in text.chars() {
		match u8::try_from(c) {
			Ok(byte) if u32::from(byte) < DISPLAYABLE_FROM => {
				// escapes are pure ASCII
				result.extend(Escaped::of(byte).as_bytes().iter().map(|b| char::from(*b)))
			}
			_ => result.push(c),
		}
	}
	Cow::Owned(result)
}

/// Element-wise [`encode`], preserving length and order
pub fn encode_all<S: AsRef<str>>(values: &[S]) -> Vec<String> {
	values
		.iter()
		.map(|value| encode(value.as_ref()).into_owned())
		.collect()
}
