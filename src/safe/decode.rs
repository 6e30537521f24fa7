use std::{borrow::Cow, ops::Range};

use super::{slash_control, ESCAPE, HEX_MARKER};
use crate::util::hex;

/// How [`decode_bytes`] turns the decoded value into bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Binary {
	/// `\xHH` yields the byte `0xHH`, everything else is copied verbatim
	#[default]
	Raw,
	/// Decode as text, where `\xHH` yields the code point U+00HH, then encode that as UTF-8
	Utf8,
}

/// Receives the pieces of a scanned input, in order
trait Sink {
	/// Input bytes in `span` are copied unchanged
	fn literal(&mut self, span: Range<usize>);
	/// An escape decoded to `byte`
	fn decoded(&mut self, byte: u8);
}

struct RawSink<'a> {
	src: &'a [u8],
	out: Vec<u8>,
}

impl Sink for RawSink<'_> {
	fn literal(&mut self, span: Range<usize>) {
		self.out.extend_from_slice(&self.src[span]);
	}

	fn decoded(&mut self, byte: u8) {
		self.out.push(byte);
	}
}

struct TextSink<'a> {
	src: &'a str,
	out: String,
}

impl Sink for TextSink<'_> {
	// Spans only ever end next to an ASCII escape, so they always fall on char boundaries
	fn literal(&mut self, span: Range<usize>) {
		self.out.push_str(&self.src[span]);
	}

	fn decoded(&mut self, byte: u8) {
		self.out.push(char::from(byte));
	}
}

/// Decodes the escape at the start of `rest`, returning the byte and the escape's length
fn unescape(rest: &[u8]) -> Option<(u8, usize)> {
	match rest {
		[ESCAPE, ESCAPE, ..] => Some((ESCAPE, 2)),
		[ESCAPE, HEX_MARKER, hi, lo, ..] => hex::decode_pair(*hi, *lo).map(|byte| (byte, 4)),
		[ESCAPE, letter, ..] => slash_control(*letter).map(|control| (control, 2)),
		_ => None,
	}
}

/// Single left-to-right pass. Decoded bytes are never rescanned, and a backslash that does not
/// start a valid escape is kept as a literal.
fn scan(input: &[u8], sink: &mut impl Sink) {
	let mut run_start = 0;
	let mut pos = 0;
	while pos < input.len() {
		if input[pos] != ESCAPE {
			pos += 1;
			continue;
		}

		match unescape(&input[pos..]) {
			Some((byte, len)) => {
				sink.literal(run_start..pos);
				sink.decoded(byte);
				pos += len;
				run_start = pos;
			}
			None => pos += 1,
		}
	}
	sink.literal(run_start..input.len());
}

/// Reverses [`encode`](super::encode::encode). Malformed escapes are passed through literally.
///
/// Input without any backslash is returned borrowed.
pub fn decode(text: &str) -> Cow<'_, str> {
	if !text.as_bytes().contains(&ESCAPE) {
		return Cow::Borrowed(text);
	}

	let mut sink = TextSink {
		src: text,
		out: String::with_capacity(text.len()),
	};
	scan(text.as_bytes(), &mut sink);
	Cow::Owned(sink.out)
}

/// Decodes a safe form into bytes, see [`Binary`] for the two modes.
///
/// In [`Binary::Utf8`] mode, input that is not valid UTF-8 is decoded lossily.
pub fn decode_bytes(bytes: &[u8], mode: Binary) -> Cow<'_, [u8]> {
	match mode {
		Binary::Raw => {
			if !bytes.contains(&ESCAPE) {
				return Cow::Borrowed(bytes);
			}

			let mut sink = RawSink {
				src: bytes,
				out: Vec::with_capacity(bytes.len()),
			};
			scan(bytes, &mut sink);
			Cow::Owned(sink.out)
		}
		Binary::Utf8 => {
			let text = String::from_utf8_lossy(bytes);
			let decoded = match decode(&text) {
				Cow::Borrowed(_) => None,
				Cow::Owned(s) => Some(s),
			};
			match (decoded, text) {
				(Some(s), _) | (None, Cow::Owned(s)) => Cow::Owned(s.into_bytes()),
				(None, Cow::Borrowed(_)) => Cow::Borrowed(bytes),
			}
		}
	}
}

/// Element-wise [`decode`], preserving length and order
pub fn decode_all<S: AsRef<str>>(values: &[S]) -> Vec<String> {
	values
		.iter()
		.map(|value| decode(value.as_ref()).into_owned())
		.collect()
}
