use yaml_rust2::ScanError;
use yaml_rust2::scanner::Marker;

use crate::yaml::{DecodeError, Mark};

/// Line table over the decoded text, built once per decode.
///
/// Scanner markers carry a reliable line number but count columns in
/// characters, so lookups go through the line's own text instead of the
/// marker index.
pub(crate) struct Source<'a> {
	text: &'a str,
	lines: Vec<Line>,
}

#[derive(Debug, Clone, Copy)]
struct Line {
	start: usize,
	end: usize,
	ascii: bool,
}

impl<'a> Source<'a> {
	pub(crate) fn new(text: &'a str) -> Self {
		let mut lines = Vec::new();
		let mut start = 0;
		for segment in text.split('\n') {
			let end = start + segment.len();
			lines.push(Line {
				start,
				end,
				ascii: segment.is_ascii(),
			});
			start = end + 1;
		}
		Self { text, lines }
	}

	/// Character `ahead` positions after `marker`, on the marker's line.
	pub(crate) fn char_at(&self, marker: Marker, ahead: usize) -> Option<char> {
		let line = self.line(marker)?;
		let text = &self.text[line.start..line.end];
		let col = marker.col() + ahead;
		if line.ascii {
			text.as_bytes().get(col).map(|byte| char::from(*byte))
		} else {
			text.chars().nth(col)
		}
	}

	/// Convert a scanner marker into a public position.
	pub(crate) fn mark(&self, marker: Marker) -> Mark {
		let Some(line) = self.line(marker) else {
			return Mark {
				offset: self.text.len(),
				line: marker.line(),
				column: marker.col() + 1,
			};
		};
		let text = &self.text[line.start..line.end];
		let within = text.char_indices().nth(marker.col()).map_or(text.len(), |(idx, _)| idx);
		Mark {
			offset: line.start + within,
			line: marker.line(),
			column: marker.col() + 1,
		}
	}

	pub(crate) fn syntax(&self, marker: Marker, message: impl Into<String>) -> DecodeError {
		DecodeError::Syntax {
			mark: self.mark(marker),
			message: message.into(),
		}
	}

	pub(crate) fn scan_error(&self, err: &ScanError) -> DecodeError {
		self.syntax(*err.marker(), err.info())
	}

	fn line(&self, marker: Marker) -> Option<Line> {
		marker.line().checked_sub(1).and_then(|idx| self.lines.get(idx)).copied()
	}
}
