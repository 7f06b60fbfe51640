use log::trace;
use yaml_rust2::parser::{Event, MarkedEventReceiver};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use crate::yaml::source::Source;
use crate::yaml::{DecodeError, DecodeOptions, Mapping, Result, Value};

/// Event receiver that builds a text-only [`Value`] tree.
///
/// The grammar implementation resolves nothing here: every scalar event keeps
/// its source text. The one exception is the empty node, which the parser
/// reports as a plain `~`; [`Loader`] tells it apart from a written `~` by
/// looking at the source under the event marker.
pub(crate) struct Loader<'a> {
	src: &'a Source<'a>,
	opt: &'a DecodeOptions,
	stack: Vec<Frame>,
	root: Option<Value>,
	documents: usize,
	/// A plain `~` whose marker points at a `~`, resolved by the next event.
	tilde: Option<Marker>,
	error: Option<DecodeError>,
}

enum Frame {
	Sequence(Vec<Value>),
	Mapping { map: Mapping, key: Option<(String, Marker)> },
}

impl<'a> Loader<'a> {
	pub(crate) fn new(src: &'a Source<'a>, opt: &'a DecodeOptions) -> Self {
		Self {
			src,
			opt,
			stack: Vec::new(),
			root: None,
			documents: 0,
			tilde: None,
			error: None,
		}
	}

	/// Decoded root, or the first error raised while building it.
	pub(crate) fn finish(self) -> Result<Value> {
		match self.error {
			Some(err) => Err(err),
			None => Ok(self.root.unwrap_or_else(Value::empty)),
		}
	}

	fn handle(&mut self, ev: Event, mark: Marker) -> Result<()> {
		if let Some(tilde) = self.tilde.take() {
			// An empty node shares its marker with the event that follows it.
			let text = if tilde == mark { "" } else { "~" };
			self.push(Value::from(text), tilde)?;
		}

		match ev {
			Event::Nothing | Event::StreamStart | Event::StreamEnd | Event::DocumentEnd => Ok(()),
			Event::DocumentStart => {
				self.documents += 1;
				if self.documents > 1 {
					return Err(self.src.syntax(mark, "multiple documents are not supported"));
				}
				Ok(())
			}
			Event::Alias(_) => Err(self.src.syntax(mark, "aliases are not supported")),
			Event::Scalar(text, style, anchor, tag) => {
				self.reject_properties(anchor, tag.is_some(), mark)?;
				self.scalar(text, style, mark)
			}
			Event::SequenceStart(anchor, tag) => {
				self.reject_properties(anchor, tag.is_some(), mark)?;
				self.open(Frame::Sequence(Vec::new()), "sequence", mark)
			}
			Event::MappingStart(anchor, tag) => {
				self.reject_properties(anchor, tag.is_some(), mark)?;
				self.open(Frame::Mapping { map: Mapping::new(), key: None }, "mapping", mark)
			}
			Event::SequenceEnd | Event::MappingEnd => {
				let value = match self.stack.pop() {
					Some(Frame::Sequence(items)) => Value::Sequence(items),
					Some(Frame::Mapping { map, .. }) => Value::Mapping(map),
					None => return Err(self.src.syntax(mark, "collection end without a start")),
				};
				self.push(value, mark)
			}
		}
	}

	fn scalar(&mut self, text: String, style: TScalarStyle, mark: Marker) -> Result<()> {
		match style {
			TScalarStyle::Plain if text == "~" => {
				if self.src.char_at(mark, 0) == Some('~') {
					self.tilde = Some(mark);
					Ok(())
				} else {
					self.push(Value::empty(), mark)
				}
			}
			TScalarStyle::Literal | TScalarStyle::Folded => {
				self.check_block_header(mark)?;
				self.push(Value::Scalar(text), mark)
			}
			_ => self.push(Value::Scalar(text), mark),
		}
	}

	fn reject_properties(&self, anchor: usize, tagged: bool, mark: Marker) -> Result<()> {
		if anchor > 0 {
			return Err(self.src.syntax(mark, "anchors are not supported"));
		}
		if tagged {
			return Err(self.src.syntax(mark, "tags are not supported"));
		}
		Ok(())
	}

	/// Only clip chomping with detected indentation is accepted.
	fn check_block_header(&self, mark: Marker) -> Result<()> {
		if !matches!(self.src.char_at(mark, 0), Some('|' | '>')) {
			return Ok(());
		}
		match self.src.char_at(mark, 1) {
			Some('+' | '-') => Err(self.src.syntax(mark, "block scalar chomping indicators are not supported")),
			Some('1'..='9') => Err(self.src.syntax(mark, "block scalar indentation indicators are not supported")),
			_ => Ok(()),
		}
	}

	fn open(&mut self, frame: Frame, kind: &'static str, mark: Marker) -> Result<()> {
		if let Some(Frame::Mapping { key: None, .. }) = self.stack.last() {
			return Err(DecodeError::UnhashableKey {
				mark: self.src.mark(mark),
				kind,
			});
		}
		let max_depth = self.opt.max_depth;
		if self.stack.len() >= max_depth as usize {
			return Err(DecodeError::DepthExceeded { max_depth });
		}
		self.stack.push(frame);
		Ok(())
	}

	/// Attach a finished node to the open collection, or make it the root.
	fn push(&mut self, value: Value, mark: Marker) -> Result<()> {
		match self.stack.last_mut() {
			None => self.root = Some(value),
			Some(Frame::Sequence(items)) => items.push(value),
			Some(Frame::Mapping { map, key }) => match key.take() {
				None => match value {
					Value::Scalar(text) => *key = Some((text, mark)),
					other => {
						return Err(DecodeError::UnhashableKey {
							mark: self.src.mark(mark),
							kind: other.kind(),
						});
					}
				},
				Some((text, key_mark)) => insert_entry(self.src, self.opt, map, text, key_mark, value)?,
			},
		}
		Ok(())
	}
}

impl MarkedEventReceiver for Loader<'_> {
	fn on_event(&mut self, ev: Event, mark: Marker) {
		if self.error.is_some() {
			return;
		}
		if let Err(err) = self.handle(ev, mark) {
			self.error = Some(err);
		}
	}
}

/// Insert one entry, applying the duplicate-key policy.
fn insert_entry(src: &Source<'_>, opt: &DecodeOptions, map: &mut Mapping, key: String, mark: Marker, value: Value) -> Result<()> {
	if map.contains_key(&key) {
		if opt.reject_duplicate_keys {
			return Err(DecodeError::DuplicateKey { mark: src.mark(mark), key });
		}
		trace!("duplicate key {key:?} at line {}, keeping the last value", mark.line());
	}
	map.insert(key, value);
	Ok(())
}
