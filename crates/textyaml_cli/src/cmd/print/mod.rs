use textyaml::yaml::Value;

/// Render a decoded tree as indented text, one node per line.
///
/// Scalars are quoted so empty text and surrounding whitespace stay visible.
/// Sequences print as `[ ... ]`, mappings as `{ key = value ... }`.
pub fn render_value(value: &Value) -> String {
	let mut out = String::new();
	push_value(&mut out, value, 0);
	out
}

fn push_value(out: &mut String, value: &Value, indent: usize) {
	let pad = " ".repeat(indent);
	match value {
		Value::Scalar(text) => out.push_str(&format!("{:?}\n", text)),
		Value::Sequence(items) if items.is_empty() => out.push_str("[]\n"),
		Value::Mapping(map) if map.is_empty() => out.push_str("{}\n"),
		Value::Sequence(items) => {
			out.push_str("[\n");
			for item in items {
				out.push_str(&format!("{pad}  "));
				push_value(out, item, indent + 2);
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Mapping(map) => {
			out.push_str("{\n");
			for (key, item) in map {
				out.push_str(&format!("{pad}  {:?} = ", key));
				push_value(out, item, indent + 2);
			}
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}
