#![allow(missing_docs)]

use textyaml::yaml::{DecodeError, DecodeOptions, Mapping, Value, decode_reader};
use textyaml_testkit::{fixture_path, fixture_text};

fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
	Value::Mapping(Mapping::from_iter(entries))
}

fn seq<const N: usize>(items: [&str; N]) -> Value {
	Value::Sequence(items.into_iter().map(Value::from).collect())
}

#[test]
fn bare_scalar() {
	assert_eq!(textyaml::parse("foo").expect("parses"), Value::from("foo"));
}

#[test]
fn mapping_keeps_source_order() {
	let value = textyaml::parse("foo: bar\negg: spam").expect("parses");
	assert_eq!(value, map([("foo", "bar".into()), ("egg", "spam".into())]));

	let reversed = textyaml::parse("egg: spam\nfoo: bar").expect("parses");
	assert_ne!(value, reversed);
}

#[test]
fn sequence_of_scalars() {
	assert_eq!(textyaml::parse("- foo\n- bar").expect("parses"), seq(["foo", "bar"]));
}

#[test]
fn sequence_mixing_mapping_and_scalar() {
	let value = textyaml::parse("- foo: bar\n- egg").expect("parses");
	assert_eq!(value, Value::Sequence(vec![map([("foo", "bar".into())]), "egg".into()]));
}

#[test]
fn mapping_holding_indented_sequence() {
	let value = textyaml::parse("foo:\n - bar\n - egg\nspam: stuff").expect("parses");
	assert_eq!(value, map([("foo", seq(["bar", "egg"])), ("spam", "stuff".into())]));
}

#[test]
fn key_without_value_is_empty_text() {
	assert_eq!(textyaml::parse("foo:").expect("parses"), map([("foo", Value::empty())]));
}

#[test]
fn numbers_stay_text() {
	assert_eq!(textyaml::parse("foo: 1").expect("parses"), map([("foo", "1".into())]));
}

#[test]
fn flow_mapping_value() {
	let value = textyaml::parse("foo: {egg: spam}").expect("parses");
	assert_eq!(value, map([("foo", map([("egg", "spam".into())]))]));
}

#[test]
fn mapping_used_as_key_is_unhashable() {
	let err = textyaml::parse("- {{}}").expect_err("mapping key fails");
	assert!(matches!(err, DecodeError::UnhashableKey { .. }), "{err:?}");
	assert_eq!(err.kind(), "unhashable_key");
}

#[test]
fn service_fixture_decodes_as_text_tree() {
	let value = textyaml::parse(&fixture_text("service.yaml")).expect("fixture parses");
	let expected = map([
		("name", "billing-api".into()),
		("version", "1.10".into()),
		("enabled", "true".into()),
		("replicas", "3".into()),
		("owner", "~".into()),
		("ports", seq(["8080", "9090"])),
		(
			"env",
			map([
				("LOG_LEVEL", "debug".into()),
				("FEATURE FLAGS", map([("beta", "on".into()), ("legacy", "off".into())])),
			]),
		),
		("command", seq(["serve", "--port", "8080"])),
		("description", "Handles invoices and refunds.\n".into()),
		("script", "set -e\nrun --fast\n".into()),
		("empty", Value::empty()),
	]);
	assert_eq!(value, expected);
}

#[test]
fn fixture_reads_through_decode_reader() {
	let file = std::fs::File::open(fixture_path("service.yaml")).expect("fixture opens");
	let value = decode_reader(file, &DecodeOptions::strict()).expect("fixture decodes");
	assert_eq!(value.get("replicas").and_then(Value::as_str), Some("3"));
}

#[test]
fn invalid_indent_fixture_reports_position() {
	let err = textyaml::parse(&fixture_text("invalid_indent.yaml")).expect_err("stray indentation fails");
	let DecodeError::Syntax { mark, .. } = err else {
		panic!("expected syntax error, got {err:?}");
	};
	assert_eq!(mark.line, 3);
}

#[test]
fn unhashable_fixture_reports_kind() {
	let err = textyaml::parse(&fixture_text("unhashable.yaml")).expect_err("mapping key fails");
	let DecodeError::UnhashableKey { kind, .. } = err else {
		panic!("expected unhashable key, got {err:?}");
	};
	assert_eq!(kind, "mapping");
}
