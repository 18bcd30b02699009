use std::collections::BTreeMap;

use proptest::prelude::*;

use propcodec::{
    Bundle, Definition, ResourceEntry, Separator, WhitespaceSegmenter, escape, parse_bundle,
    parser::ParseOptions, traits::Parser,
};
use unic_langid::LanguageIdentifier;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?]{0,30}").expect("valid value regex")
}

fn wrap_value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([a-zA-Z]{1,12} ){10,40}[a-zA-Z]{1,12}")
        .expect("valid wrap value regex")
}

fn dataset_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 1..12)
}

fn build_bundle(values: &BTreeMap<String, String>) -> Bundle {
    let entries = values
        .iter()
        .enumerate()
        .map(|(i, (key, value))| ResourceEntry {
            key: key.clone(),
            value: value.clone(),
            sequence_number: (i + 1) as u32,
            notes: Vec::new(),
        })
        .collect();

    Bundle {
        global_notes: Vec::new(),
        entries,
    }
}

fn pairs(bundle: &Bundle) -> BTreeMap<String, String> {
    bundle
        .iter()
        .map(|e| (e.key.clone(), e.value.clone()))
        .collect()
}

fn locale() -> LanguageIdentifier {
    "en".parse().expect("valid locale")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn escape_value_unescape_is_identity(s in any::<String>()) {
        let escaped = escape::escape_value(&s);
        prop_assert_eq!(escape::unescape(&escaped).expect("unescape failed"), s);
    }

    #[test]
    fn escape_key_unescape_is_identity(s in any::<String>()) {
        let escaped = escape::escape_key(&s);
        prop_assert_eq!(escape::unescape(&escaped).expect("unescape failed"), s);
    }

    #[test]
    fn escaped_value_is_single_logical_ascii_line(s in any::<String>()) {
        let escaped = escape::escape_value(&s);
        prop_assert!(escaped.is_ascii());
        prop_assert!(!escaped.contains('\n'));
        prop_assert!(!escaped.contains('\r'));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parse_of_write_preserves_pairs(values in dataset_strategy()) {
        let bundle = build_bundle(&values);
        let mut out = Vec::new();
        bundle.to_writer(&mut out).expect("write failed");

        let reparsed = Bundle::from_bytes(&out).expect("reparse failed");
        prop_assert_eq!(pairs(&reparsed), values);
    }

    #[test]
    fn wrapped_rendering_parses_back_to_same_value(value in wrap_value_strategy()) {
        let def = Definition::new("message", value.clone(), Separator::Equal);
        let rendered = def.render(&locale(), &WhitespaceSegmenter).join("\n");

        let bundle = parse_bundle(rendered.as_bytes(), &ParseOptions::new())
            .expect("parse failed");
        let entry = bundle.find_entry("message").expect("key lost in wrapping");
        prop_assert_eq!(&entry.value, &value);
    }

    #[test]
    fn wrapped_lines_are_properly_continued(value in wrap_value_strategy()) {
        let def = Definition::new("message", value, Separator::Equal);
        let rendered = def.render(&locale(), &WhitespaceSegmenter);

        for (i, line) in rendered.iter().enumerate() {
            if i > 0 {
                prop_assert!(line.starts_with("    "), "line {} not indented: {:?}", i, line);
            }
            if i + 1 < rendered.len() {
                prop_assert!(line.ends_with('\\'), "line {} not continued: {:?}", i, line);
            }
        }
    }
}
