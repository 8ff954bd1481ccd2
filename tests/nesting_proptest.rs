//! Property-based tests for nesting and selector invariants
//!
//! Documents are generated as random well-formed element trees, rendered as Seymour lines.

use proptest::prelude::*;
use seymour::{convert, ConversionError, Converter, Mode};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Element {
    name: String,
    class: Option<String>,
    text: Option<String>,
    children: Vec<Element>,
}

fn element_strategy() -> impl Strategy<Value = Element> {
    let leaf = (
        "[a-z][a-z0-9]{0,5}",
        proptest::option::of("[a-z][a-z0-9-]{0,6}"),
        proptest::option::of("[A-Za-z][A-Za-z ]{0,12}"),
    )
        .prop_map(|(name, class, text)| Element {
            name,
            class,
            text,
            children: vec![],
        });

    leaf.prop_recursive(4, 24, 4, |inner| {
        (
            "[a-z][a-z0-9]{0,5}",
            proptest::option::of("[a-z][a-z0-9-]{0,6}"),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, class, children)| Element {
                name,
                class,
                text: None,
                children,
            })
    })
}

fn render(element: &Element, with_text: bool, lines: &mut Vec<String>) {
    match &element.class {
        Some(class) => lines.push(format!("{} class:{}", element.name, class)),
        None => lines.push(element.name.clone()),
    }
    if with_text {
        if let Some(text) = &element.text {
            lines.push(format!(">{}", text));
        }
    }
    for child in &element.children {
        render(child, with_text, lines);
    }
    lines.push(format!("/{}", element.name));
}

fn seymour_lines(roots: &[Element], with_text: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for root in roots {
        render(root, with_text, &mut lines);
    }
    lines
}

proptest! {
    #[test]
    fn well_formed_input_always_converts(roots in prop::collection::vec(element_strategy(), 0..4)) {
        let lines = seymour_lines(&roots, true);
        let conversion = Converter::new(Mode::Seymour).convert(&lines).unwrap();
        let html = conversion.html().unwrap();

        // one output line per input line, and the last closing tag returns to column 0
        prop_assert_eq!(html.lines().count(), lines.len());
        if let Some(last) = html.lines().last() {
            prop_assert!(last.starts_with("</"));
        }
    }

    #[test]
    fn selectors_are_unique(roots in prop::collection::vec(element_strategy(), 0..4)) {
        let lines = seymour_lines(&roots, true);
        let conversion = Converter::new(Mode::Seymour).convert(&lines).unwrap();

        let unique: HashSet<&str> = conversion.selectors.iter().collect();
        prop_assert_eq!(unique.len(), conversion.selectors.len());
        prop_assert!(!conversion.selectors.contains(""));
    }

    #[test]
    fn html_round_trip_keeps_every_selector(roots in prop::collection::vec(element_strategy(), 1..4)) {
        let lines = seymour_lines(&roots, false);
        let seymour = Converter::new(Mode::Seymour).convert(&lines).unwrap();
        let html = convert(Mode::Html, seymour.html().unwrap()).unwrap();

        for rule in seymour.selectors.iter() {
            prop_assert!(html.selectors.contains(rule), "missing rule '{}'", rule);
        }
    }

    #[test]
    fn extra_closing_tag_is_rejected(roots in prop::collection::vec(element_strategy(), 0..3)) {
        let mut lines = seymour_lines(&roots, true);
        lines.push("/div".to_string());
        let expected_line = lines.len();

        let err = Converter::new(Mode::Seymour).convert(&lines).unwrap_err();
        prop_assert_eq!(
            err,
            ConversionError::UnbalancedNesting { line_number: expected_line, content: "/div".to_string() }
        );
    }
}
