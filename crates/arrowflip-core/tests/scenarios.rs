//! End-to-end conversions of whole arrow function fragments.

use arrowflip_core::convert::swap_bracket;
use arrowflip_core::{convert, BodyForm, ConvertError, Converter};

#[test]
fn single_line_block_becomes_expression() {
    assert_eq!(convert("(x) => { return x + 1; }").unwrap(), "(x) => (x + 1)");
}

#[test]
fn single_line_expression_becomes_block() {
    assert_eq!(convert("(x) => (x + 1)").unwrap(), "(x) => { return x + 1; }");
}

#[test]
fn multi_line_block_becomes_expression() {
    let input = "(x) => {\n  return x + 1;\n}";
    assert_eq!(convert(input).unwrap(), "(x) => (\n  x + 1\n)");
}

#[test]
fn multi_line_expression_becomes_block() {
    let input = "(x) => (\n  x + 1\n)";
    assert_eq!(convert(input).unwrap(), "(x) => {\n  return x + 1;\n}");
}

#[test]
fn statements_before_return_are_kept_as_comments() {
    let input = "(x) => {\n  doSomething();\n  return x + 1;\n}";
    assert_eq!(
        convert(input).unwrap(),
        "(x) => (\n// doSomething();\n  x + 1\n)"
    );
}

#[test]
fn fragment_without_arrow_body_is_unchanged() {
    for input in ["x => x + 1", "", "const a = 1;", "function f() {\n  return 1;\n}"] {
        assert_eq!(convert(input).unwrap(), input);
    }
}

#[test]
fn jsx_component_round_trips() {
    let block = "const App = () => {\n  return (\n    <div>\n      <Header />\n    </div>\n  );\n};";
    let expression = "const App = () => (\n  <div>\n    <Header />\n  </div>\n);";

    assert_eq!(convert(block).unwrap(), expression);
    assert_eq!(convert(expression).unwrap(), block);
}

#[test]
fn single_expression_round_trips() {
    for input in [
        "(x) => {\n  return x + 1;\n}",
        "(a, b) => {\n  return { ...a, ...b };\n}",
        "(x) => { return x * 2; }",
    ] {
        let once = convert(input).unwrap();
        let twice = convert(&once).unwrap();
        assert_eq!(twice, input);
    }
}

#[test]
fn repeated_conversion_alternates_forms() {
    let mut text = "(items) => (\n  items\n    .filter(Boolean)\n    .map(String)\n)".to_string();
    let mut expected = BodyForm::Expression;

    for _ in 0..4 {
        let conversion = Converter::new(&text).conversion().unwrap();
        assert_eq!(conversion.from, Some(expected));
        expected = expected.opposite();
        assert_eq!(Converter::new(&conversion.output).form().unwrap(), Some(expected));
        text = conversion.output;
    }

    assert_eq!(
        text,
        "(items) => (\n  items\n    .filter(Boolean)\n    .map(String)\n)"
    );
}

#[test]
fn bracket_swap_is_an_involution() {
    for c in ['(', ')', '{', '}'] {
        assert_eq!(swap_bracket(c).and_then(swap_bracket), Some(c));
    }
}

#[test]
fn malformed_fragments_report_errors() {
    assert!(matches!(
        convert("(x) => {\n  return (x;\n"),
        Err(ConvertError::UnbalancedBrackets { .. })
    ));
    assert!(matches!(
        convert("(x) => { // comment\n  return x;\n}"),
        Err(ConvertError::OpenerNotAtLineEnd { .. })
    ));
    assert_eq!(convert("() => {\n}"), Err(ConvertError::EmptyBody));
}
