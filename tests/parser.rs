//! Grammar acceptance and rejection tables for the palette command parser.

use coolor::coolor::error::{Expected, Found};
use coolor::{parse, parse_with, BaseColor, CommandVerb, Grammar, ParseError, Shade, TokenKind};
use rstest::rstest;

#[rstest]
#[case("GENERATE PALETTE 5 COLORS", CommandVerb::Generate, 5)]
#[case("generate palette 5 colors", CommandVerb::Generate, 5)]
#[case("Make paLette 6 COLORS", CommandVerb::Make, 6)]
#[case("MAKE PALETTE 2 COLOR", CommandVerb::Make, 2)]
#[case("make palette 9 color", CommandVerb::Make, 9)]
#[case("  GENERATE\tPALETTE\n3   COLORS  ", CommandVerb::Generate, 3)]
fn test_accepts_core_commands(
    #[case] source: &str,
    #[case] verb: CommandVerb,
    #[case] count: u8,
) {
    let command = parse(source).expect("parse failed");
    assert_eq!(command.verb(), verb);
    assert_eq!(command.command(), verb.as_str());
    assert_eq!(command.number_of_colors(), count);
    assert!(command.range().is_none());
}

#[rstest]
#[case("1")]
#[case("0")]
#[case("10")]
#[case("256")]
fn test_rejects_counts_outside_range(#[case] count: &str) {
    let source = format!("GENERATE PALETTE {} COLORS", count);
    assert_eq!(
        parse(&source),
        Err(ParseError::NumberOutOfRange {
            found: count.to_string()
        })
    );
}

#[rstest]
#[case("", "Input is empty.")]
#[case("PALETTE 5 COLORS", "Syntax error: Expected one of [GENERATE, MAKE] but found 'PALETTE'")]
#[case("CREATE PALETTE 5 COLORS", "Lexing Error: \"CREATE\" is not defined in the command language.")]
#[case("GENERATE COLORS 5", "Syntax error: Expected 'PALETTE' but found 'COLORS'")]
#[case("GENERATE PALETTE", "Syntax error: Expected a number (2-9) but found end of input")]
#[case("GENERATE PALETTE five COLORS", "Lexing Error: \"five\" is not defined in the command language.")]
#[case("GENERATE PALETTE blue COLORS", "Syntax error: Expected a number (2-9) but found 'blue'")]
#[case("GENERATE PALETTE 10 COLORS", "Syntax error: Expected number from 2 to 9 but found '10'")]
#[case("GENERATE PALETTE 5", "Syntax error: Expected one of [COLOR, COLORS] but found end of input")]
#[case("GENERATE PALETTE 5 PALETTE", "Syntax error: Expected one of [COLOR, COLORS] but found 'PALETTE'")]
#[case("GENERATE PALETTE 5 COLORS )", "Syntax error: Unexpected token ')' after valid command.")]
fn test_error_messages(#[case] source: &str, #[case] message: &str) {
    let err = parse(source).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_extended_command_is_trailing_under_core_grammar() {
    let err = parse("MAKE PALETTE 3 COLOR FROM dark RED : light green").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error: Unexpected token 'FROM' after valid command."
    );
}

#[test]
fn test_undefined_color_surfaces_through_parse() {
    let err = parse("GENERATE PALETTE 5 COLORS FROM light teal").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Lexing Error: \"teal\" is not defined in the command language."
    );
    assert!(matches!(err, ParseError::Lexing(ref lex) if lex.text() == "teal"));
}

#[test]
fn test_lexing_runs_before_grammar() {
    // The grammar would fail at "10" first, but the lexer rejects "purple" up front.
    let err = parse("GENERATE PALETTE 10 COLORS FROM light teal TO dark purple").unwrap_err();
    assert!(matches!(err, ParseError::Lexing(ref lex) if lex.text() == "teal"));
}

#[rstest]
#[case("GENERATE PALETTE 5 COLORS FROM (light blue TO dark orange)", Shade::Light, BaseColor::Blue, Shade::Dark, BaseColor::Orange)]
#[case("Make paLette 6 COLORS FROM (light blue TO dark orange) ", Shade::Light, BaseColor::Blue, Shade::Dark, BaseColor::Orange)]
#[case("generate PALETTE 6 colors FROM light blue : dark orange ", Shade::Light, BaseColor::Blue, Shade::Dark, BaseColor::Orange)]
#[case("MAKE PALETTE 3 COLOR FROM dark RED : light green", Shade::Dark, BaseColor::Red, Shade::Light, BaseColor::Green)]
#[case("MAKE PALETTE 4 COLORS FROM dark black:light yellow", Shade::Dark, BaseColor::Black, Shade::Light, BaseColor::Yellow)]
fn test_color_range_grammar(
    #[case] source: &str,
    #[case] from_shade: Shade,
    #[case] from_color: BaseColor,
    #[case] to_shade: Shade,
    #[case] to_color: BaseColor,
) {
    let command = parse_with(source, Grammar::ColorRange).expect("parse failed");
    let range = command.range().expect("range missing");
    assert_eq!(range.from.shade, from_shade);
    assert_eq!(range.from.color, from_color);
    assert_eq!(range.to.shade, to_shade);
    assert_eq!(range.to.color, to_color);
}

#[rstest]
#[case("Make paLette 6 COLORS FROM", Expected::Kind(TokenKind::Adjective), Found::EndOfInput)]
#[case("MAKE PALETTE 6 COLORS TO light blue", Expected::Word("FROM"), Found::Token("TO".into()))]
#[case("MAKE PALETTE 6 COLORS FROM light light", Expected::Kind(TokenKind::Color), Found::Token("light".into()))]
#[case("MAKE PALETTE 6 COLORS FROM light blue ( dark red", Expected::AnyOf(&["TO", ":"]), Found::Token("(".into()))]
#[case("MAKE PALETTE 6 COLORS FROM light blue TO", Expected::Kind(TokenKind::Adjective), Found::EndOfInput)]
fn test_color_range_grammar_errors(
    #[case] source: &str,
    #[case] expected: Expected,
    #[case] found: Found,
) {
    assert_eq!(
        parse_with(source, Grammar::ColorRange),
        Err(ParseError::Unexpected { expected, found })
    );
}
