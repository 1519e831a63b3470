use super::*;

fn parser() -> ScriptIdParser {
    ScriptIdParser::new(&["https://makecode.com/".to_owned()]).unwrap()
}

// =============================================================
// Accepted inputs
// =============================================================

#[test]
fn parses_bare_letter_id() {
    assert_eq!(parser().parse("abcdefghij").as_deref(), Some("abcdefghij"));
}

#[test]
fn parses_underscore_id_and_lowercases() {
    assert_eq!(parser().parse("_AbCdEfGhIj").as_deref(), Some("_abcdefghij"));
}

#[test]
fn parses_numeric_id() {
    assert_eq!(
        parser().parse("12345-67890-12345-67890").as_deref(),
        Some("12345-67890-12345-67890")
    );
}

#[test]
fn parses_links_on_builtin_and_configured_domains() {
    let p = parser();
    assert_eq!(p.parse("https://pxt.io/abcdefghij").as_deref(), Some("abcdefghij"));
    assert_eq!(p.parse("http://codethemicrobit.com/abcdefghij").as_deref(), Some("abcdefghij"));
    assert_eq!(p.parse("makecode.com/abcdefghij").as_deref(), Some("abcdefghij"));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(parser().parse("  abcdefghij \n").as_deref(), Some("abcdefghij"));
}

// =============================================================
// Rejected inputs
// =============================================================

#[test]
fn rejects_plain_search_text() {
    let p = parser();
    assert_eq!(p.parse("blink"), None);
    assert_eq!(p.parse("my project"), None);
    assert_eq!(p.parse(""), None);
}

#[test]
fn rejects_wrong_length_ids() {
    let p = parser();
    assert_eq!(p.parse("abcdefghi"), None);
    assert_eq!(p.parse("abcdefghijk"), None);
    assert_eq!(p.parse("1234-67890-12345-67890"), None);
}

#[test]
fn rejects_unknown_domains() {
    assert_eq!(parser().parse("https://example.com/abcdefghij"), None);
}

#[test]
fn disabled_parser_rejects_everything() {
    let p = ScriptIdParser::new(&[]).unwrap();
    assert_eq!(p.parse("abcdefghij"), None);
    assert_eq!(p, ScriptIdParser::disabled());
}

// =============================================================
// Equality
// =============================================================

#[test]
fn parsers_from_same_domains_are_equal() {
    let a = ScriptIdParser::new(&["makecode.com".to_owned()]).unwrap();
    let b = ScriptIdParser::new(&["https://makecode.com/".to_owned()]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, ScriptIdParser::disabled());
    assert_eq!(a.parse("pxt.io/abcdefghij").as_deref(), Some("abcdefghij"));
}
