use super::*;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

fn lex_clean(input: &str) -> Tokens {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex(input, &mut diagnostics);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.messages());
    tokens
}

#[test]
fn test_basic1() {
    let tokens = lex_clean("int main() { return 0; }");
    let expected = vec![
        TokenKind::Int,
        TokenKind::Identifier,
        TokenKind::OpenParanth,
        TokenKind::CloseParanth,
        TokenKind::OpenCurly,
        TokenKind::Return,
        TokenKind::NumberLiteral,
        TokenKind::Semicolon,
        TokenKind::CloseCurly,
        TokenKind::Eof,
    ];
    assert_eq!(expected, kinds(&tokens));
    assert_eq!(tokens[1].text(), "main");
    assert_eq!(tokens[6].text(), "0");
}

#[test]
fn test_empty_input_has_single_eof() {
    let tokens = lex_clean("");
    assert_eq!(vec![TokenKind::Eof], kinds(&tokens));
    assert_eq!(tokens[0].get_line(), 1);
}

#[test]
fn test_number_is_maximal_digit_run() {
    let tokens = lex_clean("return 123456789012345678901234567890;");
    assert_eq!(tokens[1].kind(), TokenKind::NumberLiteral);
    assert_eq!(tokens[1].text(), "123456789012345678901234567890");
    assert_eq!(tokens[2].kind(), TokenKind::Semicolon);
}

#[test]
fn test_keyword_needs_maximal_run() {
    let tokens = lex_clean("intx int _for For char");
    let expected = vec![
        TokenKind::Identifier,
        TokenKind::Int,
        TokenKind::Identifier,
        TokenKind::Identifier,
        TokenKind::Char,
        TokenKind::Eof,
    ];
    assert_eq!(expected, kinds(&tokens));
    assert_eq!(tokens[0].text(), "intx");
}

#[test]
fn test_digits_then_letters_split() {
    let tokens = lex_clean("12ab");
    assert_eq!(
        vec![TokenKind::NumberLiteral, TokenKind::Identifier, TokenKind::Eof],
        kinds(&tokens)
    );
    assert_eq!(tokens[0].text(), "12");
    assert_eq!(tokens[1].text(), "ab");
}

#[test]
fn test_operators() {
    let tokens = lex_clean("< > = + - *");
    let expected = vec![
        TokenKind::OpenAngle,
        TokenKind::CloseAngle,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Hyphen,
        TokenKind::Asterisk,
        TokenKind::Eof,
    ];
    assert_eq!(expected, kinds(&tokens));
    assert_eq!(tokens[5].text(), "*");
}

#[test]
fn test_line_numbers() {
    let tokens = lex_clean("int\nmain\n\n(\r\n)");
    let lines: Vec<u64> = tokens.iter().map(Token::get_line).collect();
    assert_eq!(vec![1, 2, 4, 5, 5], lines);
}

#[test]
fn test_line_comment_skipped() {
    let tokens = lex_clean("// leading comment\nint // trailing\n// another\nmain");
    assert_eq!(
        vec![TokenKind::Int, TokenKind::Identifier, TokenKind::Eof],
        kinds(&tokens)
    );
    assert_eq!(tokens[0].get_line(), 2);
    assert_eq!(tokens[1].get_line(), 4);
}

#[test]
fn test_lone_slash_is_unknown() {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex("1 / 2", &mut diagnostics);
    assert_eq!(
        vec![TokenKind::NumberLiteral, TokenKind::NumberLiteral, TokenKind::Eof],
        kinds(&tokens)
    );
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_bad_atsign() {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex("int main() {\nreturn 0@1;\n}", &mut diagnostics);
    assert_eq!(tokens.len(), 11);
    assert_eq!(
        diagnostics.messages(),
        vec!["Lexer Error: Unknown character '@' on line 2".to_owned()]
    );
    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.line, Some(2));
}

#[test]
fn test_include_directive() {
    let tokens = lex_clean("#include <stdio>\nint");
    let expected = vec![
        TokenKind::Include,
        TokenKind::Identifier,
        TokenKind::OpenAngle,
        TokenKind::Identifier,
        TokenKind::CloseAngle,
        TokenKind::Int,
        TokenKind::Eof,
    ];
    assert_eq!(expected, kinds(&tokens));
    assert_eq!(tokens[0].text(), "#include");
    assert_eq!(tokens[1].text(), "e");
    assert_eq!(tokens[3].text(), "stdio");
}

#[test]
fn test_include_spelling_not_checked() {
    let tokens = lex_clean("#ixxxxx main");
    assert_eq!(
        vec![TokenKind::Include, TokenKind::Identifier, TokenKind::Eof],
        kinds(&tokens)
    );
}

#[test]
fn test_include_at_end_of_input() {
    let tokens = lex_clean("#inc");
    assert_eq!(vec![TokenKind::Include, TokenKind::Eof], kinds(&tokens));
}

#[test]
fn test_hash_without_include_is_unknown() {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex("#define", &mut diagnostics);
    assert_eq!(vec![TokenKind::Identifier, TokenKind::Eof], kinds(&tokens));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_string_literal() {
    let tokens = lex_clean("\"hello\nworld\" x");
    assert_eq!(
        vec![TokenKind::StringLiteral, TokenKind::Identifier, TokenKind::Eof],
        kinds(&tokens)
    );
    assert_eq!(tokens[0].text(), "hello\nworld");
    assert_eq!(tokens[0].get_line(), 1);
    assert_eq!(tokens[1].get_line(), 2);
}

#[test]
fn test_unterminated_string_stops_scan() {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex("int main() { \"oops\n return 0; }", &mut diagnostics);
    let expected = vec![
        TokenKind::Int,
        TokenKind::Identifier,
        TokenKind::OpenParanth,
        TokenKind::CloseParanth,
        TokenKind::OpenCurly,
        TokenKind::Eof,
    ];
    assert_eq!(expected, kinds(&tokens));
    assert_eq!(tokens[5].text(), "ERROR");
    assert!(diagnostics.has_errors());
    assert!(diagnostics.messages()[0].contains("Unterminated string"));
}

#[test]
fn test_exactly_one_eof() {
    let inputs = ["", "int", "@@@", "\"open", "return 1; // end"];
    for input in inputs {
        let mut diagnostics = Diagnostics::new();
        let tokens = lex(input, &mut diagnostics);
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eofs, 1, "{input}");
        assert!(tokens.last().unwrap().is_eof(), "{input}");
    }
}

#[test]
fn test_token_display() {
    let tokens = lex_clean("int");
    assert_eq!(tokens[0].to_string(), "Token [Type: INT, Value: 'int', Line: 1]");
    assert_eq!(tokens[1].to_string(), "Token [Type: END_OF_FILE, Value: '', Line: 1]");
}
