use std::fmt;

/// Token with attached kind, matched text and line number.
///
/// Tokens are immutable once the lexer produced them. Use
/// [kind](Token::kind), [text](Token::text) and [get_line](Token::get_line)
/// to inspect them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    ln: u64,
}

/// Basic token type
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// int keyword
    Int,
    /// char keyword
    Char,
    /// return keyword
    Return,
    /// for keyword
    For,
    /// any unknown keyword(variable names, function names, ..)
    Identifier,
    /// run of decimal digits (e.g. 42)
    NumberLiteral,
    /// text between double quotes
    StringLiteral,
    /// ;
    Semicolon,
    /// (
    OpenParanth,
    /// )
    CloseParanth,
    /// {
    OpenCurly,
    /// }
    CloseCurly,
    /// <
    OpenAngle,
    /// >
    CloseAngle,
    /// =
    Assign,
    /// +
    Plus,
    /// -
    Hyphen,
    /// *
    Asterisk,
    /// #include directive
    Include,
    /// end of the token stream
    Eof,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, ln: u64) -> Self {
        Self {
            kind,
            text: text.into(),
            ln,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn get_line(&self) -> u64 {
        self.ln
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl TokenKind {
    /// Exact, case-sensitive keyword lookup.
    pub fn keyword(s: &str) -> Option<Self> {
        match s {
            "int" => Some(Self::Int),
            "char" => Some(Self::Char),
            "return" => Some(Self::Return),
            "for" => Some(Self::For),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Char => "CHAR",
            Self::Return => "RETURN",
            Self::For => "FOR",
            Self::Identifier => "IDENTIFIER",
            Self::NumberLiteral => "NUMBER_LITERAL",
            Self::StringLiteral => "STRING_LITERAL",
            Self::Semicolon => "SEMICOLON",
            Self::OpenParanth => "OPEN_PAREN",
            Self::CloseParanth => "CLOSE_PAREN",
            Self::OpenCurly => "OPEN_BRACE",
            Self::CloseCurly => "CLOSE_BRACE",
            Self::OpenAngle => "OPEN_ANGLE",
            Self::CloseAngle => "CLOSE_ANGLE",
            Self::Assign => "EQUALS",
            Self::Plus => "PLUS",
            Self::Hyphen => "MINUS",
            Self::Asterisk => "STAR",
            Self::Include => "INCLUDE",
            Self::Eof => "END_OF_FILE",
        }
    }
}

impl TryFrom<char> for TokenKind {
    type Error = char;
    fn try_from(c: char) -> std::result::Result<Self, char> {
        match c {
            ';' => Ok(Self::Semicolon),
            '(' => Ok(Self::OpenParanth),
            ')' => Ok(Self::CloseParanth),
            '{' => Ok(Self::OpenCurly),
            '}' => Ok(Self::CloseCurly),
            '<' => Ok(Self::OpenAngle),
            '>' => Ok(Self::CloseAngle),
            '=' => Ok(Self::Assign),
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Hyphen),
            '*' => Ok(Self::Asterisk),
            _ => Err(c),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token [Type: {}, Value: '{}', Line: {}]",
            self.kind, self.text, self.ln
        )
    }
}
