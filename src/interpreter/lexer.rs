use logos::Logos;

/// Represents a lexical token in a source line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Classification follows the leading character: uppercase runs name
/// variables, lowercase runs name keywords or spelled-out functions, digit
/// runs are numeric literals and runs of symbol characters are symbolic
/// function names.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `1.`.
    /// Dots are swallowed greedily; whether the text is a well-formed
    /// number is decided at evaluation time.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// Quoted text literal tokens, such as `"hello"`.
    /// A missing closing quote is tolerated and the text runs to the end
    /// of the line.
    #[regex(r#""[^"]*"?"#, trim_quotes)]
    Text(String),
    /// Variable name tokens; uppercase runs such as `X` or `TOTAL`.
    #[regex(r"[A-Z]+", |lex| lex.slice().to_string())]
    VariableName(String),
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `let`
    #[token("let")]
    Let,
    /// `as`
    #[token("as")]
    As,
    /// `in`
    #[token("in")]
    In,
    /// `function`
    #[token("function")]
    Function,
    /// `variable`
    #[token("variable")]
    Variable,
    /// Function name tokens. Either a lowercase run that is not a keyword
    /// (`mod`, `sorta`), a single arithmetic character (`+`, `-`, `x`
    /// lexes as a lowercase run, `|`), or a run of other symbol
    /// characters (`<=`, `?`, `$`).
    #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
    #[token("+", |lex| lex.slice().to_string())]
    #[token("-", |lex| lex.slice().to_string())]
    #[token("*", |lex| lex.slice().to_string())]
    #[token("|", |lex| lex.slice().to_string())]
    #[regex(r"[!#$%&'<=>?^_~:;{}]+", |lex| lex.slice().to_string())]
    FunctionName(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `/`
    #[token("/")]
    Slash,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `.`
    #[token(".")]
    Dot,
    /// `@`
    #[token("@")]
    At,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces and tabs. Kept as a token so callers decide whether to
    /// discard them.
    #[regex(r"[ \t\f]+")]
    Whitespace,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::VariableName(name) => write!(f, "{name}"),
            Self::FunctionName(name) => write!(f, "{name}"),
            Self::If => write!(f, "if"),
            Self::Then => write!(f, "then"),
            Self::Else => write!(f, "else"),
            Self::Let => write!(f, "let"),
            Self::As => write!(f, "as"),
            Self::In => write!(f, "in"),
            Self::Function => write!(f, "function"),
            Self::Variable => write!(f, "variable"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Slash => write!(f, "/"),
            Self::Backslash => write!(f, "\\"),
            Self::Dot => write!(f, "."),
            Self::At => write!(f, "@"),
            Self::Comma => write!(f, ","),
            Self::Whitespace => write!(f, " "),
        }
    }
}

/// Strips the surrounding quotes from a text literal slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - The text between the quotes, with an unterminated literal keeping
///   everything after the opening quote.
fn trim_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = slice.strip_prefix('"').unwrap_or(slice);
    body.strip_suffix('"').unwrap_or(body).to_string()
}
