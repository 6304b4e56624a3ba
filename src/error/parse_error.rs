#[derive(Debug)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// The token sequence was empty.
    EmptyExpression,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of the tokens unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    UnterminatedParenthesis,
    /// A closing bracket `]` was expected but not found.
    UnterminatedMatrix,
    /// A function was applied without an argument to operate on.
    MissingOperand {
        /// The name of the function missing its argument.
        function: String,
    },
    /// An uppercase variable name was expected but not found.
    ExpectedVariableName {
        /// The token encountered instead.
        token: String,
    },
    /// A function name was expected but not found.
    ExpectedFunctionName {
        /// The token encountered instead.
        token: String,
    },
    /// A specific keyword was expected but not found.
    ExpectedKeyword {
        /// The keyword that was expected.
        keyword: &'static str,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => {
                write!(f, "Parse error: Blank expressions cannot be evaluated.")
            },

            Self::UnexpectedToken { token } => {
                write!(f, "Parse error: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Parse error: Unexpected end of input."),

            Self::UnterminatedParenthesis => write!(f,
                                                    "Parse error: Expected closing parenthesis ')' but none found."),

            Self::UnterminatedMatrix => write!(f,
                                               "Parse error: Expected closing bracket ']' but none found."),

            Self::MissingOperand { function } => write!(f,
                                                        "Parse error: The function '{function}' has nothing to operate on."),

            Self::ExpectedVariableName { token } => write!(f,
                                                           "Parse error: A variable name in uppercase letters was expected but '{token}' was found."),

            Self::ExpectedFunctionName { token } => write!(f,
                                                           "Parse error: A function name was expected but '{token}' was found."),

            Self::ExpectedKeyword { keyword } => write!(f,
                                                        "Parse error: The keyword '{keyword}' was expected but not found."),

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Parse error: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
