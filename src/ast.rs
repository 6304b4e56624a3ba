/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all syntactic forms: literals, matrix construction,
/// names, function application, the structural operators and the keyword
/// forms. Evaluating an expression yields a value, except for the
/// declarations, which only change the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An atomic literal kept as source text. Whether it reads as a
    /// number or stays text is decided at evaluation time.
    Literal(String),
    /// A bracketed matrix literal such as `[1 2 3]`. The elements become
    /// a single row whose column count equals the element count.
    MatrixLiteral(Vec<Self>),
    /// Reference to a variable by its uppercase name.
    Variable(String),
    /// `variable NAME is EXPR`
    VariableDeclaration {
        /// The uppercase name being declared.
        name:  String,
        /// The expression supplying the value.
        value: Box<Self>,
    },
    /// `function name A is EXPR` or `function name A B is EXPR`
    FunctionDeclaration {
        /// The name of the function.
        name:      String,
        /// The first (or only) parameter name.
        parameter: String,
        /// The second parameter name for dyadic functions.
        second:    Option<String>,
        /// The body evaluated on every call.
        body:      Box<Self>,
    },
    /// Application of a named function to one argument (`f E`) or two
    /// (`A f B`).
    Call {
        /// The name of the function being called.
        name:      String,
        /// The argument expressions, one or two.
        arguments: Vec<Self>,
    },
    /// `f / EXPR`: folds a dyadic function across a matrix.
    Reduce {
        /// The name of the dyadic function.
        function: String,
        /// The matrix being folded.
        operand:  Box<Self>,
    },
    /// `f \ EXPR`: folds a dyadic function across a matrix, keeping every
    /// intermediate result.
    Scan {
        /// The name of the dyadic function.
        function: String,
        /// The matrix being folded.
        operand:  Box<Self>,
    },
    /// `MASK \ EXPR`: keeps the cells or characters selected by a mask.
    Compress {
        /// The mask of `1`s and `0`s.
        mask:  Box<Self>,
        /// The matrix or text being filtered.
        value: Box<Self>,
    },
    /// `A f.g B`: combines paired cells with `g`, then folds each row of
    /// results with `f`.
    InnerProduct {
        /// The name of the folding function.
        fold:    String,
        /// The name of the pairwise function.
        combine: String,
        /// The left matrix.
        left:    Box<Self>,
        /// The right matrix.
        right:   Box<Self>,
    },
    /// `A @.g B`: applies `g` to every pairing of cells from two vectors.
    OuterProduct {
        /// The name of the pairwise function.
        combine: String,
        /// The left vector.
        left:    Box<Self>,
        /// The right vector.
        right:   Box<Self>,
    },
    /// `let NAME as ATOM in EXPR`: binds a name for the body only.
    LetExpression {
        /// The uppercase name being bound.
        name:    String,
        /// The atomic expression supplying the value.
        binding: Box<Self>,
        /// The body evaluated with the binding in scope.
        body:    Box<Self>,
    },
    /// `if COND then EXPR` with an optional `else EXPR`.
    Conditional {
        /// The condition deciding which branch runs.
        condition:   Box<Self>,
        /// The branch taken when the condition holds.
        then_branch: Box<Self>,
        /// The branch taken otherwise, if any.
        else_branch: Option<Box<Self>>,
    },
}
