/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: numbers, text, booleans and the `nothing` constant.
/// It is used in the AST to represent literal expressions and as a convenient
/// container for constants during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal. All Sigma numbers share this
    /// representation.
    Number(f64),
    /// A text literal, written between double quotes.
    Text(String),
    /// A boolean literal value: `true` or `fals`.
    Bool(bool),
    /// The absent value, written `nothing`.
    Nothing,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// function calls, arithmetic, casts and array literals. Each variant models a
/// distinct syntactic construct and carries its source line for error
/// reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, text, boolean or `nothing`).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation or a prefix step).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, logic, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `double{4}`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Array literal expression, written `( e1 e2 ... )`.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A cast expression such as `num.x` or `arr.(3)`.
    Cast {
        /// The target kind of the cast.
        kind: CastKind,
        /// The expression being cast.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use sigma::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Cast { line, .. } => *line,
        }
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as loop and conditional bodies and as function bodies. The
/// value of a block is the value of its last statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening delimiter.
    pub line:       usize,
}

/// Represents a user-defined function definition.
///
/// A function binds required and optional parameter names to a body block.
/// Optional parameters that receive no argument are bound to `nothing`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:            String,
    /// The required parameter names.
    pub params:          Vec<String>,
    /// The optional parameter names, written inside `[...]`.
    pub optional_params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:            Block,
    /// Line number in the source code.
    pub line:            usize,
}

/// Represents a single statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `var`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A compound assignment consisting of a variable and an operation.
    CompoundAssignment {
        /// The name of the variable.
        name:  String,
        /// The binary operation (e.g. `+<-`, `-<-`).
        op:    BinaryOperator,
        /// The value to be combined with the current variable value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A conditional chain: `if`, any number of `butif` arms and an optional
    /// `but` fallback.
    If {
        /// Condition and body pairs, in source order.
        arms:      Vec<(Expr, Block)>,
        /// The `but` block, if present.
        otherwise: Option<Block>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A counted `for` loop with declaration, condition and step.
    For {
        /// The declaration initializing the loop variable.
        init:      Box<Self>,
        /// The condition checked before each iteration.
        condition: Expr,
        /// The step statement applied after each iteration.
        step:      Box<Self>,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `foreach` loop over the elements of an array variable.
    Foreach {
        /// The per-element variable name.
        name:       String,
        /// The variable holding the collection.
        collection: String,
        /// The loop body.
        body:       Block,
        /// Line number in the source code.
        line:       usize,
    },
    /// A `when` loop, repeating while its condition holds.
    When {
        /// The condition checked before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `loop` statement, repeating while the implicit counter stays below
    /// the bound.
    Loop {
        /// The iteration bound, re-evaluated before each pass.
        bound: Expr,
        /// The loop body.
        body:  Block,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `change` statement dispatching on a subject value.
    Change {
        /// The subject expression, evaluated once.
        subject: Expr,
        /// Case value and body pairs, in source order.
        cases:   Vec<(Expr, Block)>,
        /// The `nocase` block, if present.
        nocase:  Option<Block>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// The target kind of a cast expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CastKind {
    /// `num.` casts to a number.
    Number,
    /// `str.` casts to text.
    Text,
    /// `tf.` casts to a boolean.
    Bool,
    /// `arr.` casts to an array.
    Array,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparison and logic connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Flooring division (`//`)
    FloorDiv,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<?`, `≤`)
    LessEqual,
    /// Greater than or equal (`>?`, `≥`)
    GreaterEqual,
    /// Equal to (`?`)
    Equal,
    /// Not equal to (`!?`)
    NotEqual,
    /// Same kind as (`??`)
    SameKind,
    /// Not the same kind as (`!??`)
    NotSameKind,
    /// Approximately equal to (`~`)
    ApproxEqual,
    /// Not approximately equal to (`!~`)
    NotApproxEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Logical not-and (`nand`)
    Nand,
    /// Logical not-or (`nor`)
    Nor,
    /// Logical exclusive or (`xor`)
    Xor,
    /// Logical equivalence (`xnor`)
    Xnor,
    /// Logical implication (`implies`)
    Implies,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation or reversal (e.g. `-x`).
    Negate,
    /// Logical NOT (`!x` or `not x`).
    Not,
    /// Prefix increment (`++x`). Updates the named binding.
    Increment,
    /// Prefix decrement (`--x`). Updates the named binding.
    Decrement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, ApproxEqual, Div, Equal, FloorDiv, Greater, GreaterEqual, Implies, Less,
            LessEqual, Mod, Mul, Nand, Nor, NotApproxEqual, NotEqual, NotSameKind, Or, Pow,
            SameKind, Sub, Xnor, Xor,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Pow => "^",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<?",
            GreaterEqual => ">?",
            Equal => "?",
            NotEqual => "!?",
            SameKind => "??",
            NotSameKind => "!??",
            ApproxEqual => "~",
            NotApproxEqual => "!~",
            And => "and",
            Or => "or",
            Nand => "nand",
            Nor => "nor",
            Xor => "xor",
            Xnor => "xnor",
            Implies => "implies",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for CastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Number => "num",
            Self::Text => "str",
            Self::Bool => "tf",
            Self::Array => "arr",
        };
        write!(f, "{kind}")
    }
}
