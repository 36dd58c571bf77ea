use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Text literal tokens, written between double quotes. Text may span
    /// lines; there are no escape sequences.
    #[regex(r#""[^"]*""#, parse_text)]
    Text(String),
    /// Boolean literal tokens: `true` or `fals`.
    #[token("true", parse_bool)]
    #[token("fals", parse_bool)]
    Bool(bool),
    /// `nothing`
    #[token("nothing")]
    Nothing,
    /// `var`
    #[token("var")]
    Var,
    /// `func`
    #[token("func")]
    Func,
    /// `if`
    #[token("if")]
    If,
    /// `butif`
    #[token("butif")]
    Butif,
    /// `but`
    #[token("but")]
    But,
    /// `for`
    #[token("for")]
    For,
    /// `foreach`
    #[token("foreach")]
    Foreach,
    /// `when`
    #[token("when")]
    When,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `of`
    #[token("of")]
    Of,
    /// `count`, the implicit loop counter.
    #[token("count")]
    Count,
    /// `change`
    #[token("change")]
    Change,
    /// `case`
    #[token("case")]
    Case,
    /// `nocase`
    #[token("nocase")]
    Nocase,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `nand`
    #[token("nand")]
    Nand,
    /// `nor`
    #[token("nor")]
    Nor,
    /// `xor`
    #[token("xor")]
    Xor,
    /// `xnor`
    #[token("xnor")]
    Xnor,
    /// `implies`
    #[token("implies")]
    Implies,
    /// `num`, the number cast keyword.
    #[token("num")]
    KwNum,
    /// `str`, the text cast keyword.
    #[token("str")]
    KwStr,
    /// `tf`, the boolean cast keyword.
    #[token("tf")]
    KwTf,
    /// `arr`, the array cast keyword.
    #[token("arr")]
    KwArr,
    /// Identifier tokens; variable or function names such as `x` or `double`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Comments start with `\`. A `\.` opens a block comment closed by `.\`;
    /// anything else runs to the end of the line. Both forms are skipped. A
    /// block comment that never closes is emitted as this token so the driver
    /// can report it.
    #[regex(r"\\\.", skip_block_comment)]
    #[regex(r"\\[^.\n\r][^\n\r]*", logos::skip)]
    #[regex(r"\\", logos::skip)]
    UnterminatedComment,
    /// A string that is never closed, emitted so the driver can report it.
    #[regex(r#""[^"]*"#, parse_unterminated_text)]
    UnterminatedText,
    /// `!!`, the statement terminator.
    #[token("!!")]
    BangBang,
    /// `|`, opening and closing blocks.
    #[token("|")]
    Pipe,
    /// `<-`
    #[token("<-")]
    Assign,
    /// `+<-`
    #[token("+<-")]
    PlusAssign,
    /// `-<-`
    #[token("-<-")]
    MinusAssign,
    /// `*<-`
    #[token("*<-")]
    TimesAssign,
    /// `/<-`
    #[token("/<-")]
    DivideAssign,
    /// `//<-`
    #[token("//<-")]
    FloorDivideAssign,
    /// `^<-`
    #[token("^<-")]
    PowAssign,
    /// `%<-`
    #[token("%<-")]
    ModAssign,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `?`
    #[token("?")]
    Question,
    /// `!?`
    #[token("!?")]
    BangQuestion,
    /// `??`
    #[token("??")]
    DoubleQuestion,
    /// `!??`
    #[token("!??")]
    BangDoubleQuestion,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!~`
    #[token("!~")]
    BangTilde,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<?` or `≤`
    #[token("<?")]
    #[token("≤")]
    LessEqual,
    /// `>?` or `≥`
    #[token(">?")]
    #[token("≥")]
    GreaterEqual,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
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
    /// `.`
    #[token(".")]
    Period,
    /// `!`
    #[token("!")]
    Bang,
    /// `=` is never valid Sigma; it is emitted so the driver can suggest `<-`.
    #[token("=")]
    Equals,
    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed, including those inside text
/// literals and block comments.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:           usize,
    /// Newlines inside the token just produced. Subtracting this from
    /// [`Self::line`] recovers the line a multi-line token started on.
    pub token_newlines: usize,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a text literal, stripping the surrounding quotes and counting any
/// newlines the text spans. The count is kept so the token can be reported
/// on its starting line.
fn parse_text(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let newlines = slice.chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
    lex.extras.token_newlines = newlines;
    slice[1..slice.len() - 1].to_string()
}

/// Counts the newlines of an unterminated string so it is reported on the
/// line it starts on.
fn parse_unterminated_text(lex: &mut logos::Lexer<Token>) {
    let newlines = lex.slice().chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
    lex.extras.token_newlines = newlines;
}

/// Parses a boolean literal from the current token slice (`true` or `fals`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "fals" => Some(false),
        _ => None,
    }
}

/// Consumes a block comment opened by `\.` up to and including its closing
/// `.\`, counting newlines along the way. If the comment never closes, the
/// rest of the input is consumed and the token is emitted as
/// [`Token::UnterminatedComment`].
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> logos::FilterResult<(), ()> {
    match lex.remainder().find(".\\") {
        Some(index) => {
            let newlines = lex.remainder()[..index].chars().filter(|&c| c == '\n').count();
            lex.extras.line += newlines;
            lex.bump(index + 2);
            logos::FilterResult::Skip
        },
        None => {
            lex.bump(lex.remainder().len());
            logos::FilterResult::Emit(())
        },
    }
}

#[cfg(test)]
mod tests {
    use logos::Logos;

    use super::{LexerExtras, Token};

    fn lex_all(source: &str) -> Vec<(Token, usize)> {
        let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1, token_newlines: 0 });
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            let line = lexer.extras.line - std::mem::take(&mut lexer.extras.token_newlines);
            tokens.push((token.expect("lexable input"), line));
        }
        tokens
    }

    #[test]
    fn numbers_and_terminator() {
        let tokens = lex_all("var x <- 3.5!!");
        assert_eq!(tokens,
                   vec![(Token::Var, 1),
                        (Token::Identifier("x".to_string()), 1),
                        (Token::Assign, 1),
                        (Token::Number(3.5), 1),
                        (Token::BangBang, 1)]);
    }

    #[test]
    fn longest_match_wins_for_compound_operators() {
        let tokens = lex_all("x //<- 2!!");
        assert_eq!(tokens[1].0, Token::FloorDivideAssign);

        let tokens = lex_all("a !?? b");
        assert_eq!(tokens[1].0, Token::BangDoubleQuestion);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = lex_all("\\ a line comment\nvar x <- 1!!");
        assert_eq!(tokens[0], (Token::Var, 2));

        let tokens = lex_all("\\. spans\ntwo lines .\\ var y <- 2!!");
        assert_eq!(tokens[0], (Token::Var, 2));
    }

    #[test]
    fn unterminated_block_comment_is_surfaced() {
        let tokens = lex_all("\\. never closed");
        assert_eq!(tokens, vec![(Token::UnterminatedComment, 1)]);
    }

    #[test]
    fn text_spans_lines_and_reports_its_start() {
        let tokens = lex_all("\"a\nb\" 1");
        assert_eq!(tokens,
                   vec![(Token::Text("a\nb".to_string()), 1), (Token::Number(1.0), 2)]);
    }

    #[test]
    fn unterminated_text_reports_its_start() {
        let tokens = lex_all("1\n\"a\nb");
        assert_eq!(tokens,
                   vec![(Token::Number(1.0), 1), (Token::UnterminatedText, 2)]);
    }

    #[test]
    fn keywords_beat_identifiers() {
        let tokens = lex_all("foreach counter count");
        assert_eq!(tokens[0].0, Token::Foreach);
        assert_eq!(tokens[1].0, Token::Identifier("counter".to_string()));
        assert_eq!(tokens[2].0, Token::Count);
    }
}
