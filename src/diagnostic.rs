//! Structured, span-carrying errors surfaced by lexing and parsing.

use crate::span::Span;

/// Severity of a [`Diagnostic`]. Today every diagnostic this crate emits
/// is an `Error` — the variant exists so callers embedding this parser
/// in a linter or language server have somewhere to grow a `Warning`
/// lint pass without changing the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Parsing cannot continue treating this input as valid SQL.
    Error,
    /// The input parses but is suspect.
    Warning,
}

/// A single reported problem, with enough context to render a caret
/// diagnostic against the original source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// How serious this diagnostic is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Where in the source this diagnostic applies.
    pub span: Span,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic.
    #[must_use]
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }

    /// Renders the offending source line with a `^` caret under the
    /// span's start column, in the style of rustc/cargo diagnostics.
    #[must_use]
    pub fn render_snippet(&self, source: &str) -> String {
        let line_text = source.lines().nth((self.span.line - 1) as usize).unwrap_or("");
        let caret_pad = " ".repeat((self.span.column.saturating_sub(1)) as usize);
        format!(
            "{}: {}\n  --> line {}, column {}\n  | {}\n  | {}^",
            match self.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            },
            self.message,
            self.span.line,
            self.span.column,
            line_text,
            caret_pad,
        )
    }
}

/// Errors raised directly by the lexer, before the parser ever sees a
/// well-formed token. The scanner constructs these at the point of
/// failure and carries them inside a [`crate::lexer::TokenKind::Error`]
/// token so the token stream stays total; the parser then surfaces the
/// carried `LexError` as a [`Diagnostic`] the first time it reaches that
/// token, and [`tokenize`](crate::tokenize) callers can match on it
/// directly without going through the parser at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexError {
    /// A `'...'`, `"..."`, `` `...` ``, or `[...]` never found its
    /// terminator before end of input.
    #[error("unterminated literal at {span:?}: {detail}")]
    UnterminatedLiteral {
        /// Where the literal started.
        span: Span,
        /// Human-readable detail (which kind of literal).
        detail: String,
    },
    /// A `/* ... */` block comment never found its `*/`.
    #[error("unterminated block comment at {span:?}")]
    UnterminatedBlockComment {
        /// Where the comment started.
        span: Span,
    },
    /// A literal scanned to completion but its content is malformed
    /// (odd-length or non-hex `BLOB` digits, a hex integer with no
    /// digits after `0x`, an out-of-range `?N` parameter index, or an
    /// empty parameter name after `:`/`@`/`$`).
    #[error("invalid literal at {span:?}: {detail}")]
    InvalidLiteral {
        /// Where the malformed literal started.
        span: Span,
        /// Human-readable detail.
        detail: String,
    },
    /// A character the grammar has no rule for at all (e.g. a bare `!`
    /// not followed by `=`, or a stray `#`).
    #[error("unexpected character at {span:?}: {detail}")]
    UnexpectedCharacter {
        /// Where the character occurred.
        span: Span,
        /// Human-readable detail.
        detail: String,
    },
}

impl LexError {
    /// The span this error applies to, regardless of variant.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnterminatedLiteral { span, .. }
            | Self::UnterminatedBlockComment { span }
            | Self::InvalidLiteral { span, .. }
            | Self::UnexpectedCharacter { span, .. } => *span,
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        let span = err.span();
        Self::error(err.to_string(), span)
    }
}

/// Errors raised by the parser while building the AST from an otherwise
/// well-formed token stream.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    /// The parser expected one of a known set of tokens and found
    /// something else.
    #[error("expected {expected}, found {found} at {span:?}")]
    UnexpectedToken {
        /// What the grammar expected at this position.
        expected: String,
        /// A description of what was actually found.
        found: String,
        /// Where the mismatch occurred.
        span: Span,
    },
    /// The token stream ended in the middle of a construct.
    #[error("unexpected end of input, expected {expected} at {span:?}")]
    UnexpectedEof {
        /// What the grammar still expected.
        expected: String,
        /// The position of the `Eof` token.
        span: Span,
    },
    /// A construct parsed syntactically but violates a structural
    /// invariant the grammar enforces out of band (e.g. a trigger body
    /// statement that isn't one of the four permitted kinds).
    #[error(transparent)]
    StructuralViolation(#[from] StructuralError),
    /// The token the parser needed to consume next was never a real
    /// token at all — the lexer failed to produce one at this position.
    #[error(transparent)]
    Lexical(#[from] LexError),
}

impl SyntaxError {
    /// The span this error applies to, regardless of variant.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } | Self::UnexpectedEof { span, .. } => *span,
            Self::StructuralViolation(err) => err.span(),
            Self::Lexical(err) => err.span(),
        }
    }
}

/// Errors for constructs that parse according to the grammar but violate
/// a structural invariant enforced out of band, rather than a simple
/// token mismatch — e.g. a trigger body statement that isn't one of the
/// four permitted kinds, or a window frame with `UNBOUNDED FOLLOWING` as
/// its start bound.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StructuralError {
    /// A construct's shape is grammatically valid but violates an
    /// out-of-band invariant.
    #[error("{detail} at {span:?}")]
    Violation {
        /// Human-readable description of the violated invariant.
        detail: String,
        /// Where the violation was detected.
        span: Span,
    },
}

impl StructuralError {
    /// The span this error applies to, regardless of variant.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Violation { span, .. } => *span,
        }
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(err: SyntaxError) -> Self {
        let span = err.span();
        Self::error(err.to_string(), span)
    }
}
