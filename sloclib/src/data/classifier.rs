//! Per-line classification into code, comment and blank.
//!
//! A [`LineClassifier`] scans one stream line by line. The only state it
//! carries between lines is whether a block comment is open ([`ScanState`]).
//!
//! Each line is reduced to [`Markers`]: the byte offset of the first
//! occurrence of the line-comment token, the block-start token and the
//! block-end token. The markers are then run through [`RULES`], an ordered
//! decision table where the first matching [`Rule`] decides the outcome and
//! the next state.
//!
//! The rule order is deliberately simple-minded. A line comment token ahead of
//! a block start wins, nested block comments are not tracked, and tokens
//! inside string literals still count as comment markers.

use crate::source::languages::CommentSyntax;

/// Whether the scanner is inside an unterminated block comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Normal,
    InBlockComment,
}

/// Outcome for one physical line.
///
/// `code` and `comment` are independent: `x = 1; // set` is both.
/// `blank` is only set when neither of the others is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineClass {
    pub code: bool,
    pub comment: bool,
    pub blank: bool,
}

impl LineClass {
    const CODE: Self = Self {
        code: true,
        comment: false,
        blank: false,
    };
    const BLANK: Self = Self {
        code: false,
        comment: false,
        blank: true,
    };
    const NONE: Self = Self {
        code: false,
        comment: false,
        blank: false,
    };

    fn comment(code_before: bool) -> Self {
        Self {
            code: code_before,
            comment: true,
            blank: false,
        }
    }

    /// Short label used in trace output.
    pub fn label(&self) -> &'static str {
        match (self.code, self.comment, self.blank) {
            (true, true, _) => "CODE+COMM",
            (true, false, _) => "CODE",
            (false, true, _) => "COMM",
            (false, false, true) => "BLANK",
            (false, false, false) => "-",
        }
    }
}

/// Offsets of the first comment tokens on a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub inline: Option<usize>,
    pub block_start: Option<usize>,
    pub block_end: Option<usize>,
    /// The line is empty or nothing but a line terminator
    pub blank: bool,
}

impl Markers {
    /// Locate the comment tokens of `syntax` on `line`.
    pub fn scan(line: &[u8], syntax: &CommentSyntax) -> Self {
        let (block_start, block_end) = match syntax.block {
            Some(block) => (
                find(line, block.start.as_bytes()),
                find(line, block.end.as_bytes()),
            ),
            None => (None, None),
        };

        Self {
            inline: syntax.line.and_then(|token| find(line, token.as_bytes())),
            block_start,
            block_end,
            blank: is_blank(line),
        }
    }

    fn none_found(&self) -> bool {
        self.inline.is_none() && self.block_start.is_none() && self.block_end.is_none()
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Line comment token at column 0
    LineCommentAtStart,
    /// Block comment opens at column 0 and closes later on the same line
    BlockCommentAtStartCloses,
    /// Block comment opens at column 0 and stays open
    BlockCommentAtStartOpens,
    /// No comment tokens at all outside a block comment
    PlainCode,
    /// Line comment token after column 0
    TrailingLineComment,
    /// Block comment opens after column 0 and stays open
    TrailingBlockCommentOpens,
    /// Block comment opens after column 0 and an end token is present
    TrailingBlockComment,
    /// Inside a block comment that does not close on this line
    InsideBlockComment,
    /// Inside a block comment that closes on this line
    BlockCommentCloses,
    /// Nothing but a line terminator
    Blank,
}

/// The decision table, highest priority first.
pub const RULES: [Rule; 10] = [
    Rule::LineCommentAtStart,
    Rule::BlockCommentAtStartCloses,
    Rule::BlockCommentAtStartOpens,
    Rule::PlainCode,
    Rule::TrailingLineComment,
    Rule::TrailingBlockCommentOpens,
    Rule::TrailingBlockComment,
    Rule::InsideBlockComment,
    Rule::BlockCommentCloses,
    Rule::Blank,
];

impl Rule {
    /// Whether this rule applies to a line with `markers` in `state`.
    pub fn matches(self, markers: &Markers, state: ScanState) -> bool {
        let in_block = state == ScanState::InBlockComment;
        match self {
            Rule::LineCommentAtStart => markers.inline == Some(0),
            Rule::BlockCommentAtStartCloses => {
                markers.block_start == Some(0) && matches!(markers.block_end, Some(end) if end > 0)
            }
            Rule::BlockCommentAtStartOpens => {
                markers.block_start == Some(0) && markers.block_end.is_none()
            }
            Rule::PlainCode => markers.none_found() && !in_block && !markers.blank,
            Rule::TrailingLineComment => matches!(markers.inline, Some(at) if at > 0),
            Rule::TrailingBlockCommentOpens => {
                matches!(markers.block_start, Some(at) if at > 0) && markers.block_end.is_none()
            }
            Rule::TrailingBlockComment => {
                matches!(markers.block_start, Some(at) if at > 0)
                    && matches!(markers.block_end, Some(end) if end > 0)
            }
            Rule::InsideBlockComment => in_block && markers.block_end.is_none(),
            Rule::BlockCommentCloses => in_block && markers.block_end.is_some(),
            Rule::Blank => !in_block && markers.blank,
        }
    }

    /// Outcome and next state for a line this rule matched.
    pub fn apply(self, line: &[u8], markers: &Markers, state: ScanState) -> (LineClass, ScanState) {
        let code_before = |offset: Option<usize>| offset.is_some_and(|at| has_code_before(line, at));
        match self {
            Rule::LineCommentAtStart | Rule::BlockCommentAtStartCloses => {
                (LineClass::comment(false), state)
            }
            Rule::BlockCommentAtStartOpens => (LineClass::comment(false), ScanState::InBlockComment),
            Rule::PlainCode => (LineClass::CODE, state),
            Rule::TrailingLineComment => (LineClass::comment(code_before(markers.inline)), state),
            Rule::TrailingBlockCommentOpens => (
                LineClass::comment(code_before(markers.block_start)),
                ScanState::InBlockComment,
            ),
            Rule::TrailingBlockComment => {
                (LineClass::comment(code_before(markers.block_start)), state)
            }
            Rule::InsideBlockComment => (LineClass::comment(false), state),
            Rule::BlockCommentCloses => (LineClass::comment(false), ScanState::Normal),
            Rule::Blank => (LineClass::BLANK, state),
        }
    }
}

/// First rule in [`RULES`] that matches, if any.
pub fn select_rule(markers: &Markers, state: ScanState) -> Option<Rule> {
    RULES.into_iter().find(|rule| rule.matches(markers, state))
}

/// Stateful classifier for a single stream.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    syntax: CommentSyntax,
    state: ScanState,
}

impl LineClassifier {
    /// A fresh classifier in `ScanState::Normal`.
    pub fn new(syntax: CommentSyntax) -> Self {
        Self {
            syntax,
            state: ScanState::Normal,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Classify one line (terminator included) and advance the state.
    pub fn classify(&mut self, line: &[u8]) -> LineClass {
        let markers = Markers::scan(line, &self.syntax);
        match select_rule(&markers, self.state) {
            Some(rule) => {
                let (class, next) = rule.apply(line, &markers, self.state);
                self.state = next;
                class
            }
            None => LineClass::NONE,
        }
    }
}

/// `isspace` in the C locale: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Any non-whitespace byte in `line[..stop]`.
fn has_code_before(line: &[u8], stop: usize) -> bool {
    line[..stop.min(line.len())].iter().any(|&b| !is_space(b))
}

fn is_blank(line: &[u8]) -> bool {
    matches!(line, b"" | b"\n" | b"\r\n" | b"\r")
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: CommentSyntax = CommentSyntax::both("//", "/*", "*/");
    const HASH: CommentSyntax = CommentSyntax::line("#");

    fn class(code: bool, comment: bool, blank: bool) -> LineClass {
        LineClass {
            code,
            comment,
            blank,
        }
    }

    fn run(syntax: CommentSyntax, lines: &[&str]) -> (Vec<LineClass>, ScanState) {
        let mut classifier = LineClassifier::new(syntax);
        let classes = lines
            .iter()
            .map(|line| classifier.classify(line.as_bytes()))
            .collect();
        (classes, classifier.state())
    }

    fn select(syntax: CommentSyntax, line: &str, state: ScanState) -> Option<Rule> {
        select_rule(&Markers::scan(line.as_bytes(), &syntax), state)
    }

    #[test]
    fn test_find() {
        assert_eq!(find(b"int x; // y", b"//"), Some(7));
        assert_eq!(find(b"abc", b"abcd"), None);
        assert_eq!(find(b"abc", b""), None);
        assert_eq!(find(b"/*/", b"*/"), Some(1));
    }

    #[test]
    fn test_markers_scan() {
        let markers = Markers::scan(b"a /* b */ // c\n", &C);
        assert_eq!(markers.inline, Some(10));
        assert_eq!(markers.block_start, Some(2));
        assert_eq!(markers.block_end, Some(7));
        assert!(!markers.blank);

        let markers = Markers::scan(b"x /* y\n", &HASH);
        assert_eq!(markers.block_start, None);
        assert_eq!(markers.block_end, None);
    }

    #[test]
    fn test_rule_selection_order() {
        use ScanState::*;
        assert_eq!(select(C, "// c\n", Normal), Some(Rule::LineCommentAtStart));
        assert_eq!(select(C, "/* c */\n", Normal), Some(Rule::BlockCommentAtStartCloses));
        assert_eq!(select(C, "/* c\n", Normal), Some(Rule::BlockCommentAtStartOpens));
        assert_eq!(select(C, "x = 1;\n", Normal), Some(Rule::PlainCode));
        assert_eq!(select(C, "x; // c\n", Normal), Some(Rule::TrailingLineComment));
        assert_eq!(select(C, "x; /* c\n", Normal), Some(Rule::TrailingBlockCommentOpens));
        assert_eq!(select(C, "x; /* c */\n", Normal), Some(Rule::TrailingBlockComment));
        assert_eq!(select(C, "body\n", InBlockComment), Some(Rule::InsideBlockComment));
        assert_eq!(select(C, "end */\n", InBlockComment), Some(Rule::BlockCommentCloses));
        assert_eq!(select(C, "\n", Normal), Some(Rule::Blank));
    }

    #[test]
    fn test_bare_terminator_is_blank_outside_block() {
        for line in ["\n", "\r\n", "\r", ""] {
            let markers = Markers::scan(line.as_bytes(), &C);
            let rule = select_rule(&markers, ScanState::Normal).unwrap();
            assert_eq!(rule, Rule::Blank);
            let (outcome, next) = rule.apply(line.as_bytes(), &markers, ScanState::Normal);
            assert_eq!(outcome, class(false, false, true));
            assert_eq!(next, ScanState::Normal);
        }
    }

    #[test]
    fn test_bare_terminator_inside_block_is_comment() {
        for line in ["\n", "\r\n", "\r"] {
            let markers = Markers::scan(line.as_bytes(), &C);
            let state = ScanState::InBlockComment;
            let rule = select_rule(&markers, state).unwrap();
            assert_eq!(rule, Rule::InsideBlockComment);
            let (outcome, next) = rule.apply(line.as_bytes(), &markers, state);
            assert_eq!(outcome, class(false, true, false));
            assert_eq!(next, state);
        }
    }

    #[test]
    fn test_stray_block_end_matches_no_rule() {
        assert_eq!(select(C, "x */\n", ScanState::Normal), None);

        let (classes, state) = run(C, &["x */\n"]);
        assert_eq!(classes, vec![LineClass::NONE]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_code_with_trailing_line_comment() {
        let (classes, _) = run(HASH, &["x = 1  # set x\n"]);
        assert_eq!(classes, vec![class(true, true, false)]);

        let (classes, _) = run(
            CommentSyntax::line("//"),
            &["int x = 1; // set x\n"],
        );
        assert_eq!(classes, vec![class(true, true, false)]);
    }

    #[test]
    fn test_indented_line_comment_is_comment_only() {
        let (classes, _) = run(C, &["    // indented\n"]);
        assert_eq!(classes, vec![class(false, true, false)]);
    }

    #[test]
    fn test_whitespace_only_line_is_code() {
        let (classes, _) = run(C, &["   \n", "\t\n"]);
        assert_eq!(classes, vec![class(true, false, false); 2]);
    }

    #[test]
    fn test_three_line_block_comment() {
        let (classes, state) = run(C, &["/*\n", "comment body\n", "*/\n"]);
        assert_eq!(classes, vec![class(false, true, false); 3]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_long_block_comment_counts_every_line() {
        let mut lines = vec!["/* start\n"];
        lines.extend(std::iter::repeat("  * middle\n").take(8));
        lines.push("  end */\n");
        let (classes, state) = run(C, &lines);
        assert_eq!(classes.len(), 10);
        assert!(classes.iter().all(|c| *c == class(false, true, false)));
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_code_before_block_open() {
        let (classes, state) = run(C, &["int y; /* begins\n", "still comment\n", "*/\n", "y++;\n"]);
        assert_eq!(
            classes,
            vec![
                class(true, true, false),
                class(false, true, false),
                class(false, true, false),
                class(true, false, false),
            ]
        );
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_single_line_block_comments() {
        let (classes, state) = run(C, &["/* one */\n", "f(); /* two */\n", "   /* three */\n"]);
        assert_eq!(
            classes,
            vec![
                class(false, true, false),
                class(true, true, false),
                class(false, true, false),
            ]
        );
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_blank_line_inside_block_comment() {
        let (classes, state) = run(C, &["/*\n", "\n", "*/\n"]);
        assert_eq!(classes, vec![class(false, true, false); 3]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_line_comment_wins_over_block_start() {
        // The block start sits behind a line comment, so it never opens.
        let (classes, state) = run(C, &["// see /* here\n", "code();\n"]);
        assert_eq!(
            classes,
            vec![class(false, true, false), class(true, false, false)]
        );
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_trailing_line_comment_before_block_start_keeps_state() {
        let (_, state) = run(C, &["x; // then /* not opened\n"]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_nested_block_start_is_ignored() {
        let (classes, state) = run(C, &["/* outer\n", "/* inner\n", "*/\n", "after();\n"]);
        assert_eq!(classes[3], class(true, false, false));
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_close_and_reopen_on_one_line_stays_open() {
        // The start token comes after column 0 with an end present, so the
        // block is treated as a one-liner and the state is left alone.
        let (classes, state) = run(C, &["/* a\n", "b */ c /* d\n", "e\n"]);
        assert_eq!(classes[1], class(true, true, false));
        assert_eq!(state, ScanState::InBlockComment);
        assert_eq!(classes[2], class(false, true, false));
    }

    #[test]
    fn test_block_end_at_column_zero_closes() {
        let (classes, state) = run(C, &["/*\n", "*/ trailing\n"]);
        assert_eq!(classes[1], class(false, true, false));
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_line_only_language_never_enters_block() {
        let (classes, state) = run(HASH, &["x = '/*'\n", "y = 2\n"]);
        assert_eq!(classes, vec![class(true, false, false); 2]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_block_only_language() {
        let css = CommentSyntax::block("/*", "*/");
        let (classes, state) = run(css, &["a { color: red; } /* red\n", "still */\n", "b {}\n"]);
        assert_eq!(
            classes,
            vec![
                class(true, true, false),
                class(false, true, false),
                class(true, false, false),
            ]
        );
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_no_comment_syntax() {
        let (classes, _) = run(CommentSyntax::NONE, &["{\"a\": 1}\n", "\n", "// not a comment\n"]);
        assert_eq!(
            classes,
            vec![
                class(true, false, false),
                class(false, false, true),
                class(true, false, false),
            ]
        );
    }

    #[test]
    fn test_string_literal_markers_still_count() {
        let (classes, _) = run(C, &["url = \"http://example.com\";\n"]);
        assert_eq!(classes, vec![class(true, true, false)]);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let lines = ["int a; /* x\n", "y */\n", "\n", "// z\n", "b();\n"];
        let first = run(C, &lines);
        let second = run(C, &lines);
        assert_eq!(first, second);
    }

    #[test]
    fn test_label() {
        assert_eq!(class(true, true, false).label(), "CODE+COMM");
        assert_eq!(class(true, false, false).label(), "CODE");
        assert_eq!(class(false, true, false).label(), "COMM");
        assert_eq!(class(false, false, true).label(), "BLANK");
        assert_eq!(LineClass::default().label(), "-");
    }
}
