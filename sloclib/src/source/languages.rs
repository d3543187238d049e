//! The built-in language table.
//!
//! Each entry names a language, the filename suffixes that select it and its
//! comment syntax. Order only matters when two entries could match the same
//! filename: the first one wins (see `CMakeLists.txt` ahead of `.txt`).

use serde::Serialize;

/// Opening and closing tokens of a block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockComment {
    pub start: &'static str,
    pub end: &'static str,
}

/// Comment syntax of a language.
///
/// Both fields absent means the language has no comments at all; every
/// non-blank line of such a file is code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommentSyntax {
    /// Token that comments out the rest of the line (`//`, `#`, `--`)
    pub line: Option<&'static str>,
    /// Block comment delimiters (`/*` ... `*/`)
    pub block: Option<BlockComment>,
}

impl CommentSyntax {
    /// No comment syntax.
    pub const NONE: Self = Self {
        line: None,
        block: None,
    };

    /// Line comments only.
    pub const fn line(token: &'static str) -> Self {
        Self {
            line: Some(token),
            block: None,
        }
    }

    /// Block comments only.
    pub const fn block(start: &'static str, end: &'static str) -> Self {
        Self {
            line: None,
            block: Some(BlockComment { start, end }),
        }
    }

    /// Line and block comments.
    pub const fn both(line: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            line: Some(line),
            block: Some(BlockComment { start, end }),
        }
    }
}

/// A known language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageSpec {
    /// Display name, also accepted by `-t`
    pub name: &'static str,
    /// Filename suffixes, matched case-sensitively
    pub extensions: &'static [&'static str],
    pub comments: CommentSyntax,
}

const C_STYLE: CommentSyntax = CommentSyntax::both("//", "/*", "*/");
const HASH: CommentSyntax = CommentSyntax::line("#");
const DASHES: CommentSyntax = CommentSyntax::line("--");
const MARKUP: CommentSyntax = CommentSyntax::block("<!--", "-->");

/// Languages recognized by suffix, in resolution order.
pub static LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "C",
        extensions: &[".c", ".h"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "C++",
        extensions: &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "C#",
        extensions: &[".cs"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Objective-C",
        extensions: &[".m", ".mm"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Java",
        extensions: &[".java"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Kotlin",
        extensions: &[".kt", ".kts"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Scala",
        extensions: &[".scala", ".sc"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Groovy",
        extensions: &[".groovy", ".gradle"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "JavaScript",
        extensions: &[".js", ".mjs", ".cjs", ".jsx"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "TypeScript",
        extensions: &[".ts", ".tsx"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Go",
        extensions: &[".go"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Rust",
        extensions: &[".rs"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Swift",
        extensions: &[".swift"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Dart",
        extensions: &[".dart"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "PHP",
        extensions: &[".php"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Protobuf",
        extensions: &[".proto"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Verilog",
        extensions: &[".v", ".sv", ".svh"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Sass",
        extensions: &[".scss", ".less"],
        comments: C_STYLE,
    },
    LanguageSpec {
        name: "Zig",
        extensions: &[".zig"],
        comments: CommentSyntax::line("//"),
    },
    LanguageSpec {
        name: "CSS",
        extensions: &[".css"],
        comments: CommentSyntax::block("/*", "*/"),
    },
    LanguageSpec {
        name: "HTML",
        extensions: &[".html", ".htm", ".xhtml"],
        comments: MARKUP,
    },
    LanguageSpec {
        name: "XML",
        extensions: &[".xml", ".xsd", ".xsl", ".svg"],
        comments: MARKUP,
    },
    LanguageSpec {
        name: "SQL",
        extensions: &[".sql"],
        comments: CommentSyntax::both("--", "/*", "*/"),
    },
    LanguageSpec {
        name: "Haskell",
        extensions: &[".hs"],
        comments: CommentSyntax::both("--", "{-", "-}"),
    },
    LanguageSpec {
        name: "Pascal",
        extensions: &[".pas", ".pp"],
        comments: CommentSyntax::both("//", "(*", "*)"),
    },
    LanguageSpec {
        name: "OCaml",
        extensions: &[".ml", ".mli"],
        comments: CommentSyntax::block("(*", "*)"),
    },
    LanguageSpec {
        name: "Lua",
        extensions: &[".lua"],
        comments: DASHES,
    },
    LanguageSpec {
        name: "Ada",
        extensions: &[".adb", ".ads"],
        comments: DASHES,
    },
    LanguageSpec {
        name: "VHDL",
        extensions: &[".vhd", ".vhdl"],
        comments: DASHES,
    },
    LanguageSpec {
        name: "Python",
        extensions: &[".py", ".pyw"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Ruby",
        extensions: &[".rb", ".rake"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Perl",
        extensions: &[".pl", ".pm"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Shell",
        extensions: &[".sh", ".bash", ".zsh", ".ksh"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Elixir",
        extensions: &[".ex", ".exs"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Julia",
        extensions: &[".jl"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Nim",
        extensions: &[".nim"],
        comments: HASH,
    },
    LanguageSpec {
        name: "R",
        extensions: &[".r", ".R"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Make",
        extensions: &["Makefile", "makefile", ".mk"],
        comments: HASH,
    },
    LanguageSpec {
        name: "CMake",
        extensions: &["CMakeLists.txt", ".cmake"],
        comments: HASH,
    },
    LanguageSpec {
        name: "YAML",
        extensions: &[".yml", ".yaml"],
        comments: HASH,
    },
    LanguageSpec {
        name: "TOML",
        extensions: &[".toml"],
        comments: HASH,
    },
    LanguageSpec {
        name: "Terraform",
        extensions: &[".tf", ".hcl"],
        comments: CommentSyntax::both("#", "/*", "*/"),
    },
    LanguageSpec {
        name: "Lisp",
        extensions: &[".lisp", ".lsp", ".el", ".clj", ".scm"],
        comments: CommentSyntax::line(";"),
    },
    LanguageSpec {
        name: "Assembly",
        extensions: &[".asm", ".nasm"],
        comments: CommentSyntax::line(";"),
    },
    LanguageSpec {
        name: "Erlang",
        extensions: &[".erl", ".hrl"],
        comments: CommentSyntax::line("%"),
    },
    LanguageSpec {
        name: "TeX",
        extensions: &[".tex", ".sty", ".cls"],
        comments: CommentSyntax::line("%"),
    },
    LanguageSpec {
        name: "Vim",
        extensions: &[".vim"],
        comments: CommentSyntax::line("\""),
    },
    LanguageSpec {
        name: "JSON",
        extensions: &[".json"],
        comments: CommentSyntax::NONE,
    },
    LanguageSpec {
        name: "Markdown",
        extensions: &[".md", ".markdown"],
        comments: CommentSyntax::NONE,
    },
    LanguageSpec {
        name: "Text",
        extensions: &[".txt"],
        comments: CommentSyntax::NONE,
    },
];
