//! Language keys and their file extension sets
//!
//! The `--lang` filter restricts a scan to one language's extensions. The
//! mapping is a fixed closed list; extensions are lowercase and carry no
//! leading dot, matching how the scanner extracts them from paths.

use clap::ValueEnum;
use std::fmt;

/// Languages the scanner can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Go,
    Ruby,
    Php,
    CSharp,
    C,
    Cpp,
    Rust,
    Swift,
    Kotlin,
}

impl Language {
    /// File extensions associated with this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "tsx"],
            Language::Java => &["java"],
            Language::Go => &["go"],
            Language::Ruby => &["rb", "erb"],
            Language::Php => &["php"],
            Language::CSharp => &["cs"],
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "cc", "cxx", "hpp", "hxx", "h"],
            Language::Rust => &["rs"],
            Language::Swift => &["swift"],
            Language::Kotlin => &["kt", "kts"],
        }
    }

    /// The key used on the command line and in logs.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::CSharp => "csharp",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
        }
    }

    /// Whether `extension` belongs to this language, case-insensitively.
    pub fn includes_extension(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
