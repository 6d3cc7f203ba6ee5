//! Supported languages and the commands that run them.

use std::{fmt, path::Path};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cpp,
    Python,
    Java,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    Php,
    Ruby,
    CSharp,
    Dart,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::C,
        Language::Cpp,
        Language::Python,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::Rust,
        Language::Php,
        Language::Ruby,
        Language::CSharp,
        Language::Dart,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Python => "python",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::CSharp => "csharp",
            Language::Dart => "dart",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::CSharp => "C#",
            Language::Dart => "Dart",
        }
    }

    /// File extensions, lowercase and without the leading dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "cc", "cxx", "c++", "hpp"],
            Language::Python => &["py"],
            Language::Java => &["java"],
            Language::JavaScript => &["js", "mjs", "cjs"],
            Language::TypeScript => &["ts"],
            Language::Go => &["go"],
            Language::Rust => &["rs"],
            Language::Php => &["php"],
            Language::Ruby => &["rb"],
            Language::CSharp => &["cs"],
            Language::Dart => &["dart"],
        }
    }

    pub fn from_id(id: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|lang| lang.id() == id)
    }

    /// Detects the language from the file extension, ignoring case.
    pub fn detect(path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Shell command that builds (if needed) and runs `file`.
    ///
    /// `file` is how the command refers to the source, `stem` names the
    /// produced executable for compiled languages.
    pub fn run_command(self, file: &str, stem: &str) -> String {
        match self {
            Language::Python => format!("python3 \"{file}\""),
            Language::Java => format!("javac *.java && java \"{stem}\""),
            Language::C => format!("gcc \"{file}\" -o \"{stem}\" && ./\"{stem}\""),
            Language::Cpp => format!("g++ \"{file}\" -o \"{stem}\" && ./\"{stem}\""),
            Language::JavaScript => format!("node \"{file}\""),
            Language::TypeScript => format!("npx ts-node \"{file}\""),
            Language::Go => format!("go run \"{file}\""),
            Language::Rust => format!("rustc \"{file}\" -o \"{stem}\" && ./\"{stem}\""),
            Language::Php => format!("php \"{file}\""),
            Language::Ruby => format!("ruby \"{file}\""),
            Language::CSharp => "dotnet run".into(),
            Language::Dart => format!("dart run \"{file}\""),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
