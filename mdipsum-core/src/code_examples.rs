//! Fixed code snippets inserted into generated documents

/// A snippet tagged with the language used for fenced blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeExample {
    pub language: &'static str,
    pub code: &'static str,
}

impl CodeExample {
    /// First source line, used for the inline-code variant.
    pub fn first_line(&self) -> &'static str {
        self.code.lines().next().unwrap_or_default()
    }
}

pub static CODE_EXAMPLES: [CodeExample; 4] = [
    CodeExample {
        language: "javascript",
        code: "function greet(name) {\n  return 'Hello, ' + name + '!';\n}\nconsole.log(greet('World'));",
    },
    CodeExample {
        language: "bash",
        code: "for file in *.txt; do\n  echo \"Processing $file\"\ndone",
    },
    CodeExample {
        language: "python",
        code: "def greet(name):\n    return f\"Hello, {name}!\"\nprint(greet(\"World\"))",
    },
    CodeExample {
        language: "sql",
        code: "SELECT id, name, email\nFROM users\nWHERE active = 1\nORDER BY name;",
    },
];
