//! Built-in single-line comment leaders keyed by filetype.

pub fn builtin(filetype: &str) -> &'static [&'static str] {
    match filetype {
        "c" | "cpp" | "rust" | "go" | "java" | "javascript" | "typescript" | "swift"
        | "kotlin" | "scala" | "zig" => &["//"],
        "python" | "sh" | "bash" | "zsh" | "ruby" | "perl" | "toml" | "yaml" | "make"
        | "cmake" | "r" | "conf" => &["#"],
        "lua" | "sql" | "haskell" | "ada" => &["--"],
        "vim" => &["\""],
        "lisp" | "scheme" | "clojure" | "asm" => &[";"],
        "tex" | "erlang" | "matlab" => &["%"],
        _ => &[],
    }
}
