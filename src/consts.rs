pub(crate) const DEBUG: bool = false;
pub(crate) const TITLE: &str = "Twitter wall built by @rem";
pub(crate) const SEARCH: &str =
    "from:@joyofcoding OR #joc2013 OR joyofcoding.org OR #joyofcoding OR #joyofcoding2013";
pub(crate) const DEFAULT_NOTICE_HOLD_TIME: &str = "10s";
pub(crate) const SHOW_TWEETS_EVERY: &str = "3s";

/// Name of the global variable the rendered page script assigns.
pub const DEFAULT_BINDING: &str = "config";

/// ECMAScript reserved words and literals, including the strict-mode ones.
pub(crate) const JS_RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];
