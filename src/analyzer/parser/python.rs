//! Python outline extraction.
//!
//! Reads the module docstring and every top-level function with its
//! docstring, following the rules of Python's `ast.get_docstring`.

use super::traits::{create_ts_parser, first_error_position, get_node_text};
use crate::types::{Result, WikiError};

/// Docstrings of a module and its top-level functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleOutline {
    pub docstring: Option<String>,
    /// Functions in definition order
    pub functions: Vec<FunctionOutline>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOutline {
    pub name: String,
    pub docstring: Option<String>,
}

pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Result<Self> {
        // Validate that the language is available
        let _ = create_ts_parser(tree_sitter_python::LANGUAGE, "Python")?;
        Ok(Self)
    }

    /// Outline `content`; any syntax error fails the whole file.
    pub fn parse(&self, path: &str, content: &str) -> Result<ModuleOutline> {
        let mut parser =
            create_ts_parser(tree_sitter_python::LANGUAGE, "Python").map_err(|mut e| {
                if let WikiError::Parse {
                    path: ref mut p, ..
                } = e
                {
                    *p = path.to_string();
                }
                e
            })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| WikiError::Parse {
                message: "Failed to parse Python file".to_string(),
                path: path.to_string(),
            })?;

        let root = tree.root_node();
        if let Some((line, column)) = first_error_position(root) {
            return Err(WikiError::Parse {
                message: format!("invalid syntax at line {}, column {}", line, column),
                path: path.to_string(),
            });
        }

        if let Some(node) = find_python2_statement(root) {
            let position = node.start_position();
            return Err(WikiError::Parse {
                message: format!(
                    "invalid syntax at line {}, column {}",
                    position.row + 1,
                    position.column + 1
                ),
                path: path.to_string(),
            });
        }

        let source = content.as_bytes();
        let mut outline = ModuleOutline {
            docstring: block_docstring(root, source),
            functions: Vec::new(),
        };

        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            let definition = match statement.kind() {
                "function_definition" => Some(statement),
                "decorated_definition" => statement
                    .child_by_field_name("definition")
                    .filter(|d| d.kind() == "function_definition"),
                _ => None,
            };
            if let Some(function) = definition.and_then(|d| function_outline(d, source)) {
                outline.functions.push(function);
            }
        }

        Ok(outline)
    }
}

/// Python 2 `print x` / `exec x` statements, which the grammar still accepts
fn find_python2_statement(root: tree_sitter::Node) -> Option<tree_sitter::Node> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if matches!(node.kind(), "print_statement" | "exec_statement") {
            return Some(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn function_outline(node: tree_sitter::Node, source: &[u8]) -> Option<FunctionOutline> {
    let name = get_node_text(node.child_by_field_name("name")?, source);
    if name.is_empty() {
        return None;
    }

    let docstring = node
        .child_by_field_name("body")
        .and_then(|body| block_docstring(body, source));

    Some(FunctionOutline {
        name: name.to_string(),
        docstring,
    })
}

/// Docstring of a module or block: its first statement, when that statement
/// is a bare string literal.
fn block_docstring(block: tree_sitter::Node, source: &[u8]) -> Option<String> {
    let mut cursor = block.walk();
    let first = block
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment")?;

    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }

    let expr = first.named_child(0)?;
    let value = match expr.kind() {
        "string" => string_literal_value(get_node_text(expr, source))?,
        "concatenated_string" => {
            let mut cursor = expr.walk();
            let parts: Option<Vec<String>> = expr
                .named_children(&mut cursor)
                .filter(|n| n.kind() == "string")
                .map(|n| string_literal_value(get_node_text(n, source)))
                .collect();
            parts?.concat()
        }
        _ => return None,
    };

    Some(clean_docstring(&value))
}

/// Value of a plain string literal. Byte strings and f-strings yield `None`.
fn string_literal_value(literal: &str) -> Option<String> {
    let quote_start = literal.find(['"', '\''])?;
    let (prefix, rest) = literal.split_at(quote_start);
    let prefix = prefix.to_ascii_lowercase();
    if prefix.contains('f') || prefix.contains('b') {
        return None;
    }

    let quote = if rest.starts_with("\"\"\"") && rest.len() >= 6 {
        "\"\"\""
    } else if rest.starts_with("'''") && rest.len() >= 6 {
        "'''"
    } else {
        rest.get(..1)?
    };
    let inner = rest.strip_prefix(quote)?.strip_suffix(quote)?;

    if prefix.contains('r') {
        Some(inner.to_string())
    } else {
        Some(unescape(inner))
    }
}

/// Decode the backslash escapes of a non-raw literal. Escapes that cannot be
/// decoded here (`\N{...}`, malformed `\x`, unknown letters) are kept as written.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };
        match escape {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0b}'),
            '0'..='7' => {
                let mut value = escape.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'x' | 'u' | 'U' => {
                let width = match escape {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.clone().take(width).collect();
                let decoded = (digits.len() == width
                    && digits.chars().all(|d| d.is_ascii_hexdigit()))
                .then(|| u32::from_str_radix(&digits, 16).ok())
                .flatten()
                .and_then(char::from_u32);
                match decoded {
                    Some(ch) => {
                        out.push(ch);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    None => {
                        out.push('\\');
                        out.push(escape);
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

/// Normalize docstring indentation the way `inspect.cleandoc` does, then trim.
pub fn clean_docstring(doc: &str) -> String {
    let expanded = doc.replace('\t', "        ");
    let lines: Vec<&str> = expanded.lines().collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    let cleaned: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.trim_start()
            } else {
                line.get(margin..).unwrap_or_else(|| line.trim_start())
            }
        })
        .collect();

    cleaned.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(src: &str) -> ModuleOutline {
        PythonParser::new().unwrap().parse("test.py", src).unwrap()
    }

    #[test]
    fn test_module_and_function_docstrings() {
        let result = outline("\"\"\"desc\"\"\"\ndef f():\n    \"\"\"fd\"\"\"\n    pass");

        assert_eq!(result.docstring.as_deref(), Some("desc"));
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].name, "f");
        assert_eq!(result.functions[0].docstring.as_deref(), Some("fd"));
    }

    #[test]
    fn test_missing_docstrings() {
        let result = outline("import os\n\ndef f(x):\n    return x\n");

        assert_eq!(result.docstring, None);
        assert_eq!(result.functions[0].docstring, None);
    }

    #[test]
    fn test_only_top_level_functions_in_order() {
        let src = r#"
def b():
    def inner():
        pass

class C:
    def method(self):
        pass

@decorator
def a():
    "single quoted"

async def c():
    pass
"#;
        let result = outline(src);
        let names: Vec<_> = result.functions.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(result.functions[1].docstring.as_deref(), Some("single quoted"));
    }

    #[test]
    fn test_docstring_after_comments() {
        let src = "#!/usr/bin/env python\n# header\n'''Module doc'''\n";
        assert_eq!(outline(src).docstring.as_deref(), Some("Module doc"));
    }

    #[test]
    fn test_non_docstring_first_statement() {
        let src = "x = 1\n\"\"\"not a docstring\"\"\"\n";
        assert_eq!(outline(src).docstring, None);

        let fstring = "def f():\n    f\"\"\"{x}\"\"\"\n";
        assert_eq!(outline(fstring).functions[0].docstring, None);
    }

    #[test]
    fn test_indentation_is_cleaned() {
        let src = "def main():\n    \"\"\"\n    The entry point.\n\n    Steps:\n        1. greet\n    \"\"\"\n";
        let doc = outline(src).functions[0].docstring.clone().unwrap();
        assert_eq!(doc, "The entry point.\n\nSteps:\n    1. greet");
    }

    #[test]
    fn test_malformed_source_is_parse_error() {
        let err = PythonParser::new()
            .unwrap()
            .parse("broken.py", "def f(:\n    pass\n")
            .unwrap_err();

        match err {
            WikiError::Parse { path, .. } => assert_eq!(path, "broken.py"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_python2_statements_are_parse_errors() {
        let parser = PythonParser::new().unwrap();

        for src in [
            "print \"x\"\n",
            "exec \"x = 1\"\n",
            "def f():\n    print \"nested\"\n",
        ] {
            assert!(
                matches!(parser.parse("legacy.py", src), Err(WikiError::Parse { .. })),
                "accepted: {src:?}"
            );
        }

        let modern = parser.parse("modern.py", "print(\"x\")\nexec(\"y = 2\")\n").unwrap();
        assert!(modern.functions.is_empty());
    }

    #[test]
    fn test_string_literal_value() {
        assert_eq!(string_literal_value("\"\"\"a\"\"\"").as_deref(), Some("a"));
        assert_eq!(string_literal_value("'a\\tb'").as_deref(), Some("a\tb"));
        assert_eq!(string_literal_value("r'a\\tb'").as_deref(), Some("a\\tb"));
        assert_eq!(string_literal_value("\"\"").as_deref(), Some(""));
        assert_eq!(string_literal_value("b'bytes'"), None);
        assert_eq!(string_literal_value("F'x'"), None);
    }

    #[test]
    fn test_unescape_numeric_escapes() {
        assert_eq!(unescape("a\\012b"), "a\nb");
        assert_eq!(unescape("\\0"), "\0");
        assert_eq!(unescape("\\101\\1019"), "AA9");
        assert_eq!(unescape("\\x41\\u00e9\\U0001F600"), "A\u{e9}\u{1F600}");
        assert_eq!(unescape("\\a\\b\\f\\v"), "\u{07}\u{08}\u{0c}\u{0b}");
    }

    #[test]
    fn test_unescape_keeps_undecodable_escapes() {
        assert_eq!(unescape("\\N{BULLET} item"), "\\N{BULLET} item");
        assert_eq!(unescape("\\xZZ"), "\\xZZ");
        assert_eq!(unescape("\\d+"), "\\d+");
        assert_eq!(unescape("line\\\ncontinued"), "linecontinued");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_clean_docstring_single_line() {
        assert_eq!(clean_docstring("   padded   "), "padded");
    }
}
