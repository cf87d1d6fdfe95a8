//! Docstring-based page extraction

use async_trait::async_trait;

use super::PageExtractor;
use crate::analyzer::{ModuleOutline, PythonParser};
use crate::config::ExtractorKind;
use crate::constants::wiki::MISSING_DESCRIPTION;
use crate::types::{Page, Result, SourceUnit};

/// Renders module and function docstrings as Markdown.
///
/// Pure: the same source text always yields the same page.
pub struct StaticExtractor {
    parser: PythonParser,
}

impl StaticExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: PythonParser::new()?,
        })
    }

    /// Synchronous form of [`PageExtractor::extract`]
    pub fn render(&self, unit: &SourceUnit) -> Result<Page> {
        let outline = self.parser.parse(&unit.name, &unit.content)?;
        let name = unit.page_name();
        let body = render_outline(&name, &outline);
        Ok(Page::new(name, body))
    }
}

fn render_outline(module: &str, outline: &ModuleOutline) -> String {
    let describe = |doc: &Option<String>| {
        doc.as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(MISSING_DESCRIPTION)
            .to_string()
    };

    let mut parts = vec![
        format!("# Module: {}\n", module),
        describe(&outline.docstring),
        "\n".to_string(),
    ];

    for function in &outline.functions {
        parts.push(format!("## Function: `{}`\n", function.name));
        parts.push(describe(&function.docstring));
        parts.push("\n".to_string());
    }

    parts.join("\n")
}

#[async_trait]
impl PageExtractor for StaticExtractor {
    async fn extract(&self, unit: &SourceUnit) -> Result<Page> {
        self.render(unit)
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Static
    }
}
