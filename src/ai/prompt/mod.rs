//! Prompt Builder System
//!
//! Standardized prompt construction for the generative backend.
//! Every prompt the pipeline sends is assembled here, so the three wiki
//! prompts (module page, home page, sidebar) share one structure.

use crate::constants::wiki::{HOME_PAGE, PAGE_EXTENSION, SIDEBAR_PAGE};

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Role definition with expertise area
    Role { expertise: String, task: String },
    /// Numbered objectives
    Objectives(Vec<String>),
    /// Raw text section with optional header
    Text {
        header: Option<String>,
        content: String,
    },
    /// Code block with language
    Code { language: String, content: String },
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role definition section
    pub fn role(mut self, expertise: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            expertise: expertise.to_string(),
            task: task.to_string(),
        });
        self
    }

    /// Add objectives section
    pub fn objectives<S: Into<String>>(mut self, objectives: Vec<S>) -> Self {
        self.sections.push(PromptSection::Objectives(
            objectives.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Add text section
    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: None,
            content: content.to_string(),
        });
        self
    }

    /// Add text section with header
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: Some(header.to_string()),
            content: content.to_string(),
        });
        self
    }

    /// Add code block
    pub fn code(mut self, language: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Code {
            language: language.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Role { expertise, task } => {
                    prompt.push_str("<ROLE>\n");
                    prompt.push_str(&format!("You are a {} {}.\n", expertise, task));
                    prompt.push_str("</ROLE>\n\n");
                }
                PromptSection::Objectives(objectives) => {
                    prompt.push_str("<OBJECTIVES>\n");
                    for (i, obj) in objectives.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, obj));
                    }
                    prompt.push_str("</OBJECTIVES>\n\n");
                }
                PromptSection::Text { header, content } => {
                    if let Some(h) = header {
                        prompt.push_str(&format!("# {}\n\n", h));
                    }
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
                PromptSection::Code { language, content } => {
                    prompt.push_str(&format!("```{}\n", language));
                    prompt.push_str(&content);
                    prompt.push_str("\n```\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

/// Human label for a page name: `data_processor` → `Data Processor`
pub fn display_name(page_name: &str) -> String {
    page_name
        .split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Preset prompt templates for the wiki pipeline
pub struct PromptTemplates;

impl PromptTemplates {
    /// Per-module documentation page
    pub fn module_documentation(file_name: &str, code: &str) -> String {
        PromptBuilder::new()
            .role("technical documentation expert", "writing project wikis")
            .text(&format!(
                "Please write comprehensive documentation in Markdown format for the following Python file named '{}'.",
                file_name
            ))
            .section(
                "Structure",
                "Structure the documentation as follows:\n\
                 1. **Module Overview**: A high-level summary of what the module does.\n\
                 2. **Functions**: For each function, provide:\n   \
                    - Description\n   \
                    - Parameters (if any)\n   \
                    - Return values\n   \
                    - Usage Example",
            )
            .text("Here is the code:")
            .code("python", code)
            .build()
    }

    /// Overview home page built from the full text of every module page.
    ///
    /// `pages` yields `(page name, body)` pairs.
    pub fn home_page<'a, I>(pages: I) -> String
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut first_page = None;
        let docs_context = pages
            .into_iter()
            .map(|(name, body)| {
                first_page.get_or_insert(name);
                format!("--- File: {}.{} ---\n{}", name, PAGE_EXTENSION, body)
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let example = first_page.unwrap_or("data_processor");

        PromptBuilder::new()
            .role("Lead Technical Writer", "organizing the wiki for a software project")
            .section(
                "Module Documentation",
                &format!(
                    "Here is the documentation for every module in the project:\n\n{}",
                    docs_context
                ),
            )
            .text(&format!("Your task: write a new '{}.{}' file.", HOME_PAGE, PAGE_EXTENSION))
            .objectives(vec![
                "It must provide a high-level system overview.".to_string(),
                "It must explain how the modules interact or fit together (Architecture)."
                    .to_string(),
                format!(
                    "It must link to the individual modules using the format `[[Module Name|Filename_without_extension]]`. \
                     Example: if the file is `{example}.{ext}`, link to it as `[[{label}|{example}]]`.",
                    example = example,
                    ext = PAGE_EXTENSION,
                    label = display_name(example),
                ),
                "Keep it professional, welcoming, and clear.".to_string(),
            ])
            .build()
    }

    /// Grouped navigation sidebar built from page names only
    pub fn sidebar<'a, I>(page_names: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let listing = page_names
            .into_iter()
            .map(|name| format!("- {}.{}", name, PAGE_EXTENSION))
            .collect::<Vec<_>>()
            .join("\n");

        PromptBuilder::new()
            .role("Lead Technical Writer", "organizing the wiki for a software project")
            .section("Wiki Pages", &format!("Here is the list of markdown files in our Wiki:\n{}", listing))
            .text(&format!(
                "Your task: create the content for a GitHub Wiki `{}.{}` file.",
                SIDEBAR_PAGE, PAGE_EXTENSION
            ))
            .objectives(vec![
                "Group related modules logically (e.g., \"Core\", \"Utilities\", \"Data Processing\").".to_string(),
                "Use the standard GitHub Wiki link format: `[[Link Label|Filename_without_extension]]`.".to_string(),
                format!("Start with a link to `[[{}]]`.", HOME_PAGE),
                format!(
                    "Do not include '{home}.{ext}' or '{side}.{ext}' in the list of modules to group, but do include the {home} link at the top.",
                    home = HOME_PAGE,
                    side = SIDEBAR_PAGE,
                    ext = PAGE_EXTENSION,
                ),
            ])
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_prompt() {
        let prompt = PromptBuilder::new()
            .role("code analyst", "writing Rust documentation")
            .objectives(vec!["Analyze code", "Generate docs"])
            .build();

        assert!(prompt.contains("<ROLE>"));
        assert!(prompt.contains("code analyst"));
        assert!(prompt.contains("<OBJECTIVES>"));
        assert!(prompt.contains("1. Analyze code"));
        assert!(prompt.contains("2. Generate docs"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("data_processor"), "Data Processor");
        assert_eq!(display_name("hello"), "Hello");
        assert_eq!(display_name("cli-main"), "Cli Main");
    }

    #[test]
    fn test_module_documentation_embeds_name_and_code() {
        let prompt = PromptTemplates::module_documentation("hello.py", "def main():\n    pass");

        assert!(prompt.contains("'hello.py'"));
        assert!(prompt.contains("```python\ndef main():\n    pass\n```"));
        assert!(prompt.contains("**Module Overview**"));
        assert!(prompt.contains("Usage Example"));
    }

    #[test]
    fn test_home_page_embeds_every_page() {
        let prompt = PromptTemplates::home_page(vec![("x", "# X body"), ("y", "# Y body")]);

        assert!(prompt.contains("--- File: x.md ---\n# X body"));
        assert!(prompt.contains("--- File: y.md ---\n# Y body"));
        assert!(prompt.contains("[[X|x]]"));
        assert!(prompt.contains("Architecture"));
    }

    #[test]
    fn test_sidebar_lists_names_only() {
        let prompt = PromptTemplates::sidebar(vec!["x", "y"]);

        assert!(prompt.contains("- x.md\n- y.md"));
        assert!(prompt.contains("[[Home]]"));
        assert!(prompt.contains("_Sidebar.md"));
    }
}
