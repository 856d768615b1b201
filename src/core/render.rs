//! Renderer module
//!
//! Renders ResultSet to different output formats: text, jsonl, json, md

use colored::Colorize;

use crate::core::model::{Kind, ResultItem, ResultSet, Verdict};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
        }
    }

    /// Render as plain console messages, one per item
    fn render_text(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .map(|item| match item.verdict {
                Some(Verdict::CacheHit) => item.message.cyan().to_string(),
                Some(Verdict::Anagram) => item.message.green().to_string(),
                Some(Verdict::NotAnagram) => item.message.red().to_string(),
                None => item.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut checks = Vec::new();
        let mut classes = Vec::new();
        let mut other = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Check => checks.push(item),
                Kind::Class => classes.push(item),
                Kind::Clear => other.push(item),
            }
        }

        if !checks.is_empty() {
            output.push_str("## Checks\n\n");
            for item in checks {
                self.render_check_md(&mut output, item);
            }
            output.push('\n');
        }

        if !classes.is_empty() {
            output.push_str("## Classes\n\n");
            for item in classes {
                let members = item
                    .members
                    .iter()
                    .map(|m| format!("`{}`", m))
                    .collect::<Vec<_>>()
                    .join(", ");
                output.push_str(&format!("- {}\n", members));
            }
            output.push('\n');
        }

        for item in other {
            output.push_str(&format!("{}\n", item.message));
        }

        output
    }

    fn render_check_md(&self, output: &mut String, item: &ResultItem) {
        let pair = item
            .members
            .iter()
            .map(|m| format!("`{}`", m))
            .collect::<Vec<_>>()
            .join(" / ");
        output.push_str(&format!("- {}: {}\n", pair, item.message));
    }
}
