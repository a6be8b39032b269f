//! Output rendering for the CLI: plain text or JSON

use std::str::FromStr;

use serde::Serialize;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The rendered string, as a template would receive it
    #[default]
    Text,
    /// The structured result, pretty-printed
    Json,
}

impl OutputMode {
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

/// A command result in both of its printable forms
#[derive(Debug)]
pub struct Rendered {
    /// Text form; empty when there is nothing to show
    pub text: String,
    /// Structured form for JSON output
    pub data: serde_json::Value,
}

impl Rendered {
    /// Text output whose structured form is the same string
    pub fn text(text: String) -> Self {
        let data = serde_json::Value::String(text.clone());
        Self { text, data }
    }

    /// Text output backed by a serializable value
    pub fn with_data<T: Serialize>(text: String, data: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            text,
            data: serde_json::to_value(data)?,
        })
    }
}

/// Produce the string to print for `rendered` in `mode`.
pub fn render(rendered: &Rendered, mode: OutputMode) -> Result<String, serde_json::Error> {
    if mode.is_structured() {
        let mut out = serde_json::to_string_pretty(&rendered.data)?;
        out.push('\n');
        return Ok(out);
    }
    if rendered.text.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}\n", rendered.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!(OutputMode::from_str("text").unwrap(), OutputMode::Text);
        assert_eq!(OutputMode::from_str("JSON").unwrap(), OutputMode::Json);
        assert!(OutputMode::from_str("csv").is_err());
    }

    #[test]
    fn test_render_text() {
        let rendered = Rendered::text("1,234".to_string());
        assert_eq!(render(&rendered, OutputMode::Text).unwrap(), "1,234\n");
        assert_eq!(render(&rendered, OutputMode::Json).unwrap(), "\"1,234\"\n");
    }

    #[test]
    fn test_render_empty_text_prints_nothing() {
        let rendered = Rendered::with_data(String::new(), &Option::<String>::None).unwrap();
        assert_eq!(render(&rendered, OutputMode::Text).unwrap(), "");
        assert_eq!(render(&rendered, OutputMode::Json).unwrap(), "null\n");
    }
}
