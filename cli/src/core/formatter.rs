use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn is_nested(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes `value` as an indented, YAML-like block.
fn render_value(out: &mut String, value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                if is_nested(item) {
                    let _ = writeln!(out, "{pad}-");
                    render_value(out, item, indent + 2);
                } else {
                    let _ = writeln!(out, "{pad}- {}", scalar(item));
                }
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                if is_nested(item) {
                    let _ = writeln!(out, "{pad}{key}:");
                    render_value(out, item, indent + 2);
                } else if let Value::String(s) = item {
                    if s.contains('\n') {
                        let _ = writeln!(out, "{pad}{key}:");
                        for line in s.lines() {
                            let _ = writeln!(out, "{pad}  {line}");
                        }
                    } else {
                        let _ = writeln!(out, "{pad}{key}: {s}");
                    }
                } else {
                    let _ = writeln!(out, "{pad}{key}: {}", scalar(item));
                }
            }
        }
        other => {
            let _ = writeln!(out, "{pad}{}", scalar(other));
        }
    }
}

fn render_text<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    let mut out = String::new();
    render_value(&mut out, &value, 0);
    out
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text(model),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(model).unwrap_or_default();
                json.push('\n');
                json
            }
        }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text if list.is_empty() => format!("{empty_msg}\n"),
            OutputFormat::Text if title.is_empty() => render_text(list),
            OutputFormat::Text => format!("{title}\n{}", render_text(list)),
            OutputFormat::Json => {
                let mut json =
                    serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string());
                json.push('\n');
                json
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
