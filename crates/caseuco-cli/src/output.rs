//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use caseuco_domain::{Facet, WireField};
use colored::*;
use serde::Serialize;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Decide whether output may be colored.
///
/// `--no-color` always wins. Without a loaded config (loading failed) color
/// stays on, matching the `settings.color` default.
pub fn color_enabled(no_color: bool, config: Option<&Config>) -> bool {
    !no_color && config.map_or(true, |c| c.settings.color)
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a facet as a JSON-LD fragment or a table of its wire keys.
    pub fn format_facet<F: Facet + Serialize>(&self, facet: &F) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(facet)?),
            OutputFormat::Pretty => Ok(serde_json::to_string_pretty(facet)?),
            OutputFormat::Table => self.format_facet_table(facet),
        }
    }

    /// Format a facet's field to wire key table.
    pub fn format_schema(&self, type_tag: &str, fields: &[WireField]) -> Result<String> {
        match self.format {
            OutputFormat::Json | OutputFormat::Pretty => {
                let mapping: serde_json::Map<String, Value> = fields
                    .iter()
                    .map(|f| (f.field.to_string(), Value::from(f.key)))
                    .collect();
                let schema = serde_json::json!({ "@type": type_tag, "fields": mapping });
                if self.format == OutputFormat::Json {
                    Ok(serde_json::to_string(&schema)?)
                } else {
                    Ok(serde_json::to_string_pretty(&schema)?)
                }
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Wire key"]);
                for field in fields {
                    builder.push_record([field.field, field.key]);
                }
                Ok(format!("{}\n{}", self.colorize(type_tag, "cyan"), self.render(builder)))
            }
        }
    }

    /// Format a facet as a table of wire key / value rows.
    fn format_facet_table<F: Facet + Serialize>(&self, facet: &F) -> Result<String> {
        let value = serde_json::to_value(facet)?;
        let object = value.as_object().ok_or_else(|| {
            CliError::InvalidInput(format!("{} did not serialize to an object", facet.type_tag()))
        })?;

        let mut builder = Builder::default();
        builder.push_record(["Wire key", "Value"]);
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            builder.push_record([key.as_str(), text.as_str()]);
        }

        Ok(self.render(builder))
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caseuco_domain::{ObjectId, WirelessNetworkConnectionFacet};

    fn create_test_facet() -> WirelessNetworkConnectionFacet {
        WirelessNetworkConnectionFacet::with_id(ObjectId::from_value(1)).with_ssid("MyHomeWiFi")
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_facet(&create_test_facet()).unwrap();
        assert!(output.contains(r#""observable:ssid":"MyHomeWiFi""#));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_pretty_format() {
        let formatter = Formatter::new(OutputFormat::Pretty, false);
        let output = formatter.format_facet(&create_test_facet()).unwrap();
        assert!(output.contains(r#""observable:ssid": "MyHomeWiFi""#));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_facet(&create_test_facet()).unwrap();
        assert!(output.contains("Wire key"));
        assert!(output.contains("observable:ssid"));
        assert!(output.contains("MyHomeWiFi"));
        assert!(output.contains("_:00000000-0000-0000-0000-000000000001"));
    }

    #[test]
    fn test_table_format_without_ssid() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let facet = WirelessNetworkConnectionFacet::new();
        let output = formatter.format_facet(&facet).unwrap();
        assert!(!output.contains("observable:ssid"));
    }

    #[test]
    fn test_schema_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_schema(
                "observable:WirelessNetworkConnectionFacet",
                WirelessNetworkConnectionFacet::WIRE_FIELDS,
            )
            .unwrap();
        assert_eq!(
            output,
            r#"{"@type":"observable:WirelessNetworkConnectionFacet","fields":{"ssid":"observable:ssid"}}"#
        );
    }

    #[test]
    fn test_schema_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_schema("observable:WirelessNetworkConnectionFacet", WirelessNetworkConnectionFacet::WIRE_FIELDS)
            .unwrap();
        assert!(output.starts_with("observable:WirelessNetworkConnectionFacet\n"));
        assert!(output.contains("Field"));
        assert!(output.contains("observable:ssid"));
    }

    #[test]
    fn test_color_enabled_resolution() {
        let mut config = Config::default();
        assert!(color_enabled(false, Some(&config)));
        assert!(!color_enabled(true, Some(&config)));
        assert!(color_enabled(false, None));
        assert!(!color_enabled(true, None));

        config.settings.color = false;
        assert!(!color_enabled(false, Some(&config)));
    }

    #[test]
    fn test_error_line_respects_no_color() {
        colored::control::set_override(true);
        let config = Config::default();

        let plain = Formatter::new(OutputFormat::Json, color_enabled(true, Some(&config)));
        let line = plain.error("Invalid object id: 'nine'");
        assert_eq!(line, "✗ Invalid object id: 'nine'");
        assert!(!line.contains('\x1b'));

        let red = Formatter::new(OutputFormat::Json, color_enabled(false, Some(&config)));
        assert!(red.error("Invalid object id: 'nine'").contains('\x1b'));
        colored::control::unset_override();
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
