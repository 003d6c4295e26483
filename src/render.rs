//! Report rendering
//!
//! [`ReportRenderer`] is the seam for output formats. [`TextRenderer`] lays a
//! report out as an indented outline:
//!
//! ```text
//! account Ribbon Buttons
//! ======================
//!
//! Button: B1
//!    - Icon:
//!       - Image 16x16: /_imgs/save_16.png
//!       - Image 32x32:
//!       - Modern Image: Save
//!    - Command: C1
//!       - JavaScript Function:
//!          - FunctionName: F
//!          - Library: L
//!          - Function Parameters:
//!             -- Param: 5
//!    - Enable Rules:
//!    - Display Rules:
//! ```

use crate::error::Result;
use crate::model::RuleAttribute;
use crate::report::{Report, ReportEntry, ReportLine, ReportSection, SectionKind};
use std::io::Write;

/// Default number of spaces per nesting level
pub const DEFAULT_INDENT: usize = 3;

/// Renders a [`Report`] into some output format
pub trait ReportRenderer {
    /// File extension for output produced by this renderer, without the dot
    fn extension(&self) -> &'static str;

    /// Write the rendered report to `out`
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()>;

    /// Render the report into an in-memory buffer
    fn render_to_vec(&self, report: &Report) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.render(report, &mut buffer)?;
        Ok(buffer)
    }
}

/// Plain-text outline renderer
#[derive(Debug, Clone)]
pub struct TextRenderer {
    indent: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Create a renderer with the default indentation
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }

    /// Use `indent` spaces per nesting level
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Render a report to a `String`
    pub fn render_to_string(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        self.write_report(report, &mut out);
        Ok(out)
    }

    fn write_report(&self, report: &Report, out: &mut String) {
        out.push_str(&report.title);
        out.push('\n');
        out.push_str(&"=".repeat(report.title.chars().count()));
        out.push('\n');

        for section in &report.sections {
            out.push('\n');
            push_heading(out, 0, "", section);
            self.write_entries(section, 1, out);
        }
    }

    fn write_section(&self, section: &ReportSection, depth: usize, out: &mut String) {
        push_heading(out, depth * self.indent, "- ", section);
        self.write_entries(section, depth + 1, out);
    }

    fn write_entries(&self, section: &ReportSection, depth: usize, out: &mut String) {
        let pad = depth * self.indent;
        for entry in &section.entries {
            match entry {
                ReportEntry::Line(ReportLine { label, value }) => {
                    let marker = if section.kind == SectionKind::FunctionParameters {
                        "-- "
                    } else {
                        "- "
                    };
                    push_line(out, pad, marker, label, value);
                }
                ReportEntry::Attribute(RuleAttribute {
                    element,
                    attribute,
                    value,
                }) => {
                    push_line(out, pad, "-- ", &format!("{}/@{}", element, attribute), value);
                }
                ReportEntry::Section(child) => self.write_section(child, depth, out),
            }
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        let text = self.render_to_string(report)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn push_heading(out: &mut String, pad: usize, marker: &str, section: &ReportSection) {
    push_line(
        out,
        pad,
        marker,
        section.kind.label(),
        section.value.as_deref().unwrap_or_default(),
    );
}

fn push_line(out: &mut String, pad: usize, marker: &str, label: &str, value: &str) {
    out.extend(std::iter::repeat_n(' ', pad));
    out.push_str(marker);
    out.push_str(label);
    out.push(':');
    if !value.is_empty() {
        out.push(' ');
        out.push_str(value);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResolverConfig;
    use crate::parser::parse_ribbon_xml;

    const RIBBON: &str = r#"<RibbonDiffXml>
  <CustomActions>
    <CustomAction Id="CA1">
      <CommandUIDefinition>
        <Button Id="B1" Command="C1" Image16by16="/_imgs/save_16.png" ModernImage="Save"/>
      </CommandUIDefinition>
    </CustomAction>
  </CustomActions>
  <CommandDefinitions>
    <CommandDefinition Id="C1">
      <EnableRules><EnableRule Id="R1"/><EnableRule Id="Missing"/></EnableRules>
      <DisplayRules/>
      <Actions>
        <JavaScriptFunction FunctionName="F" Library="L"><Param Value="5"/></JavaScriptFunction>
      </Actions>
    </CommandDefinition>
  </CommandDefinitions>
  <RuleDefinitions>
    <EnableRules>
      <EnableRule Id="R1"><FormStateRule State="Create" InvertResult="true"/></EnableRule>
    </EnableRules>
  </RuleDefinitions>
</RibbonDiffXml>"#;

    fn report() -> Report {
        let doc = parse_ribbon_xml(RIBBON).unwrap();
        Report::build(&doc, ResolverConfig::new(), "account Ribbon Buttons").unwrap()
    }

    #[test]
    fn test_text_layout() {
        let text = TextRenderer::new().render_to_string(&report()).unwrap();
        let expected = "\
account Ribbon Buttons
======================

Button: B1
   - Icon:
      - Image 16x16: /_imgs/save_16.png
      - Image 32x32:
      - Modern Image: Save
   - Command: C1
      - JavaScript Function:
         - FunctionName: F
         - Library: L
         - Function Parameters:
            -- Param: 5
   - Enable Rules:
      - Enable Rule: R1
         -- FormStateRule/@State: Create
         -- FormStateRule/@InvertResult: true
   - Display Rules:
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_indent() {
        let text = TextRenderer::new()
            .with_indent(2)
            .render_to_string(&report())
            .unwrap();
        assert!(text.contains("\n  - Icon:\n    - Image 16x16: /_imgs/save_16.png\n"));
    }

    #[test]
    fn test_render_writes_same_bytes() {
        let renderer = TextRenderer::new();
        let report = report();
        let bytes = renderer.render_to_vec(&report).unwrap();
        assert_eq!(bytes, renderer.render_to_string(&report).unwrap().into_bytes());
        assert_eq!(renderer.extension(), "txt");
    }

    #[test]
    fn test_buttons_are_separated_by_blank_lines() {
        let doc = parse_ribbon_xml(r#"<R><Button Id="A"/><Button Id="B"/></R>"#).unwrap();
        let report = Report::build(&doc, ResolverConfig::new(), "T").unwrap();
        let text = TextRenderer::new().render_to_string(&report).unwrap();
        assert!(text.starts_with("T\n=\n\nButton: A\n"));
        assert!(text.contains("      - Modern Image:\n\nButton: B\n"));
    }
}
