//! Report assembly
//!
//! Turns resolved buttons into [`ReportSection`] trees. Sections hold semantic
//! `(label, value)` lines and nested sections; layout and text formatting are
//! left to a [`ReportRenderer`](crate::render::ReportRenderer).
//!
//! Every button section has the same shape:
//!
//! ```text
//! Button <id>
//! ├── Icon                    (Image 16x16, Image 32x32, Modern Image)
//! ├── Command <id>            only when the command resolved
//! │   └── JavaScript Function (FunctionName, Library)
//! │       └── Function Parameters
//! ├── Enable Rules            only when the command resolved
//! │   └── Enable Rule <id>    (element/attribute/value lines)
//! └── Display Rules           only when the command resolved
//!     └── Display Rule <id>
//! ```

use crate::error::Result;
use crate::model::*;
use crate::resolver::Resolver;

/// Kind of a report section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// One per `<Button>`
    Button,
    /// Icon references of a button
    Icon,
    /// The resolved command definition
    Command,
    /// One per JavaScript action of the command
    JavaScriptFunction,
    /// Parameters of a JavaScript action
    FunctionParameters,
    /// Container of the resolved enable rules
    EnableRules,
    /// One resolved enable rule
    EnableRule,
    /// Container of the resolved display rules
    DisplayRules,
    /// One resolved display rule
    DisplayRule,
}

impl SectionKind {
    /// Human-readable heading
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Button => "Button",
            SectionKind::Icon => "Icon",
            SectionKind::Command => "Command",
            SectionKind::JavaScriptFunction => "JavaScript Function",
            SectionKind::FunctionParameters => "Function Parameters",
            SectionKind::EnableRules => "Enable Rules",
            SectionKind::EnableRule => "Enable Rule",
            SectionKind::DisplayRules => "Display Rules",
            SectionKind::DisplayRule => "Display Rule",
        }
    }
}

/// A `(label, value)` leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Label
    pub label: String,
    /// Value, possibly empty
    pub value: String,
}

impl ReportLine {
    /// Create a new line
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One child of a [`ReportSection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    /// A labelled value
    Line(ReportLine),
    /// An attribute of a rule definition's child element
    Attribute(RuleAttribute),
    /// A nested section
    Section(ReportSection),
}

/// A report section: a heading, an optional identifying value and ordered entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// What this section describes
    pub kind: SectionKind,
    /// Identifier shown next to the heading (button id, command id, rule id)
    pub value: Option<String>,
    /// Children in report order
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    /// Create an empty section
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            value: None,
            entries: Vec::new(),
        }
    }

    /// Create an empty section with an identifying value
    pub fn with_value(kind: SectionKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            entries: Vec::new(),
        }
    }

    fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(ReportEntry::Line(ReportLine::new(label, value)));
        self
    }

    fn section(mut self, section: ReportSection) -> Self {
        self.entries.push(ReportEntry::Section(section));
        self
    }

    /// Direct child lines
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Direct child attribute entries
    pub fn attributes(&self) -> impl Iterator<Item = &RuleAttribute> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Attribute(attr) => Some(attr),
            _ => None,
        })
    }

    /// Direct child sections
    pub fn sections(&self) -> impl Iterator<Item = &ReportSection> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Section(section) => Some(section),
            _ => None,
        })
    }

    /// First direct child section of the given kind
    pub fn section_of(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections().find(|section| section.kind == kind)
    }

    /// Value of the first direct child line with the given label
    pub fn line_value(&self, label: &str) -> Option<&str> {
        self.lines()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    /// Number of sections of the given kind anywhere below this one
    pub fn count_descendants(&self, kind: SectionKind) -> usize {
        self.sections()
            .map(|section| usize::from(section.kind == kind) + section.count_descendants(kind))
            .sum()
    }
}

/// A complete report: a title, one section per button, and lenient-mode warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Document heading, e.g. `"account Ribbon Buttons"`
    pub title: String,
    /// One section per `<Button>`, in document order
    pub sections: Vec<ReportSection>,
    /// Parameters skipped under [`ParameterPolicy::Lenient`]
    pub warnings: Vec<ResolutionWarning>,
}

impl Report {
    /// Resolve every button of `document` and assemble the report
    ///
    /// # Example
    ///
    /// ```
    /// use ribbonview::parser::parse_ribbon_xml;
    /// use ribbonview::{Report, ResolverConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let doc = parse_ribbon_xml(r#"<Ribbon><Button Id="B1" Command="C1"/></Ribbon>"#)?;
    /// let report = Report::build(&doc, ResolverConfig::new(), "account Ribbon Buttons")?;
    /// assert_eq!(report.sections.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(
        document: &RibbonDocument,
        config: ResolverConfig,
        title: impl Into<String>,
    ) -> Result<Self> {
        let mut resolver = Resolver::new(document, config);
        let sections = build_sections(resolver.by_ref())?;
        Ok(Self {
            title: title.into(),
            sections,
            warnings: resolver.into_warnings(),
        })
    }
}

/// Build one section per resolved button, stopping at the first error
pub fn build_sections<'a, I>(resolved: I) -> Result<Vec<ReportSection>>
where
    I: IntoIterator<Item = Result<ResolvedButton<'a>>>,
{
    resolved
        .into_iter()
        .map(|item| item.map(|button| build_button_section(&button)))
        .collect()
}

/// Build the section for a single resolved button
pub fn build_button_section(resolved: &ResolvedButton<'_>) -> ReportSection {
    let button = resolved.button;
    let icon = ReportSection::new(SectionKind::Icon)
        .line("Image 16x16", &button.image16x16)
        .line("Image 32x32", &button.image32x32)
        .line("Modern Image", &button.modern_image);

    let section = ReportSection::with_value(SectionKind::Button, &button.id).section(icon);

    match &resolved.command {
        Some(command) => section
            .section(command_section(command))
            .section(rules_section(SectionKind::EnableRules, &command.enable_rules))
            .section(rules_section(SectionKind::DisplayRules, &command.display_rules)),
        None => section,
    }
}

fn command_section(command: &ResolvedCommand<'_>) -> ReportSection {
    command
        .actions
        .iter()
        .fold(
            ReportSection::with_value(SectionKind::Command, command.id),
            |section, action| section.section(action_section(action)),
        )
}

fn action_section(action: &JavaScriptAction<'_>) -> ReportSection {
    let parameters = action.parameters.iter().fold(
        ReportSection::new(SectionKind::FunctionParameters),
        |section, param| section.line(param.name, param.value),
    );

    ReportSection::new(SectionKind::JavaScriptFunction)
        .line("FunctionName", action.function_name)
        .line("Library", action.library)
        .section(parameters)
}

fn rules_section(kind: SectionKind, rules: &[&RuleDefinition]) -> ReportSection {
    let rule_kind = match kind {
        SectionKind::DisplayRules => SectionKind::DisplayRule,
        _ => SectionKind::EnableRule,
    };

    rules.iter().fold(ReportSection::new(kind), |section, rule| {
        let mut rule_section = ReportSection::with_value(rule_kind, &rule.id);
        rule_section
            .entries
            .extend(rule.attributes.iter().cloned().map(ReportEntry::Attribute));
        section.section(rule_section)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ribbon_xml;

    fn report(xml: &str) -> Report {
        let doc = parse_ribbon_xml(xml).unwrap();
        Report::build(&doc, ResolverConfig::new(), "test").unwrap()
    }

    #[test]
    fn test_single_action_example() {
        let report = report(
            r#"<R>
                 <Button Id="B1" Command="C1"/>
                 <CommandDefinition Id="C1">
                   <Actions>
                     <JavaScriptFunction FunctionName="F" Library="L"><Param Value="5"/></JavaScriptFunction>
                   </Actions>
                 </CommandDefinition>
               </R>"#,
        );

        assert_eq!(report.sections.len(), 1);
        let button = &report.sections[0];
        assert_eq!(button.kind, SectionKind::Button);
        assert_eq!(button.value.as_deref(), Some("B1"));
        assert_eq!(button.count_descendants(SectionKind::JavaScriptFunction), 1);

        let command = button.section_of(SectionKind::Command).unwrap();
        assert_eq!(command.value.as_deref(), Some("C1"));
        let action = command.section_of(SectionKind::JavaScriptFunction).unwrap();
        assert_eq!(action.line_value("FunctionName"), Some("F"));
        assert_eq!(action.line_value("Library"), Some("L"));
        let params = action.section_of(SectionKind::FunctionParameters).unwrap();
        assert_eq!(params.lines().collect::<Vec<_>>(), vec![&ReportLine::new("Param", "5")]);

        let enable = button.section_of(SectionKind::EnableRules).unwrap();
        let display = button.section_of(SectionKind::DisplayRules).unwrap();
        assert!(enable.entries.is_empty());
        assert!(display.entries.is_empty());
    }

    #[test]
    fn test_section_order() {
        let report = report(r#"<R><Button Id="B1" Command="C1"/><CommandDefinition Id="C1"/></R>"#);
        let kinds: Vec<_> = report.sections[0].sections().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Icon,
                SectionKind::Command,
                SectionKind::EnableRules,
                SectionKind::DisplayRules,
            ]
        );
    }

    #[test]
    fn test_unresolved_command_has_only_icon() {
        let report = report(r#"<R><Button Id="B1" Command="Nope" ModernImage="Save"/></R>"#);
        let button = &report.sections[0];

        let kinds: Vec<_> = button.sections().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Icon]);
        let icon = button.section_of(SectionKind::Icon).unwrap();
        assert_eq!(icon.line_value("Modern Image"), Some("Save"));
        assert_eq!(icon.line_value("Image 16x16"), Some(""));
    }

    #[test]
    fn test_rule_attributes_become_entries() {
        let report = report(
            r#"<R>
                 <Button Id="B1" Command="C1"/>
                 <CommandDefinition Id="C1">
                   <EnableRules><EnableRule Id="R1"/></EnableRules>
                   <DisplayRules><DisplayRule Id="D1"/></DisplayRules>
                 </CommandDefinition>
                 <RuleDefinitions>
                   <EnableRules><EnableRule Id="R1"><FormStateRule State="Create"/></EnableRule></EnableRules>
                   <DisplayRules><DisplayRule Id="D1"/></DisplayRules>
                 </RuleDefinitions>
               </R>"#,
        );
        let button = &report.sections[0];

        let enable = button.section_of(SectionKind::EnableRules).unwrap();
        let rule = enable.section_of(SectionKind::EnableRule).unwrap();
        assert_eq!(rule.value.as_deref(), Some("R1"));
        assert_eq!(
            rule.attributes().collect::<Vec<_>>(),
            vec![&RuleAttribute::new("FormStateRule", "State", "Create")]
        );

        let display = button.section_of(SectionKind::DisplayRules).unwrap();
        let rule = display.section_of(SectionKind::DisplayRule).unwrap();
        assert_eq!(rule.value.as_deref(), Some("D1"));
        assert!(rule.entries.is_empty());
    }

    #[test]
    fn test_duplicate_buttons_are_kept() {
        let report = report(
            r#"<R><Button Id="B1" Command="C1"/><Button Id="B1" Command="C1"/><CommandDefinition Id="C1"/></R>"#,
        );
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0], report.sections[1]);
    }

    #[test]
    fn test_strict_error_aborts_report() {
        let doc = parse_ribbon_xml(
            r#"<R><Button Id="B1" Command="C1"/>
                 <CommandDefinition Id="C1"><Actions><JavaScriptFunction><P/></JavaScriptFunction></Actions></CommandDefinition>
               </R>"#,
        )
        .unwrap();
        assert!(Report::build(&doc, ResolverConfig::strict(), "t").is_err());

        let lenient = Report::build(&doc, ResolverConfig::lenient(), "t").unwrap();
        assert_eq!(lenient.warnings.len(), 1);
        assert_eq!(lenient.sections.len(), 1);
    }
}
