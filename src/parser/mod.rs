//! XML loading for ribbon definitions
//!
//! The ribbon XML is read into an element tree, then walked once to collect
//! every `<Button>` and to index command, enable-rule and display-rule
//! definitions by id.

mod definitions;
pub(crate) mod tree;

use crate::error::Result;
use crate::model::*;
use definitions::{parse_button, parse_command_definition, parse_rule_definition};
use log::debug;
use tree::{XmlElement, parse_tree};

/// Parse ribbon XML into a [`RibbonDocument`]
///
/// Malformed XML is an error. Everything else is best-effort: unknown
/// elements are ignored and missing attributes become empty strings.
///
/// # Example
///
/// ```
/// use ribbonview::parser::parse_ribbon_xml;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = parse_ribbon_xml(r#"<RibbonDiffXml><Button Id="B1" Command="C1"/></RibbonDiffXml>"#)?;
/// assert_eq!(doc.buttons.len(), 1);
/// assert!(doc.command("C1").is_none());
/// # Ok(())
/// # }
/// ```
pub fn parse_ribbon_xml(xml: &str) -> Result<RibbonDocument> {
    let root = parse_tree(xml)?;
    let document = index_document(&root);
    debug!(
        "Loaded ribbon: {} buttons, {} commands, {} enable rules, {} display rules",
        document.buttons.len(),
        document.command_count(),
        document.rule_count(RuleKind::Enable),
        document.rule_count(RuleKind::Display),
    );
    Ok(document)
}

/// Ancestor context that decides whether a rule element is a definition
///
/// Rule definitions are `RuleDefinitions//EnableRules//EnableRule` and
/// `RuleDefinitions//DisplayRules//DisplayRule`. Rule elements anywhere else
/// (notably the references inside a `CommandDefinition`) are not indexed.
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    in_rule_definitions: bool,
    in_enable_rules: bool,
    in_display_rules: bool,
}

impl Scope {
    /// Scope for the children of an element with the given name
    fn enter(self, name: &str) -> Self {
        let mut scope = self;
        match name {
            "RuleDefinitions" => scope.in_rule_definitions = true,
            "EnableRules" if self.in_rule_definitions => scope.in_enable_rules = true,
            "DisplayRules" if self.in_rule_definitions => scope.in_display_rules = true,
            _ => {}
        }
        scope
    }

    fn admits(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::Enable => self.in_enable_rules,
            RuleKind::Display => self.in_display_rules,
        }
    }
}

/// Single pre-order walk in document order, so "first definition wins" follows the source
fn index_document(root: &XmlElement) -> RibbonDocument {
    let mut document = RibbonDocument::new();
    let mut pending = vec![(root, Scope::default())];

    while let Some((element, scope)) = pending.pop() {
        match element.name.as_str() {
            "Button" => document.buttons.push(parse_button(element)),
            "CommandDefinition" => {
                if let Some(command) = parse_command_definition(element) {
                    let id = command.id.clone();
                    if !document.insert_command(command) {
                        debug!("Ignoring duplicate CommandDefinition '{}'", id);
                    }
                }
            }
            "EnableRule" if scope.admits(RuleKind::Enable) => {
                index_rule(&mut document, element, RuleKind::Enable)
            }
            "DisplayRule" if scope.admits(RuleKind::Display) => {
                index_rule(&mut document, element, RuleKind::Display)
            }
            _ => {}
        }

        let child_scope = scope.enter(&element.name);
        pending.extend(element.children.iter().rev().map(|child| (child, child_scope)));
    }

    document
}

fn index_rule(document: &mut RibbonDocument, element: &XmlElement, kind: RuleKind) {
    if let Some(rule) = parse_rule_definition(element, kind) {
        let id = rule.id.clone();
        if !document.insert_rule(rule) {
            debug!("Ignoring duplicate {} rule '{}'", kind, id);
        }
    }
}
