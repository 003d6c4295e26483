//! Conversion of ribbon elements into definition structures

use super::tree::XmlElement;
use crate::model::*;

/// Build a button from a `<Button>` element, defaulting missing attributes to ""
pub(crate) fn parse_button(element: &XmlElement) -> ButtonDefinition {
    ButtonDefinition {
        id: element.attribute_or_empty("Id"),
        command: element.attribute_or_empty("Command"),
        image16x16: element.attribute_or_empty("Image16by16"),
        image32x32: element.attribute_or_empty("Image32by32"),
        modern_image: element.attribute_or_empty("ModernImage"),
    }
}

/// Build a command from a `<CommandDefinition>` element
///
/// Returns `None` when the element has no `Id`, since nothing can refer to it.
pub(crate) fn parse_command_definition(element: &XmlElement) -> Option<CommandDefinition> {
    let mut command = CommandDefinition::new(element.attribute("Id")?);

    for actions in element.children_named("Actions") {
        command
            .actions
            .extend(actions.children_named("JavaScriptFunction").map(parse_javascript_function));
    }
    command.enable_rule_refs = parse_rule_refs(element, RuleKind::Enable);
    command.display_rule_refs = parse_rule_refs(element, RuleKind::Display);

    Some(command)
}

fn parse_javascript_function(element: &XmlElement) -> JavaScriptFunction {
    JavaScriptFunction {
        function_name: element.attribute_or_empty("FunctionName"),
        library: element.attribute_or_empty("Library"),
        parameters: element
            .children
            .iter()
            .map(|param| RawParameter {
                name: param.name.clone(),
                value: param.attribute("Value").map(str::to_string),
            })
            .collect(),
    }
}

/// Rule ids referenced from a command's `EnableRules` or `DisplayRules` container
///
/// A reference without `Id` is kept as an empty id; it never matches an
/// indexed definition and is dropped during resolution.
fn parse_rule_refs(command: &XmlElement, kind: RuleKind) -> Vec<String> {
    command
        .children_named(kind.container_name())
        .flat_map(|container| container.children_named(kind.element_name()))
        .map(|rule| rule.attribute_or_empty("Id"))
        .collect()
}

/// Build a rule definition, flattening the attributes of its direct children
///
/// Returns `None` when the element has no `Id`.
pub(crate) fn parse_rule_definition(element: &XmlElement, kind: RuleKind) -> Option<RuleDefinition> {
    let mut rule = RuleDefinition::new(kind, element.attribute("Id")?);
    for child in &element.children {
        rule.attributes.extend(
            child
                .attributes
                .iter()
                .map(|(name, value)| RuleAttribute::new(&child.name, name, value)),
        );
    }
    Some(rule)
}
