//! Property-based tests for ribbonview
//!
//! Random ribbons are generated from a small pool of ids so that buttons,
//! commands and rule references collide, repeat and dangle in every
//! combination.

use proptest::prelude::*;
use ribbonview::{Report, ResolverConfig, SectionKind, TextRenderer};

// ============================================================================
// Generators
// ============================================================================

fn id_strategy(prefix: &'static str) -> impl Strategy<Value = String> {
    (0u8..4).prop_map(move |n| format!("{}{}", prefix, n))
}

/// `<Button>` elements referencing commands C0..C3
fn buttons_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((id_strategy("B"), id_strategy("C")), 0..12)
}

#[derive(Debug, Clone)]
struct CommandSpec {
    id: String,
    params_per_action: Vec<usize>,
    enable_refs: Vec<String>,
    display_refs: Vec<String>,
}

fn command_strategy() -> impl Strategy<Value = CommandSpec> {
    (
        id_strategy("C"),
        prop::collection::vec(0usize..4, 0..3),
        prop::collection::vec(id_strategy("E"), 0..4),
        prop::collection::vec(id_strategy("D"), 0..4),
    )
        .prop_map(|(id, params_per_action, enable_refs, display_refs)| CommandSpec {
            id,
            params_per_action,
            enable_refs,
            display_refs,
        })
}

fn ribbon_strategy() -> impl Strategy<Value = String> {
    (
        buttons_strategy(),
        prop::collection::vec(command_strategy(), 0..5),
        prop::collection::vec(id_strategy("E"), 0..4),
        prop::collection::vec(id_strategy("D"), 0..4),
    )
        .prop_map(|(buttons, commands, enable_defs, display_defs)| {
            render_ribbon(&buttons, &commands, &enable_defs, &display_defs)
        })
}

fn render_ribbon(
    buttons: &[(String, String)],
    commands: &[CommandSpec],
    enable_defs: &[String],
    display_defs: &[String],
) -> String {
    let mut xml = String::from("<RibbonDefinitions><Controls>");
    for (id, command) in buttons {
        xml.push_str(&format!(r#"<Button Id="{}" Command="{}"/>"#, id, command));
    }
    xml.push_str("</Controls><CommandDefinitions>");
    for command in commands {
        xml.push_str(&format!(r#"<CommandDefinition Id="{}"><EnableRules>"#, command.id));
        for id in &command.enable_refs {
            xml.push_str(&format!(r#"<EnableRule Id="{}"/>"#, id));
        }
        xml.push_str("</EnableRules><DisplayRules>");
        for id in &command.display_refs {
            xml.push_str(&format!(r#"<DisplayRule Id="{}"/>"#, id));
        }
        xml.push_str("</DisplayRules><Actions>");
        for (n, params) in command.params_per_action.iter().enumerate() {
            xml.push_str(&format!(r#"<JavaScriptFunction FunctionName="f{}" Library="lib">"#, n));
            for p in 0..*params {
                xml.push_str(&format!(r#"<P{} Value="{}"/>"#, p, p));
            }
            xml.push_str("</JavaScriptFunction>");
        }
        xml.push_str("</Actions></CommandDefinition>");
    }
    xml.push_str("</CommandDefinitions><RuleDefinitions><EnableRules>");
    for id in enable_defs {
        xml.push_str(&format!(r#"<EnableRule Id="{}"><R a="1"/></EnableRule>"#, id));
    }
    xml.push_str("</EnableRules><DisplayRules>");
    for id in display_defs {
        xml.push_str(&format!(r#"<DisplayRule Id="{}"><R a="1"/></DisplayRule>"#, id));
    }
    xml.push_str("</DisplayRules></RuleDefinitions></RibbonDefinitions>");
    xml
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_one_section_per_button(xml in ribbon_strategy()) {
        let report = Report::from_xml(&xml, "t", ResolverConfig::new()).unwrap();
        prop_assert_eq!(report.sections.len(), xml.matches("<Button ").count());
    }

    #[test]
    fn prop_output_is_deterministic(xml in ribbon_strategy()) {
        let renderer = TextRenderer::new();
        let first = renderer
            .render_to_string(&Report::from_xml(&xml, "t", ResolverConfig::new()).unwrap())
            .unwrap();
        let second = renderer
            .render_to_string(&Report::from_xml(&xml, "t", ResolverConfig::new()).unwrap())
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_rule_sections_never_exceed_references(
        buttons in buttons_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..5),
        enable_defs in prop::collection::vec(id_strategy("E"), 0..4),
    ) {
        let xml = render_ribbon(&buttons, &commands, &enable_defs, &[]);
        let report = Report::from_xml(&xml, "t", ResolverConfig::new()).unwrap();

        for (section, (_, command_id)) in report.sections.iter().zip(&buttons) {
            let definition = commands.iter().find(|c| &c.id == command_id);
            match definition {
                None => prop_assert_eq!(section.count_descendants(SectionKind::Command), 0),
                Some(command) => {
                    let defined = command
                        .enable_refs
                        .iter()
                        .filter(|id| enable_defs.contains(id))
                        .count();
                    prop_assert_eq!(section.count_descendants(SectionKind::EnableRule), defined);
                    prop_assert_eq!(section.count_descendants(SectionKind::DisplayRule), 0);
                    prop_assert_eq!(
                        section.count_descendants(SectionKind::JavaScriptFunction),
                        command.params_per_action.len()
                    );
                }
            }
        }
    }
}
