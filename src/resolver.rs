//! Resolution of buttons into their commands and rules
//!
//! [`Resolver`] walks the buttons of a [`RibbonDocument`] in document order and
//! yields one [`ResolvedButton`] per `<Button>` element. Resolution is lazy:
//! nothing is looked up until the iterator is advanced.
//!
//! # Example
//!
//! ```
//! use ribbonview::parser::parse_ribbon_xml;
//! use ribbonview::{Resolver, ResolverConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = parse_ribbon_xml(
//!     r#"<Ribbon>
//!          <Button Id="B1" Command="C1"/>
//!          <CommandDefinition Id="C1"/>
//!        </Ribbon>"#,
//! )?;
//!
//! for resolved in Resolver::new(&doc, ResolverConfig::new()) {
//!     let resolved = resolved?;
//!     println!("{} -> {:?}", resolved.button.id, resolved.command.map(|c| c.id));
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::model::*;
use log::{debug, warn};

/// Iterator over the resolved buttons of a document
///
/// Yields `Err` at most once: under [`ParameterPolicy::Strict`] a parameter
/// without `Value` ends the iteration. Under [`ParameterPolicy::Lenient`] the
/// parameter is dropped and a [`ResolutionWarning`] is recorded instead.
pub struct Resolver<'a> {
    document: &'a RibbonDocument,
    config: ResolverConfig,
    position: usize,
    warnings: Vec<ResolutionWarning>,
    done: bool,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over all buttons of `document`
    pub fn new(document: &'a RibbonDocument, config: ResolverConfig) -> Self {
        Self {
            document,
            config,
            position: 0,
            warnings: Vec::new(),
            done: false,
        }
    }

    /// Warnings recorded so far (lenient mode only)
    pub fn warnings(&self) -> &[ResolutionWarning] {
        &self.warnings
    }

    /// Consume the resolver, returning the recorded warnings
    pub fn into_warnings(self) -> Vec<ResolutionWarning> {
        self.warnings
    }

    fn resolve_button(&mut self, button: &'a ButtonDefinition) -> Result<ResolvedButton<'a>> {
        let document = self.document;
        let command = match document.command(&button.command) {
            Some(definition) => Some(self.resolve_command(button, definition)?),
            None => {
                debug!(
                    "Button '{}': command '{}' is not defined",
                    button.id, button.command
                );
                None
            }
        };
        Ok(ResolvedButton { button, command })
    }

    fn resolve_command(
        &mut self,
        button: &'a ButtonDefinition,
        definition: &'a CommandDefinition,
    ) -> Result<ResolvedCommand<'a>> {
        let mut actions = Vec::with_capacity(definition.actions.len());
        for function in &definition.actions {
            actions.push(self.resolve_action(button, definition, function)?);
        }

        Ok(ResolvedCommand {
            id: &definition.id,
            actions,
            enable_rules: self.resolve_rules(&definition.enable_rule_refs, RuleKind::Enable),
            display_rules: self.resolve_rules(&definition.display_rule_refs, RuleKind::Display),
        })
    }

    fn resolve_action(
        &mut self,
        button: &'a ButtonDefinition,
        command: &'a CommandDefinition,
        function: &'a JavaScriptFunction,
    ) -> Result<JavaScriptAction<'a>> {
        let mut parameters = Vec::with_capacity(function.parameters.len());

        for param in &function.parameters {
            match (&param.value, self.config.parameter_policy()) {
                (Some(value), _) => parameters.push(ActionParameter {
                    name: &param.name,
                    value: value.as_str(),
                }),
                (None, ParameterPolicy::Strict) => {
                    return Err(Error::missing_parameter_value(
                        &command.id,
                        &function.function_name,
                        &param.name,
                    ));
                }
                (None, ParameterPolicy::Lenient) => {
                    let warning = ResolutionWarning {
                        button: button.id.clone(),
                        command: command.id.clone(),
                        function: function.function_name.clone(),
                        parameter: param.name.clone(),
                    };
                    warn!("{}", warning);
                    self.warnings.push(warning);
                }
            }
        }

        Ok(JavaScriptAction {
            function_name: &function.function_name,
            library: &function.library,
            parameters,
        })
    }

    /// Look up referenced rules, silently dropping ids with no definition
    fn resolve_rules(&self, refs: &'a [String], kind: RuleKind) -> Vec<&'a RuleDefinition> {
        let document = self.document;
        refs.iter()
            .filter_map(|id| {
                let rule = document.rule(kind, id);
                if rule.is_none() {
                    debug!("{} rule '{}' has no definition", kind, id);
                }
                rule
            })
            .collect()
    }
}

impl<'a> Iterator for Resolver<'a> {
    type Item = Result<ResolvedButton<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let document = self.document;
        let Some(button) = document.buttons.get(self.position) else {
            self.done = true;
            return None;
        };
        self.position += 1;

        let result = self.resolve_button(button);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

/// Resolve every button of `document`, stopping at the first error
///
/// Returns the resolved buttons together with any warnings recorded in lenient mode.
pub fn resolve_all<'a>(
    document: &'a RibbonDocument,
    config: ResolverConfig,
) -> Result<(Vec<ResolvedButton<'a>>, Vec<ResolutionWarning>)> {
    let mut resolver = Resolver::new(document, config);
    let buttons = resolver.by_ref().collect::<Result<Vec<_>>>()?;
    Ok((buttons, resolver.into_warnings()))
}
