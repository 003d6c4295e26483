//! Data structures representing a parsed ribbon definition

use std::collections::HashMap;
use std::fmt;

/// A `<Button>` element
///
/// Every attribute defaults to an empty string when absent. Ribbon XML is
/// treated as partial, so a missing attribute is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonDefinition {
    /// `Id` attribute
    pub id: String,
    /// `Command` attribute, the id of a [`CommandDefinition`]
    pub command: String,
    /// `Image16by16` attribute
    pub image16x16: String,
    /// `Image32by32` attribute
    pub image32x32: String,
    /// `ModernImage` attribute
    pub modern_image: String,
}

impl ButtonDefinition {
    /// Create a button with the given id and command
    pub fn new(id: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            command: command.into(),
            ..Default::default()
        }
    }
}

/// A parameter element nested in a `<JavaScriptFunction>`
///
/// The element name is the parameter name (e.g. `CrmParameter`, `StringParameter`).
/// `value` is `None` when the element has no `Value` attribute; what that means is
/// decided at resolution time by [`ParameterPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter {
    /// Element name
    pub name: String,
    /// `Value` attribute, if present
    pub value: Option<String>,
}

/// A `<JavaScriptFunction>` under a command's `<Actions>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaScriptFunction {
    /// `FunctionName` attribute
    pub function_name: String,
    /// `Library` attribute
    pub library: String,
    /// Child elements, in document order
    pub parameters: Vec<RawParameter>,
}

/// A `<CommandDefinition>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDefinition {
    /// `Id` attribute
    pub id: String,
    /// `Actions/JavaScriptFunction` children, in document order
    pub actions: Vec<JavaScriptFunction>,
    /// Ids from `EnableRules/EnableRule`, in document order
    pub enable_rule_refs: Vec<String>,
    /// Ids from `DisplayRules/DisplayRule`, in document order
    pub display_rule_refs: Vec<String>,
}

impl CommandDefinition {
    /// Create an empty command definition
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Which rule namespace a [`RuleDefinition`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `RuleDefinitions//EnableRules//EnableRule`
    Enable,
    /// `RuleDefinitions//DisplayRules//DisplayRule`
    Display,
}

impl RuleKind {
    /// Element name of a rule of this kind
    pub fn element_name(&self) -> &'static str {
        match self {
            RuleKind::Enable => "EnableRule",
            RuleKind::Display => "DisplayRule",
        }
    }

    /// Element name of the container holding rules of this kind
    pub fn container_name(&self) -> &'static str {
        match self {
            RuleKind::Enable => "EnableRules",
            RuleKind::Display => "DisplayRules",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Enable => write!(f, "Enable"),
            RuleKind::Display => write!(f, "Display"),
        }
    }
}

/// One attribute of one child element of a rule definition
///
/// Rule shapes differ per rule type (`FormStateRule`, `CustomRule`,
/// `EntityPrivilegeRule`, ...), so they are kept as a flat list of
/// `(element, attribute, value)` triples instead of typed structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAttribute {
    /// Child element name
    pub element: String,
    /// Attribute name
    pub attribute: String,
    /// Attribute value
    pub value: String,
}

impl RuleAttribute {
    /// Create a new attribute triple
    pub fn new(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

/// An enable or display rule definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    /// Enable or display
    pub kind: RuleKind,
    /// `Id` attribute
    pub id: String,
    /// Attributes of all direct child elements, element order then attribute order
    pub attributes: Vec<RuleAttribute>,
}

impl RuleDefinition {
    /// Create an empty rule definition
    pub fn new(kind: RuleKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            attributes: Vec::new(),
        }
    }
}

/// A parsed ribbon definition
///
/// Holds every `<Button>` in document order and three disjoint id-keyed
/// indexes: command definitions, enable rules and display rules. Each index
/// keeps the first definition in document order when ids repeat.
#[derive(Debug, Clone, Default)]
pub struct RibbonDocument {
    /// All `<Button>` elements, in document order, duplicates included
    pub buttons: Vec<ButtonDefinition>,
    commands: HashMap<String, CommandDefinition>,
    enable_rules: HashMap<String, RuleDefinition>,
    display_rules: HashMap<String, RuleDefinition>,
}

impl RibbonDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a command definition by id
    pub fn command(&self, id: &str) -> Option<&CommandDefinition> {
        self.commands.get(id)
    }

    /// Look up a rule definition by kind and id
    pub fn rule(&self, kind: RuleKind, id: &str) -> Option<&RuleDefinition> {
        match kind {
            RuleKind::Enable => self.enable_rules.get(id),
            RuleKind::Display => self.display_rules.get(id),
        }
    }

    /// Number of distinct command definitions
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of distinct rule definitions of the given kind
    pub fn rule_count(&self, kind: RuleKind) -> usize {
        match kind {
            RuleKind::Enable => self.enable_rules.len(),
            RuleKind::Display => self.display_rules.len(),
        }
    }

    /// Register a command definition
    ///
    /// Returns `false` and keeps the existing entry if the id is already defined.
    pub fn insert_command(&mut self, command: CommandDefinition) -> bool {
        if self.commands.contains_key(&command.id) {
            return false;
        }
        self.commands.insert(command.id.clone(), command);
        true
    }

    /// Register a rule definition in the namespace given by its kind
    ///
    /// Returns `false` and keeps the existing entry if the id is already defined.
    pub fn insert_rule(&mut self, rule: RuleDefinition) -> bool {
        let index = match rule.kind {
            RuleKind::Enable => &mut self.enable_rules,
            RuleKind::Display => &mut self.display_rules,
        };
        if index.contains_key(&rule.id) {
            return false;
        }
        index.insert(rule.id.clone(), rule);
        true
    }
}

/// What to do with a `JavaScriptFunction` parameter that has no `Value` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterPolicy {
    /// Abort the whole report with [`Error::MissingParameterValue`](crate::Error::MissingParameterValue)
    #[default]
    Strict,
    /// Skip the parameter and record a [`ResolutionWarning`]
    Lenient,
}

/// Configuration for ribbon resolution
///
/// # Example
///
/// ```
/// use ribbonview::{ParameterPolicy, ResolverConfig};
///
/// let config = ResolverConfig::new().with_parameter_policy(ParameterPolicy::Lenient);
/// assert_eq!(config.parameter_policy(), ParameterPolicy::Lenient);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    parameter_policy: ParameterPolicy,
}

impl ResolverConfig {
    /// Create a configuration with default (strict) settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict configuration: a parameter without `Value` is fatal
    pub fn strict() -> Self {
        Self::new().with_parameter_policy(ParameterPolicy::Strict)
    }

    /// Lenient configuration: a parameter without `Value` is skipped with a warning
    pub fn lenient() -> Self {
        Self::new().with_parameter_policy(ParameterPolicy::Lenient)
    }

    /// Set the missing-`Value` policy
    pub fn with_parameter_policy(mut self, policy: ParameterPolicy) -> Self {
        self.parameter_policy = policy;
        self
    }

    /// The configured missing-`Value` policy
    pub fn parameter_policy(&self) -> ParameterPolicy {
        self.parameter_policy
    }
}

/// A parameter skipped under [`ParameterPolicy::Lenient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionWarning {
    /// Id of the button being resolved
    pub button: String,
    /// Id of its command definition
    pub command: String,
    /// `FunctionName` of the JavaScript function
    pub function: String,
    /// Element name of the skipped parameter
    pub parameter: String,
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "button '{}': skipped parameter '<{}>' of function '{}' in command '{}' (no 'Value' attribute)",
            self.button, self.parameter, self.function, self.command
        )
    }
}

/// A JavaScript function parameter with its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionParameter<'a> {
    /// Element name
    pub name: &'a str,
    /// `Value` attribute
    pub value: &'a str,
}

/// A JavaScript action with its parameters checked against the policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaScriptAction<'a> {
    /// `FunctionName` attribute
    pub function_name: &'a str,
    /// `Library` attribute
    pub library: &'a str,
    /// Parameters in document order
    pub parameters: Vec<ActionParameter<'a>>,
}

/// A command definition with its rule references looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand<'a> {
    /// Command definition id
    pub id: &'a str,
    /// JavaScript actions in document order
    pub actions: Vec<JavaScriptAction<'a>>,
    /// Enable rules whose definitions were found, in reference order
    pub enable_rules: Vec<&'a RuleDefinition>,
    /// Display rules whose definitions were found, in reference order
    pub display_rules: Vec<&'a RuleDefinition>,
}

/// A button paired with its resolved command, if the command exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedButton<'a> {
    /// The button
    pub button: &'a ButtonDefinition,
    /// `None` when no `<CommandDefinition>` has the button's `Command` id
    pub command: Option<ResolvedCommand<'a>>,
}
