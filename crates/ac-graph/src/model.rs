//! Component and binding records as they appear in blueprint documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static component type.
///
/// Serialized as the plain type string; unrecognised strings are kept
/// verbatim in [`ComponentType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    Source,
    Transformer,
    Sink,
    Store,
    ApiEndpoint,
    Other(String),
}

impl ComponentType {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Source => "Source",
            ComponentType::Transformer => "Transformer",
            ComponentType::Sink => "Sink",
            ComponentType::Store => "Store",
            ComponentType::ApiEndpoint => "APIEndpoint",
            ComponentType::Other(s) => s,
        }
    }

    /// Types that terminate dataflow when they carry no static outputs.
    pub fn is_sink_type(&self) -> bool {
        matches!(
            self,
            ComponentType::Store | ComponentType::Sink | ComponentType::ApiEndpoint
        )
    }
}

impl From<String> for ComponentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Source" => ComponentType::Source,
            "Transformer" => ComponentType::Transformer,
            "Sink" => ComponentType::Sink,
            "Store" => ComponentType::Store,
            "APIEndpoint" => ComponentType::ApiEndpoint,
            _ => ComponentType::Other(s),
        }
    }
}

impl From<&str> for ComponentType {
    fn from(s: &str) -> Self {
        ComponentType::from(s.to_string())
    }
}

impl From<ComponentType> for String {
    fn from(t: ComponentType) -> Self {
        match t {
            ComponentType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named component of a system blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Statically declared outputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    /// Dataflow endpoint that must never gain outgoing bindings.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub terminal: bool,
}

impl Component {
    pub fn new(name: impl Into<String>, kind: impl Into<ComponentType>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            outputs: Vec::new(),
            terminal: false,
        }
    }

    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    pub fn has_static_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }
}

/// A directed binding between two components, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    #[serde(alias = "source")]
    pub from: String,
    #[serde(alias = "target")]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Binding {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            generated_by: None,
            description: None,
        }
    }

    /// A binding synthesized by a tool, tagged with its provenance.
    pub fn generated(
        from: impl Into<String>,
        to: impl Into<String>,
        generated_by: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            generated_by: Some(generated_by.into()),
            description: Some(description.into()),
        }
    }

    pub fn is_generated(&self) -> bool {
        self.generated_by.is_some()
    }

    /// `(from, to)` pair, ignoring provenance.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.from, &self.to)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
