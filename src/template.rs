//! String prompt template with variable substitution and partial binding
//!
//! A [`PromptTemplate`] is an immutable value: it is parsed once at
//! construction and can then be formatted any number of times, or used
//! to derive new templates via [`PromptTemplate::partial`] without the
//! original ever changing. Because it holds no interior mutability it
//! is freely shareable across threads for concurrent formatting.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::{self, Segment};

/// A string template with named `{placeholder}` variables.
///
/// # Examples
///
/// ```rust
/// use promptfmt::PromptTemplate;
/// use std::collections::HashMap;
///
/// let template = PromptTemplate::from_template("Tell me a joke about {topic}").unwrap();
///
/// let mut values = HashMap::new();
/// values.insert("topic".to_string(), "rust".to_string());
///
/// assert_eq!(template.format(&values).unwrap(), "Tell me a joke about rust");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
    input_variables: Vec<String>,
    #[serde(default)]
    partial_variables: HashMap<String, String>,
}

impl PromptTemplate {
    /// Create a template from a template string, discovering its
    /// variables by parsing.
    ///
    /// Fails with [`Error::MalformedTemplate`] on invalid placeholder
    /// syntax.
    pub fn from_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let input_variables = parser::extract_variables(&template)?;
        Ok(Self {
            template,
            input_variables,
            partial_variables: HashMap::new(),
        })
    }

    /// Create a template from a template string and an explicit list of
    /// input variables.
    ///
    /// The explicit list must contain exactly the variables present in
    /// the template, in any order and without duplicates; otherwise the
    /// call fails with [`Error::VariableMismatch`]. The stored variable
    /// order is always template discovery order.
    pub fn new(template: impl Into<String>, input_variables: Vec<String>) -> Result<Self> {
        let template = template.into();
        let parsed = parser::extract_variables(&template)?;

        let declared: HashSet<&String> = input_variables.iter().collect();
        let discovered: HashSet<&String> = parsed.iter().collect();
        if declared != discovered || declared.len() != input_variables.len() {
            return Err(Error::VariableMismatch {
                expected: input_variables,
                parsed,
            });
        }

        Ok(Self {
            template,
            input_variables: parsed,
            partial_variables: HashMap::new(),
        })
    }

    /// The raw template string.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// All variables discovered in the template, in first-occurrence
    /// order, including any that have since been partially bound.
    #[must_use]
    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    /// The pre-bound (partial) variables.
    #[must_use]
    pub fn partial_variables(&self) -> &HashMap<String, String> {
        &self.partial_variables
    }

    /// The variables still required at format time: discovered
    /// variables minus partial bindings, in discovery order.
    #[must_use]
    pub fn required_variables(&self) -> Vec<&str> {
        self.input_variables
            .iter()
            .filter(|name| !self.partial_variables.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Derive a new template with additional pre-bound variables.
    ///
    /// The receiver is left unmodified. Re-binding an already-bound
    /// name replaces its value in the derived template. Fails with
    /// [`Error::UnknownVariable`] if a key does not name a discovered
    /// variable; the lexicographically first offender is reported.
    pub fn partial(&self, bindings: &HashMap<String, String>) -> Result<Self> {
        let mut unknown: Vec<&String> = bindings
            .keys()
            .filter(|name| !self.input_variables.iter().any(|v| v == *name))
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(Error::UnknownVariable {
                name: unknown[0].clone(),
            });
        }

        let mut partial_variables = self.partial_variables.clone();
        for (name, value) in bindings {
            partial_variables.insert(name.clone(), value.clone());
        }

        Ok(Self {
            template: self.template.clone(),
            input_variables: self.input_variables.clone(),
            partial_variables,
        })
    }

    /// Format the template with the given values.
    ///
    /// `values` must cover every required variable; extra keys are
    /// ignored. Values take precedence over partial bindings for the
    /// same name. Fails with [`Error::MissingVariables`] listing every
    /// absent required name in discovery order.
    pub fn format(&self, values: &HashMap<String, String>) -> Result<String> {
        self.validate_inputs(values)?;
        let merged = self.merge_inputs(values);

        let mut result = String::with_capacity(self.template.len());
        for segment in parser::parse(&self.template)? {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Escape(brace) => result.push(brace),
                Segment::Variable { name } => match merged.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(Error::MissingVariables {
                            names: vec![name.to_string()],
                        })
                    }
                },
            }
        }

        tracing::trace!(variables = merged.len(), "formatted prompt template");
        Ok(result)
    }

    /// Check that `values` covers the required set, collecting every
    /// missing name rather than failing on the first.
    fn validate_inputs(&self, values: &HashMap<String, String>) -> Result<()> {
        let missing: Vec<String> = self
            .input_variables
            .iter()
            .filter(|name| !self.partial_variables.contains_key(name.as_str()))
            .filter(|name| !values.contains_key(name.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(Error::MissingVariables { names: missing });
        }
        Ok(())
    }

    /// Merge partial bindings with format-time values, values winning
    /// on conflict.
    fn merge_inputs(&self, values: &HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = HashMap::with_capacity(self.partial_variables.len() + values.len());
        for (name, value) in &self.partial_variables {
            merged.insert(name.clone(), value.clone());
        }
        for (name, value) in values {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }
}
