//! Prompt template engine
//!
//! This crate provides a small, synchronous engine for building text
//! prompts from f-string style templates: variable discovery by
//! parsing, substitution, partial pre-binding, and deterministic
//! validation of missing variables.
//!
//! # Overview
//!
//! - [`PromptTemplate`] - Immutable string template with named `{placeholder}` variables
//! - [`extract_variables`] - Stand-alone variable discovery for a template string
//! - [`Error`] - Terminal failure taxonomy for parsing, binding, and formatting
//!
//! # Examples
//!
//! ## Simple formatting
//!
//! ```rust
//! use promptfmt::PromptTemplate;
//! use std::collections::HashMap;
//!
//! let template = PromptTemplate::from_template("Write a short story about {topic}.").unwrap();
//!
//! let mut values = HashMap::new();
//! values.insert("topic".to_string(), "a robot learning to paint".to_string());
//!
//! let result = template.format(&values).unwrap();
//! assert_eq!(result, "Write a short story about a robot learning to paint.");
//! ```
//!
//! ## Partial binding
//!
//! ```rust
//! use promptfmt::PromptTemplate;
//! use std::collections::HashMap;
//!
//! let template =
//!     PromptTemplate::from_template("Write an article about {topic} in the style of {style}.")
//!         .unwrap();
//!
//! let mut style = HashMap::new();
//! style.insert("style".to_string(), "a scientific journal".to_string());
//! let journal = template.partial(&style).unwrap();
//!
//! // Only {topic} is still required; the original template is untouched.
//! assert_eq!(journal.required_variables(), ["topic"]);
//! assert_eq!(template.required_variables(), ["topic", "style"]);
//! ```
//!
//! ## Missing-variable reporting
//!
//! Formatting never fails on just the first omission: every missing
//! required variable is reported at once, in template order.
//!
//! ```rust
//! use promptfmt::{Error, PromptTemplate};
//! use std::collections::HashMap;
//!
//! let template = PromptTemplate::from_template("The weather in {city} is {weather}.").unwrap();
//!
//! let mut values = HashMap::new();
//! values.insert("weather".to_string(), "sunny".to_string());
//!
//! match template.format(&values) {
//!     Err(Error::MissingVariables { names }) => assert_eq!(names, ["city"]),
//!     other => panic!("expected MissingVariables, got {other:?}"),
//! }
//! ```

pub mod error;
mod parser;
pub mod template;

pub use error::{Error, Result};
pub use parser::extract_variables;
pub use template::PromptTemplate;
