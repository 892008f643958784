//! Placeholder scanner for f-string templates
//!
//! Templates use Python f-string syntax: `{name}` is a placeholder,
//! `{name:spec}` carries a format specifier (ignored at substitution
//! time, the variable name is the part before the first `:`), and
//! `{{` / `}}` are escapes for literal braces. Unlike a permissive
//! formatter that copies unknown syntax through, the scanner rejects
//! malformed input outright so that a template is known to be fully
//! substitutable the moment it is constructed.

use crate::error::{Error, Result};

/// One parsed piece of a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// A run of literal text, copied through unchanged.
    Literal(&'a str),
    /// A literal brace produced by a `{{` or `}}` escape.
    Escape(char),
    /// A placeholder to be substituted. Any format specifier has
    /// already been stripped from `name`.
    Variable { name: &'a str },
}

/// Scan a template string into segments.
///
/// Fails with [`Error::MalformedTemplate`] on an empty placeholder,
/// an unclosed `{`, a `{` nested inside a placeholder, or a stray `}`
/// that is not part of a `}}` escape.
pub(crate) fn parse(template: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let bytes = template.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => {
                if bytes.get(pos + 1) == Some(&b'{') {
                    segments.push(Segment::Escape('{'));
                    pos += 2;
                    continue;
                }
                let start = pos;
                let mut end = None;
                for (offset, &b) in bytes[pos + 1..].iter().enumerate() {
                    match b {
                        b'}' => {
                            end = Some(pos + 1 + offset);
                            break;
                        }
                        b'{' => {
                            return Err(Error::MalformedTemplate {
                                position: pos + 1 + offset,
                                reason: "unexpected '{' inside placeholder".to_string(),
                            });
                        }
                        _ => {}
                    }
                }
                let Some(end) = end else {
                    return Err(Error::MalformedTemplate {
                        position: start,
                        reason: "unclosed placeholder".to_string(),
                    });
                };
                let placeholder = &template[start + 1..end];
                // Strip a format specifier like "name:10.2f" down to "name"
                let name = placeholder
                    .split(':')
                    .next()
                    .unwrap_or(placeholder);
                if name.is_empty() {
                    return Err(Error::MalformedTemplate {
                        position: start,
                        reason: "empty placeholder".to_string(),
                    });
                }
                segments.push(Segment::Variable { name });
                pos = end + 1;
            }
            b'}' => {
                if bytes.get(pos + 1) == Some(&b'}') {
                    segments.push(Segment::Escape('}'));
                    pos += 2;
                } else {
                    return Err(Error::MalformedTemplate {
                        position: pos,
                        reason: "stray '}' outside placeholder".to_string(),
                    });
                }
            }
            _ => {
                let start = pos;
                while pos < bytes.len() && bytes[pos] != b'{' && bytes[pos] != b'}' {
                    pos += 1;
                }
                segments.push(Segment::Literal(&template[start..pos]));
            }
        }
    }

    Ok(segments)
}

/// Extract the distinct variable names from a template string, in
/// first-occurrence order.
///
/// ```
/// let vars = promptfmt::extract_variables("Hello {name}, you are {age}").unwrap();
/// assert_eq!(vars, vec!["name", "age"]);
/// ```
pub fn extract_variables(template: &str) -> Result<Vec<String>> {
    let mut variables: Vec<String> = Vec::new();
    for segment in parse(template)? {
        if let Segment::Variable { name } = segment {
            if !variables.iter().any(|v| v == name) {
                variables.push(name.to_string());
            }
        }
    }
    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::{extract_variables, parse, Segment};
    use crate::error::Error;

    #[test]
    fn test_extract_variables_order() {
        let vars = extract_variables("Hello {name}, you are {age} years old").unwrap();
        assert_eq!(vars, vec!["name", "age"]);
    }

    #[test]
    fn test_extract_variables_dedupe() {
        let vars = extract_variables("Hello {name}, {name}!").unwrap();
        assert_eq!(vars, vec!["name"]);
    }

    #[test]
    fn test_extract_variables_strips_format_spec() {
        let vars = extract_variables("Value: {value:10.2f}").unwrap();
        assert_eq!(vars, vec!["value"]);
    }

    #[test]
    fn test_extract_variables_none() {
        let vars = extract_variables("no placeholders here").unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_parse_segments() {
        let segments = parse("a {x} b").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a "),
                Segment::Variable { name: "x" },
                Segment::Literal(" b"),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_placeholders() {
        let segments = parse("{a}{b}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Variable { name: "a" },
                Segment::Variable { name: "b" },
            ]
        );
    }

    #[test]
    fn test_parse_escaped_braces() {
        let segments = parse("{{literal}}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Escape('{'),
                Segment::Literal("literal"),
                Segment::Escape('}'),
            ]
        );
    }

    #[test]
    fn test_parse_empty_placeholder_fails() {
        let err = parse("prefix {} suffix").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedTemplate {
                position: 7,
                reason: "empty placeholder".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_name_with_spec_fails() {
        let err = parse("{:10}").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { position: 0, .. }));
    }

    #[test]
    fn test_parse_unclosed_placeholder_fails() {
        let err = parse("Hello {name").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedTemplate {
                position: 6,
                reason: "unclosed placeholder".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_stray_closing_brace_fails() {
        let err = parse("oops } here").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { position: 5, .. }));
    }

    #[test]
    fn test_parse_nested_open_brace_fails() {
        let err = parse("{a{b}").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedTemplate { position: 2, .. }
        ));
    }

    #[test]
    fn test_parse_multibyte_literal() {
        let segments = parse("caf\u{e9} {drink} \u{2615}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("caf\u{e9} "),
                Segment::Variable { name: "drink" },
                Segment::Literal(" \u{2615}"),
            ]
        );
    }
}
