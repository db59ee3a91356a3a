//! URI templates with `{name}` placeholders.

use std::{collections::HashSet, fmt};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reasons a URI template is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template must start with '/'")]
    MissingLeadingSlash,
    #[error("unbalanced braces in segment '{0}'")]
    UnbalancedBraces(String),
    #[error("placeholder must span a whole segment, found '{0}'")]
    PartialSegment(String),
    #[error("empty placeholder name")]
    EmptyPlaceholder,
    #[error("invalid placeholder name '{0}'")]
    InvalidPlaceholder(String),
    #[error("placeholder '{0}' appears more than once")]
    DuplicatePlaceholder(String),
}

/// One `/`-separated piece of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segment {
    /// A literal path segment (may be empty for `/` or a trailing slash).
    Static(String),
    /// A `{name}` placeholder.
    Param(String),
}

/// A parsed URI template such as `/dogs/{id}/appointments`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl UriTemplate {
    /// Parse a template, rejecting malformed placeholders.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(TemplateError::MissingLeadingSlash);
        };

        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for part in rest.split('/') {
            let segment = parse_segment(part)?;
            if let Segment::Param(name) = &segment
                && !seen.insert(name.clone())
            {
                return Err(TemplateError::DuplicatePlaceholder(name.clone()));
            }
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The template exactly as written in the document.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in template order.
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }
}

fn parse_segment(part: &str) -> Result<Segment, TemplateError> {
    let opens = part.matches('{').count();
    let closes = part.matches('}').count();

    if opens == 0 && closes == 0 {
        return Ok(Segment::Static(part.to_string()));
    }
    if opens != closes || opens > 1 {
        return Err(TemplateError::UnbalancedBraces(part.to_string()));
    }

    let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) else {
        // Exactly one pair, but either misordered or surrounded by literals
        return if part.find('{') > part.find('}') {
            Err(TemplateError::UnbalancedBraces(part.to_string()))
        } else {
            Err(TemplateError::PartialSegment(part.to_string()))
        };
    };

    if name.is_empty() {
        return Err(TemplateError::EmptyPlaceholder);
    }
    if !is_placeholder_name(name) {
        return Err(TemplateError::InvalidPlaceholder(name.to_string()));
    }
    Ok(Segment::Param(name.to_string()))
}

fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    first_ok && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for UriTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        let t = UriTemplate::parse("/phones").unwrap();
        assert_eq!(t.segments(), &[Segment::Static("phones".into())]);
        assert!(t.params().is_empty());
    }

    #[test]
    fn test_parse_embedded_param() {
        let t = UriTemplate::parse("/dogs/{id}/appointments").unwrap();
        assert_eq!(t.params(), vec!["id"]);
        assert_eq!(
            t.segments(),
            &[
                Segment::Static("dogs".into()),
                Segment::Param("id".into()),
                Segment::Static("appointments".into()),
            ]
        );
    }

    #[test]
    fn test_root_and_trailing_slash() {
        assert_eq!(
            UriTemplate::parse("/").unwrap().segments(),
            &[Segment::Static(String::new())]
        );
        let t = UriTemplate::parse("/dogs/").unwrap();
        assert_eq!(t.as_str(), "/dogs/");
        assert_eq!(
            t.segments(),
            &[Segment::Static("dogs".into()), Segment::Static(String::new())]
        );
    }

    #[test]
    fn test_malformed_templates() {
        assert_eq!(
            UriTemplate::parse("dogs"),
            Err(TemplateError::MissingLeadingSlash)
        );
        assert_eq!(
            UriTemplate::parse("/dogs/{id"),
            Err(TemplateError::UnbalancedBraces("{id".into()))
        );
        assert_eq!(
            UriTemplate::parse("/dogs/}id{"),
            Err(TemplateError::UnbalancedBraces("}id{".into()))
        );
        assert_eq!(
            UriTemplate::parse("/files/{name}.json"),
            Err(TemplateError::PartialSegment("{name}.json".into()))
        );
        assert_eq!(
            UriTemplate::parse("/dogs/{}"),
            Err(TemplateError::EmptyPlaceholder)
        );
        assert_eq!(
            UriTemplate::parse("/dogs/{1st}"),
            Err(TemplateError::InvalidPlaceholder("1st".into()))
        );
        assert_eq!(
            UriTemplate::parse("/a/{id}/b/{id}"),
            Err(TemplateError::DuplicatePlaceholder("id".into()))
        );
    }
}
