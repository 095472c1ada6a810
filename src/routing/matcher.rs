//! Path pattern matching.
//!
//! # Responsibilities
//! - Compile `{name:class}` patterns into literal and parameter segments
//! - Match a request path segment by segment
//! - Extract named parameters
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - A parameter must cover its whole segment and is never empty
//! - Only two classes exist: `[0-9]+` and `[a-zA-Z]+`
//! - A trailing slash is accepted only when the pattern opts in

/// Error produced while compiling a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern must start with '/': {0}")]
    MissingLeadingSlash(String),
    #[error("unsupported parameter class `{class}` in {pattern}")]
    UnsupportedClass { pattern: String, class: String },
    #[error("malformed parameter segment `{segment}` in {pattern}")]
    MalformedParam { pattern: String, segment: String },
}

/// Character class a parameter segment must consist of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamClass {
    /// `[0-9]+`
    Digits,
    /// `[a-zA-Z]+`
    Letters,
}

impl ParamClass {
    fn parse(class: &str) -> Option<Self> {
        match class {
            "[0-9]+" => Some(ParamClass::Digits),
            "[a-zA-Z]+" => Some(ParamClass::Letters),
            _ => None,
        }
    }

    fn matches(self, segment: &str) -> bool {
        !segment.is_empty()
            && match self {
                ParamClass::Digits => segment.bytes().all(|b| b.is_ascii_digit()),
                ParamClass::Letters => segment.bytes().all(|b| b.is_ascii_alphabetic()),
            }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param { name: String, class: ParamClass },
}

/// Parameters extracted from a matched path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    /// Value of the named parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    optional_trailing_slash: bool,
}

impl PathPattern {
    /// Compile a pattern such as `/api/phones/make/{make:[a-zA-Z]+}`.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(pattern.to_string()))?;

        let mut segments = Vec::new();
        for segment in rest.split('/').filter(|s| !s.is_empty()) {
            if let Some(inner) = segment.strip_prefix('{') {
                let malformed = || PatternError::MalformedParam {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                };
                let inner = inner.strip_suffix('}').ok_or_else(malformed)?;
                let (name, class) = inner.split_once(':').ok_or_else(malformed)?;
                if name.is_empty() {
                    return Err(malformed());
                }
                let class = ParamClass::parse(class).ok_or_else(|| PatternError::UnsupportedClass {
                    pattern: pattern.to_string(),
                    class: class.to_string(),
                })?;
                segments.push(Segment::Param {
                    name: name.to_string(),
                    class,
                });
            } else {
                segments.push(Segment::Literal(segment.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            optional_trailing_slash: false,
        })
    }

    /// Also accept the path with one trailing slash.
    pub fn with_optional_trailing_slash(mut self) -> Self {
        self.optional_trailing_slash = true;
        self
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Try to match a path, extracting parameters.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let mut rest = path.strip_prefix('/')?;
        if self.optional_trailing_slash && !rest.is_empty() {
            rest = rest.strip_suffix('/').unwrap_or(rest);
        }

        let path_segments: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, actual) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != actual {
                        return None;
                    }
                }
                Segment::Param { name, class } => {
                    if !class.matches(actual) {
                        return None;
                    }
                    params.push((name.clone(), actual.to_string()));
                }
            }
        }

        Some(PathParams(params))
    }
}
