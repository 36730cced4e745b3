//! Ant-style route patterns.
//!
//! Three constructs: literal segments, `*` within a segment matching any
//! run of non-slash characters, and a bare `**` segment matching zero or
//! more whole segments. Matches are anchored at both ends.

use authgate_core::error::AppError;

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Segment containing a single `*`: the prefix and suffix must
    /// bracket the path segment.
    Wildcard { prefix: String, suffix: String },
    /// `**`: matches zero or more whole segments.
    Any,
}

impl RoutePattern {
    /// Compiles a pattern string.
    ///
    /// Patterns must be absolute (start with `/`). `**` is only
    /// recognized as a whole segment; a segment mixing `**` with other
    /// characters is rejected rather than silently treated as `*`.
    pub fn compile(pattern: &str) -> Result<Self, AppError> {
        if !pattern.starts_with('/') {
            return Err(AppError::configuration(format!(
                "route pattern must start with '/': {pattern:?}"
            )));
        }

        let mut segments = Vec::new();
        for part in pattern.split('/').skip(1) {
            if part == "**" {
                segments.push(Segment::Any);
            } else if part.contains("**") {
                return Err(AppError::configuration(format!(
                    "'**' must be a whole segment: {pattern:?}"
                )));
            } else if let Some(star) = part.find('*') {
                let suffix = &part[star + 1..];
                if suffix.contains('*') {
                    return Err(AppError::configuration(format!(
                        "at most one '*' per segment: {pattern:?}"
                    )));
                }
                segments.push(Segment::Wildcard {
                    prefix: part[..star].to_string(),
                    suffix: suffix.to_string(),
                });
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the whole path matches this pattern.
    ///
    /// Only the path component participates; callers strip any query
    /// string before matching.
    pub fn matches(&self, path: &str) -> bool {
        if !path.starts_with('/') {
            return false;
        }
        let parts: Vec<&str> = path.split('/').skip(1).collect();
        match_segments(&self.segments, &parts)
    }
}

fn match_segments(pattern: &[Segment], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((Segment::Any, rest)) => {
            // Zero or more segments. A trailing `**` therefore also
            // covers the bare parent path: `/admin/**` matches `/admin`.
            (0..=path.len()).any(|skip| match_segments(rest, &path[skip..]))
        }
        Some((head, rest)) => match path.split_first() {
            None => false,
            Some((part, path_rest)) => segment_matches(head, part) && match_segments(rest, path_rest),
        },
    }
}

fn segment_matches(segment: &Segment, part: &str) -> bool {
    match segment {
        Segment::Literal(lit) => lit == part,
        Segment::Wildcard { prefix, suffix } => {
            part.len() >= prefix.len() + suffix.len()
                && part.starts_with(prefix.as_str())
                && part.ends_with(suffix.as_str())
        }
        Segment::Any => true,
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
