use std::fmt;

use crate::constants::NAMESPACE_SEPARATOR;

/// Name produced for a content path
///
/// The two variants record which branch of the conversion produced the name:
/// a path directly under the namespace root is returned as-is, deeper paths
/// are sanitized into `Namespace.TypeName` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeneratedName {
    /// Path had a single segment below the root and was not sanitized
    SingleSegment(String),
    /// Sanitized `Namespace.Sub.TypeName`
    MultiSegment { full: String },
}

impl GeneratedName {
    pub fn as_str(&self) -> &str {
        match self {
            GeneratedName::SingleSegment(name) => name,
            GeneratedName::MultiSegment { full } => full,
        }
    }

    /// Everything before the last dot, if the name has a namespace
    pub fn namespace(&self) -> Option<&str> {
        match self {
            GeneratedName::SingleSegment(_) => None,
            GeneratedName::MultiSegment { full } => full
                .rsplit_once(NAMESPACE_SEPARATOR)
                .map(|(namespace, _)| namespace),
        }
    }

    /// The final dotted component
    pub fn type_name(&self) -> &str {
        match self {
            GeneratedName::SingleSegment(name) => name,
            GeneratedName::MultiSegment { full } => full
                .rsplit_once(NAMESPACE_SEPARATOR)
                .map_or(full.as_str(), |(_, type_name)| type_name),
        }
    }

    pub fn is_multi_segment(&self) -> bool {
        matches!(self, GeneratedName::MultiSegment { .. })
    }

    pub fn into_string(self) -> String {
        match self {
            GeneratedName::SingleSegment(name) => name,
            GeneratedName::MultiSegment { full } => full,
        }
    }
}

impl fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GeneratedName> for String {
    fn from(name: GeneratedName) -> Self {
        name.into_string()
    }
}
