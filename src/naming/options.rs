//! Converter options
//!
//! Every knob defaults to the redesigned behavior. `ConverterOptions::reference()`
//! reproduces the legacy generator output.

use serde::{Deserialize, Serialize};

/// How the namespace root is removed from a content path
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RootMatch {
    /// Strip the root only when the path starts with it at a segment boundary
    #[default]
    Prefix,
    /// Remove every occurrence of the root anywhere in the path
    Substring,
}

/// What happens when a path does not start with the namespace root
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMiss {
    /// Convert the whole path as-is
    #[default]
    PassThrough,
    /// Fail with a prefix mismatch error
    Reject,
}

/// Whether digit guards and capitalization see dotted segments or only the whole string
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRules {
    /// Each dot-separated segment is Pascal-cased and digit-guarded on its own
    #[default]
    PerSegment,
    /// Only the first character of the whole name is considered
    Whole,
}

/// Case mapping used when capitalizing words
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UppercaseLocale {
    /// Culture-independent ASCII mapping, identical on every host
    #[default]
    Invariant,
}

impl UppercaseLocale {
    pub fn uppercase(&self, c: char) -> char {
        match self {
            UppercaseLocale::Invariant => c.to_ascii_uppercase(),
        }
    }
}

/// Behavior switches for [`PathIdentifierConverter`](super::PathIdentifierConverter)
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ConverterOptions {
    pub root_match: RootMatch,
    pub on_prefix_miss: PrefixMiss,
    pub segments: SegmentRules,
    pub uppercase_locale: UppercaseLocale,
}

impl ConverterOptions {
    /// Options reproducing the legacy generator output exactly
    pub fn reference() -> Self {
        ConverterOptions {
            root_match: RootMatch::Substring,
            on_prefix_miss: PrefixMiss::PassThrough,
            segments: SegmentRules::Whole,
            uppercase_locale: UppercaseLocale::Invariant,
        }
    }

    pub fn per_segment(&self) -> bool {
        self.segments == SegmentRules::PerSegment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ConverterOptions::default();
        assert_eq!(options.root_match, RootMatch::Prefix);
        assert_eq!(options.on_prefix_miss, PrefixMiss::PassThrough);
        assert_eq!(options.segments, SegmentRules::PerSegment);
        assert!(options.per_segment());
    }

    #[test]
    fn test_reference_options() {
        let options = ConverterOptions::reference();
        assert_eq!(options.root_match, RootMatch::Substring);
        assert_eq!(options.segments, SegmentRules::Whole);
        assert!(!options.per_segment());
    }

    #[test]
    fn test_invariant_uppercase() {
        let locale = UppercaseLocale::Invariant;
        assert_eq!(locale.uppercase('i'), 'I');
        assert_eq!(locale.uppercase('Z'), 'Z');
        // Non-ASCII letters are left alone
        assert_eq!(locale.uppercase('ä'), 'ä');
    }

    #[test]
    fn test_options_from_yaml() {
        let options: ConverterOptions =
            serde_yaml::from_str("root_match: substring\nsegments: whole\n").unwrap();
        assert_eq!(options.root_match, RootMatch::Substring);
        assert_eq!(options.on_prefix_miss, PrefixMiss::PassThrough);
        assert_eq!(options.segments, SegmentRules::Whole);

        let result = serde_yaml::from_str::<ConverterOptions>("root_match: anchored\n");
        assert!(result.is_err(), "Unknown variants should be rejected");
    }
}
