use std::borrow::Cow;

use log::{debug, trace};

use crate::constants::{NAMESPACE_SEPARATOR, PATH_DELIMITER, ROOT_PATH};
use crate::errors::{Result, configuration_error, malformed_input_error, prefix_mismatch_error};

use super::generated::GeneratedName;
use super::identifier;
use super::options::{ConverterOptions, PrefixMiss, RootMatch};

/// Strategy for naming generated types after content paths
pub trait TypeNameGenerator {
    /// Full dotted type name (namespace included) for a content path
    fn compute_type_name(&self, full_path: &str) -> Result<String>;

    /// Turns an arbitrary string into a valid dotted identifier
    fn convert_to_identifier(&self, name: &str) -> Result<String>;
}

/// Generates type names and relative namespaces from content tree paths
///
/// The namespace root is stripped from every path and the remaining segments
/// become the namespace and the type name.
///
/// # Examples
/// ```
/// use pathid::naming::PathIdentifierConverter;
///
/// let converter = PathIdentifierConverter::new("/sitecore/templates").unwrap();
/// let name = converter
///     .compute_type_name("/sitecore/templates/Feature/Navigation/Link_Item")
///     .unwrap();
/// assert_eq!(name, "Feature.Navigation.LinkItem");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathIdentifierConverter {
    namespace_root: String,
    options: ConverterOptions,
}

impl PathIdentifierConverter {
    /// Creates a converter with default options
    ///
    /// # Errors
    /// Returns a configuration error if the root is `/`.
    pub fn new(namespace_root: impl Into<String>) -> Result<Self> {
        Self::with_options(namespace_root, ConverterOptions::default())
    }

    /// Creates a converter with explicit options
    ///
    /// # Errors
    /// Returns a configuration error if the root is `/`.
    pub fn with_options(namespace_root: impl Into<String>, options: ConverterOptions) -> Result<Self> {
        let namespace_root = namespace_root.into();
        if namespace_root == ROOT_PATH {
            return Err(configuration_error(
                &namespace_root,
                "namespace root cannot be /, please use a sub-path e.g. /sitecore/templates",
            ));
        }

        debug!("Namespace root '{namespace_root}' with options {options:?}");
        Ok(PathIdentifierConverter {
            namespace_root,
            options,
        })
    }

    pub fn namespace_root(&self) -> &str {
        &self.namespace_root
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Calculates the namespace and type name for a path relative to the namespace root
    ///
    /// Deeper paths are sanitized as `Namespace.TypeName`. A path directly under
    /// the root comes back unsanitized apart from the leading digit guard.
    ///
    /// # Errors
    /// * Malformed input if no segment is left once the root is removed
    /// * Prefix mismatch if the path is outside the root and misses are rejected
    pub fn compute_generated_name(&self, full_path: &str) -> Result<GeneratedName> {
        let relative = self.strip_root(full_path)?;
        let trimmed = relative.trim_matches(PATH_DELIMITER);
        if trimmed.is_empty() {
            return Err(malformed_input_error(
                full_path,
                "no path segments left after removing the namespace root",
            ));
        }

        let segments: Vec<String> = if self.options.per_segment() {
            trimmed.split(PATH_DELIMITER).map(guard_numeric_segment).collect()
        } else {
            // Delimiters are already dots here, so this yields a single segment
            trimmed
                .replace(PATH_DELIMITER, ".")
                .split(PATH_DELIMITER)
                .map(guard_numeric_segment)
                .collect()
        };
        let name = segments.join(".");

        let generated = match name.rsplit_once(NAMESPACE_SEPARATOR) {
            Some((namespace, type_name)) => {
                let namespace = self.convert_to_identifier(namespace)?;
                let full = self.convert_to_identifier(&format!("{namespace}.{type_name}"))?;
                GeneratedName::MultiSegment { full }
            }
            None => GeneratedName::SingleSegment(name),
        };

        trace!("Generated '{generated}' for '{full_path}'");
        Ok(generated)
    }

    /// Full dotted type name for a content path
    ///
    /// # Errors
    /// See [`PathIdentifierConverter::compute_generated_name`].
    pub fn compute_type_name(&self, full_path: &str) -> Result<String> {
        self.compute_generated_name(full_path)
            .map(GeneratedName::into_string)
    }

    /// Converts a string into a valid identifier using this converter's options
    ///
    /// # Errors
    /// Returns a malformed input error for an empty string.
    pub fn convert_to_identifier(&self, name: &str) -> Result<String> {
        identifier::convert_to_identifier(name, &self.options)
    }

    fn strip_root<'a>(&self, full_path: &'a str) -> Result<Cow<'a, str>> {
        if self.namespace_root.is_empty() {
            return Ok(Cow::Borrowed(full_path));
        }

        match self.options.root_match {
            RootMatch::Substring => Ok(Cow::Owned(full_path.replace(&self.namespace_root, ""))),
            RootMatch::Prefix => match strip_path_prefix(full_path, &self.namespace_root) {
                Some(relative) => Ok(Cow::Borrowed(relative)),
                None => match self.options.on_prefix_miss {
                    PrefixMiss::PassThrough => {
                        debug!(
                            "Path '{full_path}' is outside '{}', converting it whole",
                            self.namespace_root
                        );
                        Ok(Cow::Borrowed(full_path))
                    }
                    PrefixMiss::Reject => {
                        Err(prefix_mismatch_error(full_path, &self.namespace_root))
                    }
                },
            },
        }
    }
}

impl TypeNameGenerator for PathIdentifierConverter {
    fn compute_type_name(&self, full_path: &str) -> Result<String> {
        PathIdentifierConverter::compute_type_name(self, full_path)
    }

    fn convert_to_identifier(&self, name: &str) -> Result<String> {
        PathIdentifierConverter::convert_to_identifier(self, name)
    }
}

/// Strips `root` when its segments are the leading segments of `path`
///
/// Leading and trailing delimiters are ignored on both sides, so `/a/b`,
/// `a/b` and `/a/b/` all name the same root.
fn strip_path_prefix<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root = root.trim_matches(PATH_DELIMITER);
    let path = path.trim_matches(PATH_DELIMITER);
    if root.is_empty() {
        return Some(path);
    }

    let relative = path.strip_prefix(root)?;
    if relative.is_empty() || relative.starts_with(PATH_DELIMITER) {
        Some(relative)
    } else {
        None
    }
}

/// Identifiers may not start with a digit
///
/// Only ASCII digits count here, unlike the `\p{Nd}` guard in the sanitizer.
fn guard_numeric_segment(segment: &str) -> String {
    match segment.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{segment}"),
        _ => segment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::naming::options::SegmentRules;

    const ROOT: &str = "/sitecore/templates";

    fn reference_converter(root: &str) -> PathIdentifierConverter {
        PathIdentifierConverter::with_options(root, ConverterOptions::reference()).unwrap()
    }

    #[test]
    fn test_bare_separator_root_is_rejected() {
        let result = PathIdentifierConverter::new("/");
        assert!(matches!(result, Err(Error::Configuration { .. })));

        let result = PathIdentifierConverter::with_options("/", ConverterOptions::reference());
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_other_roots_are_accepted() {
        for root in ["", "//", "/sitecore", "sitecore/templates", ROOT] {
            let converter = PathIdentifierConverter::new(root).unwrap();
            assert_eq!(converter.namespace_root(), root);
        }
    }

    #[test]
    fn test_nested_path_is_pascal_cased() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        assert_eq!(
            converter.compute_type_name("/sitecore/templates/Foo/bar_baz").unwrap(),
            "Foo.BarBaz"
        );
    }

    #[test]
    fn test_reference_does_not_capitalize_after_dot() {
        let converter = reference_converter(ROOT);
        assert_eq!(
            converter.compute_type_name("/sitecore/templates/Foo/bar_baz").unwrap(),
            "Foo.barBaz"
        );
    }

    #[test]
    fn test_namespace_is_sanitized() {
        let converter = PathIdentifierConverter::new("/r").unwrap();
        assert_eq!(converter.compute_type_name("/r/my_module/item").unwrap(), "MyModule.Item");

        let converter = reference_converter("/r");
        assert_eq!(converter.compute_type_name("/r/my_module/item").unwrap(), "MyModule.item");
    }

    #[test]
    fn test_single_segment_skips_sanitization() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        let name = converter
            .compute_generated_name("/sitecore/templates/lord_flowers")
            .unwrap();
        assert_eq!(name, GeneratedName::SingleSegment("lord_flowers".to_string()));
    }

    #[test]
    fn test_single_digit_segment_gets_underscore() {
        for converter in [
            PathIdentifierConverter::new("/a").unwrap(),
            reference_converter("/a"),
        ] {
            let name = converter.compute_type_name("/a/1abc").unwrap();
            assert_eq!(name, "_1abc");
        }
    }

    #[test]
    fn test_digit_type_name() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        assert_eq!(
            converter.compute_type_name("/sitecore/templates/Foo/1bar").unwrap(),
            "Foo._1bar"
        );

        // Only the first character of the whole name is guarded here
        let converter = reference_converter(ROOT);
        assert_eq!(
            converter.compute_type_name("/sitecore/templates/Foo/1bar").unwrap(),
            "Foo.1bar"
        );
    }

    #[test]
    fn test_multi_segment_parts() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        let name = converter
            .compute_generated_name("/sitecore/templates/Feature/Navigation/Link_Item")
            .unwrap();
        assert!(name.is_multi_segment());
        assert_eq!(name.namespace(), Some("Feature.Navigation"));
        assert_eq!(name.type_name(), "LinkItem");
    }

    #[test]
    fn test_substring_root_removes_every_occurrence() {
        let converter = reference_converter("/a");
        assert_eq!(converter.compute_type_name("/a/b/a/c").unwrap(), "B.c");
    }

    #[test]
    fn test_prefix_root_only_strips_the_start() {
        let converter = PathIdentifierConverter::new("/a").unwrap();
        assert_eq!(converter.compute_type_name("/a/b/a/c").unwrap(), "B.A.C");
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        assert_eq!(
            converter.compute_type_name("/sitecore/templatesX/Foo").unwrap(),
            "Sitecore.TemplatesX.Foo"
        );

        let converter = PathIdentifierConverter::new("/sitecore/templates/").unwrap();
        assert_eq!(
            converter.compute_type_name("/sitecore/templates/Foo/Bar").unwrap(),
            "Foo.Bar"
        );
    }

    #[test]
    fn test_root_spelling_does_not_matter() {
        for root in [ROOT, "/sitecore/templates/", "sitecore/templates", "sitecore/templates/"] {
            let converter = PathIdentifierConverter::new(root).unwrap();
            assert_eq!(
                converter.compute_type_name("/sitecore/templates/Foo/Bar").unwrap(),
                "Foo.Bar",
                "root '{root}'"
            );

            for path in [ROOT, "/sitecore/templates/"] {
                let result = converter.compute_type_name(path);
                assert!(
                    matches!(result, Err(Error::MalformedInput { .. })),
                    "Expected malformed input for '{path}' under root '{root}', got {result:?}"
                );
            }

            assert_eq!(
                converter.compute_type_name("/sitecore/templatesX/Foo").unwrap(),
                "Sitecore.TemplatesX.Foo"
            );
        }
    }

    #[test]
    fn test_separator_only_root_strips_nothing() {
        let converter = PathIdentifierConverter::new("//").unwrap();
        assert_eq!(converter.compute_type_name("/foo/bar").unwrap(), "Foo.Bar");
    }

    #[test]
    fn test_prefix_miss_can_be_rejected() {
        let options = ConverterOptions {
            on_prefix_miss: PrefixMiss::Reject,
            ..ConverterOptions::default()
        };
        let converter = PathIdentifierConverter::with_options(ROOT, options).unwrap();

        let result = converter.compute_type_name("/other/Foo");
        assert!(matches!(result, Err(Error::PrefixMismatch { .. })));

        assert_eq!(
            converter.compute_type_name("/sitecore/templates/Foo/Bar").unwrap(),
            "Foo.Bar"
        );
    }

    #[test]
    fn test_empty_root_strips_nothing() {
        let converter = PathIdentifierConverter::new("").unwrap();
        assert_eq!(converter.compute_type_name("/foo/bar").unwrap(), "Foo.Bar");
    }

    #[test]
    fn test_path_equal_to_root_is_malformed() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        for path in [ROOT, "/sitecore/templates/", "", "///"] {
            let result = converter.compute_type_name(path);
            assert!(
                matches!(result, Err(Error::MalformedInput { .. })),
                "Expected malformed input for '{path}', got {result:?}"
            );
        }
    }

    #[test]
    fn test_empty_namespace_is_malformed() {
        let converter = PathIdentifierConverter::new("/r").unwrap();
        let result = converter.compute_type_name("/r/.x");
        assert!(matches!(result, Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn test_empty_inner_segment_passes_through() {
        let options = ConverterOptions {
            segments: SegmentRules::PerSegment,
            ..ConverterOptions::default()
        };
        let converter = PathIdentifierConverter::with_options("/r", options).unwrap();
        assert_eq!(converter.compute_type_name("/r/Foo//Bar").unwrap(), "Foo..Bar");
    }

    #[test]
    fn test_is_deterministic() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        let path = "/sitecore/templates/Project/Site/Page_Types/Article Page";
        let first = converter.compute_type_name(path).unwrap();
        let second = converter.compute_type_name(path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "Project.Site.PageTypes.ArticlePage");
    }

    #[test]
    fn test_trait_object_delegates() {
        let converter = PathIdentifierConverter::new(ROOT).unwrap();
        let generator: &dyn TypeNameGenerator = &converter;
        assert_eq!(
            generator.compute_type_name("/sitecore/templates/Foo/bar_baz").unwrap(),
            "Foo.BarBaz"
        );
        assert_eq!(generator.convert_to_identifier("lord_flowers").unwrap(), "LordFlowers");
    }

    #[test]
    fn test_converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathIdentifierConverter>();
    }
}
