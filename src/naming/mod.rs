//! Naming module
//!
//! This module contains the conversion from content tree paths to namespaced
//! type identifiers.

mod converter;
mod generated;
mod identifier;
mod options;

pub use converter::{PathIdentifierConverter, TypeNameGenerator};
pub use generated::GeneratedName;
pub use identifier::convert_to_identifier;
pub use options::{ConverterOptions, PrefixMiss, RootMatch, SegmentRules, UppercaseLocale};
