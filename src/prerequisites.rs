//! Prerequisite tag parsing
//!
//! Notes declare prerequisites through their tag string: a tag of the form
//! `pre:<name>` means every note tagged `<name>` must be studied first.
//! Anything without the prefix is an ordinary tag and is ignored here.

/// Tag prefix marking a prerequisite reference.
pub const PREREQ_PREFIX: &str = "pre:";

/// Delimiter between tags in a stored tag string.
const TAG_DELIM: char = ' ';

/// Attempt to parse a prerequisite from a single raw tag.
///
/// Returns the referenced tag name if `tag` is a prerequisite tag,
/// `None` otherwise.
pub fn parse_prerequisite_tag(tag: &str) -> Option<&str> {
    tag.strip_prefix(PREREQ_PREFIX)
}

/// Extract all prerequisite references from a tag string, preserving the
/// order they appear in.
///
/// Leading and trailing whitespace is ignored; a string with no
/// prerequisite tags yields an empty list.
pub fn extract_prerequisite_tags(tags: &str) -> Vec<&str> {
    tags.trim()
        .split(TAG_DELIM)
        .filter_map(parse_prerequisite_tag)
        .collect()
}
