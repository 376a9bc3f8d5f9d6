// Line-level rules for the dependencies section
//
// Classification is pure and state-free; `extract` owns the two-state walk
// over the whole manifest.

/// Where the scanner currently is relative to the `[dependencies]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    OutsideSection,
    InsideSection,
}

/// What a single raw line means to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Blank line or `#` comment.
    Blank,
    /// The `[dependencies]` header, matched exactly after trimming.
    SectionHeader,
    /// Any other `[...]` header. Inside the section this ends the scan:
    /// dependencies are assumed contiguous.
    OtherSection,
    /// A candidate `name = value` entry, split on the first `=`.
    Entry { name: &'a str, value: &'a str },
    /// Anything else; carries no information.
    Noise,
}

/// Classify one raw line.
///
/// Note the header match is exact: `[dependencies] # note` is not the
/// header, it is just another section boundary.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return LineClass::Blank;
    }
    if trimmed == "[dependencies]" {
        return LineClass::SectionHeader;
    }
    if trimmed.starts_with('[') {
        return LineClass::OtherSection;
    }
    match trimmed.split_once('=') {
        Some((name, value)) => LineClass::Entry {
            name: name.trim(),
            value: value.trim(),
        },
        None => LineClass::Noise,
    }
}

/// Pull a version string out of an entry value, if it has one.
///
/// Two shapes are understood: a quoted scalar (`"1.2"`) and a single-level
/// inline table carrying a `version` sub-field. Everything else (an array,
/// a bare token) yields `None` and the entry is dropped.
///
/// Quote stripping takes any run of `'` and `"` off both ends without
/// checking that the opening and closing characters pair up; a value like
/// `'1.0"` still comes out as `1.0`. Inline tables are assumed one level
/// deep with comma-separated sub-fields; nested braces or commas inside
/// quoted values will confuse the split. Both are deliberate, documented
/// limits of the lenient scan rather than bugs to fix here.
pub fn parse_version_value(value: &str) -> Option<String> {
    if value.starts_with('\'') || value.starts_with('"') {
        return Some(strip_quotes(value).to_string());
    }
    if value.starts_with('{') {
        return inline_table_version(value);
    }
    None
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '\'' || c == '"')
}

/// Version out of a `{ ... }` inline table.
///
/// The first comma-separated sub-field mentioning `version` wins; if that
/// sub-field has no `=` to split on, the whole entry is unusable.
fn inline_table_version(value: &str) -> Option<String> {
    if !value.contains("version") {
        return None;
    }

    let inner = value.strip_prefix('{').unwrap_or(value);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    let field = inner.split(',').find(|field| field.contains("version"))?;
    let (_, raw_version) = field.split_once('=')?;
    Some(strip_quotes(raw_version.trim()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank_and_comment_lines() {
        assert_eq!(classify_line(""), LineClass::Blank);
        assert_eq!(classify_line("   "), LineClass::Blank);
        assert_eq!(classify_line("# a comment"), LineClass::Blank);
        assert_eq!(classify_line("  # indented comment"), LineClass::Blank);
    }

    #[test]
    fn test_classify_section_headers() {
        assert_eq!(classify_line("[dependencies]"), LineClass::SectionHeader);
        assert_eq!(classify_line("  [dependencies]  "), LineClass::SectionHeader);
        assert_eq!(classify_line("[dev-dependencies]"), LineClass::OtherSection);
        assert_eq!(classify_line("[package]"), LineClass::OtherSection);
        // Exact match only: a trailing comment demotes the header.
        assert_eq!(
            classify_line("[dependencies] # direct deps"),
            LineClass::OtherSection
        );
    }

    #[test]
    fn test_classify_entry_splits_on_first_equals() {
        assert_eq!(
            classify_line("serde = \"1.0\""),
            LineClass::Entry {
                name: "serde",
                value: "\"1.0\""
            }
        );
        assert_eq!(
            classify_line("pin = \"=0.4.5\""),
            LineClass::Entry {
                name: "pin",
                value: "\"=0.4.5\""
            }
        );
    }

    #[test]
    fn test_classify_line_without_equals_is_noise() {
        assert_eq!(classify_line("serde"), LineClass::Noise);
        assert_eq!(classify_line("features 1.0"), LineClass::Noise);
    }

    #[test]
    fn test_quoted_scalar_values() {
        assert_eq!(parse_version_value("\"1.2.3\""), Some("1.2.3".to_string()));
        assert_eq!(parse_version_value("'0.9'"), Some("0.9".to_string()));
    }

    #[test]
    fn test_mismatched_quotes_are_stripped_anyway() {
        assert_eq!(parse_version_value("'1.0\""), Some("1.0".to_string()));
        assert_eq!(parse_version_value("\"2.1'"), Some("2.1".to_string()));
    }

    #[test]
    fn test_inline_table_version() {
        assert_eq!(
            parse_version_value("{ version = \"0.5\", features = [\"x\"] }"),
            Some("0.5".to_string())
        );
        assert_eq!(
            parse_version_value("{ path = \"../local\", version = '1.1' }"),
            Some("1.1".to_string())
        );
    }

    #[test]
    fn test_inline_table_first_version_field_wins() {
        assert_eq!(
            parse_version_value("{ version = \"1.0\", version = \"2.0\" }"),
            Some("1.0".to_string())
        );
    }

    #[test]
    fn test_inline_table_without_version_is_dropped() {
        assert_eq!(parse_version_value("{ path = \"../local\" }"), None);
        assert_eq!(parse_version_value("{ git = \"https://example\" }"), None);
    }

    #[test]
    fn test_inline_table_with_unsplittable_version_field_is_dropped() {
        // Mentions `version` but the matching sub-field has no `=`.
        assert_eq!(parse_version_value("{ version }"), None);
    }

    #[test]
    fn test_other_value_shapes_are_dropped() {
        assert_eq!(parse_version_value("[1, 2]"), None);
        assert_eq!(parse_version_value("true"), None);
        assert_eq!(parse_version_value("1.0"), None);
    }
}
