// Dependency extraction from manifest text
//
// Deliberately not a real TOML parser. Release manifests in the wild are
// messy, and the one section we care about reads fine line by line; a lenient
// scan keeps partial results where a strict parser would give up. See `scan`
// for the exact per-line rules and their known limitations.

pub mod extract;
pub mod scan;

pub use extract::extract_dependencies;
pub use scan::{classify_line, parse_version_value, LineClass, ScanState};
