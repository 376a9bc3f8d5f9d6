// Dependency table extraction - a single forward scan over manifest text

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::scan::{classify_line, parse_version_value, LineClass, ScanState};

/// Scan manifest text and collect `name -> version` for the direct
/// dependencies section.
///
/// The scan is a two-state walk: lines before `[dependencies]` are ignored,
/// lines inside it are parsed as entries, and the first header of a
/// different section ends the scan. A line that cannot be interpreted is
/// dropped without failing the whole scan; partial results beat no results
/// for manifests in the wild. When a name repeats, the later entry wins.
///
/// `filter` keeps only names containing it, case-insensitively; an empty
/// filter keeps everything. Filtering never looks at the version.
///
/// Pure function of its inputs: no I/O, no hidden state, idempotent.
pub fn extract_dependencies(manifest: &str, filter: &str) -> HashMap<String, String> {
    let filter = filter.to_lowercase();
    let mut deps = HashMap::new();
    let mut state = ScanState::OutsideSection;

    for line in manifest.lines() {
        match (state, classify_line(line)) {
            (ScanState::OutsideSection, LineClass::SectionHeader) => {
                state = ScanState::InsideSection;
            }
            (ScanState::InsideSection, LineClass::OtherSection) => {
                trace!("Dependencies section closed, stopping scan");
                break;
            }
            (ScanState::InsideSection, LineClass::Entry { name, value }) => {
                if !filter.is_empty() && !name.to_lowercase().contains(&filter) {
                    continue;
                }
                match parse_version_value(value) {
                    Some(version) => {
                        deps.insert(name.to_string(), version);
                    }
                    None => trace!("Skipping unparseable entry for {:?}", name),
                }
            }
            // A repeated [dependencies] header keeps the section open; blank
            // lines and noise never change state.
            _ => {}
        }
    }

    debug!("Extracted {} dependencies", deps.len());
    deps
}
