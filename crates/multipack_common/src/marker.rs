use std::sync::LazyLock;

use memchr::memmem;
use multipack_utils::indexmap::FxIndexSet;
use regex::Regex;

/// Sentinel fencing a canonical resource path inside compiled output. Chosen
/// to be extremely unlikely to collide with program text.
pub const RESOURCE_FENCE: &str = "MULTIPACK_RESOURCE";

/// Every occurrence in a variant is replaced by the value identifier itself.
pub const VALUE_MARKER: &str = "__MULTIPACK_VALUE__";

/// Replaced during reconciliation with the JSON map of variant-bearing chunk ids.
pub const CHUNK_MAP_MARKER: &str = "{__MULTIPACK_CHUNK_MAP__:0}";

static MARKER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("{RESOURCE_FENCE}-(.*?)-{RESOURCE_FENCE}")).unwrap());

/// The fence-wrapped encoding of `resource_path`, safe to embed inside a
/// string literal or as a bare source line.
pub fn resource_marker(resource_path: &str) -> String {
  format!("{RESOURCE_FENCE}-{resource_path}-{RESOURCE_FENCE}")
}

/// The canonical resource path of `token`, or `None` if the input is not
/// exactly one fence-wrapped marker.
pub fn extract_path(token: &str) -> Option<&str> {
  let captures = MARKER_RE.captures(token)?;
  let matched = captures.get(0)?;
  if matched.start() == 0 && matched.end() == token.len() {
    captures.get(1).map(|path| path.as_str())
  } else {
    None
  }
}

/// Cheap pre-check to skip files with no markers at all.
pub fn contains_marker(text: &str) -> bool {
  memmem::find(text.as_bytes(), RESOURCE_FENCE.as_bytes()).is_some()
}

/// The ordered set of distinct marker tokens present in `text`.
pub fn find_markers(text: &str) -> FxIndexSet<&str> {
  MARKER_RE.find_iter(text).map(|matched| matched.as_str()).collect()
}
