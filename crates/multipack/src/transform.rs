use arcstr::ArcStr;
use futures::{StreamExt, stream};
use multipack_common::marker::{self, VALUE_MARKER};
use multipack_fs::FileSystem;
use rustc_hash::FxHashMap;

use crate::resolve::ResourceResolver;

/// In-flight resource reads per transform.
const RESOLUTION_CONCURRENCY: usize = 10;

/// Rewrites one compiled asset's text into the finished variant for `value`:
/// every marker is replaced by its resolved resource content, every value
/// marker by the value identifier. Pure with respect to its input; the result
/// is a new immutable string.
///
/// Replacement is keyed by the exact token, never by position, so unordered
/// resolution completion cannot affect the output. A failed resolution fails
/// the whole transform.
pub async fn transform<F: FileSystem>(
  source: &str,
  value: &str,
  resolver: &ResourceResolver<F>,
) -> anyhow::Result<ArcStr> {
  if !marker::contains_marker(source) && !source.contains(VALUE_MARKER) {
    return Ok(ArcStr::from(source));
  }

  // Owned (token, path) pairs, so the fan-out below borrows nothing from the
  // source text and the enclosing future stays boxable.
  let tokens: Vec<(String, String)> = marker::find_markers(source)
    .into_iter()
    .filter_map(|token| {
      marker::extract_path(token).map(|path| (token.to_string(), path.to_string()))
    })
    .collect();

  let resolved = stream::iter(tokens.iter().cloned().map(|(token, path)| async move {
    let result = resolver.resolve(&path, value);
    (token, result)
  }))
  .buffer_unordered(RESOLUTION_CONCURRENCY)
  .collect::<Vec<_>>()
  .await;

  let mut replacements: FxHashMap<String, String> = FxHashMap::default();
  for (token, result) in resolved {
    replacements.insert(token, result?);
  }

  let mut output = source.to_string();
  for (token, _) in &tokens {
    let Some(content) = replacements.get(token) else { continue };
    // The loader embeds markers inside string literals; a quoted occurrence
    // gives up its quotes, a bare occurrence is substituted in place.
    let quoted = format!("\"{token}\"");
    output = output.replace(&quoted, content);
    output = output.replace(token.as_str(), content);
  }

  output = output.replace(VALUE_MARKER, value);
  Ok(ArcStr::from(output))
}
