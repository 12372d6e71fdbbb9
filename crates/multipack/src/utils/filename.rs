use std::path::Path;

/// Renders the variant filename template for one (file, value) pair. An
/// absent host hash leaves `[contenthash]` empty rather than failing.
pub fn render_variant_filename(
  template: &str,
  name: &str,
  value: &str,
  hash: Option<&str>,
) -> String {
  template
    .replace("[name]", name)
    .replace("[contenthash]", hash.unwrap_or(""))
    .replace("[value]", value)
}

/// `[name]` fallback for files owned by an unnamed chunk.
pub fn file_stem(filename: &str) -> &str {
  Path::new(filename).file_stem().and_then(|stem| stem.to_str()).unwrap_or(filename)
}
