use arcstr::ArcStr;

/// One entry in the host's asset collection. Cloning is cheap; the text is
/// shared and immutable.
#[derive(Debug, Clone)]
pub struct CompiledAsset {
  pub source: ArcStr,
}

impl CompiledAsset {
  pub fn new(source: impl Into<ArcStr>) -> Self {
    Self { source: source.into() }
  }

  pub fn text(&self) -> &str {
    &self.source
  }
}
