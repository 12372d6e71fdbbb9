mod chunk_table;

use arcstr::ArcStr;

pub use chunk_table::ChunkTable;

/// A host-defined grouping of output files produced from one logical entry
/// point. Unnamed chunks still expand; they are just absent from the manifest.
#[derive(Debug, Default)]
pub struct Chunk {
  pub name: Option<ArcStr>,
  pub files: Vec<ArcStr>,
}

impl Chunk {
  pub fn new(name: Option<ArcStr>, files: Vec<ArcStr>) -> Self {
    Self { name, files }
  }
}
