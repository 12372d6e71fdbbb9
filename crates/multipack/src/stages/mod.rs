mod expand;
mod manifest;
mod reconcile;
mod scan;

pub use self::{
  expand::expand_chunks,
  manifest::emit_manifest,
  reconcile::reconcile_filenames,
  scan::{ScannedChunk, scan_chunks},
};
