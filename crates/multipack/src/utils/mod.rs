pub mod filename;
pub mod normalize_options;
