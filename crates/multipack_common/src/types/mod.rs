pub mod assets_map;
pub mod compilation;
pub mod compiled_asset;
pub mod output_options;
pub mod raw_idx;
pub mod variant_record;
