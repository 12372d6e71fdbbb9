use std::path::Path;

use multipack_common::{AssetsMap, Compilation, NormalizedMultiOutputOptions, VariantRecord};
use multipack_fs::FileSystem;
use tracing::{debug, warn};

use crate::errors;

/// Serializes the value → chunk → asset-path map at build completion.
///
/// Script entries come from the variant records; non-script siblings are
/// attached from the owning chunk's file list. A write failure is reported as
/// a warning and never invalidates the already-emitted bundle variants.
pub fn emit_manifest<F: FileSystem>(
  compilation: &mut Compilation,
  records: &[VariantRecord],
  options: &NormalizedMultiOutputOptions,
  fs: &F,
) {
  let Some(manifest_options) = &options.assets else {
    return;
  };

  let public_path = compilation.output_options.public_path.clone();
  let mut assets_map = AssetsMap::default();
  for record in records {
    let Some(chunk_name) = &record.chunk_name else {
      continue;
    };
    let script_path = format!("{public_path}{}", record.filename);
    assets_map.insert(&record.value, chunk_name, "js", script_path);

    for file in &compilation.chunks[record.chunk_idx].files {
      let Some((_, extension)) = file.rsplit_once('.') else {
        continue;
      };
      if extension == "js" {
        continue;
      }
      assets_map.insert(&record.value, chunk_name, extension, format!("{public_path}{file}"));
    }
  }

  if let Err(source) = fs.create_dir_all(&manifest_options.path) {
    report_write_failure(compilation, &manifest_options.path, &source);
    return;
  }

  if manifest_options.filename.contains("[value]") {
    // One manifest per value, each holding just that value's sub-object.
    for (value, value_map) in &assets_map.0 {
      let file_path =
        manifest_options.path.join(manifest_options.filename.replace("[value]", value));
      let content = if manifest_options.pretty_print {
        serde_json::to_string_pretty(value_map)
      } else {
        serde_json::to_string(value_map)
      };
      write_manifest_file(compilation, fs, &file_path, content, options.debug);
    }
  } else {
    let file_path = manifest_options.path.join(&manifest_options.filename);
    let content = if manifest_options.pretty_print {
      serde_json::to_string_pretty(&assets_map)
    } else {
      serde_json::to_string(&assets_map)
    };
    write_manifest_file(compilation, fs, &file_path, content, options.debug);
  }
}

fn write_manifest_file<F: FileSystem>(
  compilation: &mut Compilation,
  fs: &F,
  file_path: &Path,
  content: serde_json::Result<String>,
  debug: bool,
) {
  let result = content
    .map_err(anyhow::Error::from)
    .and_then(|content| fs.write(file_path, content.as_bytes()));
  match result {
    Ok(()) => {
      if debug {
        debug!("asset file {} written", file_path.display());
      }
    }
    Err(source) => report_write_failure(compilation, file_path, &source),
  }
}

fn report_write_failure(compilation: &mut Compilation, path: &Path, source: &anyhow::Error) {
  warn!("failed to write asset manifest {}: {source}", path.display());
  compilation.push_warning(errors::manifest_write_failure(path, source));
}
