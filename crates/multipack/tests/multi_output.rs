use std::sync::Arc;

use arcstr::ArcStr;
use multipack::{
  AssetStore, AssetsManifestOptions, Chunk, ChunkTable, Compilation, CompiledAsset,
  MultiOutputOptions, MultiOutputPlugin, OutputOptions, PluginDriver,
};
use multipack_common::marker::{RESOURCE_FENCE, resource_marker};
use multipack_fs::{FileSystem, MemoryFileSystem};

fn chunk(name: Option<&str>, files: &[&str]) -> Chunk {
  Chunk::new(name.map(ArcStr::from), files.iter().map(|file| ArcStr::from(*file)).collect())
}

fn compilation(chunks: Vec<Chunk>, assets: &[(&str, String)], hash: Option<&str>) -> Compilation {
  let store = AssetStore::default();
  for (filename, source) in assets {
    store.set(ArcStr::from(*filename), CompiledAsset::new(source.as_str()));
  }
  Compilation::new(
    ChunkTable::new(chunks.into()),
    store,
    OutputOptions { public_path: "/".to_string() },
    hash.map(ArcStr::from),
  )
}

fn options(values: &[&str]) -> MultiOutputOptions {
  MultiOutputOptions {
    values: Some(values.iter().map(|value| (*value).to_string()).collect()),
    ..Default::default()
  }
}

async fn run_build(plugin: MultiOutputPlugin<MemoryFileSystem>, compilation: &mut Compilation) {
  let driver = PluginDriver::new(vec![Arc::new(plugin)]);
  driver.compilation_start(compilation).await;
  driver.optimize_assets(compilation).await;
  driver.finalize_assets(compilation).await;
  driver.after_emit(compilation).await;
}

fn asset_text(compilation: &Compilation, filename: &str) -> String {
  compilation
    .assets
    .get(filename)
    .unwrap_or_else(|| panic!("missing asset {filename}"))
    .text()
    .to_string()
}

#[tokio::test]
async fn falls_back_to_canonical_content_for_every_value() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[("res/greeting.i18n", "\"Hello\"")]));
  let source = format!("var greeting = \"{}\";", resource_marker("res/greeting.i18n"));
  let mut compilation =
    compilation(vec![chunk(None, &["bundle.js"])], &[("bundle.js", source)], None);

  run_build(MultiOutputPlugin::new(options(&["fr", "en"]), fs), &mut compilation).await;

  assert!(compilation.errors.is_empty(), "{:?}", compilation.errors);
  assert_eq!(compilation.assets.len(), 3);
  for value in ["fr", "en"] {
    let text = asset_text(&compilation, &format!("bundle-{value}.js"));
    assert_eq!(text, "var greeting = \"Hello\";");
    assert!(!text.contains(RESOURCE_FENCE));
  }
}

#[tokio::test]
async fn value_sibling_overrides_only_its_own_variant() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[
    ("res/greeting.i18n", "\"Hello\""),
    ("res/fr.i18n", "\"Bonjour\""),
  ]));
  let source = format!("var greeting = \"{}\";", resource_marker("res/greeting.i18n"));
  let mut compilation =
    compilation(vec![chunk(None, &["bundle.js"])], &[("bundle.js", source)], None);

  run_build(MultiOutputPlugin::new(options(&["fr", "en"]), fs), &mut compilation).await;

  assert!(compilation.errors.is_empty());
  assert_eq!(asset_text(&compilation, "bundle-fr.js"), "var greeting = \"Bonjour\";");
  assert_eq!(asset_text(&compilation, "bundle-en.js"), "var greeting = \"Hello\";");
}

#[tokio::test]
async fn empty_values_is_a_reported_config_error_and_a_no_op() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[("res/greeting.i18n", "\"Hello\"")]));
  let source = format!("var greeting = \"{}\";", resource_marker("res/greeting.i18n"));
  let mut compilation =
    compilation(vec![chunk(None, &["bundle.js"])], &[("bundle.js", source)], None);

  run_build(MultiOutputPlugin::new(options(&[]), fs), &mut compilation).await;

  assert_eq!(compilation.errors.len(), 1);
  assert!(compilation.errors[0].to_string().contains("values"));
  assert_eq!(compilation.assets.len(), 1);
}

#[tokio::test]
async fn missing_canonical_fails_that_file_but_not_unrelated_files() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[("res/ok.i18n", "\"Fine\"")]));
  let broken = format!("var a = \"{}\";", resource_marker("res/gone.i18n"));
  let healthy = format!("var b = \"{}\";", resource_marker("res/ok.i18n"));
  let mut compilation = compilation(
    vec![chunk(None, &["broken.js", "healthy.js"])],
    &[("broken.js", broken), ("healthy.js", healthy)],
    None,
  );

  let plugin = MultiOutputPlugin::new(
    MultiOutputOptions {
      values: Some(vec!["fr".to_string(), "en".to_string()]),
      filename: Some("[name]-[value].js".to_string()),
      ..Default::default()
    },
    fs,
  );
  run_build(plugin, &mut compilation).await;

  // One error per (file, value) pair of the broken file, naming path and value.
  assert_eq!(compilation.errors.len(), 2);
  for (error, value) in compilation.errors.iter().zip(["fr", "en"]) {
    let message = error.to_string();
    assert!(message.contains("res/gone.i18n"));
    assert!(message.contains(value));
  }
  assert!(compilation.assets.contains_key("healthy-fr.js"));
  assert!(compilation.assets.contains_key("healthy-en.js"));
  assert!(!compilation.assets.contains_key("broken-fr.js"));
  assert!(!compilation.assets.contains_key("broken-en.js"));
}

#[tokio::test]
async fn substitutes_value_and_chunk_map_markers() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[("res/greeting.i18n", "\"Hello\"")]));
  let source = format!(
    "var value = \"__MULTIPACK_VALUE__\"; var map = {{__MULTIPACK_CHUNK_MAP__:0}}; var g = \"{}\";",
    resource_marker("res/greeting.i18n"),
  );
  let mut compilation =
    compilation(vec![chunk(None, &["bundle.js"])], &[("bundle.js", source)], None);

  run_build(MultiOutputPlugin::new(options(&["fr"]), fs), &mut compilation).await;

  let text = asset_text(&compilation, "bundle-fr.js");
  assert!(text.contains("var value = \"fr\";"));
  assert!(text.contains("var map = {\"0\":true};"));
}

#[tokio::test]
async fn reconciles_content_hash_tokens_per_variant() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[
    ("res/greeting.i18n", "\"Hello\""),
    ("res/fr.i18n", "\"Bonjour\""),
  ]));
  let source = format!("var greeting = \"{}\";", resource_marker("res/greeting.i18n"));
  let mut compilation = compilation(
    vec![chunk(Some("app"), &["app.js"])],
    &[("app.js", source)],
    Some("aaaaaaaa"),
  );

  let plugin = MultiOutputPlugin::new(
    MultiOutputOptions {
      values: Some(vec!["fr".to_string(), "en".to_string()]),
      filename: Some("[name]-[contenthash]-[value].js".to_string()),
      ..Default::default()
    },
    fs,
  );
  run_build(plugin, &mut compilation).await;

  assert!(compilation.errors.is_empty(), "{:?}", compilation.errors);
  // The host hash was computed pre-substitution, so each variant was renamed
  // to its own 8-character content hash.
  assert!(!compilation.assets.contains_key("app-aaaaaaaa-fr.js"));
  assert!(!compilation.assets.contains_key("app-aaaaaaaa-en.js"));
  let keys = compilation.assets.keys();
  let fr_key = keys.iter().find(|key| key.ends_with("-fr.js")).expect("fr variant");
  let en_key = keys.iter().find(|key| key.ends_with("-en.js")).expect("en variant");
  assert_ne!(fr_key, en_key);
  assert!(asset_text(&compilation, fr_key).contains("Bonjour"));
  assert!(asset_text(&compilation, en_key).contains("Hello"));
}

#[tokio::test]
async fn writes_a_single_manifest_with_sibling_assets() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[("res/greeting.i18n", "\"Hello\"")]));
  let source = format!("var greeting = \"{}\";", resource_marker("res/greeting.i18n"));
  let mut compilation = compilation(
    vec![chunk(Some("app"), &["app.js", "app.css"])],
    &[("app.js", source), ("app.css", ".a {}".to_string())],
    None,
  );

  let plugin = MultiOutputPlugin::new(
    MultiOutputOptions {
      values: Some(vec!["fr".to_string(), "en".to_string()]),
      assets: Some(AssetsManifestOptions {
        path: Some("out".into()),
        ..Default::default()
      }),
      ..Default::default()
    },
    Arc::clone(&fs),
  );
  run_build(plugin, &mut compilation).await;

  let manifest = fs.read_to_string(std::path::Path::new("out/assets.json")).unwrap();
  let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
  for value in ["fr", "en"] {
    assert_eq!(manifest[value]["app"]["js"], format!("/bundle-{value}.js"));
    assert_eq!(manifest[value]["app"]["css"], "/app.css");
    // Manifest completeness: the js entry points at an emitted asset.
    assert!(compilation.assets.contains_key(&format!("bundle-{value}.js")));
  }
}

#[tokio::test]
async fn writes_one_manifest_per_value_when_templated() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[("res/greeting.i18n", "\"Hello\"")]));
  let source = format!("var greeting = \"{}\";", resource_marker("res/greeting.i18n"));
  let mut compilation =
    compilation(vec![chunk(Some("app"), &["app.js"])], &[("app.js", source)], None);

  let plugin = MultiOutputPlugin::new(
    MultiOutputOptions {
      values: Some(vec!["fr".to_string(), "en".to_string()]),
      assets: Some(AssetsManifestOptions {
        filename: Some("assets-[value].json".to_string()),
        path: Some("out".into()),
        pretty_print: Some(true),
        ..Default::default()
      }),
      ..Default::default()
    },
    Arc::clone(&fs),
  );
  run_build(plugin, &mut compilation).await;

  for value in ["fr", "en"] {
    let path = format!("out/assets-{value}.json");
    let manifest = fs.read_to_string(std::path::Path::new(&path)).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    // Each file holds just that value's sub-object.
    assert_eq!(manifest["app"]["js"], format!("/bundle-{value}.js"));
  }
}

#[tokio::test]
async fn duplicate_values_expand_once() {
  let fs = Arc::new(MemoryFileSystem::with_files(&[("res/greeting.i18n", "\"Hello\"")]));
  let source = format!("var greeting = \"{}\";", resource_marker("res/greeting.i18n"));
  let mut compilation =
    compilation(vec![chunk(None, &["bundle.js"])], &[("bundle.js", source)], None);

  run_build(MultiOutputPlugin::new(options(&["fr", "fr", "en"]), fs), &mut compilation).await;

  assert!(compilation.errors.is_empty());
  assert_eq!(compilation.assets.len(), 3);
}

#[tokio::test]
async fn out_of_order_hooks_are_reported_not_panicked() {
  let fs = Arc::new(MemoryFileSystem::new());
  let mut compilation = compilation(vec![], &[], None);

  let driver: PluginDriver =
    PluginDriver::new(vec![Arc::new(MultiOutputPlugin::new(options(&["fr"]), fs))]);
  driver.compilation_start(&mut compilation).await;
  driver.finalize_assets(&mut compilation).await;

  assert_eq!(compilation.errors.len(), 1);
  assert!(compilation.errors[0].to_string().contains("finalize_assets"));
}

#[tokio::test]
async fn expands_against_the_real_file_system() {
  let dir = tempfile::tempdir().unwrap();
  let resource = dir.path().join("greeting.i18n");
  std::fs::write(&resource, "\"Hello\"").unwrap();
  std::fs::write(dir.path().join("fr.i18n"), "\"Bonjour\"").unwrap();

  let source = format!("var greeting = \"{}\";", resource_marker(resource.to_str().unwrap()));
  let mut compilation =
    compilation(vec![chunk(None, &["bundle.js"])], &[("bundle.js", source)], None);

  let plugin = MultiOutputPlugin::new(options(&["fr", "en"]), Arc::new(multipack_fs::OsFileSystem));
  let driver = PluginDriver::new(vec![Arc::new(plugin)]);
  driver.compilation_start(&mut compilation).await;
  driver.optimize_assets(&mut compilation).await;
  driver.finalize_assets(&mut compilation).await;
  driver.after_emit(&mut compilation).await;

  assert!(compilation.errors.is_empty(), "{:?}", compilation.errors);
  assert_eq!(asset_text(&compilation, "bundle-fr.js"), "var greeting = \"Bonjour\";");
  assert_eq!(asset_text(&compilation, "bundle-en.js"), "var greeting = \"Hello\";");
}
