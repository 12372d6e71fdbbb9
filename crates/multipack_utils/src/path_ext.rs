use std::path::{Path, PathBuf};

pub trait PathExt {
  /// The sibling path obtained by replacing the file name with `<value><ext>`,
  /// keeping the directory and extension of `self`.
  fn value_sibling(&self, value: &str) -> PathBuf;
}

impl PathExt for Path {
  fn value_sibling(&self, value: &str) -> PathBuf {
    let file_name = match self.extension() {
      Some(ext) => format!("{value}.{}", ext.to_string_lossy()),
      None => value.to_string(),
    };
    self.parent().map_or_else(|| PathBuf::from(&file_name), |parent| parent.join(&file_name))
  }
}

#[test]
fn test_value_sibling() {
  assert_eq!(Path::new("res/greeting.i18n").value_sibling("fr"), Path::new("res/fr.i18n"));
  assert_eq!(Path::new("greeting.i18n").value_sibling("en"), Path::new("en.i18n"));
  assert_eq!(Path::new("res/greeting").value_sibling("fr"), Path::new("res/fr"));
}
