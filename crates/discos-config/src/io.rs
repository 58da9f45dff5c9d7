use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Sustituye `path` por `contents` de una sola vez.
///
/// El temporal se crea en el mismo directorio para que `persist` sea un rename.
pub(crate) fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
  let dir = path
    .parent()
    .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{} has no parent directory", path.display())))?;

  let mut tmp = NamedTempFile::new_in(dir)?;
  tmp.write_all(contents.as_bytes())?;
  tmp.as_file().sync_all()?;
  tmp.persist(path).map_err(|e| e.error)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_contents_without_leftovers() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("discos.toml");
    std::fs::write(&path, "old").unwrap();

    replace_file(&path, "new").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
  }
}
