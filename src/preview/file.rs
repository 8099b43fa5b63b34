use std::path::{Path, PathBuf};

/// A file chosen in the profile-picture input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    media_type: Option<String>,
}

impl SelectedFile {
    /// Creates a selection with an explicit media type.
    pub fn new(path: impl Into<PathBuf>, media_type: Option<&str>) -> Self {
        Self {
            path: path.into(),
            media_type: media_type.map(str::to_string),
        }
    }

    /// Creates a selection, detecting the media type from the file's
    /// leading bytes.
    ///
    /// A file that cannot be opened, or whose contents are not recognised,
    /// has no media type.
    pub fn probe(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let media_type = infer::get_from_path(&path)
            .ok()
            .flatten()
            .map(|kind| kind.mime_type().to_string());
        Self { path, media_type }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Returns `true` if the media type is `image/*`.
    pub fn is_image(&self) -> bool {
        self.media_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn image_media_type_is_image() {
        assert!(SelectedFile::new("a.png", Some("image/png")).is_image());
    }

    #[test]
    fn text_media_type_is_not_image() {
        assert!(!SelectedFile::new("a.txt", Some("text/plain")).is_image());
    }

    #[test]
    fn missing_media_type_is_not_image() {
        assert!(!SelectedFile::new("a", None).is_image());
    }

    #[test]
    fn probe_detects_png_signature() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_MAGIC).unwrap();
        file.write_all(&[0; 32]).unwrap();
        let selected = SelectedFile::probe(file.path());
        assert_eq!(selected.media_type(), Some("image/png"));
        assert!(selected.is_image());
    }

    #[test]
    fn probe_plain_text_has_no_image_type() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "just some notes").unwrap();
        assert!(!SelectedFile::probe(file.path()).is_image());
    }

    #[test]
    fn probe_missing_file_has_no_media_type() {
        let dir = tempfile::tempdir().unwrap();
        let selected = SelectedFile::probe(dir.path().join("nope.png"));
        assert_eq!(selected.media_type(), None);
        assert_eq!(selected.path(), dir.path().join("nope.png"));
    }
}
