use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{ComposeError, ComposeResult};

// Save
//------------------------------------------------------------------------------

/// Writes `image` as `<directory>/<filename>.png` and returns the path.
///
/// `directory` is `None` when the user cancelled the folder selection, in which
/// case nothing is written.
pub fn save_png(image: &RgbaImage, directory: Option<&Path>, filename: &str) -> ComposeResult<PathBuf> {
    let dir = directory.ok_or(ComposeError::NoDirectory)?;
    let path = output_path(dir, filename)?;

    let mut out = BufWriter::new(File::create(&path)?);
    image.write_to(&mut out, ImageFormat::Png).map_err(into_io)?;
    out.flush()?;

    info!("Saved QR code to {}", path.display());
    Ok(path)
}

/// `<dir>/<filename>.png`, refusing names that would leave `dir`.
pub fn output_path(dir: &Path, filename: &str) -> io::Result<PathBuf> {
    let name = format!("{filename}.png");
    if filename.contains(['/', '\\']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid file name: {filename:?}"),
        ));
    }
    Ok(dir.join(name))
}

// Write failures surface as the underlying IO error so the message stays verbatim.
fn into_io(err: image::ImageError) -> ComposeError {
    match err {
        image::ImageError::IoError(e) => ComposeError::Io(e),
        e => ComposeError::Image(e),
    }
}

#[cfg(test)]
mod save_tests {
    use std::path::Path;

    use image::{Rgba, RgbaImage};
    use test_case::test_case;

    use super::{output_path, save_png};
    use crate::error::ComposeError;

    fn image() -> RgbaImage {
        RgbaImage::from_pixel(41, 41, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_png(&image(), Some(dir.path()), "test").unwrap();
        assert_eq!(path, dir.path().join("test.png"));

        let reopened = image::open(&path).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (41, 41));
        assert_eq!(image::ImageFormat::from_path(&path).unwrap(), image::ImageFormat::Png);
    }

    #[test]
    fn test_save_label_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_png(&image(), Some(dir.path()), "Gift card 2024").unwrap();
        assert_eq!(path, dir.path().join("Gift card 2024.png"));
        assert!(path.is_file());
    }

    #[test]
    fn test_save_cancelled() {
        let res = save_png(&image(), None, "test");
        assert!(matches!(res, Err(ComposeError::NoDirectory)));
    }

    #[test]
    fn test_save_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let res = save_png(&image(), Some(&missing), "test");
        assert!(matches!(res, Err(ComposeError::Io(_))));
        assert!(!missing.exists());
    }

    #[test_case("../escape"; "parent")]
    #[test_case("a/b"; "slash")]
    #[test_case("a\\b"; "backslash")]
    fn test_output_path_rejects_separators(name: &str) {
        let err = output_path(Path::new("/tmp"), name).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("/tmp"), "MyQR").unwrap(), Path::new("/tmp/MyQR.png"));
    }
}
