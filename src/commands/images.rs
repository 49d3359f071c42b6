//! Wallpaper export command

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use tauri::State;
use thiserror::Error;
use tracing::info;

use super::SharedGenerationSession;

use crate::wallpaper::GeneratedImage;

/// Errors while writing a wallpaper to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Image url is not a base64 data URI")]
    NotDataUri,

    #[error("Failed to decode image data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Decode the embedded payload and write it under its synthesized filename
pub fn write_wallpaper(image: &GeneratedImage, directory: &Path) -> Result<PathBuf, ExportError> {
    if !image.url.starts_with("data:") {
        return Err(ExportError::NotDataUri);
    }
    let (_, payload) = image.url.split_once(";base64,").ok_or(ExportError::NotDataUri)?;
    let bytes = STANDARD.decode(payload)?;

    std::fs::create_dir_all(directory)?;
    let path = directory.join(image.filename());
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Save the last generated wallpaper to disk.
///
/// Defaults to the user's download directory when none is given. Returns
/// the written path.
#[tauri::command]
pub fn save_wallpaper(
    session_state: State<'_, SharedGenerationSession>,
    directory: Option<PathBuf>,
) -> Result<String, String> {
    let image = {
        let session = session_state.lock().map_err(|e| e.to_string())?;
        session
            .image()
            .cloned()
            .ok_or_else(|| "No wallpaper has been generated yet".to_string())?
    };

    let target = directory
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
        .ok_or_else(|| "No download directory available".to_string())?;

    let path = write_wallpaper(&image, &target).map_err(|e| e.to_string())?;

    info!("Saved wallpaper {} to {}", image.id, path.display());
    Ok(path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_image() -> GeneratedImage {
        // "PNG" header bytes, base64-encoded
        GeneratedImage::new(
            "data:image/png;base64,iVBORw0KGgo=".to_string(),
            "a cat on a roof".to_string(),
            "cinematic".to_string(),
        )
    }

    #[test]
    fn test_write_wallpaper_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let image = png_image();

        let path = write_wallpaper(&image, dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap().to_string_lossy(), image.filename());
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G'][..]);
    }

    #[test]
    fn test_write_wallpaper_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("walls").join("generated");

        let path = write_wallpaper(&png_image(), &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_wallpaper_rejects_plain_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = png_image();
        image.url = "https://example.com/wall.png".to_string();

        assert!(matches!(
            write_wallpaper(&image, dir.path()),
            Err(ExportError::NotDataUri)
        ));
    }

    #[test]
    fn test_write_wallpaper_rejects_invalid_base64() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = png_image();
        image.url = "data:image/png;base64,not-base64!!!".to_string();

        assert!(matches!(
            write_wallpaper(&image, dir.path()),
            Err(ExportError::Decode(_))
        ));
    }
}
