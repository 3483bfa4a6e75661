//! # Image Scrubbing Module
//!
//! Questo modulo rimuove i metadata embedded (EXIF, commenti, profili) da
//! una singola immagine tramite ricostruzione completa invece di cancellare
//! tag selettivamente.
//!
//! ## Pipeline di scrubbing:
//! 1. **Risoluzione extension tag**: dal nome file (primo `.` fino alla fine)
//! 2. **Decode**: il file sorgente viene decodificato in un pixel buffer
//!    in-memory, preservando color mode e dimensioni
//! 3. **Read-out**: i pixel vengono estratti come sequenza piatta ordinata
//! 4. **Container nuovo**: viene allocato un container vuoto con lo stesso
//!    mode e le stesse dimensioni: è questo il meccanismo di rimozione dei
//!    metadata, il container nuovo non ha mai visto il file originale
//! 5. **Encode**: il container viene salvato come
//!    `{basename}-SCRUBBED{extension}` accanto al file sorgente
//!
//! ## Garanzie:
//! - Il file sorgente non viene mai modificato né cancellato
//! - Esattamente un file di output per chiamata riuscita; una seconda
//!   chiamata sullo stesso input sovrascrive lo stesso artifact
//! - Decode/encode girano su un blocking thread di tokio per non bloccare
//!   il runtime
//!
//! ## Esempio:
//! ```rust,ignore
//! let artifact = Scrubber::scrub(Path::new("photos/crying_seal.jpeg")).await?;
//! // -> photos/crying_seal-SCRUBBED.jpeg
//! ```

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};
use tracing::debug;

use crate::error::ScrubError;
use crate::format;

/// Marker appended to the basename of every scrubbed artifact
pub const SCRUBBED_SUFFIX: &str = "-SCRUBBED";

/// Strips metadata from single images by pixel-copy reconstruction
pub struct Scrubber;

impl Scrubber {
    /// Scrub one image file, returning the path of the artifact written
    /// next to the source.
    pub async fn scrub(path: &Path) -> Result<PathBuf, ScrubError> {
        let source = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::scrub_blocking(&source)).await?
    }

    /// Compute the artifact path: the input basename (portion before the
    /// first `.`) plus the `-SCRUBBED` marker plus the original extension
    /// tag, in the same directory as the source.
    pub fn scrubbed_output_path(path: &Path) -> Result<PathBuf, ScrubError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ScrubError::Validation(format!("Invalid file name: {}", path.display()))
            })?;

        let tag = format::extension_tag(file_name)?;
        let basename = &file_name[..file_name.len() - tag.len()];

        Ok(path.with_file_name(format!("{basename}{SCRUBBED_SUFFIX}{tag}")))
    }

    /// Blocking decode -> reconstruct -> encode sequence
    fn scrub_blocking(path: &Path) -> Result<PathBuf, ScrubError> {
        let output_path = Self::scrubbed_output_path(path)?;

        let source_image = image::open(path)?;
        debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            source_image.width(),
            source_image.height(),
            source_image.color()
        );

        let clean_image = Self::rebuild_without_metadata(source_image)?;
        clean_image.save(&output_path)?;
        debug!("Encoded clean container to {}", output_path.display());

        Ok(output_path)
    }

    /// Move the flat pixel sequence into a freshly allocated container with
    /// identical color mode and dimensions. The new container carries no
    /// auxiliary data from the source.
    fn rebuild_without_metadata(image: DynamicImage) -> Result<DynamicImage, ScrubError> {
        let clean = match image {
            DynamicImage::ImageLuma8(buffer) => {
                DynamicImage::ImageLuma8(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageLumaA8(buffer) => {
                DynamicImage::ImageLumaA8(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageRgb8(buffer) => {
                DynamicImage::ImageRgb8(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageRgba8(buffer) => {
                DynamicImage::ImageRgba8(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageLuma16(buffer) => {
                DynamicImage::ImageLuma16(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageLumaA16(buffer) => {
                DynamicImage::ImageLumaA16(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageRgb16(buffer) => {
                DynamicImage::ImageRgb16(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageRgba16(buffer) => {
                DynamicImage::ImageRgba16(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageRgb32F(buffer) => {
                DynamicImage::ImageRgb32F(Self::rebuild_buffer(buffer)?)
            }
            DynamicImage::ImageRgba32F(buffer) => {
                DynamicImage::ImageRgba32F(Self::rebuild_buffer(buffer)?)
            }
            other => {
                return Err(ScrubError::Reconstruction(format!(
                    "unsupported color mode {:?}",
                    other.color()
                )))
            }
        };

        Ok(clean)
    }

    /// Read out all pixel values and write them into a new buffer of the
    /// same dimensions.
    fn rebuild_buffer<P>(
        buffer: ImageBuffer<P, Vec<P::Subpixel>>,
    ) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, ScrubError>
    where
        P: Pixel,
    {
        let (width, height) = buffer.dimensions();
        let pixels = buffer.into_raw();

        ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| {
            ScrubError::Reconstruction(format!(
                "pixel sequence does not fill a {width}x{height} container"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn sample_image() -> RgbImage {
        RgbImage::from_fn(4, 3, |x, y| image::Rgb([x as u8 * 40, y as u8 * 60, 128]))
    }

    fn has_exif_marker(bytes: &[u8]) -> bool {
        bytes.windows(6).any(|window| window == b"Exif\x00\x00")
    }

    #[test]
    fn test_output_naming() {
        let out = Scrubber::scrubbed_output_path(Path::new("photo.jpg")).unwrap();
        assert_eq!(out, Path::new("photo-SCRUBBED.jpg"));
    }

    #[test]
    fn test_output_naming_truncates_at_first_dot() {
        let out = Scrubber::scrubbed_output_path(Path::new("/data/img.tar.gz")).unwrap();
        assert_eq!(out, Path::new("/data/img-SCRUBBED.tar.gz"));
    }

    #[test]
    fn test_output_naming_requires_extension() {
        assert!(Scrubber::scrubbed_output_path(Path::new("/data/readme")).is_err());
    }

    #[tokio::test]
    async fn test_scrub_preserves_pixels_and_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let source_path = temp_dir.path().join("sample.png");
        sample_image().save(&source_path).unwrap();

        let artifact = Scrubber::scrub(&source_path).await.unwrap();
        assert_eq!(artifact, temp_dir.path().join("sample-SCRUBBED.png"));
        assert!(source_path.exists(), "source must never be touched");

        let original = image::open(&source_path).unwrap();
        let scrubbed = image::open(&artifact).unwrap();
        assert_eq!(original.color(), scrubbed.color());
        assert_eq!(original.width(), scrubbed.width());
        assert_eq!(original.height(), scrubbed.height());
        assert_eq!(original.as_bytes(), scrubbed.as_bytes());
    }

    #[tokio::test]
    async fn test_scrub_drops_exif_segment() {
        let temp_dir = TempDir::new().unwrap();
        let plain_path = temp_dir.path().join("plain.jpg");
        sample_image().save(&plain_path).unwrap();

        // splice a minimal EXIF APP1 segment (empty IFD) right after the
        // SOI marker, producing a valid JPEG that carries metadata
        let plain = std::fs::read(&plain_path).unwrap();
        assert_eq!(&plain[..2], &[0xFF, 0xD8]);
        let mut tagged = Vec::with_capacity(plain.len() + 24);
        tagged.extend_from_slice(&plain[..2]);
        tagged.extend_from_slice(&[0xFF, 0xE1, 0x00, 0x16]);
        tagged.extend_from_slice(b"Exif\x00\x00II*\x00\x08\x00\x00\x00\x00\x00\x00\x00\x00\x00");
        tagged.extend_from_slice(&plain[2..]);

        let tagged_path = temp_dir.path().join("tagged.jpg");
        std::fs::write(&tagged_path, &tagged).unwrap();
        assert!(has_exif_marker(&tagged));

        let artifact = Scrubber::scrub(&tagged_path).await.unwrap();
        assert_eq!(artifact, temp_dir.path().join("tagged-SCRUBBED.jpg"));

        let scrubbed_bytes = std::fs::read(&artifact).unwrap();
        assert!(
            !has_exif_marker(&scrubbed_bytes),
            "artifact must not carry the source EXIF segment"
        );

        // still a decodable image with the source geometry
        let scrubbed = image::open(&artifact).unwrap();
        assert_eq!(scrubbed.width(), 4);
        assert_eq!(scrubbed.height(), 3);
    }

    #[tokio::test]
    async fn test_scrub_twice_overwrites_same_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let source_path = temp_dir.path().join("sample.png");
        sample_image().save(&source_path).unwrap();

        let first = Scrubber::scrub(&source_path).await.unwrap();
        let second = Scrubber::scrub(&source_path).await.unwrap();
        assert_eq!(first, second);

        let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 2, "source + one artifact, no accumulation");
    }

    #[tokio::test]
    async fn test_scrub_reports_decode_failure() {
        let temp_dir = TempDir::new().unwrap();
        let bogus = temp_dir.path().join("broken.png");
        std::fs::write(&bogus, b"not a png at all").unwrap();

        assert!(Scrubber::scrub(&bogus).await.is_err());
    }
}
