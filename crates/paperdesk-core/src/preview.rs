//! Preview thumbnails.
//!
//! PDF pages are measured with the document parser and rasterized
//! behind a trait so a headless deployment can still produce
//! placeholder thumbnails. Image uploads are decoded and scaled
//! directly. Preview generation is best-effort: a file that cannot be
//! previewed is skipped with a warning and never surfaces an error.

use crate::intake::UploadedFile;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use paperdesk_pdf::geometry::{page_geometries, ScaledSize};
use serde::Serialize;
use std::io::Cursor;
use tracing::warn;

/// At most this many pages per document are previewed.
pub const PREVIEW_PAGE_CAP: usize = 10;

/// Thumbnails are scaled to this display width.
pub const PREVIEW_WIDTH: u32 = 200;

const THUMBNAIL_JPEG_QUALITY: u8 = 80;

/// One rendered preview thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewPage {
    pub source_name: String,
    /// 1-based page number within the source document.
    pub page_number: u32,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub jpeg: Vec<u8>,
}

/// Turns a measured page into pixels.
///
/// The default implementation paints a blank page of the right
/// proportions; a fuller deployment plugs in a real renderer.
pub trait PageRasterizer: Send + Sync {
    fn rasterize(&self, source: &[u8], page_number: u32, size: ScaledSize) -> Option<Vec<u8>>;
}

/// Produces a white page at the requested size. Keeps the preview
/// strip proportioned correctly without a PDF raster engine.
#[derive(Debug, Default)]
pub struct BlankPageRasterizer;

impl PageRasterizer for BlankPageRasterizer {
    fn rasterize(&self, _source: &[u8], _page_number: u32, size: ScaledSize) -> Option<Vec<u8>> {
        let canvas = RgbImage::from_pixel(size.width, size.height, image::Rgb([255, 255, 255]));
        encode_jpeg(&DynamicImage::ImageRgb8(canvas))
    }
}

/// Regenerate the full preview strip for the loaded files.
pub fn build_previews(files: &[UploadedFile], rasterizer: &dyn PageRasterizer) -> Vec<PreviewPage> {
    let mut pages = Vec::new();
    for file in files {
        if file.is_pdf() {
            preview_pdf(file, rasterizer, &mut pages);
        } else if file.is_image() {
            preview_image(file, &mut pages);
        }
    }
    pages
}

fn preview_pdf(file: &UploadedFile, rasterizer: &dyn PageRasterizer, out: &mut Vec<PreviewPage>) {
    let geometries = match page_geometries(&file.bytes, PREVIEW_PAGE_CAP as u32) {
        Ok(g) => g,
        Err(e) => {
            warn!(file = file.name.as_str(), error = %e, "skipping preview for unreadable PDF");
            return;
        }
    };

    for geometry in geometries {
        let size = geometry.scale_to_width(f64::from(PREVIEW_WIDTH));
        match rasterizer.rasterize(&file.bytes, geometry.page_number, size) {
            Some(jpeg) => out.push(PreviewPage {
                source_name: file.name.clone(),
                page_number: geometry.page_number,
                width: size.width,
                height: size.height,
                jpeg,
            }),
            None => {
                warn!(
                    file = file.name.as_str(),
                    page = geometry.page_number,
                    "rasterizer produced no output for page"
                );
            }
        }
    }
}

fn preview_image(file: &UploadedFile, out: &mut Vec<PreviewPage>) {
    let decoded = match image::load_from_memory(&file.bytes) {
        Ok(img) => img,
        Err(e) => {
            warn!(file = file.name.as_str(), error = %e, "skipping preview for undecodable image");
            return;
        }
    };

    let scale = f64::from(PREVIEW_WIDTH) / f64::from(decoded.width().max(1));
    let height = (f64::from(decoded.height()) * scale).round().max(1.0) as u32;
    let thumb = decoded.thumbnail(PREVIEW_WIDTH, height.max(1));

    if let Some(jpeg) = encode_jpeg(&thumb) {
        out.push(PreviewPage {
            source_name: file.name.clone(),
            page_number: 1,
            width: thumb.width(),
            height: thumb.height(),
            jpeg,
        });
    }
}

fn encode_jpeg(img: &DynamicImage) -> Option<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, THUMBNAIL_JPEG_QUALITY);
    match img.to_rgb8().write_with_encoder(encoder) {
        Ok(()) => Some(buf.into_inner()),
        Err(e) => {
            warn!(error = %e, "JPEG encoding failed for preview");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_pdf;
    use pretty_assertions::assert_eq;

    fn png_upload(name: &str, width: u32, height: u32) -> UploadedFile {
        let img = RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        UploadedFile::new(name, "image/png", buf.into_inner())
    }

    #[test]
    fn pdf_pages_become_proportioned_thumbnails() {
        let file = UploadedFile::new("doc.pdf", "application/pdf", sample_pdf(3));
        let pages = build_previews(&[file], &BlankPageRasterizer);

        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.page_number, (i + 1) as u32);
            assert_eq!(page.width, PREVIEW_WIDTH);
            // US Letter is taller than wide.
            assert!(page.height > page.width);
            assert!(page.jpeg.starts_with(&[0xFF, 0xD8]));
        }
    }

    #[test]
    fn preview_is_capped_per_document() {
        let file = UploadedFile::new(
            "long.pdf",
            "application/pdf",
            sample_pdf(PREVIEW_PAGE_CAP as u32 + 5),
        );
        let pages = build_previews(&[file], &BlankPageRasterizer);
        assert_eq!(pages.len(), PREVIEW_PAGE_CAP);
    }

    #[test]
    fn images_are_scaled_to_the_preview_width() {
        let file = png_upload("photo.png", 400, 300);
        let pages = build_previews(&[file], &BlankPageRasterizer);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].width, PREVIEW_WIDTH);
        assert_eq!(pages[0].height, 150);
        assert_eq!(pages[0].source_name, "photo.png");
    }

    #[test]
    fn unreadable_file_is_skipped_not_fatal() {
        let bad = UploadedFile::new("bad.pdf", "application/pdf", b"not a pdf".to_vec());
        let good = png_upload("ok.png", 100, 100);
        let pages = build_previews(&[bad, good], &BlankPageRasterizer);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].source_name, "ok.png");
    }

    #[test]
    fn previews_follow_file_order() {
        let a = UploadedFile::new("a.pdf", "application/pdf", sample_pdf(1));
        let b = UploadedFile::new("b.pdf", "application/pdf", sample_pdf(2));
        let pages = build_previews(&[a, b], &BlankPageRasterizer);

        let names: Vec<&str> = pages.iter().map(|p| p.source_name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "b.pdf"]);
    }
}
