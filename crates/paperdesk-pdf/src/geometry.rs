//! Page geometry extraction.
//!
//! The preview layer needs page dimensions, not pixels: rasterization
//! is delegated behind a seam. This module pulls MediaBox geometry out
//! of a parsed document, walking up to the parent node when a page
//! inherits its box.

use crate::error::PdfOpError;
use lopdf::{Dictionary, Document, Object};
use serde::Serialize;

/// US Letter fallback when no MediaBox can be found anywhere.
const DEFAULT_MEDIA_BOX: [f64; 4] = [0.0, 0.0, 612.0, 792.0];

/// Geometry of one page, in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageGeometry {
    /// 1-based page number
    pub page_number: u32,
    pub width: f64,
    pub height: f64,
}

/// Dimensions after scaling a page to a target width.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScaledSize {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl PageGeometry {
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Scale to a fixed display width, preserving aspect ratio.
    pub fn scale_to_width(&self, target_width: f64) -> ScaledSize {
        let scale = target_width / self.width;
        ScaledSize {
            width: target_width.round() as u32,
            height: (self.height * scale).round().max(1.0) as u32,
            scale,
        }
    }
}

/// Read geometry for pages `1..=limit` (or fewer if the document is
/// shorter).
pub fn page_geometries(bytes: &[u8], limit: u32) -> Result<Vec<PageGeometry>, PdfOpError> {
    let doc = Document::load_mem(bytes).map_err(|e| PdfOpError::Parse(e.to_string()))?;

    let pages = doc.get_pages();
    let mut out = Vec::new();

    for (&page_number, &page_id) in pages.iter().take(limit as usize) {
        let page_dict = doc
            .get_object(page_id)
            .and_then(|obj| obj.as_dict())
            .map_err(|e| PdfOpError::Parse(format!("page {}: {}", page_number, e)))?;

        let rect = media_box(&doc, page_dict);
        out.push(PageGeometry {
            page_number,
            width: (rect[2] - rect[0]).abs(),
            height: (rect[3] - rect[1]).abs(),
        });
    }

    Ok(out)
}

/// MediaBox from the page itself, or inherited from its parent chain.
fn media_box(doc: &Document, page_dict: &Dictionary) -> [f64; 4] {
    if let Some(rect) = page_dict.get(b"MediaBox").ok().and_then(parse_rect) {
        return rect;
    }

    // Walk up the parent chain; loop bound guards malformed cycles.
    let mut current = page_dict.clone();
    for _ in 0..16 {
        let parent_id = match current.get(b"Parent").and_then(|p| p.as_reference()) {
            Ok(id) => id,
            Err(_) => break,
        };
        let parent = match doc.get_object(parent_id).and_then(|obj| obj.as_dict()) {
            Ok(dict) => dict.clone(),
            Err(_) => break,
        };
        if let Some(rect) = parent.get(b"MediaBox").ok().and_then(parse_rect) {
            return rect;
        }
        current = parent;
    }

    DEFAULT_MEDIA_BOX
}

fn parse_rect(obj: &Object) -> Option<[f64; 4]> {
    let arr = obj.as_array().ok()?;
    if arr.len() != 4 {
        return None;
    }
    let mut rect = [0.0; 4];
    for (i, item) in arr.iter().enumerate() {
        rect[i] = match item {
            Object::Integer(n) => *n as f64,
            Object::Real(n) => *n as f64,
            _ => return None,
        };
    }
    Some(rect)
}
