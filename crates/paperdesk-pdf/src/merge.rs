//! Merging uploaded PDFs into a single document.
//!
//! The first input becomes the destination; every following document
//! has its object IDs shifted past the destination's current maximum
//! before its objects and pages are appended. Input order is preserved
//! in the output page sequence.

use crate::error::PdfOpError;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Merge PDFs in the order they were added to the workspace.
///
/// A single input is returned unchanged. Encrypted inputs are rejected
/// before any work happens so the caller can surface a password error
/// instead of a parse failure mid-merge.
pub fn merge_pdfs(inputs: Vec<Vec<u8>>) -> Result<Vec<u8>, PdfOpError> {
    if inputs.is_empty() {
        return Err(PdfOpError::EmptyInput);
    }

    if inputs.len() == 1 {
        return Ok(inputs.into_iter().next().unwrap());
    }

    let mut sources = Vec::with_capacity(inputs.len());
    for (index, bytes) in inputs.iter().enumerate() {
        let doc = Document::load_mem(bytes).map_err(|e| {
            PdfOpError::Parse(format!("document {}: {}", index + 1, e))
        })?;
        if doc.is_encrypted() {
            return Err(PdfOpError::Encrypted);
        }
        sources.push(doc);
    }

    let mut merged = sources.remove(0);
    let mut next_free_id = merged.max_id;
    let mut page_order = ordered_page_ids(&merged);

    for source in sources {
        let offset = next_free_id;
        let source_pages = ordered_page_ids(&source);

        // Move every object across with shifted IDs.
        let mut shifted = BTreeMap::new();
        for (id, object) in source.objects.into_iter() {
            shifted.insert((id.0 + offset, id.1), shift_refs(object, offset));
        }
        merged.objects.extend(shifted);

        page_order.extend(
            source_pages
                .into_iter()
                .map(|id| (id.0 + offset, id.1)),
        );

        next_free_id = next_free_id.max(source.max_id + offset);
    }

    rewrite_page_tree(&mut merged, &page_order)?;
    merged.max_id = next_free_id;
    merged.compress();

    let mut out = Vec::new();
    merged
        .save_to(&mut out)
        .map_err(|e| PdfOpError::Operation(format!("failed to save merged PDF: {}", e)))?;
    Ok(out)
}

/// Page object IDs in document page order (get_pages is keyed by page
/// number, so its value order is the page order).
fn ordered_page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// Shift every indirect reference inside an object by `offset`.
fn shift_refs(object: Object, offset: u32) -> Object {
    match object {
        Object::Reference((num, generation)) => Object::Reference((num + offset, generation)),
        Object::Array(items) => {
            Object::Array(items.into_iter().map(|o| shift_refs(o, offset)).collect())
        }
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = shift_refs(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = shift_refs(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}

/// Point the destination's page tree at the combined page list.
fn rewrite_page_tree(doc: &mut Document, page_order: &[ObjectId]) -> Result<(), PdfOpError> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(|root| root.as_reference())
        .map_err(|_| PdfOpError::Operation("trailer has no catalog reference".into()))?;

    let pages_id = doc
        .objects
        .get(&catalog_id)
        .and_then(|obj| obj.as_dict().ok())
        .and_then(|catalog| catalog.get(b"Pages").ok())
        .and_then(|pages| pages.as_reference().ok())
        .ok_or_else(|| PdfOpError::Operation("catalog has no page tree".into()))?;

    match doc.objects.get_mut(&pages_id) {
        Some(Object::Dictionary(pages_dict)) => {
            pages_dict.set(
                "Kids",
                Object::Array(page_order.iter().map(|&id| Object::Reference(id)).collect()),
            );
            pages_dict.set("Count", Object::Integer(page_order.len() as i64));

            // Re-parent every page onto the surviving tree root.
            let reparent: Vec<ObjectId> = page_order.to_vec();
            for page_id in reparent {
                if let Some(Object::Dictionary(page_dict)) = doc.objects.get_mut(&page_id) {
                    page_dict.set("Parent", Object::Reference(pages_id));
                }
            }
            Ok(())
        }
        _ => Err(PdfOpError::Operation("page tree root is not a dictionary".into())),
    }
}
