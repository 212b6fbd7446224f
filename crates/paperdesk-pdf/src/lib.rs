//! PDF operations for the Paperdesk workspace.
//!
//! Everything here is client-side manipulation built on lopdf:
//! - `probe`: intake-time structural checks and metadata
//! - `merge`: combine uploaded documents in workspace order
//! - `compose`: build new PDFs from extracted text or captured stills
//! - `geometry`: page dimensions for the preview layer

pub mod compose;
pub mod error;
pub mod geometry;
pub mod merge;
pub mod probe;

pub use compose::{images_to_pdf, text_to_pdf};
pub use error::PdfOpError;
pub use geometry::{page_geometries, PageGeometry, ScaledSize};
pub use merge::merge_pdfs;
pub use probe::{probe_pdf, quick_check, PdfProbe};

/// Parse PDF bytes and return the page count.
pub fn page_count(bytes: &[u8]) -> Result<u32, PdfOpError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| PdfOpError::Parse(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}

#[cfg(test)]
pub(crate) mod test_support {
    use lopdf::content::{Content, Operation};
    use lopdf::{Dictionary, Document, Object, Stream, StringFormat};

    /// Valid multi-page PDF for tests, pages labeled `<label>-<n>`.
    pub fn sample_pdf_labeled(num_pages: u32, label: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(b"Helvetica".to_vec())),
        ]));
        let resources_id = doc.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(Dictionary::from_iter(vec![(
                "F1",
                Object::Reference(font_id),
            )])),
        )]));

        let mut page_ids = Vec::new();
        for i in 0..num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new(
                        "Tf",
                        vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                    ),
                    Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            format!("{}-{}", label, i + 1).into_bytes(),
                            StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                ("Resources", Object::Reference(resources_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(num_pages as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    pub fn sample_pdf(num_pages: u32) -> Vec<u8> {
        sample_pdf_labeled(num_pages, "Page")
    }

    /// Sample PDF whose trailer points at a standard-security Encrypt
    /// dictionary. The owner/user hashes are filler; presence of the
    /// entry is what marks the document encrypted.
    pub fn encrypted_pdf() -> Vec<u8> {
        let mut doc = Document::load_mem(&sample_pdf(1)).unwrap();
        let encrypt_id = doc.add_object(Dictionary::from_iter(vec![
            ("Filter", Object::Name(b"Standard".to_vec())),
            ("V", Object::Integer(1)),
            ("R", Object::Integer(2)),
            (
                "O",
                Object::String(vec![0u8; 32], StringFormat::Hexadecimal),
            ),
            (
                "U",
                Object::String(vec![0u8; 32], StringFormat::Hexadecimal),
            ),
            ("P", Object::Integer(-44)),
        ]));
        doc.trailer.set("Encrypt", Object::Reference(encrypt_id));

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_count_matches_document() {
        let pdf = test_support::sample_pdf(4);
        assert_eq!(page_count(&pdf).unwrap(), 4);
    }

    #[test]
    fn page_count_rejects_garbage() {
        assert!(page_count(b"garbage").is_err());
    }
}
