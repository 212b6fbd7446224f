//! Building new PDFs from workspace output.
//!
//! Two composers live here: `text_to_pdf` lays AI-extracted text onto
//! A4 pages, and `images_to_pdf` turns an ordered set of captured
//! stills into a one-image-per-page document.

use crate::error::PdfOpError;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};
use std::io::Cursor;

const A4_WIDTH: f64 = 595.0;
const A4_HEIGHT: f64 = 842.0;
const TEXT_MARGIN: f64 = 50.0;
const LINE_HEIGHT: f64 = 18.0;
const FONT_SIZE: i64 = 11;
const WRAP_COLUMNS: usize = 92;

const IMAGE_MARGIN: f64 = 36.0;

/// Lay plain text onto A4 pages with fixed margins and line height.
pub fn text_to_pdf(text: &str) -> Result<Vec<u8>, PdfOpError> {
    let lines = wrap_text(text, WRAP_COLUMNS);
    let lines_per_page = ((A4_HEIGHT - 2.0 * TEXT_MARGIN) / LINE_HEIGHT) as usize;

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
    let chunks: Vec<&[String]> = if lines.is_empty() {
        vec![&[]]
    } else {
        lines.chunks(lines_per_page).collect()
    };

    for page_lines in chunks {
        let mut ops = vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(b"F1".to_vec()), Object::Integer(FONT_SIZE)],
            ),
            Operation::new("TL", vec![Object::Real(LINE_HEIGHT as f32)]),
            Operation::new(
                "Td",
                vec![
                    Object::Real(TEXT_MARGIN as f32),
                    Object::Real((A4_HEIGHT - TEXT_MARGIN) as f32),
                ],
            ),
        ];
        for line in page_lines {
            ops.push(Operation::new(
                "Tj",
                vec![Object::String(
                    to_pdf_text(line),
                    StringFormat::Literal,
                )],
            ));
            ops.push(Operation::new("T*", vec![]));
        }
        ops.push(Operation::new("ET", vec![]));

        let content = Content { operations: ops };
        let encoded = content
            .encode()
            .map_err(|e| PdfOpError::Operation(format!("content encode: {}", e)))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Resources", Object::Reference(resources_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(A4_WIDTH as f32),
                    Object::Real(A4_HEIGHT as f32),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    finish_document(doc, pages_id, page_ids)
}

/// Compose captured JPEG stills into one PDF, one page per image, in
/// capture order. Each page is sized so the image fills a fixed width
/// with its aspect ratio intact.
pub fn images_to_pdf(images: &[Vec<u8>]) -> Result<Vec<u8>, PdfOpError> {
    if images.is_empty() {
        return Err(PdfOpError::EmptyInput);
    }

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut page_ids = Vec::new();

    for (index, bytes) in images.iter().enumerate() {
        let (jpeg, width, height) = as_jpeg(bytes)
            .map_err(|e| PdfOpError::Image(format!("capture {}: {}", index + 1, e)))?;

        let draw_width = A4_WIDTH - 2.0 * IMAGE_MARGIN;
        let draw_height = draw_width * height as f64 / width as f64;
        let page_height = draw_height + 2.0 * IMAGE_MARGIN;

        let image_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"XObject".to_vec())),
            ("Subtype", Object::Name(b"Image".to_vec())),
            ("Width", Object::Integer(width as i64)),
            ("Height", Object::Integer(height as i64)),
            ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
            ("BitsPerComponent", Object::Integer(8)),
            ("Filter", Object::Name(b"DCTDecode".to_vec())),
        ]);
        let image_id = doc.add_object(Stream::new(image_dict, jpeg));

        let resources = Dictionary::from_iter(vec![(
            "XObject",
            Object::Dictionary(Dictionary::from_iter(vec![(
                "Im0",
                Object::Reference(image_id),
            )])),
        )]);

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        Object::Real(draw_width as f32),
                        Object::Real(0.0),
                        Object::Real(0.0),
                        Object::Real(draw_height as f32),
                        Object::Real(IMAGE_MARGIN as f32),
                        Object::Real(IMAGE_MARGIN as f32),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| PdfOpError::Operation(format!("content encode: {}", e)))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Resources", Object::Dictionary(resources)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(A4_WIDTH as f32),
                    Object::Real(page_height as f32),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    finish_document(doc, pages_id, page_ids)
}

/// Shared tail: page tree, catalog, trailer, serialization.
fn finish_document(
    mut doc: Document,
    pages_id: lopdf::ObjectId,
    page_ids: Vec<lopdf::ObjectId>,
) -> Result<Vec<u8>, PdfOpError> {
    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|&id| Object::Reference(id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| PdfOpError::Operation(format!("failed to save PDF: {}", e)))?;
    Ok(out)
}

/// Accept a still as-is when it is already JPEG; transcode anything
/// else the image crate can decode.
fn as_jpeg(bytes: &[u8]) -> Result<(Vec<u8>, u32, u32), String> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?;

    match reader.format() {
        Some(image::ImageFormat::Jpeg) => {
            let (width, height) = reader.into_dimensions().map_err(|e| e.to_string())?;
            Ok((bytes.to_vec(), width, height))
        }
        Some(_) => {
            let decoded = reader.decode().map_err(|e| e.to_string())?.into_rgb8();
            let (width, height) = (decoded.width(), decoded.height());
            let mut jpeg = Vec::new();
            decoded
                .write_to(&mut Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
                .map_err(|e| e.to_string())?;
            Ok((jpeg, width, height))
        }
        None => Err("unrecognized image format".into()),
    }
}

/// Wrap on newlines first, then break long lines at spaces where
/// possible, hard-breaking runs that exceed the column limit.
fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.chars().count() <= columns {
            lines.push(paragraph.to_string());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split(' ') {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if current.is_empty() {
                current = word.to_string();
            } else if current_len + 1 + word_len <= columns {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
            // Hard-break words longer than a full line.
            while current.chars().count() > columns {
                let head: String = current.chars().take(columns).collect();
                let tail: String = current.chars().skip(columns).collect();
                lines.push(head);
                current = tail;
            }
        }
        lines.push(current);
    }
    lines
}

/// Latin-1 projection for the standard Helvetica encoding; anything
/// outside it becomes '?'.
fn to_pdf_text(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| {
            let code = c as u32;
            if code < 256 {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
