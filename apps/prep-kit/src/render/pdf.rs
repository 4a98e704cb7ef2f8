//! Serializes a `DocumentLayout` into a PDF using the standard-14 Helvetica faces.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::errors::AppError;
use crate::layout::encoding::to_win_ansi;
use crate::layout::{DocumentLayout, FontFace, PageLayout};

const PDF_VERSION: &str = "1.4";

/// Builds an in-memory PDF with one page per layout page.
pub fn build_document(layout: &DocumentLayout) -> Result<Document, AppError> {
    let g = &layout.geometry;
    let mut doc = Document::with_version(PDF_VERSION);

    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(font_dictionary(FontFace::Helvetica));
    let bold_id = doc.add_object(font_dictionary(FontFace::HelveticaBold));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontFace::Helvetica.resource_name() => regular_id,
            FontFace::HelveticaBold.resource_name() => bold_id,
        },
    });

    let media_box: Vec<Object> = vec![0.into(), 0.into(), g.width_pt.into(), g.height_pt.into()];

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for (index, page) in layout.pages.iter().enumerate() {
        let encoded = page_content(page).encode().map_err(|e| {
            AppError::Render(format!("failed to encode content of page {}: {e}", index + 1))
        })?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

fn font_dictionary(face: FontFace) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => face.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Drawing operators for one page: separator rules first, then text runs.
fn page_content(page: &PageLayout) -> Content {
    let mut operations = Vec::with_capacity(page.rules.len() * 3 + page.texts.len() * 5);

    for rule in &page.rules {
        operations.push(Operation::new("m", vec![rule.x1.into(), rule.y.into()]));
        operations.push(Operation::new("l", vec![rule.x2.into(), rule.y.into()]));
        operations.push(Operation::new("S", vec![]));
    }

    for text in &page.texts {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![text.face.resource_name().into(), text.size_pt.into()],
        ));
        operations.push(Operation::new("Td", vec![text.x.into(), text.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&text.text), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Content { operations }
}
