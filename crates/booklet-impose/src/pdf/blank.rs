//! Blank filler page creation

use crate::constants::mm_to_pt;
use crate::types::{PaperSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Create a blank page of the given paper size in `doc`
pub(crate) fn create_blank_page(
    doc: &mut Document,
    paper_size: PaperSize,
    parent_id: ObjectId,
) -> Result<ObjectId> {
    let (width_mm, height_mm) = paper_size.dimensions_mm();
    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(mm_to_pt(width_mm)),
        Object::Real(mm_to_pt(height_mm)),
    ];

    let content_stream = Stream::new(Dictionary::new(), Vec::new());
    let content_id = doc.add_object(content_stream);

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_id));
    page_dict.set("MediaBox", Object::Array(media_box));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));

    let page_id = doc.add_object(page_dict);
    Ok(page_id)
}
