//! Output assembly
//!
//! Writes the physical entry sequence into a fresh document: source pages
//! are deep-copied in write order, blank entries become empty filler pages,
//! and rotated entries get 180° added to their `/Rotate` value.

use super::blank::create_blank_page;
use crate::options::BookletOptions;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Assemble the output document from an ordered physical entry sequence.
///
/// Entry order is preserved exactly; entry `k` becomes output page `k`.
pub(crate) fn assemble_booklet(
    source: &Document,
    page_ids: &[ObjectId],
    entries: &[PhysicalEntry],
    options: &BookletOptions,
) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();
    let mut page_refs = Vec::with_capacity(entries.len());

    for entry in entries {
        let page_id = match entry.page {
            PageRef::Source(idx) => {
                let source_page_id = *page_ids.get(idx).ok_or_else(|| {
                    ImposeError::Invariant(format!(
                        "Physical entry references page {} but source has {}",
                        idx,
                        page_ids.len()
                    ))
                })?;
                copy_page(&mut output, source, source_page_id, pages_tree_id, &mut cache)?
            }
            PageRef::Blank => create_blank_page(&mut output, options.paper_size, pages_tree_id)?,
        };

        if entry.rotated {
            rotate_page(&mut output, page_id)?;
        }

        page_refs.push(Object::Reference(page_id));
    }

    finalize_document(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Copy one source page into the output document, re-parented.
///
/// Contents, resources, and annotations are copied deep so the output
/// stands alone. The page maps to its copy in the cache before any key is
/// copied: annotations carry a `/P` back-reference to their own page, which
/// must resolve to the copy rather than re-enter the page. The physical
/// order is a permutation, so each source page is copied exactly once and
/// the cached mapping stays valid.
fn copy_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    parent_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let new_page_id = output.new_object_id();
    cache.insert(page_id, new_page_id);

    let mut new_dict = Dictionary::new();
    for (key, value) in page_dict.iter() {
        if key == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    new_dict.set("Parent", Object::Reference(parent_id));

    output
        .objects
        .insert(new_page_id, Object::Dictionary(new_dict));
    Ok(new_page_id)
}

/// Add 180° to a page's rotation
fn rotate_page(output: &mut Document, page_id: ObjectId) -> Result<()> {
    let page_dict = output.get_object_mut(page_id)?.as_dict_mut()?;
    let current = page_dict
        .get(b"Rotate")
        .ok()
        .and_then(|obj| obj.as_i64().ok())
        .unwrap_or(0);
    page_dict.set("Rotate", Object::Integer((current + 180) % 360));
    Ok(())
}

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the output id before recursing so reference cycles
            // resolve through the cache instead of recursing without end
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

/// Create pages tree and catalog, finalize document structure
fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
