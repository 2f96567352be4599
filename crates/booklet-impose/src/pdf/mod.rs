//! PDF-facing collaborators of the imposition engine
//!
//! The engine itself only reorders page indices; this module supplies the
//! page source (a loaded `lopdf` document), the blank page provider, and
//! the output sink that persists the reordered sequence.

mod assemble;
mod blank;
mod io;

pub use io::{load_pdf, save_pdf};

use crate::engine::build_imposition;
use crate::options::BookletOptions;
use crate::types::*;
use lopdf::{Document, ObjectId};

/// Impose a document into booklet order.
///
/// Validates options, computes the physical write order, and assembles a
/// new document with cover and filler blanks inserted and rotations
/// applied. The input document is not modified.
pub async fn build_booklet(document: &Document, options: &BookletOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || build_booklet_sync(&document, &options)).await?
}

fn build_booklet_sync(document: &Document, options: &BookletOptions) -> Result<Document> {
    let pages = document.get_pages();
    let page_ids: Vec<ObjectId> = pages.values().copied().collect();

    if page_ids.is_empty() {
        return Err(ImposeError::NoPages);
    }

    let entries = build_imposition(page_ids.len(), options)?;
    assemble::assemble_booklet(document, &page_ids, &entries, options)
}
