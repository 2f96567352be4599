use crate::constants::PAGES_PER_SHEET;
use crate::engine::compute_padding;
use crate::options::BookletOptions;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for a booklet imposition
pub fn calculate_statistics(
    document: &Document,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;

    let source_pages = document.get_pages().len();
    if source_pages == 0 {
        return Err(ImposeError::NoPages);
    }

    let signature_size = options.signature_size();
    let plan = compute_padding(source_pages, options.cover_pages, signature_size)?;

    let padded_pages = plan.padded_total(source_pages);
    let signatures = padded_pages / signature_size;
    let sheets_per_signature = signature_size / PAGES_PER_SHEET;
    let output_sheets = signatures * sheets_per_signature;

    Ok(BookletStatistics {
        source_pages,
        cover_pages_added: plan.leading_fillers + plan.trailing_cover_fillers,
        filler_pages_added: plan.signature_fillers,
        padded_pages,
        signatures,
        sheets_per_signature,
        output_sheets,
        // One output page per sheet-face-quadrant
        output_pages: padded_pages,
    })
}
