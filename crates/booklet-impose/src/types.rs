use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invariant violation: {0}")]
    Invariant(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// A logical page in the padded reading-order sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageRef {
    /// Index into the source document's page list (0-based)
    Source(usize),
    /// Blank filler page (cover padding or signature padding)
    Blank,
}

impl PageRef {
    /// Source index, if this refers to a real page
    pub fn source_index(self) -> Option<usize> {
        match self {
            PageRef::Source(idx) => Some(idx),
            PageRef::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, PageRef::Blank)
    }
}

/// One entry of the physical output sequence: which page to write next,
/// and whether it must be turned 180° before placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalEntry {
    pub page: PageRef,
    pub rotated: bool,
}

impl PhysicalEntry {
    pub fn upright(page: PageRef) -> Self {
        Self {
            page,
            rotated: false,
        }
    }
}

/// Rotation applied to the outer pair of each sheet.
///
/// Whether the outer emissions need a 180° turn depends on how the duplexer
/// flips the sheet, so both behaviors are kept selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotatePolicy {
    /// Leave every page upright (duplexer performs the inversion)
    #[default]
    None,
    /// Rotate the two outer entries of each sheet by 180°
    RotateOuterPair,
}

/// Allowed range for papers per signature.
///
/// More papers per signature than the maximum folds poorly; fewer than the
/// minimum wastes staples. The range is a product policy, not a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureBounds {
    pub min_papers: usize,
    pub max_papers: usize,
}

impl Default for SignatureBounds {
    fn default() -> Self {
        Self {
            min_papers: crate::constants::DEFAULT_MIN_PAPERS_PER_SIGNATURE,
            max_papers: crate::constants::DEFAULT_MAX_PAPERS_PER_SIGNATURE,
        }
    }
}

impl SignatureBounds {
    pub fn new(min_papers: usize, max_papers: usize) -> Self {
        Self {
            min_papers,
            max_papers,
        }
    }

    pub fn contains(&self, papers: usize) -> bool {
        self.min_papers <= papers && papers <= self.max_papers
    }
}

/// Blank pages to insert around and after the source document so the padded
/// total lands on a signature boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingPlan {
    /// Blank cover pages at the very front
    pub leading_fillers: usize,
    /// Blank cover pages at the very back (symmetric with the front)
    pub trailing_cover_fillers: usize,
    /// Additional blanks at the end to reach a multiple of the signature size
    pub signature_fillers: usize,
}

impl PaddingPlan {
    /// Total number of blank pages the plan inserts
    pub fn total_fillers(&self) -> usize {
        self.leading_fillers + self.trailing_cover_fillers + self.signature_fillers
    }

    /// Padded page count for a document of `total_pages` source pages
    pub fn padded_total(&self, total_pages: usize) -> usize {
        total_pages + self.total_fillers()
    }
}

/// Paper geometry for blank filler pages
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A4,
    A5,
    Custom { width_mm: f32, height_mm: f32 },
}

impl Default for PaperSize {
    fn default() -> Self {
        PaperSize::A4
    }
}

impl PaperSize {
    /// Dimensions in millimeters (portrait)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }
}

/// Statistics about a booklet imposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletStatistics {
    /// Pages in the source document
    pub source_pages: usize,
    /// Blank cover pages added (front + back)
    pub cover_pages_added: usize,
    /// Blank pages added at the end to fill the last signature
    pub filler_pages_added: usize,
    /// Page count after all padding
    pub padded_pages: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Physical sheets of paper per signature
    pub sheets_per_signature: usize,
    /// Total physical sheets across all signatures
    pub output_sheets: usize,
    /// Pages written to the output container (one per sheet-face-quadrant)
    pub output_pages: usize,
}
