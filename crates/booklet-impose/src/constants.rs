//! Shared constants for booklet imposition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Paper Geometry
// =============================================================================

/// A4 width in millimeters
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 height in millimeters
pub const A4_HEIGHT_MM: f32 = 297.0;

// =============================================================================
// Signature Policy
// =============================================================================

/// Logical pages carried by one physical sheet (2 per side, duplex)
pub const PAGES_PER_SHEET: usize = 4;

/// Default number of physical sheets per signature
pub const DEFAULT_PAPERS_PER_SIGNATURE: usize = 10;

/// Default lower bound for papers per signature
pub const DEFAULT_MIN_PAPERS_PER_SIGNATURE: usize = 8;

/// Default upper bound for papers per signature
pub const DEFAULT_MAX_PAPERS_PER_SIGNATURE: usize = 12;

/// Default blank cover pages added symmetrically at front and back
pub const DEFAULT_COVER_PAGES: usize = 2;
