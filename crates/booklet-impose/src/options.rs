use crate::constants::{DEFAULT_COVER_PAGES, DEFAULT_PAPERS_PER_SIGNATURE, PAGES_PER_SHEET};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookletOptions {
    // Input
    pub input_file: PathBuf,

    // Signature policy
    pub papers_per_signature: usize,
    pub signature_bounds: SignatureBounds,

    // Cover padding (blank pages added symmetrically at front and back)
    pub cover_pages: usize,

    // Rotation of the outer pair on each sheet
    pub rotate_policy: RotatePolicy,

    // Geometry of blank filler pages
    pub paper_size: PaperSize,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            papers_per_signature: DEFAULT_PAPERS_PER_SIGNATURE,
            signature_bounds: SignatureBounds::default(),
            cover_pages: DEFAULT_COVER_PAGES,
            rotate_policy: RotatePolicy::default(),
            paper_size: PaperSize::default(),
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Logical pages per signature (4 per physical sheet)
    pub fn signature_size(&self) -> usize {
        self.papers_per_signature * PAGES_PER_SHEET
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(ImposeError::Config("No input file specified".to_string()));
        }

        let bounds = &self.signature_bounds;
        if bounds.min_papers == 0 || bounds.min_papers > bounds.max_papers {
            return Err(ImposeError::Config(format!(
                "Invalid signature bounds: min {} must be positive and at most max {}",
                bounds.min_papers, bounds.max_papers
            )));
        }

        if !bounds.contains(self.papers_per_signature) {
            return Err(ImposeError::Config(format!(
                "Papers per signature must be between {} and {}, got {}",
                bounds.min_papers, bounds.max_papers, self.papers_per_signature
            )));
        }

        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(ImposeError::Config(
                "Paper dimensions must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
