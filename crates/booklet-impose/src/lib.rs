pub mod constants;
pub mod engine;
mod options;
mod pdf;
mod stats;
mod types;

pub use options::*;
pub use pdf::{build_booklet, load_pdf, save_pdf};
pub use stats::calculate_statistics;
pub use types::*;
