use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "booklet", about = "Impose a PDF into saddle-stitch booklet order", version)]
struct Cli {
    /// Input PDF file
    #[arg(short, long)]
    input: PathBuf,

    /// Output PDF file (not needed with --stats-only)
    #[arg(short, long, required_unless_present = "stats_only")]
    output: Option<PathBuf>,

    /// Physical sheets of paper per signature
    #[arg(long, default_value = "10")]
    papers_per_signature: usize,

    /// Minimum allowed papers per signature
    #[arg(long, default_value = "8")]
    min_papers: usize,

    /// Maximum allowed papers per signature
    #[arg(long, default_value = "12")]
    max_papers: usize,

    /// Blank cover pages added at front and back
    #[arg(long, default_value = "2")]
    cover_pages: usize,

    /// Rotation applied to the outer pair of each sheet
    #[arg(long, default_value = "none", value_enum)]
    rotate: RotateArg,

    /// Paper size for blank filler pages
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RotateArg {
    None,
    OuterPair,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
}

impl From<RotateArg> for booklet_impose::RotatePolicy {
    fn from(arg: RotateArg) -> Self {
        match arg {
            RotateArg::None => Self::None,
            RotateArg::OuterPair => Self::RotateOuterPair,
        }
    }
}

impl From<PaperArg> for booklet_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = booklet_impose::BookletOptions {
        input_file: cli.input.clone(),
        papers_per_signature: cli.papers_per_signature,
        signature_bounds: booklet_impose::SignatureBounds::new(cli.min_papers, cli.max_papers),
        cover_pages: cli.cover_pages,
        rotate_policy: cli.rotate.into(),
        paper_size: cli.paper.into(),
    };

    let document = booklet_impose::load_pdf(&cli.input).await?;

    let stats = booklet_impose::calculate_statistics(&document, &options)?;
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Cover pages added: {}", stats.cover_pages_added);
    println!("  Filler pages added: {}", stats.filler_pages_added);
    println!("  Padded pages: {}", stats.padded_pages);
    println!("  Signatures: {}", stats.signatures);
    println!("  Sheets per signature: {}", stats.sheets_per_signature);
    println!("  Output sheets: {}", stats.output_sheets);

    if cli.stats_only {
        return Ok(());
    }

    let output = cli
        .output
        .ok_or_else(|| anyhow::anyhow!("--output is required unless --stats-only is set"))?;

    let booklet = booklet_impose::build_booklet(&document, &options).await?;
    booklet_impose::save_pdf(booklet, &output).await?;
    println!("Imposed → {}", output.display());

    Ok(())
}
