use booklet_impose::*;
use std::path::PathBuf;

#[test]
fn test_validation_no_input_file() {
    let options = BookletOptions::default();
    let result = options.validate();
    assert!(result.is_err());
    match result {
        Err(ImposeError::Config(msg)) => {
            assert!(msg.contains("No input file"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_papers_per_signature_bounds() {
    let mut options = BookletOptions {
        input_file: PathBuf::from("test.pdf"),
        ..Default::default()
    };

    // Defaults are within bounds
    assert!(options.validate().is_ok());

    // Below the default minimum of 8
    options.papers_per_signature = 7;
    assert!(options.validate().is_err());

    // Above the default maximum of 12
    options.papers_per_signature = 13;
    assert!(options.validate().is_err());

    // Boundary values are allowed
    options.papers_per_signature = 8;
    assert!(options.validate().is_ok());
    options.papers_per_signature = 12;
    assert!(options.validate().is_ok());

    // Earlier policy revision allowed 6 papers
    options.signature_bounds = SignatureBounds::new(6, 12);
    options.papers_per_signature = 6;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_degenerate_bounds() {
    let mut options = BookletOptions {
        input_file: PathBuf::from("test.pdf"),
        ..Default::default()
    };

    options.signature_bounds = SignatureBounds::new(0, 12);
    assert!(options.validate().is_err());

    options.signature_bounds = SignatureBounds::new(12, 8);
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_paper_dimensions() {
    let mut options = BookletOptions {
        input_file: PathBuf::from("test.pdf"),
        ..Default::default()
    };

    options.paper_size = PaperSize::Custom {
        width_mm: 0.0,
        height_mm: 297.0,
    };
    assert!(options.validate().is_err());

    options.paper_size = PaperSize::Custom {
        width_mm: 210.0,
        height_mm: 297.0,
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_signature_size() {
    let options = BookletOptions {
        input_file: PathBuf::from("test.pdf"),
        papers_per_signature: 10,
        ..Default::default()
    };
    assert_eq!(options.signature_size(), 40);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        input_file: PathBuf::from("input.pdf"),
        papers_per_signature: 9,
        signature_bounds: SignatureBounds::new(6, 12),
        cover_pages: 1,
        rotate_policy: RotatePolicy::RotateOuterPair,
        paper_size: PaperSize::A5,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = BookletOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}
