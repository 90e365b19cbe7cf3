#![cfg(feature = "dev")]

use bgfinder_rs::internals::primitives::errors::BackgroundError;

#[test]
fn test_background_error_display() {
    // EmptySample
    let err = BackgroundError::EmptySample;
    assert_eq!(format!("{}", err), "Sample is empty");

    // InvalidNumericValue
    let err = BackgroundError::InvalidNumericValue("sample[3]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: sample[3]=NaN");

    // TooFewPoints
    let err = BackgroundError::TooFewPoints { got: 1, min: 3 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 3");

    // DegenerateSample
    let err = BackgroundError::DegenerateSample("zero standard deviation");
    assert_eq!(
        format!("{}", err),
        "Degenerate sample: zero standard deviation"
    );

    // UnknownMethod
    let err = BackgroundError::UnknownMethod("bogus".to_string());
    assert_eq!(format!("{}", err), "Unknown method: bogus");

    // InvalidBins
    let err = BackgroundError::InvalidBins(2.0);
    assert_eq!(
        format!("{}", err),
        "Invalid bin count: 2 (must be an integer in 3..=16777216)"
    );

    // InvalidScale
    let err = BackgroundError::InvalidScale(-0.1);
    assert_eq!(
        format!("{}", err),
        "Invalid scale factor: -0.1 (must be > 0 and finite)"
    );

    // InvalidStdLimit
    let err = BackgroundError::InvalidStdLimit(0.0);
    assert_eq!(
        format!("{}", err),
        "Invalid std limit: 0 (must be > 0 and finite)"
    );

    // InvalidBackup
    let err = BackgroundError::InvalidBackup("smart");
    assert_eq!(
        format!("{}", err),
        "Invalid backup method: smart (cannot back up itself)"
    );

    // InvalidTolerance
    let err = BackgroundError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be > 0 and finite)"
    );

    // NonPositiveMean
    let err = BackgroundError::NonPositiveMean(-5.5);
    assert_eq!(
        format!("{}", err),
        "Non-positive fitted mean: -5.5 (contamination ratio undefined)"
    );

    // OptimizationFailure
    let err = BackgroundError::OptimizationFailure {
        iterations: 400,
        evaluations: 401,
    };
    assert_eq!(
        format!("{}", err),
        "Optimization failed to converge after 400 iterations (401 evaluations)"
    );
}

/// Errors are usable as `std::error::Error` trait objects.
#[test]
fn test_background_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(BackgroundError::EmptySample);
    assert_eq!(err.to_string(), "Sample is empty");
}

/// Errors compare by value.
#[test]
fn test_background_error_equality() {
    assert_eq!(
        BackgroundError::TooFewPoints { got: 2, min: 3 },
        BackgroundError::TooFewPoints { got: 2, min: 3 }
    );
    assert_ne!(BackgroundError::InvalidBins(2.0), BackgroundError::InvalidBins(1.0));
}
