use drivetime_core::errors::{DriveTimeError, DriveTimeResult};

#[test]
fn test_drive_time_error_display() {
    let not_found = DriveTimeError::NotFound("Instructor not found".to_string());
    let validation = DriveTimeError::Validation("Invalid input".to_string());
    let internal = DriveTimeError::Internal(eyre::eyre!("availability lock poisoned"));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Instructor not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_eyre_report_converts_to_internal() {
    let report = eyre::eyre!("something went sideways");
    let error: DriveTimeError = report.into();

    assert!(matches!(error, DriveTimeError::Internal(_)));
    assert!(error.to_string().contains("something went sideways"));
}

#[test]
fn test_drive_time_result() {
    let result: DriveTimeResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: DriveTimeResult<i32> = Err(DriveTimeError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
