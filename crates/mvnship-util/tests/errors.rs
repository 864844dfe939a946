use mvnship_util::errors::ShipError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = ShipError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_version_error_display() {
    let err = ShipError::Version {
        message: "'1.2' is not MAJOR.MINOR.PATCH".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid version: '1.2' is not MAJOR.MINOR.PATCH"
    );
}

#[test]
fn test_tool_missing_display() {
    let err = ShipError::ToolMissing {
        tool: "gpg".to_string(),
    };
    assert_eq!(err.to_string(), "`gpg` was not found on PATH");
}

#[test]
fn test_command_error_display_with_detail() {
    let err = ShipError::Command {
        program: "mvn".to_string(),
        status: "exit code 1".to_string(),
        detail: ": BUILD FAILURE".to_string(),
    };
    assert_eq!(err.to_string(), "`mvn` failed (exit code 1): BUILD FAILURE");
}

#[test]
fn test_generic_error_display() {
    let err = ShipError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[cfg(unix)]
#[test]
fn test_command_failed_from_output() {
    let output = std::process::Command::new("sh")
        .args(["-c", "echo 'no such repo' >&2; exit 3"])
        .output()
        .unwrap();
    let err = ShipError::command_failed("gh", &output);
    assert_eq!(err.to_string(), "`gh` failed (exit code 3): no such repo");
}

#[cfg(unix)]
#[test]
fn test_command_failed_without_stderr() {
    let output = std::process::Command::new("sh")
        .args(["-c", "exit 2"])
        .output()
        .unwrap();
    let err = ShipError::command_failed("gpg", &output);
    assert_eq!(err.to_string(), "`gpg` failed (exit code 2)");
}
