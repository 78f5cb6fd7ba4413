//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   error types.
//! - Map client errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use tenantctl_client::ClientError;

/// Structured exit codes for tenantctl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure, including reported step failures.
    GeneralError = 1,

    /// Invalid credentials or insufficient privileges.
    AuthenticationFailed = 2,

    /// Network, TLS, timeout, or URL failure.
    ConnectionError = 3,

    /// A referenced remote resource does not exist.
    NotFound = 4,

    /// Invalid input or configuration; fix the invocation, do not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit()`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        let root = err.root();
        if root.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }
        if root.is_not_found() {
            return ExitCode::NotFound;
        }
        match root {
            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::InvalidUrl(_) | ClientError::Tls(_) => ExitCode::ConnectionError,
            ClientError::Http(e) if e.is_connect() || e.is_timeout() => ExitCode::ConnectionError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait mapping an `anyhow::Error` chain onto an exit code.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        match self.downcast_ref::<ClientError>() {
            Some(client_error) => ExitCode::from(client_error),
            None => ExitCode::GeneralError,
        }
    }
}
