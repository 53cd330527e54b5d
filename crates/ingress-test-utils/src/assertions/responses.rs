//! Assertion utilities for HTTP responses received through the ingress.

use thiserror::Error;

/// Status code a response is expected to carry when none is given.
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

/// Error type for response status validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusCodeError {
    #[error("Response {position} status code mismatch: expected {expected}, got {actual}")]
    Mismatch { position: usize, expected: u16, actual: u16 },
}

/// Anything that carries an HTTP status code.
pub trait HasStatusCode {
    fn status_code(&self) -> u16;
}

impl HasStatusCode for u16 {
    fn status_code(&self) -> u16 {
        *self
    }
}

impl HasStatusCode for reqwest::Response {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

impl HasStatusCode for reqwest::StatusCode {
    fn status_code(&self) -> u16 {
        self.as_u16()
    }
}

impl<B> HasStatusCode for axum::http::Response<B> {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

impl HasStatusCode for axum::http::StatusCode {
    fn status_code(&self) -> u16 {
        self.as_u16()
    }
}

impl<T: HasStatusCode + ?Sized> HasStatusCode for &T {
    fn status_code(&self) -> u16 {
        (**self).status_code()
    }
}

/// Asserts that both responses were answered with 200.
pub fn assert_response_codes<R1, R2>(resp_1: &R1, resp_2: &R2) -> Result<(), StatusCodeError>
where
    R1: HasStatusCode + ?Sized,
    R2: HasStatusCode + ?Sized,
{
    assert_response_codes_with(resp_1, resp_2, DEFAULT_EXPECTED_STATUS, DEFAULT_EXPECTED_STATUS)
}

/// Asserts the status codes of two responses.
///
/// # Arguments
///
/// * `resp_1` - The first response
/// * `resp_2` - The second response
/// * `code_1` - The status code expected on the first response
/// * `code_2` - The status code expected on the second response
///
/// # Returns
///
/// * `Ok(())` - If both responses carry their expected status code
/// * `Err(StatusCodeError)` - For the first response that does not
pub fn assert_response_codes_with<R1, R2>(
    resp_1: &R1,
    resp_2: &R2,
    code_1: u16,
    code_2: u16,
) -> Result<(), StatusCodeError>
where
    R1: HasStatusCode + ?Sized,
    R2: HasStatusCode + ?Sized,
{
    check_status(1, resp_1.status_code(), code_1)?;
    check_status(2, resp_2.status_code(), code_2)
}

fn check_status(position: usize, actual: u16, expected: u16) -> Result<(), StatusCodeError> {
    if actual != expected {
        return Err(StatusCodeError::Mismatch {
            position,
            expected,
            actual,
        });
    }

    Ok(())
}
