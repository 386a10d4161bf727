// ABOUTME: Unified error type and error codes for training plan generation
// ABOUTME: Maps engine failures to stable codes that the service layer turns into responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure the planning engine can report is an [`AppError`] carrying an
//! [`ErrorCode`]. Errors are deterministic input or configuration problems, so
//! nothing in the engine retries them; callers map them to user-facing
//! responses through [`ErrorCode::http_status`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the planning engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No goals resolved, empty goal list, or malformed request values
    InvalidInput,
    /// More weekly sessions requested than available weekdays allow
    OverCapacity,
    /// A (sport, workout type) pair has no duration or structure template
    UnsupportedCombination,
    /// No weekly plan covers the requested date
    PlanNotFound,
    /// Unknown generator version or malformed configuration value
    ConfigurationError,
    /// Failure inside a collaborator (storage, serialization)
    InternalError,
}

impl ErrorCode {
    /// HTTP status the surrounding service should answer with
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::PlanNotFound => 404,
            Self::OverCapacity => 409,
            Self::UnsupportedCombination => 422,
            Self::ConfigurationError | Self::InternalError => 500,
        }
    }

    /// User-friendly description of this error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::OverCapacity => "The requested sessions do not fit the available weekdays",
            Self::UnsupportedCombination => {
                "No workout template exists for this sport and workout type"
            }
            Self::PlanNotFound => "No training plan covers the requested date",
            Self::ConfigurationError => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the planning engine
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{}: {message}", code.description())]
pub struct AppError {
    /// Error class
    pub code: ErrorCode,
    /// Human-readable detail
    pub message: String,
    /// Identifier of the resource involved, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

/// Result alias used across all planning crates
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
        }
    }

    /// Attach the identifier of the resource involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Weekly session count exceeds the available weekdays
    #[must_use]
    pub fn over_capacity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::OverCapacity, message)
    }

    /// Missing workout template
    #[must_use]
    pub fn unsupported_combination(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedCombination, message)
    }

    /// No weekly plan for the requested date
    #[must_use]
    pub fn plan_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PlanNotFound, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigurationError, message)
    }

    /// Internal collaborator failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::PlanNotFound.http_status(), 404);
        assert_eq!(ErrorCode::OverCapacity.http_status(), 409);
        assert_eq!(ErrorCode::UnsupportedCombination.http_status(), 422);
        assert_eq!(ErrorCode::ConfigurationError.http_status(), 500);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::over_capacity("8 running sessions over 4 weekdays");
        let rendered = error.to_string();
        assert!(rendered.starts_with("The requested sessions do not fit"));
        assert!(rendered.ends_with("8 running sessions over 4 weekdays"));
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let error = AppError::plan_not_found("week 12").with_resource_id("plan-1");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "PLAN_NOT_FOUND");
        assert_eq!(json["resource_id"], "plan-1");
    }
}
