use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

/// Structured rejection payload returned to callers for refused moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub code: String,
    pub detail: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Config { detail } => detail.clone(),
        }
    }

    /// Client-facing rejection with code and detail.
    pub fn rejection(&self) -> Rejection {
        Rejection {
            code: self.code().as_str().to_string(),
            detail: self.detail(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

fn validation_code(kind: &ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::InvalidCard => ErrorCode::InvalidCard,
        ValidationKind::NotPlayersTurn => ErrorCode::NotPlayersTurn,
        ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
        ValidationKind::CaptureMandatory => ErrorCode::CaptureMandatory,
        ValidationKind::CardNotOnTable => ErrorCode::CardNotOnTable,
        ValidationKind::CaptureSumMismatch => ErrorCode::CaptureSumMismatch,
        ValidationKind::ComboNotAllowed => ErrorCode::ComboNotAllowed,
        ValidationKind::InvalidCaptureCombination => ErrorCode::InvalidCaptureCombination,
        ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
        ValidationKind::InvalidTargetScore => ErrorCode::InvalidTargetScore,
        ValidationKind::GameFinished => ErrorCode::GameFinished,
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: validation_code(&kind),
                detail,
            },
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::StaleMove => ErrorCode::StaleMove,
                    ConflictKind::SessionClosed => ErrorCode::SessionClosed,
                    ConflictKind::SessionExists => ErrorCode::SessionExists,
                };
                AppError::Conflict { code, detail }
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Session => ErrorCode::SessionNotFound,
                };
                AppError::NotFound { code, detail }
            }
        }
    }
}
