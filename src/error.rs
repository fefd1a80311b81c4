// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors surfaced by the binning engine, the joint histogram builder and the batch driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiError {
    /// Two variables (or a variable and a supplied table) disagree on the number of samples.
    #[error("dimension mismatch: expected {expected} samples, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Zero-variance variable. Only returned when the caller asked for strict handling;
    /// by default such variables fall back to a single bin.
    #[error("variable {variable} has zero variance")]
    DegenerateInput { variable: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("batch was cancelled before completion")]
    Cancelled,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, MiError>;
