// Copyright 2025 Lars Brubaker
// License: MIT

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    /// A single attempt placed only part of the triangles at this scale.
    /// The scale search treats this as "try smaller", not as a failure.
    #[error("only {placed} of {total} triangles fit at scale {scale}")]
    InsufficientArea {
        placed: usize,
        total: usize,
        scale: f32,
    },

    #[error("no scale fits {triangles} triangles into a {width}x{height} atlas after {attempts} attempts")]
    NoFeasibleScale {
        triangles: usize,
        width: u32,
        height: u32,
        attempts: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[cfg(feature = "debug-image")]
    #[error("failed to write debug image: {0}")]
    DebugImage(#[from] image::ImageError),
}

pub type PackResult<T> = std::result::Result<T, PackError>;
