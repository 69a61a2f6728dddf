// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Viewer error types
use thiserror::Error;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Main error type for the viewer core
///
/// Geometry errors are returned synchronously before any memory access
/// and never produce a partial raster. Truncated Copper programs are
/// not errors: decoding returns a partial [`CopperList`] with its
/// `truncated` flag set instead (the snapshot may be mid-update, and a
/// partial view is more useful to the user than none).
///
/// [`CopperList`]: crate::core::copper::CopperList
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Memory dump size mismatch: {got} bytes (expected {expected})")]
    SnapshotSize { expected: usize, got: usize },

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bitmap descriptor validation errors
///
/// All of these are rejected before any address arithmetic is done.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Bitmap has no bitplanes")]
    NoPlanes,

    #[error("Bitmap has {0} bitplanes (hardware maximum is 8)")]
    TooManyPlanes(u32),

    #[error("Bitmap dimensions {width}x{height} are empty")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("Bitmap width {0} is not a multiple of 8 pixels")]
    UnalignedWidth(u32),
}
