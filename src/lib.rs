// tri-atlas: triangle lightmap atlas packing
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod atlas;
pub mod config;
pub mod error;
pub mod measure;
pub mod packer;
pub mod raster;
pub mod search;
pub mod wavefront;

pub use atlas::{positions_from_flat, AtlasPacker};
pub use config::{FlipTieBreak, PackConfig};
pub use error::{PackError, PackResult};
pub use measure::{measure, measure_triangle, Footprint};
pub use packer::{pack, Orientation, PackOutcome, Placement, RowSpan};
pub use raster::LineCells;
pub use search::{pack_at_scale, pack_to_fit, FitResult, MAX_ATLAS_DIMENSION};
pub use wavefront::{Direction, Wavefront};

#[cfg(feature = "debug-image")]
pub use packer::debug::{debug_image, save_debug_image};
