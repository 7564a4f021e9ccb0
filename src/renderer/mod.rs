//! SVG renderer for generating markup from rendered icon trees
//!
//! This module takes an [`SvgElement`](crate::SvgElement) tree and produces
//! an SVG string, optionally wrapped in a data URI.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, to_data_uri};
