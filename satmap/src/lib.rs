#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

pub mod camera;
mod config;
mod controller;
mod error;
pub mod host;
pub mod location;
pub mod overlay;
mod position;
pub mod sources;
pub mod style;
mod zoom;

pub use config::MapConfig;
pub use controller::{Readiness, ViewController};
pub use error::Error;
pub use position::{Position, lat_lon, lon_lat, to_lat_lon};
pub use style::{StyleBuilder, StyleDescriptor, StyleDocument};
pub use zoom::{InvalidZoom, MAX_ZOOM, Zoom, ZoomRange};
