//! Core processing building blocks: centered crop, square resize, the render
//! pipeline, and save helpers. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
