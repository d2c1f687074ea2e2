//! Quality-gated multi-frame facial measurement engine.
//!
//! A burst of camera frames flows strictly downward: detector output →
//! geometry → per-frame quality gate → multi-frame fusion → named
//! measurements with uncertainty and confidence → confidence-weighted
//! baseline and trend across captures. The neutral-language sanitizer
//! is an orthogonal stage for any text derived from measurements.
//!
//! The crate exposes value types and pure functions; the camera, the
//! landmark detector's lifecycle, storage, and UI all live with the
//! caller.

pub mod baseline;
pub mod capture;
pub mod detection;
pub mod language;
pub mod measurement;
pub mod pipeline;
pub mod quality;
pub mod shared;
