//! Asset-bundle texture inspection library.
//!
//! Consumes decoded asset-bundle object dumps, reconstructs the logical
//! container paths objects were published under, classifies textures, and
//! assembles a JSON report over the result.

pub mod asset;
