//! Container-path resolution and texture classification over decoded
//! asset-bundle object graphs.

mod atlas;
mod classify;
mod container;
mod error;
mod export;
mod graph;
mod object;
mod report;

/// Atlas grouping types and entry points.
pub use atlas::{AtlasGroup, AtlasGrouping};
/// Texture dimension and pixel-format classification.
pub use classify::{is_compressed, is_pot};
/// Container-path index.
pub use container::ContainerIndex;
/// Error and result aliases.
pub use error::{AssetError, Result};
/// Exporter seam and the raw payload implementation.
pub use export::{RawDumpExporter, TextureExporter};
/// Object arena and folder loading.
pub use graph::{AssetFile, DUMP_SUFFIX, LoadOutcome, ObjectGraph, SkippedFile, load_folder};
/// Decoded object data model.
pub use object::{
	AssetObject, AtlasData, BundleData, ContainerEntry, IndirectRef, ObjectHandle, ObjectKind, ResourceData, ResourceEntry,
	SpriteData, TextureData,
};
/// Report assembly types and entry points.
pub use report::{AtlasRecord, PathPolicy, TextureRecord, TextureReport, build_report, choose_primary_path, texture_records};
