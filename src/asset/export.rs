use std::fs;
use std::path::Path;

use crate::asset::{Result, TextureData};

/// Collaborator that writes one texture's pixel data under a directory.
///
/// Pixel-format decoding is an external capability; implementations
/// receive the still-encoded payload and decide what to do with it.
pub trait TextureExporter {
	/// Write `texture`'s pixel payload under `out_dir`, creating the
	/// directory when absent.
	fn export(&self, texture: &TextureData, out_dir: &Path) -> Result<()>;
}

/// Exporter that dumps the raw encoded pixel payload to `<name>.bin`.
///
/// Stands in for a real format decoder: downstream tooling that knows
/// the pixel format can decode the dumped bytes offline.
#[derive(Debug, Default)]
pub struct RawDumpExporter;

impl TextureExporter for RawDumpExporter {
	fn export(&self, texture: &TextureData, out_dir: &Path) -> Result<()> {
		fs::create_dir_all(out_dir)?;
		fs::write(out_dir.join(format!("{}.bin", texture.name)), &texture.pixel_data)?;
		Ok(())
	}
}
