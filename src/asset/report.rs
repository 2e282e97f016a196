use serde::Serialize;

use crate::asset::{AtlasGrouping, ContainerIndex, ObjectGraph, ObjectHandle, ObjectKind, classify};

/// Extension preference used by the primary-path heuristic.
///
/// The defaults mirror a common asset-naming convention; projects whose
/// on-disk names diverge from internal texture names can swap the list
/// without touching the heuristic itself.
#[derive(Debug, Clone)]
pub struct PathPolicy {
	/// Extensions tried in order by the exact-filename rule.
	pub extensions: Vec<String>,
}

impl Default for PathPolicy {
	fn default() -> Self {
		Self {
			extensions: ["jpg", "tga", "png", "psd", "bmp"].map(str::to_owned).to_vec(),
		}
	}
}

/// Per-texture report row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureRecord {
	/// Internal texture name.
	pub name: String,
	/// Every container path resolved for this texture.
	pub path: Vec<String>,
	/// Best-guess display path chosen by the heuristic.
	pub possible_path: String,
	/// Declared class kind.
	pub class_id: String,
	/// Dimension string, `<width> x <height>`.
	pub size: String,
	/// Canonical pixel-format name.
	pub format: String,
	/// Number of mip levels.
	pub mips_count: u32,
	/// Whether mip-mapping is enabled.
	pub mipmap: bool,
	/// Whether the dimensions fail the power-of-two test.
	pub npot: bool,
	/// Raw object size plus streamed payload size, in bytes.
	pub byte_size: u64,
}

/// One atlas entry as rendered in the report document.
#[derive(Debug, Clone, Serialize)]
pub struct AtlasRecord {
	/// Atlas name.
	pub name: String,
	/// Source texture names resolved from the packed sprites.
	pub textures: Vec<String>,
}

/// Full report document.
#[derive(Debug, Clone, Serialize)]
pub struct TextureReport {
	/// All texture records, sorted by descending byte size.
	pub textures: Vec<TextureRecord>,
	/// Records whose pixel format is not block-compressed.
	pub uncompressed: Vec<TextureRecord>,
	/// Records whose dimensions fail the power-of-two test.
	pub npot: Vec<TextureRecord>,
	/// Atlas decomposition into source texture names.
	pub atlases: Vec<AtlasRecord>,
}

/// Choose the best-guess display path for a texture.
///
/// Rules, in order: a path whose final segment equals `<name>.<ext>` for
/// the policy's extensions (extension preference outranks path order);
/// any path containing the name as a substring; a synthesized
/// `MaybeAtlas/<name>` fallback.
pub fn choose_primary_path(name: &str, paths: &[String], policy: &PathPolicy) -> String {
	for ext in &policy.extensions {
		let want = format!("{name}.{ext}");
		let hit = paths.iter().find(|path| path.rsplit('/').next() == Some(want.as_str()));
		if let Some(path) = hit {
			return path.clone();
		}
	}

	if let Some(path) = paths.iter().find(|path| path.contains(name)) {
		return path.clone();
	}

	format!("MaybeAtlas/{name}")
}

/// Build one record per Texture2D object, in enumeration order.
///
/// Handles are returned alongside the records so callers can reach back
/// to the texture's pixel payload for export.
pub fn texture_records(graph: &ObjectGraph, index: &ContainerIndex, policy: &PathPolicy) -> Vec<(ObjectHandle, TextureRecord)> {
	let mut records = Vec::new();

	for object in graph.objects() {
		let ObjectKind::Texture2D(texture) = &object.kind else {
			continue;
		};

		let paths = index.paths(object.handle).to_vec();
		let possible_path = choose_primary_path(&texture.name, &paths, policy);
		let byte_size = object.byte_size + texture.stream_size.unwrap_or(0);

		records.push((
			object.handle,
			TextureRecord {
				name: texture.name.clone(),
				path: paths,
				possible_path,
				class_id: object.kind.class_name().to_owned(),
				size: format!("{} x {}", texture.width, texture.height),
				format: texture.format.clone(),
				mips_count: texture.mip_count,
				mipmap: texture.mip_map,
				npot: !classify::is_pot(texture.width, texture.height),
				byte_size,
			},
		));
	}

	records
}

/// Assemble the report document from per-texture records.
///
/// The npot and uncompressed views filter from enumeration order, then
/// all three views are stable-sorted by descending byte size so equal
/// sizes keep their relative input order across runs.
pub fn build_report(records: Vec<TextureRecord>, atlases: &AtlasGrouping) -> TextureReport {
	let mut textures = records;
	let mut npot: Vec<_> = textures.iter().filter(|record| record.npot).cloned().collect();
	let mut uncompressed: Vec<_> = textures
		.iter()
		.filter(|record| !classify::is_compressed(&record.format))
		.cloned()
		.collect();

	sort_by_size_descending(&mut textures);
	sort_by_size_descending(&mut npot);
	sort_by_size_descending(&mut uncompressed);

	let atlases = atlases
		.groups()
		.iter()
		.map(|group| AtlasRecord {
			name: group.name.clone(),
			textures: group.textures.clone(),
		})
		.collect();

	TextureReport {
		textures,
		uncompressed,
		npot,
		atlases,
	}
}

fn sort_by_size_descending(records: &mut [TextureRecord]) {
	records.sort_by(|left, right| right.byte_size.cmp(&left.byte_size));
}
