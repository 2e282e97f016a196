use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::asset::{AssetError, AssetObject, IndirectRef, ObjectHandle, ObjectKind, Result};
use crate::asset::{AtlasData, BundleData, ResourceData, SpriteData, TextureData};

/// File name suffix of decoded-object dump documents.
pub const DUMP_SUFFIX: &str = ".assetdump.json";

/// One loaded asset file and the objects decoded from it.
#[derive(Debug, Clone)]
pub struct AssetFile {
	/// Asset file name as declared by the dump.
	pub name: String,
	/// Handles of this file's objects, in dump order.
	pub objects: Vec<ObjectHandle>,
}

/// Arena of decoded objects across all loaded asset files.
///
/// Objects are owned here and indexed by dense [`ObjectHandle`]s; all
/// derived data (paths, groupings, records) lives in parallel structures
/// keyed by those handles.
#[derive(Debug, Default)]
pub struct ObjectGraph {
	objects: Vec<AssetObject>,
	files: Vec<AssetFile>,
	by_ref: HashMap<(u32, i64), ObjectHandle>,
}

impl ObjectGraph {
	/// Create an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an asset file and return its file index.
	pub fn add_file(&mut self, name: impl Into<String>) -> u32 {
		self.files.push(AssetFile {
			name: name.into(),
			objects: Vec::new(),
		});
		(self.files.len() - 1) as u32
	}

	/// Add one decoded object under `file_index` and return its handle.
	///
	/// The first object registered for a given `(file_index, path_id)`
	/// pair wins; later duplicates stay in the arena but are never the
	/// target of reference resolution.
	pub fn add_object(&mut self, file_index: u32, path_id: i64, byte_size: u64, kind: ObjectKind) -> ObjectHandle {
		let handle = ObjectHandle(self.objects.len() as u32);
		self.objects.push(AssetObject { handle, byte_size, kind });
		self.by_ref.entry((file_index, path_id)).or_insert(handle);
		if let Some(file) = self.files.get_mut(file_index as usize) {
			file.objects.push(handle);
		}
		handle
	}

	/// Resolve an indirect reference to its target handle.
	///
	/// Failure is a normal branch, not an error: the target may sit
	/// outside the loaded object set.
	pub fn resolve(&self, indirect: &IndirectRef) -> Option<ObjectHandle> {
		self.by_ref.get(&(indirect.file_index, indirect.path_id)).copied()
	}

	/// Return the object behind a handle.
	pub fn object(&self, handle: ObjectHandle) -> &AssetObject {
		&self.objects[handle.index()]
	}

	/// Iterate all objects in enumeration order (file order, then dump order).
	pub fn objects(&self) -> impl Iterator<Item = &AssetObject> {
		self.objects.iter()
	}

	/// Return all loaded asset files.
	pub fn files(&self) -> &[AssetFile] {
		&self.files
	}

	/// Return the number of objects in the arena.
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	/// Return whether the arena holds no objects.
	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}
}

/// Outcome of a folder load: the graph plus per-file failures.
///
/// A dump file that fails to parse is skipped, not fatal; the run
/// continues with whatever loaded.
#[derive(Debug)]
pub struct LoadOutcome {
	/// Graph over all successfully loaded dump files.
	pub graph: ObjectGraph,
	/// Dump files that were skipped, with the reason.
	pub skipped: Vec<SkippedFile>,
}

/// One dump file that could not be loaded.
#[derive(Debug)]
pub struct SkippedFile {
	/// Dump file path.
	pub path: PathBuf,
	/// Load failure.
	pub error: AssetError,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DumpFile {
	name: String,
	objects: Vec<DumpObject>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DumpObject {
	path_id: i64,
	byte_size: u64,
	class_id: String,
	#[serde(default)]
	data: serde_json::Value,
}

/// Load every `*.assetdump.json` document under `path` into one graph.
///
/// Dump files are loaded in sorted path order so file indices and object
/// handles are deterministic across runs. A missing input folder is
/// fatal; individual unreadable dumps are collected in
/// [`LoadOutcome::skipped`].
pub fn load_folder(path: impl AsRef<Path>) -> Result<LoadOutcome> {
	let path = path.as_ref();
	if !path.is_dir() {
		return Err(AssetError::InputFolderNotFound { path: path.to_path_buf() });
	}

	let mut dump_paths = Vec::new();
	for entry in fs::read_dir(path)? {
		let entry = entry?;
		let entry_path = entry.path();
		let is_dump = entry_path
			.file_name()
			.and_then(|name| name.to_str())
			.is_some_and(|name| name.ends_with(DUMP_SUFFIX));
		if is_dump {
			dump_paths.push(entry_path);
		}
	}
	dump_paths.sort();

	let mut graph = ObjectGraph::new();
	let mut skipped = Vec::new();

	for dump_path in dump_paths {
		match load_dump_file(&dump_path) {
			Ok(dump) => {
				let file_index = graph.add_file(dump.name);
				for object in dump.objects {
					match kind_from_dump(&dump_path, &object) {
						Ok(kind) => {
							graph.add_object(file_index, object.path_id, object.byte_size, kind);
						}
						Err(error) => skipped.push(SkippedFile {
							path: dump_path.clone(),
							error,
						}),
					}
				}
			}
			Err(error) => skipped.push(SkippedFile {
				path: dump_path.clone(),
				error,
			}),
		}
	}

	Ok(LoadOutcome { graph, skipped })
}

fn load_dump_file(path: &Path) -> Result<DumpFile> {
	let bytes = fs::read(path)?;
	serde_json::from_slice(&bytes).map_err(|source| AssetError::MalformedDump {
		path: path.to_path_buf(),
		source,
	})
}

fn kind_from_dump(path: &Path, object: &DumpObject) -> Result<ObjectKind> {
	let data = object.data.clone();
	let payload_err = |source| AssetError::BadObjectPayload {
		path: path.to_path_buf(),
		path_id: object.path_id,
		class_id: object.class_id.clone(),
		source,
	};

	match object.class_id.as_str() {
		"Texture2D" => Ok(ObjectKind::Texture2D(serde_json::from_value::<TextureData>(data).map_err(payload_err)?)),
		"SpriteAtlas" => Ok(ObjectKind::SpriteAtlas(serde_json::from_value::<AtlasData>(data).map_err(payload_err)?)),
		"AssetBundle" => Ok(ObjectKind::AssetBundle(serde_json::from_value::<BundleData>(data).map_err(payload_err)?)),
		"ResourceManager" => Ok(ObjectKind::ResourceManager(serde_json::from_value::<ResourceData>(data).map_err(payload_err)?)),
		"Sprite" => Ok(ObjectKind::Sprite(serde_json::from_value::<SpriteData>(data).map_err(payload_err)?)),
		other => Ok(ObjectKind::Other {
			class_name: other.to_owned(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use crate::asset::{IndirectRef, ObjectGraph, ObjectKind, TextureData};

	fn texture(name: &str) -> ObjectKind {
		ObjectKind::Texture2D(TextureData {
			name: name.to_owned(),
			width: 32,
			height: 32,
			format: "RGBA32".to_owned(),
			mip_count: 1,
			mip_map: false,
			stream_size: None,
			pixel_data: Vec::new(),
		})
	}

	#[test]
	fn resolve_finds_registered_objects() {
		let mut graph = ObjectGraph::new();
		let file = graph.add_file("a.assets");
		let handle = graph.add_object(file, 7, 64, texture("tex"));

		let hit = graph.resolve(&IndirectRef { file_index: file, path_id: 7 });
		assert_eq!(hit, Some(handle));

		let miss = graph.resolve(&IndirectRef { file_index: file, path_id: 8 });
		assert_eq!(miss, None);

		let wrong_file = graph.resolve(&IndirectRef { file_index: file + 1, path_id: 7 });
		assert_eq!(wrong_file, None);
	}

	#[test]
	fn enumeration_preserves_file_then_dump_order() {
		let mut graph = ObjectGraph::new();
		let first = graph.add_file("a.assets");
		let second = graph.add_file("b.assets");
		graph.add_object(first, 1, 10, texture("one"));
		graph.add_object(first, 2, 10, texture("two"));
		graph.add_object(second, 1, 10, texture("three"));

		let names: Vec<_> = graph
			.objects()
			.map(|object| match &object.kind {
				ObjectKind::Texture2D(texture) => texture.name.clone(),
				_ => unreachable!("only textures registered"),
			})
			.collect();
		assert_eq!(names, ["one", "two", "three"]);
		assert_eq!(graph.files().len(), 2);
		assert_eq!(graph.files()[0].objects.len(), 2);
	}

	#[test]
	fn duplicate_path_ids_keep_first_registration() {
		let mut graph = ObjectGraph::new();
		let file = graph.add_file("a.assets");
		let first = graph.add_object(file, 1, 10, texture("first"));
		let _second = graph.add_object(file, 1, 10, texture("second"));

		let hit = graph.resolve(&IndirectRef { file_index: file, path_id: 1 });
		assert_eq!(hit, Some(first));
	}
}
