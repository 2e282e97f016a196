use crate::asset::{IndirectRef, ObjectGraph, ObjectHandle, ObjectKind};

/// Index from object handle to the logical container paths it is
/// published under.
///
/// Built in two phases: every handle is registered with an empty path
/// list before any manifest pair is replayed, so lookups never hit a
/// missing handle.
#[derive(Debug)]
pub struct ContainerIndex {
	paths: Vec<Vec<String>>,
}

impl ContainerIndex {
	/// Build the index from the full object enumeration.
	///
	/// Bundle manifests expand their preload-table ranges into individual
	/// `(reference, path)` pairs; resource manager manifests contribute
	/// their pairs directly. A pair whose reference fails to resolve is
	/// dropped silently: dangling references are expected when assets
	/// point outside the loaded scope.
	pub fn build(graph: &ObjectGraph) -> Self {
		let mut paths = vec![Vec::new(); graph.len()];

		let mut pairs: Vec<(IndirectRef, &str)> = Vec::new();
		for object in graph.objects() {
			match &object.kind {
				ObjectKind::AssetBundle(bundle) => {
					let table = &bundle.preload_table;
					for entry in &bundle.containers {
						// Clamp declared ranges to the table; a bundle may
						// declare more entries than it actually carries.
						let start = (entry.preload_index as usize).min(table.len());
						let end = (entry.preload_index as usize)
							.saturating_add(entry.preload_size as usize)
							.min(table.len());
						for indirect in &table[start..end] {
							pairs.push((*indirect, entry.path.as_str()));
						}
					}
				}
				ObjectKind::ResourceManager(resources) => {
					for entry in &resources.containers {
						pairs.push((entry.asset, entry.path.as_str()));
					}
				}
				ObjectKind::Texture2D(_) | ObjectKind::SpriteAtlas(_) | ObjectKind::Sprite(_) | ObjectKind::Other { .. } => {}
			}
		}

		for (indirect, path) in pairs {
			let Some(handle) = graph.resolve(&indirect) else {
				continue;
			};
			let set = &mut paths[handle.index()];
			if !set.iter().any(|existing| existing == path) {
				set.push(path.to_owned());
			}
		}

		Self { paths }
	}

	/// Return the resolved paths for a handle, in insertion order.
	///
	/// Every handle from the source graph has an entry; objects no
	/// manifest mentions yield an empty slice.
	pub fn paths(&self, handle: ObjectHandle) -> &[String] {
		&self.paths[handle.index()]
	}
}

#[cfg(test)]
mod tests {
	use crate::asset::{
		BundleData, ContainerEntry, ContainerIndex, IndirectRef, ObjectGraph, ObjectKind, ResourceData, ResourceEntry, TextureData,
	};

	fn texture(name: &str) -> ObjectKind {
		ObjectKind::Texture2D(TextureData {
			name: name.to_owned(),
			width: 64,
			height: 64,
			format: "RGBA32".to_owned(),
			mip_count: 1,
			mip_map: false,
			stream_size: None,
			pixel_data: Vec::new(),
		})
	}

	fn indirect(file_index: u32, path_id: i64) -> IndirectRef {
		IndirectRef { file_index, path_id }
	}

	#[test]
	fn preload_range_covers_exactly_declared_entries() {
		let mut graph = ObjectGraph::new();
		let file = graph.add_file("a.assets");

		let mut handles = Vec::new();
		for path_id in 0..10 {
			handles.push(graph.add_object(file, path_id, 16, texture(&format!("tex{path_id}"))));
		}

		let table: Vec<_> = (0..10).map(|path_id| indirect(file, path_id)).collect();
		graph.add_object(
			file,
			100,
			16,
			ObjectKind::AssetBundle(BundleData {
				preload_table: table,
				containers: vec![ContainerEntry {
					path: "assets/pack".to_owned(),
					preload_index: 2,
					preload_size: 3,
				}],
			}),
		);

		let index = ContainerIndex::build(&graph);
		for (position, handle) in handles.iter().enumerate() {
			let expected: &[&str] = if (2..5).contains(&position) { &["assets/pack"] } else { &[] };
			assert_eq!(index.paths(*handle), expected, "entry {position}");
		}
	}

	#[test]
	fn zero_size_and_out_of_range_entries_contribute_nothing_extra() {
		let mut graph = ObjectGraph::new();
		let file = graph.add_file("a.assets");
		let tex = graph.add_object(file, 1, 16, texture("tex"));

		graph.add_object(
			file,
			100,
			16,
			ObjectKind::AssetBundle(BundleData {
				preload_table: vec![indirect(file, 1)],
				containers: vec![
					ContainerEntry {
						path: "assets/empty".to_owned(),
						preload_index: 0,
						preload_size: 0,
					},
					// Declares three entries over a one-entry table.
					ContainerEntry {
						path: "assets/clamped".to_owned(),
						preload_index: 0,
						preload_size: 3,
					},
					// Starts past the table end entirely.
					ContainerEntry {
						path: "assets/past".to_owned(),
						preload_index: 5,
						preload_size: 2,
					},
				],
			}),
		);

		let index = ContainerIndex::build(&graph);
		assert_eq!(index.paths(tex), ["assets/clamped"]);
	}

	#[test]
	fn dangling_reference_leaves_path_set_untouched() {
		let mut graph = ObjectGraph::new();
		let file = graph.add_file("a.assets");
		let tex = graph.add_object(file, 1, 16, texture("tex"));

		graph.add_object(
			file,
			100,
			16,
			ObjectKind::ResourceManager(ResourceData {
				containers: vec![
					ResourceEntry {
						path: "resources/tex".to_owned(),
						asset: indirect(file, 1),
					},
					ResourceEntry {
						path: "resources/missing".to_owned(),
						asset: indirect(file, 999),
					},
				],
			}),
		);

		let index = ContainerIndex::build(&graph);
		assert_eq!(index.paths(tex), ["resources/tex"]);
	}

	#[test]
	fn duplicate_paths_count_once() {
		let mut graph = ObjectGraph::new();
		let file = graph.add_file("a.assets");
		let tex = graph.add_object(file, 1, 16, texture("tex"));

		graph.add_object(
			file,
			100,
			16,
			ObjectKind::AssetBundle(BundleData {
				preload_table: vec![indirect(file, 1), indirect(file, 1)],
				containers: vec![ContainerEntry {
					path: "assets/tex.png".to_owned(),
					preload_index: 0,
					preload_size: 2,
				}],
			}),
		);

		let index = ContainerIndex::build(&graph);
		assert_eq!(index.paths(tex), ["assets/tex.png"]);
	}
}
