use std::collections::HashSet;

use crate::asset::{ObjectGraph, ObjectKind};

/// One atlas with the source texture names its sprites resolved to.
#[derive(Debug, Clone)]
pub struct AtlasGroup {
	/// Atlas name.
	pub name: String,
	/// Source texture names, in packed-sprite order.
	pub textures: Vec<String>,
}

/// Atlas-name to source-texture-names grouping.
///
/// Groups appear in object-enumeration order; when two atlases share a
/// name, the first one wins and later ones are ignored.
#[derive(Debug)]
pub struct AtlasGrouping {
	groups: Vec<AtlasGroup>,
}

impl AtlasGrouping {
	/// Resolve every sprite atlas in the graph down to texture names.
	///
	/// Each packed-sprite reference is resolved to its sprite, then the
	/// sprite's texture reference to its texture; a failed hop (dangling
	/// reference or unexpected target kind) skips that sprite silently.
	/// An atlas whose sprites all fail still appears, with an empty list.
	pub fn build(graph: &ObjectGraph) -> Self {
		let mut groups = Vec::new();
		let mut seen = HashSet::new();

		for object in graph.objects() {
			let ObjectKind::SpriteAtlas(atlas) = &object.kind else {
				continue;
			};
			if !seen.insert(atlas.name.clone()) {
				continue;
			}

			let mut textures = Vec::new();
			for packed in &atlas.packed_sprites {
				let Some(sprite_handle) = graph.resolve(packed) else {
					continue;
				};
				let ObjectKind::Sprite(sprite) = &graph.object(sprite_handle).kind else {
					continue;
				};
				let Some(texture_handle) = graph.resolve(&sprite.texture) else {
					continue;
				};
				let ObjectKind::Texture2D(texture) = &graph.object(texture_handle).kind else {
					continue;
				};
				textures.push(texture.name.clone());
			}

			groups.push(AtlasGroup {
				name: atlas.name.clone(),
				textures,
			});
		}

		Self { groups }
	}

	/// Return all groups in enumeration order.
	pub fn groups(&self) -> &[AtlasGroup] {
		&self.groups
	}

	/// Look up one group by atlas name.
	pub fn get(&self, name: &str) -> Option<&AtlasGroup> {
		self.groups.iter().find(|group| group.name == name)
	}
}
