use serde::Deserialize;

/// Stable arena index for one decoded object.
///
/// Handles are assigned densely at load time and stay valid for the
/// lifetime of the owning [`crate::asset::ObjectGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub(crate) u32);

impl ObjectHandle {
	/// Return the handle as a dense array index.
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

/// Reference to another object that requires a resolution step.
///
/// Not an ownership relation; resolution is a lookup that may fail when
/// the target sits outside the loaded object set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndirectRef {
	/// Index of the asset file the target lives in.
	pub file_index: u32,
	/// Target object id within that file.
	pub path_id: i64,
}

/// One decoded object with its classified kind payload.
#[derive(Debug, Clone)]
pub struct AssetObject {
	/// Arena handle for this object.
	pub handle: ObjectHandle,
	/// Raw serialized size of the object in bytes.
	pub byte_size: u64,
	/// Kind payload.
	pub kind: ObjectKind,
}

/// Closed set of class kinds this tool consumes.
///
/// Every consumption site matches exhaustively so a newly recognized kind
/// cannot be silently ignored.
#[derive(Debug, Clone)]
pub enum ObjectKind {
	/// A 2D texture with pixel payload.
	Texture2D(TextureData),
	/// A sprite atlas referencing packed sprites.
	SpriteAtlas(AtlasData),
	/// A bundle manifest with a preload table and container entries.
	AssetBundle(BundleData),
	/// A resource manager manifest with direct container entries.
	ResourceManager(ResourceData),
	/// A sprite referencing its source texture.
	Sprite(SpriteData),
	/// Any class kind this tool does not interpret.
	Other {
		/// Declared class name from the dump.
		class_name: String,
	},
}

impl ObjectKind {
	/// Return the declared class name for this kind.
	pub fn class_name(&self) -> &str {
		match self {
			ObjectKind::Texture2D(_) => "Texture2D",
			ObjectKind::SpriteAtlas(_) => "SpriteAtlas",
			ObjectKind::AssetBundle(_) => "AssetBundle",
			ObjectKind::ResourceManager(_) => "ResourceManager",
			ObjectKind::Sprite(_) => "Sprite",
			ObjectKind::Other { class_name } => class_name,
		}
	}
}

/// Decoded Texture2D fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureData {
	/// Internal texture name.
	pub name: String,
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
	/// Canonical pixel-format name, e.g. `RGBA32` or `ETC2_RGBA8`.
	pub format: String,
	/// Number of mip levels.
	#[serde(default)]
	pub mip_count: u32,
	/// Whether mip-mapping is enabled.
	#[serde(default)]
	pub mip_map: bool,
	/// Size of the externally streamed pixel payload, when present.
	#[serde(default)]
	pub stream_size: Option<u64>,
	/// Opaque encoded pixel payload; decoding is the exporter's concern.
	#[serde(default)]
	pub pixel_data: Vec<u8>,
}

/// Decoded SpriteAtlas fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasData {
	/// Atlas name.
	pub name: String,
	/// References to the sprites packed into this atlas.
	#[serde(default)]
	pub packed_sprites: Vec<IndirectRef>,
}

/// Decoded AssetBundle manifest fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleData {
	/// Ordered preload table of indirect references.
	#[serde(default)]
	pub preload_table: Vec<IndirectRef>,
	/// Container entries slicing the preload table into named ranges.
	#[serde(default)]
	pub containers: Vec<ContainerEntry>,
}

/// One bundle container entry: a logical path over a preload-table range.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerEntry {
	/// Logical container path.
	pub path: String,
	/// First preload-table index covered by this entry.
	pub preload_index: u32,
	/// Number of preload-table entries covered.
	pub preload_size: u32,
}

/// Decoded ResourceManager manifest fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceData {
	/// Direct path-to-reference container entries.
	#[serde(default)]
	pub containers: Vec<ResourceEntry>,
}

/// One resource manager container entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
	/// Logical container path.
	pub path: String,
	/// Reference to the published object.
	pub asset: IndirectRef,
}

/// Decoded Sprite fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteData {
	/// Sprite name.
	pub name: String,
	/// Reference to the sprite's source texture.
	pub texture: IndirectRef,
}
