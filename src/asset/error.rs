use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Errors produced while loading object dumps and writing the report.
#[derive(Debug, Error)]
pub enum AssetError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input folder is missing or not a directory.
	#[error("input folder not found: {}", path.display())]
	InputFolderNotFound {
		/// Offending folder path.
		path: PathBuf,
	},
	/// A dump file held invalid JSON or an unexpected document shape.
	#[error("malformed dump {}: {source}", path.display())]
	MalformedDump {
		/// Dump file path.
		path: PathBuf,
		/// Underlying parse failure.
		source: serde_json::Error,
	},
	/// An object's kind-specific payload did not match its declared class.
	#[error("bad {class_id} payload for object {path_id} in {}: {source}", path.display())]
	BadObjectPayload {
		/// Dump file path.
		path: PathBuf,
		/// Object path id inside the dump.
		path_id: i64,
		/// Declared class kind.
		class_id: String,
		/// Underlying decode failure.
		source: serde_json::Error,
	},
	/// Report document serialization failed.
	#[error("report write failed: {source}")]
	ReportWrite {
		/// Underlying serialization failure.
		source: serde_json::Error,
	},
}
