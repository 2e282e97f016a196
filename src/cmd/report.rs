use std::fs;
use std::path::{Path, PathBuf};

use texdoc::asset::{
	AssetError, AtlasGrouping, ContainerIndex, ObjectKind, PathPolicy, RawDumpExporter, Result, TextureExporter, TextureReport,
	build_report, load_folder, texture_records,
};

/// Run the full pipeline: load dumps, build the report, export textures.
pub fn run(input: PathBuf, output: PathBuf, report_path: PathBuf) -> Result<()> {
	let outcome = load_folder(&input)?;
	for skipped in &outcome.skipped {
		eprintln!("warning: skipped {}: {}", skipped.path.display(), skipped.error);
	}

	let graph = outcome.graph;
	fs::create_dir_all(&output)?;

	let index = ContainerIndex::build(&graph);
	let atlases = AtlasGrouping::build(&graph);
	let policy = PathPolicy::default();
	let records = texture_records(&graph, &index, &policy);

	let exporter = RawDumpExporter;
	for (handle, record) in &records {
		let ObjectKind::Texture2D(texture) = &graph.object(*handle).kind else {
			continue;
		};
		let out_dir = output.join(primary_dir(&record.possible_path));
		exporter.export(texture, &out_dir)?;
		println!("exporting {}", out_dir.join(&texture.name).display());
	}

	let report = build_report(records.into_iter().map(|(_, record)| record).collect(), &atlases);
	write_report(&report, &report_path)
}

/// Directory component of a primary path, empty when it has none.
fn primary_dir(path: &str) -> &str {
	path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

fn write_report(report: &TextureReport, path: &Path) -> Result<()> {
	let file = fs::File::create(path)?;
	serde_json::to_writer_pretty(file, report).map_err(|source| AssetError::ReportWrite { source })
}
