#![allow(missing_docs)]

use std::path::PathBuf;

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(name = "texdoc", about = "Asset-bundle texture report tool")]
struct Cli {
	/// Folder containing decoded asset-bundle object dumps.
	input: PathBuf,
	/// Folder that receives exported texture payloads.
	output: PathBuf,
	/// Path of the JSON report document to write.
	report: PathBuf,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> texdoc::asset::Result<()> {
	let cli = Cli::parse();
	cmd::report::run(cli.input, cli.output, cli.report)
}
