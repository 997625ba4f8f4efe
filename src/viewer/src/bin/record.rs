use clap::Parser;

use viewer::cli::CliArgs;

fn main() -> anyhow::Result<()> {
	viewer::logger::init_logger();
	let args = CliArgs::parse();
	let summary = viewer::run(&args)?;
	if summary.written.is_empty() && args.out.is_none() {
		log::info!("no --out given, frames were rendered but not saved");
	}
	Ok(())
}
