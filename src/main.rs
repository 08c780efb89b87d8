use clap::Parser;
use shiplabel::{DocumentAssembler, FileSink, LabelError, LabelRecord, SheetConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Renders shipping labels four to a page into a PDF.
#[derive(Parser, Debug)]
#[command(name = "shiplabel", version, about)]
struct Args {
    /// JSON file holding an array of label records
    #[arg(long, conflicts_with = "sample", required_unless_present = "sample")]
    records: Option<PathBuf>,

    /// Render N copies of the built-in sample record instead
    #[arg(long, value_name = "N")]
    sample: Option<usize>,

    /// Where to write the PDF
    #[arg(short, long, default_value = "labels.pdf")]
    output: PathBuf,

    /// Sheet configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_records(args: &Args) -> Result<Vec<LabelRecord>, LabelError> {
    if let Some(n) = args.sample {
        return Ok(LabelRecord::samples(n));
    }
    let Some(path) = &args.records else {
        return Ok(Vec::new());
    };
    let json = std::fs::read_to_string(path).map_err(|e| LabelError::Io {
        context: "reading records",
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&json)
        .map_err(|e| LabelError::Config(format!("{}: {}", path.display(), e)))
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => SheetConfig::from_file(path)?,
        None => SheetConfig::default(),
    };
    let records = load_records(args)?;

    let summary = DocumentAssembler::new(config).build(&records, &mut FileSink::new(&args.output))?;
    println!(
        "Wrote {} label(s) on {} sheet(s) to {}",
        summary.labels,
        summary.sheets,
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
