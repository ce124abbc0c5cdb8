//! Command-line front end: argument handling and file I/O around the
//! parse/generate pipeline. No translation logic lives here.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "swinggen",
    about = "Generate Java Swing source from a .swing description file"
)]
struct Cli {
    /// Description file to translate.
    input: PathBuf,

    /// Directory for the generated .java file (defaults to the input's
    /// directory).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed tree as JSON before generating.
    #[arg(long)]
    dump_tree: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let source = match std::fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: {err}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    // Any parse failure aborts here, before an output file is touched.
    let forest = match swinggen_parser::parse(&source) {
        Ok(forest) => forest,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.dump_tree {
        match serde_json::to_string_pretty(&forest) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let class_name = class_name_for(&cli.input);
    let code = swinggen_codegen::generate(&forest, &class_name);

    let out_dir = cli
        .output
        .clone()
        .or_else(|| cli.input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let out_path = out_dir.join(format!("{class_name}.java"));

    if let Err(err) = std::fs::write(&out_path, code) {
        eprintln!("{}: {err}", out_path.display());
        return ExitCode::FAILURE;
    }

    println!("Generated {}", out_path.display());
    ExitCode::SUCCESS
}

/// Output class name: the input's file stem with its first character
/// upper-cased.
fn class_name_for(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Generated");
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::from("Generated"),
    }
}
