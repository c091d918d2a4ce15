//! Propmap CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches: synthesis itself
//! lives in the library.

use anyhow::Result;
use clap::Parser;

use propmap::cli::{Cli, Commands};
use propmap::core::MethodRole;
use propmap::{analysis, io, observability, output};

fn main() -> Result<()> {
    observability::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            path,
            format,
            output: output_file,
        } => {
            let classes = io::read_classes(&path)?;
            let models = analysis::build_all(&classes);
            let rendered = output::render(&models, format)?;
            io::write_output(output_file.as_deref(), rendered.trim_end())?;
        }
        Commands::Roles => {
            for role in MethodRole::ALL {
                println!("{}", role.as_str());
            }
        }
    }

    Ok(())
}
