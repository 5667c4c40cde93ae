mod cli;
mod text_summary;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let json_mode = args.json;

    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            if json_mode {
                // Keep JSON mode script-consumable: a failure marker on
                // stdout, non-zero exit.
                println!("{}", serde_json::json!({ "error": e.to_string() }));
                std::process::exit(1);
            }
            Err(e)
        }
    }
}
