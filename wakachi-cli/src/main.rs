use anyhow::Result;
use clap::Parser;

use wakachi::app::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    println!("start: wakachi");
    println!(
        "args: config={} input={:?} output={:?}",
        args.config, args.input, args.output
    );

    let code = run(&args)?;
    if code != 0 {
        std::process::exit(code);
    }

    println!("finish: wakachi");
    Ok(())
}
