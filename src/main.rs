//! phonoreduce - French syllable sound reduction

use std::io;

use clap::Parser;
use phonoreduce::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    if let Err(e) = cli.run(&mut stdin, &mut stdout, &mut stderr) {
        log::debug!("run failed: {:?}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
