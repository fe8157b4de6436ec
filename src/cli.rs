//! Command-line front end

use std::fs;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::config::{config_path, load_config_from, save_config_to, ReducerConfig};
use crate::output::{render_counts, sound_counts, ReductionSummary};
use crate::parse::parse_text;

const INPUT_PROMPT: &str = "Syllable file: ";
const TARGET_PROMPT: &str = "Target number of distinct sounds: ";

/// Reduce a `.`-separated IPA syllable text to a target number of distinct sounds
#[derive(Debug, Parser)]
#[command(name = "phonoreduce", version, about)]
pub struct Cli {
    /// Syllable file, `-` for stdin (asked for when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of distinct sounds to keep (asked for when omitted)
    #[arg(short, long)]
    pub target: Option<usize>,

    /// Configuration file (default: ~/.config/phonoreduce/config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the occurrence count of each remaining sound
    #[arg(long)]
    pub counts: bool,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Reduced sequence, `.`-separated
    Text,
    /// Full report as JSON
    Json,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }

    /// Run with the given standard streams; prompts go to `prompt_out`
    pub fn run<R: BufRead, W: Write, P: Write>(
        &self,
        stdin: &mut R,
        out: &mut W,
        prompt_out: &mut P,
    ) -> Result<()> {
        let path = self.config.clone().unwrap_or_else(config_path);

        if self.init_config {
            save_config_to(&path, &ReducerConfig::default())
                .with_context(|| format!("failed to write config {}", path.display()))?;
            writeln!(out, "wrote default config to {}", path.display())?;
            return Ok(());
        }

        let config = load_config_from(&path);
        log::debug!("config: {:?}", config);

        let input_path = match &self.input {
            Some(p) => p.clone(),
            None => PathBuf::from(prompt(stdin, prompt_out, INPUT_PROMPT)?),
        };
        let reads_stdin = input_path == Path::new("-");

        let target = match self.target {
            Some(t) => t,
            None if reads_stdin => bail!("--target is required when reading syllables from stdin"),
            None => {
                let answer = prompt(stdin, prompt_out, TARGET_PROMPT)?;
                answer
                    .parse::<usize>()
                    .with_context(|| format!("invalid target count '{}'", answer))?
            }
        };
        let target = config.validate_target(target)?;

        let text = if reads_stdin {
            let mut text = String::new();
            stdin.read_to_string(&mut text).context("failed to read stdin")?;
            text
        } else {
            fs::read_to_string(&input_path)
                .with_context(|| format!("failed to read {}", input_path.display()))?
        };

        let parsed = parse_text(&text);
        if let Some(error) = &parsed.stopped {
            log::warn!(
                "stopped reading {} after {} syllables: {}",
                input_path.display(),
                parsed.corpus.len(),
                error
            );
        }

        let input = parsed.corpus;
        let mut reduced = input.clone();
        let report = reduced.reduce_to(target, &config);

        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{}", reduced)?;
                if self.counts {
                    let counts = sound_counts(&reduced);
                    if !counts.is_empty() {
                        writeln!(out, "{}", render_counts(&counts))?;
                    }
                }
            }
            OutputFormat::Json => {
                let summary = ReductionSummary::new(&input, &reduced, report);
                writeln!(out, "{}", summary.to_json()?)?;
            }
        }
        Ok(())
    }
}

/// Print `message` and read one trimmed line
fn prompt<R: BufRead, P: Write>(stdin: &mut R, prompt_out: &mut P, message: &str) -> Result<String> {
    write!(prompt_out, "{}", message)?;
    prompt_out.flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        bail!("no answer given to '{}'", message.trim_end_matches([':', ' ']));
    }
    Ok(line.trim().to_string())
}
