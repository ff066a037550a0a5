//! Command-line caller for the scorer.
//!
//! Provides the `elc` commands: scoring an answer file, listing the
//! archetype table, and printing the version.  Parsing and execution live
//! here so the binary stays a thin shell.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ElcConfig, OutputFormat};
use crate::error::{ElcError, Result};
use crate::link::ResultLink;
use crate::scoring::{score, AnswerSet, Archetype, Resolution, ScoreReport, QUESTION_COUNT};

/// Available CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Score an answer file.
    Score,
    /// List archetypes and their octants.
    Archetypes,
    /// Show version information.
    Version,
    /// Show usage.
    Help,
}

impl std::fmt::Display for CliCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Score => write!(f, "score"),
            Self::Archetypes => write!(f, "archetypes"),
            Self::Version => write!(f, "version"),
            Self::Help => write!(f, "help"),
        }
    }
}

/// Parse a CLI command from a string.
pub fn parse_command(cmd: &str) -> Option<CliCommand> {
    match cmd {
        "score" => Some(CliCommand::Score),
        "archetypes" | "types" => Some(CliCommand::Archetypes),
        "version" | "--version" | "-V" => Some(CliCommand::Version),
        "help" | "--help" | "-h" => Some(CliCommand::Help),
        _ => None,
    }
}

pub const USAGE: &str = "\
usage: elc <command> [options]

commands:
  score [FILE]      score an answer map (JSON, or YAML for .yaml/.yml); stdin if FILE is omitted or '-'
    --format F      json | yaml | text
    --base-url URL  origin for the result link
    --strict        require all 27 answers
  archetypes        list the eight archetypes and their E/I/PI octants
  version           print the version
";

/// Options for `elc score`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreArgs {
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub base_url: Option<String>,
    pub strict: bool,
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Score(ScoreArgs),
    Archetypes,
    Version,
    Help,
}

impl Invocation {
    pub fn command(&self) -> CliCommand {
        match self {
            Self::Score(_) => CliCommand::Score,
            Self::Archetypes => CliCommand::Archetypes,
            Self::Version => CliCommand::Version,
            Self::Help => CliCommand::Help,
        }
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let Some(first) = args.next() else {
        return Ok(Invocation::Help);
    };
    let command = parse_command(&first)
        .ok_or_else(|| ElcError::Usage(format!("unknown command '{}'", first)))?;

    let rest: Vec<String> = args.collect();
    match command {
        CliCommand::Score => parse_score_args(rest).map(Invocation::Score),
        other if !rest.is_empty() => Err(ElcError::Usage(format!(
            "'{}' takes no arguments, got '{}'",
            other, rest[0]
        ))),
        CliCommand::Archetypes => Ok(Invocation::Archetypes),
        CliCommand::Version => Ok(Invocation::Version),
        CliCommand::Help => Ok(Invocation::Help),
    }
}

fn parse_score_args(rest: Vec<String>) -> Result<ScoreArgs> {
    let mut parsed = ScoreArgs::default();
    let mut iter = rest.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                let value = flag_value(&arg, iter.next())?;
                parsed.format = Some(value.parse()?);
            }
            "--base-url" => parsed.base_url = Some(flag_value(&arg, iter.next())?),
            "--strict" => parsed.strict = true,
            "-" => parsed.input = None,
            flag if flag.starts_with("--") => {
                return Err(ElcError::Usage(format!("unknown option '{}'", flag)));
            }
            path => {
                if parsed.input.is_some() {
                    return Err(ElcError::Usage("only one input file may be given".into()));
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| ElcError::Usage(format!("'{}' needs a value", flag)))
}

/// Report printed by `elc score`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOutput {
    #[serde(flatten)]
    pub report: ScoreReport,
    pub url: String,
}

/// Decode answers, picking YAML for `.yaml`/`.yml` paths and JSON otherwise.
pub fn read_answers(path: Option<&Path>, stdin: &mut dyn Read) -> Result<AnswerSet> {
    let content = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    let is_yaml = path
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    if is_yaml {
        AnswerSet::from_yaml_str(&content)
    } else {
        AnswerSet::from_json_str(&content)
    }
}

/// CLI command to score one answer set.
pub fn score_command(
    args: &ScoreArgs,
    config: &ElcConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<ScoreOutput> {
    let answers = read_answers(args.input.as_deref(), stdin)?;
    if (args.strict || config.require_complete) && !answers.is_complete() {
        return Err(ElcError::Incomplete {
            answered: answers.answered_count(),
        });
    }
    if answers.answered_count() < QUESTION_COUNT {
        log::info!(
            "{} of {} questions unanswered, scoring them as neutral",
            QUESTION_COUNT - answers.answered_count(),
            QUESTION_COUNT
        );
    }

    let report = score(&answers);
    let base_url = args.base_url.as_deref().unwrap_or(&config.base_url);
    let output = ScoreOutput {
        url: ResultLink::from(&report).to_url(base_url),
        report,
    };

    match args.format.unwrap_or(config.format) {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => out.write_all(serde_yaml::to_string(&output)?.as_bytes())?,
        OutputFormat::Text => write_text(&output, out)?,
    }
    Ok(output)
}

fn write_text(output: &ScoreOutput, out: &mut dyn Write) -> Result<()> {
    let avg = &output.report.averages;
    let via = match output.report.resolution {
        Resolution::KillSwitch => "kill switch".to_string(),
        Resolution::Octant(o) => format!("octant {}", o),
        Resolution::Fallback => "fallback".to_string(),
    };
    writeln!(out, "archetype: {} ({})", output.report.archetype, via)?;
    writeln!(
        out,
        "e={:.2} i={:.2} pi={:.2} void={:.2}",
        avg.e, avg.i, avg.pi, avg.void_avg
    )?;
    writeln!(out, "url: {}", output.url)?;
    Ok(())
}

/// CLI command to list the archetype table.
pub fn archetypes_command(out: &mut dyn Write) -> Result<()> {
    for archetype in Archetype::ALL {
        writeln!(out, "{:<11} {}", archetype.slug(), archetype.octant())?;
    }
    Ok(())
}

/// Execute a parsed invocation.
pub fn run(
    invocation: &Invocation,
    config: &ElcConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    log::debug!("running '{}'", invocation.command());
    match invocation {
        Invocation::Score(args) => score_command(args, config, stdin, out).map(|_| ()),
        Invocation::Archetypes => archetypes_command(out),
        Invocation::Version => {
            writeln!(out, "elc {}", crate::VERSION)?;
            Ok(())
        }
        Invocation::Help => {
            out.write_all(USAGE.as_bytes())?;
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
