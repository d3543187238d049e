//! # sloc
//!
//! Count source lines of code, comments and blank lines per language.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! sloc
//!
//! # Count specific files and directories
//! sloc src include Makefile
//!
//! # Count stdin as a given language
//! cat main.c | sloc -t C
//!
//! # Count a list of paths read from stdin
//! git ls-files | sloc -
//!
//! # Without the totals row, as JSON
//! sloc -n -o json src
//! ```

mod logging;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use sloclib::{Counter, LanguageRegistry, Report, ReportOptions};

use render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count source lines of code, comments and blanks per language")
        .override_usage("sloc [-v] [-h] [-n] [-t lang] [-] [file] [...]")
        .disable_version_flag(true)
        .disable_help_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version information and exit"),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Print usage and exit"),
        )
        .arg(
            Arg::new("no-totals")
                .short('n')
                .long("no-totals")
                .action(ArgAction::SetTrue)
                .help("Don't print the totals row"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_name("LANG")
                .action(ArgAction::Append)
                .help("Count standard input as language LANG (repeatable)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::Count)
                .help("Trace skipped paths on stderr (-dd: every classified line)"),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .action(ArgAction::Append)
                .help("Files or directories to count; '-' reads a list of paths from stdin"),
        )
}

/// Feed every requested input to the counter.
///
/// Falls back to the current directory when nothing was requested.
fn count_inputs(matches: &ArgMatches, counter: &mut Counter) -> anyhow::Result<()> {
    let mut requested = false;

    if let Some(langs) = matches.get_many::<String>("type") {
        for lang in langs {
            requested = true;
            counter.count_named(io::stdin().lock(), lang)?;
        }
    }

    if let Some(paths) = matches.get_many::<String>("paths") {
        for path in paths {
            requested = true;
            if path == "-" {
                counter.count_path_list(io::stdin().lock())?;
            } else {
                counter.count_path(path);
            }
        }
    }

    if !requested {
        counter.count_path(".");
    }

    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    logging::init(matches.get_count("debug"))?;

    let registry = LanguageRegistry::builtin();
    let mut counter = Counter::new(registry);
    count_inputs(matches, &mut counter)?;

    let options = ReportOptions::new().totals(!matches.get_flag("no-totals"));
    let report = Report::from_tally(&registry, counter.tally(), options);

    let format = matches
        .get_one::<String>("output")
        .map_or(OutputFormat::Table, |s| OutputFormat::from_arg(s));
    let rendered = render::render(&report, format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
