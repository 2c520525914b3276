//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but are populated from clap; hidden
//! unified flags are parsed and dropped here.

use std::path::PathBuf;

use clap::ArgMatches;

use argon_vm::Verbosity;

use super::ColorChoice;
use crate::commands::read::ReadArgs;
use crate::commands::trace::TraceArgs;

pub struct ReadParams {
    pub path: Option<PathBuf>,
    pub width: Option<usize>,
    pub json: bool,
    pub sticky: bool,
    pub include_depth: u32,
    pub color: ColorChoice,
}

impl ReadParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("path").cloned(),
            width: m.get_one::<usize>("width").copied(),
            json: m.get_flag("json"),
            sticky: m.get_flag("sticky"),
            include_depth: parse_include_depth(m),
            color: parse_color(m),
        }
    }
}

impl From<ReadParams> for ReadArgs {
    fn from(p: ReadParams) -> Self {
        Self {
            path: p.path,
            width: p.width,
            json: p.json,
            sticky: p.sticky,
            include_depth: p.include_depth,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub path: Option<PathBuf>,
    pub width: Option<usize>,
    pub verbose: u8,
    pub sticky: bool,
    pub include_depth: u32,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("path").cloned(),
            width: m.get_one::<usize>("width").copied(),
            verbose: m.get_count("verbose"),
            sticky: m.get_flag("sticky"),
            include_depth: parse_include_depth(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            path: p.path,
            width: p.width,
            verbosity,
            sticky: p.sticky,
            include_depth: p.include_depth,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_include_depth(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("include_depth").copied().unwrap_or(64)
}
