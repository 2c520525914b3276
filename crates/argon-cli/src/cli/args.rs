//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! visible or hidden (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Argon file to decode (positional).
pub fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Argon file to decode (prompted for when omitted)")
}

/// Fixed column width (-w/--width).
pub fn width_arg() -> Arg {
    Arg::new("width")
        .short('w')
        .long("width")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Column width (default: widest value + 1)")
}

/// Print tables as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print tables as JSON instead of boxed text")
}

/// Keep the selected handler after a marker (--sticky).
pub fn sticky_arg() -> Arg {
    Arg::new("sticky")
        .long("sticky")
        .action(ArgAction::SetTrue)
        .help("Keep the selected handler after each marker (legacy streams)")
}

/// Nested include limit (--include-depth).
pub fn include_depth_arg() -> Arg {
    Arg::new("include_depth")
        .long("include-depth")
        .value_name("N")
        .default_value("64")
        .value_parser(value_parser!(u32))
        .help("Maximum number of nested OpenFile includes")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for handler selections, -vv for every byte)")
}
