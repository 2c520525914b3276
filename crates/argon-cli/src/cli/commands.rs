//! Command builders for the CLI.
//!
//! `read` and `trace` accept each other's flags; the ones a command ignores
//! are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("argon")
        .about("Decode Argon binary containers into typed tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(read_command())
        .subcommand(trace_command())
}

/// Decode a file and print its tables.
pub fn read_command() -> Command {
    Command::new("read")
        .about("Decode a file and print its tables")
        .override_usage(
            "\
  argon read <FILE>
  argon read <FILE> --json
  argon read",
        )
        .after_help(
            r#"EXAMPLES:
  argon read data.argon              # boxed tables
  argon read data.argon -w 12        # fixed column width
  argon read data.argon --json       # machine-readable output
  argon read legacy.argon --sticky   # streams for the legacy decoder
  argon read                         # prompt for the file name"#,
        )
        .arg(path_arg())
        .arg(width_arg())
        .arg(json_arg())
        .arg(sticky_arg())
        .arg(include_depth_arg())
        .arg(color_arg())
        // Hidden unified flags
        .arg(verbose_arg().hide(true))
}

/// Decode a file and print how every byte was interpreted.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace how a file is decoded")
        .override_usage(
            "\
  argon trace <FILE>
  argon trace <FILE> -v
  argon trace <FILE> -vv",
        )
        .after_help(
            r#"EXAMPLES:
  argon trace data.argon             # fired handlers and store changes
  argon trace data.argon -v          # also handler selections
  argon trace data.argon -vv         # every byte"#,
        )
        .arg(path_arg())
        .arg(verbose_arg())
        .arg(width_arg())
        .arg(sticky_arg())
        .arg(include_depth_arg())
        .arg(color_arg())
        // Hidden unified flags
        .arg(json_arg().hide(true))
}
