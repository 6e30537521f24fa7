//! Contains the argument handling and main logic of the CLI

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Args, Parser};
use exitcode::{ExitCode, CANTCREAT, NOINPUT};
use log::{debug, info};

use crate::safe::{self, Binary};
use crate::util::ext::PathExt;

/// Extension appended to the input file name for the default decode output
pub const DECODED_EXT: &str = "bin";
/// Extension appended to the input file name for the default encode output
pub const ENCODED_EXT: &str = "safe";

// Structure based on the recommendations in
// https://rust-cli-recommendations.sunshowers.io/handling-arguments.html

/// Converts a safe (printable, backslash-escaped) representation of data to its raw binary form
#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about,
    after_long_help = "\
    1. Safe form: printable ASCII is kept as-is, a backslash is written as \\\\, tab, newline, \
    carriage return, vertical tab and form feed as \\t, \\n, \\r, \\v and \\f, and every other \
    byte as \\xHH. When decoding, a backslash that does not start one of these escapes is kept \
    literally.\
    \n\
    \n\
    2. Logging: is controlled via the SAFE2BIN_LOG environment variable. Set it to error, warn, \
    info, debug or trace to adjust verbosity. For examples, see RUST_LOG mentions in \
    https://docs.rs/env_logger/0.10.0/env_logger/"
)]
#[command(group(ArgGroup::new("direction").args(["encode", "utf8"])))]
pub struct Safe2Bin {
	#[clap(flatten)]
	pub global_opts: GlobalOpts,

	/// Input file. Contains the safe form, or raw data with --encode
	#[arg(short, long, value_name = "INPUT_FILE")]
	input: PathBuf,

	/// Output file, overwritten if it exists [default: <INPUT_FILE>.bin, or <INPUT_FILE>.safe
	/// with --encode]
	#[arg(short, long, value_name = "OUTPUT_FILE")]
	output: Option<PathBuf>,

	/// Convert raw data to the safe form instead
	#[arg(short, long)]
	encode: bool,

	/// Treat the decoded data as text and write it UTF-8 encoded, so \xff becomes the two bytes
	/// c3 bf instead of the single byte ff
	#[arg(long)]
	utf8: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
	/// Verbosity level, can be specified multiple times, equivalent to SAFE2BIN_LOG={info,debug,trace}
	#[arg(group="verbosity", long, short, global=true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Quiet mode, equivalent to SAFE2BIN_LOG=error
	#[arg(group = "verbosity", long, short, global = true)]
	pub quiet: bool,

	/// Silent mode, equivalent to SAFE2BIN_LOG=off. Fatal errors are still printed
	#[arg(group = "verbosity", long, short, global = true)]
	pub silent: bool,
}

impl Safe2Bin {
	pub fn exec(self) -> anyhow::Result<()> {
		self.init_logging();

		info!("version {} starting up", env!("CARGO_PKG_VERSION"));
		info!("log level set to {}", log::max_level());

		let input = self.input.tilde_expand();
		if !input.is_file() {
			die(
				NOINPUT,
				&format!("the provided input file {input:?} is not a regular file"),
			)
		}

		let output = match &self.output {
			Some(path) => path.tilde_expand(),
			None if self.encode => input.with_appended_extension(ENCODED_EXT),
			None => input.with_appended_extension(DECODED_EXT),
		};

		let data =
			fs::read(&input).with_context(|| format!("unable to read input file {input:?}"))?;
		debug!("read {} bytes from {input:?}", data.len());

		let converted = if self.encode {
			info!("encoding {input:?} into {output:?}");
			safe::encode_bytes(&data)
		} else {
			let mode = if self.utf8 { Binary::Utf8 } else { Binary::Raw };
			info!("decoding {input:?} into {output:?} ({mode:?})");
			safe::decode_bytes(&data, mode)
		};

		if let Err(e) = write_output(&output, &converted) {
			die(CANTCREAT, &format!("{e:#}"))
		}
		debug!("wrote {} bytes to {output:?}", converted.len());

		info!("process exiting successfully");
		Ok(())
	}

	fn init_logging(&self) {
		let mut logging_builder = env_logger::Builder::new();

		logging_builder
			.filter_level(log::LevelFilter::Warn)
			.format_timestamp_nanos()
			.parse_env("SAFE2BIN_LOG");

		// Not using https://crates.io/crates/clap-verbosity-flag as the documentation suggests
		// it may not work with the [default -> env -> cli-args] override path
		let override_log_level = if self.global_opts.silent {
			Some(log::LevelFilter::Off)
		} else if self.global_opts.quiet {
			Some(log::LevelFilter::Error)
		} else {
			match self.global_opts.verbose {
				0 => None,
				1 => Some(log::LevelFilter::Info),
				2 => Some(log::LevelFilter::Debug),
				_ => Some(log::LevelFilter::Trace),
			}
		};

		if let Some(new_level) = override_log_level {
			logging_builder.filter_level(new_level);
		}

		logging_builder.init();
	}
}

/// Overwrites `path` with `data`, creating it if needed
fn write_output(path: &Path, data: &[u8]) -> anyhow::Result<()> {
	fs::write(path, data).with_context(|| format!("unable to write output file {path:?}"))
}

/// Reports `msg` and exits. Fatal errors still reach stderr when logging is turned off.
pub fn die(code: ExitCode, msg: &str) -> ! {
	if log::log_enabled!(log::Level::Error) {
		log::error!("{}", msg);
	} else {
		eprintln!("error: {msg}");
	}
	std::process::exit(code)
}
