use clap::Parser;

use safe2bin::cli::{die, Safe2Bin};

fn main() {
	if let Err(e) = Safe2Bin::parse().exec() {
		die(exitcode::IOERR, &format!("{e:#}"))
	}
}
