#[macro_use] extern crate log;
extern crate simplelog;
extern crate gdsu;

use simplelog::*;
use std::fs::File;
use std::io::{stdin, stdout};
use std::process;

use gdsu::config::Config;

// Errors before the configured logger exists still go through `error!`.
fn fail(msg: String, code: i32) -> ! {
	let _ = TermLogger::init(LevelFilter::Error, simplelog::Config::default(),
		TerminalMode::Stderr, ColorChoice::Auto);
	error!("{}", msg);
	process::exit(code);
}

// Usage: first stdin line is a JSON config object, every following line is
// an op (`find x`, `union x y`, `connected x y`, `groups`).
fn main() {
	let stdin = stdin();
	let lines = match gdsu::driver::read_lines(stdin.lock()) {
		Ok(lines) => lines,
		Err(e) => fail(format!("cannot read input: {}", e), 1),
	};
	let mut lines_iter = lines.into_iter();

	let first = lines_iter.next().unwrap_or_else(|| "{}".to_string());
	let config = match Config::parse(&first) {
		Ok(config) => config,
		Err(e) => fail(format!("bad config: {}", e), 2),
	};

	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		TermLogger::new(config.log_level, simplelog::Config::default(),
			TerminalMode::Stderr, ColorChoice::Auto),
	];
	let mut log_file_error = None;
	if let Some(path) = &config.log_file {
		match File::create(path) {
			Ok(file) => loggers.push(WriteLogger::new(config.log_level, simplelog::Config::default(), file)),
			Err(e) => log_file_error = Some(format!("cannot open log file {}: {}", path.display(), e)),
		}
	}
	let _ = CombinedLogger::init(loggers);
	if let Some(msg) = log_file_error {
		error!("{}", msg);
	}

	let stdout = stdout();
	let mut out = stdout.lock();
	match gdsu::driver::run(&config, lines_iter, &mut out) {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			error!("{}", e);
			process::exit(1);
		}
	}
}
