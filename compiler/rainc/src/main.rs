//! Rain compiler CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use rain_diagnostic::emitter::ColorMode;
use rainc::commands::{read_file, run, Command, Options};

fn print_usage() {
    eprintln!("Usage: rain <command> <file> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>      Print the token stream");
    eprintln!("  parse <file>    Parse one expression and print its tree");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --error-limit=<n>          Stop reporting after n errors (0 = no limit)");
    eprintln!("  --color=<auto|always|never>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RAIN_LOG        Log filter, e.g. RAIN_LOG=rain_parse=trace");
    eprintln!("  RAIN_LOG_TREE   Show logs as an indented tree");
}

fn main() -> ExitCode {
    rainc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().and_then(|name| Command::from_name(name)) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let mut options = Options {
        is_tty: std::io::stderr().is_terminal(),
        ..Options::default()
    };
    let mut path = None;
    for arg in &args[1..] {
        if let Some(limit) = arg.strip_prefix("--error-limit=") {
            let Ok(limit) = limit.parse() else {
                eprintln!("error: invalid error limit '{limit}'");
                return ExitCode::FAILURE;
            };
            options.diagnostics = options.diagnostics.with_error_limit(limit);
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => {
                    eprintln!("error: invalid color mode '{mode}'");
                    return ExitCode::FAILURE;
                }
            };
        } else if !arg.starts_with('-') && path.is_none() {
            path = Some(arg.as_str());
        } else {
            eprintln!("error: unexpected argument '{arg}'");
            return ExitCode::FAILURE;
        }
    }

    let Some(path) = path else {
        eprintln!("error: missing file path");
        print_usage();
        return ExitCode::FAILURE;
    };
    let bytes = match read_file(path) {
        Ok(bytes) => bytes,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    match run(command, path, &bytes, &options, &mut stdout, &mut stderr) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
