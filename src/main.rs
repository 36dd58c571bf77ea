use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use sigma::{
    error::{paint_runtime, paint_syntax},
    interpreter::evaluator::core::DEFAULT_MAX_DEPTH,
    run_with_depth,
};

/// Process exit code for usage errors: bad arguments or an unreadable file.
const EXIT_USAGE: u8 = 64;
/// Process exit code for syntax and runtime errors.
const EXIT_RUNTIME: u8 = 65;
/// Process exit code for reference errors.
const EXIT_REFERENCE: u8 = 66;

/// sigma runs scripts written in the Sigma programming language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script. ".sigma" is appended when the path has no
    /// extension.
    script: PathBuf,

    /// The maximum depth of nested user-function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            if error.use_stderr() {
                let _ = error.print();
                return ExitCode::from(EXIT_USAGE);
            }

            // --help and --version land here.
            let _ = error.print();
            return ExitCode::SUCCESS;
        },
    };

    let mut path = args.script;

    if path.extension().is_none() {
        path.set_extension("sigma");
    }

    let Ok(source) = fs::read_to_string(&path) else {
        eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::from(EXIT_USAGE);
    };

    let report = run_with_depth(&source, args.max_depth);

    for line in &report.output {
        println!("{line}");
    }

    if !report.syntax_errors.is_empty() {
        for error in &report.syntax_errors {
            eprintln!("{}", paint_syntax(error));
        }

        return ExitCode::from(EXIT_RUNTIME);
    }

    if let Some(error) = &report.runtime_error {
        eprintln!("{}", paint_runtime(error));

        return if error.is_reference() {
            ExitCode::from(EXIT_REFERENCE)
        } else {
            ExitCode::from(EXIT_RUNTIME)
        };
    }

    ExitCode::SUCCESS
}
