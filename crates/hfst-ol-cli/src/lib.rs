// hfst-ol-cli: shared utilities for the lookup front-end.

use std::process;

use hfst_ol::Transducer;

/// Environment variable consulted when no transducer path is given.
pub const TRANSDUCER_PATH_ENV: &str = "HFST_LOOKUP_PATH";

/// Load the transducer from the explicit argument or the environment.
pub fn load_transducer(path_arg: Option<&str>) -> Result<Transducer, String> {
    let path = match path_arg {
        Some(p) => p.to_string(),
        None => std::env::var(TRANSDUCER_PATH_ENV).map_err(|_| {
            format!(
                "no transducer file given; pass -t PATH or set {TRANSDUCER_PATH_ENV}"
            )
        })?,
    };

    Transducer::from_path(&path).map_err(|e| format!("failed to load {path}: {e}"))
}

/// Parse a `--transducer=PATH` or `-t PATH` argument from command line args.
///
/// Returns `(transducer_path, remaining_args)`.
pub fn parse_transducer_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--transducer=") {
            path = Some(val.to_string());
        } else if arg == "--transducer" || arg == "-t" {
            if i + 1 < args.len() {
                path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
