// hfst-lookup: analyze words with an optimized-lookup transducer.
//
// Reads words from the command line or stdin (one per line) and prints
// every analysis as input, output and weight, tab-separated. Words with no
// analysis print the conventional `+?` marker.
//
// Usage:
//   hfst-lookup -t TRANSDUCER [WORD...]
//
// Options:
//   -t, --transducer PATH   Transducer file (or set HFST_LOOKUP_PATH)
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use hfst_ol::CachedTransducer;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, words) = hfst_ol_cli::parse_transducer_path(&args);

    if hfst_ol_cli::wants_help(&args) {
        println!("hfst-lookup: look up words in an optimized-lookup transducer.");
        println!();
        println!("Usage: hfst-lookup -t TRANSDUCER [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -t, --transducer PATH   Transducer file (or set HFST_LOOKUP_PATH)");
        println!("  -h, --help              Print this help");
        return;
    }

    let transducer = hfst_ol_cli::load_transducer(path.as_deref())
        .unwrap_or_else(|e| hfst_ol_cli::fatal(&e));
    let mut cached = CachedTransducer::new(transducer);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut analyze_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let analyses = cached.lookup(word);
        if analyses.is_empty() {
            let _ = writeln!(out, "{word}\t+?");
        } else {
            for analysis in analyses {
                let _ = writeln!(out, "{word}\t{}\t{}", analysis.text(), analysis.weight());
            }
        }
        let _ = writeln!(out);
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            analyze_word(word, &mut out);
        }
    } else {
        for word in &words {
            analyze_word(word, &mut out);
        }
    }

    let _ = out.flush();
}
