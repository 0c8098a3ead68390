use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use tablelex::{
    display_error, init_logging, lexer::lexer::Scanner, normalize_line_endings,
    table::table::TransitionTable,
};

const USAGE: &str = "usage: tablelex <table-file> <source-file> [--dump-table]";

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Failed to install logger: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    let dump_table = args.iter().any(|arg| arg == "--dump-table");
    let paths: Vec<&String> = args.iter().filter(|arg| *arg != "--dump-table").collect();

    if paths.len() != 2 {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    let table_path = PathBuf::from(paths[0]);
    let source_path = PathBuf::from(paths[1]);

    let description = match read_to_string(&table_path) {
        Ok(description) => description,
        Err(e) => {
            eprintln!("Failed to read {}: {}", table_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let source = match read_to_string(&source_path) {
        Ok(source) => normalize_line_endings(&source),
        Err(e) => {
            eprintln!("Failed to read {}: {}", source_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let table = match TransitionTable::parse(&description) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("{} ({})", error, error.get_tip());
            eprintln!("-> {}", table_path.display());
            return ExitCode::FAILURE;
        }
    };

    eprintln!("Built transition table in {:?}", start.elapsed());

    if dump_table {
        print!("{}", table);
    }

    let scan_start = Instant::now();
    let mut scanner = Scanner::new(&table, &source);
    let mut failed = false;

    while scanner.skip_whitespace_and_check_remaining() {
        match scanner.next_token() {
            Ok(token) => println!("{}", token),
            Err(error) => {
                println!("{}", error);
                display_error(&error, &source, &source_path);
                failed = true;
                break;
            }
        }
    }

    eprintln!("Tokenized in {:?}", scan_start.elapsed());

    println!("{}", scanner.line_number());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
