use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use lexer::{
    display_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
};
use log::{debug, info};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: lexer <file>");
        exit(1);
    }

    let file = PathBuf::from(&args[1]);
    let source = match read_to_string(&file) {
        Ok(contents) => contents,
        Err(_) => {
            eprintln!("Cannot open the file {}", file.display());
            exit(1);
        }
    };

    let start = Instant::now();

    match tokenize(&source) {
        Ok(tokens) => {
            debug!("Tokenized in {:?}", start.elapsed());
            info!("{} tokens", tokens.len() - 1); // not counting EOF

            for token in tokens.iter().filter(|t| t.kind != TokenKind::EOF) {
                println!("{}", token);
            }
        }
        Err(error) => {
            display_error(&error, &file);
            exit(1);
        }
    }
}
