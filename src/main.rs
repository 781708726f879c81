// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::io::{self, BufRead, Write};

#[macro_use]
mod log;

mod analyze;
mod report;

use analyze::analyze_file;
use report::{parse_selection, write_report};

fn main() {
    let args = clap::App::new("textstat")
        .version("0.0.1")
        .author("Srimanta Barua <srimanta.barua1@gmail.com>")
        .about("Line, character and frequency statistics for text files")
        .arg(
            clap::Arg::with_name("FILE")
                .help("Text file to analyze")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::with_name("sections")
                .short("s")
                .long("sections")
                .takes_value(true)
                .help("Report sections to print, e.g. \"1 3 4\" (skips the menu)"),
        )
        .get_matches();

    let path = args.value_of("FILE").unwrap();
    let stats = match analyze_file(path) {
        Ok(stats) => stats,
        Err(e) => {
            error!("failed to read '{}': {}", path, e);
            return;
        }
    };

    let selection = match args.value_of("sections") {
        Some(s) => s.to_owned(),
        None => match prompt_selection() {
            Ok(s) => s,
            Err(e) => {
                error!("failed to read selection: {}", e);
                return;
            }
        },
    };

    let sections = parse_selection(&selection);
    if sections.is_empty() {
        println!("Nothing selected");
        return;
    }

    let stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &stats, &sections) {
        error!("failed to write report: {}", e);
    }
}

fn prompt_selection() -> io::Result<String> {
    println!("1. Line count");
    println!("2. Character count");
    println!("3. Empty line count");
    println!("4. Character frequency table");
    print!("Sections to print (numbers separated by spaces or commas): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
