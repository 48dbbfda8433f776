//! Command-line interface for snipfile
//! This binary inspects snippet-definition files: it prints the event
//! stream a file parses into, and locates candidate files for a filetype.
//!
//! Usage:
//!   snipfile parse `<path>` [--format `<format>`]  - Parse a file and print its events
//!   snipfile find `<ft>` `<directory>`             - List snippet files for a filetype

use clap::{Arg, Command};
use snipfile::snippets::files::find_snippet_files;
use snipfile::snippets::formats::{serialize_events, OutputFormat};
use snipfile::snippets::parse_snippets_file;

fn main() {
    let matches = Command::new("snipfile")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting snippet-definition files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a snippet file and print its event stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the snippet file to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'yaml', 'summary')")
                        .default_value("summary"),
                ),
        )
        .subcommand(
            Command::new("find")
                .about("List snippet files for a filetype in a directory")
                .arg(
                    Arg::new("filetype")
                        .help("Filetype to look up (e.g., 'python')")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("directory")
                        .help("Snippet directory to search")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("find", find_matches)) => {
            let filetype = find_matches.get_one::<String>("filetype").unwrap();
            let directory = find_matches.get_one::<String>("directory").unwrap();
            handle_find_command(filetype, directory);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let format = format.parse::<OutputFormat>().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let events: Vec<_> = parse_snippets_file(&source, path).collect();
    let output = serialize_events(&events, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the find command
fn handle_find_command(filetype: &str, directory: &str) {
    for path in find_snippet_files(filetype, directory) {
        println!("{}", path.display());
    }
}
