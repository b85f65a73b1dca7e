use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use pdf_text::cli;

fn main() {
    let matches = Command::new("pdf-text")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract text from a PDF.")
        .long_about(
            "Prints the text of every page of a PDF to stdout, \
            one page after another separated by newlines.",
        )
        .arg(
            Arg::new("pdf")
                .value_name("PDF")
                .help("Path to a PDF file.")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .get_matches();

    // Logs go to stderr; stdout carries only the extracted text
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let path = matches
        .get_one::<PathBuf>("pdf")
        .expect("pdf is a required argument");

    if let Err(e) = cli::run(path, &mut io::stdout().lock()) {
        eprintln!("pdf-text: {:#}", e);
        process::exit(1);
    }
}
