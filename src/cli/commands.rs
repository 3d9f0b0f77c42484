//! Command implementation for the ticket-triage CLI.

use std::io;

use crate::cli::args::TriageArgs;
use crate::corpus::load_corpus;
use crate::error::Result;
use crate::ml::pipeline::ClassifierPipeline;
use crate::shell::run_shell;

/// Load the corpus, fit the pipeline, and run the interactive shell.
pub fn execute(args: TriageArgs) -> Result<()> {
    println!("Loading ticket data from: {}", args.data.display());
    let corpus = load_corpus(&args.data)?;
    println!("Loaded {} support tickets.", corpus.len());

    println!("Training the classifier...");
    let mut pipeline = ClassifierPipeline::new()?;
    pipeline.fit(&corpus.texts(), &corpus.labels())?;
    println!("Model trained and ready.");

    print_banner();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_shell(&pipeline, stdin.lock(), &mut stdout)
}

fn print_banner() {
    println!();
    println!("{}", "=".repeat(50));
    println!("   IT SUPPORT TICKET ROUTER");
    println!("{}", "=".repeat(50));
    println!("Describe an IT problem below (in English).");
    println!("Type 'exit' to quit.");
    println!();
}
