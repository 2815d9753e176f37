mod result;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use log::error;
use log::info;
use result::SeqprimeResult;
use seqprime::primality::is_prime;
use seqprime::sequences::fibonacci;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The number of Fibonacci terms to print, one per line, starting from 0.
    ///
    /// A negative value is rejected.
    ///
    /// Possible values: i64
    #[arg(
        short = 'n',
        long = "num-terms",
        default_value_t = 10,
        allow_negative_numbers = true,
        verbatim_doc_comment
    )]
    num_terms: i64,

    /// The integer to test for primality; the result is printed as `true` or
    /// `false` on the last output line.
    ///
    /// Possible values: i64
    #[arg(
        long = "candidate",
        default_value_t = 29,
        allow_negative_numbers = true,
        verbatim_doc_comment
    )]
    candidate: i64,

    /// Enables logging of debug messages.
    ///
    /// Possible values: bool
    #[arg(long = "verbose", verbatim_doc_comment)]
    verbose: bool,
}

fn configure_logging(verbose: bool) -> std::io::Result<()> {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // Log to stderr so that stdout carries nothing but the sequence terms and
    // the primality verdict.
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SeqprimeResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose)?;

    info!(
        "Printing {} Fibonacci terms and testing {} for primality",
        args.num_terms, args.candidate
    );

    for term in fibonacci(args.num_terms)? {
        println!("{term}");
    }

    println!("{}", is_prime(args.candidate));

    Ok(())
}
