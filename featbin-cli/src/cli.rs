use clap::{Arg, ArgAction, Command, arg, value_parser};

use crate::consts;

pub fn create_featbin_cli() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Count features in fixed-size, non-overlapping genomic windows.")
        .arg(
            Arg::new("input")
                .required_unless_present("test")
                .help("Feature coordinates file (chrom, start, end, id, type); '-' reads stdin"),
        )
        .arg(
            Arg::new("chrom-sizes")
                .required_unless_present("test")
                .help("Chromosome lengths file (chrom, length)"),
        )
        .arg(
            arg!(--"window-size" <WINDOW_SIZE>)
                .value_parser(value_parser!(u64).range(1..))
                .default_value(consts::DEFAULT_WINDOW_SIZE)
                .help("Window size in base pairs"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .default_value(consts::DEFAULT_OUT)
                .help("Output file name; a .gz suffix writes gzip"),
        )
        .arg(
            arg!(--threads <THREADS>)
                .value_parser(value_parser!(usize))
                .default_value(consts::DEFAULT_THREADS)
                .help("Number of threads used to count chromosomes"),
        )
        .arg(
            Arg::new("test")
                .long("test")
                .action(ArgAction::SetTrue)
                .help("Run the built-in test scenario instead of reading input files"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors"),
        )
}
