mod cli;
mod consts;
mod handlers;
mod selftest;

use anyhow::Result;
use env_logger::Env;

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = cli::create_featbin_cli();
    let matches = app.get_matches();

    init_logging(matches.get_flag("quiet"));

    match matches.get_flag("test") {
        //
        // SELF-TEST
        //
        true => selftest::run_self_test()?,

        //
        // COUNT
        //
        false => handlers::run_count(&matches)?,
    };

    Ok(())
}
