use clap::Parser;
use forcegps::{logging, run, Args};

fn main() -> Result<(), anyhow::Error> {
    // argument errors exit 1 like every other failure; --help/--version exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            err.print()?;
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let subscriber = logging::subscriber(args.verbosity());
    tracing::subscriber::with_default(subscriber, || run(args))?;
    Ok(())
}
