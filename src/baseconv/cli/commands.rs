use super::print::{print_messages, print_result};
use super::setup::Cli;
use baseconv::api;
use baseconv::error::{BaseConvError, Result};
use baseconv::model::ConversionRequest;
use clap::error::ErrorKind;
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = parse_cli()?;
    let request = ConversionRequest::from_args(&cli.value, &cli.base, cli.nbits.as_deref())?;
    let result = api::run(&request)?;

    if cli.verbose {
        print_messages(&result.messages);
    }
    print_result(&result, cli.output)
}

/// Parses the command line. `--help` and `--version` print and exit 0 here; every other
/// clap failure becomes a usage error so the process exits with status 1.
fn parse_cli() -> Result<Cli> {
    Cli::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => BaseConvError::Usage(e.render().to_string()),
    })
}
