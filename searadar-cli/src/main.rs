use clap::Parser;
use miette::{IntoDiagnostic, Result};
use searadar_cli::{open_input, pipeline, Cli, Dialect, VERSION};
use searadar_core::Mr231_3Converter;
use std::io;

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    log::info!("searadar {} converting {} sentences", VERSION, args.dialect);

    let reader = open_input(args.input.as_deref()).into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let options = pipeline::Options::from(&args);

    let summary = match args.dialect {
        Dialect::Mr231_3 => {
            pipeline::run(&Mr231_3Converter::new(), reader, &mut writer, options)
                .into_diagnostic()?
        }
    };

    log::info!("{}", summary);
    Ok(())
}
