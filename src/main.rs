mod args;
mod descriptor;
mod input;
mod output;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};
use tinct_operand::Kind;

use args::{Arguments, Command};

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    init_logger(args.verbose);

    match &args.command {
        Command::Inspect(_) => inspect(&args),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn inspect(args: &Arguments) -> anyhow::Result<()> {
    let opts = args.command.options();

    let mut descriptors = opts.operands.clone();
    if let Some(path) = &opts.file {
        let read = input::read_descriptors(path)
            .with_context(|| format!("failed to read descriptors from {}", path.display()))?;
        descriptors.extend(read);
    }

    debug!("inspecting {} operands", descriptors.len());

    for descriptor in descriptors {
        let mut operand = descriptor::parse(&descriptor)?;

        if let Some(size) = &opts.resize {
            operand.resize(size);
        }

        if let Some(value) = opts.value {
            if matches!(operand.kind(), Kind::Register { .. }) {
                operand.set_value(value)?;
            }
        }

        output::print_operand(&operand).with_context(|| format!("in `{descriptor}`"))?;
    }

    Ok(())
}
