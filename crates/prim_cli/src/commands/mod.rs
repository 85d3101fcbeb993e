use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use prim_conform::{ConfigFile, ConformConfig};

use crate::args::Command;

pub(crate) mod call;
pub(crate) mod conform;
pub(crate) mod export;
pub(crate) mod laws;
pub(crate) mod list;

pub(crate) fn dispatch(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::List { json } => list::run(json),
        Command::Call { op, args } => call::run(&op, &args),
        Command::Conform(args) => conform::run(&args),
        Command::Laws(args) => laws::run(&args),
        Command::Export { path } => export::run(&path),
    }
}

/// Defaults, then the config file, then environment, then the shared flags.
pub(crate) fn layered_config(
    file: Option<&Path>,
    tolerance: Option<f64>,
    only: Option<&str>,
) -> anyhow::Result<ConformConfig> {
    let mut config = ConformConfig::default();
    if let Some(path) = file {
        config = config.apply_file(&ConfigFile::load(path)?)?;
    }
    config = config.apply_env()?;
    if let Some(t) = tolerance {
        config = config.with_tolerance(t)?;
    }
    if let Some(p) = only {
        config = config.with_only(p)?;
    }
    Ok(config)
}

/// Writes `text` to stdout, treating a closed pipe as success.
pub(crate) fn emit(text: &str) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}

pub(crate) fn exit_status(success: bool) -> ExitCode {
    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
