use std::fmt::Write;
use std::process::ExitCode;

use anyhow::Context;
use prim_conform::{ConformConfig, Report, Runner, Status, Suite, builtin};
use prim_core::Registry;
use serde_json::json;
use tracing::info;

use super::{emit, exit_status, layered_config};
use crate::args::ConformArgs;

fn build_config(args: &ConformArgs) -> anyhow::Result<ConformConfig> {
    let config = layered_config(args.config.as_deref(), args.tolerance, args.only.as_deref())?
        .with_skip(args.skip.iter().cloned());
    Ok(if args.fail_fast {
        config.with_fail_fast(true)
    } else {
        config
    })
}

fn load_suites(args: &ConformArgs, registry: &Registry) -> anyhow::Result<Vec<Suite>> {
    let mut suites = Vec::new();
    if args.builtin || args.paths.is_empty() {
        suites.push(builtin::standard_suite());
    }
    for path in &args.paths {
        let loaded = Suite::load_path(path, registry)
            .with_context(|| format!("loading suites from {}", path.display()))?;
        suites.extend(loaded);
    }
    Ok(suites)
}

fn render_text(report: &Report, verbose: bool) -> anyhow::Result<String> {
    let mut out = String::new();
    for outcome in &report.outcomes {
        let show = match outcome.status {
            Status::Failed(_) => true,
            Status::Passed | Status::Skipped(_) => verbose,
        };
        if show {
            writeln!(out, "{outcome}")?;
        }
    }
    writeln!(out, "{}", report.summary())?;
    Ok(out)
}

pub(crate) fn run(args: &ConformArgs) -> anyhow::Result<ExitCode> {
    let registry = Registry::standard();
    let config = build_config(args)?;
    let suites = load_suites(args, &registry)?;
    info!(suites = suites.len(), tolerance = config.tolerance, "running conformance");

    let report = Runner::new(&registry, config).run_all(&suites);
    let text = if args.json {
        let mut lines = report.to_json_lines();
        let summary = json!({
            "passed": report.passed(),
            "failed": report.failed(),
            "skipped": report.skipped(),
        });
        writeln!(lines, "{}", json!({ "summary": summary }))?;
        lines
    } else {
        render_text(&report, tracing::enabled!(tracing::Level::INFO))?
    };
    emit(&text)?;
    Ok(exit_status(report.is_success()))
}
