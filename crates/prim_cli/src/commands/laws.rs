use std::fmt::Write;
use std::process::ExitCode;

use prim_conform::laws::{Samples, check_all, standard_laws};
use serde_json::json;
use tracing::info;

use super::{emit, exit_status, layered_config};
use crate::args::LawsArgs;

pub(crate) fn run(args: &LawsArgs) -> anyhow::Result<ExitCode> {
    let config = layered_config(args.config.as_deref(), args.tolerance, args.only.as_deref())?;
    info!(tolerance = config.tolerance, "checking laws");
    let results = check_all(
        &standard_laws(),
        &Samples::default(),
        config.tolerance,
        config.only.as_ref(),
    );
    let violated = results.iter().filter(|r| r.violation.is_some()).count();

    let mut out = String::new();
    for r in &results {
        if args.json {
            writeln!(out, "{}", r.to_json())?;
        } else {
            match &r.violation {
                None => writeln!(out, "ok    {}: {}", r.namespace, r.name)?,
                Some(v) => writeln!(out, "FAIL  {}: {} ({v})", r.namespace, r.name)?,
            }
        }
    }
    if args.json {
        let summary = json!({
            "laws": results.len(),
            "violated": violated,
            "tolerance": config.tolerance,
        });
        writeln!(out, "{}", json!({ "summary": summary }))?;
    } else {
        writeln!(
            out,
            "{} laws, {violated} violated (tolerance {})",
            results.len(),
            config.tolerance
        )?;
    }
    emit(&out)?;
    Ok(exit_status(violated == 0))
}
