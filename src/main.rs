use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use bench_mean::cli::{Args, OutputFormat};
use bench_mean::Report;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let series = args.series();
    let report = Report::build(&series, args.column)
        .with_context(|| format!("computing column {} means", args.column))?;

    let out = match args.format {
        OutputFormat::Json => {
            let mut json = report.render_json().context("serializing report")?;
            json.push('\n');
            json
        }
        OutputFormat::Text if args.summary => report.render_summary(),
        OutputFormat::Text => report.render_text(),
    };

    std::io::stdout()
        .lock()
        .write_all(out.as_bytes())
        .context("writing report")?;

    Ok(())
}
