pub mod cli;
pub mod config;
pub mod filter;
pub mod loader;
pub mod report;

use crate::config::FinderConfig;
use crate::filter::{
    Evaluator, FilterExpression, FilterSpec, filter_warnings, to_filter_specs,
};
use crate::report::{
    build_query_report, display_query_report, format_listing, format_summary_text, format_table,
    generate_json_output, summarize,
};
use anyhow::Context;
pub use cli::{Cli, ColorMode, Commands, FormArgs, OutputFormat, cli_parse};
pub use loader::{LoadError, Record, load, load_file};

fn write_output_file(path: &std::path::Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

/// Collect the specs from the form flags and every `--where` expression
fn build_filter_specs(
    form: &FormArgs,
    expressions: &[String],
    config: &FinderConfig,
) -> anyhow::Result<Vec<FilterSpec>> {
    let layout = config.layout();
    let mut specs = form.to_form_query().to_specs(&layout)?;

    let mut expr = FilterExpression::new();
    for raw in expressions {
        let parsed = FilterExpression::parse(raw)
            .with_context(|| format!("Invalid filter expression: {raw}"))?;
        expr.extend(parsed);
    }
    specs.extend(to_filter_specs(&expr, &layout)?);

    Ok(specs)
}

pub fn run() -> anyhow::Result<()> {
    run_with(cli_parse())
}

pub fn run_with(cli: Cli) -> anyhow::Result<()> {
    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    let config = crate::config::load_config(cli.config.as_deref())
        .context("Failed to load config")?;
    let data_path = cli.data.clone().unwrap_or_else(|| config.data_file.clone());

    if cli.should_print(1) {
        eprintln!("Verbosity level: {}", cli.verbose);
        eprintln!("Color mode: {:?}", cli.color);
        eprintln!("Config profile: {}", config.profile_name);
        if let Some(config_path) = &cli.config {
            eprintln!("Config file: {}", config_path.display());
        }
        eprintln!("Data file: {}", data_path.display());
        if let Some(out_path) = &cli.output {
            eprintln!("Output will be written to: {}", out_path.display());
        }
    }

    let records = load_file(&data_path)?;
    if cli.should_print(2) {
        eprintln!("Loaded {} records", records.len());
    }

    match &cli.command {
        Commands::Find {
            form,
            expressions,
            table,
        } => {
            let specs = build_filter_specs(form, expressions, &config)?;
            let layout = config.layout();

            if !cli.quiet {
                for warning in filter_warnings(&specs, &layout) {
                    eprintln!("{warning}");
                }
            }
            if cli.should_print(2) {
                for spec in specs.iter().filter(|s| s.is_active()) {
                    eprintln!(
                        "Filter: {} {} {}",
                        layout.name_at(spec.column),
                        spec.operator,
                        spec.active_value().unwrap_or_default()
                    );
                }
            }

            let total_records = records.len();
            let selected = Evaluator::new(layout).select(records, &specs);
            let report = build_query_report(total_records, selected, &specs, &config);

            match cli.format {
                OutputFormat::Text => {
                    let text = if *table {
                        format_table(&report, &config)
                    } else {
                        format_listing(&report, &config)
                    };
                    display_query_report(&text, &report);
                    if let Some(path) = &cli.output {
                        write_output_file(path, &text)?;
                    }
                }
                OutputFormat::Json => {
                    let json_output = generate_json_output(&report);
                    println!("{}", json_output);
                    if let Some(path) = &cli.output {
                        write_output_file(path, &json_output)?;
                    }
                }
            }
        }
        Commands::Info => {
            let summary = summarize(&records, &config);

            match cli.format {
                OutputFormat::Text => {
                    let text = format_summary_text(&summary);
                    print!("{text}");
                    if let Some(path) = &cli.output {
                        write_output_file(path, &text)?;
                    }
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&summary)
                        .context("Failed to serialize summary")?;
                    println!("{}", json);
                    if let Some(path) = &cli.output {
                        write_output_file(path, &json)?;
                    }
                }
            }
        }
    }

    Ok(())
}
