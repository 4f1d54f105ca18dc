// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::{CatalogChoice, Config};
use kylimmo_app::{AppCommand, AppState, Route};
use kylimmo_catalog::{Catalog, Dataset};
use runtime::CatalogRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `kylimmo --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let choice = match options.dataset {
        Some(dataset) => CatalogChoice::Builtin(dataset),
        None => config.catalog_choice()?,
    };
    let catalog = match &choice {
        CatalogChoice::Builtin(dataset) => Catalog::builtin(*dataset)?,
        CatalogChoice::File(path) => Catalog::from_path(path).with_context(|| {
            format!(
                "load catalog {} -- if this path is wrong, fix [catalog].path",
                path.display()
            )
        })?,
    };

    if options.check_only {
        return Ok(());
    }

    let mut state = AppState::with_viewport_width(kylimmo_tui::startup_logical_width()?);
    if !config.show_home() {
        state.dispatch(AppCommand::Navigate(Route::Properties));
    }

    let runtime = CatalogRuntime::new(catalog, config.base_url())?;
    kylimmo_tui::run_app(&mut state, &runtime)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    dataset: Option<Dataset>,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        dataset: None,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--dataset" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--dataset requires a dataset name"))?;
                let name = value.as_ref();
                options.dataset = Some(Dataset::parse(name).ok_or_else(|| {
                    anyhow::anyhow!(
                        "unknown dataset {name:?}; expected one of: {}",
                        Dataset::ALL.map(Dataset::as_str).join(", ")
                    )
                })?);
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("kylimmo");
    println!("  --config <path>          Use a specific config path");
    println!("  --dataset <name>         Use an embedded dataset (abidjan, vitrine)");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config + catalog and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args};
    use anyhow::Result;
    use kylimmo_catalog::Dataset;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/kylimmo-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                dataset: None,
                print_config_path: false,
                print_example: false,
                check_only: false,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_config_value() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));
    }

    #[test]
    fn parse_cli_args_accepts_known_dataset_names() -> Result<()> {
        let options = parse_cli_args(vec!["--dataset", "vitrine"], default_options_path())?;
        assert_eq!(options.dataset, Some(Dataset::Vitrine));
        Ok(())
    }

    #[test]
    fn parse_cli_args_rejects_unknown_dataset_with_candidates() {
        let error = parse_cli_args(vec!["--dataset", "lagunes"], default_options_path())
            .expect_err("unknown dataset should fail");
        let message = error.to_string();
        assert!(message.contains("lagunes"));
        assert!(message.contains("abidjan, vitrine"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--print-config-path", "--print-example-config", "--check"],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }
}
