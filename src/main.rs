// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! Runs the interactive handbook TUI against the built-in dataset, or against
//! a JSON catalog file via `--catalog`. `--route` selects the initial page by
//! path (`/`, `/components`, `/implementation`, `/best-practices`,
//! `/interview`); unknown paths open the not-found view.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--catalog <file.json>] [--route <path>]\n\nRoutes: / /components /implementation /best-practices /interview\nUnknown routes open the not-found view.\n\nEnvironment:\n  PROTEUS_THEME        initial theme (`light` or `dark`)\n  PROTEUS_TUI_PALETTE  18-color CSV terminal palette override"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    catalog: Option<String>,
    route: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                if options.catalog.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.catalog = Some(path);
            }
            "--route" => {
                if options.route.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.route = Some(path);
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "proteus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let catalog = match options.catalog {
            Some(path) => proteus::store::CatalogFile::new(path).load()?,
            None => proteus::content::builtin_catalog(),
        };

        let route = options
            .route
            .as_deref()
            .map(proteus::tui::routes::Route::parse)
            .unwrap_or_default();

        proteus::tui::run_with_catalog(catalog, route)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("proteus: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_catalog_path() {
        let options =
            parse_options(["--catalog".to_owned(), "some/catalog.json".to_owned()].into_iter())
                .expect("parse options");
        assert_eq!(options.catalog.as_deref(), Some("some/catalog.json"));
        assert!(options.route.is_none());
    }

    #[test]
    fn parses_route_path() {
        let options = parse_options(["--route".to_owned(), "/interview".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.route.as_deref(), Some("/interview"));
        assert!(options.catalog.is_none());
    }

    #[test]
    fn parses_catalog_and_route_in_any_order() {
        let options = parse_options(
            [
                "--route".to_owned(),
                "/".to_owned(),
                "--catalog".to_owned(),
                "c.json".to_owned(),
            ]
            .into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.catalog.as_deref(), Some("c.json"));
        assert_eq!(options.route.as_deref(), Some("/"));
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
        parse_options(["positional".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(
            [
                "--catalog".to_owned(),
                "a.json".to_owned(),
                "--catalog".to_owned(),
                "b.json".to_owned(),
            ]
            .into_iter(),
        )
        .unwrap_err();

        parse_options(
            ["--route".to_owned(), "/".to_owned(), "--route".to_owned(), "/404".to_owned()]
                .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_missing_values() {
        parse_options(["--catalog".to_owned()].into_iter()).unwrap_err();
        parse_options(["--route".to_owned()].into_iter()).unwrap_err();
    }
}
