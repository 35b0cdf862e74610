// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: render a bilingual portfolio site from JSON content

use anyhow::{anyhow, Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use colored::*;
use folio::background::{Point, RenderLoop, SvgSurface, WaveField};
use folio::build::{build_site, render_to_string};
use folio::config::SiteConfig;
use folio::content::{ContentStore, DirectorySource};
use folio::diagnostics::run_site_diagnostics;
use folio::i18n::Lang;
use folio::report::{print_report, save_report, ReportOutputFormat};
use folio::storage::persist_report;
use folio::switch::{resume_lang, Location, Page};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Bilingual portfolio and resume renderer")]
#[command(long_about = None)]
struct Cli {
    /// Site root; config and relative paths are resolved against it
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Site config (default: folio.yaml / folio.yml / folio.json in the root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render index and resume in both languages and copy assets
    Build {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Only build these pages
        #[arg(long, value_enum, value_delimiter = ',')]
        pages: Option<Vec<Page>>,

        /// Save the build report to this file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Format of the saved report (default: from the file extension)
        #[arg(long, value_enum)]
        report_format: Option<ReportOutputFormat>,

        /// Also keep timestamped reports (json and yaml) in this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Do not print the build summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Render one page as it would load at a URL
    Render {
        /// Page to render
        #[arg(short, long, value_enum, default_value = "index")]
        page: Page,

        /// Page URL; `?lang=en` selects English
        #[arg(long, default_value = "index.html")]
        url: String,

        /// Language, overriding the URL
        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the resume page
    Resume {
        /// Language, overriding URL and referrer
        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,

        /// Page URL
        #[arg(long, default_value = "resume.html")]
        url: String,

        /// Referring page; `lang=en` in it selects English
        #[arg(long)]
        referrer: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render background animation frames as SVG
    Background {
        /// Directory for frame-NNNNN.svg files
        #[arg(short, long, default_value = "frames")]
        out: PathBuf,

        #[arg(long, default_value = "1280")]
        width: f64,

        #[arg(long, default_value = "720")]
        height: f64,

        /// Number of frames to draw
        #[arg(short, long, default_value = "60")]
        frames: u64,

        /// Milliseconds between frames
        #[arg(long, default_value = "16")]
        interval_ms: u64,

        /// Seed for reproducible line placement
        #[arg(long)]
        seed: Option<u64>,

        /// Pointer position as X,Y
        #[arg(long, value_parser = parse_point)]
        pointer: Option<Point>,
    },

    /// Check data documents, skeletons and translations
    Check,
}

fn parse_lang(value: &str) -> Result<Lang, String> {
    Lang::from_code(value).ok_or_else(|| format!("unknown language '{}' (use fa or en)", value))
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", value))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn emit(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
            println!("Page saved to: {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = SiteConfig::discover(&cli.root, cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_dir = data;
    }

    match cli.command {
        Commands::Build {
            out,
            pages,
            report,
            report_format,
            report_dir,
            quiet,
        } => {
            if let Some(out) = out {
                config.output_dir = out;
            }
            let pages = pages.unwrap_or_else(|| vec![Page::Index, Page::Resume]);
            println!(
                "Building {} into {}",
                config.data_dir.display(),
                config.output_dir.display()
            );

            let build_report = build_site(&config, &pages, current_year())?;

            if !quiet {
                print_report(&build_report);
            }
            if let Some(path) = report {
                let format = report_format.unwrap_or_else(|| ReportOutputFormat::for_path(&path));
                save_report(&build_report, &path, format)?;
            }
            if let Some(dir) = report_dir {
                let stored = persist_report(
                    &build_report,
                    &dir,
                    &[ReportOutputFormat::Json, ReportOutputFormat::Yaml],
                )?;
                for path in stored {
                    info!(path = %path.display(), "report stored");
                }
            }
        }

        Commands::Render {
            page,
            url,
            lang,
            output,
        } => {
            let location = Location::parse(&url);
            let lang = lang.unwrap_or_else(|| location.lang());
            let store = ContentStore::load(&DirectorySource::new(&config.data_dir));
            let html = render_to_string(&store, &config, page, lang, current_year())?;
            emit(&html, output.as_deref())?;
        }

        Commands::Resume {
            lang,
            url,
            referrer,
            output,
        } => {
            let location = Location::parse(&url);
            let lang = lang.unwrap_or_else(|| resume_lang(&location, referrer.as_deref()));
            let store = ContentStore::load(&DirectorySource::new(&config.data_dir));
            if store.profile().is_none() {
                eprintln!("{}", "profile.json missing: rendering load-failure page".yellow());
            }
            let html = render_to_string(&store, &config, Page::Resume, lang, current_year())?;
            emit(&html, output.as_deref())?;
        }

        Commands::Background {
            out,
            width,
            height,
            frames,
            interval_ms,
            seed,
            pointer,
        } => {
            if frames == 0 {
                return Err(anyhow!("--frames must be at least 1"));
            }
            let mut field = WaveField::new(config.background, width, height, seed);
            field.set_pointer(pointer);
            let surface = SvgSurface::to_dir(&out)?;
            println!(
                "Rendering {} frames ({}x{}) into {}",
                frames,
                width,
                height,
                out.display()
            );
            let running = RenderLoop::start(
                field,
                surface,
                Duration::from_millis(interval_ms),
                Some(frames),
            )?;
            let finished = running.wait()?;
            println!(
                "{} {} frames written",
                "done:".green().bold(),
                finished.frames
            );
        }

        Commands::Check => {
            run_site_diagnostics(&config)?;
        }
    }

    Ok(())
}
