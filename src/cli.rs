// src/cli.rs
//
// Terminal front end for the same two page operations.
// The message area goes to stderr, the table to stdout.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    api::ApiClient,
    config::{
        Settings,
        consts::HEADERS,
        settings::{injected_api_base, resolve_api_base},
    },
    controller,
    core::{FetchError, HttpTransport},
    csv::{self, Delim},
    data::TableRow,
    view::{PageState, View},
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Trigger the novedades scraper and print its rows")]
pub struct Cli {
    /// API base URL for this run (beats the saved setting and $API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print the current rows
    Data(OutputArgs),
    /// Start a scraping run, then fetch and print the rows
    Scrape(OutputArgs),
    /// Show or edit the saved settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Include the header line (csv/tsv; the table format always has one)
    #[arg(long)]
    pub headers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the saved setting and the effective API base
    Show,
    /// Save the API base URL
    SetApiBase { url: String },
    /// Forget the saved API base URL
    ClearApiBase,
}

/// Message area on stderr; rows kept for printing once the operation ends.
#[derive(Default)]
struct CliView {
    page: PageState,
}

impl View for CliView {
    fn set_message(&mut self, msg: &str) {
        if !msg.is_empty() {
            eprintln!("{msg}");
        }
        self.page.set_message(msg);
    }

    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.page.replace_rows(rows);
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let mut settings = Settings::load();

    match cli.command {
        Command::Data(out) => {
            let api = client(cli.api_base.as_deref(), &settings)?;
            operate(&api, &out, controller::load_and_render::<HttpTransport>)
        }
        Command::Scrape(out) => {
            let api = client(cli.api_base.as_deref(), &settings)?;
            operate(&api, &out, controller::trigger_scrape::<HttpTransport>)
        }
        Command::Config(ConfigCommand::Show) => {
            let saved = settings.api_base.as_deref().unwrap_or("(none)");
            println!("settings file: {}", Settings::default_path().display());
            println!("saved api_base: {saved}");
            println!("effective api_base: {}", effective_base(cli.api_base.as_deref(), &settings));
            Ok(())
        }
        Command::Config(ConfigCommand::SetApiBase { url }) => {
            settings.set_api_base(&url);
            save(&settings)
        }
        Command::Config(ConfigCommand::ClearApiBase) => {
            settings.api_base = None;
            save(&settings)
        }
    }
}

fn effective_base(flag: Option<&str>, settings: &Settings) -> String {
    let injected = injected_api_base();
    resolve_api_base([flag, settings.api_base.as_deref(), injected.as_deref()])
}

fn client(flag: Option<&str>, settings: &Settings) -> Result<ApiClient> {
    let base = effective_base(flag, settings);
    logf!("CLI: api_base={}", base);
    let transport = HttpTransport::new().wrap_err("could not build the HTTP client")?;
    Ok(ApiClient::new(base, transport))
}

fn save(settings: &Settings) -> Result<()> {
    let path = settings
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))
        .wrap_err("could not save settings")?;
    println!("saved {}", path.display());
    Ok(())
}

fn operate(
    api: &ApiClient,
    out: &OutputArgs,
    op: fn(&ApiClient, &mut dyn View) -> std::result::Result<usize, FetchError>,
) -> Result<()> {
    let mut view = CliView::default();
    op(api, &mut view)?;

    let stdout = io::stdout();
    let mut w = stdout.lock();
    match out.format {
        OutputFormat::Table => write_aligned(&mut w, &view.page.rows)?,
        OutputFormat::Csv => csv::write_table(&mut w, &view.page.rows, out.headers, Delim::Csv)?,
        OutputFormat::Tsv => csv::write_table(&mut w, &view.page.rows, out.headers, Delim::Tsv)?,
    }
    w.flush()?;
    Ok(())
}

/// Space-padded columns for humans.
fn write_aligned<W: Write>(mut w: W, rows: &[TableRow]) -> io::Result<()> {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in rows {
        for (i, cell) in r.cells().iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |w: &mut W, cells: [&str; 3]| -> io::Result<()> {
        writeln!(
            w,
            "{:<w0$}  {:<w1$}  {}",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1],
        )
    };

    line(&mut w, HEADERS)?;
    for r in rows {
        line(&mut w, r.cells())?;
    }
    Ok(())
}
