// src/cli.rs
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::analysis::{leaders_table, stat_leaders};
use crate::archive::load_archive;
use crate::config::consts::STORE_DIR;
use crate::config::options::{AppOptions, LayoutChoice};
use crate::csv::write_rows;
use crate::model::StatKind;
use crate::progress::LogProgress;
use crate::runner::{self, source_for};
use crate::store::PageStore;

#[derive(Parser, Debug)]
#[command(name = "fantasy_archive", version, about = "Archive fantasy baseball per-player stats to CSV")]
pub struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape every season/team page and write one CSV per stat kind
    Scrape(ScrapeArgs),
    /// Print the top players of one stat for one fantasy team
    Leaders(LeadersArgs),
}

impl Command {
    /// Directory for `debug.log`: the store dir for `scrape`, none for `leaders`.
    pub fn log_dir(&self) -> Option<&'static Path> {
        match self {
            Command::Scrape(_) => Some(Path::new(STORE_DIR)),
            Command::Leaders(_) => None,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ScrapeArgs {
    /// TOML file with [scrape] and [export] tables; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub league: Option<u32>,
    #[arg(long)]
    pub first_season: Option<u16>,
    #[arg(long)]
    pub last_season: Option<u16>,
    /// Teams are numbered 1..=N
    #[arg(long)]
    pub teams: Option<u32>,
    /// Repeatable; default both
    #[arg(long = "kind", value_enum)]
    pub kinds: Vec<StatKind>,
    #[arg(long, value_enum)]
    pub layout: Option<LayoutChoice>,
    #[arg(long)]
    pub base_url: Option<String>,
    /// Sent verbatim as the Cookie header (private leagues)
    #[arg(long)]
    pub cookie: Option<String>,
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long)]
    pub store_dir: Option<PathBuf>,
    /// Read pages from the store instead of the network
    #[arg(long)]
    pub offline: bool,
    /// Save every fetched page to the store
    #[arg(long)]
    pub keep_pages: bool,
}

impl ScrapeArgs {
    /// Config file (if any), then flags on top.
    pub fn to_options(&self) -> crate::error::Result<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::load(path)?,
            None => AppOptions::default(),
        };
        let s = &mut opts.scrape;

        if let Some(v) = self.league { s.league = v; }
        if let Some(v) = self.first_season { s.first_season = v; }
        if let Some(v) = self.last_season { s.last_season = v; }
        if let Some(v) = self.teams { s.team_count = v; }
        if !self.kinds.is_empty() { s.kinds = self.kinds.clone(); }
        if let Some(v) = self.layout { s.layout = v; }
        if let Some(v) = &self.base_url { s.base_url = v.clone(); }
        if let Some(v) = &self.cookie { s.cookie = Some(v.clone()); }
        if let Some(v) = self.timeout { s.timeout_secs = v; }
        if let Some(v) = &self.store_dir { s.store_dir = v.clone(); }
        s.offline |= self.offline;
        s.keep_pages |= self.keep_pages;

        if let Some(v) = &self.out_dir { opts.export.out_dir = v.clone(); }

        opts.scrape.validate()?;
        Ok(opts)
    }
}

#[derive(Args, Debug)]
pub struct LeadersArgs {
    /// Archive CSV written by `scrape`
    #[arg(short, long)]
    pub input: PathBuf,
    /// Stat column label, e.g. R or HR
    #[arg(short, long)]
    pub stat: String,
    /// Fantasy team id
    #[arg(short, long)]
    pub team: u32,
    /// Name printed in the TEAM column; defaults to "Team <id>"
    #[arg(long)]
    pub team_name: Option<String>,
    #[arg(short, default_value_t = 10)]
    pub n: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose, cli.command.log_dir());

    match cli.command {
        Command::Scrape(args) => scrape(&args),
        Command::Leaders(args) => leaders(&args),
    }
}

fn scrape(args: &ScrapeArgs) -> Result<()> {
    let opts = args.to_options()?;
    let mut source = source_for(&opts.scrape)?;

    let store = (opts.scrape.keep_pages && !opts.scrape.offline)
        .then(|| PageStore::new(&opts.scrape.store_dir));

    let mut progress = LogProgress::default();
    let summary = runner::run(&opts, source.as_mut(), store.as_ref(), Some(&mut progress))
        .wrap_err("scrape failed; no archive written")?;

    for path in &summary.files_written {
        println!("{}", path.display());
    }
    Ok(())
}

fn leaders(args: &LeadersArgs) -> Result<()> {
    let archive = load_archive(&args.input)?;
    let team_name = args.team_name.clone().unwrap_or_else(|| format!("Team {}", args.team));
    let top = stat_leaders(&archive, &args.stat, args.team, &team_name, args.n)?;

    let (headers, rows) = leaders_table(&args.stat, &top);
    write_rows(io::stdout().lock(), &headers, &rows)?;
    Ok(())
}
