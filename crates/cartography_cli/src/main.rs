//! Command-line catalog viewer.
//!
//! # Responsibility
//! - Map flags onto one catalog query and print the visible cards.
//! - Fall back to the bundled seed dataset when no file is given.

use anyhow::{Context, Result};
use cartography_core::{
    build_case_card, build_case_details, default_log_level, init_logging, load_cases,
    parse_cases, result_count_label, CaseRecord, Catalog, CrosslinkChip, QueryState, TypeFilter,
};
use clap::Parser;
use log::info;
use std::path::PathBuf;

const SEED_CASES: &str = include_str!("../../../data/seed_cases.json");

/// Search. Cross-link. Notice the patterns.
#[derive(Debug, Parser)]
#[command(name = "cartography", version)]
struct Cli {
    /// Dataset file (JSON array of cases). Defaults to the bundled seed.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Keyword matched against title, summary, tags and entities.
    #[arg(short, long, default_value = "")]
    keyword: String,

    /// Text matched against locations.
    #[arg(short, long, default_value = "")]
    location: String,

    /// `All` or one of UFO|Government|Science|Folklore|Hoax|Media|Other.
    #[arg(short = 't', long = "type", default_value = "All")]
    type_filter: TypeFilter,

    /// Lower year gate. Defaults to the dataset minimum.
    #[arg(long)]
    min_year: Option<i32>,

    /// Upper year gate. Defaults to the dataset maximum.
    #[arg(long)]
    max_year: Option<i32>,

    /// Print sources and crosslinks for every case.
    #[arg(short, long)]
    details: bool,

    /// Follow a crosslink to this case id: its title (or the raw id when
    /// missing) replaces the keyword.
    #[arg(long, value_name = "ID")]
    follow: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling logs. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir.to_str().context("log dir must be valid UTF-8")?;
        init_logging(&cli.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let records = load_records(cli.data.as_ref())?;
    let catalog = Catalog::new(records);
    let state = resolve_state(&cli, &catalog);
    info!(
        "event=cli_query module=cli status=start records={}",
        catalog.len()
    );

    print_results(&catalog, &state, cli.details);
    Ok(())
}

fn load_records(path: Option<&PathBuf>) -> Result<Vec<CaseRecord>> {
    match path {
        Some(path) => load_cases(path)
            .with_context(|| format!("loading dataset from `{}`", path.display())),
        None => parse_cases(SEED_CASES).context("decoding bundled seed dataset"),
    }
}

fn resolve_state(cli: &Cli, catalog: &Catalog) -> QueryState {
    let bounds = catalog.year_bounds();
    let state = QueryState {
        keyword: cli.keyword.clone(),
        location_text: cli.location.clone(),
        type_filter: cli.type_filter,
        min_year: cli.min_year.unwrap_or(bounds.min),
        max_year: cli.max_year.unwrap_or(bounds.max),
    };

    match cli.follow.as_deref() {
        Some(id) => {
            let resolved = catalog.resolve_crosslink(id);
            let chip = CrosslinkChip {
                id: id.to_string(),
                label: resolved.label,
                found: resolved.found,
            };
            chip.follow(&state)
        }
        None => state,
    }
}

fn print_results(catalog: &Catalog, state: &QueryState, details: bool) {
    let bounds = catalog.year_bounds();
    let visible = catalog.visible_records(state);

    println!(
        "Year range {}–{} (dataset {}–{})",
        state.min_year, state.max_year, bounds.min, bounds.max
    );
    println!("{}", result_count_label(visible.len()));

    for case in &visible {
        let card = build_case_card(case);
        println!();
        println!("{}", card.title);

        let mut badges = vec![card.kind.to_string(), card.confidence.clone()];
        badges.extend(card.tag_badges.iter().cloned());
        let badges = badges
            .into_iter()
            .filter(|badge| !badge.is_empty())
            .map(|badge| format!("[{badge}]"))
            .collect::<Vec<_>>();
        println!("  {}", badges.join(" "));

        if !card.summary.is_empty() {
            println!("  {}", card.summary);
        }
        if let Some(locations) = &card.locations_line {
            println!("  where: {locations}");
        }
        if let Some(entities) = &card.entities_line {
            println!("  who:   {entities}");
        }
        println!("  when:  {}", card.year_label);

        if details {
            print_details(catalog, case.record);
        }
    }
}

fn print_details(catalog: &Catalog, record: &CaseRecord) {
    let details = build_case_details(catalog, record);

    println!("  Sources");
    for source in &details.sources {
        println!("    - {} <{}>", source.label, source.href);
    }

    println!("  Crosslinks");
    if details.crosslinks.is_empty() {
        println!("    No crosslinks yet.");
        return;
    }
    for chip in &details.crosslinks {
        let marker = if chip.found { "" } else { " (missing)" };
        println!("    - {} [{}]{marker}", chip.label, chip.id);
    }
}
