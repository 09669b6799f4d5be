use clap::Parser;
use sam_scout::config::{Cli, Command, ReplayArgs, SearchArgs};
use sam_scout::core::registry::{self, CategoryCodes, TARGET_AGENCIES};
use sam_scout::core::params::{assemble, SearchMode};
use sam_scout::core::window::{self, ParsePolicy};
use sam_scout::core::{export, replay};
use sam_scout::domain::model::{OpportunityRecord, ScoutOutcome};
use sam_scout::domain::ports::OpportunitySearch;
use sam_scout::utils::{logger, validation::Validate};
use sam_scout::{Result, SamClient, ScoutEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting sam-scout");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let api_key = cli.resolve_api_key()?;
    let engine = ScoutEngine::new(SamClient::with_base_url(&cli.endpoint));

    let result = match &cli.command {
        Command::Search(args) => run_search(&engine, &api_key, args).await,
        Command::Replay(args) => run_replay(&engine, &api_key, args).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Search failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_search<C: OpportunitySearch>(
    engine: &ScoutEngine<C>,
    api_key: &str,
    args: &SearchArgs,
) -> Result<()> {
    // Codes-only searches always carry PSC filters; keyword-union mode only
    // when asked, to avoid over-filtering.
    let include_psc = if args.keyword_union {
        args.include_psc
    } else {
        true
    };
    let codes = registry::codes_for(&args.categories, include_psc)?;

    let built = window::range_window(
        args.from.as_deref(),
        args.to.as_deref(),
        ParsePolicy::DefaultWindow,
    )?;
    if built.fell_back {
        tracing::warn!(
            "⚠ Date formatting problem, using default window {} - {}",
            built.window.posted_from(),
            built.window.posted_to()
        );
    }

    let (mode, agencies) = if args.keyword_union {
        let mode = SearchMode::KeywordUnion {
            include_psc: args.include_psc,
        };
        (mode, args.agencies.clone())
    } else {
        let agencies = if args.agencies.is_empty() {
            TARGET_AGENCIES.iter().map(|a| a.to_string()).collect()
        } else {
            args.agencies.clone()
        };
        (SearchMode::CodesOnly, agencies)
    };

    let request = assemble(&mode, api_key, built.window, &codes, &agencies, args.limit);
    let outcome = engine.run(&request).await?;

    // Scout exports carry the notice id; keyword-union exports do not.
    report(outcome, args.output.as_deref(), !args.keyword_union)
}

async fn run_replay<C: OpportunitySearch>(
    engine: &ScoutEngine<C>,
    api_key: &str,
    args: &ReplayArgs,
) -> Result<()> {
    let contracts = replay::load_contracts(&args.contracts)?;
    let contract = replay::find_contract(&contracts, &args.title)?;

    println!("🧪 Replaying: {}", contract.title);
    println!("   Agency:     {}", contract.agency);
    println!("   Award Date: {}", contract.award_date);
    println!("   Contractor: {}", contract.contractor);
    println!("   Category:   {}", contract.category);

    // A malformed award date is fatal here; there is nothing sensible to
    // fall back to when the window is anchored on it.
    let window = window::reference_window(&contract.award_date)?;

    let mode = SearchMode::Replay {
        description: contract.description.clone(),
    };
    let agencies = vec![contract.agency.clone()];
    let request = assemble(
        &mode,
        api_key,
        window,
        &CategoryCodes::default(),
        &agencies,
        args.limit,
    );

    let outcome = engine.run(&request).await?;
    report(outcome, args.output.as_deref(), false)
}

fn report(
    outcome: ScoutOutcome,
    output: Option<&std::path::Path>,
    include_id: bool,
) -> Result<()> {
    match outcome {
        ScoutOutcome::Found(records) => {
            tracing::info!("Found {} opportunities", records.len());
            println!("✅ Found {} opportunities.", records.len());
            for record in &records {
                print_record(record);
            }
            if let Some(path) = output {
                export::export_to_path(path, &records, include_id)?;
                println!("📁 Results saved to: {}", path.display());
            }
            Ok(())
        }
        ScoutOutcome::Empty => {
            tracing::info!("No opportunities matched");
            println!("⚠ No opportunities found for your criteria.");
            Ok(())
        }
        ScoutOutcome::ApiError { status, body } => {
            tracing::error!("API error {}: {}", status, body);
            eprintln!("❌ API Error {}: {}", status, body);
            std::process::exit(1);
        }
    }
}

fn print_record(record: &OpportunityRecord) {
    println!();
    println!("  {}", record.title);
    println!("    Agency:   {}", record.agency_name);
    println!("    Posted:   {}", record.posted_date);
    println!("    Deadline: {}", record.response_deadline);
    println!("    Link:     {}", record.detail_url);
}
