use clap::Parser;
use marketscope::application::export::render_markdown;
use marketscope::cli::commands::{Cli, Commands};
use marketscope::domain::entities::query::Query;
use marketscope::domain::entities::report::Report;
use marketscope::domain::values::language::Language;
use marketscope::MarketScope;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let ms = match MarketScope::new() {
        Ok(ms) => ms,
        Err(e) => {
            eprintln!("Error initializing MarketScope: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(ms, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(ms: MarketScope, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Generate {
            query,
            industry,
            timeframe,
            lang,
            markdown,
        } => {
            let mut q = Query::new(query)?;
            if let Some(industry) = industry {
                q = q.with_industry(industry);
            }
            if let Some(timeframe) = timeframe {
                q = q.with_timeframe(timeframe);
            }

            let report = ms.generate(q).await?;
            for entry in ms.activity_log() {
                eprintln!("{entry}");
            }
            let view = ms.translate(&report, Language::from_name_or_default(&lang)).await;
            print_report(&view, markdown)?;
        }
        Commands::Reports { limit } => {
            let reports = ms.reports(Some(limit))?;
            for r in &reports {
                println!(
                    "{}  {}  {}",
                    r.id,
                    r.generated_at.format("%Y-%m-%d %H:%M"),
                    r.market_data.query.text()
                );
            }
        }
        Commands::Show { id, lang, markdown } => {
            let report = ms.report(&id)?;
            let view = ms.translate(&report, Language::from_name_or_default(&lang)).await;
            print_report(&view, markdown)?;
        }
        Commands::Languages => {
            for lang in Language::ALL {
                println!("{lang} ({})", lang.code());
            }
        }
    }
    Ok(())
}

fn print_report(report: &Report, markdown: bool) -> Result<(), serde_json::Error> {
    if markdown {
        print!("{}", render_markdown(report));
    } else {
        println!("{}", serde_json::to_string_pretty(report)?);
    }
    Ok(())
}
