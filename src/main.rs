use clap::Parser;
use sales_insights::report::render;
use sales_insights::{InsightOutcome, Insights};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Pick up GROQ_API_KEY and friends from a local .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let outcome = match run(&args).await {
        Ok(outcome) => outcome,
        Err(e) => {
            ::log::error!("Failed to generate insights: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("## Sales Insights Report\n");
    println!("{}", render(&outcome.report));

    if let Some(path) = &args.output {
        match std::fs::write(path, &outcome.artifact.data) {
            Ok(()) => ::log::info!(
                "Saved {} ({}) to {}",
                outcome.artifact.file_name,
                outcome.artifact.mime_type,
                path.display()
            ),
            Err(e) => {
                ::log::error!("Failed to write report to {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }
}

async fn run(args: &Args) -> sales_insights::Result<InsightOutcome> {
    let request = args.build_request()?;
    let config = args.build_config()?;

    ::log::info!("Using template {:?}", config.template);

    let outcome = Insights::new(request).with_config(config).generate().await?;

    if outcome.company_context.is_error() {
        ::log::warn!("Report was generated without company context");
    }
    Ok(outcome)
}
