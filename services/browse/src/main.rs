use browse::catalog::load_catalogs;
use browse::client::{BrowseConfig, FeedClient};
use browse::fetch::FeedFetcher;
use browse::filters::{Facet, FilterState};
use browse::query::build_descriptor;
use browse::render::{render_header, render_state};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting browse service");

    let config = match std::env::args().nth(1) {
        Some(base_url) => BrowseConfig {
            base_url,
            ..BrowseConfig::default()
        },
        None => BrowseConfig::default(),
    };
    let client = FeedClient::new(&config)?;

    // Catalog loads are independent of the feed pipeline and degrade to
    // empty option lists on failure
    let (sources, tags) = load_catalogs(&client).await;

    println!("{}", render_header());
    if !sources.is_empty() {
        println!("Sources: {}", sources.source_names().join(", "));
    }
    if !tags.is_empty() {
        println!("Labels: {}", tags.content_labels.join(", "));
        println!("Markets: {}", tags.market_categories.join(", "));
        println!("Topics: {}", tags.topics.join(", "));
        println!("Flags: {}", tags.flags.join(", "));
    }

    let mut filters = FilterState::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    filters.subscribe(move |snapshot| {
        let _ = tx.send(snapshot.clone());
    });

    let fetcher = FeedFetcher::new(client);

    // Initial load with the unconstrained default selection
    fetcher.refresh(build_descriptor(&filters.snapshot())).await;
    println!("\n{}", render_state(&fetcher.state()));

    println!("\nCommands: q <text> | source|market|label|flag|topic <value> | clear | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        apply_command(&mut filters, line);

        // Coalesce published snapshots; only the latest drives a fetch
        let mut latest = None;
        while let Ok(snapshot) = rx.try_recv() {
            latest = Some(snapshot);
        }
        if let Some(snapshot) = latest {
            fetcher.refresh(build_descriptor(&snapshot)).await;
            println!("{}", render_state(&fetcher.state()));
        }
    }

    Ok(())
}

fn apply_command(filters: &mut FilterState, line: &str) {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let value = rest.trim();
    match command {
        "q" => filters.set_query(value),
        "clear" => filters.reset(),
        name => match Facet::parse(name) {
            Some(facet) if !value.is_empty() => filters.set_facet(facet, value),
            _ => println!("Unknown command: {line}"),
        },
    }
}
