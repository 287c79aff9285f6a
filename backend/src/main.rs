use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, Parser)]
#[command(about = "TTT round statistics service")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Run the collection + statistics HTTP service
    Serve {
        #[arg(long, default_value = "0.0.0.0:5000")]
        listen: String,
        /// JSONL file holding the round history
        #[arg(long, default_value = "rounds.jsonl")]
        data_file: std::path::PathBuf,
        /// JSON object mapping steam ids to display names
        #[arg(long)]
        names_file: Option<std::path::PathBuf>,
        /// Key the collector has to present on /api/collect
        #[arg(long, env = "API_KEY", default_value = "changeme")]
        api_key: String,
        /// Directory with the built web frontend, served at /
        #[arg(long)]
        static_dir: Option<std::path::PathBuf>,
    },
    /// Pull the full round history from a running service and print the
    /// aggregated report as JSON
    Report {
        #[arg(long, default_value = "http://localhost:5000")]
        url: String,
        #[arg(long, default_value_t = 500)]
        page_size: usize,
        #[arg(long)]
        names_file: Option<std::path::PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("analysis")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    let args = Args::parse();
    match args.command {
        Command::Serve {
            listen,
            data_file,
            names_file,
            api_key,
            static_dir,
        } => serve(listen, data_file, names_file, api_key, static_dir).await,
        Command::Report {
            url,
            page_size,
            names_file,
        } => report(url, page_size, names_file).await,
    }
}

async fn load_names(path: Option<std::path::PathBuf>) -> backend::names::NameTable {
    match path {
        Some(path) => backend::names::load(&path)
            .await
            .unwrap_or_else(|e| panic!("Loading display names from {:?} - {:?}", path, e)),
        None => backend::names::NameTable::new(),
    }
}

async fn serve(
    listen: String,
    data_file: std::path::PathBuf,
    names_file: Option<std::path::PathBuf>,
    api_key: String,
    static_dir: Option<std::path::PathBuf>,
) {
    tracing::info!("Starting...");

    let store = backend::RoundStore::load(data_file).await.unwrap();
    let names = load_names(names_file).await;

    let state = std::sync::Arc::new(backend::api::stats::StatsState {
        store,
        names,
        api_key,
    });

    let mut router = axum::Router::new().nest("/api/", backend::api::router(state));
    if let Some(dir) = static_dir {
        router = router.nest_service("/", tower_http::services::ServeDir::new(dir));
    }

    let listener = tokio::net::TcpListener::bind(&listen).await.unwrap();
    tracing::info!("Listening on {}", listen);
    axum::serve(listener, router).await.unwrap();
}

async fn report(url: String, page_size: usize, names_file: Option<std::path::PathBuf>) {
    let client = backend::client::StatsClient::new(url);

    if let Err(e) = client.health().await {
        tracing::error!("Health check failed: {}", e);
        std::process::exit(1);
    }

    let rounds = match client.fetch_all(page_size).await {
        Ok(rounds) => rounds,
        Err(e) => {
            tracing::error!("Fetching rounds: {}", e);
            std::process::exit(1);
        }
    };
    let names = load_names(names_file).await;

    let result = analysis::report::generate(&rounds, &names);
    println!("{}", serde_json::to_string_pretty(&result).unwrap());
}
