use clap::Parser;
use ddix_api::{ApiConfig, RestApi};
use ddix_core::ModelName;
use ddix_model::{ModelHandle, Predictor};
use ddix_storage::FeatureStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Drug interaction risk scoring service
#[derive(Parser, Debug)]
#[command(name = "ddix")]
#[command(about = "Drug-drug interaction risk scoring API", long_about = None)]
struct Args {
    /// Directory holding the feature table and model artifacts
    #[arg(short, long, env = "DDIX_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Feature table, relative to the data directory
    #[arg(long, default_value = "drug_tfidf_reduced_128d.csv")]
    features_file: PathBuf,

    /// GraphSAGE model artifact, relative to the data directory
    #[arg(long, default_value = "graphsage.json")]
    graphsage_model: PathBuf,

    /// Edge predictor model artifact, relative to the data directory
    #[arg(long, default_value = "edge_predictor.json")]
    edge_predictor_model: PathBuf,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    http_port: u16,

    /// Extra CORS origins, comma separated
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ddix v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);

    let store = FeatureStore::open(args.data_dir.join(&args.features_file));
    let graphsage = ModelHandle::load(
        ModelName::Graphsage.display_name(),
        args.data_dir.join(&args.graphsage_model),
    );
    let edge_predictor = ModelHandle::load(
        ModelName::EdgePredictor.display_name(),
        args.data_dir.join(&args.edge_predictor_model),
    );
    info!(
        "Models: graphsage={:?}, edge_predictor={:?}",
        graphsage.state(),
        edge_predictor.state()
    );

    let predictor = Arc::new(Predictor::new(Arc::new(store), graphsage, edge_predictor));

    let config = ApiConfig {
        host: args.host,
        port: args.http_port,
        allowed_origins: args.allowed_origins,
    };
    info!("HTTP API: http://{}:{}/", config.host, config.port);

    RestApi::start(predictor, config).await?;

    info!("Shutting down...");
    Ok(())
}
