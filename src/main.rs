use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use url_resolver::config::Config;
use url_resolver::server;

/// URL resolver service with Google News article decoding.
#[derive(Parser)]
#[command(name = "url-resolver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Host to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Enable debug logging (overrides DEBUG)
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if self.debug {
            config.debug = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();
    print_banner(&config);

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(config.effective_log_level())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn print_banner(config: &Config) {
    let base = format!("http://localhost:{}", config.port);

    println!("{}", "URL Resolver Server".bold().green());
    println!("Starting on {}", config.listen_addr().cyan());
    println!("{}", "Endpoints available:".bold());
    println!("   GET  /health");
    println!("   GET  /resolve?url=<url>");
    println!("   POST /resolve-batch");
    if config.metrics_enabled {
        println!("   GET  /metrics");
    }
    println!();
    println!("{}", "Test with:".bold());
    println!("   curl {}/health", base);
    println!("   curl '{}/resolve?url=https://example.com'", base);
    println!("{}", "-".repeat(50).dimmed());
}
