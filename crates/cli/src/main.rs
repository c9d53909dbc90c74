use clap::Parser;
use rebind_dns_application::{PinStore, ResolveAddressUseCase};
use rebind_dns_domain::CliOverrides;
use rebind_dns_infrastructure::dns::RebindRequestHandler;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

mod bootstrap;
mod server;

const USAGE_EXAMPLES: &str = "\
Examples (with nslookup):

  Resolve a name to the address it encodes:
    nslookup 192-168-2-1.my-rebind-domain.com        -> 192.168.2.1

  Pin 3.2.4.5 to the same hostname for 10 seconds:
    nslookup 192-168-2-1-to-3-2-4-5-for-10.my-rebind-domain.com
                                                     -> 3.2.4.5
    nslookup 192-168-2-1.my-rebind-domain.com        -> 3.2.4.5
    ... wait 10 seconds ...
    nslookup 192-168-2-1.my-rebind-domain.com        -> 192.168.2.1";

#[derive(Parser)]
#[command(name = "rebind-dns")]
#[command(version)]
#[command(about = "Rebinding DNS server - answers A queries from addresses encoded in query names")]
#[command(after_help = USAGE_EXAMPLES)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Domain to serve A records for ('.' serves every name)
    #[arg(short, long)]
    domain: Option<String>,

    /// DNS server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        domain: cli.domain.clone(),
        dns_port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting rebind-dns v{}", env!("CARGO_PKG_VERSION"));
    info!(domain = %config.rebind.domain, "Serving rebind zone");

    // One process-wide pin store, alive for the process lifetime.
    let pins = Arc::new(PinStore::new());
    let resolve = Arc::new(ResolveAddressUseCase::new(pins));
    let handler = RebindRequestHandler::new(resolve, config.rebind.clone());

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, handler).await {
            error!(error = %e, "DNS server error");
        }
    });

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("SIGINT received, shutting down"),
        _ = sigterm.recv() => info!("SIGTERM received, shutting down"),
    }

    info!("Server shutdown complete");
    Ok(())
}
