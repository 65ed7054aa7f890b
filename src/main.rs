use anyhow::{Context, Result};
use clap::Parser;
use secrecy::SecretString;
use syno_storage_monitor::{
    config::Config,
    monitor, report,
    synology::{Session, SynologyClient},
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// NAS host or IP address (overrides config)
    #[arg(short = 'i', long = "ip", env = "SYNO_HOST")]
    host: Option<String>,

    /// DSM web port (overrides config)
    #[arg(long, env = "SYNO_PORT")]
    port: Option<u16>,

    /// DSM account (overrides config)
    #[arg(short, long = "user", env = "SYNO_USERNAME")]
    username: Option<String>,

    /// DSM password (overrides config)
    #[arg(short, long, env = "SYNO_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// One-time passcode for 2-step verification
    #[arg(long, env = "SYNO_OTP_CODE", hide_env_values = true)]
    otp_code: Option<String>,

    /// Use HTTPS instead of HTTP
    #[arg(long)]
    secure: bool,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// SYNO.API.Auth version used for login (overrides config)
    #[arg(long)]
    api_version: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(&args.config)?;

    // Override with CLI arguments if provided
    if let Some(host) = args.host {
        config.nas.host = host;
    }
    if let Some(port) = args.port {
        config.nas.port = port;
    }
    if let Some(username) = args.username {
        config.nas.username = username;
    }
    if let Some(password) = args.password {
        config.nas.password = SecretString::new(password.into());
    }
    if let Some(otp_code) = args.otp_code {
        config.nas.otp_code = Some(SecretString::new(otp_code.into()));
    }
    if args.secure {
        config.nas.use_tls = true;
    }
    if args.insecure {
        config.nas.verify_ssl = false;
    }
    if let Some(api_version) = args.api_version {
        config.nas.api_version = api_version;
    }
    config.client.debug |= args.debug;

    // Initialize tracing
    let default_level = if config.client.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting Synology storage monitor v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("DSM endpoint: {}", config.nas.base_url());

    let client = SynologyClient::new(&config.nas);
    let mut session = Session::new();

    match monitor::collect_report(&client, &mut session, &config.client) {
        Ok(storage) => {
            print!("{}", report::render_report(&storage));
            Ok(())
        }
        Err(e) => {
            error!("Storage query failed: {}", e);
            Err(e).context("Failed to collect storage status")
        }
    }
}
