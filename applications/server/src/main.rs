/// Connectly Server - social posting REST backend
use clap::{Parser, Subcommand};
use connectly_core::SettingsStore;
use connectly_server::{
    config::ServerConfig, create_router, logging, services::AuthService, state::AppState,
};
use connectly_storage::SqliteStorage;
use std::{net::SocketAddr, path::Path, sync::Arc};

#[derive(Parser)]
#[command(name = "connectly-server")]
#[command(about = "Connectly social posting server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CONNECTLY_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a login account
    AddAccount {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all user profiles
    ListUsers,
    /// List all login accounts
    ListAccounts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log = logging::logger();

    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => ServerConfig::load_from(Path::new(path))?,
        None => ServerConfig::load()?,
    };

    match cli.command {
        Commands::Serve => serve(config, log).await?,
        Commands::AddAccount { username, password } => {
            add_account(&config, &username, &password).await?;
        }
        Commands::ListUsers => list_users(&config).await?,
        Commands::ListAccounts => list_accounts(&config).await?,
    }

    Ok(())
}

async fn open_storage(config: &ServerConfig) -> anyhow::Result<SqliteStorage> {
    if let Some(dir) = config.database_dir() {
        tokio::fs::create_dir_all(&dir).await?;
    }
    let storage = SqliteStorage::connect(&config.storage.database_url).await?;
    Ok(storage)
}

fn auth_service(config: &ServerConfig) -> AuthService {
    AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    )
}

async fn serve(config: ServerConfig, log: &'static logging::Logger) -> anyhow::Result<()> {
    config.validate()?;

    log.info("Starting Connectly Server");
    log.info(format_args!("Host: {}", config.server.host));
    log.info(format_args!("Port: {}", config.server.port));

    let storage = Arc::new(open_storage(&config).await?);
    log.info("Database connected");

    let auth_service = Arc::new(auth_service(&config));
    let app_state = AppState::new(storage, auth_service, SettingsStore::shared(), log);
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    log.info(format_args!("Server listening on {addr}"));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log.info("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn add_account(config: &ServerConfig, username: &str, password: &str) -> anyhow::Result<()> {
    let username = username.trim();
    anyhow::ensure!(!username.is_empty(), "username may not be blank");
    anyhow::ensure!(!password.is_empty(), "password may not be blank");

    let storage = open_storage(config).await?;
    let password_hash = auth_service(config).hash_password(password)?;
    let account = connectly_storage::accounts::create(storage.pool(), username, &password_hash)
        .await?;

    println!("Created account '{}'", account.username);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let storage = open_storage(config).await?;
    let users = connectly_storage::users::get_all(storage.pool()).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.username, user.email);
    }

    Ok(())
}

async fn list_accounts(config: &ServerConfig) -> anyhow::Result<()> {
    let storage = open_storage(config).await?;
    let accounts = connectly_storage::accounts::get_all(storage.pool()).await?;

    println!("Accounts:");
    for account in accounts {
        println!(
            "  {} (created {})",
            account.username,
            account.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
