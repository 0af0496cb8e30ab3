use clap::{Parser, Subcommand};
use safe_connectors::catalog::{Catalog, CatalogClient, FileCatalog};
use safe_connectors::clipboard::MemoryClipboard;
use safe_connectors::config::{Config, get_config_path, get_store_path};
use safe_connectors::connector::{ConnectorRecord, ConnectorStore};
use safe_connectors::dispatch::CommandDispatcher;
use safe_connectors::environment::Environment;
use safe_connectors::logging::init_max_level;
use safe_connectors::notifications::SharedNotificationQueue;
use safe_connectors::routes::SessionRoutes;
use safe_connectors::session::{
    HeadlessAction, run_headless_action, run_headless_mode, run_tui_mode, setup_session,
};
use safe_connectors::ui::UIConfig;
use safe_connectors::ui::dashboard::DashboardState;
use safe_connectors::view::{CardCommand, DashboardWidget};
use safe_connectors::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Safe API connectors dashboard
struct Args {
    /// Environment to use: production, staging or local
    #[arg(long, global = true, value_name = "ENV")]
    env: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the connectors dashboard
    Dashboard {
        /// Number of grid cells, the explore cell included
        #[arg(long)]
        size: Option<usize>,

        /// Read the catalog from a JSON file instead of the network
        #[arg(long, value_name = "PATH")]
        catalog_file: Option<PathBuf>,

        /// Enable background colors
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print the dashboard grid once
    List {
        /// Number of grid cells, the explore cell included
        #[arg(long)]
        size: Option<usize>,

        /// Read the catalog from a JSON file instead of the network
        #[arg(long, value_name = "PATH")]
        catalog_file: Option<PathBuf>,
    },
    /// Pin a catalog connector, or unpin it if already pinned
    Pin {
        /// Connector id
        id: String,

        /// Read the catalog from a JSON file instead of the network
        #[arg(long, value_name = "PATH")]
        catalog_file: Option<PathBuf>,
    },
    /// Print the share link of a connector
    Share {
        /// Connector id
        id: String,

        /// Read the catalog from a JSON file instead of the network
        #[arg(long, value_name = "PATH")]
        catalog_file: Option<PathBuf>,
    },
    /// Add a custom connector
    AddCustom {
        /// URL the connector opens
        #[arg(long)]
        url: String,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Logo URL
        #[arg(long)]
        image: Option<String>,

        /// Connector id, a fresh UUID when omitted
        #[arg(long)]
        id: Option<String>,
    },
    /// Remove a custom connector
    RemoveCustom {
        /// Connector id
        id: String,
    },
    /// Set the Safe the dashboard is shown for
    Configure {
        /// Chain short name, e.g. eth
        #[arg(long)]
        short_name: String,

        /// Safe address
        #[arg(long)]
        safe_address: String,

        /// Chain id carried by share links
        #[arg(long)]
        chain_id: String,

        /// Bearer token for the connector catalog
        #[arg(long)]
        api_token: Option<String>,
    },
    /// Delete pinned and custom connectors
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_max_level();
    let args = Args::parse();

    let environment_str = args
        .env
        .or_else(|| std::env::var("SAFE_CONNECTORS_ENVIRONMENT").ok())
        .unwrap_or_default();
    let environment = match environment_str.parse::<Environment>() {
        Ok(environment) => environment,
        Err(()) => {
            if !environment_str.is_empty() {
                print_cmd_warn!(
                    "Unknown environment",
                    "{:?}, using {}",
                    environment_str,
                    Environment::default()
                );
            }
            Environment::default()
        }
    };

    let config_path = get_config_path()?;
    let store_path = get_store_path()?;
    let config = Config::load_or_default(&config_path)?;

    match args.command {
        Command::Dashboard {
            size,
            catalog_file,
            with_background,
        } => {
            let catalog = make_catalog(catalog_file, environment, &config);
            let session = setup_session(catalog);
            let state = dashboard_state(
                &config,
                environment,
                store_path,
                size,
                session.catalog_source.clone(),
                with_background,
            )?;
            run_tui_mode(session, state).await
        }
        Command::List { size, catalog_file } => {
            let catalog = make_catalog(catalog_file, environment, &config);
            let session = setup_session(catalog);
            let state = dashboard_state(
                &config,
                environment,
                store_path,
                size,
                session.catalog_source.clone(),
                false,
            )?;
            run_headless_mode(session, state).await
        }
        Command::Pin { id, catalog_file } => {
            run_action(&config, environment, store_path, catalog_file, &id, HeadlessAction::TogglePin).await
        }
        Command::Share { id, catalog_file } => {
            run_action(&config, environment, store_path, catalog_file, &id, HeadlessAction::Share).await
        }
        Command::AddCustom {
            url,
            name,
            description,
            image,
            id,
        } => {
            let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let mut record = ConnectorRecord::new(id, name)?
                .with_short_description(description)
                .with_connect_url(url)
                .with_custom(true);
            if let Some(image) = image {
                record = record.with_image(image);
            }
            let mut dispatcher = dispatcher(store_path)?;
            let record_id = record.id().to_string();
            dispatcher.add_custom(record)?;
            print_cmd_success!("Custom connector added", "{}", record_id);
            Ok(())
        }
        Command::RemoveCustom { id } => {
            let mut dispatcher = dispatcher(store_path)?;
            let record = dispatcher
                .store()
                .custom_connectors()
                .iter()
                .find(|record| record.id() == id)
                .cloned();
            let Some(record) = record else {
                print_cmd_error!("Unknown custom connector", &id);
                return Err(format!("no custom connector with id {}", id).into());
            };
            dispatcher.dispatch(CardCommand::RemoveCustomConnector(record))?;
            print_cmd_success!("Custom connector removed", "{}", id);
            Ok(())
        }
        Command::Configure {
            short_name,
            safe_address,
            chain_id,
            api_token,
        } => {
            let mut updated = Config {
                short_name,
                safe_address,
                chain_id,
                ..config
            };
            if let Some(api_token) = api_token {
                updated.api_token = api_token;
            }
            updated
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Configuration saved",
                "{}",
                SessionRoutes::from_config(&updated, environment).base_path
            );
            Ok(())
        }
        Command::Reset => {
            println!("Clearing pinned and custom connectors...");
            ConnectorStore::clear(&store_path).map_err(Into::into)
        }
    }
}

/// The catalog to read from: a local file when given, the network otherwise.
fn make_catalog(
    catalog_file: Option<PathBuf>,
    environment: Environment,
    config: &Config,
) -> Box<dyn Catalog> {
    match catalog_file {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(CatalogClient::new(environment, config.api_token.clone())),
    }
}

fn dispatcher(store_path: PathBuf) -> Result<CommandDispatcher, Box<dyn Error>> {
    let store = ConnectorStore::load_or_default(&store_path)?;
    Ok(CommandDispatcher::new(
        store,
        store_path,
        Box::new(MemoryClipboard::new()),
        Box::new(SharedNotificationQueue::new()),
    ))
}

fn dashboard_state(
    config: &Config,
    environment: Environment,
    store_path: PathBuf,
    size: Option<usize>,
    catalog_source: String,
    with_background: bool,
) -> Result<DashboardState, Box<dyn Error>> {
    let store = ConnectorStore::load_or_default(&store_path)?;
    let notifications = SharedNotificationQueue::new();
    let dispatcher = CommandDispatcher::new(
        store,
        store_path,
        Box::new(MemoryClipboard::new()),
        Box::new(notifications.clone()),
    );
    let routes = SessionRoutes::from_config(config, environment);
    let widget = DashboardWidget::new(size.unwrap_or(config.dashboard_size), routes);
    Ok(DashboardState::new(
        environment,
        Instant::now(),
        widget,
        dispatcher,
        notifications,
        catalog_source,
        UIConfig::new(with_background),
    ))
}

async fn run_action(
    config: &Config,
    environment: Environment,
    store_path: PathBuf,
    catalog_file: Option<PathBuf>,
    id: &str,
    action: HeadlessAction,
) -> Result<(), Box<dyn Error>> {
    let catalog = make_catalog(catalog_file, environment, config);
    print_cmd_info!("Catalog", "{}", catalog.source());
    let session = setup_session(catalog);
    let state = dashboard_state(
        config,
        environment,
        store_path,
        None,
        session.catalog_source.clone(),
        false,
    )?;
    run_headless_action(session, state, id, action).await
}
