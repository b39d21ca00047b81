//! MemeBoard Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use tracing::{error, info, warn};

use MemeBoard::{
    config::Settings,
    database::{self, DatabaseService, PostStore, UserStore},
    handlers::{
        callbacks::handle_callback_query,
        commands::{help, settings as settings_cmd, start},
        messages::handle_message,
    },
    services::{ServiceFactory, SignService},
    state::{CorrelationStore, RedisCorrelationStore},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive until exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting MemeBoard Telegram Bot...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = database::create_pool(&settings.database).await?;
    database::run_migrations(&db_pool).await?;
    let database_service = DatabaseService::new(db_pool);

    // Initialize the correlation store
    info!("Connecting to Redis...");
    let correlation: Arc<dyn CorrelationStore> =
        Arc::new(RedisCorrelationStore::new(settings.redis.clone()).await?);

    // Load the anonymous name list
    let anonym_names = SignService::load_names(&settings.signs.names_file).await?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    // Initialize services
    info!("Initializing services...");
    let posts: Arc<dyn PostStore> = Arc::new(database_service.clone());
    let users: Arc<dyn UserStore> = Arc::new(database_service);
    let services = ServiceFactory::new(
        bot.clone(),
        settings.clone(),
        posts,
        users,
        correlation,
        anonym_names,
    );

    info!("Setting up bot handlers...");

    let services_arc = Arc::new(services);
    let settings_arc = Arc::new(settings);

    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc, settings_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("MemeBoard bot is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("MemeBoard bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<BotCommands>()
                        .endpoint(handle_commands),
                )
                .branch(dptree::endpoint(handle_messages)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
}

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "MemeBoard Bot Commands")]
enum BotCommands {
    #[command(description = "Start the bot and see how submissions work")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Choose between anonymous and credited attribution")]
    Settings,
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: BotCommands,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    let result = match cmd {
        BotCommands::Start => start::handle_start(bot, msg, services).await,
        BotCommands::Help => help::handle_help(bot, msg).await,
        BotCommands::Settings => settings_cmd::handle_settings(bot, msg, services).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
    settings: Arc<Settings>,
) -> HandlerResult {
    let services = (*services).clone();
    let settings = (*settings).clone();

    if let Err(e) = handle_message(bot, msg, services, settings).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: teloxide::types::CallbackQuery,
    services: Arc<ServiceFactory>,
    settings: Arc<Settings>,
) -> HandlerResult {
    let services = (*services).clone();
    let settings = (*settings).clone();

    if let Err(e) = handle_callback_query(bot, query, services, settings).await {
        error!(error = %e, "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
