use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::model::guild::Member;
use serenity::model::id::GuildId;
use serenity::model::mention::Mentionable;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use welcomer::commands::{
    register_global_commands, register_guild_commands, CommandContext, CommandInvocation,
    CommandRegistry,
};
use welcomer::core::{Config, InteractionReply};
use welcomer::features::mentions::{
    DeletionScheduler, MentionSettings, SerenityGuild, WelcomeAnnouncer,
};
use welcomer::health;
use welcomer::message_components::{MenuSelection, MessageComponentHandler};

/// How long shutdown waits for pending welcome deletions to flush
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

const GUILD_ONLY_REPLY: &str = "This command can only be used in a server.";
const COMMAND_ERROR_REPLY: &str =
    "❌ Sorry, I encountered an error processing your command. Please try again.";
const COMPONENT_ERROR_REPLY: &str =
    "❌ Sorry, I encountered an error processing your interaction. Please try again.";

struct Handler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
    component_handler: MessageComponentHandler,
    announcer: WelcomeAnnouncer,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(context: Arc<CommandContext>, announcer: WelcomeAnnouncer, guild_id: Option<GuildId>) -> Self {
        Handler {
            registry: CommandRegistry::with_default_handlers(),
            component_handler: MessageComponentHandler::new(Arc::clone(&context)),
            context,
            announcer,
            guild_id,
        }
    }

    async fn handle_slash_command(&self, ctx: &Context, command: &ApplicationCommandInteraction) {
        let reply = match command.guild_id {
            Some(guild_id) => {
                let channels = SerenityGuild::new(ctx.cache.clone(), ctx.http.clone(), guild_id);
                let invocation = CommandInvocation::from_interaction(command);
                debug!(
                    "[{}] /{} from {} in guild {guild_id}",
                    invocation.request_id, invocation.name, invocation.user_id
                );
                match self.registry.dispatch(&self.context, &channels, &invocation).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        error!(
                            "[{}] Error handling slash command '{}': {e}",
                            invocation.request_id, command.data.name
                        );
                        InteractionReply::notice(COMMAND_ERROR_REPLY)
                    }
                }
            }
            None => InteractionReply::notice(GUILD_ONLY_REPLY),
        };

        if let Err(e) = command
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|data| reply.render(data))
            })
            .await
        {
            error!("Failed to respond to /{}: {e}", command.data.name);
        }
    }

    async fn handle_component(&self, ctx: &Context, component: &MessageComponentInteraction) {
        let reply = match component.guild_id {
            Some(guild_id) => {
                let channels = SerenityGuild::new(ctx.cache.clone(), ctx.http.clone(), guild_id);
                let selection = MenuSelection::from_interaction(component);
                match self
                    .component_handler
                    .handle_selection(&channels, &selection)
                    .await
                {
                    Ok(reply) => reply,
                    Err(e) => {
                        error!(
                            "[{}] Error handling component interaction '{}': {e}",
                            selection.request_id, component.data.custom_id
                        );
                        InteractionReply::notice(COMPONENT_ERROR_REPLY)
                    }
                }
            }
            None => InteractionReply::notice(GUILD_ONLY_REPLY),
        };

        let kind = reply.component_response_kind();
        if let Err(e) = component
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(kind)
                    .interaction_response_data(|data| reply.render(data))
            })
            .await
        {
            error!(
                "Failed to respond to component '{}': {e}",
                component.data.custom_id
            );
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);
        info!("🌐 Gateway version: {}", ready.version);

        // Log shard information
        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }

        // Register slash commands - use guild commands for development (instant), global for production.
        // A failure leaves the bot running without slash commands.
        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            } else {
                info!("✅ Successfully registered slash commands for guild {guild_id} (instant update)");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx).await {
                error!("❌ Failed to register global slash commands: {e}");
            } else {
                info!("✅ Successfully registered slash commands globally (may take up to 1 hour to propagate)");
            }
        }
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        debug!(
            "🆕 Member {} joined guild {}",
            new_member.user.id, new_member.guild_id
        );

        let guild = Arc::new(SerenityGuild::new(
            ctx.cache.clone(),
            ctx.http.clone(),
            new_member.guild_id,
        ));
        let mention = new_member.mention().to_string();
        self.announcer.announce(guild, &mention).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                self.handle_slash_command(&ctx, &command).await;
            }
            Interaction::MessageComponent(component) => {
                self.handle_component(&ctx, &component).await;
            }
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting welcome mention bot...");

    let shutdown = CancellationToken::new();

    // Liveness endpoint runs alongside the gateway; losing it does not stop the bot
    let port = config.port;
    let health_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = health::serve(port, health_shutdown).await {
            error!("❌ Liveness endpoint unavailable: {e:#}");
        }
    });

    let context = Arc::new(CommandContext::new(MentionSettings::new()));
    let deletions = DeletionScheduler::new(shutdown.clone());
    let announcer = WelcomeAnnouncer::new(context.mentions.clone(), deletions.clone());
    let handler = Handler::new(context, announcer, config.discord_guild_id);

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Ctrl-C: flush pending welcome deletions, stop the liveness endpoint, then the shards
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {e}");
            return;
        }
        info!("🛑 Shutdown requested");
        deletions.shutdown(SHUTDOWN_GRACE).await;
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Missing GUILD_MEMBERS privileged intent");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    info!("👋 Bot stopped");
    Ok(())
}
