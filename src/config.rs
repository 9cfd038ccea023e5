use serenity::all::{ChannelId, GuildId};

use crate::error::{config::ConfigError, AppError};

/// Transcript stylesheet used when the CSS environment variable is not set.
const DEFAULT_TRANSCRIPT_CSS: &str = "body{font-family:Arial,sans-serif;margin:0;padding:20px;background:#f5f5f5}.messages{display:flex;flex-direction:column;gap:10px}.message{display:flex;flex-direction:column;padding:10px;border-radius:5px;background:white;box-shadow:0 1px 3px rgba(0,0,0,0.1)}.message img{width:30px;height:30px;border-radius:50%;margin-right:10px}.author{font-weight:bold;margin-right:10px}.timestamp{color:#666;font-size:0.8em}.content{margin-top:5px}";

pub struct Config {
    /// Discord bot token, the only strictly required setting.
    pub discord_token: String,

    /// Guild to register slash commands in. Commands are registered globally
    /// when unset.
    pub guild_id: Option<GuildId>,
    /// Channel receiving ticket transcripts. Transcript upload is disabled
    /// when unset.
    pub log_channel: Option<ChannelId>,

    /// Icon shown in embed footers and thumbnails, blank when unset.
    pub icon_url: String,
    /// Stylesheet embedded in ticket transcripts.
    pub transcript_css: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_token = std::env::var("TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("TOKEN".to_string()))?;

        let guild_id = optional_id("GUILD")?.map(GuildId::new);
        if guild_id.is_none() {
            tracing::warn!("No GUILD ID configured, slash commands will be registered globally");
        }

        let log_channel = optional_id("LOG_CHANNEL")?.map(ChannelId::new);
        if log_channel.is_none() {
            tracing::warn!("No LOG_CHANNEL configured, transcript logging will be disabled");
        }

        let icon_url = std::env::var("ICON_URL").unwrap_or_default();
        if icon_url.is_empty() {
            tracing::warn!("No ICON_URL configured, default icons will not appear in embeds");
        }

        let transcript_css =
            std::env::var("CSS").unwrap_or_else(|_| DEFAULT_TRANSCRIPT_CSS.to_string());

        Ok(Self {
            discord_token,
            guild_id,
            log_channel,
            icon_url,
            transcript_css,
        })
    }
}

/// Reads an optional snowflake variable, treating unset and `0` as absent.
fn optional_id(name: &str) -> Result<Option<u64>, AppError> {
    match std::env::var(name) {
        Ok(raw) => {
            let id: u64 = raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()))?;
            Ok((id != 0).then_some(id))
        }
        Err(_) => Ok(None),
    }
}
