use discord_embed::config::Config;
use discord_embed::discord::send_embeds;
use discord_embed::errors::*;
use dotenv::dotenv;
use log::{error, info};

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let embed = config.build_embed();
    if embed.is_empty() {
        info!("no EMBED_* content configured, sending an empty embed");
    }

    let client = reqwest::Client::new();
    send_embeds(&client, &config.webhook_url, &[embed.get_embed()]).await
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        for cause in err.iter() {
            error!("{}", cause);
        }
        std::process::exit(1);
    }
}
