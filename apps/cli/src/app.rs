//! Check flow: ping, list IDs, fetch their details, verify the batch.

use freestuff_client::validate::{check_game_ids, check_game_infos};
use freestuff_client::{Client, Error, FreeStuffApi, GameCategory, GameInfo, with_deadline};

use crate::config::Config;

/// Runs the full check under the configured deadline.
pub async fn run(config: &Config) -> anyhow::Result<Vec<GameInfo>> {
    let mut client = Client::new(&config.api_key)?;
    if let Some(url) = &config.base_url {
        client = client.with_base_url(url.as_str());
    }

    let games = with_deadline(config.timeout, check(&client, config.category))
        .await
        .map_err(describe)?;

    for game in &games {
        tracing::info!(
            id = game.id,
            title = %game.title,
            store = %game.store,
            until = ?game.until,
            "game"
        );
    }

    Ok(games)
}

async fn check(api: &dyn FreeStuffApi, category: GameCategory) -> Result<Vec<GameInfo>, Error> {
    api.ping().await?;
    tracing::info!("API reachable");

    let ids = api.get_game_ids(category).await?;
    check_game_ids(category, &ids)?;
    tracing::info!(count = ids.len(), %category, "fetched game IDs");

    let games = api.get_game_info(&ids).await?;
    check_game_infos(&ids, &games)?;

    Ok(games)
}

/// Wraps a check failure with a line naming what went wrong.
fn describe(err: Error) -> anyhow::Error {
    let summary = match &err {
        Error::Transport { uri, .. } | Error::Api { uri, .. } if uri == "/ping" => {
            "failed to ping API"
        }
        Error::EmptyResult { .. } => "no game IDs returned; this may indicate a deserialization issue",
        Error::CountMismatch { .. }
        | Error::MissingTitle { .. }
        | Error::UnexpectedId { .. }
        | Error::MissingId { .. } => {
            "game info failed validation; this may indicate a deserialization issue"
        }
        Error::Timeout => "check did not finish in time",
        _ => "FreeStuff API check failed",
    };
    anyhow::Error::from(err).context(summary)
}
