use serenity::all::CreateEmbed;

/// What the interaction handler should send back once a command finishes.
pub enum Reply {
    Text(String),
    Embed(CreateEmbed),
}

pub mod league {
    use std::sync::Arc;

    use anyhow::Result;
    use serenity::all::{
        CommandDataOption, CommandDataOptionValue, CreateCommandOption, CreateEmbed,
        CreateEmbedFooter,
    };
    use serenity::builder;
    use serenity::model::application::CommandOptionType;
    use serenity::model::Colour;
    use tracing::info;

    use super::Reply;
    use crate::models::SessionSummary;
    use crate::riot_api::RiotClient;
    use crate::riot_utils::{current_day_window, parse_riot_id, RiotId};
    use crate::summary::{classify_matches, summarize};
    use crate::Config;

    const FOOTER_TEXT: &str = "Jolly Bot - a homegrown Discord bot by RyCo";
    const THUMBNAIL_URL: &str = "https://static.wikia.nocookie.net/leagueoflegends/images/9/9a/League_of_Legends_Update_Logo_Concept_05.jpg/revision/latest/scale-to-width-down/250?cb=20191029062637";
    const SPLASH_URL: &str =
        "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/Briar_0.jpg";

    pub fn register() -> builder::CreateCommand {
        builder::CreateCommand::new("league")
            .description("League of Legends-related commands.")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    "daily_matches",
                    "Give a summary about a player's daily matches.",
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "player_name",
                        "The name of the player to lookup matches for. Should be in format PlayerName#TagLine.",
                    )
                    .required(true),
                ),
            )
    }

    pub async fn run(options: &[CommandDataOption], config: Arc<Config>) -> Result<Reply> {
        let Some(subcommand) = options.first() else {
            return Ok(Reply::Text("Looks like no subcommand was sent.".to_string()));
        };
        match (subcommand.name.as_str(), &subcommand.value) {
            ("daily_matches", CommandDataOptionValue::SubCommand(sub_options)) => {
                daily_matches(sub_options, config).await
            }
            _ => Ok(Reply::Text("not implemented :(".to_string())),
        }
    }

    async fn daily_matches(options: &[CommandDataOption], config: Arc<Config>) -> Result<Reply> {
        let player_name = match options.iter().find(|o| o.name == "player_name") {
            Some(option) => match &option.value {
                CommandDataOptionValue::String(name) => name.clone(),
                _ => {
                    return Ok(Reply::Text(
                        "Expected a player name, found something else.".to_string(),
                    ))
                }
            },
            None => {
                return Ok(Reply::Text(
                    "Looks like no player name was specified.".to_string(),
                ))
            }
        };
        info!("Daily match lookup requested for '{}'", player_name);

        // Bad input gets a plain-text reply and never touches the network.
        let riot_id = match parse_riot_id(&player_name) {
            Ok(riot_id) => riot_id,
            Err(e) => return Ok(Reply::Text(e.to_string())),
        };

        let riot = RiotClient::new(&config.riot_api_key)?;
        let window = current_day_window()?;

        let account = riot.account_by_riot_id(&riot_id.name, &riot_id.tag).await?;
        let match_ids = riot.match_ids_in_window(&account.puuid, window).await?;
        info!("Found {} match(es) for {} today", match_ids.len(), riot_id);
        let details = riot.fetch_all_details(&match_ids).await?;

        let results = classify_matches(&account.puuid, &details, config.missing_participant)?;
        Ok(Reply::Embed(build_embed(&riot_id, &summarize(&results))))
    }

    pub fn build_embed(riot_id: &RiotId, summary: &SessionSummary) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(format!("Match Overview for {riot_id}"))
            .description(format!(
                "***{riot_id}*** played {} games and won {} today.",
                summary.games, summary.wins
            ))
            .colour(Colour::BLURPLE)
            .thumbnail(THUMBNAIL_URL)
            .footer(CreateEmbedFooter::new(FOOTER_TEXT))
            .image(SPLASH_URL);
        for (classification, tally) in &summary.tallies {
            embed = embed.field(
                classification.as_str(),
                format!("***Wins:*** {} - ***Losses:*** {}", tally.wins, tally.losses),
                false,
            );
        }
        embed
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::league::build_embed;
    use crate::models::{ModeTally, SessionSummary};
    use crate::riot_utils::RiotId;

    fn embed_json(riot_id: &RiotId, summary: &SessionSummary) -> serde_json::Value {
        serde_json::to_value(build_embed(riot_id, summary)).unwrap()
    }

    fn player_one() -> RiotId {
        RiotId {
            name: "PlayerOne".to_string(),
            tag: "NA1".to_string(),
        }
    }

    #[test]
    fn zero_match_day_renders_an_empty_overview() {
        let value = embed_json(&player_one(), &SessionSummary::default());
        assert_eq!(value["title"], "Match Overview for PlayerOne#NA1");
        assert_eq!(
            value["description"],
            "***PlayerOne#NA1*** played 0 games and won 0 today."
        );
        assert!(value["fields"]
            .as_array()
            .map_or(true, |fields| fields.is_empty()));
    }

    #[test]
    fn renders_one_field_per_classification() {
        let summary = SessionSummary {
            games: 3,
            wins: 2,
            tallies: vec![
                (
                    "All Random All Mid (ARAM)".to_string(),
                    ModeTally { wins: 2, losses: 0 },
                ),
                ("Arena".to_string(), ModeTally { wins: 0, losses: 1 }),
            ],
        };
        let value = embed_json(&player_one(), &summary);
        assert_eq!(
            value["description"],
            "***PlayerOne#NA1*** played 3 games and won 2 today."
        );
        let fields = value["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], "All Random All Mid (ARAM)");
        assert_eq!(fields[0]["value"], "***Wins:*** 2 - ***Losses:*** 0");
        assert_eq!(fields[0]["inline"], false);
        assert_eq!(fields[1]["name"], "Arena");
        assert_eq!(fields[1]["value"], "***Wins:*** 0 - ***Losses:*** 1");
    }

    #[test]
    fn keeps_the_branding_footer() {
        let value = embed_json(&player_one(), &SessionSummary::default());
        assert_eq!(
            value["footer"]["text"],
            "Jolly Bot - a homegrown Discord bot by RyCo"
        );
    }
}
