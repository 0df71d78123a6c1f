use thiserror::Error;

/// The ways a daily match lookup can go wrong. Input problems get reported
/// back to the user as plain text; the rest propagate up to the interaction
/// handler, which still owes the channel an error message.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("The supplied name '{0}' is not in the expected format 'PlayerName#TagLine'.")]
    InputFormat(String),

    #[error("Riot API {endpoint} request failed: {source}")]
    Lookup {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("no participant entry for the requested player in match {match_id}")]
    ParticipantMissing { match_id: String },
}
