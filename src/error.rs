use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Fighter not found: {0}")]
    FighterNotFound(String),

    #[error("The fighter list came back empty")]
    NoFighters,

    #[error("No fighters with a usable nickname to quiz on")]
    NoEligibleFighters,

    #[error("No tattoos available from the tattoo service")]
    NoTattoos,

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
