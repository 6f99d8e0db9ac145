use async_trait::async_trait;

use crate::errors::{CliError, CommandError, ParseError};
use crate::errors::ParseError::CommandNotFound;
use crate::handlers::fetch::FetchHandler;
use crate::handlers::setup::SetupHandler;

#[async_trait]
pub trait CommandHandler {
    fn parse(&mut self, args: &mut dyn Iterator<Item = String>) -> Result<(), ParseError>;
    async fn execute(&self) -> Result<(), CommandError>;
}

pub async fn handle_args(mut args: impl Iterator<Item = String>) -> Result<(), CliError> {
    args.next(); // program name

    let command = match args.next() {
        Some(c) => c,
        None => {
            println!("Usage: fetchmd <fetch|setup>");
            return Ok(());
        }
    };

    let mut command_handler: Box<dyn CommandHandler> = match command.to_lowercase().as_str() {
        "fetch" => Box::new(FetchHandler::default()),
        "setup" => Box::new(SetupHandler::default()),
        _ => return Err(CommandNotFound(command).into()),
    };

    command_handler.parse(&mut args)?;
    command_handler.execute().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::handle_args;
    use crate::errors::{CliError, ParseError};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[tokio::test]
    async fn no_command_prints_usage_and_succeeds() {
        assert!(handle_args(args(&["fetchmd"])).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_command_is_rejected() {
        let err = handle_args(args(&["fetchmd", "frobnicate"])).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Parse(ParseError::CommandNotFound(c)) if c == "frobnicate"
        ));
    }

    #[tokio::test]
    async fn fetch_requires_a_url() {
        let err = handle_args(args(&["fetchmd", "fetch"])).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Parse(ParseError::MissingArgument(a)) if a == "url"
        ));
    }
}
