use async_trait::async_trait;

use crate::command_handler::CommandHandler;
use crate::constants::EMPTY_RESULT_SENTINEL;
use crate::crawler::{Crawler, PageCrawler};
use crate::errors::{CommandError, ParseError};
use crate::{tracer, utils};

pub struct FetchHandler {
    url: String,
    verbose: bool,
    crawler: Box<dyn Crawler>,
}

impl Default for FetchHandler {
    fn default() -> Self {
        Self {
            url: String::new(),
            verbose: false,
            crawler: Box::new(PageCrawler),
        }
    }
}

#[async_trait]
impl CommandHandler for FetchHandler {
    fn parse(&mut self, args: &mut dyn Iterator<Item = String>) -> Result<(), ParseError> {
        let url = args
            .next()
            .ok_or(ParseError::MissingArgument(String::from("url")))?;
        self.url = utils::normalize_url(&url)?;

        for arg in args {
            match arg.as_str() {
                "--verbose" | "-v" => self.verbose = true,
                other => return Err(ParseError::UnknownOption(other.to_string())),
            }
        }

        Ok(())
    }

    async fn execute(&self) -> Result<(), CommandError> {
        tracer::init(self.verbose);
        tracing::info!(url = %self.url, "fetching page");

        let result = self
            .crawler
            .fetch_markdown(&self.url)
            .await
            .map_err(|err| CommandError::FetchFailed {
                url: self.url.clone(),
                source: err,
            })?;

        match result {
            Some(markdown) => println!("{markdown}"),
            None => println!("{EMPTY_RESULT_SENTINEL}"),
        }

        Ok(())
    }
}
