mod archive;
mod board;
mod catalog;
mod config;
mod engine;
mod error;
mod locate;
mod parse;
mod ratelimit;
mod record;
mod requests;
mod session;
mod text_manipulators;

pub use board::LotteryBoard;
pub use config::ScrapeConfig;
pub use engine::{DEFAULT_LATEST_LIMIT, LottoEngine, MAX_LATEST_LIMIT};
pub use error::{LottoError, Result};
pub use locate::Locator;
pub use record::{CatalogEntry, ResultRecord};
