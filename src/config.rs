use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::board::LotteryBoard;
use crate::locate::FetchSpec;

const NLB_BASE_URL: &str = "https://www.nlb.lk";
const DLB_BASE_URL: &str = "https://www.dlb.today";

const DEFAULT_ARCHIVE_PAGE_CAP: usize = 50;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// The env vars recognized for scraping. All optional; defaults apply.
#[derive(Debug, Deserialize)]
struct ScrapeEnv {
    nlb_base_url: Option<String>,
    dlb_base_url: Option<String>,
    archive_page_cap: Option<usize>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub nlb_base_url: String,
    pub dlb_base_url: String,
    /// Upper bound on archive pages walked within one operation. Termination
    /// guarantee, not a site property.
    pub archive_page_cap: usize,
    pub request_timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            nlb_base_url: NLB_BASE_URL.to_string(),
            dlb_base_url: DLB_BASE_URL.to_string(),
            archive_page_cap: DEFAULT_ARCHIVE_PAGE_CAP,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ScrapeConfig {
    /// Production defaults, overlaid with whatever env vars are set.
    pub fn from_env() -> anyhow::Result<Self> {
        let env = ScrapeEnv::load_from_env()?;
        let defaults = Self::default();
        Ok(Self {
            nlb_base_url: env.nlb_base_url.unwrap_or(defaults.nlb_base_url),
            dlb_base_url: env.dlb_base_url.unwrap_or(defaults.dlb_base_url),
            archive_page_cap: env.archive_page_cap.unwrap_or(defaults.archive_page_cap),
            request_timeout: env
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }

    pub fn base_url(&self, board: LotteryBoard) -> &str {
        match board {
            LotteryBoard::National => &self.nlb_base_url,
            LotteryBoard::Development => &self.dlb_base_url,
        }
    }

    /// Listing page that names the board's currently published lotteries.
    pub fn catalog_url(&self, board: LotteryBoard) -> String {
        match board {
            LotteryBoard::National => format!("{}/results", self.nlb_base_url),
            LotteryBoard::Development => format!("{}/en/lotteries", self.dlb_base_url),
        }
    }

    /// Results page for one lottery, name already normalized for the board.
    /// NLB addresses the lottery in the path; DLB keeps its space-bearing
    /// names in a query parameter on a shared archive endpoint.
    pub fn lottery_page(&self, board: LotteryBoard, lottery: &str) -> FetchSpec {
        match board {
            LotteryBoard::National => {
                FetchSpec::new(format!("{}/results/{}", self.nlb_base_url, lottery))
            }
            LotteryBoard::Development => {
                FetchSpec::new(format!("{}/en/results", self.dlb_base_url)).with("lottery", lottery)
            }
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
