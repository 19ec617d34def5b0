use anyhow::Context;
use dotenv::dotenv;
use log::LevelFilter;
use serde_json::json;
use std::env;
use std::process::ExitCode;

use wasana::{DEFAULT_LATEST_LIMIT, LottoEngine, LotteryBoard, ScrapeConfig};

const USAGE: &str = "usage: wasana lotteries <board>
       wasana result <board> <lottery> <draw-number | YYYY-MM-DD>
       wasana latest <board> <lottery> [limit]

boards: nlb (national) or dlb (development)";

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    match run(&args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> anyhow::Result<String> {
    let engine = LottoEngine::new(ScrapeConfig::from_env()?);
    let output = match args {
        [cmd, board_arg, rest @ ..] => {
            let board: LotteryBoard = board_arg.parse()?;
            match (cmd.as_str(), rest) {
                ("lotteries", []) => {
                    serde_json::to_string_pretty(&engine.list_active(board).await?)?
                }
                ("result", [lottery, locator]) => {
                    let looks_numeric =
                        !locator.is_empty() && locator.chars().all(|c| c.is_ascii_digit());
                    let record = if looks_numeric {
                        let draw: i64 = locator
                            .parse()
                            .with_context(|| format!("draw number '{locator}' is out of range"))?;
                        engine.get_by_draw(board, lottery, draw).await?
                    } else {
                        engine.get_by_date(board, lottery, locator).await?
                    };
                    serde_json::to_string_pretty(&record)?
                }
                ("latest", [lottery]) => serde_json::to_string_pretty(
                    &engine.get_latest(board, lottery, DEFAULT_LATEST_LIMIT).await?,
                )?,
                ("latest", [lottery, limit]) => {
                    let limit: usize = limit
                        .parse()
                        .with_context(|| format!("limit '{limit}' must be a positive integer"))?;
                    serde_json::to_string_pretty(&engine.get_latest(board, lottery, limit).await?)?
                }
                _ => anyhow::bail!(
                    "unrecognized arguments; run wasana with no arguments for usage"
                ),
            }
        }
        _ => anyhow::bail!("unrecognized arguments; run wasana with no arguments for usage"),
    };
    Ok(output)
}
