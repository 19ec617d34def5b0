use chrono::NaiveDate;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Selector};

use crate::board::LotteryBoard;
use crate::error::{LottoError, Result};
use crate::record::ResultRecord;
use crate::requests::RawPage;
use crate::text_manipulators::{extract_text, trailing_number};

/// Pull every result block off a fetched page, page order preserved. A
/// recognizable page with no entries (or the board's explicit "no results"
/// marker) comes back as an empty list. A page that doesn't match the
/// board's results layout at all is classified by its HTTP status.
pub fn parse_results_page(page: &RawPage, board: LotteryBoard) -> Result<Vec<ResultRecord>> {
    let doc = Html::parse_document(&page.body);
    if has_no_results_marker(&doc, board) {
        return Ok(Vec::new());
    }
    if !has_results_container(&doc, board) {
        return Err(layout_failure(page, "results listing"));
    }
    match board {
        LotteryBoard::National => nlb_records(&doc),
        LotteryBoard::Development => dlb_records(&doc),
    }
}

/// Lottery names published on a board's listing page, document order.
pub fn parse_catalog(page: &RawPage, board: LotteryBoard) -> Result<Vec<String>> {
    let doc = Html::parse_document(&page.body);
    let link_sel = match board {
        LotteryBoard::National => Selector::parse("nav.lottery-menu a").unwrap(),
        LotteryBoard::Development => Selector::parse("ul.lottery-nav a").unwrap(),
    };
    let names: Vec<String> = doc
        .select(&link_sel)
        .map(extract_text)
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        // A live board always lists at least one lottery.
        return Err(layout_failure(page, "lottery listing"));
    }
    Ok(names)
}

fn has_no_results_marker(doc: &Html, board: LotteryBoard) -> bool {
    let marker = match board {
        LotteryBoard::National => Selector::parse("div.no-results").unwrap(),
        LotteryBoard::Development => Selector::parse("p.archive-empty").unwrap(),
    };
    doc.select(&marker).next().is_some()
}

fn has_results_container(doc: &Html, board: LotteryBoard) -> bool {
    let container = match board {
        LotteryBoard::National => Selector::parse("ul.lottery-results").unwrap(),
        LotteryBoard::Development => Selector::parse("div.results-archive").unwrap(),
    };
    doc.select(&container).next().is_some()
}

/// NLB result listings: one `li.result-item` per draw, the draw number
/// trailing the heading text, the date carried on a `time` element.
fn nlb_records(doc: &Html) -> Result<Vec<ResultRecord>> {
    let item_sel = Selector::parse("ul.lottery-results li.result-item").unwrap();
    let heading_sel = Selector::parse("h3.result-heading").unwrap();
    let date_sel = Selector::parse("time.draw-date").unwrap();
    let ball_sel = Selector::parse("ol.balls li.ball").unwrap();

    let mut records = Vec::new();
    for item in doc.select(&item_sel) {
        let heading = item
            .select(&heading_sel)
            .next()
            .map(extract_text)
            .ok_or_else(|| LottoError::Parse("result entry is missing its heading".to_string()))?;
        let draw = trailing_number(&heading)
            .ok_or_else(|| LottoError::Parse(format!("no draw number in heading '{heading}'")))?;
        let date = item
            .select(&date_sel)
            .next()
            .and_then(|el| el.value().attr("datetime"))
            .map(str::trim)
            .ok_or_else(|| LottoError::Parse(format!("draw {draw} entry carries no date")))
            .and_then(parse_iso_date)?;
        let (letter, numbers) = split_balls(item.select(&ball_sel), "letter")?;
        records.push(ResultRecord {
            draw,
            date,
            letter,
            numbers,
            prize_image: None,
        });
    }
    Ok(records)
}

/// DLB archive pages: one `div.result-panel` per draw, the draw number
/// trailing the `h4` info line, an optional prize structure image.
fn dlb_records(doc: &Html) -> Result<Vec<ResultRecord>> {
    let panel_sel = Selector::parse("div.results-archive div.result-panel").unwrap();
    let info_sel = Selector::parse("h4.draw-info").unwrap();
    let date_sel = Selector::parse("span.date-info").unwrap();
    let ball_sel = Selector::parse("div.winning-line span.ball").unwrap();
    let prize_sel = Selector::parse("img.prize-structure").unwrap();

    let mut records = Vec::new();
    for panel in doc.select(&panel_sel) {
        let info = panel
            .select(&info_sel)
            .next()
            .map(extract_text)
            .ok_or_else(|| LottoError::Parse("result panel is missing its draw info".to_string()))?;
        let draw = trailing_number(&info)
            .ok_or_else(|| LottoError::Parse(format!("no draw number in '{info}'")))?;
        let date_text = panel
            .select(&date_sel)
            .next()
            .map(extract_text)
            .ok_or_else(|| LottoError::Parse(format!("draw {draw} panel carries no date")))?;
        let date = parse_iso_date(&date_text)?;
        let (letter, numbers) = split_balls(panel.select(&ball_sel), "letter-ball")?;
        let prize_image = panel
            .select(&prize_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);
        records.push(ResultRecord {
            draw,
            date,
            letter,
            numbers,
            prize_image,
        });
    }
    Ok(records)
}

/// Split a ball list into the optional winning letter and the number balls,
/// ball order preserved. Number balls must be all digits; anything else
/// means the layout drifted under us.
fn split_balls<'a>(
    balls: impl Iterator<Item = ElementRef<'a>>,
    letter_class: &str,
) -> Result<(Option<String>, Vec<String>)> {
    let mut letter = None;
    let mut numbers = Vec::new();
    for ball in balls {
        let text = extract_text(ball);
        if text.is_empty() {
            continue;
        }
        if has_class(ball, letter_class) {
            letter = Some(text);
        } else if text.chars().all(|c| c.is_ascii_digit()) {
            numbers.push(text);
        } else {
            return Err(LottoError::Parse(format!(
                "malformed number token '{text}' in winning numbers"
            )));
        }
    }
    Ok((letter, numbers))
}

fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| LottoError::Parse(format!("unparseable draw date '{s}'")))
}

/// Classify a page whose markup didn't match: the HTTP status decides
/// whether the board said "gone", fell over, or changed shape.
fn layout_failure(page: &RawPage, what: &str) -> LottoError {
    if page.status == StatusCode::NOT_FOUND {
        LottoError::NotFound(format!("{what} at {} (HTTP 404)", page.url))
    } else if !page.status.is_success() {
        LottoError::Network(format!(
            "HTTP {} fetching {what} at {}",
            page.status, page.url
        ))
    } else {
        LottoError::Parse(format!("no recognizable {what} markup at {}", page.url))
    }
}
