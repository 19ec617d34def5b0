// Each integration test binary compiles this module on its own, so not
// every helper is referenced from every binary.
#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use wasana::ScrapeConfig;

/// Config pointing both boards at one mock server.
pub fn test_config(server: &MockServer) -> ScrapeConfig {
    ScrapeConfig {
        nlb_base_url: server.base_url(),
        dlb_base_url: server.base_url(),
        ..ScrapeConfig::default()
    }
}

/// The NLB site root, where sessions pick up their cookies.
pub fn mock_nlb_home(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body>National Lotteries Board</body></html>");
    })
}

pub fn mock_nlb_catalog<'a>(server: &'a MockServer, names: &[&str]) -> Mock<'a> {
    let body = nlb_catalog_page(names);
    server.mock(|when, then| {
        when.method(GET).path("/results");
        then.status(200)
            .header("content-type", "text/html")
            .body(body);
    })
}

pub fn mock_dlb_catalog<'a>(server: &'a MockServer, names: &[&str]) -> Mock<'a> {
    let body = dlb_catalog_page(names);
    server.mock(|when, then| {
        when.method(GET).path("/en/lotteries");
        then.status(200)
            .header("content-type", "text/html")
            .body(body);
    })
}

pub struct NlbDraw {
    pub lottery: &'static str,
    pub draw: &'static str,
    pub date: &'static str,
    pub letter: Option<&'static str>,
    pub numbers: &'static [&'static str],
}

/// A Govisetha draw the way NLB publishes one.
pub fn gov(draw: &'static str, date: &'static str) -> NlbDraw {
    NlbDraw {
        lottery: "Govisetha",
        draw,
        date,
        letter: Some("T"),
        numbers: &["13", "25", "29", "51"],
    }
}

pub struct DlbDraw {
    pub lottery: &'static str,
    pub draw: &'static str,
    pub date: &'static str,
    pub letter: Option<&'static str>,
    pub numbers: &'static [&'static str],
    pub prize_image: Option<&'static str>,
}

/// An Ada Kotipathi draw the way DLB publishes one.
pub fn ada(draw: &'static str, date: &'static str) -> DlbDraw {
    DlbDraw {
        lottery: "Ada Kotipathi",
        draw,
        date,
        letter: Some("M"),
        numbers: &["07", "19", "44", "60"],
        prize_image: None,
    }
}

pub fn nlb_results_page(draws: &[NlbDraw]) -> String {
    let items: String = draws.iter().map(nlb_item).collect();
    format!(
        "<!DOCTYPE html><html><body><main><ul class=\"lottery-results\">{items}</ul></main></body></html>"
    )
}

fn nlb_item(d: &NlbDraw) -> String {
    let mut balls = String::new();
    if let Some(letter) = d.letter {
        balls.push_str(&format!("<li class=\"ball letter\">{letter}</li>"));
    }
    for n in d.numbers {
        balls.push_str(&format!("<li class=\"ball\">{n}</li>"));
    }
    format!(
        "<li class=\"result-item\"><h3 class=\"result-heading\">{} {}</h3>\
         <time class=\"draw-date\" datetime=\"{}\">{}</time>\
         <ol class=\"balls\">{balls}</ol></li>",
        d.lottery, d.draw, d.date, d.date
    )
}

pub fn dlb_archive_page(draws: &[DlbDraw]) -> String {
    let panels: String = draws.iter().map(dlb_panel).collect();
    format!(
        "<!DOCTYPE html><html><body><div class=\"results-archive\">{panels}</div></body></html>"
    )
}

fn dlb_panel(d: &DlbDraw) -> String {
    let mut balls = String::new();
    if let Some(letter) = d.letter {
        balls.push_str(&format!("<span class=\"ball letter-ball\">{letter}</span>"));
    }
    for n in d.numbers {
        balls.push_str(&format!("<span class=\"ball\">{n}</span>"));
    }
    let prize = d
        .prize_image
        .map(|src| format!("<img class=\"prize-structure\" src=\"{src}\">"))
        .unwrap_or_default();
    format!(
        "<div class=\"result-panel\"><h4 class=\"draw-info\">{} {}</h4>\
         <span class=\"date-info\">{}</span>\
         <div class=\"winning-line\">{balls}</div>{prize}</div>",
        d.lottery, d.draw, d.date
    )
}

pub fn nlb_catalog_page(names: &[&str]) -> String {
    let links: String = names
        .iter()
        .map(|n| format!("<li><a href=\"#\">{n}</a></li>"))
        .collect();
    format!("<html><body><nav class=\"lottery-menu\"><ul>{links}</ul></nav></body></html>")
}

pub fn dlb_catalog_page(names: &[&str]) -> String {
    let links: String = names
        .iter()
        .map(|n| format!("<li><a href=\"#\">{n}</a></li>"))
        .collect();
    format!("<html><body><ul class=\"lottery-nav\">{links}</ul></body></html>")
}
