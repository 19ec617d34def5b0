mod common;

use common::*;
use httpmock::prelude::*;
use wasana::{LottoEngine, LottoError, LotteryBoard};

#[tokio::test]
async fn latest_collects_newest_first_across_pages_and_skips_repeats() {
    let server = MockServer::start_async().await;
    mock_nlb_home(&server);
    mock_nlb_catalog(&server, &["Govisetha"]);
    let p1_body = nlb_results_page(&[
        gov("4263", "2025-11-22"),
        gov("4262", "2025-11-21"),
        gov("4261", "2025-11-20"),
    ]);
    let p1 = server.mock(|when, then| {
        when.method(GET)
            .path("/results/govisetha")
            .query_param("page", "1");
        then.status(200).body(p1_body);
    });
    // Page 2 repeats the last draw of page 1, as the live site does when a
    // new draw lands mid-walk.
    let p2_body = nlb_results_page(&[
        gov("4261", "2025-11-20"),
        gov("4260", "2025-11-19"),
        gov("4259", "2025-11-18"),
    ]);
    let p2 = server.mock(|when, then| {
        when.method(GET)
            .path("/results/govisetha")
            .query_param("page", "2");
        then.status(200).body(p2_body);
    });

    let engine = LottoEngine::new(test_config(&server));
    let records = engine
        .get_latest(LotteryBoard::National, "Govisetha", 5)
        .await
        .unwrap();

    let draws: Vec<&str> = records.iter().map(|r| r.draw.as_str()).collect();
    assert_eq!(draws, vec!["4263", "4262", "4261", "4260", "4259"]);
    assert!(records.windows(2).all(|w| w[0].date > w[1].date));
    p1.assert();
    p2.assert();
}

#[tokio::test]
async fn latest_stops_early_when_the_archive_ends() {
    let server = MockServer::start_async().await;
    mock_dlb_catalog(&server, &["Ada Kotipathi"]);
    let p1_body = dlb_archive_page(&[ada("2608", "2025-11-20"), ada("2607", "2025-11-18")]);
    server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "1");
        then.status(200).body(p1_body);
    });
    let p2_body = dlb_archive_page(&[ada("2606", "2025-11-16"), ada("2605", "2025-11-14")]);
    server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "2");
        then.status(200).body(p2_body);
    });
    let empty = server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "3");
        then.status(200).body(dlb_archive_page(&[]));
    });

    let engine = LottoEngine::new(test_config(&server));
    let records = engine
        .get_latest(LotteryBoard::Development, "Ada Kotipathi", 10)
        .await
        .unwrap();

    let draws: Vec<&str> = records.iter().map(|r| r.draw.as_str()).collect();
    assert_eq!(draws, vec!["2608", "2607", "2606", "2605"]);
    empty.assert();
}

#[tokio::test]
async fn latest_limit_bounds_are_checked_before_any_network_traffic() {
    let server = MockServer::start_async().await;
    let home = mock_nlb_home(&server);
    let catalog = mock_nlb_catalog(&server, &["Govisetha"]);

    let engine = LottoEngine::new(test_config(&server));
    for bad in [0usize, 51, 500] {
        let err = engine
            .get_latest(LotteryBoard::National, "Govisetha", bad)
            .await
            .unwrap_err();
        assert!(matches!(err, LottoError::Validation(_)), "limit {bad}: {err:?}");
    }
    home.assert_hits(0);
    catalog.assert_hits(0);
}

#[tokio::test]
async fn latest_checks_catalog_membership_before_walking_the_archive() {
    let server = MockServer::start_async().await;
    mock_dlb_catalog(&server, &["Ada Kotipathi"]);
    let archive = server.mock(|when, then| {
        when.method(GET).path("/en/results");
        then.status(200).body(dlb_archive_page(&[ada("2608", "2025-11-20")]));
    });

    let engine = LottoEngine::new(test_config(&server));
    let err = engine
        .get_latest(LotteryBoard::Development, "Neeroga", 5)
        .await
        .unwrap_err();

    assert!(matches!(err, LottoError::InvalidLottery { .. }), "got {err:?}");
    archive.assert_hits(0);
}

#[tokio::test]
async fn archive_page_ceiling_bounds_a_fruitless_scan() {
    let server = MockServer::start_async().await;
    mock_dlb_catalog(&server, &["Ada Kotipathi"]);
    let p1_body = dlb_archive_page(&[ada("2608", "2025-11-20")]);
    let p1 = server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "1");
        then.status(200).body(p1_body);
    });
    let p2_body = dlb_archive_page(&[ada("2607", "2025-11-18")]);
    let p2 = server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "2");
        then.status(200).body(p2_body);
    });
    let p3 = server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "3");
        then.status(200).body(dlb_archive_page(&[ada("2606", "2025-11-16")]));
    });

    let mut config = test_config(&server);
    config.archive_page_cap = 2;
    let engine = LottoEngine::new(config);
    let err = engine
        .get_by_draw(LotteryBoard::Development, "Ada Kotipathi", 1)
        .await
        .unwrap_err();

    assert!(matches!(err, LottoError::NotFound(_)), "got {err:?}");
    p1.assert();
    p2.assert();
    p3.assert_hits(0);
}

#[tokio::test]
async fn latest_is_truncated_by_the_page_ceiling() {
    let server = MockServer::start_async().await;
    mock_dlb_catalog(&server, &["Ada Kotipathi"]);
    let p1_body = dlb_archive_page(&[ada("2608", "2025-11-20"), ada("2607", "2025-11-18")]);
    server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "1");
        then.status(200).body(p1_body);
    });
    let p2_body = dlb_archive_page(&[ada("2606", "2025-11-16"), ada("2605", "2025-11-14")]);
    server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "2");
        then.status(200).body(p2_body);
    });
    let p3 = server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "3");
        then.status(200).body(dlb_archive_page(&[ada("2604", "2025-11-12")]));
    });

    let mut config = test_config(&server);
    config.archive_page_cap = 2;
    let engine = LottoEngine::new(config);
    let records = engine
        .get_latest(LotteryBoard::Development, "Ada Kotipathi", 50)
        .await
        .unwrap();

    assert_eq!(records.len(), 4);
    p3.assert_hits(0);
}

#[tokio::test]
async fn a_failing_page_mid_walk_fails_the_whole_call() {
    let server = MockServer::start_async().await;
    mock_dlb_catalog(&server, &["Ada Kotipathi"]);
    let p1_body = dlb_archive_page(&[ada("2608", "2025-11-20"), ada("2607", "2025-11-18")]);
    server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "1");
        then.status(200).body(p1_body);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/en/results")
            .query_param("lottery", "Ada Kotipathi")
            .query_param("page", "2");
        then.status(500).body("<html><body>oops</body></html>");
    });

    let engine = LottoEngine::new(test_config(&server));
    let err = engine
        .get_latest(LotteryBoard::Development, "Ada Kotipathi", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, LottoError::Network(_)), "got {err:?}");
}
