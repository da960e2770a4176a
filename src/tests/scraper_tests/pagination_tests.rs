// src/tests/scraper_tests/pagination_tests.rs
use crate::tests::utils::{detail_page, results_page, site_url, test_scraper, StubSource, Summary};

const START: &str = "/wynajem/";

/// Stub site with `pages` results pages chained by forward links. Every page
/// holds two listings, each with its own detail page.
fn chained_site(pages: usize) -> StubSource {
    let mut source = StubSource::new();

    for n in 1..=pages {
        let path = page_path(n);
        let next = (n < pages).then(|| page_path(n + 1));

        let hrefs: Vec<String> = (1..=2).map(|i| format!("/d/oferta/{n}-{i}.html")).collect();
        let titles: Vec<String> = (1..=2).map(|i| format!("Listing {n}-{i}")).collect();
        let summaries: Vec<Summary<'_>> = titles
            .iter()
            .zip(&hrefs)
            .map(|(title, href)| Summary::new(title, href))
            .collect();

        let page = results_page(&summaries, next.as_deref());
        source = source.with_page(&site_url(&path), page);

        for href in &hrefs {
            source = source.with_page(&site_url(href), detail_page(&["Piętro: 1"]));
        }
    }

    source
}

fn page_path(n: usize) -> String {
    if n == 1 {
        START.to_string()
    } else {
        format!("{START}?page={n}")
    }
}

fn results_requests(source: &StubSource) -> Vec<String> {
    source
        .requests()
        .into_iter()
        .filter(|url| url.contains(START))
        .collect()
}

#[test]
fn walks_every_page_in_order() {
    let scraper = test_scraper(chained_site(3));

    let records = scraper.scrape_all(&site_url(START));

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Listing 1-1", "Listing 1-2", "Listing 2-1", "Listing 2-2", "Listing 3-1", "Listing 3-2"]
    );

    // Exactly one fetch per results page.
    assert_eq!(
        results_requests(&scraper.source),
        vec![site_url(&page_path(1)), site_url(&page_path(2)), site_url(&page_path(3))]
    );
}

#[test]
fn every_record_has_all_fields_populated() {
    let scraper = test_scraper(chained_site(2));

    let records = scraper.scrape_all(&site_url(START));

    assert_eq!(records.len(), 4);
    for record in &records {
        assert!(record.as_row().iter().all(|value| !value.is_empty()));
        assert_eq!(record.floor, "Piętro: 1");
        assert_eq!(record.location, "Wrocław");
    }
}

#[test]
fn failed_page_keeps_earlier_results() {
    // Page 1 links to page 2, which the stub doesn't know about.
    let page = results_page(
        &[Summary::new("Only one", "/d/oferta/one.html")],
        Some("/wynajem/?page=2"),
    );
    let source = StubSource::new()
        .with_page(&site_url(START), page)
        .with_page(&site_url("/d/oferta/one.html"), detail_page(&[]));
    let scraper = test_scraper(source);

    let records = scraper.scrape_all(&site_url(START));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Only one");
    assert_eq!(results_requests(&scraper.source).len(), 2);
}

#[test]
fn failed_start_page_returns_nothing() {
    let scraper = test_scraper(StubSource::new());

    let records = scraper.scrape_all(&site_url(START));

    assert!(records.is_empty());
    assert_eq!(scraper.source.requests(), vec![site_url(START)]);
}

#[test]
fn listings_without_links_are_skipped() {
    let page = results_page(
        &[
            Summary::new("Kept", "/d/oferta/kept.html"),
            Summary {
                href: None,
                ..Summary::new("Dropped", "")
            },
        ],
        None,
    );
    let source = StubSource::new()
        .with_page(&site_url(START), page)
        .with_page(&site_url("/d/oferta/kept.html"), detail_page(&[]));
    let scraper = test_scraper(source);

    let records = scraper.scrape_all(&site_url(START));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Kept");
}

#[test]
fn link_back_to_visited_page_stops_the_walk() {
    let first = results_page(&[], Some("/wynajem/?page=2"));
    let second = results_page(&[], Some(START));
    let source = StubSource::new()
        .with_page(&site_url(START), first)
        .with_page(&site_url("/wynajem/?page=2"), second);
    let scraper = test_scraper(source);

    let records = scraper.scrape_all(&site_url(START));

    assert!(records.is_empty());
    assert_eq!(scraper.source.request_count(&site_url(START)), 1);
    assert_eq!(scraper.source.requests().len(), 2);
}
