//! Test utilities and fixture pages for the gameinfo test suite

use kodegen_tools_gameinfo::LookupConfig;
use mockito::{Matcher, Mock, Server};
use std::time::Duration;

/// Fields of a fixture detail page; `None` leaves the row/container out
#[derive(Debug, Clone, Default)]
pub struct DetailFixture {
    pub brand: Option<&'static str>,
    pub average: Option<&'static str>,
    pub sellday: Option<&'static str>,
    pub seiyu: Option<&'static str>,
    pub genga: Option<&'static str>,
    pub shinario: Option<&'static str>,
    pub main_image: Option<&'static str>,
    pub sample_image: Option<&'static str>,
}

impl DetailFixture {
    /// Every row and both images populated
    #[allow(dead_code)]
    pub fn complete() -> Self {
        Self {
            brand: Some("Sample Brand"),
            average: Some("78"),
            sellday: Some("2021-07-30"),
            seiyu: Some("Voice One Voice Two"),
            genga: Some("Artist Name"),
            shinario: Some("Writer Name"),
            main_image: Some("https://example.com/images/main.jpg"),
            sample_image: Some("https://img.dlsite.jp/sample_cg_1.jpg"),
        }
    }

    /// Brand, score and release date only
    #[allow(dead_code)]
    pub fn required_only() -> Self {
        Self {
            brand: Some("Sample Brand"),
            average: Some("78"),
            sellday: Some("2021-07-30"),
            ..Self::default()
        }
    }
}

/// Creates a search results page; rows are `(title, href, platform)`
#[allow(dead_code)]
pub fn search_page(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::from("<table>\n<tr><th>ゲーム名</th><th>ブランド</th></tr>\n");
    for (title, href, platform) in rows {
        let label = if platform.is_empty() {
            String::new()
        } else {
            format!(r#"<span style="font-weight:bold;">{platform}</span>"#)
        };
        body.push_str(&format!(
            "<tr><td><a href=\"{href}\">{title}</a>{label}</td><td>brand</td></tr>\n"
        ));
    }
    body.push_str("</table>");
    page("検索結果", &body)
}

/// Creates a game detail page from a fixture
#[allow(dead_code)]
pub fn detail_page(fixture: &DetailFixture) -> String {
    let mut body = String::new();

    if let Some(src) = fixture.main_image {
        body.push_str(&format!(
            "<div id=\"main_image\"><a href=\"#\"><img src=\"{src}\"></a></div>\n"
        ));
    }
    if let Some(src) = fixture.sample_image {
        body.push_str(&format!(
            "<div id=\"dlsite_sample_cg_1_main\"><a href=\"#\"><img src=\"{src}\"></a></div>\n"
        ));
    }

    body.push_str("<table>\n");
    if let Some(brand) = fixture.brand {
        body.push_str(&format!(
            "<tr id=\"brand\"><th>ブランド</th><td><a href=\"brand.php?brand=1\">{brand}</a></td></tr>\n"
        ));
    }
    let cells = [
        ("sellday", "発売日", fixture.sellday),
        ("average", "中央値", fixture.average),
        ("shinario", "シナリオ", fixture.shinario),
        ("genga", "原画", fixture.genga),
        ("seiyu", "声優", fixture.seiyu),
    ];
    for (id, label, value) in cells {
        if let Some(value) = value {
            body.push_str(&format!(
                "<tr id=\"{id}\"><th>{label}</th><td>{value}</td></tr>\n"
            ));
        }
    }
    body.push_str("</table>");

    page("ゲーム詳細", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Lookup config pointed at a mock server
#[allow(dead_code)]
pub fn test_config(server: &Server) -> LookupConfig {
    LookupConfig::builder()
        .base_url(server.url())
        .request_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create test config")
}

/// Mocks the search endpoint for `word`, answering with `html`
#[allow(dead_code)]
pub async fn mock_search(server: &mut Server, word: &str, html: &str) -> Mock {
    server
        .mock("GET", Matcher::Regex(r"^/kensaku\.php".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("category".into(), "game".into()),
            Matcher::UrlEncoded("word_category".into(), "name".into()),
            Matcher::UrlEncoded("word".into(), word.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn mock_html(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn mock_error(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}
