// tests/e2e_public_pages.rs
use axum::{
    body::Body,
    http::{Request, StatusCode, header::{HOST, ORIGIN}},
};

mod support;
use support::{ArticleFormBuilder, TestApp};

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new().await;
    let response = app.get("/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn empty_site_renders_home_list_and_about() {
    let app = TestApp::new().await;

    let home = app.get("/", None).await;
    assert_eq!(home.status, StatusCode::OK);
    assert!(home.body.contains("Nothing published yet."));

    let list = app.get("/articles/", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.contains("No articles match these filters."));

    let about = app.get("/about/", None).await;
    assert_eq!(about.status, StatusCode::OK);
    assert!(about.body.contains("About CinemaWords"));
}

#[tokio::test]
async fn unknown_paths_and_slugs_are_404_pages() {
    let app = TestApp::new().await;

    let missing_route = app.get("/no-such-page/", None).await;
    assert_eq!(missing_route.status, StatusCode::NOT_FOUND);
    assert!(missing_route.body.contains("<h1>404</h1>"));

    let missing_article = app.get("/articles/never-written/", None).await;
    assert_eq!(missing_article.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_filter_values_match_nothing() {
    let app = TestApp::new().await;
    let response = app.get("/articles/?kind=podcast&type=radio", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No articles match these filters."));
}

#[tokio::test]
async fn disallowed_host_is_rejected() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .uri("/")
        .header(HOST, "evil.test")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cross_origin_posts_are_forbidden() {
    let app = TestApp::new().await;

    let post = |origin: &'static str| {
        Request::builder()
            .method("POST")
            .uri("/logout/")
            .header(HOST, "localhost")
            .header(ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let foreign = app.send(post("https://evil.test")).await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let same_site = app.send(post("http://localhost")).await;
    same_site.assert_redirect("/");

    let trusted = app.send(post("https://trusted.test")).await;
    trusted.assert_redirect("/");
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = TestApp::new().await;
    let response = app.get("/static/css/site.css", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(".site-header"));
}

fn section<'a>(body: &'a str, class: &str) -> &'a str {
    let start = body
        .find(&format!("<section class=\"{class}\">"))
        .unwrap_or_else(|| panic!("home page has no {class} section"));
    let rest = &body[start..];
    &rest[..rest.find("</section>").unwrap()]
}

fn cards(section: &str) -> usize {
    section.matches("<article class=\"card\">").count()
}

#[tokio::test]
async fn home_page_rails_are_limited_and_split_by_media_type() {
    let app = TestApp::new().await;
    let (staff, writer) = app.staff_and_writer().await;
    app.create_category(&staff, "Cinema", "film").await;
    app.create_category(&staff, "Television", "tv").await;

    for index in 0..5 {
        let title = format!("Film Review {index}");
        app.submit(&writer, ArticleFormBuilder::new(&title).category(1))
            .await
            .assert_redirect("/dashboard/");
    }
    for index in 0..5 {
        let title = format!("Series Review {index}");
        app.submit(&writer, ArticleFormBuilder::new(&title).category(2))
            .await
            .assert_redirect("/dashboard/");
    }
    app.submit(&writer, ArticleFormBuilder::new("Film Essay").category(1).kind("essay"))
        .await
        .assert_redirect("/dashboard/");
    app.submit(&writer, ArticleFormBuilder::new("Cover Story"))
        .await
        .assert_redirect("/dashboard/");

    let ids: Vec<i64> = (1..=12).collect();
    app.publish(&staff, &ids).await.assert_redirect("/admin/articles/");
    app.bulk("/admin/articles/feature/", &staff, &[12], &[("featured", "1")])
        .await
        .assert_redirect("/admin/articles/");

    let home = app.get("/", None).await;
    assert_eq!(home.status, StatusCode::OK);

    let featured = section(&home.body, "featured");
    assert_eq!(cards(featured), 1);
    assert!(featured.contains("Cover Story"));

    let recent = section(&home.body, "recent");
    assert_eq!(cards(recent), 8);
    assert!(!recent.contains("Cover Story"));
    assert!(recent.contains("Film Essay"));
    assert!(!recent.contains("Film Review 0"));

    let film = section(&home.body, "film");
    assert_eq!(cards(film), 4);
    assert!(!film.contains("Series Review"));
    assert!(!film.contains("Film Essay"));
    assert!(film.contains("Film Review 4"));
    assert!(!film.contains("Film Review 0"));

    let tv = section(&home.body, "tv");
    assert_eq!(cards(tv), 4);
    assert!(!tv.contains("Film Review"));
    assert!(tv.contains("Series Review 4"));
}

#[tokio::test]
async fn public_search_covers_title_body_subject_and_author_in_any_case() {
    let app = TestApp::new().await;
    let (staff, writer) = app.staff_and_writer().await;
    let guest = app.register("Renée").await;

    app.submit(&writer, ArticleFormBuilder::new("Été indien"))
        .await
        .assert_redirect("/dashboard/");
    app.submit(
        &writer,
        ArticleFormBuilder::new("Plain Title Two")
            .set("body", "Somewhere near a zebra crossing.")
            .excerpt("A marmot appears."),
    )
    .await
    .assert_redirect("/dashboard/");
    app.submit(
        &writer,
        ArticleFormBuilder::new("Plain Title Three").set("subject_title", "Amélie"),
    )
    .await
    .assert_redirect("/dashboard/");
    app.submit(&guest, ArticleFormBuilder::new("Plain Title Four"))
        .await
        .assert_redirect("/dashboard/");
    app.publish(&staff, &[1, 2, 3, 4]).await;

    let titles = ["Été indien", "Plain Title Two", "Plain Title Three", "Plain Title Four"];
    let cases = [
        ("été", "Été indien"),
        ("ÉTÉ INDIEN", "Été indien"),
        ("ZeBrA", "Plain Title Two"),
        ("aMÉLIE", "Plain Title Three"),
        ("RENÉE", "Plain Title Four"),
    ];
    for (query, expected) in cases {
        let uri = format!("/articles/?{}", serde_urlencoded::to_string([("q", query)]).unwrap());
        let response = app.get(&uri, None).await;
        assert_eq!(response.status, StatusCode::OK);
        for title in titles {
            assert_eq!(
                response.body.contains(title),
                title == expected,
                "searching {query:?} for {title:?}"
            );
        }
    }

    let excerpt_only = app.get("/articles/?q=marmot", None).await;
    assert!(excerpt_only.body.contains("No articles match these filters."));
}
