// tests/e2e_submissions.rs
use axum::http::StatusCode;

mod support;
use support::{ArticleFormBuilder, MultipartBody, TestApp, flash_texts};

const SUBMITTED: &str = "Your piece has been submitted for review. We'll be in touch!";

#[tokio::test]
async fn submission_lands_pending_on_the_dashboard() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;

    let response = app.submit(&writer, ArticleFormBuilder::new("Heat Revisited")).await;
    response.assert_redirect("/dashboard/");
    assert_eq!(flash_texts(&response), vec![SUBMITTED.to_string()]);

    let dashboard = app.get("/dashboard/", Some(&writer)).await;
    assert!(dashboard.body.contains("Heat Revisited"));
    assert!(dashboard.body.contains("Pending Review"));
    assert!(dashboard.body.contains("/edit/heat-revisited/"));
}

#[tokio::test]
async fn pending_articles_stay_out_of_public_listings() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;
    app.submit(&writer, ArticleFormBuilder::new("Heat Revisited")).await;

    let list = app.get("/articles/", None).await;
    assert!(!list.body.contains("Heat Revisited"));

    let home = app.get("/", None).await;
    assert!(!home.body.contains("Heat Revisited"));

    let detail = app.get("/articles/heat-revisited/", None).await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identical_titles_get_distinct_slugs() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;

    for _ in 0..3 {
        app.submit(&writer, ArticleFormBuilder::new("Double Feature"))
            .await
            .assert_redirect("/dashboard/");
    }

    let dashboard = app.get("/dashboard/", Some(&writer)).await;
    assert!(dashboard.body.contains("/edit/double-feature/"));
    assert!(dashboard.body.contains("/edit/double-feature-1/"));
    assert!(dashboard.body.contains("/edit/double-feature-2/"));
}

#[tokio::test]
async fn rating_must_lie_between_zero_and_ten() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;

    for (index, rating) in ["-1", "10.5"].into_iter().enumerate() {
        let title = format!("Rejected Rating {index}");
        let response = app
            .submit(&writer, ArticleFormBuilder::new(&title).rating(rating))
            .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "rating {rating}");
        assert!(response.body.contains("errorlist"));
    }

    for (index, rating) in ["0", "7.5", "10", "0.75e1"].into_iter().enumerate() {
        let title = format!("Accepted Rating {index}");
        app.submit(&writer, ArticleFormBuilder::new(&title).rating(rating))
            .await
            .assert_redirect("/dashboard/");
    }

    let dashboard = app.get("/dashboard/", Some(&writer)).await;
    assert!(!dashboard.body.contains("Rejected Rating"));
    assert!(dashboard.body.contains("Accepted Rating 0"));
    assert!(dashboard.body.contains("Accepted Rating 2"));
}

#[tokio::test]
async fn missing_fields_are_reported_together() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;

    let form = ArticleFormBuilder::new("")
        .kind("")
        .excerpt("")
        .set("body", "")
        .set("cover_image_url", "not a url");
    let response = app.submit(&writer, form).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.matches("This field is required.").count() >= 4);
    assert!(response.body.contains("Enter a valid URL."));
}

#[tokio::test]
async fn cover_uploads_are_stored_under_covers() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;

    let bad = app
        .submit(&writer, ArticleFormBuilder::new("Poster Art").cover("notes.txt", b"hello"))
        .await;
    assert_eq!(bad.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(bad.body.contains("Upload a valid image."));

    let good = app
        .submit(
            &writer,
            ArticleFormBuilder::new("Poster Art").cover("poster.png", b"\x89PNG fake"),
        )
        .await;
    good.assert_redirect("/dashboard/");

    let stored: Vec<_> = std::fs::read_dir(app.media_root().join("covers"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].ends_with(".png"));
}

#[tokio::test]
async fn authors_can_revise_pending_articles() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;
    app.submit(&writer, ArticleFormBuilder::new("First Draft")).await;

    let form = app.get("/edit/first-draft/", Some(&writer)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("value=\"First Draft\""));

    let response = app
        .post_multipart(
            "/edit/first-draft/",
            Some(&writer),
            ArticleFormBuilder::new("Second Draft").build(),
        )
        .await;
    response.assert_redirect("/dashboard/");
    assert_eq!(flash_texts(&response), vec!["Article updated.".to_string()]);

    let dashboard = app.get("/dashboard/", Some(&writer)).await;
    assert!(dashboard.body.contains("Second Draft"));
    assert!(dashboard.body.contains("/edit/first-draft/"));
}

#[tokio::test]
async fn other_authors_articles_are_not_found() {
    let app = TestApp::new().await;
    let (_, writer) = app.staff_and_writer().await;
    let rival = app.register("rival").await;
    app.submit(&writer, ArticleFormBuilder::new("Mine Alone")).await;

    let form = app.get("/edit/mine-alone/", Some(&rival)).await;
    assert_eq!(form.status, StatusCode::NOT_FOUND);

    let post = app
        .post_multipart(
            "/edit/mine-alone/",
            Some(&rival),
            ArticleFormBuilder::new("Hijacked").build(),
        )
        .await;
    assert_eq!(post.status, StatusCode::NOT_FOUND);

    let dashboard = app.get("/dashboard/", Some(&writer)).await;
    assert!(dashboard.body.contains("Mine Alone"));
    assert!(!dashboard.body.contains("Hijacked"));
}

#[tokio::test]
async fn published_articles_cannot_be_edited_whatever_is_posted() {
    let app = TestApp::new().await;
    let (staff, writer) = app.staff_and_writer().await;
    app.submit(&writer, ArticleFormBuilder::new("Locked In")).await;
    app.publish(&staff, &[1]).await.assert_redirect("/admin/articles/");

    let form = app.get("/edit/locked-in/", Some(&writer)).await;
    form.assert_redirect("/dashboard/");
    assert_eq!(
        flash_texts(&form),
        vec!["Published articles cannot be edited.".to_string()]
    );

    let valid = app
        .post_multipart(
            "/edit/locked-in/",
            Some(&writer),
            ArticleFormBuilder::new("Sneaky Change").build(),
        )
        .await;
    valid.assert_redirect("/dashboard/");

    let invalid = app
        .post_multipart(
            "/edit/locked-in/",
            Some(&writer),
            MultipartBody::new().text("rating", "99"),
        )
        .await;
    invalid.assert_redirect("/dashboard/");

    let not_multipart = app
        .post_form("/edit/locked-in/", Some(&writer), &[("title", "Sneaky Change")])
        .await;
    not_multipart.assert_redirect("/dashboard/");

    let detail = app.get("/articles/locked-in/", None).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Locked In"));
    assert!(!detail.body.contains("Sneaky Change"));
}

#[tokio::test]
async fn profile_edits_are_validated_and_saved() {
    let app = TestApp::new().await;
    let (staff, writer) = app.staff_and_writer().await;

    let form = app.get("/profile/edit/", Some(&writer)).await;
    assert_eq!(form.status, StatusCode::OK);

    let invalid = app
        .post_multipart(
            "/profile/edit/",
            Some(&writer),
            MultipartBody::new()
                .text("first_name", "Wren")
                .text("email", "not-an-email"),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(invalid.body.contains("Enter a valid email address."));
    assert!(invalid.body.contains("value=\"Wren\""));

    let long_name = "x".repeat(31);
    let every_field = app
        .post_multipart(
            "/profile/edit/",
            Some(&writer),
            MultipartBody::new()
                .text("first_name", &long_name)
                .text("last_name", &long_name)
                .text("email", "still-not-an-email"),
        )
        .await;
    assert_eq!(every_field.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(every_field.body.contains("Enter a valid email address."));
    assert_eq!(
        every_field
            .body
            .matches("Ensure this value has at most 30 characters (it has 31).")
            .count(),
        2
    );

    let saved = app
        .post_multipart(
            "/profile/edit/",
            Some(&writer),
            MultipartBody::new()
                .text("first_name", "Wren")
                .text("last_name", "Abbott")
                .text("email", "wren@example.com")
                .text("bio", "Writes about slow cinema.")
                .text("year_of_study", "Second")
                .text("university", "Northfield")
                .file("avatar", "me.png", "image/png", b"\x89PNG avatar"),
        )
        .await;
    saved.assert_redirect("/dashboard/");
    assert_eq!(flash_texts(&saved), vec!["Profile updated.".to_string()]);

    let avatars = std::fs::read_dir(app.media_root().join("avatars")).unwrap().count();
    assert_eq!(avatars, 1);

    let reloaded = app.get("/profile/edit/", Some(&writer)).await;
    assert!(reloaded.body.contains("value=\"wren@example.com\""));
    assert!(reloaded.body.contains("Writes about slow cinema."));

    let listing = app.get("/admin/profiles/", Some(&staff)).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert!(listing.body.contains("Northfield"));

    let forbidden = app.get("/admin/profiles/", Some(&writer)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}
