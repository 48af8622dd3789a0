use recipe_extract::{import_recipe, ExtractError};

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#,
        json_ld
    )
}

#[tokio::test]
async fn test_import_recipe_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": "Pomidorowa",
        "recipeIngredient": ["pomidory", "makaron", "śmietana"]
    }
    "#;

    let _m = server
        .mock("GET", "/przepis")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_html(json_ld))
        .create_async()
        .await;

    let url = format!("{}/przepis", server.url());
    let result = import_recipe(&url).await.unwrap();

    assert_eq!(result.title, "Pomidorowa");
    assert_eq!(result.ingredients, vec!["pomidory", "makaron", "śmietana"]);
}

#[tokio::test]
async fn test_import_falls_back_to_dom_scan() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"
        <html><body>
            <h1>Mizeria</h1>
            <h3>Składniki</h3>
            <ul><li>ogórki</li><li>śmietana</li></ul>
        </body></html>
    "#;

    let _m = server
        .mock("GET", "/mizeria")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await;

    let url = format!("{}/mizeria", server.url());
    let result = import_recipe(&url).await.unwrap();

    assert_eq!(result.title, "Mizeria");
    assert_eq!(result.ingredients, vec!["ogórki", "śmietana"]);
}

#[tokio::test]
async fn test_page_without_recipe_is_an_empty_success() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/blog")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body><p>No recipe here.</p></body></html>")
        .create_async()
        .await;

    let url = format!("{}/blog", server.url());
    let result = import_recipe(&url).await.unwrap();

    assert!(result.title.is_empty());
    assert!(result.ingredients.is_empty());
}

#[tokio::test]
async fn test_upstream_error_status_is_propagated() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/gone")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let url = format!("{}/gone", server.url());
    let err = import_recipe(&url).await.unwrap_err();

    match err {
        ExtractError::UpstreamStatus { status, .. } => assert_eq!(status, 502),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_missing_url_is_a_client_error() {
    let err = import_recipe("  ").await.unwrap_err();
    assert!(matches!(err, ExtractError::MissingInput(_)));
    assert_eq!(err.to_string(), "Missing required input: url");
}

#[tokio::test]
async fn test_serialized_shape() {
    // the response body the service contract promises: title plus an
    // ordered ingredient list
    let mut server = mockito::Server::new_async().await;
    let json_ld =
        r#"{"@type": "Recipe", "name": "Kluski", "recipeIngredient": ["mąka", "woda"]}"#;

    let _m = server
        .mock("GET", "/kluski")
        .with_status(200)
        .with_body(create_recipe_html(json_ld))
        .create_async()
        .await;

    let url = format!("{}/kluski", server.url());
    let result = import_recipe(&url).await.unwrap();

    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(
        serialized,
        serde_json::json!({"title": "Kluski", "ingredients": ["mąka", "woda"]})
    );
}
