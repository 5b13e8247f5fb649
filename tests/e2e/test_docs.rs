use crate::helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_the_openapi_document(ctx: &mut TestContext) {
    let response = ctx.client.get("/openapi.json").await.unwrap();

    response.assert_status(StatusCode::OK);
    let doc = response.body.as_ref().expect("OpenAPI document is JSON");
    assert_eq!(doc["info"]["title"], "Audio Generation API");
    assert!(doc["paths"].get("/upload-csv/").is_some());
    assert!(doc["components"]["schemas"].get("UploadResponse").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_the_swagger_ui(ctx: &mut TestContext) {
    let response = ctx.client.get("/swagger/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response
        .header("content-type")
        .is_some_and(|v| v.starts_with("text/html")));

    let page = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert!(page.contains("swagger-ui"));
}
