use crate::helpers::TestApp;

#[tokio::test]
async fn health_check_works() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_health_check().await;

    // then
    assert!(response.status().is_success());
    assert_eq!(response.content_length(), Some(0));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_health_check().await;

    // then
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header");
    assert_eq!(request_id.len(), 36);
}
