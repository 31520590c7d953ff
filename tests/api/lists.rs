use crate::helpers::TestApp;
use serde_json::{json, Value};
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn lists_are_returned_for_configuration() {
    // given
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lists": [
                { "id": "L1", "name": "Newsletter" },
                { "id": "L2", "name": "Customers" }
            ],
            "total_items": 2
        })))
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    // when
    let response = app.get_lists().await;

    // then
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "lists": [
                { "id": "L1", "name": "Newsletter" },
                { "id": "L2", "name": "Customers" }
            ],
            "configurable": true
        })
    );
}

#[tokio::test]
async fn failed_enumeration_leaves_the_field_unconfigurable() {
    // given
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    // when
    let response = app.get_lists().await;

    // then
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "lists": [], "configurable": false }));
}
