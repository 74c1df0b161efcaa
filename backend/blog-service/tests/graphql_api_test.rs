//! GraphQL API tests
//!
//! Purpose: verify the full resolution path (codec -> store adapter ->
//! resolvers) by executing GraphQL documents against a built schema with an
//! in-process store.
//!
//! Run: cargo test --test graphql_api_test

use std::sync::Arc;

use async_graphql::{Request, Variables};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};
use serde_json::{json, Value};

use blog_service::error::{AppError, Result};
use blog_service::identifier;
use blog_service::models::{Comment, NewComment, Post};
use blog_service::schema::{build_schema, AppSchema};
use blog_service::store::{ContentStore, EntityCollection};

const CREATE_POST: &str = r#"
    mutation($title: String, $content: String) {
        createPost(title: $title, content: $content) {
            id
            title
            content
        }
    }
"#;

const CREATE_COMMENT: &str = r#"
    mutation($postId: String!, $content: String) {
        createComment(postId: $postId, content: $content) {
            id
            postId
            content
        }
    }
"#;

fn memory_schema() -> AppSchema {
    build_schema(Arc::new(ContentStore::in_memory()))
}

async fn execute(schema: &AppSchema, query: &str, variables: Value) -> async_graphql::Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

async fn create_post(schema: &AppSchema, title: &str, content: &str) -> String {
    let response = execute(
        schema,
        CREATE_POST,
        json!({ "title": title, "content": content }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    data["createPost"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_post_then_read_it_back() {
    let schema = memory_schema();

    let response = execute(
        &schema,
        CREATE_POST,
        json!({ "title": "T", "content": "C" }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let created = response.data.into_json().unwrap();
    let id = created["createPost"]["id"].as_str().unwrap();

    let response = execute(
        &schema,
        r#"query($id: String!) {
            post(id: $id) { id title content comments { id } }
        }"#,
        json!({ "id": id }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["post"]["id"], id);
    assert_eq!(data["post"]["title"], "T");
    assert_eq!(data["post"]["content"], "C");
    assert_eq!(data["post"]["comments"], json!([]));
}

#[tokio::test]
async fn absent_post_resolves_to_null_without_error() {
    let schema = memory_schema();

    let response = execute(
        &schema,
        r#"query($id: String!) { post(id: $id) { id } }"#,
        json!({ "id": identifier::encode(&ObjectId::new()) }),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["post"], Value::Null);
}

#[tokio::test]
async fn comments_stitch_to_their_post() {
    let schema = memory_schema();
    let post_id = create_post(&schema, "stitched", "body").await;

    let response = execute(
        &schema,
        CREATE_COMMENT,
        json!({ "postId": post_id, "content": "hi" }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let created = response.data.into_json().unwrap();
    assert_eq!(created["createComment"]["postId"], post_id.as_str());

    let response = execute(
        &schema,
        r#"query($id: String!) {
            post(id: $id) { comments { content postId } }
        }"#,
        json!({ "id": post_id }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["post"]["comments"],
        json!([{ "content": "hi", "postId": post_id }])
    );
}

#[tokio::test]
async fn comment_post_field_resolves_the_referenced_post() {
    let schema = memory_schema();
    let post_id = create_post(&schema, "parent", "body").await;

    let response = execute(
        &schema,
        CREATE_COMMENT,
        json!({ "postId": post_id, "content": "child" }),
    )
    .await;
    let comment_id = response.data.into_json().unwrap()["createComment"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = execute(
        &schema,
        r#"query($id: String!) {
            comment(id: $id) { content post { id title } }
        }"#,
        json!({ "id": comment_id }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["comment"]["post"]["id"], post_id.as_str());
    assert_eq!(data["comment"]["post"]["title"], "parent");
}

#[tokio::test]
async fn dangling_reference_resolves_post_to_null() {
    let schema = memory_schema();

    // A well-formed postId that matches no post is a valid state.
    let response = execute(
        &schema,
        CREATE_COMMENT,
        json!({
            "postId": identifier::encode(&ObjectId::new()),
            "content": "orphan"
        }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let comment_id = response.data.into_json().unwrap()["createComment"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = execute(
        &schema,
        r#"query($id: String!) {
            comment(id: $id) { content post { id } }
        }"#,
        json!({ "id": comment_id }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["comment"]["content"], "orphan");
    assert_eq!(data["comment"]["post"], Value::Null);
}

#[tokio::test]
async fn malformed_id_is_a_field_level_error_with_siblings_intact() {
    let schema = memory_schema();
    create_post(&schema, "survivor", "body").await;

    let response = execute(
        &schema,
        r#"{ post(id: "not-an-id") { id } posts { title } }"#,
        json!({}),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("invalid identifier"));
    let data = response.data.into_json().unwrap();
    assert_eq!(data["post"], Value::Null);
    assert_eq!(data["posts"], json!([{ "title": "survivor" }]));
}

#[tokio::test]
async fn malformed_post_id_rejects_comment_creation() {
    let schema = memory_schema();

    let response = execute(
        &schema,
        CREATE_COMMENT,
        json!({ "postId": "junk", "content": "x" }),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("invalid identifier"));
}

#[tokio::test]
async fn posts_listing_is_stable_without_writes() {
    let schema = memory_schema();
    for title in ["one", "two", "three"] {
        create_post(&schema, title, "").await;
    }

    let query = r#"{ posts { id title } }"#;
    let first = execute(&schema, query, json!({})).await;
    let second = execute(&schema, query, json!({})).await;

    assert!(first.errors.is_empty());
    assert_eq!(
        first.data.into_json().unwrap(),
        second.data.into_json().unwrap()
    );
}

/// Comments collection that fails every operation, standing in for an
/// unreachable store.
struct UnavailableComments;

#[async_trait]
impl EntityCollection<Comment> for UnavailableComments {
    async fn get_by_id(&self, _id: ObjectId) -> Result<Option<Comment>> {
        Err(AppError::StoreUnavailable("comments collection is down".into()))
    }

    async fn list_all(&self) -> Result<Vec<Comment>> {
        Err(AppError::StoreUnavailable("comments collection is down".into()))
    }

    async fn find_by(&self, _field: &str, _value: Bson) -> Result<Vec<Comment>> {
        Err(AppError::StoreUnavailable("comments collection is down".into()))
    }

    async fn insert_and_return(&self, _fields: NewComment) -> Result<Comment> {
        Err(AppError::StoreUnavailable("comments collection is down".into()))
    }
}

fn schema_with_unavailable_comments() -> AppSchema {
    let store = ContentStore {
        posts: Box::new(blog_service::store::memory::MemoryCollection::<Post>::new()),
        comments: Box::new(UnavailableComments),
    };
    build_schema(Arc::new(store))
}

#[tokio::test]
async fn comments_outage_degrades_to_field_level_errors() {
    let schema = schema_with_unavailable_comments();
    create_post(&schema, "a", "").await;
    create_post(&schema, "b", "").await;

    let response = execute(&schema, r#"{ posts { title comments { content } } }"#, json!({})).await;

    // One error per post's comments field; every title still resolves.
    assert_eq!(response.errors.len(), 2);
    for error in &response.errors {
        assert!(error.message.contains("store unavailable"));
    }
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["posts"],
        json!([
            { "title": "a", "comments": Value::Null },
            { "title": "b", "comments": Value::Null }
        ])
    );
}

#[tokio::test]
async fn scalar_only_queries_never_touch_the_comments_collection() {
    let schema = schema_with_unavailable_comments();
    create_post(&schema, "cheap", "").await;

    // The comments collection errors on contact, so a clean response proves
    // the derived field was never resolved.
    let response = execute(&schema, r#"{ posts { id title content } }"#, json!({})).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
}
