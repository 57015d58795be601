use std::collections::HashMap;
use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use http::StatusCode;
use serde_json::{Value, json};
use tenauth_service::{
    args::{ConfigType, ServeArgs},
    config::{Configuration, SecurityConfiguration, TenantConfiguration},
    data_impl::in_memory::InMemoryDatabase,
    providers::InMemoryDependencyProvider,
    routes::root::RouterConfig,
    security::impls::JwtTokenService,
    security::TokenService,
    state::ServiceState,
};

const COMPANY_CODE: &str = "COMP123";
const COMPANY_NAME: &str = "Acme Industries";
const RETAILER_CODE: &str = "RET456";
const RETAILER_NAME: &str = "Retail World";
const JWT_SECRET: &str = "test-secret";

const USERNAME: &str = "alice123";
const EMAIL: &str = "alice@example.com";
const PASSWORD: &str = "Str0ng!pass";

fn default_config() -> Configuration {
    Configuration {
        companies: HashMap::from([(
            COMPANY_CODE.to_string(),
            TenantConfiguration {
                display_name: Some(COMPANY_NAME.to_string()),
                description: None,
            },
        )]),
        retailers: HashMap::from([(
            RETAILER_CODE.to_string(),
            TenantConfiguration {
                display_name: Some(RETAILER_NAME.to_string()),
                description: None,
            },
        )]),
        security: SecurityConfiguration {
            jwt_secret: JWT_SECRET.to_string(),
            token_validity_days: None,
            // minimum cost keeps the suite fast
            bcrypt_cost: Some(4),
        },
    }
}

fn serve_args(cfg: &Configuration) -> ServeArgs {
    let json_config = serde_json::to_string(cfg)
        .expect("should be able to serialize to json");

    let route_config = RouterConfig::new(Some("/api".to_string()), true);

    ServeArgs::new(
        "".to_string(), // test server doesn't actually listen
        Some(json_config),
        ConfigType::Inline,
        None,
        Some(route_config),
    )
}

async fn create_server(cfg: &Configuration) -> TestServer {
    let args = serve_args(cfg);
    let state = ServiceState::from_args(&args)
        .await
        .expect("must be able to construct state");

    let router =
        tenauth_service::routes::root::build_router(
            args.routes.as_ref().unwrap(),
        )
        .with_state(state);

    TestServer::new(router).expect("should be able to create test server")
}

/// Like `create_server`, but keeps a handle on the in-memory database
/// so a test can mutate the tenant directory behind the service's back.
async fn create_server_with_db(
    cfg: &Configuration,
) -> (TestServer, Arc<InMemoryDatabase>) {
    let args = serve_args(cfg);
    let db = Arc::new(cfg.to_in_memory_database());
    let state = ServiceState::new(
        Arc::new(args.clone()),
        Arc::new(InMemoryDependencyProvider::new(
            db.clone(),
            cfg.security.clone(),
        )),
    );

    let router =
        tenauth_service::routes::root::build_router(
            args.routes.as_ref().unwrap(),
        )
        .with_state(state);

    let server =
        TestServer::new(router).expect("should be able to create test server");

    (server, db)
}

async fn register(
    server: &TestServer,
    username: &str,
    email: &str,
    password: &str,
    company_code: &str,
) -> TestResponse {
    server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
            "companyCode": company_code,
        }))
        .await
}

async fn retailer_register(
    server: &TestServer,
    username: &str,
    email: &str,
    password: &str,
    retailer_code: &str,
) -> TestResponse {
    server
        .post("/api/auth/retailer_register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
            "retailerCode": retailer_code,
        }))
        .await
}

async fn login(
    server: &TestServer,
    username: &str,
    password: &str,
    company_code: &str,
) -> TestResponse {
    server
        .post("/api/auth/login")
        .json(&json!({
            "username": username,
            "password": password,
            "companyCode": company_code,
        }))
        .await
}

async fn get_profile(server: &TestServer, token: &str) -> TestResponse {
    server
        .get("/api/auth/profile")
        .add_header("Authorization", format!("Bearer {token}"))
        .await
}

async fn add_product(
    server: &TestServer,
    company_name: &str,
    product_code: &str,
) -> TestResponse {
    server
        .post("/api/products/add")
        .json(&json!({
            "companyName": company_name,
            "productCode": product_code,
        }))
        .await
}

fn message_of(response: &TestResponse) -> String {
    response.json::<Value>()["message"]
        .as_str()
        .expect("response should carry a message")
        .to_string()
}

#[tokio::test]
async fn test_welcome() {
    let server = create_server(&default_config()).await;

    let resp = server.get("/").await;

    resp.assert_status_ok();
    resp.assert_text("Welcome to the authentication API!");
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let server = create_server(&default_config()).await;

    let register_resp =
        register(&server, USERNAME, EMAIL, PASSWORD, COMPANY_CODE).await;
    register_resp.assert_status(StatusCode::CREATED);

    let login_resp = login(&server, USERNAME, PASSWORD, COMPANY_CODE).await;
    login_resp.assert_status_ok();

    let token = login_resp.json::<Value>()["token"]
        .as_str()
        .expect("login should return a token")
        .to_string();

    let claims = JwtTokenService::from_secret(JWT_SECRET, 30)
        .verify(&token)
        .expect("issued token should verify");
    assert_eq!(claims.username, USERNAME);
    assert_eq!(claims.identity_id, 1);
}

#[tokio::test]
async fn test_register_rejects_bad_username_format() {
    let server = create_server(&default_config()).await;

    // no digit
    let resp =
        register(&server, "alicealice", EMAIL, PASSWORD, COMPANY_CODE).await;

    resp.assert_status_bad_request();
    assert!(message_of(&resp).starts_with("Username must contain"));
}

#[tokio::test]
async fn test_register_rejects_bad_password_format() {
    let server = create_server(&default_config()).await;

    // no symbol from the fixed set
    let resp =
        register(&server, USERNAME, EMAIL, "Weakpass1", COMPANY_CODE).await;

    resp.assert_status_bad_request();
    assert!(message_of(&resp).starts_with("Password must contain"));
}

#[tokio::test]
async fn test_register_duplicate_username_and_email() {
    let server = create_server(&default_config()).await;

    register(&server, USERNAME, EMAIL, PASSWORD, COMPANY_CODE)
        .await
        .assert_status(StatusCode::CREATED);

    // same username, different email: username wins the report
    let dup_username = register(
        &server,
        USERNAME,
        "other@example.com",
        PASSWORD,
        COMPANY_CODE,
    )
    .await;
    dup_username.assert_status_bad_request();
    assert_eq!(message_of(&dup_username), "Username is already taken");

    // different username, same email
    let dup_email =
        register(&server, "bobby42", EMAIL, PASSWORD, COMPANY_CODE).await;
    dup_email.assert_status_bad_request();
    assert_eq!(message_of(&dup_email), "Email is already taken");
}

#[tokio::test]
async fn test_register_rejects_unknown_company_code() {
    let server = create_server(&default_config()).await;

    let resp = register(&server, USERNAME, EMAIL, PASSWORD, "NOPE").await;

    resp.assert_status_bad_request();
    assert_eq!(message_of(&resp), "Invalid company code");
}

#[tokio::test]
async fn test_register_rejects_retailer_code_on_company_endpoint() {
    let server = create_server(&default_config()).await;

    let resp =
        register(&server, USERNAME, EMAIL, PASSWORD, RETAILER_CODE).await;

    resp.assert_status_bad_request();
    assert_eq!(message_of(&resp), "Invalid company code");
}

#[tokio::test]
async fn test_retailer_register_and_login() {
    let server = create_server(&default_config()).await;

    let resp =
        retailer_register(&server, USERNAME, EMAIL, PASSWORD, RETAILER_CODE)
            .await;
    resp.assert_status(StatusCode::CREATED);

    // login checks the stored affiliation code, whichever kind it is
    login(&server, USERNAME, PASSWORD, RETAILER_CODE)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_login_failures_share_a_generic_message() {
    let server = create_server(&default_config()).await;

    register(&server, USERNAME, EMAIL, PASSWORD, COMPANY_CODE)
        .await
        .assert_status(StatusCode::CREATED);

    let unknown_user =
        login(&server, "nosuch1", PASSWORD, COMPANY_CODE).await;
    let wrong_password =
        login(&server, USERNAME, "Wr0ng!pass", COMPANY_CODE).await;
    let wrong_code = login(&server, USERNAME, PASSWORD, RETAILER_CODE).await;

    for resp in [&unknown_user, &wrong_password, &wrong_code] {
        resp.assert_status_bad_request();
        assert_eq!(
            message_of(resp),
            "Username/password/companycode combination is wrong"
        );
    }
}

#[tokio::test]
async fn test_profile_joins_tenant_name() {
    let server = create_server(&default_config()).await;

    register(&server, USERNAME, EMAIL, PASSWORD, COMPANY_CODE)
        .await
        .assert_status(StatusCode::CREATED);
    let login_resp = login(&server, USERNAME, PASSWORD, COMPANY_CODE).await;
    let token = login_resp.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = get_profile(&server, &token).await;

    resp.assert_status_ok();
    let profile = &resp.json::<Value>()["profile"];
    assert_eq!(profile["username"], USERNAME);
    assert_eq!(profile["email"], EMAIL);
    assert_eq!(profile["tenantCode"], COMPANY_CODE);
    assert_eq!(profile["tenantName"], COMPANY_NAME);
}

#[tokio::test]
async fn test_profile_without_token_is_unauthorized() {
    let server = create_server(&default_config()).await;

    let resp = server.get("/api/auth/profile").await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_garbage_token_is_forbidden() {
    let server = create_server(&default_config()).await;

    let resp = get_profile(&server, "not-a-token").await;

    resp.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_profile_with_expired_token_is_forbidden() {
    let server = create_server(&default_config()).await;

    register(&server, USERNAME, EMAIL, PASSWORD, COMPANY_CODE)
        .await
        .assert_status(StatusCode::CREATED);

    let token = JwtTokenService::from_secret(JWT_SECRET, 30)
        .issue_at_expiry(
            1,
            USERNAME,
            time::OffsetDateTime::now_utc() - time::Duration::hours(1),
        )
        .unwrap();

    let resp = get_profile(&server, &token).await;

    resp.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_profile_after_tenant_removed_is_not_found() {
    let cfg = default_config();
    let (server, db) = create_server_with_db(&cfg).await;

    register(&server, USERNAME, EMAIL, PASSWORD, COMPANY_CODE)
        .await
        .assert_status(StatusCode::CREATED);
    let login_resp = login(&server, USERNAME, PASSWORD, COMPANY_CODE).await;
    let token = login_resp.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    // no referential integrity: the identity keeps pointing at the code
    db.tenants
        .write()
        .retain(|tenant| tenant.code != COMPANY_CODE);

    let resp = get_profile(&server, &token).await;

    resp.assert_status_bad_request();
    assert_eq!(message_of(&resp), "Tenant not found");
}

#[tokio::test]
async fn test_add_product_provisions_and_inserts() {
    let server = create_server(&default_config()).await;

    let first = add_product(&server, COMPANY_NAME, "SKU-1").await;
    first.assert_status(StatusCode::CREATED);

    // collection already exists, adding a different code still works
    let second = add_product(&server, COMPANY_NAME, "SKU-2").await;
    second.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_add_product_rejects_duplicate_code_per_tenant() {
    let server = create_server(&default_config()).await;

    add_product(&server, COMPANY_NAME, "SKU-1")
        .await
        .assert_status(StatusCode::CREATED);

    let duplicate = add_product(&server, COMPANY_NAME, "SKU-1").await;
    duplicate.assert_status_bad_request();
    assert_eq!(
        message_of(&duplicate),
        "Product code 'SKU-1' already exists for this tenant"
    );

    // product codes are scoped per tenant collection
    add_product(&server, RETAILER_NAME, "SKU-1")
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_add_product_unknown_tenant_is_not_found() {
    let server = create_server(&default_config()).await;

    let resp = add_product(&server, "Nonexistent Corp", "SKU-1").await;

    resp.assert_status_not_found();
}

#[tokio::test]
async fn test_open_api_doc_is_served() {
    let server = create_server(&default_config()).await;

    let resp = server.get("/api/docs/json").await;

    resp.assert_status_ok();
    let doc = resp.json::<Value>();
    assert!(doc["paths"]["/api/auth/register"].is_object());
    assert!(doc["paths"]["/api/products/add"].is_object());
}
