//! In-process fake of the marketplace backend.
//!
//! Credentials are real HS256 tokens so the client decodes exactly what a
//! backend would issue. Every request is recorded for assertions.

#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SECRET: &[u8] = b"test-secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const USER_EMAIL: &str = "ana@example.com";
pub const PASSWORD: &str = "secret";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct BackendState {
    requests: Mutex<Vec<Recorded>>,
}

impl BackendState {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn find(&self, method: &str, path: &str) -> Option<Recorded> {
        self.requests()
            .into_iter()
            .find(|r| r.method == method && r.path == path)
    }
}

pub struct TestBackend {
    pub base_url: String,
    pub state: web::Data<BackendState>,
    handle: ServerHandle,
}

impl TestBackend {
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Start the fake backend on an ephemeral port. Must run inside an actix system.
pub fn start() -> TestBackend {
    let state = web::Data::new(BackendState::default());
    let data = state.clone();

    let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(routes))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake backend");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    TestBackend {
        base_url: format!("http://{}/api", addr),
        state,
        handle,
    }
}

/// Issue a signed credential carrying `claims`.
pub fn issue(mut claims: Value) -> String {
    let exp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() + 3600;
    claims["exp"] = json!(exp);
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/auth/login", web::post().to(login))
            .route("/auth/logout", web::post().to(ok_empty_object))
            .route("/profile/me", web::get().to(my_profile))
            .route("/profile/me", web::put().to(ok_empty_object))
            .route("/profile/{id}", web::get().to(profile_by_id))
            .route("/services", web::get().to(list_services))
            .route("/services", web::post().to(create_service))
            .route("/services/{id}", web::get().to(get_service))
            .route("/services/{id}", web::delete().to(no_content))
            .route("/services/{id}/view", web::post().to(view_service))
            .route("/creator/stats", web::get().to(stats_unavailable))
            .route("/creator-verification", web::post().to(ok_empty_object))
            .route("/creator-verification/me", web::get().to(my_verification))
            .route("/admin/creators/verifications", web::get().to(admin_verifications))
            .route("/admin/creators/verifications/{id}/approve", web::put().to(admin_ok))
            .route("/admin/creators/verifications/{id}/reject", web::put().to(admin_ok))
            .route("/admin/services", web::get().to(admin_services))
            .route("/admin/services/{id}/status", web::patch().to(admin_ok))
            .route("/admin/services/{id}", web::delete().to(admin_ok)),
    );
}

fn record(req: &HttpRequest, state: &BackendState, body: &web::Bytes) {
    let authorization = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization,
        body: serde_json::from_slice(body).ok(),
    });
}

fn bearer_claims(req: &HttpRequest) -> Option<Value> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    decode::<Value>(token, &DecodingKey::from_secret(SECRET), &Validation::default())
        .ok()
        .map(|data| data.claims)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().body("Missing or invalid authorization header")
}

fn listings() -> Value {
    json!([
        {"id": 1, "ownerId": 1, "ownerName": "Ana", "title": "Logo design", "description": "A logo",
         "price": 49.0, "tags": "design,branding", "deliveryTime": 3, "status": "ACTIVE"},
        {"id": 2, "ownerId": 2, "ownerName": "Bo", "title": "Video edit", "description": "Cuts",
         "price": 120.0, "tags": "video", "deliveryTime": 5, "status": "PENDING_REVIEW"},
        {"id": 3, "ownerId": 1, "ownerName": "Ana", "title": "Brand kit", "description": "Kit",
         "price": 300.0, "tags": "", "deliveryTime": 10, "status": "ACTIVE"}
    ])
}

async fn login(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    let creds: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let email = creds["email"].as_str().unwrap_or_default();
    if creds["password"] != json!(PASSWORD) {
        return HttpResponse::Unauthorized().body("Invalid email or password");
    }
    let claims = match email {
        ADMIN_EMAIL => json!({"sub": "99", "role": "admin"}),
        USER_EMAIL => json!({"sub": "1", "roles": ["editor", "user"]}),
        _ => return HttpResponse::Unauthorized().body("Invalid email or password"),
    };
    HttpResponse::Ok().json(json!({"token": issue(claims)}))
}

async fn ok_empty_object(
    req: HttpRequest,
    state: web::Data<BackendState>,
    body: web::Bytes,
) -> HttpResponse {
    record(&req, &state, &body);
    HttpResponse::Ok().json(json!({}))
}

async fn no_content(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    if bearer_claims(&req).is_none() {
        return unauthorized();
    }
    HttpResponse::NoContent().finish()
}

async fn my_profile(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    match bearer_claims(&req) {
        Some(_) => HttpResponse::Ok().json(json!({
            "id": 1,
            "displayName": "Ana Lima",
            "bio": "Designer",
            "skills": "logo, branding",
            "location": "Lisbon",
            "avatarUrl": "",
            "verificationStatus": "NONE"
        })),
        None => unauthorized(),
    }
}

async fn profile_by_id(
    req: HttpRequest,
    state: web::Data<BackendState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> HttpResponse {
    record(&req, &state, &body);
    match path.into_inner() {
        1 => HttpResponse::Ok().json(json!({"id": 1, "displayName": "Ana Lima", "verificationStatus": "APPROVED"})),
        _ => HttpResponse::NotFound().body("Profile not found"),
    }
}

async fn list_services(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    HttpResponse::Ok().json(listings())
}

async fn get_service(
    req: HttpRequest,
    state: web::Data<BackendState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> HttpResponse {
    record(&req, &state, &body);
    let id = path.into_inner();
    match listings().as_array().unwrap().iter().find(|s| s["id"] == json!(id)) {
        Some(service) => HttpResponse::Ok().json(service),
        None => HttpResponse::NotFound().body("Service not found"),
    }
}

async fn create_service(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    if bearer_claims(&req).is_none() {
        return unauthorized();
    }
    HttpResponse::Created().json(json!({"id": 10}))
}

async fn view_service(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    HttpResponse::InternalServerError().body("view counter down")
}

async fn stats_unavailable(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    HttpResponse::InternalServerError().body("stats unavailable")
}

async fn my_verification(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    if bearer_claims(&req).is_none() {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({"id": 4, "status": "PENDING", "reason": "Creator verification request"}))
}

fn require_admin(req: &HttpRequest) -> Result<(), HttpResponse> {
    match bearer_claims(req) {
        None => Err(unauthorized()),
        Some(claims) if claims["role"] == json!("admin") => Ok(()),
        Some(_) => Err(HttpResponse::Forbidden().body("Forbidden")),
    }
}

async fn admin_verifications(
    req: HttpRequest,
    state: web::Data<BackendState>,
    body: web::Bytes,
) -> HttpResponse {
    record(&req, &state, &body);
    if let Err(resp) = require_admin(&req) {
        return resp;
    }
    HttpResponse::Ok().json(json!([
        {"id": 4, "status": "PENDING", "reason": "Portfolio attached", "creatorName": "Ana Lima"}
    ]))
}

async fn admin_services(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    if let Err(resp) = require_admin(&req) {
        return resp;
    }
    let status = req
        .query_string()
        .strip_prefix("status=")
        .unwrap_or_default()
        .to_string();
    let filtered: Vec<Value> = listings()
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["status"] == json!(status))
        .cloned()
        .collect();
    HttpResponse::Ok().json(filtered)
}

async fn admin_ok(req: HttpRequest, state: web::Data<BackendState>, body: web::Bytes) -> HttpResponse {
    record(&req, &state, &body);
    if let Err(resp) = require_admin(&req) {
        return resp;
    }
    HttpResponse::Ok().json(json!({}))
}
