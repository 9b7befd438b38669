#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use bookrec_client::models::Book;
use bookrec_client::{ApiClient, Browser, MemoryStorage, Page, Region, Ui};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::json;

const SECRET: &[u8] = b"test-secret";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

pub fn issue_token(user: &str, role: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

/// Everything the mock backend saw and holds.
#[derive(Default)]
pub struct BackendState {
    pub books: Mutex<Vec<Book>>,
    pub requests: Mutex<Vec<String>>,
}

impl BackendState {
    fn seeded() -> Self {
        let books = vec![
            book(1, "Dracula", "Bram Stoker", "Horror", 4.5),
            book(2, "Carrie", "Stephen King", "Horror", 4.0),
            book(3, "The Hobbit", "J.R.R. Tolkien", "Fantasy", 4.8),
            book(4, "Emma", "Jane Austen", "Romance", 3.9),
            book(5, "<b>Loud</b>", "Anon", "Poetry", 2.0),
        ];
        BackendState {
            books: Mutex::new(books),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn hits(&self, route: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|r| r.as_str() == route).count()
    }

    fn record(&self, route: &str) {
        self.requests.lock().unwrap().push(route.to_string());
    }
}

fn book(id: i64, title: &str, author: &str, genre: &str, rating: f64) -> Book {
    Book {
        id: Some(id),
        title: title.into(),
        author: author.into(),
        main_genre: genre.into(),
        rating,
    }
}

fn claims_of(req: &HttpRequest) -> Option<Claims> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    decode::<Claims>(token, &DecodingKey::from_secret(SECRET), &Validation::default())
        .ok()
        .map(|data| data.claims)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "error": "Token inválido" }))
}

#[derive(Deserialize)]
struct LoginBody {
    usuario_id: String,
    senha: String,
}

async fn login(body: web::Json<LoginBody>, state: web::Data<BackendState>) -> impl Responder {
    state.record("login");
    match (body.usuario_id.as_str(), body.senha.as_str()) {
        ("admin", "senha123") => HttpResponse::Ok().json(json!({ "token": issue_token("admin", "admin") })),
        ("user1", "senha123") => HttpResponse::Ok().json(json!({ "token": issue_token("user1", "user") })),
        // Answers without an error text.
        ("mute", _) => HttpResponse::Unauthorized().json(json!({})),
        // Issues something that is not a JWT.
        ("broken", _) => HttpResponse::Ok().json(json!({ "token": "not-a-jwt" })),
        // Uses a number as its error text.
        ("numeric", _) => HttpResponse::Unauthorized().json(json!({ "error": 403 })),
        // Answers a success without a token.
        ("empty", _) => HttpResponse::Ok().json(json!({})),
        _ => HttpResponse::Unauthorized().json(json!({ "error": "Credenciais inválidas" })),
    }
}

async fn get_book(req: HttpRequest, id: web::Path<String>, state: web::Data<BackendState>) -> impl Responder {
    state.record("get_book");
    if claims_of(&req).is_none() {
        return unauthorized();
    }
    let Ok(id) = id.parse::<i64>() else {
        return HttpResponse::BadRequest().json(json!({ "error": "ID inválido" }));
    };
    let books = state.books.lock().unwrap();
    match books.iter().find(|b| b.id == Some(id)) {
        Some(book) => HttpResponse::Ok().json(book),
        None => HttpResponse::NotFound().json(json!({ "error": "Livro não encontrado" })),
    }
}

#[derive(Deserialize)]
struct NewBookBody {
    title: String,
    author: String,
    main_genre: String,
    rating: f64,
}

async fn add_book(req: HttpRequest, body: web::Json<NewBookBody>, state: web::Data<BackendState>) -> impl Responder {
    state.record("add_book");
    match claims_of(&req) {
        Some(claims) if claims.role == "admin" => {}
        Some(_) => return HttpResponse::Forbidden().json(json!({ "error": "Acesso negado" })),
        None => return unauthorized(),
    }
    let body = body.into_inner();
    let mut books = state.books.lock().unwrap();
    let id = books.iter().filter_map(|b| b.id).max().unwrap_or(0) + 1;
    let stored = book(id, &body.title, &body.author, &body.main_genre, body.rating);
    books.push(stored.clone());
    HttpResponse::Created().json(stored)
}

async fn delete_book(req: HttpRequest, id: web::Path<String>, state: web::Data<BackendState>) -> impl Responder {
    state.record("delete_book");
    match claims_of(&req) {
        Some(claims) if claims.role == "admin" => {}
        Some(_) => return HttpResponse::Forbidden().json(json!({ "error": "Acesso negado" })),
        None => return unauthorized(),
    }
    let id = id.into_inner();
    let mut books = state.books.lock().unwrap();
    let before = books.len();
    books.retain(|b| b.id.map(|i| i.to_string()) != Some(id.clone()));
    if books.len() < before {
        HttpResponse::Ok().json(json!({ "message": "Livro removido com sucesso" }))
    } else {
        HttpResponse::NotFound().json(json!({ "error": "Livro não encontrado" }))
    }
}

#[derive(Deserialize)]
struct RecommendBody {
    generos: Vec<String>,
}

async fn recommend(req: HttpRequest, body: web::Json<RecommendBody>, state: web::Data<BackendState>) -> impl Responder {
    state.record("recommend");
    if claims_of(&req).is_none() {
        return unauthorized();
    }
    if body.generos.iter().any(|g| g == "Crash") {
        return HttpResponse::InternalServerError().finish();
    }
    if body.generos.iter().any(|g| g == "Sparse") {
        return HttpResponse::Ok().json(json!([
            { "title": "Emma", "author": "Jane Austen", "rating": null },
            { "author": "Anon" }
        ]));
    }
    let books = state.books.lock().unwrap();
    let mut picked: Vec<&Book> = books
        .iter()
        .filter(|b| body.generos.contains(&b.main_genre))
        .collect();
    picked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    let reply: Vec<_> = picked
        .iter()
        .map(|b| json!({ "title": b.title, "author": b.author, "rating": b.rating }))
        .collect();
    HttpResponse::Ok().json(reply)
}

pub struct MockBackend {
    pub url: Url,
    pub state: web::Data<BackendState>,
}

impl MockBackend {
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.url.clone()).unwrap()
    }

    pub fn browser(&self) -> Browser<MemoryStorage, RecordingUi> {
        Browser::new(self.api(), MemoryStorage::new(), RecordingUi::default())
    }
}

pub async fn spawn_backend() -> MockBackend {
    let state = web::Data::new(BackendState::seeded());
    let data = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/login", web::post().to(login))
            .route("/api/livros", web::post().to(add_book))
            .route("/api/livros/{id}", web::get().to(get_book))
            .route("/api/livros/{id}", web::delete().to(delete_book))
            .route("/api/recommend", web::post().to(recommend))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    MockBackend {
        url: Url::parse(&format!("http://{addr}")).unwrap(),
        state,
    }
}

/// A client pointed at a port nobody listens on.
pub fn unreachable_browser() -> Browser<MemoryStorage, RecordingUi> {
    let api = ApiClient::new(Url::parse("http://127.0.0.1:1").unwrap()).unwrap();
    Browser::new(api, MemoryStorage::new(), RecordingUi::default())
}

/// Records what the handlers show instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub alerts: Vec<String>,
    pub regions: HashMap<Region, String>,
    pub navigations: Vec<Page>,
}

impl RecordingUi {
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }
}

impl Ui for RecordingUi {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.regions.insert(region, text.to_string());
    }

    fn set_html(&mut self, region: Region, html: &str) {
        self.regions.insert(region, html.to_string());
    }

    fn navigate(&mut self, page: Page) {
        self.navigations.push(page);
    }
}
