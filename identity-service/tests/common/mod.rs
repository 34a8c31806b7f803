use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenIssuer;
use identity_service::domain::user::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserDirectory;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub directory: Arc<InMemoryUserDirectory>,
    pub api_client: reqwest::Client,
    pub token_issuer: Arc<TokenIssuer>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory = Arc::new(InMemoryUserDirectory::new());

        // Cheap Argon2 cost keeps the suite fast.
        let password_hasher =
            Arc::new(PasswordHasher::with_params(1024, 1, 1).expect("Invalid hasher params"));
        let token_issuer = Arc::new(
            TokenIssuer::new(JWT_SECRET, chrono::Duration::minutes(60))
                .expect("Failed to create token issuer"),
        );

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&directory),
            password_hasher,
            Arc::clone(&token_issuer),
        ));

        let router = create_router(auth_service, Arc::clone(&token_issuer));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            directory,
            api_client: reqwest::Client::new(),
            token_issuer,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub async fn register(&self, body: serde_json::Value) -> reqwest::Response {
        self.post("/auth/register")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, body: serde_json::Value) -> reqwest::Response {
        self.post("/auth/login")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
