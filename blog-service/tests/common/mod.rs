use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenConfig;
use auth::TokenService;
use blog_service::domain::auth::models::CredentialRecord;
use blog_service::domain::auth::ports::CredentialStore;
use blog_service::domain::auth::service::AuthService;
use blog_service::domain::errors::StoreError;
use blog_service::domain::post::errors::PostError;
use blog_service::domain::post::models::NewPost;
use blog_service::domain::post::models::Post;
use blog_service::domain::post::models::PostId;
use blog_service::domain::post::ports::PostRepository;
use blog_service::domain::post::service::PostService;
use blog_service::domain::user::errors::UserError;
use blog_service::domain::user::models::NewUser;
use blog_service::domain::user::models::User;
use blog_service::domain::user::models::UserId;
use blog_service::domain::user::ports::UserRepository;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub tokens: TokenService,
    pub api_client: reqwest::Client,
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

        let store = Arc::new(InMemoryStore::default());
        let token_service = Arc::new(TokenService::new(test_token_config()));

        let state = AppState {
            user_service: Arc::new(UserService::new(Arc::clone(&store))),
            post_service: Arc::new(PostService::new(Arc::clone(&store))),
            auth_service: Arc::new(AuthService::new(Arc::clone(&store), token_service)),
        };

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            tokens: TokenService::new(test_token_config()),
            api_client: reqwest::Client::new(),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register an account and return the created user's id.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> i64 {
        let response = self
            .post("/api/register")
            .json(&json!({
                "fullName": "Test User",
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), 201, "registration of {} failed", username);
        let body: Value = response.json().await.unwrap();
        body["data"]["id"].as_i64().unwrap()
    }

    /// Log in and return the session token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), 200, "login of {} failed", username);
        let body: Value = response.json().await.unwrap();
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Register, log in, and return `(user_id, token)`.
    pub async fn signed_in(&self, username: &str) -> (i64, String) {
        let id = self
            .register(username, &format!("{}@example.com", username), "password123")
            .await;
        let token = self.login(username, "password123").await;
        (id, token)
    }
}

fn test_token_config() -> TokenConfig {
    TokenConfig {
        secret: TEST_SECRET.to_string(),
        expiration_hours: 24,
    }
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    posts: BTreeMap<i64, Post>,
    next_user_id: i64,
    next_post_id: i64,
}

/// Store double covering every persistence port, with the same uniqueness
/// rules as the users table.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn password_hash_of(&self, username: &str) -> Option<String> {
        let tables = self.tables.lock().unwrap();
        tables
            .users
            .values()
            .find(|user| user.username.as_str() == username)
            .map(|user| user.password_hash.clone())
    }
}

fn check_unique(tables: &Tables, id: Option<i64>, username: &str, email: &str) -> Result<(), UserError> {
    let others = tables.users.values().filter(|user| Some(user.id.0) != id);
    for user in others {
        if user.username.as_str() == username {
            return Err(UserError::username_taken());
        }
        if user.email.as_str() == email {
            return Err(UserError::email_taken());
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut tables = self.tables.lock().unwrap();
        check_unique(&tables, None, user.username.as_str(), user.email.as_str())?;

        tables.next_user_id += 1;
        let created = User {
            id: UserId(tables.next_user_id),
            full_name: user.full_name,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            bio: user.bio,
            joined_at: user.joined_at,
        };
        tables.users.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.tables.lock().unwrap().users.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .values()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.tables.lock().unwrap().users.values().cloned().collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.users.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        check_unique(&tables, Some(user.id.0), user.username.as_str(), user.email.as_str())?;

        tables.users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut tables = self.tables.lock().unwrap();
        tables
            .users
            .remove(&id.0)
            .ok_or(UserError::NotFound(id.to_string()))?;
        tables.posts.retain(|_, post| post.author_id != *id);
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for InMemoryStore {
    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .values()
            .find(|user| user.username.as_str() == username)
            .map(|user| CredentialRecord {
                id: user.id,
                username: user.username.as_str().to_string(),
                email: user.email.as_str().to_string(),
                password_hash: user.password_hash.clone(),
                full_name: user.full_name.clone(),
                bio: user.bio.clone(),
                joined_at: user.joined_at,
            }))
    }

    async fn is_username_taken(&self, username: &str) -> Result<bool, StoreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.values().any(|user| user.username.as_str() == username))
    }

    async fn is_email_taken(&self, email: &str) -> Result<bool, StoreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.values().any(|user| user.email.as_str() == email))
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_post_id += 1;
        let created = Post {
            id: PostId(tables.next_post_id),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        tables.posts.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        Ok(self.tables.lock().unwrap().posts.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.tables.lock().unwrap().posts.values().rev().cloned().collect())
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .posts
            .values()
            .rev()
            .filter(|post| post.author_id == *author_id)
            .cloned()
            .collect())
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let mut tables = self.tables.lock().unwrap();
        match tables.posts.get_mut(&post.id.0) {
            Some(stored) => {
                *stored = post.clone();
                Ok(post)
            }
            None => Err(PostError::NotFound(post.id.to_string())),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        self.tables
            .lock()
            .unwrap()
            .posts
            .remove(&id.0)
            .map(|_| ())
            .ok_or(PostError::NotFound(id.to_string()))
    }
}
