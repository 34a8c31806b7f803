use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserDirectory;
use crate::user::errors::DirectoryError;

const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DirectoryError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        let id = r.id;
        let corrupt = move |field: &str, e: String| {
            DirectoryError::Storage(format!("Stored user {} has invalid {}: {}", id, field, e))
        };

        Ok(User {
            id: UserId(id),
            name: DisplayName::new(r.name).map_err(|e| corrupt("name", e.to_string()))?,
            email: EmailAddress::new(r.email).map_err(|e| corrupt("email", e.to_string()))?,
            password_hash: r.password_hash,
            role: r
                .role
                .parse::<Role>()
                .map_err(|e| corrupt("role", e.to_string()))?,
            created_at: r.created_at,
        })
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DirectoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Storage(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DirectoryError> {
        // The unique constraint decides races between concurrent registrations.
        let (id, created_at) = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
                {
                    return DirectoryError::DuplicateIdentity(user.email.to_string());
                }
            }
            DirectoryError::Storage(e.to_string())
        })?;

        Ok(User {
            id: UserId(id),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at,
        })
    }
}
