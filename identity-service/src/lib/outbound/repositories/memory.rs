use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserDirectory;
use crate::user::errors::DirectoryError;

/// Process-local user directory.
///
/// Uniqueness is checked and the user inserted under a single write lock,
/// which gives the same guarantee as a unique index.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<EmailAddress, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;

        match users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(DirectoryError::DuplicateIdentity(user.email.to_string())),
            Entry::Vacant(slot) => {
                let created = User {
                    id: UserId::new(),
                    name: user.name,
                    email: user.email,
                    password_hash: user.password_hash,
                    role: user.role,
                    created_at: Utc::now(),
                };
                Ok(slot.insert(created).clone())
            }
        }
    }
}
