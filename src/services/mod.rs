//! Business logic services

pub mod authors;
pub mod books;
pub mod identity;

use crate::{config::Auth0Config, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub authors: authors::AuthorsService,
    pub identity: identity::IdentityService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth0_config: Auth0Config) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            identity: identity::IdentityService::new(auth0_config),
            repository,
        }
    }

    /// Check that the database is reachable
    pub async fn ping_database(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
