//! The transport collaborator used by executors

use crate::{Person, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Network operations the people and profile units depend on
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// List all people
    async fn fetch_people(&self) -> Result<Vec<Person>>;

    /// Submit an edited first and last name
    async fn submit_edit(&self, first_name: &str, last_name: &str) -> Result<()>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch_people(&self) -> Result<Vec<Person>> {
        (**self).fetch_people().await
    }

    async fn submit_edit(&self, first_name: &str, last_name: &str) -> Result<()> {
        (**self).submit_edit(first_name, last_name).await
    }
}
