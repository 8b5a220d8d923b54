//! Process-local implementation of the storage ports.

use std::any::Any;
use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::auth::{AuthenticatedSession, CredentialStore};
use crate::domain::foundation::{DomainError, ErrorCode, Record};
use crate::domain::records::{RetailPoint, User, UserToken, Visit, VisitItem};
use crate::domain::report::CompanyVisitSummary;
use crate::ports::{RecordStore, ReportReader, SessionStore};

type Row = Box<dyn Any + Send + Sync>;

/// Records keyed by identifier; one table per record kind.
type Table = BTreeMap<String, Row>;

/// In-memory store implementing every storage port.
pub struct InMemoryStore {
    tables: RwLock<HashMap<&'static str, Table>>,
    credentials: CredentialStore,
}

impl InMemoryStore {
    /// Creates an empty store hashing secrets with `credentials`.
    pub fn new(credentials: CredentialStore) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            credentials,
        }
    }

    /// Snapshot of every record of one kind.
    async fn records<T: Record>(&self) -> Result<Vec<T>, DomainError> {
        let tables = self.tables.read().await;
        match tables.get(T::KIND) {
            Some(table) => table.values().map(|row| read_row::<T>(row.as_ref())).collect(),
            None => Ok(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(CredentialStore::default())
    }
}

fn read_row<T: Record>(row: &(dyn Any + Send + Sync)) -> Result<T, DomainError> {
    row.downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| DomainError::internal(format!("{} table holds a foreign row", T::KIND)))
}

/// Rejects `record` if another row of its table shares one of its unique keys.
fn ensure_unique<T: Record>(table: &Table, record: &T) -> Result<(), DomainError> {
    let keys = record.unique_keys();
    if keys.is_empty() {
        return Ok(());
    }
    for (id, row) in table {
        if id == record.id() {
            continue;
        }
        let other = read_row::<T>(row.as_ref())?;
        let other_keys = other.unique_keys();
        if let Some((field, value)) = keys.iter().find(|key| other_keys.contains(key)) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("duplicate {} {}: {}", T::KIND, field, value),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryStore {
    async fn create(&self, mut record: T) -> Result<T, DomainError> {
        self.credentials.seal(&mut record).await?;

        let mut tables = self.tables.write().await;
        let table = tables.entry(T::KIND).or_default();
        if table.contains_key(record.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("duplicate {} id: {}", T::KIND, record.id()),
            ));
        }
        ensure_unique(table, &record)?;
        table.insert(record.id().to_string(), Box::new(record.clone()));
        Ok(record)
    }

    async fn update(&self, mut record: T) -> Result<T, DomainError> {
        self.credentials.seal(&mut record).await?;

        let mut tables = self.tables.write().await;
        let table = tables.entry(T::KIND).or_default();
        if !table.contains_key(record.id()) {
            return Err(DomainError::not_found(T::KIND, record.id()));
        }
        ensure_unique(table, &record)?;
        table.insert(record.id().to_string(), Box::new(record.clone()));
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<T, DomainError> {
        let tables = self.tables.read().await;
        tables
            .get(T::KIND)
            .and_then(|table| table.get(id))
            .map(|row| read_row::<T>(row.as_ref()))
            .unwrap_or_else(|| Err(DomainError::not_found(T::KIND, id)))
    }

    async fn list(&self) -> Result<Vec<T>, DomainError> {
        self.records::<T>().await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(table) = tables.get_mut(T::KIND) {
            table.remove(id);
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.records::<User>()
            .await?
            .into_iter()
            .find(|user| user.email == email)
            .ok_or_else(|| DomainError::not_found(User::KIND, email))
    }

    async fn create_token(&self, token: UserToken) -> Result<UserToken, DomainError> {
        RecordStore::<UserToken>::create(self, token).await
    }

    async fn find_token(&self, token: &str) -> Result<AuthenticatedSession, DomainError> {
        let found = self
            .records::<UserToken>()
            .await?
            .into_iter()
            .find(|candidate| candidate.token == token)
            .ok_or_else(|| DomainError::new(ErrorCode::NotFound, "token not found"))?;

        if found.is_expired_at(Utc::now()) {
            RecordStore::<UserToken>::delete_by_id(self, &found.id).await?;
            return Err(DomainError::new(ErrorCode::NotFound, "token expired"));
        }

        let user = RecordStore::<User>::find_by_id(self, &found.user_id).await?;
        Ok(AuthenticatedSession::new(user, found))
    }

    async fn delete_token(&self, token: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(table) = tables.get_mut(UserToken::KIND) {
            table.retain(|_, row| {
                !row.downcast_ref::<UserToken>()
                    .is_some_and(|candidate| candidate.token == token)
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ReportReader for InMemoryStore {
    async fn company_visit_summary(
        &self,
        company_id: &str,
    ) -> Result<CompanyVisitSummary, DomainError> {
        let points: HashSet<String> = self
            .records::<RetailPoint>()
            .await?
            .into_iter()
            .filter(|point| point.company_id == company_id)
            .map(|point| point.id)
            .collect();

        let visits: HashSet<String> = self
            .records::<Visit>()
            .await?
            .into_iter()
            .filter(|visit| points.contains(&visit.retail_point_id))
            .map(|visit| visit.id)
            .collect();

        let mut summary = CompanyVisitSummary::empty(company_id);
        summary.total_visits = visits.len() as i64;

        for item in self.records::<VisitItem>().await? {
            if visits.contains(&item.visit_id) {
                summary.total_items += i64::from(item.present_quantity);
                summary.total_amount += item.amount();
            }
        }

        Ok(summary)
    }
}
