use crate::errors::store_error::StoreError;
use crate::models::contact::{Contact, ContactStatus, NewContact};
use sqlx::{MySql, Pool};

const SELECT_CONTACT_COLUMNS: &str =
    "SELECT id, name, email, company, phone, service, message, created_at, status FROM contacts";

/// Listing options for [`list`]. With no limit every row is returned, newest
/// first; offset only applies together with a limit.
#[derive(Debug, Default)]
pub struct ListFilter {
    pub status: Option<ContactStatus>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Inserts a normalized contact. The database assigns id, created_at and the
/// default `new` status; the assigned id is returned.
pub async fn insert(pool: &Pool<MySql>, contact: &NewContact) -> Result<u64, StoreError> {
    let result = sqlx::query(
        "INSERT INTO contacts (name, email, company, phone, service, message)
        VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.company)
    .bind(&contact.phone)
    .bind(&contact.service)
    .bind(&contact.message)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id())
}

pub async fn list(pool: &Pool<MySql>, filter: &ListFilter) -> Result<Vec<Contact>, StoreError> {
    let mut sql = String::from(SELECT_CONTACT_COLUMNS);
    if filter.status.is_some() {
        sql.push_str(" WHERE status = ?");
    }
    sql.push_str(" ORDER BY created_at DESC");
    if filter.limit.is_some() {
        sql.push_str(" LIMIT ? OFFSET ?");
    }

    let mut query = sqlx::query_as::<_, Contact>(&sql);
    if let Some(status) = filter.status {
        query = query.bind(status);
    }
    if let Some(limit) = filter.limit {
        query = query.bind(limit).bind(filter.offset.unwrap_or(0));
    }

    let contacts = query.fetch_all(pool).await?;
    Ok(contacts)
}

pub async fn count(pool: &Pool<MySql>) -> Result<i64, StoreError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

/// Updates the workflow status of one contact. The status is already parsed
/// by the caller, so only enumerated values can reach this statement.
pub async fn update_status(
    pool: &Pool<MySql>,
    id: i32,
    status: ContactStatus,
) -> Result<(), StoreError> {
    let result = sqlx::query("UPDATE contacts SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }

    Ok(())
}

pub async fn status_counts(pool: &Pool<MySql>) -> Result<Vec<(ContactStatus, i64)>, StoreError> {
    let counts = sqlx::query_as::<_, (ContactStatus, i64)>(
        "SELECT status, COUNT(*) FROM contacts GROUP BY status",
    )
    .fetch_all(pool)
    .await?;

    Ok(counts)
}

/// Trivial round-trip used by the health endpoint.
pub async fn ping(pool: &Pool<MySql>) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
