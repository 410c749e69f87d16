// src/infrastructure/repositories/postgres_identifier.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::{TakenIdentifierLookup, TargetField};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::collections::HashSet;

static SQL_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("sql identifier regex must compile")
});

/// Checks candidates against one column of a Postgres table with a single
/// `IN (...)` query. Candidate values are always bound, never interpolated.
#[derive(Clone)]
pub struct PostgresTakenIdentifierLookup {
    pool: PgPool,
    table: String,
}

impl PostgresTakenIdentifierLookup {
    /// `table` may be schema-qualified, e.g. `cms.pages`.
    pub fn new(pool: PgPool, table: &str) -> DomainResult<Self> {
        let table = quote_qualified(table)?;
        Ok(Self { pool, table })
    }
}

#[async_trait]
impl TakenIdentifierLookup for PostgresTakenIdentifierLookup {
    async fn find_taken(
        &self,
        candidates: &[String],
        field: &TargetField,
    ) -> DomainResult<HashSet<String>> {
        if candidates.is_empty() {
            return Ok(HashSet::new());
        }
        let column = quote_identifier(field.as_str())?;

        let mut builder = taken_query(&self.table, &column, candidates);
        let taken: Vec<String> = builder
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(taken.into_iter().collect())
    }
}

/// `SELECT col FROM table WHERE col IN ($1, ..., $n)` with one bind per candidate.
/// `table` and `column` must already be quoted.
fn taken_query<'a>(
    table: &str,
    column: &str,
    candidates: &'a [String],
) -> QueryBuilder<'a, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
    builder
        .push(column)
        .push(" FROM ")
        .push(table)
        .push(" WHERE ")
        .push(column)
        .push(" IN (");
    let mut separated = builder.separated(", ");
    for candidate in candidates {
        separated.push_bind(candidate.as_str());
    }
    separated.push_unseparated(")");
    builder
}

fn quote_identifier(name: &str) -> DomainResult<String> {
    if !SQL_IDENTIFIER.is_match(name) {
        return Err(DomainError::Validation(format!(
            "unsupported sql identifier: {name:?}"
        )));
    }
    Ok(format!("\"{name}\""))
}

fn quote_qualified(name: &str) -> DomainResult<String> {
    let parts = name
        .split('.')
        .map(quote_identifier)
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(parts.join("."))
}
