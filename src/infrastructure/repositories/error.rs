use crate::domain::errors::DomainError;

const UNDEFINED_TABLE: &str = "42P01";
const UNDEFINED_COLUMN: &str = "42703";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    UNDEFINED_TABLE => {
                        return DomainError::NotFound(format!(
                            "identifier table not found: {}",
                            db_err.message()
                        ));
                    }
                    UNDEFINED_COLUMN => {
                        return DomainError::NotFound(format!(
                            "identifier column not found: {}",
                            db_err.message()
                        ));
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
