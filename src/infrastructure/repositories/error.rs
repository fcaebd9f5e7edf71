// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const CNT_DRAMA_SLUG: &str = "dramas_pkey";
const CNT_POST_DRAMA: &str = "posts_drama_slug_fkey";
const CNT_MEMBERSHIP_DRAMA: &str = "drama_memberships_drama_slug_fkey";
const CNT_MEMBERSHIP_COLOR_CHECK: &str = "drama_memberships_color_len_chk";

/// Classifies by violation kind; the constraint name only picks the message.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let sqlx::Error::Database(db_err) = &err else {
        return DomainError::Persistence(err.to_string());
    };
    let constraint = db_err.constraint();

    match db_err.kind() {
        ErrorKind::UniqueViolation => DomainError::Conflict(match constraint {
            Some(CNT_DRAMA_SLUG) => "drama slug already exists".into(),
            Some(other) => format!("duplicate value violates {other}"),
            None => "unique constraint violated".into(),
        }),
        ErrorKind::ForeignKeyViolation => DomainError::NotFound(match constraint {
            Some(CNT_POST_DRAMA | CNT_MEMBERSHIP_DRAMA) => "drama not found".into(),
            Some(other) => format!("referenced record not found ({other})"),
            None => "referenced record not found".into(),
        }),
        ErrorKind::CheckViolation => DomainError::Validation(match constraint {
            Some(CNT_MEMBERSHIP_COLOR_CHECK) => "color must be 1 to 32 characters".into(),
            Some(other) => format!("check constraint violated: {other}"),
            None => "check constraint violated".into(),
        }),
        _ => DomainError::Persistence(db_err.message().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::DatabaseError;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct FakeDbError {
        code: &'static str,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message())
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database failure"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                "23514" => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn db_error(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError {
            code,
            constraint,
        }))
    }

    #[test]
    fn unlisted_unique_constraint_is_a_conflict() {
        let err = map_sqlx(db_error("23505", Some("posts_pkey")));
        assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("posts_pkey")));
    }

    #[test]
    fn named_constraints_keep_their_messages() {
        assert!(matches!(
            map_sqlx(db_error("23505", Some(CNT_DRAMA_SLUG))),
            DomainError::Conflict(msg) if msg == "drama slug already exists"
        ));
        assert!(matches!(
            map_sqlx(db_error("23503", Some(CNT_POST_DRAMA))),
            DomainError::NotFound(msg) if msg == "drama not found"
        ));
        assert!(matches!(
            map_sqlx(db_error("23514", Some(CNT_MEMBERSHIP_COLOR_CHECK))),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn other_check_constraint_is_validation() {
        let err = map_sqlx(db_error("23514", Some("posts_voters_is_array_chk")));
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_constraint_failures_are_persistence() {
        assert!(matches!(
            map_sqlx(db_error("40P01", None)),
            DomainError::Persistence(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }
}
