//! 数据库错误映射工具
//!
//! 提供统一的 SQLx 错误到 AppError 的转换

use bank_errors::AppError;

/// 将 SQLx 错误转换为 AppError，区分不同错误类型
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
        sqlx::Error::ColumnNotFound(column) => {
            AppError::decode(format!("Column not found: {}", column))
        }
        sqlx::Error::ColumnIndexOutOfBounds { index, len } => AppError::decode(format!(
            "Column index {} out of bounds (row has {} columns)",
            index, len
        )),
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::decode(format!("Failed to decode column {}: {}", index, source))
        }
        sqlx::Error::Decode(source) => AppError::decode(source.to_string()),
        sqlx::Error::Database(db_err) => match db_err.code() {
            // PostgreSQL 数据类错误
            Some(code) => match code.as_ref() {
                "22001" => AppError::validation("String data too long"),
                "23502" => AppError::validation("Not null constraint violation"),
                "23514" => AppError::validation("Check constraint violation"),
                _ => AppError::database(format!("Database error ({}): {}", code, db_err)),
            },
            None => AppError::database(db_err.to_string()),
        },
        sqlx::Error::PoolTimedOut => AppError::database("Database connection pool timeout"),
        sqlx::Error::PoolClosed => AppError::database("Database connection pool is closed"),
        _ => AppError::database(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_column_errors_are_decode() {
        let err = map_sqlx_error(sqlx::Error::ColumnNotFound("balance".to_string()));
        assert!(matches!(err, AppError::Decode(msg) if msg.contains("balance")));

        let err = map_sqlx_error(sqlx::Error::ColumnIndexOutOfBounds { index: 6, len: 5 });
        assert!(matches!(err, AppError::Decode(_)));

        let err = map_sqlx_error(sqlx::Error::ColumnDecode {
            index: "3".to_string(),
            source: "expected INT8".into(),
        });
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_pool_errors_are_database() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            AppError::Database(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            AppError::Database(_)
        ));
    }
}
