//! Result type alias for Lotpack

use super::errors::LotpackError;

/// Result type alias for Lotpack operations
///
/// # Examples
///
/// ```
/// use lotpack::domain::result::Result;
/// use lotpack::domain::errors::LotpackError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LotpackError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LotpackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(LotpackError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
