use crate::utils::error::{Result, ToolboxError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ToolboxError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_absent_field<T>(field_name: &str, value: &Option<T>, reason: &str) -> Result<()> {
    if value.is_some() {
        return Err(ToolboxError::ConfigValidationError {
            field: field_name.to_string(),
            message: reason.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ToolboxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        let present = Some(5);
        assert_eq!(*validate_required_field("time.instant", &present).unwrap(), 5);

        let missing: Option<u32> = None;
        let err = validate_required_field("time.instant", &missing).unwrap_err();
        assert!(matches!(err, ToolboxError::MissingConfigError { ref field } if field == "time.instant"));
    }

    #[test]
    fn test_validate_absent_field() {
        let none: Option<String> = None;
        assert!(validate_absent_field("time.instant", &none, "unused").is_ok());

        let some = Some("x".to_string());
        assert!(validate_absent_field("time.instant", &some, "only for fixed mode").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("identifiers.sequence", "abc").is_ok());
        assert!(validate_non_empty_string("identifiers.sequence", "").is_err());
        assert!(validate_non_empty_string("identifiers.sequence", "   ").is_err());
    }
}
