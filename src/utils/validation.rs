use crate::utils::error::{Result, SimError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SimError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SimError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive(field_name: &str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(SimError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("file", "commands.txt").is_ok());
        assert!(validate_path("file", "").is_err());
        assert!(validate_path("file", "   ").is_err());
        assert!(validate_path("file", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("board.width", 5).is_ok());
        assert!(validate_positive("board.width", 0).is_err());
        assert!(validate_positive("board.height", -3).is_err());
    }
}
