use crate::utils::error::{Result, StatsError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(StatsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| StatsError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(StatsError::ConfigValidationError {
            field: field_name.to_string(),
            message: "List cannot be empty".to_string(),
        });
    }
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("headhunter.endpoint", "https://api.hh.ru/vacancies").is_ok());
        assert!(validate_url("headhunter.endpoint", "http://127.0.0.1:8080/vacancies").is_ok());
        assert!(validate_url("headhunter.endpoint", "").is_err());
        assert!(validate_url("headhunter.endpoint", "api.hh.ru").is_err());
        assert!(validate_url("headhunter.endpoint", "ftp://api.hh.ru").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let token: Option<String> = None;
        let err = validate_required_field("sj_token", &token).unwrap_err();
        assert!(matches!(err, StatsError::MissingConfigError { ref field } if field == "sj_token"));

        let token = Some("v3.r.123".to_string());
        assert_eq!(validate_required_field("sj_token", &token).unwrap(), "v3.r.123");
    }

    #[test]
    fn test_validate_non_empty_list() {
        let languages = vec!["Python".to_string(), "Go".to_string()];
        assert!(validate_non_empty_list("languages", &languages).is_ok());
        assert!(validate_non_empty_list("languages", &[]).is_err());

        let blank = vec!["Python".to_string(), "  ".to_string()];
        assert!(validate_non_empty_list("languages", &blank).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("per_page", 100u32, 1, 100).is_ok());
        assert!(validate_range("per_page", 0u32, 1, 100).is_err());
        assert!(validate_range("per_page", 101u32, 1, 100).is_err());
    }
}
