use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{source_name} responded with HTTP {status} for {url}")]
    HttpStatus {
        source_name: String,
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl StatsError {
    fn is_config(&self) -> bool {
        matches!(
            self,
            StatsError::ConfigError { .. }
                | StatsError::MissingConfigError { .. }
                | StatsError::InvalidConfigValueError { .. }
                | StatsError::ConfigValidationError { .. }
        )
    }

    /// 程序結束碼：1 = 取得資料失敗，2 = 配置錯誤，3 = 輸出錯誤
    pub fn exit_code(&self) -> i32 {
        match self {
            StatsError::IoError(_) => 3,
            e if e.is_config() => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::ApiError(e) if e.is_timeout() => {
                "The job board did not answer in time".to_string()
            }
            StatsError::ApiError(e) if e.is_decode() => {
                "The job board returned a response that could not be read".to_string()
            }
            StatsError::ApiError(_) => "Could not reach the job board".to_string(),
            StatsError::HttpStatus {
                source_name, status, ..
            } => format!("{} rejected the search request ({})", source_name, status),
            StatsError::MissingConfigError { field } => {
                format!("Required setting '{}' is not set", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatsError::HttpStatus { status, .. }
                if *status == reqwest::StatusCode::FORBIDDEN
                    || *status == reqwest::StatusCode::UNAUTHORIZED =>
            {
                "Check the TOKEN_SJ application key"
            }
            StatsError::HttpStatus { .. } | StatsError::ApiError(_) => {
                "Check the network connection and the endpoint settings, then run again"
            }
            StatsError::MissingConfigError { .. } => {
                "Export TOKEN_SJ or pass --sj-token"
            }
            StatsError::IoError(_) => "Check that standard output is writable",
            _ => "Review the command line arguments and the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let missing = StatsError::MissingConfigError {
            field: "sj_token".to_string(),
        };
        assert_eq!(missing.exit_code(), 2);

        let http = StatsError::HttpStatus {
            source_name: "HeadHunter".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://api.hh.ru/vacancies".to_string(),
        };
        assert_eq!(http.exit_code(), 1);

        let io = StatsError::IoError(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_forbidden_points_at_token() {
        let err = StatsError::HttpStatus {
            source_name: "SuperJob".to_string(),
            status: reqwest::StatusCode::FORBIDDEN,
            url: "https://api.superjob.ru/2.0/vacancies/".to_string(),
        };
        assert!(err.recovery_suggestion().contains("TOKEN_SJ"));
        assert!(err.user_friendly_message().contains("SuperJob"));
    }
}
