use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: PathBuf,
    /// Image upload settings.
    pub upload: UploadConfig,
}

/// Where uploaded item images go and which ones are accepted.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory uploaded files are written to.
    pub dir: PathBuf,
    /// Public URL prefix under which `dir` is served.
    pub url_prefix: String,
    /// Lowercase extensions an upload must carry to be stored.
    pub allowed_extensions: Vec<String>,
    /// Image URL recorded for items without a stored upload.
    pub default_image: String,
    /// Largest accepted request body, in bytes.
    pub max_bytes: usize,
}

impl UploadConfig {
    /// Public URL of a stored upload.
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/{filename}", self.url_prefix.trim_end_matches('/'))
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `5000`                         |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `STATIC_DIR`           | `static`                       |
    /// | `UPLOAD_DIR`           | `static/images`                |
    /// | `UPLOAD_URL_PREFIX`    | `/static/images`               |
    /// | `ALLOWED_EXTENSIONS`   | `png`                          |
    /// | `DEFAULT_IMAGE`        | `/static/images/question.png`  |
    /// | `MAX_UPLOAD_BYTES`     | `16777216`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));

        let upload = UploadConfig {
            dir: PathBuf::from(
                std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/images".into()),
            ),
            url_prefix: std::env::var("UPLOAD_URL_PREFIX")
                .unwrap_or_else(|_| "/static/images".into()),
            allowed_extensions: split_list(
                &std::env::var("ALLOWED_EXTENSIONS").unwrap_or_else(|_| "png".into()),
            )
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect(),
            default_image: std::env::var("DEFAULT_IMAGE")
                .unwrap_or_else(|_| "/static/images/question.png".into()),
            max_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "16777216".into())
                .parse()
                .expect("MAX_UPLOAD_BYTES must be a valid usize"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            upload,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_config(prefix: &str) -> UploadConfig {
        UploadConfig {
            dir: PathBuf::from("static/images"),
            url_prefix: prefix.to_string(),
            allowed_extensions: vec!["png".to_string()],
            default_image: "/static/images/question.png".to_string(),
            max_bytes: 1024,
        }
    }

    #[test]
    fn public_url_joins_prefix_and_name() {
        assert_eq!(
            upload_config("/static/images").public_url("a.png"),
            "/static/images/a.png"
        );
        assert_eq!(
            upload_config("/static/images/").public_url("a.png"),
            "/static/images/a.png"
        );
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(split_list(" png, ,jpg ,"), vec!["png", "jpg"]);
    }
}
