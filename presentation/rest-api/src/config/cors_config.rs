use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:8080";

/// Initialize CORS middleware for browser clients of the catalog
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5173,http://localhost:8080")
///
/// Only the methods the catalog routes use are allowed, and there are no
/// credentials to forward.
pub fn init_cors() -> Cors {
    let allowed_origins =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

fn parse_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_origins() {
        let origins = parse_origins(" http://localhost:5173 , https://shop.example.com,");
        assert_eq!(
            origins,
            vec!["http://localhost:5173", "https://shop.example.com"]
        );
    }
}
