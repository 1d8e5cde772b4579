use url::Url;

/// Origin fragments are fetched from when `SIDEBAR_ORIGIN` is not set.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Result of fetching a sidebar fragment
#[derive(Clone)]
pub struct FetchResult {
    pub html: String,
    /// Root-relative path the fragment was requested under.
    pub path: String,
    pub status: u16,
    pub content_type: String,
}

/// Error during a fragment fetch
#[derive(Debug, Clone)]
pub struct FetchError {
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Normalize a fragment path to root-relative form.
///
/// Fragments are always fetched from the site root, regardless of the page
/// the widget is embedded on.
pub fn root_relative(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Fetch a fragment from `origin` (blocking).
///
/// The request carries `X-Requested-With: XMLHttpRequest` so the server
/// returns a partial fragment instead of a full page.
pub fn fetch_fragment(origin: &str, path: &str) -> Result<FetchResult, FetchError> {
    let path = root_relative(path);
    let full = format!("{}{}", origin.trim_end_matches('/'), path);

    let parsed = Url::parse(&full).map_err(|e| FetchError {
        message: format!("Invalid fragment URL {}: {}", full, e),
    })?;

    let client = reqwest::blocking::Client::builder()
        .user_agent("learning-sidebar/0.1")
        .timeout(std::time::Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FetchError {
            message: format!("Client error: {}", e),
        })?;

    let response = client
        .get(parsed.as_str())
        .header("X-Requested-With", "XMLHttpRequest")
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .map_err(|e| FetchError {
            message: format!("Request failed: {}", e),
        })?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        return Err(FetchError {
            message: format!("HTTP {} for {}", status, path),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    let html = response.text().map_err(|e| FetchError {
        message: format!("Failed to read body: {}", e),
    })?;

    Ok(FetchResult {
        html,
        path,
        status,
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_relative_prefixes_bare_paths() {
        assert_eq!(root_relative("learning-center/"), "/learning-center/");
        assert_eq!(
            root_relative("learning-center/topic-2"),
            "/learning-center/topic-2"
        );
    }

    #[test]
    fn root_relative_keeps_absolute_paths() {
        assert_eq!(root_relative("/learning-center/"), "/learning-center/");
    }
}
