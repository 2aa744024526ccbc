use serde::Deserialize;
use thiserror::Error;

/// Base for TMDB poster images at the width the list uses.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w185";

/// Shown when a movie has no poster path.
pub const POSTER_PLACEHOLDER_URL: &str = "https://fakeimg.pl/300x450?text=No+poster";

/// One movie from the server's catalog. Only `title`, `overview` and
/// `poster_path` are rendered in the list; the rest feeds the detail view.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Movie {
    /// Full poster image URL. The server stores `""` for movies without a
    /// poster, so both null and empty fall through to the placeholder.
    pub fn poster_url(&self) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{POSTER_BASE_URL}{path}"),
            _ => POSTER_PLACEHOLDER_URL.to_string(),
        }
    }
}

/// One uploaded file belonging to the authenticated user. `upload_date` is
/// pre-formatted by the server and rendered verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct UserFile {
    pub filename: String,
    pub upload_date: String,
    #[serde(default)]
    pub id: Option<i64>,
}

impl UserFile {
    /// The exact line the files pane shows for this entry.
    pub fn display_line(&self) -> String {
        format!("{} - Uploaded on {}", self.filename, self.upload_date)
    }
}

#[derive(Debug, Deserialize)]
struct MoviesResponse {
    movies: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
struct FilesResponse {
    files: Vec<UserFile>,
}

/// Errors from a fetch pass. There is no retry layer; callers log the error
/// and keep whatever the pane held before the call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    UnexpectedStatus(u16),
}

impl ApiError {
    /// Short message for the status line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http(e) if e.is_connect() => "Cannot reach server".to_string(),
            ApiError::Http(e) if e.is_decode() => "Malformed response from server".to_string(),
            ApiError::Http(_) => "Network error".to_string(),
            ApiError::UnexpectedStatus(status) => format!("Server error (HTTP {status})"),
        }
    }
}

/// HTTP client for the movie/upload server.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /movies` — the public catalog, no auth.
    pub async fn fetch_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let response = self
            .http
            .get(format!("{}/movies", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status.as_u16()));
        }

        let body: MoviesResponse = response.json().await?;
        Ok(body.movies)
    }

    /// `GET /api/users/me/files` — the caller's uploads. The token is passed
    /// through opaquely; a missing credential still produces a request
    /// (with `Bearer null`).
    pub async fn fetch_user_files(&self, token: &str) -> Result<Vec<UserFile>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/users/me/files", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status.as_u16()));
        }

        let body: FilesResponse = response.json().await?;
        Ok(body.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_with_path() {
        let movie = Movie {
            title: "Heat".to_string(),
            overview: String::new(),
            poster_path: Some("/abc123.jpg".to_string()),
            id: None,
            release_date: None,
            vote_average: None,
        };
        assert_eq!(
            movie.poster_url(),
            "https://image.tmdb.org/t/p/w185/abc123.jpg"
        );
    }

    #[test]
    fn test_poster_url_missing_path() {
        let movie = Movie {
            title: "Obscure".to_string(),
            overview: String::new(),
            poster_path: None,
            id: None,
            release_date: None,
            vote_average: None,
        };
        assert_eq!(movie.poster_url(), POSTER_PLACEHOLDER_URL);
    }

    #[test]
    fn test_poster_url_empty_path() {
        // The server stores '' when TMDB had no poster.
        let movie = Movie {
            title: "Obscure".to_string(),
            overview: String::new(),
            poster_path: Some(String::new()),
            id: None,
            release_date: None,
            vote_average: None,
        };
        assert_eq!(movie.poster_url(), POSTER_PLACEHOLDER_URL);
    }

    #[test]
    fn test_movies_response_deserializes() {
        let body = r#"{
            "movies": [
                {"id": 1, "title": "Heat", "overview": "A heist.", "poster_path": "/h.jpg",
                 "release_date": "1995-12-15", "vote_average": 8.3},
                {"id": 2, "title": "Obscure", "overview": "", "poster_path": null}
            ],
            "total_pages": 42,
            "current_page": 1
        }"#;
        let parsed: MoviesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.movies.len(), 2);
        assert_eq!(parsed.movies[0].title, "Heat");
        assert_eq!(parsed.movies[0].overview, "A heist.");
        assert!(parsed.movies[1].poster_path.is_none());
    }

    #[test]
    fn test_movies_response_missing_field_is_error() {
        // A body without `movies` is a parse failure, not an empty list.
        let body = r#"{"message": "oops"}"#;
        assert!(serde_json::from_str::<MoviesResponse>(body).is_err());
    }

    #[test]
    fn test_files_response_deserializes_in_order() {
        let body = r#"{
            "files": [
                {"id": 7, "filename": "a.pdf", "upload_date": "Mon, 03 Mar 2025 10:00:00 GMT"},
                {"id": 3, "filename": "b.png", "upload_date": "Tue, 04 Mar 2025 11:30:00 GMT"}
            ]
        }"#;
        let parsed: FilesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.files.len(), 2);
        assert_eq!(parsed.files[0].filename, "a.pdf");
        assert_eq!(parsed.files[1].filename, "b.png");
    }

    #[test]
    fn test_file_display_line() {
        let file = UserFile {
            filename: "report.pdf".to_string(),
            upload_date: "Mon, 03 Mar 2025 10:00:00 GMT".to_string(),
            id: None,
        };
        assert_eq!(
            file.display_line(),
            "report.pdf - Uploaded on Mon, 03 Mar 2025 10:00:00 GMT"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
