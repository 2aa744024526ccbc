use crate::api::{ApiClient, ApiError, Movie, UserFile};
use crate::credentials;

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Movies,
    Files,
    Detail,
}

/// Main application state. The movies and files panes are independent: each
/// is fully replaced by its own successful fetch and untouched by anything
/// else.
pub struct App {
    pub client: ApiClient,
    pub token_override: Option<String>,
    pub should_quit: bool,
    pub view: View,
    pub show_help: bool,

    // Movies pane
    pub movies: Vec<Movie>,
    pub movies_selected: usize,

    // Files pane
    pub files: Vec<UserFile>,
    pub files_selected: usize,

    // Detail view state
    pub detail: Option<Movie>,
    pub detail_scroll: u16,

    // Status message
    pub status_msg: String,
}

impl App {
    pub fn new(client: ApiClient, token_override: Option<String>) -> Self {
        Self {
            client,
            token_override,
            should_quit: false,
            view: View::Movies,
            show_help: false,

            movies: Vec::new(),
            movies_selected: 0,

            files: Vec::new(),
            files_selected: 0,

            detail: None,
            detail_scroll: 0,

            status_msg: "Loading...".to_string(),
        }
    }

    /// Token for the files request, resolved at call time: the `--token`
    /// override if given, else whatever the credential store holds right now.
    fn bearer_token(&self) -> String {
        self.token_override
            .clone()
            .unwrap_or_else(credentials::bearer_token)
    }

    /// Initial data load.
    pub async fn init(&mut self) {
        self.refresh_all().await;
    }

    /// Run both fetch passes. The requests go out concurrently; each pane is
    /// repopulated on success or left as-is on failure.
    pub async fn refresh_all(&mut self) {
        let token = self.bearer_token();
        let (movies_result, files_result) = tokio::join!(
            self.client.fetch_movies(),
            self.client.fetch_user_files(&token),
        );

        let mut notes = Vec::new();

        match movies_result {
            Ok(movies) => {
                self.apply_movies(movies);
                notes.push(format!("{} movies", self.movies.len()));
            }
            Err(e) => {
                self.note_movies_failure(&e);
                notes.push(format!("movies: {}", e.user_message()));
            }
        }

        match files_result {
            Ok(files) => {
                self.apply_files(files);
                notes.push(format!("{} files", self.files.len()));
            }
            Err(e) => {
                self.note_files_failure(&e);
                notes.push(format!("files: {}", e.user_message()));
            }
        }

        self.status_msg = notes.join("   ");
    }

    /// Replace the movies pane with a fresh response. Prior entries are
    /// discarded only here, never on failure.
    pub fn apply_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.movies_selected = 0;
    }

    /// Replace the files pane with a fresh response.
    pub fn apply_files(&mut self, files: Vec<UserFile>) {
        self.files = files;
        self.files_selected = 0;
    }

    pub fn note_movies_failure(&mut self, err: &ApiError) {
        tracing::error!(error = %err, "failed to fetch movies");
    }

    pub fn note_files_failure(&mut self, err: &ApiError) {
        tracing::error!(error = %err, "failed to fetch user files");
    }

    /// Switch between the movies and files panes.
    pub fn toggle_pane(&mut self) {
        self.view = match self.view {
            View::Movies => View::Files,
            View::Files => View::Movies,
            View::Detail => View::Detail,
        };
    }

    /// Move selection down in the active pane.
    pub fn list_next(&mut self) {
        match self.view {
            View::Movies => {
                if self.movies_selected + 1 < self.movies.len() {
                    self.movies_selected += 1;
                }
            }
            View::Files => {
                if self.files_selected + 1 < self.files.len() {
                    self.files_selected += 1;
                }
            }
            View::Detail => {}
        }
    }

    /// Move selection up in the active pane.
    pub fn list_prev(&mut self) {
        match self.view {
            View::Movies => {
                self.movies_selected = self.movies_selected.saturating_sub(1);
            }
            View::Files => {
                self.files_selected = self.files_selected.saturating_sub(1);
            }
            View::Detail => {}
        }
    }

    /// Open the detail view for the currently selected movie.
    pub fn open_detail(&mut self) {
        if self.view != View::Movies {
            return;
        }
        if let Some(movie) = self.movies.get(self.movies_selected) {
            self.detail = Some(movie.clone());
            self.detail_scroll = 0;
            self.view = View::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.view = View::Movies;
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(20);
    }

    pub fn scroll_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(20);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(ApiClient::new("http://localhost:5000"), None)
    }

    fn sample_movies() -> Vec<Movie> {
        vec![
            Movie {
                title: "Heat".to_string(),
                overview: "A heist.".to_string(),
                poster_path: Some("/h.jpg".to_string()),
                id: Some(1),
                release_date: Some("1995-12-15".to_string()),
                vote_average: Some(8.3),
            },
            Movie {
                title: "Obscure".to_string(),
                overview: String::new(),
                poster_path: None,
                id: Some(2),
                release_date: None,
                vote_average: None,
            },
        ]
    }

    fn sample_files() -> Vec<UserFile> {
        vec![
            UserFile {
                filename: "a.pdf".to_string(),
                upload_date: "Mon, 03 Mar 2025 10:00:00 GMT".to_string(),
                id: Some(7),
            },
            UserFile {
                filename: "b.png".to_string(),
                upload_date: "Tue, 04 Mar 2025 11:30:00 GMT".to_string(),
                id: Some(3),
            },
        ]
    }

    #[test]
    fn test_apply_movies_replaces_in_order() {
        let mut app = test_app();
        app.apply_movies(sample_movies());
        assert_eq!(app.movies.len(), 2);
        assert_eq!(app.movies[0].title, "Heat");
        assert_eq!(app.movies[1].title, "Obscure");
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let mut app = test_app();
        app.apply_movies(sample_movies());
        app.apply_movies(sample_movies());
        // Cleared before repopulation: no duplication across passes.
        assert_eq!(app.movies.len(), 2);

        app.apply_files(sample_files());
        app.apply_files(sample_files());
        assert_eq!(app.files.len(), 2);
    }

    #[test]
    fn test_apply_resets_selection() {
        let mut app = test_app();
        app.apply_movies(sample_movies());
        app.list_next();
        assert_eq!(app.movies_selected, 1);
        app.apply_movies(sample_movies());
        assert_eq!(app.movies_selected, 0);
    }

    #[test]
    fn test_failure_keeps_prior_pane_contents() {
        let mut app = test_app();
        app.apply_movies(sample_movies());
        app.note_movies_failure(&ApiError::UnexpectedStatus(500));
        assert_eq!(app.movies.len(), 2);

        app.apply_files(sample_files());
        app.note_files_failure(&ApiError::UnexpectedStatus(401));
        assert_eq!(app.files.len(), 2);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut app = test_app();
        app.apply_movies(sample_movies());
        app.list_prev();
        assert_eq!(app.movies_selected, 0);
        app.list_next();
        app.list_next();
        app.list_next();
        assert_eq!(app.movies_selected, 1);
    }

    #[test]
    fn test_toggle_pane() {
        let mut app = test_app();
        assert_eq!(app.view, View::Movies);
        app.toggle_pane();
        assert_eq!(app.view, View::Files);
        app.toggle_pane();
        assert_eq!(app.view, View::Movies);
    }

    #[test]
    fn test_open_detail_needs_a_selection() {
        let mut app = test_app();
        app.open_detail();
        assert_eq!(app.view, View::Movies);
        assert!(app.detail.is_none());

        app.apply_movies(sample_movies());
        app.open_detail();
        assert_eq!(app.view, View::Detail);
        assert_eq!(app.detail.as_ref().unwrap().title, "Heat");

        app.close_detail();
        assert_eq!(app.view, View::Movies);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_open_detail_ignored_on_files_pane() {
        let mut app = test_app();
        app.apply_movies(sample_movies());
        app.toggle_pane();
        app.open_detail();
        assert_eq!(app.view, View::Files);
        assert!(app.detail.is_none());
    }
}
