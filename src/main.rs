mod api;
mod app;
mod credentials;
mod logging;
mod ui;

use app::{App, View};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI dashboard for a movie catalog server and your uploaded files
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the movie server
    #[arg(short, long)]
    server: Option<String>,

    /// Bearer token for this session (overrides the stored credential)
    #[arg(short, long)]
    token: Option<String>,
}

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard (default)
    Run {
        /// Base URL of the movie server
        #[arg(short, long)]
        server: Option<String>,

        /// Bearer token for this session (overrides the stored credential)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Store the bearer token used for the My Files pane
    SetToken {
        /// Opaque credential string, stored as-is
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Normalize command
    let command = match cli.command {
        Some(c) => c,
        None => Commands::Run {
            server: cli.server,
            token: cli.token,
        },
    };

    match command {
        Commands::SetToken { token } => {
            credentials::store_token(&token)?;
            eprintln!("Token stored.");
        }
        Commands::Run { server, token } => {
            // Log to a file; stderr would fight the TUI for the terminal.
            match logging::init() {
                Ok(path) => eprintln!("Logging to {}", path.display()),
                Err(e) => {
                    logging::init_stderr();
                    tracing::warn!("failed to open log file, logging to stderr: {e}");
                }
            }

            let server = server.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
            let client = api::ApiClient::new(&server);

            // Create app and do the initial fetch-and-render pass
            let mut app = App::new(client, token);
            app.init().await;

            // Init terminal
            let mut terminal = ratatui::init();

            // Main loop
            let result = run_app(&mut terminal, &mut app).await;

            // Restore terminal
            ratatui::restore();

            if let Err(e) = result {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if crossterm::event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(app, key).await;
                }
                _ => {}
            }
        }
    }
}

async fn handle_key(app: &mut App, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.view {
        View::Movies | View::Files => handle_list_key(app, key).await,
        View::Detail => handle_detail_key(app, key),
    }
}

async fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_pane();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.list_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_prev();
        }
        KeyCode::Enter => {
            app.open_detail();
        }
        KeyCode::Char('r') => {
            app.status_msg = "Refreshing...".to_string();
            app.refresh_all().await;
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_detail();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
        }
        _ => {}
    }
}
