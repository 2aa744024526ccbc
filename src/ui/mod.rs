mod movies;
mod files;
mod detail;
mod help;

use crate::app::App;
use ratatui::Frame;

pub use movies::truncate_str;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    match app.view {
        crate::app::View::Movies => movies::render(app, frame),
        crate::app::View::Files => files::render(app, frame),
        crate::app::View::Detail => detail::render(app, frame),
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}
