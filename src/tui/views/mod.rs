// Views module - screen-level rendering logic
//
// The roster screen is a single view: title, table, optional creation form,
// logs and status bar. Modals and the toast draw on top.

mod modal;

use super::app::App;
use super::layout::AppLayout;
use crate::tui::components::{logs_panel, status_bar, title_bar, TableView};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let layout = AppLayout::new(f.area(), app.state.show_form());

    title_bar::render(f, layout.title, app);

    // Keys go to the table only when no draft is open
    let table_focused = !app.editing_draft() && app.modal.is_none();
    let view = TableView {
        state: &app.state,
        edit_field: app.form.field(),
        theme: &app.theme,
        show_actions: layout.breakpoint.show_actions(),
        focused: table_focused,
    };
    app.table.render(f, layout.table, view);

    if let Some(area) = layout.form {
        app.form.render(f, area, app.state.form_data(), &app.theme);
    }

    if let Some(area) = layout.logs {
        let entries = app.log_buffer.recent(logs_panel::visible_rows(area));
        logs_panel::render(f, area, &entries, &app.theme);
    }

    status_bar::render(f, layout.status, app);

    if let Some(modal) = &app.modal {
        modal::render(f, modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
