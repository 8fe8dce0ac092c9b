// src/menu/mod.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Button, DrawingArea, Frame, Revealer, Stack};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_view;

pub fn build_menu_and_actions(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    table_area: &DrawingArea,
    sidebar_revealer: &Revealer,
    reset_button: &Button,
    legend_frame: &Frame,
    stack: &Stack,
) -> gtk4::Box {
    // Register Actions
    actions_file::setup(app, window, state.clone(), table_area, legend_frame);
    actions_view::setup(app, state.clone(), table_area, sidebar_revealer, reset_button, stack);
    actions_help::setup(app, window);

    // Keyboard Shortcuts
    app.set_accels_for_action("app.export", &["<Primary>e"]);
    app.set_accels_for_action("app.preferences", &["<Primary>p"]);
    app.set_accels_for_action("app.quit", &["<Primary>q"]);
    app.set_accels_for_action("app.toggle_filters", &["F9"]);
    app.set_accels_for_action("app.reset_filters", &["<Primary>r"]);
    app.set_accels_for_action("app.back_to_table", &["<Primary>w"]);

    // --- BUILD MENU BAR ---
    let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    let root_model = gtk4::gio::Menu::new();

    // --- FILE MENU ---
    let file_menu = gtk4::gio::Menu::new();
    file_menu.append(Some("Export Table Image..."), Some("app.export"));
    file_menu.append(Some("Preferences..."), Some("app.preferences"));
    file_menu.append(Some("Quit"), Some("app.quit"));
    root_model.append_submenu(Some("File"), &file_menu);

    // --- VIEW MENU ---
    let view_menu = gtk4::gio::Menu::new();
    view_menu.append(Some("Toggle Filter Panel"), Some("app.toggle_filters"));
    view_menu.append(Some("Reset Filters"), Some("app.reset_filters"));
    view_menu.append(Some("Back to Table"), Some("app.back_to_table"));
    root_model.append_submenu(Some("View"), &view_menu);

    // --- HELP MENU ---
    let help_menu = gtk4::gio::Menu::new();
    help_menu.append(Some("About"), Some("app.help_about"));
    root_model.append_submenu(Some("Help"), &help_menu);

    let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
    menu_bar.append(&popover_bar);

    menu_bar
}
