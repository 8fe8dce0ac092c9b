// src/menu/actions_view.rs

use crate::state::AppState;
use gtk4::gio::SimpleAction;
use gtk4::prelude::*;
use gtk4::{Application, Button, DrawingArea, Revealer, Stack};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
    app: &Application,
    state: Rc<RefCell<AppState>>,
    table_area: &DrawingArea,
    sidebar_revealer: &Revealer,
    reset_button: &Button,
    stack: &Stack,
) {
    // --- TOGGLE FILTER PANEL ---
    let action_toggle = SimpleAction::new("toggle_filters", None);
    let rev_weak = sidebar_revealer.downgrade();
    action_toggle.connect_activate(move |_, _| {
        if let Some(rev) = rev_weak.upgrade() {
            rev.set_reveal_child(!rev.reveals_child());
        }
    });
    app.add_action(&action_toggle);

    // --- RESET FILTERS ---
    // Routed through the panel's own button so the dropdowns snap back
    // together with the state.
    let action_reset = SimpleAction::new("reset_filters", None);
    let btn_weak = reset_button.downgrade();
    action_reset.connect_activate(move |_, _| {
        if let Some(btn) = btn_weak.upgrade() {
            btn.emit_clicked();
        }
    });
    app.add_action(&action_reset);

    // --- BACK TO TABLE ---
    let action_back = SimpleAction::new("back_to_table", None);
    let s_back = state.clone();
    let da_back = table_area.clone();
    let stack_back = stack.clone();
    action_back.connect_activate(move |_, _| {
        s_back.borrow_mut().selection.clear();
        stack_back.set_visible_child_name("table");
        da_back.queue_draw();
    });
    app.add_action(&action_back);
}
