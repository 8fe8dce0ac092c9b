// src/ui/interactions.rs

use crate::rendering::scene;
use crate::state::AppState;
use crate::ui::details;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
    ApplicationWindow, Box as GtkBox, DrawingArea, EventControllerKey, GestureClick,
    PropagationPhase, Stack,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup_interactions(
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    table_area: &DrawingArea,
    details_container: &GtkBox,
    stack: &Stack,
) {
    // 1. CLICK (open element)
    let click = GestureClick::new();
    click.set_button(0);
    click.set_propagation_phase(PropagationPhase::Capture);

    let s = state.clone();
    let da = table_area.clone();
    let details_box = details_container.clone();
    let stack_click = stack.clone();

    click.connect_pressed(move |gesture, _n_press, x, y| {
        let widget = gesture.widget();
        let w = widget.width() as f64;
        let h = widget.height() as f64;

        // Same scene the draw func painted, so the hit test can never
        // disagree with what is on screen.
        let hit = {
            let st = s.borrow();
            let table = scene::calculate_scene(&st.catalog, &st.filters, w, h);
            scene::hit_test(&table, x, y)
        };

        if let Some(atomic_number) = hit {
            s.borrow_mut().selection.select(atomic_number);
            if let Some(element) = s.borrow().selected_element() {
                log::debug!("Opened {} (Z={})", element.name, element.atomic_number);
            }

            details::show_element(&details_box, s.clone(), atomic_number, &stack_click, &da);
            stack_click.set_visible_child_name("details");
        }
    });
    table_area.add_controller(click);

    // 2. KEYBOARD (Escape closes the detail view)
    let key_controller = EventControllerKey::new();
    let s = state.clone();
    let da = table_area.clone();
    let stack_key = stack.clone();

    key_controller.connect_key_pressed(move |_, keyval, _keycode, _state_flags| {
        if keyval == gtk4::gdk::Key::Escape {
            let mut st = s.borrow_mut();
            if st.selection.is_open() {
                st.selection.clear();
                drop(st);
                stack_key.set_visible_child_name("table");
                da.queue_draw();
                return glib::Propagation::Stop;
            }
        }
        glib::Propagation::Proceed
    });
    window.add_controller(key_controller);
}
