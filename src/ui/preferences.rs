// src/ui/preferences.rs

use crate::config::TemperatureUnit;
use crate::state::AppState;
use gtk4::{self as gtk, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;

pub fn show_preferences_window(
    parent: &gtk::ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    table_area: gtk::DrawingArea,
    legend_frame: gtk::Frame,
) {
    let window = gtk::Window::builder()
        .title("Preferences")
        .transient_for(parent)
        .modal(true)
        .default_width(420)
        .default_height(320)
        .resizable(false)
        .build();

    let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);

    let vbox = gtk::Box::new(gtk::Orientation::Vertical, 15);
    vbox.set_margin_top(20);
    vbox.set_margin_bottom(20);
    vbox.set_margin_start(20);
    vbox.set_margin_end(20);
    vbox.set_vexpand(true);

    // 1. Temperature Unit
    let unit_label = gtk::Label::new(Some("Temperature Unit:"));
    unit_label.set_halign(gtk::Align::Start);
    vbox.append(&unit_label);

    let unit_dropdown = gtk::DropDown::from_strings(&["Kelvin", "Celsius"]);
    unit_dropdown.set_selected(match state.borrow().config.temperature_unit {
        TemperatureUnit::Kelvin => 0,
        TemperatureUnit::Celsius => 1,
    });
    let s_unit = state.clone();
    unit_dropdown.connect_selected_notify(move |d| {
        let mut st = s_unit.borrow_mut();
        st.config.temperature_unit = match d.selected() {
            1 => TemperatureUnit::Celsius,
            _ => TemperatureUnit::Kelvin,
        };
        st.save_config();
    });
    vbox.append(&unit_dropdown);

    vbox.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

    // 2. Tile mass
    let check_mass = gtk::CheckButton::with_label("Show atomic mass on tiles");
    check_mass.set_active(state.borrow().config.show_tile_mass);
    let s_mass = state.clone();
    let da_mass = table_area.clone();
    check_mass.connect_toggled(move |c| {
        s_mass.borrow_mut().config.show_tile_mass = c.is_active();
        s_mass.borrow().save_config();
        da_mass.queue_draw();
    });
    vbox.append(&check_mass);

    // 3. Legend
    let check_legend = gtk::CheckButton::with_label("Show category legend in the sidebar");
    check_legend.set_active(state.borrow().config.show_legend);
    let s_legend = state.clone();
    check_legend.connect_toggled(move |c| {
        s_legend.borrow_mut().config.show_legend = c.is_active();
        s_legend.borrow().save_config();
        legend_frame.set_visible(c.is_active());
    });
    vbox.append(&check_legend);

    // 4. Sidebar at startup
    let check_sidebar = gtk::CheckButton::with_label("Open the filter panel at startup");
    check_sidebar.set_active(state.borrow().config.filters_open_at_start);
    let s_sidebar = state.clone();
    check_sidebar.connect_toggled(move |c| {
        s_sidebar.borrow_mut().config.filters_open_at_start = c.is_active();
        s_sidebar.borrow().save_config();
    });
    vbox.append(&check_sidebar);

    main_vbox.append(&vbox);

    // Footer
    let footer = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    footer.set_margin_top(10);
    footer.set_margin_bottom(10);
    footer.set_margin_end(10);
    footer.set_halign(gtk::Align::End);

    let btn_close = gtk::Button::with_label("Close");
    let win_clone = window.clone();
    btn_close.connect_clicked(move |_| win_clone.close());
    footer.append(&btn_close);
    main_vbox.append(&footer);

    window.set_child(Some(&main_vbox));
    window.present();
}
