use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, DrawingArea, Frame, Label, Orientation, ScrolledWindow,
    SearchEntry, Stack, StackTransitionType, TextView,
};
use gtk4::Box as GtkBox;
use gtk4::{Revealer, RevealerTransitionType};
use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod filter;
pub mod layout;
pub mod menu;
pub mod model;
pub mod panels;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use filter::FilterPatch;
use model::ElementCatalog;
use state::AppState;
use ui::interactions::setup_interactions;

fn main() {
    let app = Application::builder()
        .application_id("com.example.ptview")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    // A catalog that fails validation refuses to start the app; there
    // is no sensible table to render from inconsistent data.
    let catalog = match ElementCatalog::load_embedded() {
        Ok(c) => Rc::new(c),
        Err(e) => {
            eprintln!("Element catalog rejected: {}", e);
            std::process::exit(1);
        }
    };

    let state = Rc::new(RefCell::new(AppState::new(catalog.clone())));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("PTView - Periodic Table Explorer")
        .default_width(1200)
        .default_height(820)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu, Header, Main Content)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // Header row: app title | search | filter toggle
    let header = GtkBox::new(Orientation::Horizontal, 10);
    header.set_margin_top(6);
    header.set_margin_bottom(6);
    header.set_margin_start(10);
    header.set_margin_end(10);

    let title = Label::new(None);
    title.set_markup(
        "<span font=\"Sans Bold 15\">Element <span foreground=\"#60a5fa\">Explorer</span></span>",
    );
    header.append(&title);

    let search_entry = SearchEntry::new();
    search_entry.set_placeholder_text(Some("Search element..."));
    search_entry.set_hexpand(true);
    header.append(&search_entry);

    let btn_filters = gtk4::Button::with_label("Filters");
    header.append(&btn_filters);

    // 2. MAIN CONTENT: Horizontal Box (Sidebar | Table/Details + Console)
    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);
    main_hbox.set_vexpand(true);

    // Central stack: the table grid and the detail page
    let stack = Stack::new();
    stack.set_transition_type(StackTransitionType::Crossfade);
    stack.set_hexpand(true);
    stack.set_vexpand(true);

    let table_area = DrawingArea::new();
    table_area.set_vexpand(true);
    stack.add_named(&table_area, Some("table"));

    let details_box = GtkBox::new(Orientation::Vertical, 0);
    details_box.set_margin_top(10);
    details_box.set_margin_bottom(10);
    details_box.set_margin_start(14);
    details_box.set_margin_end(14);
    let details_scroll = ScrolledWindow::builder().child(&details_box).build();
    stack.add_named(&details_scroll, Some("details"));

    // --- Left Panel (Filter Sidebar) ---
    let (sidebar_widget, reset_button, legend_frame) =
        panels::filter_panel::build(state.clone(), &table_area);

    let sidebar_revealer = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideRight)
        .child(&sidebar_widget)
        .reveal_child(false)
        .build();

    // Console
    let info_frame = Frame::new(None);
    let console_view = TextView::builder()
        .editable(false)
        .cursor_visible(false)
        .monospace(true)
        .left_margin(10)
        .right_margin(10)
        .top_margin(10)
        .bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(110)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    let right_vbox = GtkBox::new(Orientation::Vertical, 0);
    right_vbox.set_hexpand(true);
    right_vbox.append(&stack);
    right_vbox.append(&info_frame);

    main_hbox.append(&sidebar_revealer);
    main_hbox.append(&right_vbox);

    // Logger first, so config load and catalog stats reach the console
    if utils::logger::init(&console_view).is_err() {
        eprintln!("Logger was already initialized");
    }
    state.borrow_mut().load_config();
    log::info!(
        "Catalog loaded: {} elements (v{}).",
        catalog.len(),
        catalog.version()
    );

    // The panel was built with default config; apply the loaded one.
    sidebar_revealer.set_reveal_child(state.borrow().config.filters_open_at_start);
    legend_frame.set_visible(state.borrow().config.show_legend);

    // 3. Menu Bar
    let menu_bar = menu::build_menu_and_actions(
        app,
        &window,
        state.clone(),
        &table_area,
        &sidebar_revealer,
        &reset_button,
        &legend_frame,
        &stack,
    );

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&header);
    root_vbox.append(&main_hbox);

    // Filter toggle button mirrors the F9 action
    let rev_weak = sidebar_revealer.downgrade();
    btn_filters.connect_clicked(move |_| {
        if let Some(rev) = rev_weak.upgrade() {
            rev.set_reveal_child(!rev.reveals_child());
        }
    });

    // The search box feeds the filter engine directly
    let s_search = state.clone();
    let da_search = table_area.clone();
    search_entry.connect_search_changed(move |entry| {
        s_search
            .borrow_mut()
            .filters
            .merge(FilterPatch::search(entry.text().as_str()));
        da_search.queue_draw();
    });

    // --- Setup Logic ---
    setup_interactions(&window, state.clone(), &table_area, &details_box, &stack);

    // Drawing Function
    let s = state.clone();
    table_area.set_draw_func(move |_, cr, w, h| {
        let st = s.borrow();

        // 1. Background
        let (bg_r, bg_g, bg_b) = rendering::theme::BACKGROUND;
        cr.set_source_rgb(bg_r, bg_g, bg_b);
        cr.paint().unwrap();

        // 2. Calculate Scene (tiles, banner, row labels)
        let table =
            rendering::scene::calculate_scene(&st.catalog, &st.filters, w as f64, h as f64);

        // 3. Draw Tiles
        rendering::painter::draw_table(cr, &table, &st.catalog, &st.config);
    });

    window.present();
}
