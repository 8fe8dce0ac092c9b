// src/panels/filter_panel.rs

use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, Button, DrawingArea, DropDown, Expander, Frame, Label, Orientation,
    PolicyType, ScrolledWindow,
};

use crate::filter::FilterPatch;
use crate::model::Category;
use crate::rendering::theme;
use crate::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;

/// Builds the filter sidebar and returns
/// (The ScrolledWindow, The Reset Button, The Legend Frame).
/// The reset button is exposed so the View menu can trigger it; the
/// legend frame so Preferences can toggle its visibility.
pub fn build(
    state: Rc<RefCell<AppState>>,
    table_area: &DrawingArea,
) -> (ScrolledWindow, Button, Frame) {
    // 1. Root Container (Scrollable)
    let scroll = ScrolledWindow::builder()
        .hscrollbar_policy(PolicyType::Never)
        .vscrollbar_policy(PolicyType::Automatic)
        .min_content_width(230)
        .build();

    let root_vbox = GtkBox::new(Orientation::Vertical, 10);
    root_vbox.set_margin_start(10);
    root_vbox.set_margin_end(10);
    root_vbox.set_margin_top(10);
    root_vbox.set_margin_bottom(10);
    scroll.set_child(Some(&root_vbox));

    // ============================================================
    // SECTION 1: FILTERS
    // ============================================================
    let filter_expander = Expander::new(Some("Filter Elements"));
    filter_expander.set_expanded(true);

    let filter_box = GtkBox::new(Orientation::Vertical, 12);
    filter_box.set_margin_top(10);
    filter_box.set_margin_bottom(10);
    filter_box.set_margin_start(5);

    let da_weak = table_area.downgrade();
    let queue_redraw = move |weak: &gtk4::glib::WeakRef<DrawingArea>| {
        if let Some(da) = weak.upgrade() {
            da.queue_draw();
        }
    };

    // --- Category ---
    let mut category_rows: Vec<String> = vec!["All Categories".to_string()];
    category_rows.extend(Category::ALL.iter().map(|c| c.label().to_string()));
    let category_refs: Vec<&str> = category_rows.iter().map(String::as_str).collect();

    let category_label = Label::new(Some("Element Category"));
    category_label.set_halign(Align::Start);
    filter_box.append(&category_label);

    let category_dd = DropDown::from_strings(&category_refs);
    let s_cat = state.clone();
    let da_cat = da_weak.clone();
    let cb_cat = queue_redraw.clone();
    category_dd.connect_selected_notify(move |d| {
        let value = match d.selected() {
            0 => String::new(),
            i => Category::ALL[(i - 1) as usize].tag().to_string(),
        };
        s_cat.borrow_mut().filters.merge(FilterPatch {
            category: Some(value),
            ..FilterPatch::default()
        });
        cb_cat(&da_cat);
    });
    filter_box.append(&category_dd);

    // --- Group ---
    let mut group_rows: Vec<String> = vec!["All Groups".to_string()];
    group_rows.extend((1..=18).map(|g| format!("Group {}", g)));
    let group_refs: Vec<&str> = group_rows.iter().map(String::as_str).collect();

    let group_label = Label::new(Some("Group"));
    group_label.set_halign(Align::Start);
    filter_box.append(&group_label);

    let group_dd = DropDown::from_strings(&group_refs);
    let s_grp = state.clone();
    let da_grp = da_weak.clone();
    let cb_grp = queue_redraw.clone();
    group_dd.connect_selected_notify(move |d| {
        let value = match d.selected() {
            0 => String::new(),
            i => i.to_string(),
        };
        s_grp.borrow_mut().filters.merge(FilterPatch {
            group: Some(value),
            ..FilterPatch::default()
        });
        cb_grp(&da_grp);
    });
    filter_box.append(&group_dd);

    // --- Period ---
    let mut period_rows: Vec<String> = vec!["All Periods".to_string()];
    period_rows.extend((1..=7).map(|p| format!("Period {}", p)));
    let period_refs: Vec<&str> = period_rows.iter().map(String::as_str).collect();

    let period_label = Label::new(Some("Period"));
    period_label.set_halign(Align::Start);
    filter_box.append(&period_label);

    let period_dd = DropDown::from_strings(&period_refs);
    let s_per = state.clone();
    let da_per = da_weak.clone();
    let cb_per = queue_redraw.clone();
    period_dd.connect_selected_notify(move |d| {
        let value = match d.selected() {
            0 => String::new(),
            i => i.to_string(),
        };
        s_per.borrow_mut().filters.merge(FilterPatch {
            period: Some(value),
            ..FilterPatch::default()
        });
        cb_per(&da_per);
    });
    filter_box.append(&period_dd);

    // --- Reset ---
    let btn_reset = Button::with_label("Reset Filters");
    let s_reset = state.clone();
    let da_reset = da_weak.clone();
    let cb_reset = queue_redraw.clone();
    let cat_dd = category_dd.clone();
    let grp_dd = group_dd.clone();
    let per_dd = period_dd.clone();
    btn_reset.connect_clicked(move |_| {
        s_reset.borrow_mut().filters.reset();
        // Snap the dropdowns back; their notify handlers re-merge the
        // empty values, which is a no-op at this point.
        cat_dd.set_selected(0);
        grp_dd.set_selected(0);
        per_dd.set_selected(0);
        log::info!("Filters reset (search text kept).");
        cb_reset(&da_reset);
    });
    filter_box.append(&btn_reset);

    filter_expander.set_child(Some(&filter_box));
    root_vbox.append(&filter_expander);

    // ============================================================
    // SECTION 2: LEGEND
    // ============================================================
    let legend_frame = Frame::new(Some("Element Categories"));
    let legend_box = GtkBox::new(Orientation::Vertical, 6);
    legend_box.set_margin_top(8);
    legend_box.set_margin_bottom(8);
    legend_box.set_margin_start(8);
    legend_box.set_margin_end(8);

    for category in Category::ALL {
        let row = GtkBox::new(Orientation::Horizontal, 8);

        let swatch = DrawingArea::new();
        swatch.set_content_width(14);
        swatch.set_content_height(14);
        swatch.set_valign(Align::Center);
        swatch.set_draw_func(move |_, cr, w, h| {
            let (r, g, b) = theme::category_color(category);
            cr.set_source_rgb(r, g, b);
            cr.arc(
                w as f64 / 2.0,
                h as f64 / 2.0,
                w.min(h) as f64 / 2.0,
                0.0,
                2.0 * std::f64::consts::PI,
            );
            cr.fill().ok();
        });
        row.append(&swatch);

        let lbl = Label::new(Some(category.label()));
        lbl.set_halign(Align::Start);
        row.append(&lbl);

        legend_box.append(&row);
    }

    legend_frame.set_child(Some(&legend_box));
    legend_frame.set_visible(state.borrow().config.show_legend);
    root_vbox.append(&legend_frame);

    (scroll, btn_reset, legend_frame)
}
