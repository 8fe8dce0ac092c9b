// src/ui/details.rs
//
// The element detail page: header, summary card and the tabbed
// property panels. Rebuilt from scratch every time a tile is opened.

// We do not import 'DrawingArea' from gtk4 here: the Plotters canvas
// shares the name. GTK's widget is written as 'gtk4::DrawingArea'.
use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, Button, DropDown, Frame, Grid, Label, Notebook, Orientation, Stack,
};

use crate::config::TemperatureUnit;
use crate::model::Element;
use crate::rendering::{atom, theme};
use crate::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;

// Plotters imports for the Trends tab
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use plotters::style::TextStyle;
use plotters_cairo::CairoBackend;

/// Properties plottable in the Trends tab, in dropdown order.
const TREND_PROPERTIES: [&str; 5] = [
    "Electronegativity",
    "Ionization Energy (eV)",
    "Atomic Radius (pm)",
    "Density (g/cm3)",
    "Melting Point (K)",
];

fn trend_value(element: &Element, property: u32) -> Option<f64> {
    match property {
        0 => element.electronegativity,
        1 => element.ionization_energy,
        2 => element.atomic_radius,
        3 => element.density,
        _ => element.melting_point,
    }
}

fn format_property(value: Option<f64>, unit: &str) -> String {
    match value {
        // "Unknown", never a silent zero
        None => "Unknown".to_string(),
        Some(v) => {
            if unit.is_empty() {
                format!("{}", v)
            } else {
                format!("{} {}", v, unit)
            }
        }
    }
}

/// Clears and repopulates the detail container for the given element.
pub fn show_element(
    container: &GtkBox,
    state: Rc<RefCell<AppState>>,
    atomic_number: u32,
    stack: &Stack,
    table_area: &gtk4::DrawingArea,
) {
    let element = match state.borrow().catalog.by_number(atomic_number) {
        Some(e) => e.clone(),
        None => {
            log::warn!("No element with atomic number {}", atomic_number);
            return;
        }
    };

    while let Some(child) = container.first_child() {
        container.remove(&child);
    }

    // --- Back row ---
    let back_row = GtkBox::new(Orientation::Horizontal, 0);
    let btn_back = Button::with_label("\u{2190} Back to Table");
    let s_back = state.clone();
    let stack_back = stack.clone();
    let da_back = table_area.clone();
    btn_back.connect_clicked(move |_| {
        s_back.borrow_mut().selection.clear();
        stack_back.set_visible_child_name("table");
        da_back.queue_draw();
    });
    back_row.append(&btn_back);
    container.append(&back_row);

    // --- Header ---
    container.append(&build_header(&element));

    // --- Tabs ---
    let notebook = Notebook::new();
    notebook.set_vexpand(true);

    let overview_page = build_overview_tab(&element);
    notebook.append_page(&overview_page, Some(&Label::new(Some("Overview"))));

    let unit = state.borrow().config.temperature_unit;
    let physical_page = build_physical_tab(&element, unit);
    notebook.append_page(&physical_page, Some(&Label::new(Some("Physical Properties"))));

    let trends_page = build_trends_tab(state.clone(), &element);
    notebook.append_page(&trends_page, Some(&Label::new(Some("Trends"))));

    let atom_page = build_atom_tab(state.clone(), &element);
    notebook.append_page(&atom_page, Some(&Label::new(Some("Atom Model"))));

    container.append(&notebook);
}

fn build_header(element: &Element) -> GtkBox {
    let header = GtkBox::new(Orientation::Horizontal, 24);
    header.set_margin_top(12);
    header.set_margin_bottom(12);

    let symbol = Label::new(None);
    symbol.set_markup(&format!(
        "<span font=\"Sans Bold 52\" foreground=\"{}\">{}</span>",
        theme::category_accent_hex(element.category),
        gtk4::glib::markup_escape_text(&element.symbol)
    ));
    header.append(&symbol);

    let title_box = GtkBox::new(Orientation::Vertical, 2);
    let name = Label::new(None);
    name.set_markup(&format!(
        "<span font=\"Sans Bold 22\">{}</span>",
        gtk4::glib::markup_escape_text(&element.name)
    ));
    name.set_halign(Align::Start);
    title_box.append(&name);

    let category = Label::new(None);
    category.set_markup(&format!(
        "<span foreground=\"{}\">{}</span>",
        theme::category_accent_hex(element.category),
        element.category.tag()
    ));
    category.set_halign(Align::Start);
    title_box.append(&category);

    let numbers = Label::new(Some(&format!(
        "Atomic Number: {}    Atomic Mass: {:.4} u",
        element.atomic_number, element.atomic_mass
    )));
    numbers.set_halign(Align::Start);
    title_box.append(&numbers);
    header.append(&title_box);

    // Summary card on the right
    let card = Frame::new(None);
    card.set_halign(Align::End);
    card.set_hexpand(true);

    let grid = Grid::new();
    grid.set_row_spacing(4);
    grid.set_column_spacing(16);
    grid.set_margin_top(10);
    grid.set_margin_bottom(10);
    grid.set_margin_start(12);
    grid.set_margin_end(12);

    let group_text = element
        .group
        .map(|g| g.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let pairs = [
        ("Group:", group_text),
        ("Period:", element.period.to_string()),
        ("Block:", element.block.clone()),
        ("Discovery:", element.year_discovered.to_string()),
    ];
    for (i, (key, value)) in pairs.iter().enumerate() {
        let key_label = Label::new(Some(*key));
        key_label.set_halign(Align::Start);
        key_label.set_opacity(0.6);
        let value_label = Label::new(Some(value.as_str()));
        value_label.set_halign(Align::Start);
        grid.attach(&key_label, (i as i32 % 2) * 2, i as i32 / 2, 1, 1);
        grid.attach(&value_label, (i as i32 % 2) * 2 + 1, i as i32 / 2, 1, 1);
    }
    card.set_child(Some(&grid));
    header.append(&card);

    header
}

fn build_overview_tab(element: &Element) -> GtkBox {
    let root = GtkBox::new(Orientation::Vertical, 12);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);

    let about = Label::new(None);
    about.set_markup(&format!(
        "<span font=\"Sans Bold 14\">About {}</span>",
        gtk4::glib::markup_escape_text(&element.name)
    ));
    about.set_halign(Align::Start);
    root.append(&about);

    let description = Label::new(Some(&element.description));
    description.set_wrap(true);
    description.set_xalign(0.0);
    root.append(&description);

    let columns = GtkBox::new(Orientation::Horizontal, 12);

    // Electronic structure
    let frame_el = Frame::new(Some("Electronic Structure"));
    let vbox_el = GtkBox::new(Orientation::Vertical, 6);
    vbox_el.set_margin_top(8);
    vbox_el.set_margin_bottom(8);
    vbox_el.set_margin_start(8);
    vbox_el.set_margin_end(8);

    let config_label = Label::new(None);
    config_label.set_markup(&format!(
        "Electron Configuration:\n<tt>{}</tt>",
        gtk4::glib::markup_escape_text(&element.electron_configuration)
    ));
    config_label.set_halign(Align::Start);
    vbox_el.append(&config_label);

    let en_label = Label::new(Some(&format!(
        "Electronegativity: {}",
        format_property(element.electronegativity, "Pauling")
    )));
    en_label.set_halign(Align::Start);
    vbox_el.append(&en_label);

    frame_el.set_child(Some(&vbox_el));
    frame_el.set_hexpand(true);
    columns.append(&frame_el);

    // Discovery
    let frame_disc = Frame::new(Some("Discovery"));
    let vbox_disc = GtkBox::new(Orientation::Vertical, 6);
    vbox_disc.set_margin_top(8);
    vbox_disc.set_margin_bottom(8);
    vbox_disc.set_margin_start(8);
    vbox_disc.set_margin_end(8);

    let by_label = Label::new(Some(&format!("Discovered by: {}", element.discoverer())));
    by_label.set_halign(Align::Start);
    by_label.set_wrap(true);
    by_label.set_xalign(0.0);
    vbox_disc.append(&by_label);

    let year_label = Label::new(Some(&format!("Year: {}", element.year_discovered)));
    year_label.set_halign(Align::Start);
    vbox_disc.append(&year_label);

    frame_disc.set_child(Some(&vbox_disc));
    frame_disc.set_hexpand(true);
    columns.append(&frame_disc);

    root.append(&columns);
    root
}

fn build_physical_tab(element: &Element, unit: TemperatureUnit) -> GtkBox {
    let root = GtkBox::new(Orientation::Vertical, 12);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);

    let grid = Grid::new();
    grid.set_row_spacing(12);
    grid.set_column_spacing(12);
    grid.set_column_homogeneous(true);

    let temp = |kelvin: Option<f64>| -> String {
        match kelvin {
            None => "Unknown".to_string(),
            Some(k) => format!("{:.2} {}", unit.from_kelvin(k), unit.suffix()),
        }
    };

    let cards = [
        (
            "Atomic Radius",
            format_property(element.atomic_radius, "pm"),
            "Picometers",
        ),
        (
            "Density",
            format_property(element.density, "g/cm\u{00b3}"),
            "Grams per cubic centimeter",
        ),
        (
            "Ionization Energy",
            format_property(element.ionization_energy, "eV"),
            "Electron volts",
        ),
        ("Melting Point", temp(element.melting_point), "At standard pressure"),
        ("Boiling Point", temp(element.boiling_point), "At standard pressure"),
        (
            "Electronegativity",
            format_property(element.electronegativity, ""),
            "Pauling scale",
        ),
    ];

    for (i, (title, value, note)) in cards.iter().enumerate() {
        let frame = Frame::new(Some(*title));
        let vbox = GtkBox::new(Orientation::Vertical, 4);
        vbox.set_margin_top(8);
        vbox.set_margin_bottom(8);
        vbox.set_margin_start(8);
        vbox.set_margin_end(8);

        let value_label = Label::new(None);
        value_label.set_markup(&format!(
            "<span font=\"Sans Bold 16\">{}</span>",
            gtk4::glib::markup_escape_text(value)
        ));
        value_label.set_halign(Align::Start);
        vbox.append(&value_label);

        let note_label = Label::new(Some(*note));
        note_label.set_halign(Align::Start);
        note_label.set_opacity(0.6);
        vbox.append(&note_label);

        frame.set_child(Some(&vbox));
        grid.attach(&frame, i as i32 % 3, i as i32 / 3, 1, 1);
    }

    root.append(&grid);
    root
}

// --- Trends tab: one property plotted across the element's period ---

fn build_trends_tab(state: Rc<RefCell<AppState>>, element: &Element) -> GtkBox {
    let root = GtkBox::new(Orientation::Vertical, 10);
    root.set_margin_top(10);
    root.set_margin_bottom(10);
    root.set_margin_start(10);
    root.set_margin_end(10);

    let controls = GtkBox::new(Orientation::Horizontal, 10);
    controls.append(&Label::new(Some("Property:")));
    let property_dd = DropDown::from_strings(&TREND_PROPERTIES);
    controls.append(&property_dd);
    root.append(&controls);

    let drawing_area = gtk4::DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);
    drawing_area.set_content_height(360);

    let chart_element = element.clone();
    let dd_weak = property_dd.downgrade();
    drawing_area.set_draw_func(move |_, context, width, height| {
        let property = dd_weak.upgrade().map(|d| d.selected()).unwrap_or(0);

        let backend = match CairoBackend::new(context, (width as u32, height as u32)) {
            Ok(b) => b,
            Err(_) => return,
        };
        let root_area = backend.into_drawing_area();
        root_area.fill(&WHITE).ok();

        let catalog = state.borrow().catalog.clone();
        let points: Vec<(f64, f64)> = catalog
            .elements()
            .iter()
            .filter(|e| e.period == chart_element.period)
            .filter_map(|e| trend_value(e, property).map(|v| (e.atomic_number as f64, v)))
            .collect();

        if points.len() < 2 {
            let style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
            root_area
                .draw_text(
                    "Not enough measured data for this property.",
                    &style,
                    (width / 2 - 150, height / 2),
                )
                .ok();
            return;
        }

        draw_trend_chart(&root_area, &points, &chart_element, property).ok();
    });
    root.append(&drawing_area);

    let da_clone = drawing_area.clone();
    property_dd.connect_selected_notify(move |_| da_clone.queue_draw());

    let caption = Label::new(Some(
        "Values for elements of the same period; the open marker is the element you are viewing.",
    ));
    caption.set_wrap(true);
    caption.set_xalign(0.0);
    caption.set_opacity(0.6);
    root.append(&caption);

    root
}

fn draw_trend_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    element: &Element,
    property: u32,
) -> Result<(), std::boxed::Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min) - 1.0;
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max) + 1.0;
    let y_max = points.iter().map(|p| p.1).fold(0.0f64, f64::max) * 1.15;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!(
                "{} across period {}",
                TREND_PROPERTIES[property as usize], element.period
            ),
            ("sans-serif", 18),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Atomic Number")
        .y_desc(TREND_PROPERTIES[property as usize])
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    // Mark the opened element if it has a value for this property
    if let Some(v) = trend_value(element, property) {
        chart.draw_series(std::iter::once(Circle::new(
            (element.atomic_number as f64, v),
            6,
            RED.stroke_width(2),
        )))?;
    }

    Ok(())
}

// --- Atom model tab: animated shell rendering ---

fn build_atom_tab(state: Rc<RefCell<AppState>>, element: &Element) -> GtkBox {
    let root = GtkBox::new(Orientation::Vertical, 8);
    root.set_margin_top(10);
    root.set_margin_bottom(10);
    root.set_margin_start(10);
    root.set_margin_end(10);

    let drawing_area = gtk4::DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);
    drawing_area.set_content_height(400);

    let draw_element = element.clone();
    let s_draw = state.clone();
    drawing_area.set_draw_func(move |_, cr, w, h| {
        let (r, g, b) = theme::BACKGROUND;
        cr.set_source_rgb(r, g, b);
        cr.paint().ok();

        let view = s_draw.borrow().atom_view;
        atom::draw_atom(cr, &draw_element, &view, w as f64, h as f64);
    });

    // Animation clock
    let s_tick = state.clone();
    drawing_area.add_tick_callback(move |da, _clock| {
        s_tick.borrow_mut().atom_view.phase += 0.02;
        da.queue_draw();
        gtk4::glib::ControlFlow::Continue
    });

    // Drag to rotate
    let drag = gtk4::GestureDrag::new();
    let drag_start: Rc<RefCell<(f64, f64)>> = Rc::new(RefCell::new((0.0, 0.0)));
    let s_begin = state.clone();
    let start_begin = drag_start.clone();
    drag.connect_drag_begin(move |_, _, _| {
        let view = s_begin.borrow().atom_view;
        *start_begin.borrow_mut() = (view.rot_x, view.rot_y);
    });
    let s_update = state.clone();
    let start_update = drag_start.clone();
    drag.connect_drag_update(move |_, dx, dy| {
        let (rx0, ry0) = *start_update.borrow();
        let mut st = s_update.borrow_mut();
        st.atom_view.rot_y = ry0 + dx * 0.5;
        st.atom_view.rot_x = (rx0 + dy * 0.5).clamp(-85.0, 85.0);
    });
    drawing_area.add_controller(drag);

    // Scroll to zoom
    let scroll = gtk4::EventControllerScroll::new(gtk4::EventControllerScrollFlags::VERTICAL);
    let s_zoom = state.clone();
    scroll.connect_scroll(move |_, _, dy| {
        let mut st = s_zoom.borrow_mut();
        if dy > 0.0 {
            st.atom_view.zoom = (st.atom_view.zoom * 0.9).max(0.3);
        } else {
            st.atom_view.zoom = (st.atom_view.zoom * 1.1).min(3.0);
        }
        gtk4::glib::Propagation::Stop
    });
    drawing_area.add_controller(scroll);

    root.append(&drawing_area);

    let hint = Label::new(Some("Drag to rotate \u{00b7} Scroll to zoom"));
    hint.set_opacity(0.5);
    root.append(&hint);

    let note = Label::new(Some(&format!(
        "A simplified shell model of {}. Electrons orbit the nucleus in a stylized \
         representation; real atomic structure follows quantum mechanics and has no \
         defined electron paths.",
        element.name
    )));
    note.set_wrap(true);
    note.set_xalign(0.0);
    note.set_opacity(0.6);
    root.append(&note);

    root
}
