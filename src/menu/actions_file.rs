// src/menu/actions_file.rs

use crate::rendering::export;
use crate::state::AppState;
use crate::ui::show_preferences_window;
use gtk4::gio::SimpleAction;
use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, DrawingArea, FileChooserAction, FileChooserDialog, Frame,
    ResponseType,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    table_area: &DrawingArea,
    legend_frame: &Frame,
) {
    // --- EXPORT ---
    let action_export = SimpleAction::new("export", None);
    let win_export = window.clone();
    let s_export = state.clone();
    action_export.connect_activate(move |_, _| {
        let dialog = FileChooserDialog::new(
            Some("Export Table Image"),
            Some(&win_export),
            FileChooserAction::Save,
            &[
                ("Cancel", ResponseType::Cancel),
                ("Save", ResponseType::Accept),
            ],
        );
        dialog.set_current_name("periodic-table.png");

        let s_inner = s_export.clone();
        dialog.connect_response(move |dlg, response| {
            if response == ResponseType::Accept {
                if let Some(path) = dlg.file().and_then(|f| f.path()) {
                    let path_str = path.to_string_lossy().to_string();
                    let as_pdf = path_str.to_lowercase().ends_with(".pdf");
                    match export::export_table(&s_inner.borrow(), &path_str, as_pdf) {
                        Ok(()) => log::info!("Exported table to {}", path_str),
                        Err(e) => log::error!("Export failed: {}", e),
                    }
                }
            }
            dlg.close();
        });

        dialog.present();
    });
    app.add_action(&action_export);

    // --- PREFERENCES ---
    let action_prefs = SimpleAction::new("preferences", None);
    let win_prefs = window.clone();
    let s_prefs = state.clone();
    let da_prefs = table_area.clone();
    let legend = legend_frame.clone();
    action_prefs.connect_activate(move |_, _| {
        show_preferences_window(&win_prefs, s_prefs.clone(), da_prefs.clone(), legend.clone());
    });
    app.add_action(&action_prefs);

    // --- QUIT ---
    let action_quit = SimpleAction::new("quit", None);
    let app_quit = app.clone();
    action_quit.connect_activate(move |_, _| {
        app_quit.quit();
    });
    app.add_action(&action_quit);
}
