// src/menu/actions_help.rs

use gtk4::gio::SimpleAction;
use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, License};

pub fn setup(app: &Application, window: &ApplicationWindow) {
    let action_about = SimpleAction::new("help_about", None);
    let win = window.clone();
    action_about.connect_activate(move |_, _| {
        let dialog = AboutDialog::builder()
            .transient_for(&win)
            .modal(true)
            .program_name("PTView")
            .version(env!("CARGO_PKG_VERSION"))
            .comments("Interactive reference viewer for the periodic table of elements.")
            .license_type(License::MitX11)
            .build();
        dialog.present();
    });
    app.add_action(&action_about);
}
