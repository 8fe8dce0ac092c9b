// src/utils/logger.rs
//
// Routes the `log` facade into the in-app console TextView. The view is
// held weakly; messages logged after the window closes are dropped.

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
    let buffer = view.buffer();
    let tag_table = buffer.tag_table();

    for (name, color, weight) in [
        ("error", "#ff4444", 700),
        ("warn", "#ffbb33", 400),
        ("info", "#33b5e5", 400),
        ("debug", "#aaaaaa", 400),
    ] {
        if tag_table.lookup(name).is_none() {
            let tag = gtk4::TextTag::new(Some(name));
            tag.set_property("foreground", color);
            tag.set_property("weight", weight);
            tag_table.add(&tag);
        }
    }

    let _ = LOG_VIEW.set(view.downgrade().into());
    log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag_name = match record.level() {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug | Level::Trace => "debug",
        };

        let msg = format!("[{:<5}] {}\n", record.level(), record.args());

        glib::MainContext::default().spawn_local(async move {
            if let Some(weak_ref) = LOG_VIEW.get() {
                if let Some(view) = weak_ref.upgrade() {
                    let buffer = view.buffer();
                    let mut end = buffer.end_iter();

                    buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

                    // Auto-scroll
                    let mark = buffer.create_mark(None, &buffer.end_iter(), false);
                    view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
                    buffer.delete_mark(&mark);
                }
            }
        });
    }

    fn flush(&self) {}
}
