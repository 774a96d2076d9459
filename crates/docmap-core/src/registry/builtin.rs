//! Namespaces known out of the box.

/// Base URLs for the GLib family, in declaration order.
pub const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("GLib", "https://docs.gtk.org/glib/"),
    ("GLibUnix", "https://docs.gtk.org/glib-unix/"),
    ("GObject", "https://docs.gtk.org/gobject/"),
    ("Gio", "https://docs.gtk.org/gio/"),
];
