//! Integration test: shipped map file, config-driven loading, and link resolution
//! against a map assembled from several files.

use docmap_core::config::{self, DocmapConfig};
use docmap_core::registry::{MapError, UrlMap};
use docmap_core::xref;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn shipped_map() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("urlmap.toml")
}

#[test]
fn shipped_data_file_matches_builtin_table() {
    let map = UrlMap::load_from_path(&shipped_map()).unwrap();
    assert_eq!(map, UrlMap::builtin());
}

#[test]
fn config_file_map_files_are_loaded_in_order() {
    let dir = tempdir().unwrap();
    let gtk = dir.path().join("gtk.toml");
    std::fs::write(
        &gtk,
        r#"
        [[namespace]]
        name = "Gtk"
        url = "https://docs.gtk.org/gtk4/"
        "#,
    )
    .unwrap();
    let pango = dir.path().join("pango.toml");
    std::fs::write(
        &pango,
        r#"
        [[namespace]]
        name = "Pango"
        url = "https://docs.gtk.org/Pango/"
        "#,
    )
    .unwrap();

    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        format!("map_files = [{:?}]\n", gtk.display().to_string()),
    )
    .unwrap();
    let cfg: DocmapConfig = config::load_or_init_at(&cfg_path).unwrap();

    let map = cfg.build_map(&[pango], false).unwrap();
    let names: Vec<&str> = map.namespaces().collect();
    assert_eq!(names, ["GLib", "GLibUnix", "GObject", "Gio", "Gtk", "Pango"]);

    assert_eq!(
        xref::resolve(&map, "class@Gtk.Widget").unwrap().as_deref(),
        Some("https://docs.gtk.org/gtk4/class.Widget.html")
    );
    assert_eq!(
        xref::resolve(&map, "method@Gio.File.read").unwrap().as_deref(),
        Some("https://docs.gtk.org/gio/method.File.read.html")
    );
    assert_eq!(xref::resolve(&map, "class@Adw.Window").unwrap(), None);
}

#[test]
fn same_namespace_in_two_files_is_rejected() {
    let dir = tempdir().unwrap();
    let body = r#"
        [[namespace]]
        name = "Gtk"
        url = "https://docs.gtk.org/gtk4/"
    "#;
    let a = dir.path().join("a.toml");
    let b = dir.path().join("b.toml");
    std::fs::write(&a, body).unwrap();
    std::fs::write(&b, body).unwrap();

    let err = UrlMap::load(false, &[a, b]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<MapError>(),
        Some(&MapError::DuplicateNamespace("Gtk".to_string()))
    );
}
