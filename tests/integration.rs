// SPDX-License-Identifier: MPL-2.0
use binqr::bin_list::{render, BinListController};
use binqr::config::{self, Config};
use binqr::error::{BinListError, EmptyOperation};
use binqr::i18n::fluent::I18n;
use binqr::print::{self, PrintCommand, PrintJob, PrintLayout, PrintSheet, FILE_PLACEHOLDER};
use binqr::qr::QrRenderer;
use tempfile::tempdir;

fn list_of(inputs: &[&str]) -> BinListController {
    let mut list = BinListController::new();
    for input in inputs {
        list.add(input).expect("valid BIN input");
    }
    list
}

fn identifiers(list: &BinListController) -> Vec<&str> {
    list.entries().iter().map(|bin| bin.as_str()).collect()
}

#[test]
fn inputs_without_digits_are_rejected() {
    let mut list = list_of(&["1"]);
    for input in ["", "abc", "   "] {
        assert_eq!(list.add(input), Err(BinListError::Validation));
    }
    assert_eq!(identifiers(&list), vec!["BIN1"]);
}

#[test]
fn add_strips_non_digits_and_prefixes() {
    let mut list = BinListController::new();
    let bin = list.add("4111 1111").expect("digits present");
    assert_eq!(bin.as_str(), "BIN41111111");
    assert_eq!(list.len(), 1);
}

#[test]
fn adds_keep_call_order_and_duplicates() {
    let list = list_of(&["3", "1", "2", "1"]);
    assert_eq!(identifiers(&list), vec!["BIN3", "BIN1", "BIN2", "BIN1"]);
}

#[test]
fn remove_shifts_only_later_entries() {
    let mut list = list_of(&["10", "20", "30", "40"]);
    let removed = list.remove(1).expect("index in range");
    assert_eq!(removed.as_str(), "BIN20");
    assert_eq!(identifiers(&list), vec!["BIN10", "BIN30", "BIN40"]);
}

#[test]
fn clear_is_two_phase() {
    let mut empty = BinListController::new();
    assert_eq!(
        empty.request_clear(),
        Err(BinListError::EmptyState(EmptyOperation::Clear))
    );
    assert!(empty.is_empty());

    let mut list = list_of(&["1", "2"]);
    list.request_clear().expect("list has entries");
    assert_eq!(list.len(), 2);
    assert_eq!(list.confirm_clear(), Some(2));
    assert!(list.is_empty());
}

#[test]
fn print_capture_matches_rendered_pixels() {
    let renderer = QrRenderer::default();

    let empty = BinListController::new();
    assert_eq!(
        PrintSheet::capture(&empty, &render(&empty, &renderer)),
        Err(BinListError::EmptyState(EmptyOperation::Print))
    );

    let list = list_of(&["4111", "5500", "4111"]);
    let view = render(&list, &renderer);
    let sheet = PrintSheet::capture(&list, &view).expect("list has entries");

    assert_eq!(sheet.len(), list.len());
    for (item, card) in sheet.items().iter().zip(view.cards()) {
        assert_eq!(item.payload, card.bin.as_str());
        assert_eq!(item.label, card.label);
        let drawn = card.snapshot().expect("BIN payloads always encode");
        assert_eq!(item.snapshot.pixels(), drawn.pixels());
    }
    assert_eq!(identifiers(&list), vec!["BIN4111", "BIN5500", "BIN4111"]);
}

#[test]
fn rendering_is_deterministic() {
    let renderer = QrRenderer::default();
    let list = list_of(&["4111", "5500"]);
    assert_eq!(render(&list, &renderer), render(&list, &renderer));
}

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let (_, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
}

#[test]
fn corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[qr\nwidth = ")
        .expect("Failed to write config file");

    let (cfg, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(cfg, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[cfg(unix)]
#[tokio::test]
async fn print_job_runs_once_per_page_and_removes_spool() {
    let spool_root = tempdir().expect("Failed to create temporary directory");
    let inputs: Vec<String> = (0..25).map(|i| format!("4111{i:04}")).collect();
    let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
    let list = list_of(&inputs);
    let view = render(&list, &QrRenderer::default());

    let job = PrintJob {
        sheet: PrintSheet::capture(&list, &view).expect("list has entries"),
        layout: PrintLayout::default(),
        command: PrintCommand {
            program: "true".to_string(),
            args: vec![FILE_PLACEHOLDER.to_string()],
        },
        spool_root: spool_root.path().to_path_buf(),
        cleanup_delay: None,
    };

    let receipt = print::submit(job).await.expect("print command succeeds");
    assert_eq!(receipt.items, 25);
    assert_eq!(receipt.pages, 2);
    assert_eq!(
        std::fs::read_dir(spool_root.path())
            .expect("spool root exists")
            .count(),
        0
    );
}
