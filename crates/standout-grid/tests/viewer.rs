//! Viewer loop driven by scripted keys and a capturing screen.

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;

use standout_grid::{
    visible_window, Action, BorderStyle, Column, KeySource, NavKey, Screen, ScrollViewer, Table,
    TableError, TableStyle, ViewerConfig, ViewerStatus,
};

/// Replays keys, then quits.
struct ScriptedKeys(VecDeque<NavKey>);

impl ScriptedKeys {
    fn new(keys: impl IntoIterator<Item = NavKey>) -> Self {
        ScriptedKeys(keys.into_iter().collect())
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<NavKey> {
        Ok(self.0.pop_front().unwrap_or(NavKey::Quit))
    }
}

struct FailingKeys;

impl KeySource for FailingKeys {
    fn read_key(&mut self) -> io::Result<NavKey> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}

/// Records frames; reports widths from a list, repeating the last one.
struct CaptureScreen {
    widths: Vec<Option<usize>>,
    calls: Cell<usize>,
    frames: Vec<String>,
}

impl CaptureScreen {
    fn fixed(width: usize) -> Self {
        Self::sequence(vec![Some(width)])
    }

    fn sequence(widths: Vec<Option<usize>>) -> Self {
        CaptureScreen {
            widths,
            calls: Cell::new(0),
            frames: Vec::new(),
        }
    }
}

impl Screen for CaptureScreen {
    fn width(&self) -> Option<usize> {
        let i = self.calls.get().min(self.widths.len() - 1);
        self.calls.set(self.calls.get() + 1);
        self.widths[i]
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }
}

fn demo_table(columns: usize) -> Table {
    let mut table = Table::new(TableStyle::new(BorderStyle::Light).horizontal_lines(true));
    for i in 1..=columns {
        table.add_column(Column::new(format!("Column_{}", i)).center().max_width(10));
    }
    let rows: Vec<Vec<String>> = (0..5)
        .map(|r| (1..=columns).map(|c| format!("Data_{}_{}", r, c)).collect())
        .collect();
    table.add_rows(rows).unwrap();
    table
}

#[test]
fn first_frame_shows_columns_that_fit() {
    let table = demo_table(39);
    let mut screen = CaptureScreen::fixed(80);
    let keys = ScriptedKeys::new([NavKey::Quit]);
    let mut viewer = ScrollViewer::new(&table, &mut screen, keys);

    let (window, _) = viewer.frame();
    assert_eq!(window.start, 0);
    assert_eq!(window.len, 6);

    // One more column would not have fit.
    let config = ViewerConfig::default();
    let seventh = 1 + 7 * (10 + config.per_column_overhead);
    assert!(seventh >= 80);

    viewer.run().unwrap();
    drop(viewer);

    let first = &screen.frames[0];
    assert!(first.starts_with("Columns 1-6 of 39"));
    assert!(first.contains("Column_6"));
    assert!(!first.contains("Column_7"));
    assert!(first.ends_with("Last action: ready"));
}

#[test]
fn scrolling_right_stops_at_the_last_column() {
    let table = demo_table(39);
    let mut screen = CaptureScreen::fixed(80);
    let keys = ScriptedKeys::new(std::iter::repeat_n(NavKey::Right, 40));
    let mut viewer = ScrollViewer::new(&table, &mut screen, keys);
    viewer.run().unwrap();

    assert_eq!(viewer.state().start_column(), 33);
    assert_eq!(viewer.state().last_action(), Action::Quit);
    drop(viewer);

    // 40 right presses plus the quit frame
    assert_eq!(screen.frames.len(), 41);
    assert!(screen.frames[33].starts_with("Columns 34-39 of 39"));
    assert!(screen.frames[34].ends_with("Last action: end reached"));
    assert!(screen.frames[40].contains("Column_39"));
}

#[test]
fn window_invariants_hold_while_scrolling() {
    let table = demo_table(39);
    let config = ViewerConfig::default();
    let mut screen = CaptureScreen::fixed(50);
    let keys = ScriptedKeys::new(
        std::iter::repeat_n(NavKey::Right, 45).chain(std::iter::repeat_n(NavKey::Left, 45)),
    );
    let mut viewer = ScrollViewer::new(&table, &mut screen, keys).config(config);

    loop {
        let (window, _) = viewer.frame();
        assert!(!window.is_empty());
        assert!(window.end() <= 39);
        assert_eq!(window.start, viewer.state().start_column());
        if viewer.step().unwrap() == ViewerStatus::Exited {
            break;
        }
    }
    assert_eq!(viewer.state().start_column(), 0);
    assert_eq!(viewer.state().last_action(), Action::Quit);
}

#[test]
fn left_at_start_and_unknown_keys_do_not_move() {
    let table = demo_table(10);
    let mut screen = CaptureScreen::fixed(80);
    let keys = ScriptedKeys::new([NavKey::Left, NavKey::None]);
    let mut viewer = ScrollViewer::new(&table, &mut screen, keys);
    viewer.run().unwrap();
    assert_eq!(viewer.state().start_column(), 0);
    drop(viewer);

    assert!(screen.frames[1].ends_with("Last action: already at start"));
    assert!(screen.frames[2].ends_with("Last action: ignored"));
}

#[test]
fn resize_is_honored_on_the_next_frame() {
    let table = demo_table(39);
    let mut screen = CaptureScreen::sequence(vec![Some(80), Some(160), Some(30)]);
    let keys = ScriptedKeys::new([NavKey::None, NavKey::None]);
    ScrollViewer::new(&table, &mut screen, keys).run().unwrap();

    assert!(screen.frames[0].starts_with("Columns 1-6 of 39"));
    assert!(screen.frames[1].starts_with("Columns 1-12 of 39"));
    assert!(screen.frames[2].starts_with("Columns 1-2 of 39"));
}

#[test]
fn missing_width_uses_fallback() {
    let table = demo_table(39);
    let config = ViewerConfig::default().fallback_width(40);
    let mut screen = CaptureScreen::sequence(vec![None]);
    let keys = ScriptedKeys::new([NavKey::Quit]);
    let viewer = ScrollViewer::new(&table, &mut screen, keys).config(config);

    assert_eq!(viewer.terminal_width(), 40);
    let (window, _) = viewer.frame();
    assert_eq!(
        window,
        visible_window(table.columns(), 0, 40, &ViewerConfig::default())
    );
}

#[test]
fn narrow_terminal_still_shows_one_column() {
    let table = demo_table(3);
    let mut screen = CaptureScreen::fixed(4);
    let keys = ScriptedKeys::new([NavKey::Right, NavKey::Right, NavKey::Right]);
    let mut viewer = ScrollViewer::new(&table, &mut screen, keys);
    viewer.run().unwrap();
    assert_eq!(viewer.state().start_column(), 2);
    drop(viewer);

    assert!(screen.frames.iter().all(|f| f.contains("Column_")));
    assert!(screen.frames[3].ends_with("Last action: end reached"));
}

#[test]
fn empty_table_frame() {
    let table = Table::default();
    let mut screen = CaptureScreen::fixed(80);
    let keys = ScriptedKeys::new([NavKey::Right]);
    let mut viewer = ScrollViewer::new(&table, &mut screen, keys);
    viewer.run().unwrap();
    assert_eq!(viewer.state().start_column(), 0);
    drop(viewer);

    assert!(screen.frames[0].starts_with("No columns"));
}

#[test]
fn key_errors_propagate() {
    let table = demo_table(3);
    let mut screen = CaptureScreen::fixed(80);
    let err = ScrollViewer::new(&table, &mut screen, FailingKeys)
        .run()
        .unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
    assert_eq!(screen.frames.len(), 1);
}
