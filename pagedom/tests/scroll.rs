use pagedom::{Frame, Line, ScrollState};

fn frame(rows: usize) -> Frame {
    Frame {
        lines: (0..rows)
            .map(|i| Line {
                target: Some(format!("row{}", i)),
                spans: vec![],
            })
            .collect(),
        cursor: None,
    }
}

// ============================================================================
// ScrollState
// ============================================================================

#[test]
fn test_scroll_by_clamps() {
    let mut scroll = ScrollState::new();
    scroll.fit(10, 4);

    assert!(scroll.scroll_by(3));
    assert_eq!(scroll.offset(), 3);

    assert!(scroll.scroll_by(100));
    assert_eq!(scroll.offset(), 6);
    assert!(!scroll.scroll_by(1));

    assert!(scroll.scroll_by(-100));
    assert_eq!(scroll.offset(), 0);
    assert!(!scroll.scroll_by(-1));
}

#[test]
fn test_content_shorter_than_viewport_never_scrolls() {
    let mut scroll = ScrollState::new();
    scroll.fit(3, 24);
    assert!(!scroll.scroll_by(1));
    scroll.scroll_into_view(2);
    assert_eq!(scroll.offset(), 0);
}

#[test]
fn test_scroll_into_view_moves_least_distance() {
    let mut scroll = ScrollState::new();
    scroll.fit(20, 5);

    scroll.scroll_into_view(7);
    assert_eq!(scroll.offset(), 3);

    // Already visible
    scroll.scroll_into_view(5);
    assert_eq!(scroll.offset(), 3);

    scroll.scroll_into_view(1);
    assert_eq!(scroll.offset(), 1);
}

#[test]
fn test_fit_clamps_after_shrink() {
    let mut scroll = ScrollState::new();
    scroll.fit(20, 5);
    scroll.scroll_by(15);
    assert_eq!(scroll.offset(), 15);

    // Content got shorter
    scroll.fit(8, 5);
    assert_eq!(scroll.offset(), 3);

    scroll.reset();
    assert_eq!(scroll.offset(), 0);
}

// ============================================================================
// Frame viewport
// ============================================================================

#[test]
fn test_viewport_slices_rows() {
    let view = frame(10).viewport(4, 3);
    assert_eq!(view.lines.len(), 3);
    assert_eq!(view.target_at(0), Some("row4"));
    assert_eq!(view.target_at(2), Some("row6"));
    assert_eq!(view.target_at(3), None);
}

#[test]
fn test_viewport_moves_cursor() {
    let mut full = frame(10);
    full.cursor = Some((5, 6));

    assert_eq!(full.viewport(4, 3).cursor, Some((5, 2)));
    assert_eq!(full.viewport(0, 3).cursor, None);
    assert_eq!(full.viewport(7, 3).cursor, None);
}

#[test]
fn test_row_of() {
    let full = frame(5);
    assert_eq!(full.row_of("row3"), Some(3));
    assert_eq!(full.row_of("missing"), None);
}
