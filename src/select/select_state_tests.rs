//! Tests for MultiSelect state

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::*;
use crate::config::InputConfig;
use crate::select::{FocusPhase, Highlight};
use crate::test_utils::test_helpers::{TEST_POOL, select_with_chips, test_select, test_select_with};

const GRACE: Duration = Duration::from_millis(200);
const TEN_MATCHES: &[&str] = &["a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9"];

#[test]
fn test_initial_state() {
    let select = test_select(TEST_POOL);
    assert_eq!(select.query(), "");
    assert!(select.selected().is_empty());
    assert!(!select.is_focused());
    assert_eq!(select.highlighted(), None);
    assert!(!select.is_dropdown_visible());
    assert!(!select.is_blur_pending());
}

#[test]
fn test_typing_filters_case_insensitively() {
    let mut select = test_select(&["Anupam", "Aditya", "Test"]);
    select.focus();
    select.insert_text("a");

    assert_eq!(select.filtered_suggestions(), vec!["Anupam", "Aditya"]);
    assert!(select.is_dropdown_visible());
}

#[test]
fn test_select_suggestion_scenario() {
    let mut select = test_select(&["Anupam", "Aditya", "Test"]);
    select.focus();
    select.insert_text("a");
    select.select_suggestion("Aditya");

    assert_eq!(select.selected(), ["Aditya"]);
    assert_eq!(select.query(), "");
    assert!(!select.filtered_suggestions().contains(&"Aditya"));
}

#[test]
fn test_select_suggestion_appends_in_order() {
    let select = select_with_chips(TEST_POOL, &["Test", "Anupam", "New"]);
    assert_eq!(select.selected(), ["Test", "Anupam", "New"]);
}

#[test]
fn test_select_suggestion_accepts_items_outside_the_pool() {
    let mut select = test_select(&["Anupam"]);
    select.select_suggestion("Elsewhere");
    select.select_suggestion("Elsewhere");
    assert_eq!(select.selected(), ["Elsewhere", "Elsewhere"]);
}

#[test]
fn test_dropdown_hidden_when_unfocused() {
    let mut select = test_select(TEST_POOL);
    select.insert_text("a");
    assert!(!select.filtered_suggestions().is_empty());
    assert!(!select.is_dropdown_visible());
}

#[test]
fn test_dropdown_hidden_with_empty_query() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    assert!(!select.filtered_suggestions().is_empty());
    assert!(!select.is_dropdown_visible());
}

#[test]
fn test_dropdown_hidden_without_matches() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.insert_text("qqq");
    assert!(!select.is_dropdown_visible());
}

#[test]
fn test_dropdown_never_shows_for_empty_pool() {
    let mut select = test_select(&[]);
    select.focus();
    select.insert_text("a");
    assert!(!select.is_dropdown_visible());
}

#[test]
fn test_delete_chip_shifts_later_chips() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam", "Aditya", "Test"]);
    select.click_chip(2);

    assert_eq!(select.delete_chip(1), Some("Aditya".to_string()));
    assert_eq!(select.selected(), ["Anupam", "Test"]);
    assert_eq!(select.highlighted(), None);
}

#[test]
fn test_delete_chip_out_of_range_is_noop() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam"]);
    select.click_chip(0);

    assert_eq!(select.delete_chip(5), None);
    assert_eq!(select.selected(), ["Anupam"]);
    assert_eq!(select.highlighted(), Some(0));
}

#[test]
fn test_backspace_twice_deletes_last_chip() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam", "Aditya"]);

    select.backspace();
    assert_eq!(select.highlighted(), Some(1));
    assert_eq!(select.selected(), ["Anupam", "Aditya"]);

    select.backspace();
    assert_eq!(select.selected(), ["Anupam"]);
    assert_eq!(select.highlighted(), None);
}

#[test]
fn test_backspace_with_text_deletes_a_character() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam"]);
    select.insert_text("Te");

    select.backspace();
    assert_eq!(select.query(), "T");
    assert_eq!(select.selected(), ["Anupam"]);
    assert_eq!(select.highlighted(), None);
}

#[test]
fn test_backspace_on_empty_selection_does_nothing() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.backspace();
    assert_eq!(select.highlighted(), None);
    assert!(select.selected().is_empty());
}

#[test]
fn test_typing_clears_highlight_without_deleting() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam", "Aditya"]);
    select.backspace();
    assert_eq!(select.highlighted(), Some(1));

    select.insert_text("z");
    assert_eq!(select.highlighted(), None);
    assert_eq!(select.selected(), ["Anupam", "Aditya"]);
}

#[test]
fn test_click_chip_highlights_and_backspace_deletes_it() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam", "Aditya", "Test"]);
    assert!(select.click_chip(0));
    assert_eq!(select.highlighted(), Some(0));

    select.backspace();
    assert_eq!(select.selected(), ["Aditya", "Test"]);
    assert_eq!(select.highlighted(), None);
}

#[test]
fn test_click_chip_out_of_range() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam"]);
    assert!(!select.click_chip(1));
    assert_eq!(select.highlighted(), None);
}

#[test]
fn test_click_chip_focuses_field() {
    let mut select = test_select(TEST_POOL);
    select.select_suggestion("Anupam");
    assert!(!select.is_focused());

    select.click_chip(0);
    assert!(select.is_focused());
}

#[test]
fn test_blur_keeps_dropdown_during_grace_period() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.insert_text("a");
    let now = Instant::now();

    select.blur(now);
    assert_eq!(select.interaction().focus, FocusPhase::BlurPending);
    assert!(select.is_dropdown_visible());
    assert!(!select.tick(now + Duration::from_millis(100)));
    assert!(select.is_dropdown_visible());
}

#[test]
fn test_blur_clears_focus_and_highlight_after_grace() {
    let mut select = select_with_chips(TEST_POOL, &["Anupam"]);
    select.click_chip(0);
    let now = Instant::now();

    select.blur(now);
    assert_eq!(select.highlighted(), Some(0));
    assert!(select.tick(now + GRACE));

    assert!(!select.is_focused());
    assert_eq!(select.highlighted(), None);
    assert_eq!(select.interaction().highlight, Highlight::Idle);
}

#[test]
fn test_suggestion_press_during_grace_period_selects() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.insert_text("zep");
    let now = Instant::now();

    select.blur(now);
    assert!(select.press_suggestion(0));
    select.release_pointer();

    assert_eq!(select.selected(), ["Zepto"]);
    select.tick(now + GRACE);
    assert!(!select.is_focused());
}

#[test]
fn test_blur_while_pointer_held_waits_for_release() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.insert_text("a");
    let now = Instant::now();

    assert!(select.press_suggestion(1));
    select.blur(now);
    assert!(!select.tick(now + GRACE * 5));
    assert!(select.is_focused());

    select.release_pointer();
    assert!(!select.is_focused());
    assert_eq!(select.selected(), ["Aditya"]);
}

#[test]
fn test_focus_cancels_pending_blur() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    let now = Instant::now();

    select.blur(now);
    assert!(select.is_blur_pending());
    select.focus();
    assert!(!select.is_blur_pending());
    assert!(!select.tick(now + GRACE));
    assert!(select.is_focused());
}

#[test]
fn test_zero_grace_blurs_immediately() {
    let config = InputConfig {
        blur_grace_ms: 0,
        ..InputConfig::default()
    };
    let mut select = test_select_with(TEST_POOL, &config);
    select.focus();
    select.blur(Instant::now());
    assert!(!select.is_focused());
}

#[test]
fn test_next_deadline_reports_remaining_grace() {
    let mut select = test_select(TEST_POOL);
    let now = Instant::now();
    assert_eq!(select.next_deadline(now), None);

    select.focus();
    select.blur(now);
    assert_eq!(select.next_deadline(now), Some(GRACE));
    assert_eq!(
        select.next_deadline(now + Duration::from_millis(150)),
        Some(Duration::from_millis(50))
    );
}

#[test]
fn test_blur_when_unfocused_schedules_nothing() {
    let mut select = test_select(TEST_POOL);
    select.blur(Instant::now());
    assert!(!select.is_blur_pending());
}

#[test]
fn test_press_suggestion_requires_visible_dropdown() {
    let mut select = test_select(TEST_POOL);
    select.insert_text("a");
    assert!(!select.press_suggestion(0));
    assert!(select.selected().is_empty());
}

#[test]
fn test_press_suggestion_out_of_range() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.insert_text("zep");
    assert!(!select.press_suggestion(3));
    assert!(select.selected().is_empty());
}

#[test]
fn test_active_suggestion_navigation_is_clamped() {
    let mut select = test_select(&["Anupam", "Aditya", "Test"]);
    select.focus();
    select.insert_text("a");

    assert_eq!(select.active_suggestion(), 0);
    select.move_active_up();
    assert_eq!(select.active_suggestion(), 0);
    select.move_active_down();
    assert_eq!(select.active_suggestion(), 1);
    select.move_active_down();
    assert_eq!(select.active_suggestion(), 1);
}

#[test]
fn test_active_suggestion_limited_to_visible_rows() {
    let config = InputConfig {
        max_visible_suggestions: 2,
        ..InputConfig::default()
    };
    let mut select = test_select_with(TEST_POOL, &config);
    select.focus();
    select.insert_text("a");
    assert_eq!(select.filtered_suggestions().len(), 3);

    for _ in 0..5 {
        select.move_active_down();
    }
    assert_eq!(select.active_suggestion(), 1);
}

#[test]
fn test_select_active_picks_active_row() {
    let mut select = test_select(&["Anupam", "Aditya", "Test"]);
    select.focus();
    select.insert_text("a");
    select.move_active_down();

    assert!(select.select_active());
    assert_eq!(select.selected(), ["Aditya"]);
    assert_eq!(select.active_suggestion(), 0);
}

#[test]
fn test_select_active_with_hidden_dropdown() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    assert!(!select.select_active());
}

#[test]
fn test_query_edit_resets_active_suggestion() {
    let mut select = test_select(&["Anupam", "Aditya", "Assignment"]);
    select.focus();
    select.insert_text("a");
    select.move_active_down();
    select.move_active_down();
    assert_eq!(select.active_suggestion(), 2);

    select.insert_text("d");
    assert_eq!(select.active_suggestion(), 0);
}

#[test]
fn test_selection_hook_sees_every_change() {
    let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut select = test_select(TEST_POOL);
    select.set_on_selection_change(move |selected| sink.borrow_mut().push(selected.to_vec()));
    select.focus();

    select.select_suggestion("Anupam");
    select.select_suggestion("Test");
    select.backspace();
    select.backspace();
    select.delete_chip(7);
    select.delete_chip(0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], ["Anupam"]);
    assert_eq!(seen[1], ["Anupam", "Test"]);
    assert_eq!(seen[2], ["Anupam"]);
    assert!(seen[3].is_empty());
}

#[test]
fn test_into_selected_returns_selection() {
    let mut select = select_with_chips(TEST_POOL, &["New", "Zepto"]);
    select.blur(Instant::now());
    assert!(select.is_blur_pending());

    assert_eq!(select.into_selected(), vec!["New".to_string(), "Zepto".to_string()]);
}

#[test]
fn test_keyboard_reaches_matches_past_visible_rows() {
    let mut select = test_select(TEN_MATCHES);
    select.focus();
    select.insert_text("a");
    assert_eq!(select.visible_suggestions(), 0..8);

    for _ in 0..20 {
        select.move_active_down();
    }
    assert_eq!(select.active_suggestion(), 9);
    assert_eq!(select.visible_suggestions(), 2..10);

    assert!(select.select_active());
    assert_eq!(select.selected(), ["a9"]);
}

#[test]
fn test_moving_up_scrolls_window_back() {
    let mut select = test_select(TEN_MATCHES);
    select.focus();
    select.insert_text("a");
    for _ in 0..9 {
        select.move_active_down();
    }

    for _ in 0..7 {
        select.move_active_up();
    }
    assert_eq!(select.active_suggestion(), 2);
    assert_eq!(select.visible_suggestions(), 2..10);

    select.move_active_up();
    assert_eq!(select.visible_suggestions(), 1..9);
}

#[test]
fn test_query_edit_resets_dropdown_scroll() {
    let mut select = test_select(TEN_MATCHES);
    select.focus();
    select.insert_text("a");
    for _ in 0..9 {
        select.move_active_down();
    }

    select.backspace();
    select.insert_text("a");
    assert_eq!(select.active_suggestion(), 0);
    assert_eq!(select.visible_suggestions(), 0..8);
}

#[test]
fn test_stale_pointer_guard_no_longer_parks_blur() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.insert_text("a");
    let now = Instant::now();

    assert!(select.press_suggestion(0));
    select.drop_stale_pointer();
    select.blur(now);
    assert!(select.tick(now + GRACE));
    assert!(!select.is_focused());
}

#[test]
fn test_dropping_stale_pointer_settles_parked_blur() {
    let mut select = test_select(TEST_POOL);
    select.focus();
    select.insert_text("a");
    let now = Instant::now();

    assert!(select.press_suggestion(0));
    select.blur(now);
    assert!(select.is_blur_pending());

    select.drop_stale_pointer();
    assert!(!select.is_focused());
    assert!(!select.is_blur_pending());
}
