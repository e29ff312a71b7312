use super::{Tone, connectivity_panel, welcome_panel};
use crate::domain::ConnectivityResult;
use std::path::PathBuf;

#[test]
fn passing_check_renders_pass_token_in_success_tone() {
    let result = ConnectivityResult::passed(PathBuf::from("/cfg/wealth-planner/wealth.db"));
    let panel = connectivity_panel(&result);

    assert_eq!(panel.lines[2].text, "Database check: PASS");
    assert_eq!(panel.lines[2].tone, Tone::Success);
    assert_eq!(panel.lines[3].text, "Database ready");
}

#[test]
fn failing_check_renders_fail_token_in_warning_tone() {
    let result = ConnectivityResult::failed(
        PathBuf::from("/cfg/wealth-planner/wealth.db"),
        "Filesystem error: permission denied",
    );
    let panel = connectivity_panel(&result);

    assert_eq!(panel.lines[2].text, "Database check: FAIL");
    assert_eq!(panel.lines[2].tone, Tone::Warning);
    assert_eq!(panel.lines[3].text, "Filesystem error: permission denied");
}

#[test]
fn connectivity_panel_line_order_is_fixed() {
    let result = ConnectivityResult::passed(PathBuf::from("/cfg/wealth-planner/wealth.db"));
    let panel = connectivity_panel(&result);

    let tones: Vec<Tone> = panel.lines.iter().map(|line| line.tone).collect();
    assert_eq!(
        tones,
        vec![
            Tone::Title,
            Tone::Separator,
            Tone::Success,
            Tone::Plain,
            Tone::Plain,
            Tone::Hint,
        ]
    );
    assert_eq!(panel.lines[0].text, "Wealth Planner");
    assert_eq!(panel.lines[4].text, "/cfg/wealth-planner/wealth.db");
    assert_eq!(panel.lines[5].text, "Press q to quit");
}

#[test]
fn welcome_panel_has_no_check_line() {
    let panel = welcome_panel();

    assert_eq!(panel.height(), 4);
    assert_eq!(panel.lines[0].text, "Wealth Planner");
    assert_eq!(panel.lines[2].text, "Welcome to Wealth Planner");
    assert!(
        panel
            .lines
            .iter()
            .all(|line| !matches!(line.tone, Tone::Success | Tone::Warning))
    );
}

#[test]
fn panel_width_is_widest_line() {
    let panel = welcome_panel();
    assert_eq!(panel.width(), "Welcome to Wealth Planner".len());
}
