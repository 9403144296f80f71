//! Tests for TUI key handling and rendering.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe::tui::{app::App, ui};
use tictactoe::{Cell, GameResult, Mark, Position, ThemeConfig};

fn app() -> App {
    App::new(ThemeConfig::default().palette().unwrap())
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key);
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_enter_places_mark_at_cursor() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(
        app.engine().board().get(Position::Center),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_arrows_then_space() {
    let mut app = app();
    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Char(' ')]);
    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(
        app.engine().board().get(Position::TopLeft),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_digits_play_a_game() {
    let mut app = app();
    press(
        &mut app,
        &['1', '4', '2', '5', '3'].map(KeyCode::Char),
    );
    assert_eq!(app.engine().result(), GameResult::Win(Mark::X));
}

#[test]
fn test_repeated_key_on_occupied_cell_is_harmless() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);
    assert_eq!(app.engine().turn(), Mark::O);
    assert_eq!(app.engine().board().count(Mark::X), 1);
    assert_eq!(app.engine().board().count(Mark::O), 0);
}

#[test]
fn test_restart_and_quit() {
    let mut app = app();
    press(&mut app, &['1', '4', '2', '5', '3'].map(KeyCode::Char));
    press(&mut app, &[KeyCode::Char('r')]);
    assert_eq!(app.engine().result(), GameResult::InProgress);
    assert_eq!(app.engine().turn(), Mark::X);
    assert_eq!(app.cursor(), Position::Center);
    assert!(!app.should_quit());

    press(&mut app, &[KeyCode::Esc]);
    assert!(app.should_quit());
}

#[test]
fn test_screen_shows_status() {
    let mut app = app();
    assert!(screen(&app).contains("Next turn: X"));

    press(&mut app, &['1', '4', '2', '5', '3'].map(KeyCode::Char));
    assert!(screen(&app).contains("Player X wins!"));
}
