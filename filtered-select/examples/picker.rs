//! Terminal host for the filtered select widget.
//!
//! Drives the headless controls from a raw-mode crossterm event loop:
//! - Enter or Space on the closed control "clicks" the decoy box, which
//!   opens the dropdown and hands focus to the filter box
//! - typing filters the list; Down hands the keyboard to the list box
//! - Up/Down move the list highlight, Enter commits
//! - Esc backs out one focus level, q quits from the closed state

use std::io::{Write, stdout};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use filtered_select::prelude::*;
use futures::StreamExt;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// The sample option set: family members plus nickname records reusing the
// person's id.
const OPTIONS_JSON: &str = r#"[
    { "text": "Tim", "id": "TP", "group": "Parents" },
    { "text": "Ben", "id": "BP", "group": "Parents" },
    { "text": "Katie", "id": "KP", "group": "Parents" },
    { "text": "John", "id": "JP", "group": "Grandparents" },
    { "text": "Sue", "id": "SP", "group": "Grandparents" },
    { "text": "Sarah", "id": "SR", "group": "Parents" },
    { "text": "Claire", "id": "CB", "group": "Parents" },
    { "text": "Drew", "id": "AM", "group": "Parents" },
    { "text": "Molly", "id": "MP", "group": "Kids" },
    { "text": "Lucy", "id": "LP", "group": "Kids" },
    { "text": "Jess", "id": "JP2", "group": "Kids" },
    { "text": "George", "id": "GP", "group": "Kids" },
    { "text": "Daisy", "id": "DM", "group": "Kids" },
    { "text": "Benny", "id": "BP", "group": "Nicknames" },
    { "text": "Timbo", "id": "TP", "group": "Nicknames" },
    { "text": "Richo", "id": "SR", "group": "Nicknames" }
]"#;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let log_file = std::fs::File::create("picker.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    let options: Vec<SelectOption> =
        serde_json::from_str(OPTIONS_JSON).expect("embedded option set parses");
    let select = FilteredSelect::new(
        options,
        SelectConfig {
            grouped: true,
            ..SelectConfig::default()
        },
    )
    .expect("headless controls are complete");

    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let result = run(&select).await;
    execute!(stdout(), LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

async fn run(select: &FilteredSelect) -> std::io::Result<()> {
    let mut events = EventStream::new();
    // The debounce and focus timers fire between input events, so redraw on
    // a short interval rather than only per event.
    let mut redraw = tokio::time::interval(Duration::from_millis(50));
    loop {
        tokio::select! {
            _ = redraw.tick() => {}
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if !handle_key(select, key) {
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err),
                None => return Ok(()),
            },
        }
        draw(select)?;
    }
}

/// Route a terminal key to the control that currently has focus. Returns
/// `false` to quit.
fn handle_key(select: &FilteredSelect, key: KeyEvent) -> bool {
    match (select.focus().current(), key.code) {
        (Some(_), KeyCode::Esc) => {
            select.focus().blur_all();
            true
        }
        (None, KeyCode::Esc | KeyCode::Char('q')) => false,
        (None | Some(ControlId::FakeInput), KeyCode::Enter | KeyCode::Char(' ')) => {
            select.fake_input().emit_click();
            true
        }
        (Some(ControlId::FilterInput), KeyCode::Char(c)) => {
            select.filter_input().type_char(c);
            true
        }
        (Some(ControlId::FilterInput), KeyCode::Backspace) => {
            select.filter_input().backspace();
            true
        }
        (Some(ControlId::FilterInput), KeyCode::Down | KeyCode::Enter) => {
            select.filter_input().emit_key_up(key.code);
            true
        }
        (Some(ControlId::SelectBox), KeyCode::Up) => {
            select.select_box().highlight_prev();
            true
        }
        (Some(ControlId::SelectBox), KeyCode::Down) => {
            select.select_box().highlight_next();
            true
        }
        (Some(ControlId::SelectBox), KeyCode::Enter) => {
            select.select_box().emit_key_up(KeyCode::Enter);
            true
        }
        _ => true,
    }
}

fn draw(select: &FilteredSelect) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        Print("picker - Enter/Space opens, type to filter, Esc backs out, q quits")
    )?;

    if !select.active().get() {
        let chosen = select.chosen_text().get();
        let display = if chosen.is_empty() {
            "(choose a person)".to_string()
        } else {
            chosen
        };
        queue!(out, MoveTo(0, 2), Print(format!("[ {display} ]")))?;
        return out.flush();
    }

    queue!(
        out,
        MoveTo(0, 2),
        Print(format!("filter: {}_", select.filter_input().value()))
    )?;

    let highlighted = select.select_box().highlighted();
    let mut row: u16 = 4;
    let mut index = 0usize;
    if select.config().grouped {
        for group in select.grouped_options().get() {
            if let Some(name) = &group.group_name {
                queue!(out, MoveTo(0, row), Print(format!("{name}:")))?;
                row += 1;
            }
            for entry in &group.options {
                row = draw_entry(&mut out, row, index, highlighted, entry)?;
                index += 1;
            }
        }
    } else {
        for entry in select.filtered_options().get().iter() {
            row = draw_entry(&mut out, row, index, highlighted, entry)?;
            index += 1;
        }
    }
    if index == 0 {
        queue!(out, MoveTo(0, row), Print("(no matches)"))?;
    }
    out.flush()
}

fn draw_entry(
    out: &mut std::io::Stdout,
    row: u16,
    index: usize,
    highlighted: Option<usize>,
    entry: &FilteredOption,
) -> std::io::Result<u16> {
    let marker = if highlighted == Some(index) { ">" } else { " " };
    queue!(
        out,
        MoveTo(0, row),
        Print(format!(
            "{marker} {} ({})",
            entry.option.text, entry.option.id
        ))
    )?;
    Ok(row + 1)
}
