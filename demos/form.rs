use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use formui::prelude::*;
use formui::render_form;

fn build_form() -> FormState {
    let mut form = FormState::new();

    form.push(FieldState::new(
        FieldDef::new("name", "Name", InputKind::Text).required(),
    ));
    form.push(FieldState::new(
        FieldDef::new("email", "Email", InputKind::Email).required(),
    ));

    let price = InputConfig {
        decimal_places: 2,
        decimal_places_fixed: true,
        currency_symbol: "$".to_string(),
        max_value: 10_000.0,
        ..InputConfig::default()
    };
    form.push(FieldState::new(
        FieldDef::new("price", "Price", InputKind::Number).with_config(price),
    ));

    let flavor = InputConfig {
        type_in_select_allows_unique: true,
        ..InputConfig::default()
    };
    form.push(FieldState::with_options(
        FieldDef::new("flavor", "Flavor", InputKind::Select)
            .required()
            .with_config(flavor),
        vec![
            SelectOption::new("Chocolate", "1"),
            SelectOption::new("Strawberry", "2"),
            SelectOption::new("Salted Caramel", "3"),
            SelectOption::new("Vanilla Bean", "4"),
        ],
    ));

    form.push(FieldState::new(FieldDef::new(
        "delivery",
        "Delivery date",
        InputKind::Date,
    )));

    form
}

fn main() -> Result<()> {
    let mut form = build_form();
    let value = run(&mut form)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run(form: &mut FormState) -> Result<serde_json::Value> {
    let mut terminal = TerminalGuard::new()?;
    form.focus_field(0);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_form(
                frame,
                area,
                form,
                "New order · Tab next · Esc submit · Ctrl+C abort",
            )
        })?;

        let Event::Key(key) = event::read().context("failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => anyhow::bail!("aborted"),
            KeyCode::Esc => {
                form.blur();
                if form.all_valid() {
                    return Ok(form.build_value());
                }
            }
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Char('r') if ctrl => {
                if let Some(field) = form.focused_field_mut() {
                    field.reset();
                }
                form.blur();
            }
            KeyCode::Char('n') if ctrl => {
                if let Some(field) = form.focused_field_mut() {
                    field.request_create();
                }
                form.blur();
            }
            KeyCode::Char('s') if ctrl => {
                if let Some(field) = form.focused_field_mut() {
                    field.confirm_picker();
                }
                form.blur();
            }
            _ => {
                if let Some(field) = form.focused_field_mut() {
                    field.handle_key(&key);
                }
                // Enter commits a field from inside the key adapter; keep
                // the form's focus index in step with that.
                if form.focused_field().is_some_and(|field| !field.is_focused()) {
                    form.blur();
                }
            }
        }
    }
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}
