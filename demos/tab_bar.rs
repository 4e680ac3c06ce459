//! Tab Bar Example - bottom tabs in the terminal
//!
//! This example drives a `TabBar` from a `TerminalHost`:
//! - Left/Right or 1-4 press a tab, `l` long-presses the focused one
//! - Resizing the terminal re-measures the row; flipping its aspect
//!   ratio resyncs the indicator
//! - Esc is the back action: the indicator resyncs, the action is left
//!   unhandled, so the demo exits
//! - `q` quits
//!
//! An optional TOML config path may be passed as the first argument.
//!
//! Run with: RUST_LOG=debug cargo run --example tab_bar -- tabs.toml 2>tabs.log

use std::error::Error;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::KeyCode;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use spark_tabs::layout::label_width;
use spark_tabs::{
    EventOutcome, FrameClock, HostEvent, HostPlatform, IconProps, IconRenderer,
    NavigationState, Navigator, RenderedContent, Route, RouteOptions, TabBar, TabBarConfig,
    TabBarView, TabEvent, TerminalHost, ThemeColor,
};

// =============================================================================
// CONTAINER
// =============================================================================

/// Minimal navigation container: remembers the last requested route.
#[derive(Default)]
struct DemoContainer {
    pending: Option<String>,
    last_event: Option<TabEvent>,
}

impl Navigator for DemoContainer {
    fn emit(&mut self, event: TabEvent) -> EventOutcome {
        self.last_event = Some(event);
        EventOutcome::default()
    }

    fn navigate(&mut self, key: &str) {
        self.pending = Some(key.to_string());
    }
}

fn icon(glyph: &'static str) -> IconRenderer {
    Rc::new(move |props: &IconProps| RenderedContent::new(glyph, props.color.clone()))
}

fn routes() -> Vec<Route> {
    vec![
        Route::new("home", "Home").with_options(RouteOptions {
            tab_bar_icon: Some(icon("⌂")),
            ..Default::default()
        }),
        Route::new("inbox", "Inbox").with_options(RouteOptions {
            tab_bar_icon: Some(icon("✉")),
            ..Default::default()
        }),
        Route::new("settings", "Settings").with_options(RouteOptions {
            title: Some("Prefs".into()),
            tab_bar_icon: Some(icon("⚙")),
            unmount_on_blur: true,
            ..Default::default()
        }),
        Route::new("focus", "Focus").with_options(RouteOptions {
            tab_bar_visible: Some(false),
            ..Default::default()
        }),
    ]
}

// =============================================================================
// DRAWING
// =============================================================================

fn to_crossterm(color: &ThemeColor) -> Option<Color> {
    let rgba = color.resolve();
    if rgba.is_terminal_default() {
        None
    } else if rgba.is_ansi() {
        Some(Color::AnsiValue(rgba.g as u8))
    } else {
        Some(Color::Rgb {
            r: rgba.r as u8,
            g: rgba.g as u8,
            b: rgba.b as u8,
        })
    }
}

fn print_colored(out: &mut impl Write, x: u16, y: u16, content: &RenderedContent) -> io::Result<()> {
    queue!(out, MoveTo(x, y))?;
    if let Some(color) = to_crossterm(&content.color) {
        queue!(out, SetForegroundColor(color))?;
    }
    queue!(out, Print(&content.text), ResetColor)
}

fn draw(
    out: &mut impl Write,
    bar: &TabBar<DemoContainer>,
    view: &TabBarView,
    rows: u16,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(2, 1))?;

    let focused = bar.state().focused_route();
    queue!(out, Print(format!("Screen: {}", focused.name)))?;

    let mounted: Vec<&str> = view
        .mounted_screens()
        .map(|screen| screen.key.as_str())
        .collect();
    queue!(out, MoveTo(2, 3), Print(format!("Mounted: {}", mounted.join(", "))))?;
    if let Some(event) = &bar.navigator().last_event {
        queue!(
            out,
            MoveTo(2, 4),
            Print(format!("Last event: {:?} on {}", event.kind, event.target))
        )?;
    }
    if !view.visible {
        queue!(out, MoveTo(2, 6), Print("(tab bar hidden on this screen)"))?;
        return out.flush();
    }

    let top = rows.saturating_sub(3 + view.padding.bottom as u16);

    // Indicator
    let indicator = view.indicator;
    let x = indicator.translate_x.abs().round() as u16;
    let width = indicator.width.round().max(0.0) as u16;
    let accent = view
        .focused_button()
        .and_then(|button| to_crossterm(&button.tint))
        .unwrap_or(Color::Blue);
    queue!(
        out,
        MoveTo(x, top),
        SetForegroundColor(accent),
        Print("▁".repeat(width as usize)),
        ResetColor
    )?;

    // Buttons
    for button in &view.buttons {
        let Some(layout) = bar.layout(button.index) else {
            continue;
        };
        if let Some(background) = to_crossterm(&button.background) {
            queue!(out, SetBackgroundColor(background))?;
        }
        let center = |text: &str| {
            let free = (layout.width - label_width(text)).max(0.0);
            (layout.x + free / 2.0).round() as u16
        };
        if let Some(icon) = &button.icon {
            print_colored(out, center(&icon.text), top + 1, icon)?;
        }
        if let Some(label) = &button.label {
            print_colored(out, center(&label.text), top + 2, label)?;
        }
        queue!(out, ResetColor)?;
    }

    out.flush()
}

// =============================================================================
// MAIN LOOP
// =============================================================================

fn press(bar: &mut TabBar<DemoContainer>, index: usize) {
    bar.press(index);
    if let Some(key) = bar.navigator_mut().pending.take() {
        bar.set_focused_key(&key);
    }
}

fn run(bar: &mut TabBar<DemoContainer>, host: &TerminalHost) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout();
    bar.mount(host);
    bar.measure_row(host.dimensions().width)?;

    let mut clock = FrameClock::start(60);
    loop {
        bar.pump(&mut clock);
        let view = bar.render();
        draw(&mut out, bar, &view, host.dimensions().height as u16)?;

        let last = bar.state().len() - 1;
        let focused = bar.focused_index();
        match host.poll_event(clock.frame_duration())? {
            Some(HostEvent::Resized(size)) => {
                bar.measure_row(size.width)?;
            }
            // Nothing handled the back action: fall through to the default
            Some(HostEvent::Back { handled: false }) => break,
            Some(HostEvent::Key(key)) => match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Left => press(bar, focused.saturating_sub(1)),
                KeyCode::Right => press(bar, (focused + 1).min(last)),
                KeyCode::Char('l') => bar.long_press(focused),
                KeyCode::Char(c) => {
                    if let Some(digit) = c.to_digit(10) {
                        if (1..=last as u32 + 1).contains(&digit) {
                            press(bar, digit as usize - 1);
                        }
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    bar.unmount();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => TabBarConfig::load(path)?,
        None => TabBarConfig::default(),
    };
    let state = NavigationState::new(routes(), 0)?;
    let mut bar = TabBar::new(state, config, DemoContainer::default());
    let host = TerminalHost::detect(Some(KeyCode::Esc))?;

    let mut out = io::stdout();
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide)?;

    let result = run(&mut bar, &host);

    execute!(out, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}
