use super::App;
use crate::state::session::{Preference, Theme, View};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

const APP_NAME: &str = "WERTY";

/// Colors for one theme
struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    accent: Color,
    highlight: Color,
    key: Color,
    key_bg: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Bright => Self {
                background: Color::Rgb(250, 245, 255),
                text: Color::Rgb(30, 30, 40),
                muted: Color::Rgb(110, 110, 125),
                accent: Color::Rgb(139, 92, 246), // purple
                highlight: Color::Rgb(236, 72, 153), // pink
                key: Color::Rgb(14, 116, 144),
                key_bg: Color::Rgb(225, 225, 235),
            },
            Theme::Dark => Self {
                background: Color::Rgb(35, 35, 35),
                text: Color::Rgb(230, 230, 230),
                muted: Color::Rgb(140, 140, 140),
                accent: Color::Rgb(80, 200, 200),
                highlight: Color::Rgb(214, 175, 0),
                key: Color::Rgb(70, 200, 90),
                key_bg: Color::Rgb(55, 55, 55),
            },
        }
    }
}

pub(super) fn render_app(app: &App, f: &mut Frame) {
    let size = f.size();
    let palette = Palette::for_theme(app.session().preferences().theme);

    let background = Block::default()
        .style(Style::default().bg(palette.background).fg(palette.text));
    f.render_widget(background, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + navigation
            Constraint::Min(0),    // Active view
            Constraint::Length(2), // Footer
        ])
        .split(size);

    render_header(app, f, chunks[0], &palette);

    match app.session().active_view() {
        View::Home => render_home(app, f, chunks[1], &palette),
        View::Results => render_results(app, f, chunks[1], &palette),
        View::History => render_history(app, f, chunks[1], &palette),
        View::Settings => render_settings(app, f, chunks[1], &palette),
        View::About => render_about(f, chunks[1], &palette),
    }

    render_footer(app, f, chunks[2], &palette);
}

fn render_header(app: &App, f: &mut Frame, area: Rect, palette: &Palette) {
    let active = app.session().active_view();
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|view| {
            let key = match view {
                View::Home => "h",
                View::Results => "r",
                View::History => "y",
                View::Settings => "s",
                View::About => "a",
            };
            Line::from(vec![
                Span::styled(key, Style::default().fg(palette.key).add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(view.title()),
            ])
        })
        .collect();
    let selected = View::ALL.iter().position(|v| *v == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.muted))
                .title(Span::styled(
                    APP_NAME,
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(tabs, area);
}

fn render_search_box(app: &App, f: &mut Frame, area: Rect, palette: &Palette) {
    let query = app.session().query();
    let line = if query.is_empty() && !app.is_editing() {
        Line::from(Span::styled(
            "Enter a search query...",
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        ))
    } else if app.is_editing() {
        Line::from(vec![
            Span::styled(query.to_string(), Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.accent)),
        ])
    } else {
        Line::from(Span::styled(query.to_string(), Style::default().fg(palette.text)))
    };

    let border = if app.is_editing() { palette.accent } else { palette.muted };
    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Search"),
    );
    f.render_widget(input, area);
}

fn render_home(app: &App, f: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(3), // Heading + tagline
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Recent queries
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Find everything you need",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Advanced search with smart filters",
            Style::default().fg(palette.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[1]);

    render_search_box(app, f, centered(chunks[2], 70), palette);

    let history = app.session().history();
    if history.is_empty() {
        return;
    }
    let mut lines = vec![Line::from(Span::styled(
        "Recent queries:",
        Style::default().fg(palette.muted),
    ))];
    lines.extend(history.entries().iter().enumerate().map(|(i, query)| {
        Line::from(vec![
            Span::styled(
                format!(" {} ", i + 1),
                Style::default().fg(palette.key).bg(palette.key_bg).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(query.clone()),
        ])
    }));
    let recent = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(recent, centered(chunks[3], 70));
}

fn render_results(app: &App, f: &mut Frame, area: Rect, palette: &Palette) {
    let session = app.session();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(4), // Filters
            Constraint::Length(1), // Count
            Constraint::Min(0),    // Results list
        ])
        .split(area);

    render_search_box(app, f, chunks[0], palette);

    let label = Style::default().fg(palette.muted);
    let value = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    let mut filter_lines = vec![Line::from(vec![
        Span::styled("Type ", label),
        Span::styled(session.content_type().label(), value),
        Span::raw("   "),
        Span::styled("Date ", label),
        Span::styled(session.date_filter().label(), value),
        Span::raw("   "),
        Span::styled("Source ", label),
        Span::styled(session.source_filter().label(), value),
        Span::raw("   "),
        Span::styled("Relevance ", label),
        Span::styled(session.relevance_threshold().to_string(), value),
    ])];
    if session.inert_filters_selected() {
        filter_lines.push(Line::from(Span::styled(
            "Date and source filters are not applied to results",
            Style::default().fg(palette.highlight).add_modifier(Modifier::ITALIC),
        )));
    }
    let filters = Paragraph::new(filter_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title("Advanced filters"),
    );
    f.render_widget(filters, chunks[1]);

    let results = session.filtered_results();
    let badge = if session.filters_active() { "Filters active" } else { "No filters" };
    let count = Paragraph::new(Line::from(vec![
        Span::styled("Results found: ", label),
        Span::styled(results.len().to_string(), value),
        Span::raw("  "),
        Span::styled(format!("[{}]", badge), Style::default().fg(palette.accent)),
    ]));
    f.render_widget(count, chunks[2]);

    if results.is_empty() {
        let empty = Paragraph::new("No results match the current filters.")
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        f.render_widget(empty, chunks[3]);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|result| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{}]", result.kind),
                        Style::default().fg(palette.key).bg(palette.key_bg),
                    ),
                    Span::styled(format!(" {} • {}", result.source, result.date), label),
                    Span::styled(
                        format!("  {}%", result.relevance),
                        Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    result.title.clone(),
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(result.url.clone(), label)),
                Line::from(Span::raw(result.description.clone())),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    if !app.is_editing() {
        state.select(Some(app.result_selected()));
    }
    f.render_stateful_widget(list, chunks[3], &mut state);
}

fn render_history(app: &App, f: &mut Frame, area: Rect, palette: &Palette) {
    let history = app.session().history();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .title("Search history");

    if history.is_empty() {
        let empty = Paragraph::new("No searches yet.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = history
        .entries()
        .iter()
        .map(|query| {
            ListItem::new(Line::from(vec![
                Span::styled(query.clone(), Style::default().fg(palette.text)),
                Span::styled("  recent", Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    state.select(Some(app.history_selected()));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_settings(app: &App, f: &mut Frame, area: Rect, palette: &Palette) {
    let prefs = app.session().preferences();
    let items: Vec<ListItem> = Preference::ALL
        .iter()
        .map(|preference| {
            let state = match preference {
                Preference::Theme => prefs.theme.label().to_string(),
                Preference::QuickSearch => checkbox(prefs.quick_search),
                Preference::Autocomplete => checkbox(prefs.autocomplete),
                Preference::SaveHistory => checkbox(prefs.save_history),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16}", preference.label()),
                    Style::default().fg(palette.text),
                ),
                Span::styled(state, Style::default().fg(palette.accent)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title("Settings"),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    state.select(Some(app.settings_selected()));
    f.render_stateful_widget(list, area, &mut state);
}

fn checkbox(on: bool) -> String {
    if on {
        "[x]".to_string()
    } else {
        "[ ]".to_string()
    }
}

fn render_about(f: &mut Frame, area: Rect, palette: &Palette) {
    let bold = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(palette.muted);
    let features = [
        ("Advanced filters", "Fine-tune every search"),
        ("Quick search", "Results in milliseconds"),
        ("Smart relevance", "Best results first"),
        ("Search history", "Fast access to past queries"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            APP_NAME,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("Version {}", env!("CARGO_PKG_VERSION")), muted)),
        Line::from(""),
        Line::from(Span::styled("About", bold)),
        Line::from(Span::styled(
            "WERTY is a search browser with advanced filters. It narrows results by \
             content type, date, source and relevance.",
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled("Key features", bold)),
    ];
    for (name, detail) in features {
        lines.push(Line::from(vec![
            Span::styled(format!("• {:<18}", name), Style::default().fg(palette.highlight)),
            Span::styled(detail, muted),
        ]));
    }

    let about = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    f.render_widget(about, area);
}

fn render_footer(app: &App, f: &mut Frame, area: Rect, palette: &Palette) {
    let hints: &[(&str, &str)] = if app.is_editing() {
        &[("Enter", "Search"), ("Ctrl-U", "Clear"), ("Esc", "Stop typing")]
    } else {
        match app.session().active_view() {
            View::Home => &[("/", "Type query"), ("1-5", "Recent query"), ("q", "Quit")],
            View::Results => &[
                ("t", "Type"),
                ("d", "Date"),
                ("o", "Source"),
                ("+/-", "Relevance"),
                ("/", "Edit query"),
                ("q", "Quit"),
            ],
            View::History => &[("Enter", "Open"), ("c", "Clear history"), ("q", "Quit")],
            View::Settings => &[("Space", "Toggle"), ("Esc", "Home"), ("q", "Quit")],
            View::About => &[("Esc", "Home"), ("q", "Quit")],
        }
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  •  ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(palette.key).bg(palette.key_bg).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", label)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.muted)),
        );
    f.render_widget(footer, area);
}

/// Horizontally center a region `percent` wide inside `area`
fn centered(area: Rect, percent: u16) -> Rect {
    let side = (100 - percent.min(100)) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent),
            Constraint::Percentage(side),
        ])
        .split(area)[1]
}
