// UI rendering logic - draws a DashboardView, nothing more
use crate::{
    view::{DashboardView, RepoCard},
    App, InputMode,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let view = app.view();
    let screen_width = frame.area().width;

    // Sidebar disappears on narrow terminals, same as the web layout on mobile
    let columns = if screen_width < 80 {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(0), Constraint::Min(20)])
            .split(frame.area())
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 7), Constraint::Ratio(6, 7)])
            .split(frame.area())
    };

    render_sidebar(frame, &view, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + count
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Repo cards
            Constraint::Length(1), // Status bar
        ])
        .split(columns[1]);

    render_list_header(frame, &view, rows[0]);
    render_search_input(frame, &view, app.input_mode, rows[1]);
    render_cards(frame, &view, &mut app.list_state, rows[2]);
    render_status_bar(frame, app.input_mode, rows[3]);
}

fn render_sidebar(frame: &mut Frame, view: &DashboardView, area: Rect) {
    if area.width == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            "repodash",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Repositories", Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            format!("@{}", view.account),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let sidebar = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(sidebar, area);
}

fn render_list_header(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let count = if view.loading {
        "Loading...".to_string()
    } else if view.repo_count == 1 {
        "1 repository".to_string()
    } else {
        format!("{} repositories", view.repo_count)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Repositories",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(count, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_search_input(frame: &mut Frame, view: &DashboardView, mode: InputMode, area: Rect) {
    let (border_color, text) = match mode {
        InputMode::Searching => (Color::Yellow, format!("{}_", view.search_term)),
        InputMode::Normal if view.search_term.is_empty() => {
            (Color::DarkGray, "Search repositories (press /)".to_string())
        }
        InputMode::Normal => (Color::DarkGray, view.search_term.clone()),
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(input, area);
}

fn render_cards(
    frame: &mut Frame,
    view: &DashboardView,
    list_state: &mut ratatui::widgets::ListState,
    area: Rect,
) {
    let items: Vec<ListItem> = view.cards.iter().map(card_item).collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}

fn card_item(card: &RepoCard) -> ListItem<'static> {
    let badge_color = if card.private { Color::Yellow } else { Color::Green };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                card.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format!("[{}]", card.badge), Style::default().fg(badge_color)),
        ]),
        Line::from(vec![
            Span::styled(card.language.clone(), Style::default().fg(Color::White)),
            Span::raw("  •  "),
            Span::styled(card.size_label.clone(), Style::default().fg(Color::Gray)),
            Span::raw("  •  "),
            Span::styled(card.updated_label.clone(), Style::default().fg(Color::Gray)),
        ]),
    ];

    if !card.last {
        lines.push(Line::from(""));
    }

    ListItem::new(lines)
}

fn render_status_bar(frame: &mut Frame, mode: InputMode, area: Rect) {
    let hint = match mode {
        InputMode::Normal => "/ search  j/k move  Esc clear  q quit",
        InputMode::Searching => "type to filter  Enter/Esc done",
    };

    let status = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    frame.render_widget(status, area);
}
