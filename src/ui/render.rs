use crate::app::{AppMode, RenderState};
use crate::engine::Token;
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "Tokenize Copilot";
pub const DESCRIPTION: &str = "The first step in creating an Our Paper Template is to tokenize \
the document. This formatting change allows LinkSquares to draft contracts faster. Please enter \
all information that will be entered into your contract (ie. Effective Date) in the fields below.";
pub const PLACEHOLDER: &str = "Enter legal information";
pub const EMPTY_OUTPUT: &str = "Generate tokens to see results";
pub const GUIDANCE: &str = "Now that you have your tokens, please copy them and paste them into \
your word document. Please contact your Implementation Consultant if you have any questions.";
pub const REMOVE_MARKER: &str = "[x]";
const REMOVE_GAP: &str = "  ";
const STATUS_HINT: &str = "Tab switch pane · Ctrl-N add · Ctrl-P pricing · F1 help · Esc quit";
const ENTRY_PREFIX_WIDTH: u16 = 2;

/// Draw the whole form for one frame
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let guidance_height = if state.tokens.is_empty() { 0 } else { 3 };
    let [header_area, body_area, guidance_area, status_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(8),
        Constraint::Length(guidance_height),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(render_header(), header_area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(body_area);
    draw_form_column(frame, state, left);
    draw_output_column(frame, state, right);

    if guidance_height > 0 {
        frame.render_widget(render_guidance(), guidance_area);
    }
    frame.render_widget(render_status_line(state.status.as_deref()), status_area);

    if state.show_help {
        let popup = centered_rect(area, 60, 16);
        frame.render_widget(Clear, popup);
        frame.render_widget(render_help(), popup);
    }
}

pub fn render_header() -> Paragraph<'static> {
    let lines = vec![
        Line::styled(
            TITLE,
            Style::default()
                .fg(colors::text())
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(DESCRIPTION, Style::default().fg(colors::dimmed())),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn draw_form_column(frame: &mut Frame, state: &RenderState, area: Rect) {
    let [entries_area, pricing_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).areas(area);

    let block = pane_block(" Entries ", state.mode == AppMode::Editing);
    let inner = block.inner(entries_area);
    // Last two rows hold the add/generate hints
    let visible_rows = inner.height.saturating_sub(2).max(1) as usize;
    let scroll = state.focused_entry.saturating_sub(visible_rows - 1);

    let [fields_area, _, hints_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let text_width = entry_text_width(fields_area.width, state.can_remove);

    frame.render_widget(block, entries_area);
    frame.render_widget(
        Paragraph::new(render_entry_lines(state, text_width)).scroll((scroll as u16, 0)),
        fields_area,
    );
    frame.render_widget(render_form_hints(state.can_generate), hints_area);
    frame.render_widget(render_pricing_toggle(state.pricing_enabled), pricing_area);

    if state.mode == AppMode::Editing && !state.show_help {
        let row = state.focused_entry - scroll;
        if row < fields_area.height as usize {
            let focused_text = state
                .entries
                .get(state.focused_entry)
                .map_or("", String::as_str);
            let from = entry_scroll(state.cursor_column, text_width);
            let (_, start) = visible_window(focused_text, from, text_width);
            let offset = state.cursor_column.saturating_sub(start);
            let x = fields_area
                .x
                .saturating_add(ENTRY_PREFIX_WIDTH)
                .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
            let x = x.min(fields_area.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, fields_area.y + row as u16));
        }
    }
}

/// Cells left for entry text once the prefix and remove marker are placed.
fn entry_text_width(fields_width: u16, can_remove: bool) -> usize {
    let marker = if can_remove {
        REMOVE_GAP.width() + REMOVE_MARKER.width()
    } else {
        0
    };
    (fields_width as usize)
        .saturating_sub(ENTRY_PREFIX_WIDTH as usize + marker)
        .max(1)
}

/// First column to show so the cursor stays inside `text_width` cells.
pub fn entry_scroll(cursor_column: usize, text_width: usize) -> usize {
    // The cursor needs a cell of its own at the end of the text
    cursor_column.saturating_sub(text_width.saturating_sub(1))
}

/// Part of `text` starting at the first grapheme boundary at or after
/// column `from`, at most `width` cells wide, with the column it starts at.
pub fn visible_window(text: &str, from: usize, width: usize) -> (String, usize) {
    let mut column = 0;
    let mut start = None;
    let mut window = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if start.is_none() && column >= from {
            start = Some(column);
        }
        if start.is_some() {
            if used + grapheme_width > width {
                break;
            }
            window.push_str(grapheme);
            used += grapheme_width;
        }
        column += grapheme_width;
    }
    (window, start.unwrap_or(column))
}

pub fn render_entry_lines(state: &RenderState, text_width: usize) -> Vec<Line<'static>> {
    state
        .entries
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let focused = index == state.focused_entry;
            let marker = if focused { "› " } else { "  " };
            let mut spans = vec![Span::styled(marker, Style::default().fg(colors::accent()))];
            if text.is_empty() {
                let (placeholder, _) = visible_window(PLACEHOLDER, 0, text_width);
                spans.push(Span::styled(
                    placeholder,
                    Style::default()
                        .fg(colors::dimmed())
                        .add_modifier(Modifier::ITALIC),
                ));
            } else {
                let from = if focused {
                    entry_scroll(state.cursor_column, text_width)
                } else {
                    0
                };
                let (window, _) = visible_window(text, from, text_width);
                spans.push(Span::styled(window, Style::default().fg(colors::text())));
            }
            if state.can_remove {
                spans.push(Span::raw(REMOVE_GAP));
                spans.push(Span::styled(REMOVE_MARKER, Style::default().fg(colors::danger())));
            }
            Line::from(spans)
        })
        .collect()
}

pub fn render_form_hints(can_generate: bool) -> Line<'static> {
    let generate_style = if can_generate {
        Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(colors::dimmed())
            .add_modifier(Modifier::DIM)
    };
    Line::from(vec![
        Span::styled("+ Add Input (Ctrl-N)", Style::default().fg(colors::accent())),
        Span::raw("   "),
        Span::styled("Generate Tokens (Enter)", generate_style),
    ])
}

pub fn render_pricing_toggle(enabled: bool) -> Paragraph<'static> {
    let (label, style) = if enabled {
        ("[ ON]", Style::default().fg(colors::accent()).add_modifier(Modifier::BOLD))
    } else {
        ("[OFF]", Style::default().fg(colors::dimmed()))
    };
    Paragraph::new(Line::from(vec![
        Span::styled(label, style),
        Span::styled("  Ctrl-P", Style::default().fg(colors::dimmed())),
    ]))
    .block(pane_block(" Pricing Table Configuration ", false))
}

fn draw_output_column(frame: &mut Frame, state: &RenderState, area: Rect) {
    let pricing_height = if state.pricing_tokens.is_empty() {
        0
    } else {
        state.pricing_tokens.len() as u16 + 2
    };
    let [tokens_area, pricing_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(pricing_height)]).areas(area);
    let browsing = state.mode == AppMode::Browsing;

    let block = pane_block(" Tokenized Text ", browsing);
    if state.tokens.is_empty() {
        let empty = Paragraph::new(Line::styled(
            EMPTY_OUTPUT,
            Style::default()
                .fg(colors::dimmed())
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, tokens_area);
    } else {
        let mut list_state = ListState::default().with_selected(state.selected_token());
        frame.render_stateful_widget(
            render_token_list(&state.tokens).block(block),
            tokens_area,
            &mut list_state,
        );
    }

    if pricing_height > 0 {
        let mut list_state = ListState::default().with_selected(state.selected_pricing_token());
        frame.render_stateful_widget(
            render_token_list(&state.pricing_tokens)
                .block(pane_block(" Pricing Table Tokens ", false)),
            pricing_area,
            &mut list_state,
        );
    }
}

pub fn render_token_list(tokens: &[Token]) -> List<'static> {
    let items: Vec<ListItem> = tokens
        .iter()
        .map(|token| {
            ListItem::new(Line::styled(
                token.to_string(),
                Style::default().fg(colors::text()),
            ))
        })
        .collect();
    List::new(items)
        .highlight_style(
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("⧉ ")
}

pub fn render_guidance() -> Paragraph<'static> {
    Paragraph::new(Line::styled(GUIDANCE, Style::default().fg(colors::guidance())))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

pub fn render_status_line(status: Option<&str>) -> Line<'static> {
    match status {
        Some(message) => Line::styled(message.to_string(), Style::default().fg(colors::accent())),
        None => Line::styled(STATUS_HINT, Style::default().fg(colors::dimmed())),
    }
}

pub fn render_help() -> Paragraph<'static> {
    const BINDINGS: [(&str, &str); 12] = [
        ("Tab", "switch between entries and tokens"),
        ("↑ / ↓", "previous / next entry or token"),
        ("Enter", "generate (entries) / copy (tokens)"),
        ("Ctrl-N", "add entry"),
        ("Ctrl-D", "remove focused entry"),
        ("Ctrl-G", "generate tokens"),
        ("Ctrl-P", "toggle pricing table tokens"),
        ("c / y", "copy selected token"),
        ("← → Home End", "move cursor"),
        ("Backspace Del", "delete text"),
        ("F1", "toggle this help"),
        ("Esc", "quit"),
    ];
    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", key),
                    Style::default()
                        .fg(colors::accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(colors::text())),
            ])
        })
        .collect();
    Paragraph::new(lines).block(pane_block(" Keys ", true))
}

fn pane_block(title: &'static str, active: bool) -> Block<'static> {
    let border = if active {
        colors::accent()
    } else {
        colors::dimmed()
    };
    Block::bordered()
        .title(title)
        .border_style(Style::default().fg(border))
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppEvent, FormState};
    use crate::input::MemoryClipboard;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with(entries: &[&str]) -> App {
        App::with_form(
            FormState::with_entries(entries.iter().copied()),
            Box::new(MemoryClipboard::new()),
        )
    }

    #[test]
    fn test_initial_screen() {
        let text = screen(&app_with(&[]).get_render_state());
        assert!(text.contains(TITLE));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains(EMPTY_OUTPUT));
        assert!(text.contains("[OFF]"));
        assert!(!text.contains(REMOVE_MARKER));
        assert!(!text.contains("Pricing Table Tokens"));
    }

    #[test]
    fn test_remove_marker_shown_with_two_entries() {
        let text = screen(&app_with(&["a", "b"]).get_render_state());
        assert_eq!(text.matches(REMOVE_MARKER).count(), 2);
    }

    #[test]
    fn test_generated_tokens_and_guidance() {
        let mut app = app_with(&["effective date"]);
        app.handle_event(AppEvent::Generate);
        let text = screen(&app.get_render_state());
        assert!(text.contains("#[EFFECTIVE_DATE]#"));
        assert!(!text.contains(EMPTY_OUTPUT));
        assert!(text.contains("Now that you have your tokens"));
    }

    #[test]
    fn test_pricing_block_visible_when_enabled() {
        let mut app = app_with(&[]);
        app.handle_event(AppEvent::TogglePricing);
        let text = screen(&app.get_render_state());
        assert!(text.contains("Pricing Table Tokens"));
        assert!(text.contains("#[TABLE::START::SUBSCRIPTIONS]#"));
        assert!(text.contains("#[ROW::PRODUCT_NAME]#"));
        assert!(text.contains("#[TABLE::END::SUBSCRIPTIONS]#"));
        assert!(text.contains("[ ON]"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app_with(&[]);
        app.handle_event(AppEvent::Help);
        let text = screen(&app.get_render_state());
        assert!(text.contains("toggle pricing table tokens"));
    }

    #[test]
    fn test_status_line_prefers_message() {
        let line = render_status_line(Some("Copied #[A]#"));
        assert_eq!(line.to_string(), "Copied #[A]#");
        assert_eq!(render_status_line(None).to_string(), STATUS_HINT);
    }

    #[test]
    fn test_entry_lines_use_placeholder_for_blank() {
        let state = app_with(&["", "term"]).get_render_state();
        let lines: Vec<String> = render_entry_lines(&state, 60)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(lines[0], format!("› {}  {}", PLACEHOLDER, REMOVE_MARKER));
        assert_eq!(lines[1], format!("  term  {}", REMOVE_MARKER));
    }

    #[test]
    fn test_long_focused_entry_scrolls_to_cursor() {
        let app = app_with(&["Effective Date of the Master Services Agreement ZZTAIL", "b"]);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw(frame, &app.get_render_state()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40u16)
            .map(|x| buffer[(x, 6)].symbol().to_string())
            .collect();
        assert!(row.contains("ZZTAIL"), "row was {:?}", row);
        assert!(row.contains(REMOVE_MARKER), "row was {:?}", row);

        // 38-cell field: 2 prefix + 31 text + 5 marker; caret sits after "ZZTAIL"
        let cursor = terminal.get_cursor_position().unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(cursor, Position::new(1 + 2 + 30, 6));
        assert_eq!(buffer[(cursor.x - 1, 6)].symbol(), "L");
    }

    #[test]
    fn test_unfocused_long_entry_keeps_marker() {
        let app = app_with(&["b", "Effective Date of the Master Services Agreement"]);
        let state = app.get_render_state();
        let line = render_entry_lines(&state, 20)[1].to_string();
        assert_eq!(line, format!("  Effective Date of th  {}", REMOVE_MARKER));
    }

    #[test]
    fn test_visible_window() {
        assert_eq!(visible_window("abcdef", 0, 3), ("abc".to_string(), 0));
        assert_eq!(visible_window("abcdef", 4, 3), ("ef".to_string(), 4));
        // A wide char straddling `from` is skipped whole
        assert_eq!(visible_window("a日本x", 2, 4), ("本x".to_string(), 3));
        assert_eq!(visible_window("ab", 5, 3), (String::new(), 2));
    }

    #[test]
    fn test_entry_scroll_keeps_cursor_visible() {
        assert_eq!(entry_scroll(10, 31), 0);
        assert_eq!(entry_scroll(54, 31), 24);
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let rect = centered_rect(Rect::new(0, 0, 20, 10), 60, 16);
        assert_eq!(rect, Rect::new(0, 0, 20, 10));
    }
}
