//! UI rendering for the timed quiz.

use crate::app::App;
use crate::models::Screen;
use crate::view::QuestionView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Countdown turns red below this many seconds.
const LOW_TIME_SECS: u32 = 60;

pub fn draw(f: &mut Frame, app: &App) {
    match app.screen().screen {
        Screen::Start => draw_start(f, app),
        Screen::Quiz => draw_quiz(f, app),
        Screen::Result => draw_result(f, app),
    }

    if app.show_help {
        draw_help(f);
    }

    if let Some(msg) = &app.screen().prompt {
        draw_prompt(f, msg);
    }
}

fn draw_start(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let header = Paragraph::new("Timed Quiz")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let intro = vec![
        Line::from(""),
        Line::from(format!("Questions: {}", app.controller.quiz().total())),
        Line::from(format!("Time limit: {}", app.screen().countdown)),
        Line::from(""),
        Line::from("Answer every question, then submit."),
        Line::from("When time runs out the quiz is submitted as it stands."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    let body = Paragraph::new(intro)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(body, chunks[1]);

    draw_footer(f, app, chunks[2], "Enter:Start  ?:Help  q:Quit");
}

fn draw_quiz(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress + timer
            Constraint::Min(0),    // Question
            Constraint::Length(3), // Controls
        ])
        .split(f.area());

    let state = app.screen();
    let Some(question) = &state.question else { return };

    // Progress and countdown
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[0]);

    let progress = Paragraph::new(format!(
        "Question {} of {} | Answered: {}",
        question.index + 1,
        question.total,
        app.controller.quiz().answered_count()
    ))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(progress, header_chunks[0]);

    let timer_style = if app.controller.remaining_secs() < LOW_TIME_SECS {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let timer = Paragraph::new(state.countdown.as_str())
        .style(timer_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Time "));
    f.render_widget(timer, header_chunks[1]);

    draw_question(f, app, question, chunks[1]);

    let controls = control_hints(question);
    draw_footer(f, app, chunks[2], &controls);
}

fn draw_question(f: &mut Frame, app: &App, question: &QuestionView, area: Rect) {
    let heading = if app.config.display.show_question_numbers {
        question.heading()
    } else {
        question.text.clone()
    };

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let text = Paragraph::new(heading)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Question "))
        .wrap(Wrap { trim: true });
    f.render_widget(text, inner[0]);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let chosen = question.selected == Some(i);
            let marker = if chosen { "(*)" } else { "( )" };

            let mut style = Style::default();
            if chosen {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if i == app.highlighted {
                style = style.bg(Color::DarkGray);
            }

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} {}", marker, option), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Options "));
    f.render_widget(list, inner[1]);
}

/// Footer text for the quiz screen; only offered controls appear.
fn control_hints(question: &QuestionView) -> String {
    let mut hints = vec!["1-9/Enter:Select"];
    if question.show_prev() {
        hints.push("p:Prev");
    }
    if question.show_next() {
        hints.push("n:Next");
    }
    if question.show_submit() {
        hints.push("s:Submit");
    }
    hints.push("?:Help");
    hints.join("  ")
}

fn draw_result(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let header = Paragraph::new("Quiz Complete")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let state = app.screen();
    let mut lines = vec![Line::from("")];
    if let Some(result) = state.result {
        lines.push(Line::from("Your score"));
        lines.push(Line::from(Span::styled(
            result.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("{:.0}%", result.ratio() * 100.0)));
    }
    if app.controller.remaining_secs() == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Time ran out; unanswered questions count as wrong.",
            Style::default().fg(Color::Yellow),
        )));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);

    draw_footer(f, app, chunks[2], "r:Restart  ?:Help  q:Quit");
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect, hints: &str) {
    let text = if app.config.display.show_key_hints { hints } else { "" };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let help = r#"
Timed Quiz Keybindings

Start:
  Enter, Space    Start the quiz

Quiz:
  1-9             Select option by number
  j/k, Up/Down    Move highlight
  Enter, Space    Select highlighted option
  n, l, Right     Next question
  p, h, Left      Previous question
  s               Submit

Result:
  r               Restart

General:
  ?               Show this help
  q, Ctrl-C       Quit

Press any key to close
"#;

    let popup = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(popup, area);
}

fn draw_prompt(f: &mut Frame, msg: &str) {
    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(msg),
        Line::from(""),
        Line::from(Span::styled("Press any key", Style::default().fg(Color::DarkGray))),
    ];
    let prompt = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Notice "))
        .wrap(Wrap { trim: true });
    f.render_widget(prompt, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, QuizConfig};
    use crate::models::Question;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::{Duration, Instant};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn app_with(duration_secs: u32, questions: Vec<Question>) -> App {
        let config = Config {
            quiz: QuizConfig { duration_secs, questions_file: None },
            ..Config::default()
        };
        App::new(config, questions)
    }

    #[test]
    fn test_start_screen() {
        let app = app_with(300, vec![Question::new("Q1", ["A", "B"], "A")]);
        let screen = render(&app);
        assert!(screen.contains("Timed Quiz"));
        assert!(screen.contains("Questions: 1"));
        assert!(screen.contains("Time limit: 5:00"));
    }

    #[test]
    fn test_quiz_screen_countdown_and_controls() {
        let questions = vec![
            Question::new("What is the capital of France?", ["Paris", "London"], "Paris"),
            Question::new("2 + 2?", ["3", "4"], "4"),
        ];
        let mut app = app_with(66, questions);
        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);
        app.tick(now + Duration::from_secs(1));

        let screen = render(&app);
        assert!(screen.contains("1:05"));
        assert!(screen.contains("1. What is the capital of France?"));
        assert!(screen.contains("n:Next"));
        assert!(!screen.contains("p:Prev"));
        assert!(!screen.contains("s:Submit"));

        press(&mut app, KeyCode::Char('1'), now);
        press(&mut app, KeyCode::Char('n'), now);
        let screen = render(&app);
        assert!(screen.contains("2. 2 + 2?"));
        assert!(screen.contains("p:Prev"));
        assert!(screen.contains("s:Submit"));
        assert!(!screen.contains("n:Next"));
    }

    #[test]
    fn test_selected_option_marked() {
        let mut app = app_with(300, vec![Question::new("Q1", ["Left", "Right"], "Left")]);
        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Char('2'), now);

        let screen = render(&app);
        assert!(screen.contains("(*) Right"));
        assert!(screen.contains("( ) Left"));
    }

    #[test]
    fn test_result_screen() {
        let mut app = app_with(300, vec![Question::new("Q1", ["A", "B"], "A")]);
        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Char('1'), now);
        press(&mut app, KeyCode::Char('s'), now);

        let screen = render(&app);
        assert!(screen.contains("Quiz Complete"));
        assert!(screen.contains("1 / 1"));
        assert!(screen.contains("100%"));
    }

    #[test]
    fn test_prompt_overlay() {
        let mut app = app_with(300, vec![
            Question::new("Q1", ["A", "B"], "A"),
            Question::new("Q2", ["A", "B"], "B"),
        ]);
        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Char('n'), now);

        let screen = render(&app);
        assert!(screen.contains("Notice"));
        assert!(screen.contains("Please select an answer"));
    }

    #[test]
    fn test_hints_hidden() {
        let mut config = Config::default();
        config.display.show_key_hints = false;
        let app = App::new(config, vec![Question::new("Q1", ["A", "B"], "A")]);
        let screen = render(&app);
        assert!(!screen.contains("Enter:Start"));
    }
}
