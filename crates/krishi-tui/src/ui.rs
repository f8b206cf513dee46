use chrono::{Local, NaiveDate};
use krishi_core::climate::{self, Suitability};
use krishi_core::dashboard::{self, CARDS};
use krishi_core::loans::{self, LoanStatus};
use krishi_core::msp::{self, Trend};
use krishi_core::subsidies::{self, SubsidyStatus};
use krishi_core::{msp::MspRate, ScanState, Section, Sender, Severity};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use crate::app::{App, EditTarget, InputMode, TextInput};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    let section_area = if app.show_chat && app.chat_minimized {
        let [section_area, chat_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(body_area);
        render_chat_bar(app, frame, chat_area);
        section_area
    } else if app.show_chat {
        let [section_area, chat_area] = Layout::horizontal([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .areas(body_area);
        render_chat(app, frame, chat_area);
        section_area
    } else {
        body_area
    };

    match app.section {
        Section::Dashboard => render_dashboard(app, frame, section_area),
        Section::Schemes => render_scrolling(app, frame, section_area, msp_lines()),
        Section::Loans => render_scrolling(app, frame, section_area, loan_lines()),
        Section::Subsidies => {
            let today = Local::now().date_naive();
            render_scrolling(app, frame, section_area, subsidy_lines(today))
        }
        Section::Climate => {
            let today = Local::now().date_naive();
            let lines = climate_lines(app, today);
            render_scrolling(app, frame, section_area, lines)
        }
        Section::DiseaseDetection => render_disease(app, frame, section_area),
        Section::Support => render_voice(app, frame, section_area),
    }

    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let t = app.labels();

    let mut spans = vec![
        Span::styled(format!(" {} ", t.title), Style::default().fg(Color::Green).bold()),
        Span::styled(format!("{} ", t.subtitle), Style::default().fg(Color::Gray)),
        Span::raw("│"),
    ];

    for (i, section) in Section::all().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.label(t));
        let style = if *section == app.section {
            Style::default().fg(Color::Black).bg(Color::Green).bold()
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(label, style));
    }

    spans.push(Span::styled(
        format!(" 🌐 {} ", app.language.display_name()),
        Style::default().fg(Color::Yellow),
    ));

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(notice) = &app.notice {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", notice.title), Style::default().bg(Color::Green).fg(Color::Black).bold()),
            Span::styled(format!(" {} ", notice.body), Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut hints: Vec<(&str, &str)> = match (app.input_mode, app.section) {
        (InputMode::Editing, _) => vec![(" Enter ", " submit "), (" Esc ", " cancel ")],
        (InputMode::Normal, Section::Dashboard) => {
            vec![(" j/k ", " select "), (" Enter ", " open ")]
        }
        (InputMode::Normal, Section::DiseaseDetection) => {
            vec![(" o ", " choose image "), (" a ", " analyze ")]
        }
        (InputMode::Normal, Section::Support) => vec![
            (" r ", if app.voice.is_recording() { " stop " } else { " record " }),
            (" v ", " language "),
            (" j/k ", " select "),
            (" p ", " play "),
        ],
        (InputMode::Normal, Section::Climate) => {
            vec![(" j/k ", " scroll "), (" u ", " location ")]
        }
        (InputMode::Normal, _) => vec![(" j/k ", " scroll ")],
    };

    if app.input_mode == InputMode::Normal {
        hints.extend([
            (" Tab ", " section "),
            (" L ", " language "),
            (" c ", " chat "),
            (" i ", " ask "),
            (" q ", " quit "),
        ]);
    }

    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(k, l)| [Span::styled(k, key_style), Span::styled(l, label_style)])
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn section_block(section: Section) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" {} ", section.heading()))
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::DarkGray)))
}

fn badge(text: impl Into<String>, color: Color) -> Span<'static> {
    Span::styled(format!(" {} ", text.into()), Style::default().fg(Color::Black).bg(color))
}

fn render_scrolling(app: &mut App, frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let max_scroll = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));
    app.content_scroll = app.content_scroll.min(max_scroll);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(section_block(app.section))
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_dashboard(app: &mut App, frame: &mut Frame, area: Rect) {
    let [hero_area, cards_area, features_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(8),
        Constraint::Length(5),
    ])
    .areas(area);

    let stats: Vec<Span> = dashboard::STATS
        .iter()
        .flat_map(|(value, label)| {
            [
                Span::styled(format!("  {} ", value), Style::default().fg(Color::Green).bold()),
                Span::styled(label.to_string(), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(dashboard::HERO_TITLE, Style::default().fg(Color::Green).bold())),
        Line::from(dashboard::HERO_SUBTITLE),
        muted(dashboard::HERO_BLURB),
        Line::from(stats),
    ])
    .block(Block::default().borders(Borders::BOTTOM))
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, hero_area);

    let items: Vec<ListItem> = CARDS
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", card.button_text), Style::default().fg(Color::Cyan)),
                ]),
                muted(format!("  {}", card.description)),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(section_block(Section::Dashboard))
        .highlight_style(
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, cards_area, &mut app.card_state);

    let mut lines = vec![heading("Why Choose FarmAssist?")];
    for (icon, title, description) in dashboard::FEATURES {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", icon)),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" - {}", description), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(muted(dashboard::FOOTER.join("  ·  ")));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), features_area);
}

fn trend_span(trend: Trend) -> Span<'static> {
    let color = match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Stable => Color::Gray,
    };
    badge(format!("{} {}", trend.arrow(), trend.as_str()), color)
}

fn msp_card(rate: &MspRate) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(rate.crop.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            trend_span(rate.trend),
        ]),
        muted(format!("  {} • {}", rate.state, rate.season)),
        Line::from(vec![
            Span::raw("  Central MSP  "),
            Span::styled(rate.central_label(), Style::default().fg(Color::Green).bold()),
        ]),
    ];
    if let Some(state_price) = rate.state_label() {
        lines.push(Line::from(vec![
            Span::raw("  State MSP    "),
            Span::styled(state_price, Style::default().fg(Color::Yellow).bold()),
            Span::styled(
                format!("  {}", rate.state_bonus_label().unwrap_or_default()),
                Style::default().fg(Color::Green),
            ),
        ]));
    }
    lines.push(muted(format!("  {}", rate.updated_label())));
    lines.push(Line::default());
    lines
}

pub fn msp_lines() -> Vec<Line<'static>> {
    let mut lines = vec![muted(Section::Schemes.tagline()), Line::default()];
    for rate in msp::rates() {
        lines.extend(msp_card(rate));
    }
    lines
}

pub fn loan_lines() -> Vec<Line<'static>> {
    let mut lines = vec![muted(Section::Loans.tagline()), Line::default()];
    for loan in loans::schemes() {
        let status_color = match loan.status {
            LoanStatus::Available => Color::Green,
            LoanStatus::Limited => Color::Yellow,
            LoanStatus::Seasonal => Color::Cyan,
        };
        lines.push(Line::from(vec![
            Span::styled(loan.name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            badge(loan.category.as_str(), Color::Gray),
            Span::raw(" "),
            badge(loan.status.as_str(), status_color),
        ]));
        lines.push(muted(format!("  {}", loan.description)));
        lines.push(Line::from(format!(
            "  Max {}  ·  Interest {}  ·  Tenure {}",
            loan.max_amount, loan.interest_rate, loan.tenure
        )));
        lines.push(Line::from("  Eligibility"));
        for criteria in loan.eligibility {
            lines.push(Line::from(format!("    ✓ {}", criteria)));
        }
        lines.push(Line::default());
    }
    lines
}

pub fn subsidy_lines(today: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = vec![muted(Section::Subsidies.tagline())];

    let summary: Vec<Span> = subsidies::SUMMARY
        .iter()
        .flat_map(|(label, value)| {
            [
                Span::styled(format!("  {} ", value), Style::default().fg(Color::Green).bold()),
                Span::styled(label.to_string(), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();
    lines.push(Line::from(summary));
    lines.push(Line::default());

    for scheme in subsidies::schemes() {
        let status_color = match scheme.status {
            SubsidyStatus::Active => Color::Green,
            SubsidyStatus::ClosingSoon => Color::Yellow,
            SubsidyStatus::Upcoming => Color::Cyan,
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", scheme.category.icon())),
            Span::styled(scheme.name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            badge(scheme.category.as_str(), Color::Gray),
            Span::raw(" "),
            badge(scheme.status.label(), status_color),
        ]));
        lines.push(muted(format!("  {}", scheme.description)));
        lines.push(Line::from(format!(
            "  {}% subsidy  ·  up to {}  ·  {} beneficiaries",
            scheme.subsidy_percent,
            scheme.max_amount_label(),
            scheme.beneficiaries
        )));
        if let (Some(label), Some(deadline)) = (scheme.deadline_label(today), scheme.deadline) {
            lines.push(Line::from(vec![
                Span::raw("  ⏰ "),
                Span::styled(label, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("  ({})", krishi_core::format::date_in(deadline)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        let (shown, more) = scheme.eligibility_preview();
        lines.push(Line::from("  Eligibility Criteria"));
        for criteria in shown {
            lines.push(Line::from(format!("    ✓ {}", criteria)));
        }
        if let Some(more) = more {
            lines.push(muted(format!("    {}", more)));
        }
        lines.push(muted(format!("  Documents: {}", scheme.documents.join(", "))));
        lines.push(Line::from(vec![
            Span::raw("  "),
            badge(scheme.action_label(), if scheme.can_apply() { Color::Green } else { Color::DarkGray }),
        ]));
        lines.push(Line::default());
    }

    lines.push(muted(
        "Our field officers are available to assist you with subsidy applications and documentation",
    ));
    lines
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Green,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::Red,
    }
}

pub fn climate_lines(app: &App, today: NaiveDate) -> Vec<Line<'static>> {
    let w = &app.weather;
    let mut lines = vec![
        muted(Section::Climate.tagline()),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{} Current Weather", w.condition.icon()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  📍 {}", w.location), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(format!(
            "  Temperature {:.0}°C (min {:.0}°, max {:.0}°)  ·  Humidity {:.0}%",
            w.temperature.current, w.temperature.min, w.temperature.max, w.humidity
        )),
        Line::from(format!(
            "  Rainfall today {:.1}mm, forecast {:.0}mm  ·  Wind {:.0} km/h  ·  UV {}",
            w.rainfall.today, w.rainfall.forecast, w.wind_speed, w.uv_index
        )),
        Line::from(format!(
            "  Soil Moisture Level {}%  ·  {}",
            w.soil_moisture,
            climate::soil_advice(w.soil_moisture)
        )),
        Line::default(),
        heading("7-Day Forecast"),
    ];

    let forecast: Vec<Span> = climate::forecast(today)
        .iter()
        .map(|d| {
            Span::raw(format!(
                "  {:>2} {} {}°/{}°",
                d.day_of_month(),
                d.condition.icon(),
                d.high,
                d.low
            ))
        })
        .collect();
    lines.push(Line::from(forecast));
    lines.push(Line::default());

    lines.push(heading("Climate Alerts"));
    for alert in climate::alerts() {
        lines.push(Line::from(vec![
            Span::styled(alert.title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            badge(format!("{} priority", alert.severity.as_str()), severity_color(alert.severity)),
        ]));
        lines.push(Line::from(format!("  {}", alert.description)));
        lines.push(Line::from(format!("  → {}", alert.action)));
        lines.push(muted(format!(
            "  Valid until {}",
            krishi_core::format::date_in(alert.valid_until)
        )));
    }
    lines.push(Line::default());

    lines.push(heading("Climate-Based Crop Recommendations"));
    for rec in climate::recommendations() {
        let color = match rec.suitability {
            Suitability::Excellent => Color::Green,
            Suitability::Good => Color::Cyan,
            Suitability::Moderate => Color::Yellow,
            Suitability::Poor => Color::Red,
        };
        lines.push(Line::from(vec![
            Span::styled(rec.crop.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            badge(rec.suitability.as_str(), color),
            Span::styled(format!("  {}", rec.expected_yield), Style::default().fg(Color::Gray)),
        ]));
        lines.push(muted(format!("  {}", rec.reason)));
        for practice in rec.best_practices.iter().take(2) {
            lines.push(Line::from(format!("    • {}", practice)));
        }
    }
    lines
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    title: &str,
    placeholder: &str,
    editing: bool,
) {
    let border_color = if editing { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    // Horizontal scroll keeps the cursor visible; inner width excludes borders.
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll_offset = if inner_width == 0 {
        0
    } else if input.cursor >= inner_width {
        input.cursor - inner_width + 1
    } else {
        0
    };

    let paragraph = if input.text.is_empty() && !editing {
        Paragraph::new(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
    } else {
        let visible: String = input.text.chars().skip(scroll_offset).take(inner_width).collect();
        Paragraph::new(visible).style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(paragraph.block(block), area);

    if editing {
        let cursor_x = (input.cursor - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_disease(app: &mut App, frame: &mut Frame, area: Rect) {
    let [upload_area, results_area] = Layout::horizontal([
        Constraint::Percentage(45),
        Constraint::Percentage(55),
    ])
    .areas(area);

    let [path_area, status_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(upload_area);

    let editing = app.input_mode == InputMode::Editing && app.edit_target == EditTarget::ImagePath;
    render_input(
        frame,
        path_area,
        &app.image_input,
        "Upload Plant Image (o to edit)",
        "Path to a photo of the affected leaves, stems, or fruits",
        editing,
    );

    let mut status = vec![muted(Section::DiseaseDetection.tagline()), Line::default()];
    match app.scanner.image() {
        Some(image) => {
            status.push(Line::from(vec![
                Span::raw("🖼  "),
                Span::styled(image.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  ({} bytes)", image.size_bytes), Style::default().fg(Color::DarkGray)),
            ]));
        }
        None => status.push(muted("No image selected")),
    }
    status.push(Line::default());

    let dots = ".".repeat(app.animation_frame as usize + 1);
    match app.scanner.state() {
        ScanState::NoImage => status.push(muted("[ Analyze Disease ] (choose an image first)")),
        ScanState::Ready | ScanState::Done => status.push(Line::from(Span::styled(
            "[ Analyze Disease ] press a",
            Style::default().fg(Color::Green),
        ))),
        ScanState::Analyzing => {
            status.push(Line::from(Span::styled(
                format!("Analyzing{}", dots),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )));
            status.push(muted("Using advanced AI models to identify plant diseases..."));
        }
    }

    let upload = Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)))
        .wrap(Wrap { trim: true });
    frame.render_widget(upload, status_area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    match app.scanner.result() {
        Some(result) => {
            lines.push(Line::from(vec![
                Span::styled(result.disease.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                badge(format!("{} severity", result.severity.as_str()), severity_color(result.severity)),
            ]));
            lines.push(Line::from(format!("  Confidence {}%", result.confidence)));
            lines.push(Line::default());
            lines.push(heading("Immediate Treatment"));
            for step in result.treatment {
                lines.push(Line::from(format!("  • {}", step)));
            }
            lines.push(Line::default());
            lines.push(heading("Prevention Tips"));
            for tip in result.preventive_measures {
                lines.push(Line::from(format!("  • {}", tip)));
            }
        }
        None => lines.push(muted("Our AI will analyze the image and provide detailed diagnosis")),
    }

    let results = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Detection Results "),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll, 0));
    frame.render_widget(results, results_area);
}

fn render_voice(app: &mut App, frame: &mut Frame, area: Rect) {
    let [assistant_area, history_area] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(60),
    ])
    .areas(area);

    let dots = ".".repeat(app.animation_frame as usize + 1);
    let mut lines = vec![
        muted(Section::Support.tagline()),
        Line::default(),
    ];
    if app.voice.is_recording() {
        lines.push(Line::from(Span::styled(
            "🔴 Listening... press r to stop",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if app.voice.is_processing() {
        lines.push(Line::from(Span::styled(
            format!("Processing{}", dots),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "🎤 Start Voice Query (r)",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    if !app.voice.current_query().is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(format!("“{}”", app.voice.current_query())));
    }
    lines.push(Line::default());
    lines.push(heading("Language (v)"));
    let languages: Vec<Span> = krishi_core::VoiceLanguage::all()
        .into_iter()
        .map(|l| {
            if l == app.voice.language() {
                badge(l.display_name(), Color::Green)
            } else {
                Span::raw(format!(" {} ", l.display_name()))
            }
        })
        .collect();
    lines.push(Line::from(languages));

    let assistant = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Voice Assistant "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(assistant, assistant_area);

    let playing = app.voice.playing_id().map(str::to_string);
    let items: Vec<ListItem> = app
        .voice
        .history()
        .iter()
        .map(|q| {
            let play = if playing.as_deref() == Some(q.id.as_str()) {
                "🔊 Playing..."
            } else {
                "▶ Play Audio"
            };
            ListItem::new(vec![
                Line::from(vec![
                    badge(q.category.as_str(), Color::Gray),
                    Span::styled(
                        format!(" {}  {}", q.timestamp.format("%H:%M:%S"), q.language.as_str()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(q.query.clone(), Style::default().fg(Color::Cyan))),
                Line::from(q.response.clone()),
                Line::from(Span::styled(play, Style::default().fg(Color::Green))),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Recent Queries "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::Black))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, history_area, &mut app.voice_state);
}

fn render_chat_bar(app: &App, frame: &mut Frame, area: Rect) {
    let t = app.labels();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 💬 {} ", t.chat_title));
    let hint = Paragraph::new(muted(format!("m: {}  c: {}", t.maximize, t.close))).block(block);
    frame.render_widget(hint, area);
}

/// Chat history as drawn inside the panel, typing indicator included.
pub fn chat_lines(app: &App) -> Vec<Line<'static>> {
    let t = app.labels();

    let mut lines = vec![muted(t.chat_subtitle), Line::default()];
    for msg in app.chat.messages() {
        let (who, color) = match msg.sender {
            Sender::User => ("You", Color::Cyan),
            Sender::Bot => ("🤖", Color::Yellow),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}:", who), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", msg.timestamp.format("%H:%M")), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(msg.text.clone()));
        lines.push(Line::default());
    }
    if app.chat.is_typing() {
        let dots = ".".repeat(app.animation_frame as usize + 1);
        lines.push(Line::from(Span::styled(
            "🤖:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{}{}", t.typing.trim_end_matches('.'), dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

/// Rows the chat history takes once wrapped to `width`.
pub fn chat_line_count(app: &App, width: u16) -> usize {
    Paragraph::new(chat_lines(app))
        .wrap(Wrap { trim: true })
        .line_count(width)
}

fn render_chat(app: &mut App, frame: &mut Frame, area: Rect) {
    let t = app.labels();

    let [chat_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    // Inner size minus borders; re-pin to the bottom when the panel changes size.
    let height = chat_area.height.saturating_sub(2);
    let width = chat_area.width.saturating_sub(2);
    if (height, width) != (app.chat_height, app.chat_width) {
        app.chat_height = height;
        app.chat_width = width;
        app.scroll_chat_to_bottom();
    }

    let chat = Paragraph::new(chat_lines(app))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" 💬 {} (m: {}) ", t.chat_title, t.minimize)),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(chat, chat_area);

    let editing = app.input_mode == InputMode::Editing && app.edit_target == EditTarget::Chat;
    render_input(frame, input_area, &app.chat_input, t.send, t.placeholder, editing);
}
