// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Header, footer, help, chip, and text helpers used by TUI rendering.
fn render_header(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let mut tab_spans = Vec::<Span<'static>>::new();
    for (idx, route) in Route::PAGES.iter().enumerate() {
        let active = app.context.route() == *route;
        tab_spans.push(Span::styled(
            format!(" {}:{} ", idx + 1, route.title()),
            app.theme.chip_style(active),
        ));
        tab_spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tab_spans)), area);

    if area.height < 2 {
        return;
    }
    let crumb_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let route = app.context.route();
    let crumb = Line::from(vec![
        Span::styled(route.path().to_owned(), app.theme.accent_style()),
        Span::styled(format!(" ── {}", route.title()), app.theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(crumb), crumb_area);

    let mode = Paragraph::new(Line::from(Span::styled(
        format!("theme: {} (t) ", app.context.theme_mode()),
        app.theme.muted_style(),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(mode, crumb_area);
}

fn render_footer(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let mut spans = Vec::<Span<'static>>::new();

    if let Some(message) = app.active_toast() {
        spans.push(Span::styled(format!("● {message}  "), app.theme.accent_style()));
    }

    let mut push_hint = |key: &str, label: &str| {
        spans.push(Span::styled(key.to_owned(), app.theme.accent_style()));
        spans.push(Span::styled(format!(" {label}  "), app.theme.muted_style()));
    };

    match app.context.route() {
        Route::Home => {
            push_hint("j/k", "node");
            push_hint("enter", "select");
            push_hint("esc", "deselect");
        }
        Route::Components => {
            push_hint("/", "search");
            push_hint("c", "category");
            push_hint("enter", "expand");
        }
        Route::Interview => {
            push_hint("/", "search");
            push_hint("c", "category");
            push_hint("d", "difficulty");
            push_hint("enter", "expand");
        }
        Route::Implementation | Route::BestPractices => {
            push_hint("j/k", "scroll");
            push_hint("g/G", "top/bottom");
        }
        Route::NotFound => {
            push_hint("1-5", "pages");
        }
    }
    push_hint("tab", "page");
    push_hint("?", "help");
    push_hint("q", "quit");

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let brand = Paragraph::new(Line::from(Span::styled(
        FOOTER_BRAND,
        app.theme.title_style(),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(brand, area);
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let popup = popup_rect(area, 70, 90);
    frame.render_widget(Clear, popup);

    let lines = help_lines(&app.theme);
    let max_scroll = lines
        .len()
        .saturating_sub(usize::from(popup.height.saturating_sub(2)));
    app.help_scroll = app.help_scroll.min(max_scroll.min(usize::from(u16::MAX)) as u16);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ── ? closes ")
                .border_style(app.theme.panel_border_style(true))
                .style(app.theme.base_style()),
        )
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, popup);
}

fn help_lines(theme: &TuiTheme) -> Vec<Line<'static>> {
    let key = |key: &str, label: &str| {
        Line::from(vec![
            Span::styled(format!("{key:<16}"), theme.accent_style()),
            Span::raw(label.to_owned()),
        ])
    };

    vec![
        Line::from(Span::styled("Navigation", theme.title_style())),
        key("1-5", "open page (Home, Components, Implementation, Best Practices, Interview)"),
        key("tab / shift-tab", "next / previous page"),
        key("h / l, ← / →", "previous / next page"),
        Line::default(),
        Line::from(Span::styled("Within a page", theme.title_style())),
        key("j / k, ↓ / ↑", "move cursor or scroll"),
        key("pgup / pgdn", "scroll by page"),
        key("g / G", "jump to top / bottom"),
        key("enter / space", "expand card, select diagram node"),
        key("esc", "reset the view's selection and filters"),
        Line::default(),
        Line::from(Span::styled("Filtering", theme.title_style())),
        key("/", "edit search (enter keeps, esc clears)"),
        key("c", "cycle category filter"),
        key("d", "cycle difficulty filter (interview page)"),
        Line::default(),
        Line::from(Span::styled("Misc", theme.title_style())),
        key("t", "toggle light/dark theme"),
        key("?", "toggle this help"),
        key("q", "quit"),
    ]
}

fn pad_horizontal(area: Rect, pad: u16) -> Rect {
    let pad = pad.min(area.width / 2);
    Rect {
        x: area.x + pad,
        width: area.width - pad * 2,
        ..area
    }
}

fn popup_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn components_chip_line(app: &App) -> Line<'static> {
    let view = &app.views.components;
    let mut spans = vec![
        Span::styled("category (c): ".to_owned(), app.theme.muted_style()),
        Span::styled(
            format!(" all ({}) ", count_str(app.catalog.components().len())),
            app.theme.chip_style(view.category.is_all()),
        ),
        Span::raw(" "),
    ];
    for category in ComponentCategory::ALL {
        spans.push(Span::styled(
            format!(" {category} "),
            app.theme
                .chip_style(view.category == CategoryFilter::Only(category)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn interview_category_line(app: &App) -> Line<'static> {
    let view = &app.views.interview;
    let mut spans = vec![
        Span::styled("category (c):   ".to_owned(), app.theme.muted_style()),
        Span::styled(" all ".to_owned(), app.theme.chip_style(view.category.is_all())),
        Span::raw(" "),
    ];
    for category in QaCategory::ALL {
        spans.push(Span::styled(
            format!(" {} ", category.label()),
            app.theme
                .chip_style(view.category == CategoryFilter::Only(category)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn interview_difficulty_line(app: &App) -> Line<'static> {
    let view = &app.views.interview;
    let mut spans = vec![
        Span::styled("difficulty (d): ".to_owned(), app.theme.muted_style()),
        Span::styled(
            " all ".to_owned(),
            app.theme.chip_style(view.difficulty.is_all()),
        ),
        Span::raw(" "),
    ];
    for difficulty in Difficulty::ALL {
        spans.push(Span::styled(
            format!(" {difficulty} "),
            app.theme
                .chip_style(view.difficulty == CategoryFilter::Only(difficulty)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn search_line(query: &str, editing: bool, theme: &TuiTheme) -> Line<'static> {
    let mut spans = vec![Span::styled("search (/): ".to_owned(), theme.muted_style())];
    if query.is_empty() && !editing {
        spans.push(Span::styled("type / to search".to_owned(), theme.muted_style()));
    } else {
        spans.push(Span::raw(query.to_owned()));
    }
    if editing {
        spans.push(Span::styled("█".to_owned(), theme.accent_style()));
    }
    Line::from(spans)
}

fn count_str(value: usize) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_owned()
}

/// Greedy word wrap by character count; explicit line breaks are preserved
/// and words wider than the viewport are hard-split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in raw_line.split(' ') {
            let mut word = word;
            let mut word_len = word.chars().count();

            while word_len > width {
                if current_len > 0 {
                    out.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let split_at = word
                    .char_indices()
                    .nth(width)
                    .map(|(byte_idx, _)| byte_idx)
                    .unwrap_or(word.len());
                out.push(word[..split_at].to_owned());
                word = &word[split_at..];
                word_len = word.chars().count();
            }

            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if needed > width && current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }

        out.push(current);
    }

    out
}

/// Splits a rendered line into styled segments; later ranges win on overlap.
/// Ranges are `(x0, x1, style)` in inclusive character cells.
fn styled_line_segments(
    line: &str,
    ranges: &[(usize, usize, Style)],
    base: Style,
) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return Line::default();
    }

    let mut styles = vec![base; chars.len()];
    for (x0, x1, style) in ranges {
        if *x0 >= chars.len() {
            continue;
        }
        for cell in styles.iter_mut().take((*x1 + 1).min(chars.len())).skip(*x0) {
            *cell = *style;
        }
    }

    let mut spans = Vec::<Span<'static>>::new();
    let mut segment = String::new();
    let mut segment_style = styles[0];
    for (ch, style) in chars.into_iter().zip(styles) {
        if style != segment_style && !segment.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut segment), segment_style));
        }
        segment_style = style;
        segment.push(ch);
    }
    if !segment.is_empty() {
        spans.push(Span::styled(segment, segment_style));
    }

    Line::from(spans)
}
