// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The page shell: a route table mapping paths to views, a header with
//! navigation and theme toggle, and five content pages plus a not-found view.
//! Each view owns its ephemeral selection state; navigation discards it.

use std::{
    collections::BTreeSet,
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::content;
use crate::format::{format_answer, AnswerBody};
use crate::model::{
    Catalog, Component, ComponentCategory, ComponentId, Difficulty, InterviewQa, NodeId,
    QaCategory,
};
use crate::query::{filter_components, filter_questions, CategoryFilter};
use crate::render::{render_diagram_unicode_annotated, AnnotatedRender, RenderOptions};
use crate::ui::UiContext;

pub mod routes;
pub mod theme;

use routes::Route;
use theme::TuiTheme;

const TOAST_TTL: Duration = Duration::from_secs(3);
const FOOTER_BRAND: &str = "🅿 🆁 🅾 🆃 🅴 🆄 🆂 ";
const EXPANDED_MARKER: &str = "▾";
const COLLAPSED_MARKER: &str = "▸";
const CURSOR_MARKER: &str = "❯";

/// Runs the interactive terminal UI against the built-in dataset.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_catalog(content::builtin_catalog(), Route::Home)
}

/// Runs the interactive terminal UI against `catalog`, starting on
/// `initial_route`. Theme mode and palette come from the environment.
pub fn run_with_catalog(catalog: Catalog, initial_route: Route) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let context = UiContext::new(initial_route, theme.mode());

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(catalog, context, theme)?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let header_area = layout[0];
    let body_area = layout[1];
    let footer_area = layout[2];

    app.page_height = body_area.height.saturating_sub(2);

    render_header(frame, app, header_area);

    match app.context.route() {
        Route::Home => draw_home(frame, app, body_area),
        Route::Components => draw_components(frame, app, body_area),
        Route::Implementation => draw_guide(frame, app, body_area),
        Route::BestPractices => draw_practices(frame, app, body_area),
        Route::Interview => draw_interview(frame, app, body_area),
        Route::NotFound => draw_not_found(frame, app, body_area),
    }

    render_footer(frame, app, footer_area);

    if app.show_help {
        render_help(frame, app, body_area);
    }
}

fn draw_home(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let detail_height = if app.selected_home_component().is_some() { 10 } else { 3 };
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(detail_height),
        ])
        .split(area);

    let hero_width = usize::from(sections[0].width.saturating_sub(2));
    let mut hero_lines = vec![Line::from(Span::styled(
        "Master Playwright Framework",
        app.theme.title_style(),
    ))];
    for wrapped in wrap_text(
        "An interactive guide to building robust test automation frameworks: \
         data-driven testing, Page Object Model, Allure reporting, and CI/CD integration.",
        hero_width.max(20),
    ) {
        hero_lines.push(Line::from(Span::styled(wrapped, app.theme.muted_style())));
    }
    hero_lines.push(Line::from(Span::styled(
        "Interactive diagram · real code examples · complete framework coverage",
        app.theme.accent_style(),
    )));
    frame.render_widget(
        Paragraph::new(Text::from(hero_lines)),
        pad_horizontal(sections[0], 1),
    );

    let diagram_area = sections[1];
    let cursor_label = app
        .cursor_node()
        .map(|node| node.label().to_owned())
        .unwrap_or_else(|| "—".to_owned());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Architecture ── {cursor_label} "))
        .border_style(app.theme.panel_border_style(true));
    let inner = block.inner(diagram_area);
    frame.render_widget(block, diagram_area);

    app.follow_diagram_cursor(inner.width, inner.height);
    let lines = diagram_lines(app);
    let paragraph = Paragraph::new(Text::from(lines))
        .scroll((app.views.home.scroll_y, app.views.home.scroll_x));
    frame.render_widget(paragraph, inner);

    let detail_area = sections[2];
    match app.selected_home_component().cloned() {
        Some(component) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", component.title()))
                .border_style(app.theme.panel_border_style(false));
            let inner = block.inner(detail_area);
            frame.render_widget(block, detail_area);

            let width = usize::from(inner.width).max(20);
            let mut lines = vec![Line::from(vec![
                Span::styled(component.short_title().to_owned(), app.theme.accent_style()),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", component.category()),
                    app.theme.muted_style(),
                ),
            ])];
            for wrapped in wrap_text(component.description(), width) {
                lines.push(Line::from(Span::raw(wrapped)));
            }
            for detail in component.details().iter().take(4) {
                lines.push(Line::from(Span::styled(
                    format!("• {detail}"),
                    app.theme.muted_style(),
                )));
            }
            frame.render_widget(Paragraph::new(Text::from(lines)), inner);
        }
        None => {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Move with j/k and press enter on a linked node (↗) to view its component.",
                app.theme.muted_style(),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(app.theme.panel_border_style(false)),
            );
            frame.render_widget(hint, detail_area);
        }
    }
}

fn draw_components(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let filters = vec![
        components_chip_line(app),
        search_line(
            &app.views.components.search,
            app.views.components.search_mode == SearchMode::Editing,
            &app.theme,
        ),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(filters)),
        pad_horizontal(sections[0], 1),
    );

    let filtered = filter_components(
        app.catalog.components(),
        app.views.components.category,
        &app.views.components.search.clone(),
    );
    let shown = filtered.len();
    let total = app.catalog.components().len();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Components ── {} of {} ", count_str(shown), count_str(total)))
        .border_style(app.theme.panel_border_style(true));
    let inner = block.inner(sections[1]);
    frame.render_widget(block, sections[1]);

    let width = usize::from(inner.width).max(20);
    let mut lines = Vec::new();
    let mut item_starts = Vec::with_capacity(filtered.len());

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "No components found matching your criteria.",
            app.theme.muted_style(),
        )));
    } else {
        let cursor = app.views.components.cursor.min(filtered.len() - 1);
        app.views.components.cursor = cursor;
        for (idx, component) in filtered.iter().enumerate() {
            item_starts.push(lines.len());
            let expanded = app.views.components.expanded.contains(component.id());
            push_component_card(
                &mut lines,
                component,
                expanded,
                idx == cursor,
                width,
                &app.theme,
            );
        }
    }

    let view = &mut app.views.components;
    view.scroll = scroll_for_cursor(
        view.scroll,
        view.follow_cursor.then(|| item_starts.get(view.cursor).copied().unwrap_or(0)),
        lines.len(),
        inner.height,
    );
    view.follow_cursor = false;

    let paragraph = Paragraph::new(Text::from(lines)).scroll((view.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn draw_interview(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let filters = vec![
        interview_category_line(app),
        interview_difficulty_line(app),
        search_line(
            &app.views.interview.search,
            app.views.interview.search_mode == SearchMode::Editing,
            &app.theme,
        ),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(filters)),
        pad_horizontal(sections[0], 1),
    );

    let filtered = filter_questions(
        app.catalog.questions(),
        app.views.interview.category,
        app.views.interview.difficulty,
        &app.views.interview.search.clone(),
    );
    let shown = filtered.len();
    let total = app.catalog.questions().len();
    let is_filtered = !app.views.interview.category.is_all()
        || !app.views.interview.difficulty.is_all()
        || !app.views.interview.search.is_empty();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Interview Questions ")
        .border_style(app.theme.panel_border_style(true));
    let inner = block.inner(sections[1]);
    frame.render_widget(block, sections[1]);

    let width = usize::from(inner.width).max(20);
    let mut lines = Vec::new();
    let mut item_starts = Vec::with_capacity(filtered.len());

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "No questions found matching your criteria.",
            app.theme.muted_style(),
        )));
    } else {
        let cursor = app.views.interview.cursor.min(filtered.len() - 1);
        app.views.interview.cursor = cursor;
        for (idx, qa) in filtered.iter().enumerate() {
            item_starts.push(lines.len());
            let expanded = app.views.interview.expanded.contains(&qa.id());
            push_question_card(&mut lines, qa, expanded, idx == cursor, width, &app.theme);
        }
    }

    let mut summary = format!(
        "Showing {} of {} questions",
        count_str(shown),
        count_str(total)
    );
    if is_filtered {
        summary.push_str(" (filtered)");
    }
    lines.push(Line::from(Span::styled(summary, app.theme.muted_style())));

    let view = &mut app.views.interview;
    view.scroll = scroll_for_cursor(
        view.scroll,
        view.follow_cursor.then(|| item_starts.get(view.cursor).copied().unwrap_or(0)),
        lines.len(),
        inner.height,
    );
    view.follow_cursor = false;

    let paragraph = Paragraph::new(Text::from(lines)).scroll((view.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn draw_guide(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Implementation Guide ")
        .border_style(app.theme.panel_border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width).max(20);
    let mut lines = Vec::new();

    for wrapped in wrap_text(
        "Follow this step-by-step guide to build a complete test automation \
         framework from scratch. Each step lists the commands to run and the \
         tasks to complete.",
        width,
    ) {
        lines.push(Line::from(Span::styled(wrapped, app.theme.muted_style())));
    }
    lines.push(Line::default());

    for step in app.catalog.steps() {
        lines.push(Line::from(vec![
            Span::styled(format!("Step {}", step.step()), app.theme.chip_style(true)),
            Span::raw("  "),
            Span::styled(step.title().to_owned(), app.theme.title_style()),
        ]));
        for wrapped in wrap_text(step.description(), width) {
            lines.push(Line::from(Span::styled(wrapped, app.theme.muted_style())));
        }

        if !step.commands().is_empty() {
            lines.push(Line::from(Span::styled(
                "Commands to Run",
                app.theme.accent_style(),
            )));
            for command in step.commands() {
                lines.push(Line::from(vec![
                    Span::styled("  $ ", app.theme.accent_style()),
                    Span::styled(command.clone(), app.theme.code_style()),
                ]));
            }
        }

        lines.push(Line::from(Span::styled(
            "Tasks to Complete",
            app.theme.accent_style(),
        )));
        for task in step.tasks() {
            for (idx, wrapped) in wrap_text(task, width.saturating_sub(4).max(10))
                .into_iter()
                .enumerate()
            {
                let prefix = if idx == 0 { "  • " } else { "    " };
                lines.push(Line::from(Span::raw(format!("{prefix}{wrapped}"))));
            }
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Framework Complete!",
        app.theme.good_style().add_modifier(Modifier::BOLD),
    )));
    for wrapped in wrap_text(
        "Once all steps are done you have a production-ready framework with \
         data-driven testing, page objects, comprehensive reporting, and \
         automated CI/CD pipelines.",
        width,
    ) {
        lines.push(Line::from(Span::styled(wrapped, app.theme.muted_style())));
    }

    app.views.guide.scroll = clamp_scroll(app.views.guide.scroll, lines.len(), inner.height);
    let paragraph = Paragraph::new(Text::from(lines)).scroll((app.views.guide.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn draw_practices(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Best Practices ")
        .border_style(app.theme.panel_border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width).max(20);
    let mut lines = Vec::new();

    for group in app.catalog.practice_groups() {
        lines.push(Line::from(Span::styled(
            format!("── {} ──", group.category()),
            app.theme.title_style(),
        )));
        lines.push(Line::default());

        for practice in group.practices() {
            lines.push(Line::from(Span::styled(
                practice.title().to_owned(),
                app.theme.title_style(),
            )));
            for wrapped in wrap_text(practice.description(), width) {
                lines.push(Line::from(Span::styled(wrapped, app.theme.muted_style())));
            }
            lines.push(Line::from(Span::styled(
                "✓ Good Practice",
                app.theme.good_style(),
            )));
            for wrapped in wrap_text(practice.good(), width.saturating_sub(2).max(10)) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(wrapped, app.theme.code_style()),
                ]));
            }
            lines.push(Line::from(Span::styled("✗ Avoid This", app.theme.bad_style())));
            for wrapped in wrap_text(practice.bad(), width.saturating_sub(2).max(10)) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(wrapped, app.theme.muted_style()),
                ]));
            }
            lines.push(Line::default());
        }
    }

    lines.push(Line::from(Span::styled("Remember", app.theme.title_style())));
    for wrapped in wrap_text(
        "These practices come from years of building and maintaining test \
         automation frameworks. Start with the basics and adopt the advanced \
         ones as your framework matures.",
        width,
    ) {
        lines.push(Line::from(Span::styled(wrapped, app.theme.muted_style())));
    }

    app.views.practices.scroll =
        clamp_scroll(app.views.practices.scroll, lines.len(), inner.height);
    let paragraph = Paragraph::new(Text::from(lines)).scroll((app.views.practices.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn draw_not_found(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("404", app.theme.error_style().add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(Span::raw("The path does not match any route.")),
        Line::from(Span::styled(
            "Press 1-5 to open a page, q to quit.",
            app.theme.muted_style(),
        )),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_style(false)),
        );
    frame.render_widget(paragraph, area);
}

fn push_component_card(
    lines: &mut Vec<Line<'static>>,
    component: &Component,
    expanded: bool,
    is_cursor: bool,
    width: usize,
    theme: &TuiTheme,
) {
    let marker = if expanded { EXPANDED_MARKER } else { COLLAPSED_MARKER };
    let cursor = if is_cursor { CURSOR_MARKER } else { " " };
    let title_style = if is_cursor {
        theme.selection_style()
    } else {
        theme.title_style()
    };

    lines.push(Line::from(vec![
        Span::styled(format!("{cursor} {marker} "), theme.accent_style()),
        Span::styled(component.title().to_owned(), title_style),
        Span::raw("  "),
        Span::styled(format!("[{}]", component.category()), theme.muted_style()),
    ]));
    lines.push(Line::from(Span::styled(
        format!("    {}", component.short_title()),
        theme.accent_style(),
    )));
    for wrapped in wrap_text(component.description(), width.saturating_sub(4).max(10)) {
        lines.push(Line::from(Span::raw(format!("    {wrapped}"))));
    }

    if expanded {
        for detail in component.details() {
            for (idx, wrapped) in wrap_text(detail, width.saturating_sub(6).max(10))
                .into_iter()
                .enumerate()
            {
                let prefix = if idx == 0 { "    • " } else { "      " };
                lines.push(Line::from(Span::styled(
                    format!("{prefix}{wrapped}"),
                    theme.muted_style(),
                )));
            }
        }
        if let Some(code) = component.code_example() {
            lines.push(Line::from(Span::styled(
                "    Code Example",
                theme.accent_style(),
            )));
            for code_line in code.lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {code_line}"),
                    theme.code_style(),
                )));
            }
        }
    }
    lines.push(Line::default());
}

fn push_question_card(
    lines: &mut Vec<Line<'static>>,
    qa: &InterviewQa,
    expanded: bool,
    is_cursor: bool,
    width: usize,
    theme: &TuiTheme,
) {
    let marker = if expanded { EXPANDED_MARKER } else { COLLAPSED_MARKER };
    let cursor = if is_cursor { CURSOR_MARKER } else { " " };
    let title_style = if is_cursor {
        theme.selection_style()
    } else {
        theme.title_style()
    };

    lines.push(Line::from(vec![
        Span::styled(format!("{cursor} {marker} "), theme.accent_style()),
        Span::styled(format!("[{}]", qa.category().label()), theme.qa_category_style(qa.category())),
        Span::raw(" "),
        Span::styled(format!("[{}]", qa.difficulty()), theme.difficulty_style(qa.difficulty())),
    ]));
    let question = format!("Q{}: {}", count_str(qa.id() as usize), qa.question());
    for (idx, wrapped) in wrap_text(&question, width.saturating_sub(4).max(10))
        .into_iter()
        .enumerate()
    {
        let style = if idx == 0 { title_style } else { theme.title_style() };
        lines.push(Line::from(Span::styled(format!("    {wrapped}"), style)));
    }

    if expanded {
        match format_answer(qa.answer()) {
            AnswerBody::Paragraph(text) => {
                for paragraph_line in text.split('\n') {
                    for wrapped in wrap_text(paragraph_line, width.saturating_sub(4).max(10)) {
                        lines.push(Line::from(Span::raw(format!("    {wrapped}"))));
                    }
                }
            }
            AnswerBody::Bullets { intro, items } => {
                for wrapped in wrap_text(&intro, width.saturating_sub(4).max(10)) {
                    lines.push(Line::from(Span::raw(format!("    {wrapped}"))));
                }
                for item in items {
                    for (idx, wrapped) in wrap_text(&item, width.saturating_sub(6).max(10))
                        .into_iter()
                        .enumerate()
                    {
                        let prefix = if idx == 0 { "    • " } else { "      " };
                        lines.push(Line::from(Span::raw(format!("{prefix}{wrapped}"))));
                    }
                }
            }
            AnswerBody::CodeBlock { text, code } => {
                for wrapped in wrap_text(&text, width.saturating_sub(4).max(10)) {
                    lines.push(Line::from(Span::raw(format!("    {wrapped}"))));
                }
                for wrapped in wrap_text(&code, width.saturating_sub(4).max(10)) {
                    lines.push(Line::from(Span::styled(
                        format!("    {wrapped}"),
                        theme.code_style(),
                    )));
                }
            }
        }
    }
    lines.push(Line::default());
}

fn diagram_lines(app: &App) -> Vec<Line<'static>> {
    let cursor_spans = app
        .cursor_node()
        .and_then(|node| app.diagram.highlight_index.get(node.id()));
    let selected_spans = app
        .views
        .home
        .selected_node
        .as_ref()
        .and_then(|node_id| app.diagram.highlight_index.get(node_id));

    let base = app.theme.base_style();
    let cursor_style = app.theme.accent_style().add_modifier(Modifier::BOLD);
    let selected_style = app.theme.selection_style();

    app.diagram
        .text
        .split('\n')
        .enumerate()
        .map(|(y, line)| {
            let mut ranges: Vec<(usize, usize, Style)> = Vec::new();
            if let Some(spans) = cursor_spans {
                for (span_y, x0, x1) in spans {
                    if *span_y == y {
                        ranges.push((*x0, *x1, cursor_style));
                    }
                }
            }
            if let Some(spans) = selected_spans {
                for (span_y, x0, x1) in spans {
                    if *span_y == y {
                        ranges.push((*x0, *x1, selected_style));
                    }
                }
            }
            styled_line_segments(line, &ranges, base)
        })
        .collect()
}

// Extracted header/footer/help/chip rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SearchMode {
    #[default]
    Inactive,
    Editing,
}

#[derive(Debug, Default)]
struct HomeView {
    cursor: usize,
    selected_node: Option<NodeId>,
    scroll_x: u16,
    scroll_y: u16,
    follow_cursor: bool,
}

#[derive(Debug, Default)]
struct ComponentsView {
    category: CategoryFilter<ComponentCategory>,
    search: String,
    search_mode: SearchMode,
    expanded: BTreeSet<ComponentId>,
    cursor: usize,
    scroll: u16,
    follow_cursor: bool,
}

#[derive(Debug, Default)]
struct GuideView {
    scroll: u16,
}

#[derive(Debug, Default)]
struct PracticesView {
    scroll: u16,
}

#[derive(Debug, Default)]
struct InterviewView {
    category: CategoryFilter<QaCategory>,
    difficulty: CategoryFilter<Difficulty>,
    search: String,
    search_mode: SearchMode,
    expanded: BTreeSet<u32>,
    cursor: usize,
    scroll: u16,
    follow_cursor: bool,
}

/// Per-view ephemeral selection state. Replaced wholesale on navigation.
#[derive(Debug, Default)]
struct Views {
    home: HomeView,
    components: ComponentsView,
    guide: GuideView,
    practices: PracticesView,
    interview: InterviewView,
}

struct App {
    catalog: Catalog,
    context: UiContext,
    theme: TuiTheme,
    diagram: AnnotatedRender,
    views: Views,
    toast: Option<Toast>,
    show_help: bool,
    help_scroll: u16,
    page_height: u16,
    should_quit: bool,
}

impl App {
    fn new(
        catalog: Catalog,
        context: UiContext,
        theme: TuiTheme,
    ) -> Result<Self, Box<dyn Error>> {
        let diagram = render_diagram_unicode_annotated(
            catalog.diagram(),
            RenderOptions { mark_linked: true },
        )?;

        Ok(Self {
            catalog,
            context,
            theme,
            diagram,
            views: Views::default(),
            toast: None,
            show_help: false,
            help_scroll: 0,
            page_height: 0,
            should_quit: false,
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => {
                    self.show_help = false;
                    self.help_scroll = 0;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                _ => {}
            }
            return false;
        }

        if self.search_editing() {
            self.handle_search_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('t') => {
                let mode = self.context.toggle_theme();
                self.theme.set_mode(mode);
                self.set_toast(format!("Theme: {mode}"));
            }
            KeyCode::Char(ch @ '1'..='5') => {
                let idx = usize::from(ch as u8 - b'1');
                self.navigate_to(Route::PAGES[idx]);
            }
            KeyCode::Tab => self.navigate_to(self.context.route().next()),
            KeyCode::BackTab => self.navigate_to(self.context.route().prev()),
            KeyCode::Right | KeyCode::Char('l') => self.navigate_to(self.context.route().next()),
            KeyCode::Left | KeyCode::Char('h') => self.navigate_to(self.context.route().prev()),
            KeyCode::Char('/') => self.begin_search(),
            KeyCode::Char('c') => self.cycle_category(),
            KeyCode::Char('d') => self.cycle_difficulty(),
            KeyCode::Esc => self.clear_view_state(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.scroll_page(-1),
            KeyCode::PageDown => self.scroll_page(1),
            KeyCode::Char('g') | KeyCode::Home => self.jump_top(),
            KeyCode::Char('G') | KeyCode::End => self.jump_bottom(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => {}
        }
        false
    }

    fn navigate_to(&mut self, route: Route) {
        if self.context.navigate(route) {
            // Selection state is per-view and dies with the navigation.
            self.views = Views::default();
        }
    }

    fn search_editing(&self) -> bool {
        match self.context.route() {
            Route::Components => self.views.components.search_mode == SearchMode::Editing,
            Route::Interview => self.views.interview.search_mode == SearchMode::Editing,
            _ => false,
        }
    }

    fn begin_search(&mut self) {
        match self.context.route() {
            Route::Components => self.views.components.search_mode = SearchMode::Editing,
            Route::Interview => self.views.interview.search_mode = SearchMode::Editing,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match self.context.route() {
            Route::Components => {
                let view = &mut self.views.components;
                match code {
                    KeyCode::Enter => view.search_mode = SearchMode::Inactive,
                    KeyCode::Esc => {
                        view.search.clear();
                        view.search_mode = SearchMode::Inactive;
                    }
                    KeyCode::Backspace => {
                        view.search.pop();
                    }
                    KeyCode::Char(ch) => view.search.push(ch),
                    _ => {}
                }
                view.cursor = 0;
                view.scroll = 0;
                view.follow_cursor = true;
            }
            Route::Interview => {
                let view = &mut self.views.interview;
                match code {
                    KeyCode::Enter => view.search_mode = SearchMode::Inactive,
                    KeyCode::Esc => {
                        view.search.clear();
                        view.search_mode = SearchMode::Inactive;
                    }
                    KeyCode::Backspace => {
                        view.search.pop();
                    }
                    KeyCode::Char(ch) => view.search.push(ch),
                    _ => {}
                }
                view.cursor = 0;
                view.scroll = 0;
                view.follow_cursor = true;
            }
            _ => {}
        }
    }

    fn cycle_category(&mut self) {
        match self.context.route() {
            Route::Components => {
                let view = &mut self.views.components;
                view.category = view.category.cycle(&ComponentCategory::ALL);
                view.cursor = 0;
                view.scroll = 0;
                view.follow_cursor = true;
            }
            Route::Interview => {
                let view = &mut self.views.interview;
                view.category = view.category.cycle(&QaCategory::ALL);
                view.cursor = 0;
                view.scroll = 0;
                view.follow_cursor = true;
            }
            _ => {}
        }
    }

    fn cycle_difficulty(&mut self) {
        if self.context.route() != Route::Interview {
            return;
        }
        let view = &mut self.views.interview;
        view.difficulty = view.difficulty.cycle(&Difficulty::ALL);
        view.cursor = 0;
        view.scroll = 0;
        view.follow_cursor = true;
    }

    fn clear_view_state(&mut self) {
        match self.context.route() {
            Route::Home => self.views.home.selected_node = None,
            Route::Components => self.views.components = ComponentsView::default(),
            Route::Interview => self.views.interview = InterviewView::default(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        match self.context.route() {
            Route::Home => {
                let len = self.catalog.diagram().nodes().len();
                if len == 0 {
                    return;
                }
                let view = &mut self.views.home;
                view.cursor = step_index(view.cursor, delta, len);
                view.follow_cursor = true;
            }
            Route::Components => {
                let len = self.filtered_component_count();
                if len == 0 {
                    return;
                }
                let view = &mut self.views.components;
                view.cursor = step_index(view.cursor.min(len - 1), delta, len);
                view.follow_cursor = true;
            }
            Route::Interview => {
                let len = self.filtered_question_count();
                if len == 0 {
                    return;
                }
                let view = &mut self.views.interview;
                view.cursor = step_index(view.cursor.min(len - 1), delta, len);
                view.follow_cursor = true;
            }
            Route::Implementation => {
                self.views.guide.scroll = step_scroll(self.views.guide.scroll, delta);
            }
            Route::BestPractices => {
                self.views.practices.scroll = step_scroll(self.views.practices.scroll, delta);
            }
            Route::NotFound => {}
        }
    }

    fn scroll_page(&mut self, direction: i32) {
        let page = i32::from(self.page_height.max(1));
        match self.context.route() {
            Route::Implementation => {
                self.views.guide.scroll = step_scroll(self.views.guide.scroll, direction * page);
            }
            Route::BestPractices => {
                self.views.practices.scroll =
                    step_scroll(self.views.practices.scroll, direction * page);
            }
            Route::Components => {
                self.views.components.scroll =
                    step_scroll(self.views.components.scroll, direction * page);
            }
            Route::Interview => {
                self.views.interview.scroll =
                    step_scroll(self.views.interview.scroll, direction * page);
            }
            Route::Home => {
                self.views.home.scroll_y =
                    step_scroll(self.views.home.scroll_y, direction * page);
            }
            Route::NotFound => {}
        }
    }

    fn jump_top(&mut self) {
        match self.context.route() {
            Route::Home => {
                self.views.home.cursor = 0;
                self.views.home.follow_cursor = true;
            }
            Route::Components => {
                self.views.components.cursor = 0;
                self.views.components.follow_cursor = true;
            }
            Route::Interview => {
                self.views.interview.cursor = 0;
                self.views.interview.follow_cursor = true;
            }
            Route::Implementation => self.views.guide.scroll = 0,
            Route::BestPractices => self.views.practices.scroll = 0,
            Route::NotFound => {}
        }
    }

    fn jump_bottom(&mut self) {
        match self.context.route() {
            Route::Home => {
                let len = self.catalog.diagram().nodes().len();
                self.views.home.cursor = len.saturating_sub(1);
                self.views.home.follow_cursor = true;
            }
            Route::Components => {
                let len = self.filtered_component_count();
                self.views.components.cursor = len.saturating_sub(1);
                self.views.components.follow_cursor = true;
            }
            Route::Interview => {
                let len = self.filtered_question_count();
                self.views.interview.cursor = len.saturating_sub(1);
                self.views.interview.follow_cursor = true;
            }
            Route::Implementation => self.views.guide.scroll = u16::MAX,
            Route::BestPractices => self.views.practices.scroll = u16::MAX,
            Route::NotFound => {}
        }
    }

    fn activate(&mut self) {
        match self.context.route() {
            Route::Home => self.select_cursor_node(),
            Route::Components => {
                let Some(id) = self
                    .filtered_components()
                    .get(self.views.components.cursor)
                    .map(|component| component.id().clone())
                else {
                    return;
                };
                let expanded = &mut self.views.components.expanded;
                if !expanded.remove(&id) {
                    expanded.insert(id);
                }
            }
            Route::Interview => {
                let Some(id) = self
                    .filtered_questions()
                    .get(self.views.interview.cursor)
                    .map(|qa| qa.id())
                else {
                    return;
                };
                let expanded = &mut self.views.interview.expanded;
                if !expanded.remove(&id) {
                    expanded.insert(id);
                }
            }
            _ => {}
        }
    }

    /// The Home selection callback: selecting a node records its id; nodes
    /// without a component link are not selectable, mirroring the original
    /// diagram where only linked nodes respond to clicks.
    fn select_cursor_node(&mut self) {
        let node_id = match self.cursor_node() {
            Some(node) if node.component_id().is_some() => node.id().clone(),
            _ => return,
        };
        self.views.home.selected_node = Some(node_id);
    }

    fn cursor_node(&self) -> Option<&crate::model::DiagramNode> {
        self.catalog.diagram().nodes().get(self.views.home.cursor)
    }

    fn selected_home_component(&self) -> Option<&Component> {
        let node_id = self.views.home.selected_node.as_ref()?;
        let node = self.catalog.diagram().node(node_id)?;
        let component_id = node.component_id()?;
        // A dangling link renders as no detail rather than an error.
        self.catalog.component(component_id)
    }

    fn filtered_components(&self) -> Vec<&Component> {
        filter_components(
            self.catalog.components(),
            self.views.components.category,
            &self.views.components.search,
        )
    }

    fn filtered_component_count(&self) -> usize {
        self.filtered_components().len()
    }

    fn filtered_questions(&self) -> Vec<&InterviewQa> {
        filter_questions(
            self.catalog.questions(),
            self.views.interview.category,
            self.views.interview.difficulty,
            &self.views.interview.search,
        )
    }

    fn filtered_question_count(&self) -> usize {
        self.filtered_questions().len()
    }

    /// Scrolls the diagram viewport so the cursor node stays visible.
    fn follow_diagram_cursor(&mut self, viewport_width: u16, viewport_height: u16) {
        let Some(spans) = self
            .cursor_node()
            .and_then(|node| self.diagram.highlight_index.get(node.id()))
        else {
            return;
        };
        if spans.is_empty() || !self.views.home.follow_cursor {
            return;
        }

        let min_y = spans.iter().map(|(y, _, _)| *y).min().unwrap_or(0);
        let max_y = spans.iter().map(|(y, _, _)| *y).max().unwrap_or(0);
        let min_x = spans.iter().map(|(_, x0, _)| *x0).min().unwrap_or(0);
        let max_x = spans.iter().map(|(_, _, x1)| *x1).max().unwrap_or(0);

        let view = &mut self.views.home;
        view.scroll_y = follow_axis(view.scroll_y, min_y, max_y, viewport_height);
        view.scroll_x = follow_axis(view.scroll_x, min_x, max_x, viewport_width);
        view.follow_cursor = false;
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&mut self) -> Option<String> {
        match &self.toast {
            Some(toast) if toast.expires_at > Instant::now() => Some(toast.message.clone()),
            Some(_) => {
                self.toast = None;
                None
            }
            None => None,
        }
    }
}

fn step_index(current: usize, delta: i32, len: usize) -> usize {
    debug_assert!(len > 0);
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        current.saturating_add(delta as usize).min(len - 1)
    }
}

fn step_scroll(current: u16, delta: i32) -> u16 {
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs().min(u32::from(u16::MAX)) as u16)
    } else {
        current.saturating_add((delta as u32).min(u32::from(u16::MAX)) as u16)
    }
}

fn clamp_scroll(scroll: u16, total_lines: usize, viewport_height: u16) -> u16 {
    let max_scroll = total_lines.saturating_sub(usize::from(viewport_height));
    scroll.min(max_scroll.min(usize::from(u16::MAX)) as u16)
}

fn scroll_for_cursor(
    scroll: u16,
    cursor_line: Option<usize>,
    total_lines: usize,
    viewport_height: u16,
) -> u16 {
    let mut scroll = clamp_scroll(scroll, total_lines, viewport_height);
    if let Some(line) = cursor_line {
        scroll = follow_axis(scroll, line, line, viewport_height);
    }
    scroll
}

fn follow_axis(scroll: u16, min: usize, max: usize, viewport: u16) -> u16 {
    let viewport = usize::from(viewport.max(1));
    let mut scroll = usize::from(scroll);
    if min < scroll {
        scroll = min;
    }
    if max >= scroll + viewport {
        scroll = max + 1 - viewport;
    }
    scroll.min(usize::from(u16::MAX)) as u16
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{App, Route, TuiTheme};
    use crate::model::Catalog;
    use crate::ui::UiContext;
    use crossterm::event::KeyCode;

    /// Drives the app without a terminal, one key code at a time.
    pub(crate) struct HeadlessTui {
        app: App,
    }

    impl HeadlessTui {
        pub(crate) fn new(catalog: Catalog, initial_route: Route) -> Self {
            let theme = TuiTheme::default();
            let context = UiContext::new(initial_route, theme.mode());
            let app = App::new(catalog, context, theme).expect("app");
            Self { app }
        }

        pub(crate) fn press(&mut self, code: KeyCode) -> bool {
            self.app.handle_key_code(code)
        }

        pub(crate) fn app(&self) -> &App {
            &self.app
        }

        pub(crate) fn app_mut(&mut self) -> &mut App {
            &mut self.app
        }
    }
}

#[cfg(test)]
mod tests;
