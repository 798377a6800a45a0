//! Portfolio page: project list and the detail card for the selection

use qtech_app::portfolio::PortfolioState;
use qtech_core::content::{PORTFOLIO_HEADLINE, PORTFOLIO_LIST_TITLE, PORTFOLIO_NOTE};
use qtech_core::ProjectRecord;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::text::truncate;
use crate::theme::{icons::IconSet, palette, styles};

pub struct PortfolioView<'a> {
    state: &'a PortfolioState,
    focused: bool,
    icons: IconSet,
}

impl<'a> PortfolioView<'a> {
    pub fn new(state: &'a PortfolioState, focused: bool, icons: IconSet) -> Self {
        Self {
            state,
            focused,
            icons,
        }
    }

    fn list_lines(&self, width: u16) -> Vec<Line<'static>> {
        let max_title = usize::from(width.saturating_sub(4)).max(4);

        self.state
            .catalog()
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let selected = self.state.is_selected(project);
                let under_cursor = self.focused && index == self.state.cursor();

                let marker = if selected { self.icons.selected() } else { " " };
                let mut style = if selected {
                    Style::default()
                        .fg(palette::ACCENT_ORANGE)
                        .add_modifier(Modifier::BOLD)
                } else {
                    styles::text_primary()
                };
                if under_cursor {
                    style = style.bg(palette::INPUT_BG);
                }

                Line::from(vec![
                    Span::styled(format!(" {} ", marker), style),
                    Span::styled(truncate(project.title, max_title), style),
                ])
            })
            .collect()
    }

    fn detail_lines(&self, project: &'static ProjectRecord) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(project.title, styles::headline())),
            Line::default(),
            Line::from(Span::styled(project.description, styles::text_primary())),
            Line::default(),
            Line::from(Span::styled("Tech Stack:", styles::brand_bold())),
        ];

        // Chips in catalog order
        let mut chips = Vec::with_capacity(project.tech_stack.len() * 2);
        for (index, tech) in project.tech_stack.iter().enumerate() {
            if index > 0 {
                chips.push(Span::raw(" "));
            }
            chips.push(Span::styled(
                format!(" {} ", tech),
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .bg(palette::ACCENT_BLUE_BG),
            ));
        }
        lines.push(Line::from(chips));
        lines.push(Line::default());

        lines.push(Line::from(vec![
            Span::styled(" p ", styles::status_yellow()),
            Span::styled(
                format!("Live Preview {} ", self.icons.external_link()),
                styles::text_secondary(),
            ),
            Span::styled(project.preview_url, styles::text_muted()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" g ", styles::status_yellow()),
            Span::styled(
                format!("GitHub Repo  {} ", self.icons.external_link()),
                styles::text_secondary(),
            ),
            Span::styled(project.repository_url, styles::text_muted()),
        ]));

        lines
    }
}

impl Widget for PortfolioView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 10 {
            return;
        }

        let [title_area, panels_area, note_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled(
            PORTFOLIO_HEADLINE,
            styles::headline(),
        )))
        .render(title_area, buf);

        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(panels_area);

        let list_block = styles::glass_block(self.focused)
            .title(Span::styled(PORTFOLIO_LIST_TITLE, styles::brand_bold()));
        let list_inner_width = list_block.inner(list_area).width;
        Paragraph::new(self.list_lines(list_inner_width))
            .block(list_block)
            .render(list_area, buf);

        if let Some(project) = self.state.selected() {
            Paragraph::new(self.detail_lines(project))
                .wrap(Wrap { trim: false })
                .block(styles::glass_block(false))
                .render(detail_area, buf);
        }

        Paragraph::new(Line::from(Span::styled(
            PORTFOLIO_NOTE,
            styles::text_muted().add_modifier(Modifier::ITALIC),
        )))
        .render(note_area, buf);
    }
}
