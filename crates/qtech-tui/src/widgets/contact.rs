//! Contact page: inquiry form, submission spinner and result banners

use qtech_app::contact::{ContactFocus, ContactState, FormField, SubmissionStatus};
use qtech_core::content::{
    CONTACT_EMAIL_PLACEHOLDER, CONTACT_FORM_TITLE, CONTACT_HEADLINE, CONTACT_INTRO,
    CONTACT_MESSAGE_PLACEHOLDER, CONTACT_NAME_PLACEHOLDER, CONTACT_SENDING_LABEL,
    CONTACT_SUBMIT_LABEL, CONTACT_SUCCESS,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::text::visible_tail;
use crate::theme::{icons::IconSet, palette, styles};

/// Width of the label column in front of each input
const LABEL_WIDTH: u16 = 10;

const CARET: &str = "▏";

pub struct ContactView<'a> {
    state: &'a ContactState,
    focused: bool,
    tick: u64,
    icons: IconSet,
}

impl<'a> ContactView<'a> {
    pub fn new(state: &'a ContactState, focused: bool, icons: IconSet) -> Self {
        Self {
            state,
            focused,
            tick: 0,
            icons,
        }
    }

    /// Animation frame for the sending spinner
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn has_focus(&self, focus: ContactFocus) -> bool {
        self.focused && self.state.focus == focus
    }

    fn render_success(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled(self.icons.check(), styles::status_green()),
                Span::raw(" "),
                Span::styled(
                    CONTACT_SUCCESS,
                    styles::status_green().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Press Enter to send another inquiry.",
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(styles::glass_block(self.focused))
            .render(area, buf);
    }

    /// Failure banner, validation hint, or nothing
    fn banner_line(&self) -> Line<'static> {
        if let SubmissionStatus::Failed(message) = &self.state.status {
            let style = Style::default()
                .fg(palette::TEXT_BRIGHT)
                .bg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD);
            return Line::from(vec![
                Span::styled(format!(" {} ", self.icons.alert()), style),
                Span::styled(format!("{} ", message), style),
            ]);
        }

        if let Some(err) = self.state.validation {
            return Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_yellow()),
                Span::raw(" "),
                Span::styled(err.to_string(), styles::status_yellow()),
            ]);
        }

        Line::default()
    }

    fn render_field(&self, field: FormField, label: &'static str, area: Rect, buf: &mut Buffer) {
        let focus = ContactFocus::Field(field);
        let focused = self.has_focus(focus);
        let enabled = self.state.inputs_enabled();

        let [label_area, input_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)]).areas(area);

        let label_style = if focused {
            styles::brand_bold()
        } else {
            styles::text_secondary()
        };
        Paragraph::new(Span::styled(label, label_style)).render(label_area, buf);

        let input_style = styles::input(focused, enabled);
        let value = self.state.form.get(field);
        let show_caret = focused && enabled;
        // One column reserved for the caret
        let text_width = usize::from(input_area.width.saturating_sub(1));

        let lines: Vec<Line<'static>> = if value.is_empty() && !show_caret {
            vec![Line::from(Span::styled(
                placeholder(field),
                input_style.fg(palette::TEXT_MUTED),
            ))]
        } else if field.is_multiline() {
            let rows: Vec<&str> = value.split('\n').collect();
            let visible = usize::from(input_area.height).max(1);
            let skip = rows.len().saturating_sub(visible);
            let last = rows.len() - 1;
            rows.iter()
                .enumerate()
                .skip(skip)
                .map(|(index, row)| {
                    let mut spans =
                        vec![Span::styled(visible_tail(row, text_width).to_string(), input_style)];
                    if show_caret && index == last {
                        spans.push(Span::styled(CARET, input_style));
                    }
                    Line::from(spans)
                })
                .collect()
        } else {
            let mut spans = vec![Span::styled(
                visible_tail(value, text_width).to_string(),
                input_style,
            )];
            if show_caret {
                spans.push(Span::styled(CARET, input_style));
            }
            vec![Line::from(spans)]
        };

        Paragraph::new(lines)
            .style(input_style)
            .render(input_area, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let enabled = self.state.inputs_enabled();
        let style = styles::button(self.has_focus(ContactFocus::Submit), enabled);

        let label = if self.state.is_sending() {
            format!(
                "  {} {}  ",
                self.icons.spinner(self.tick),
                CONTACT_SENDING_LABEL
            )
        } else {
            format!("  {}  ", CONTACT_SUBMIT_LABEL)
        };

        Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(CONTACT_FORM_TITLE, styles::brand_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width <= LABEL_WIDTH {
            return;
        }

        let [name_area, email_area, message_area, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .spacing(0)
        .areas(inner);

        self.render_field(FormField::Name, "Name", name_area, buf);
        self.render_field(FormField::ClientEmail, "Email", email_area, buf);
        self.render_field(FormField::Message, "Message", message_area, buf);
        self.render_button(button_area, buf);
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => CONTACT_NAME_PLACEHOLDER,
        FormField::ClientEmail => CONTACT_EMAIL_PLACEHOLDER,
        FormField::Message => CONTACT_MESSAGE_PLACEHOLDER,
    }
}

impl Widget for ContactView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 10 {
            return;
        }

        let [title_area, intro_area, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(CONTACT_HEADLINE, styles::headline())).render(title_area, buf);
        Paragraph::new(Span::styled(CONTACT_INTRO, styles::text_secondary()))
            .wrap(Wrap { trim: true })
            .render(intro_area, buf);

        if !self.state.shows_form() {
            self.render_success(content_area, buf);
            return;
        }

        let [banner_area, form_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(content_area);

        Paragraph::new(self.banner_line()).render(banner_area, buf);
        self.render_form(form_area, buf);
    }
}
