use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::form::{CarForm, FormField};
use crate::theme::Theme;

/// Width the field labels are padded to so values line up.
pub(crate) const FIELD_LABEL_WIDTH: usize = 6;

/// Column where a field's value starts, relative to the form's inner area.
pub(crate) fn field_value_offset() -> u16 {
    (FIELD_LABEL_WIDTH + 2) as u16
}

/// Render one form row. Selectors show arrows while focused so it is clear
/// the value is chosen rather than typed.
pub(crate) fn build_field_line(
    form: &CarForm,
    field: FormField,
    active: bool,
    theme: &Theme,
) -> Line<'static> {
    let value = form.value(field);
    let placeholder = match field {
        FormField::Model if form.model_options().is_empty() => "<pick a brand first>",
        FormField::Price => "<required>",
        _ => "<select>",
    };

    let value_style = if active {
        theme.focused()
    } else if value.is_empty() {
        theme.muted()
    } else {
        theme.base()
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$}: ", field.label(), width = FIELD_LABEL_WIDTH),
        theme.base(),
    )];

    let shown = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    };

    if active && field.is_selector() {
        spans.push(Span::styled(format!("\u{25c0} {shown} \u{25b6}"), value_style));
    } else {
        spans.push(Span::styled(shown, value_style));
    }

    Line::from(spans)
}

/// Text typed into the "save as" prompt.
pub(crate) struct ExportPrompt {
    pub(crate) path: String,
}

impl ExportPrompt {
    pub(crate) fn new(default_path: &str) -> Self {
        Self {
            path: default_path.to_string(),
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.path.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.path.pop();
    }

    pub(crate) fn value_len(&self) -> usize {
        self.path.chars().count()
    }
}

/// Severity of a modal message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DialogKind {
    Info,
    Warning,
    Error,
}

/// A modal message box. Any key dismisses it.
pub(crate) struct Dialog {
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) kind: DialogKind,
}

impl Dialog {
    pub(crate) fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(DialogKind::Info, title, text)
    }

    pub(crate) fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(DialogKind::Warning, title, text)
    }

    pub(crate) fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(DialogKind::Error, title, text)
    }

    fn new(kind: DialogKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            kind,
        }
    }

    pub(crate) fn style(&self, theme: &Theme) -> Style {
        match self.kind {
            DialogKind::Info => theme.success(),
            DialogKind::Warning => theme.warning(),
            DialogKind::Error => theme.danger(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn empty_fields_show_placeholders() {
        let form = CarForm::new();
        let theme = Theme::default();
        assert_eq!(
            line_text(&build_field_line(&form, FormField::Model, false, &theme)),
            "Model : <pick a brand first>"
        );
        assert_eq!(
            line_text(&build_field_line(&form, FormField::Price, true, &theme)),
            "Price : <required>"
        );
    }

    #[test]
    fn focused_selector_shows_arrows() {
        let mut form = CarForm::new();
        form.select_brand("BMW");
        let line = build_field_line(&form, FormField::Brand, true, &Theme::default());
        assert_eq!(line_text(&line), "Brand : \u{25c0} BMW \u{25b6}");
    }

    #[test]
    fn prompt_ignores_control_characters() {
        let mut prompt = ExportPrompt::new("cars.xlsx");
        assert!(!prompt.push_char('\u{7}'));
        prompt.backspace();
        assert_eq!(prompt.path, "cars.xls");
        assert_eq!(prompt.value_len(), 8);
    }
}
