//! Assistant bar: the widget's title and greeting, plus the briefing revision.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AssistantPanel;

pub fn render_assistant_bar(out: &mut String, row: usize, panel: &AssistantPanel, theme: &Theme, cols: usize) -> usize {
    let line = format!(
        "◆ {}: {}  [briefing #{}, press a to open]",
        panel.title, panel.greeting, panel.revision
    );

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.assistant_fg));
    out.push_str(&fit(&line, cols));
    out.push_str(Theme::reset());
    row + 1
}
