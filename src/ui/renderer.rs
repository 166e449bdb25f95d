//! Plain-text rendering of selector view models.
//!
//! Used by the host binary to show the selector on a line-oriented terminal.
//! Rendering is a pure function of the [`SelectorView`]; styling belongs to
//! whatever presentation layer embeds the crate.
//!
//! # Layout
//!
//! ```text
//! Select (1 selected) ▾                 closed header
//!   [Banana ×]                          tags (multi mode)
//!
//! Select (1 selected) ▴
//!   / ban                  ← back       search bar
//!   [x] Banana                          selected row
//!   [ ] Bandana                         unselected row
//!   [-] Banshee                         disabled row
//!   (Submit)                            submit affordance
//! ```

use crate::app::modes::SubmitAffordance;
use crate::ui::viewmodel::{CandidateRow, PanelView, SelectorView, TagView};
use std::fmt::{self, Display, Write};

/// Renders a view model to a multi-line string.
///
/// # Example
///
/// ```rust
/// use multiselect::{initialize, Config, Item, NoopListener};
/// use multiselect::ui::render;
///
/// let items = vec![Item::new(1, "Apple")];
/// let mut controller = initialize(&Config::default(), NoopListener);
/// controller.toggle_item(&items[0]);
///
/// let text = render(&controller.compute_viewmodel(&items));
/// assert!(text.starts_with("Select (1 selected)"));
/// assert!(text.contains("[Apple ×]"));
/// ```
#[must_use]
pub fn render<K: Display>(vm: &SelectorView<K>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, vm);
    out
}

fn write_view<K: Display>(out: &mut String, vm: &SelectorView<K>) -> fmt::Result {
    let arrow = if vm.panel.is_some() { '▴' } else { '▾' };
    writeln!(out, "{} {arrow}", vm.header.label)?;

    if !vm.tags.is_empty() {
        out.push_str(" ");
        for tag in &vm.tags {
            write_tag(out, tag)?;
        }
        out.push('\n');
    }

    if let Some(panel) = &vm.panel {
        write_panel(out, panel)?;
    }
    Ok(())
}

fn write_tag<K: Display>(out: &mut String, tag: &TagView<K>) -> fmt::Result {
    match &tag.label {
        Some(label) => write!(out, " [{label} ×]"),
        None => write!(out, " [#{} ×]", tag.key),
    }
}

fn write_panel<K: Display>(out: &mut String, panel: &PanelView<K>) -> fmt::Result {
    let query = if panel.search_bar.query.is_empty() {
        format!("({})", panel.search_bar.placeholder)
    } else {
        panel.search_bar.query.clone()
    };
    write!(out, "  / {query}")?;
    if panel.submit == Some(SubmitAffordance::Indicator) {
        out.push_str("  [done]");
    }
    if panel.show_back_icon {
        out.push_str("  ← back");
    }
    out.push('\n');

    if let Some(empty) = &panel.empty_state {
        writeln!(out, "  {}", empty.message)?;
    }
    for row in &panel.rows {
        write_row(out, row)?;
    }

    if panel.show_add_item {
        writeln!(out, "  (+ Add item)")?;
    }
    if panel.submit == Some(SubmitAffordance::Button) {
        writeln!(out, "  (Submit)")?;
    }
    Ok(())
}

fn write_row<K: Display>(out: &mut String, row: &CandidateRow<K>) -> fmt::Result {
    let mark = match (row.is_disabled, row.is_selected) {
        (true, _) => '-',
        (false, true) => 'x',
        (false, false) => ' ',
    };
    write!(out, "  [{mark}] {}", row.label)?;
    if let Some(key) = &row.key {
        write!(out, "  #{key}")?;
    }
    out.push('\n');
    Ok(())
}
