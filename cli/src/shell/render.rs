use duff_lib::{NavEvent, Navigator, Node};

/// Presentation settings of the request browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub title: &'static str,
    pub folder_icon: &'static str,
    pub marker: &'static str,
    pub separator: &'static str,
    pub back_label: &'static str,
    pub cancel_notice: &'static str,
}

pub const DEFAULT_STYLE: RenderStyle = RenderStyle {
    title: "Select a request",
    folder_icon: "📁",
    marker: "[ ]",
    separator: " > ",
    back_label: ".. back",
    cancel_notice: "Nothing selected.",
};

pub fn header(nav: &Navigator<'_>, style: &RenderStyle) -> String {
    format!(
        "{}\nCurrent Path: {}",
        style.title,
        nav.path().join(style.separator)
    )
}

pub fn entry_label(node: &Node, style: &RenderStyle, width: Option<u16>) -> String {
    let label = if node.is_folder() {
        format!("{} {} {}", style.marker, style.folder_icon, node.name)
    } else {
        format!("{} {}", style.marker, node.name)
    };
    match width {
        Some(w) if label.chars().count() > usize::from(w) && w > 1 => {
            let mut short: String = label.chars().take(usize::from(w) - 1).collect();
            short.push('…');
            short
        }
        _ => label,
    }
}

/// Menu lines for the level on display. Below the root the first line goes back up.
pub fn menu_items(nav: &Navigator<'_>, style: &RenderStyle) -> Vec<String> {
    let width = nav.viewport().map(|(w, _)| w);
    let back = (nav.depth() > 0).then(|| style.back_label.to_string());
    back.into_iter()
        .chain(nav.current().iter().map(|n| entry_label(n, style, width)))
        .collect()
}

/// Translates a menu choice into a navigator event. `None` means the prompt was dismissed.
pub fn event_for(nav: &Navigator<'_>, choice: Option<usize>) -> NavEvent {
    match choice {
        None => NavEvent::Cancel,
        Some(0) if nav.depth() > 0 => NavEvent::Back,
        Some(i) if nav.depth() > 0 => NavEvent::Select(i - 1),
        Some(i) => NavEvent::Select(i),
    }
}
