use super::render::{self, RenderStyle};
use crate::core::error::DuffError;
use dialoguer::Select;
use duff_lib::{NavEvent, NavState, Navigator};

/// Terminal size as exported by the shell, when available.
fn viewport_hint() -> Option<(u16, u16)> {
    let read = |name: &str| std::env::var(name).ok()?.parse::<u16>().ok();
    Some((read("COLUMNS")?, read("LINES").unwrap_or(24)))
}

/// Lets the operator walk the tree one menu per level until a request is
/// chosen or the prompt is dismissed with Esc or `q`.
pub fn browse<'a>(nav: &mut Navigator<'a>, style: &RenderStyle) -> Result<NavState<'a>, DuffError> {
    if let Some((width, height)) = viewport_hint() {
        nav.handle(NavEvent::Resize { width, height });
    }

    while !nav.state().is_terminal() {
        let items = render::menu_items(nav, style);
        if items.is_empty() {
            return Err(DuffError::RequestNotFound(
                "collection contains no requests".to_string(),
            ));
        }

        let choice = Select::new()
            .with_prompt(render::header(nav, style))
            .items(&items)
            .default(0)
            .interact_opt()?;

        let event = render::event_for(nav, choice);
        tracing::debug!(?event, "operator input");
        nav.handle(event);
    }

    Ok(nav.state().clone())
}
