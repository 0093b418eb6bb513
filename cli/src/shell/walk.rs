use crate::core::error::DuffError;
use duff_lib::{NavEvent, NavState, Navigator, Node};

/// Entry of `level` that `remaining` starts with, either as the whole
/// remainder or followed by `/`. Names may contain `/` themselves, so the
/// longest match wins; among equal names the first one does.
fn longest_match(level: &[Node], remaining: &str) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, node) in level.iter().enumerate() {
        let name = node.name.as_str();
        let matches = remaining
            .strip_prefix(name)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if matches && !name.is_empty() && best.map_or(true, |(_, len)| name.len() > len) {
            best = Some((index, name.len()));
        }
    }
    best.map(|(index, _)| index)
}

/// Drives the navigator along `request_path` (names joined with `/`).
pub fn walk<'a>(nav: &mut Navigator<'a>, request_path: &str) -> Result<NavState<'a>, DuffError> {
    let mut remaining = request_path;

    while !remaining.is_empty() {
        let level = nav.current();
        let Some(index) = longest_match(level, remaining) else {
            let segment = remaining.split('/').next().unwrap_or(remaining);
            return Err(DuffError::RequestNotFound(format!(
                "'{segment}' not found in {}",
                nav.path().join(" > ")
            )));
        };

        let name = level[index].name.as_str();
        let rest = &remaining[name.len()..];
        remaining = rest.strip_prefix('/').unwrap_or(rest);

        let state = nav.handle(NavEvent::Select(index));
        if matches!(state, NavState::Done(_)) && !remaining.is_empty() {
            return Err(DuffError::RequestNotFound(format!(
                "'{name}' is a request, not a folder"
            )));
        }
        if state.is_terminal() {
            break;
        }
    }

    match nav.state() {
        NavState::Browsing => Err(DuffError::RequestNotFound(format!(
            "'{request_path}' is a folder"
        ))),
        state => Ok(state.clone()),
    }
}
