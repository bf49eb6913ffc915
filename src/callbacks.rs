use std::{cell::RefCell, rc::Rc};

use shared::{Click, GridEvent, Settings};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

use crate::{app::App, document, now, window};

pub fn cell_id(row: usize, col: usize) -> String {
    format!("cell-{row}-{col}")
}

/// Reads the grid coordinates back out of a `cell-{row}-{col}` element id.
pub fn parse_cell_id(id: &str) -> Option<(usize, usize)> {
    let (row, col) = id.strip_prefix("cell-")?.split_once('-')?;

    Some((row.parse().ok()?, col.parse().ok()?))
}

/// Settings from the canvas' `data-settings` JSON, used when the server provides none.
/// Anything unusable falls back to the defaults.
pub fn page_settings(canvas: &HtmlCanvasElement) -> Settings {
    match canvas.dataset().get("settings") {
        Some(json) => Settings::from_json(&json).unwrap_or_else(|err| {
            console::warn_1(&format!("{err}; using default settings").into());
            Settings::default()
        }),
        None => Settings::default(),
    }
}

/// Sizes the grid model to the `.cell` elements actually rendered inside `grid`.
pub fn fit_settings_to_page(settings: Settings, grid: &Element) -> Result<Settings, JsValue> {
    let cell_count = grid.query_selector_all(".cell")?.length() as usize;
    let configured = settings.grid_size;

    let settings = settings
        .fit_to_cells(cell_count)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    if settings.grid_size != configured {
        console::warn_1(
            &format!(
                "grid size {configured} does not match the {cell_count} rendered cells; using {}",
                settings.grid_size
            )
            .into(),
        );
    }

    Ok(settings)
}

/// Matches the canvas backing store to the container at the device pixel ratio, and
/// keeps drawing coordinates in CSS pixels.
pub fn on_resize(
    app: &Rc<RefCell<App>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    container: &Element,
) -> Result<(), JsValue> {
    let rect = container.get_bounding_client_rect();
    let dpr = window().device_pixel_ratio().max(1.0);

    canvas.set_width((rect.width() * dpr) as u32);
    canvas.set_height((rect.height() * dpr) as u32);
    context.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

    let style = canvas.style();
    style.set_property("width", &format!("{}px", rect.width()))?;
    style.set_property("height", &format!("{}px", rect.height()))?;

    app.borrow_mut().set_bounds((rect.width(), rect.height()));

    Ok(())
}

pub fn on_grid_click(
    app: &Rc<RefCell<App>>,
    container: &Element,
    event: MouseEvent,
) -> Result<(), JsValue> {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return Ok(());
    };

    let Some(cell) = target.closest(".cell")? else {
        return Ok(());
    };

    let Some((row, col)) = parse_cell_id(&cell.id()) else {
        return Ok(());
    };

    event.prevent_default();

    let rect = cell.get_bounding_client_rect();
    let origin = container.get_bounding_client_rect();
    let center = (
        rect.left() + rect.width() / 2.0 - origin.left(),
        rect.top() + rect.height() / 2.0 - origin.top(),
    );

    let click = app.borrow_mut().on_click(row, col, center, now());

    match click {
        Some(Click::Flip) => cell.class_list().add_1("flipping"),
        Some(Click::Unflip) => cell.class_list().add_1("unflipping"),
        None => Ok(()),
    }
}

/// Whether the grid's completion pulse should be switched on or off after `events`.
///
/// Every finished flip re-checks completion; unflips leave the pulse as it is.
pub fn pulse_change(events: &[GridEvent]) -> Option<bool> {
    events.iter().fold(None, |pulse, event| match event {
        GridEvent::Flipped(..) => Some(false),
        GridEvent::Completed => Some(true),
        GridEvent::Unflipped(..) => pulse,
    })
}

/// Mirrors grid state changes onto the cell and grid classes the stylesheet animates.
pub fn apply_grid_events(grid: &Element, events: &[GridEvent]) -> Result<(), JsValue> {
    for event in events {
        match *event {
            GridEvent::Flipped(row, col) => {
                if let Some(cell) = document().get_element_by_id(&cell_id(row, col)) {
                    cell.class_list().remove_1("flipping")?;
                    cell.class_list().add_1("flipped")?;
                }
            }
            GridEvent::Unflipped(row, col) => {
                if let Some(cell) = document().get_element_by_id(&cell_id(row, col)) {
                    cell.class_list().remove_2("unflipping", "flipped")?;
                }
            }
            GridEvent::Completed => (),
        }
    }

    match pulse_change(events) {
        Some(true) => grid.class_list().add_1("complete"),
        Some(false) => grid.class_list().remove_1("complete"),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ids_round_trip() {
        assert_eq!(cell_id(3, 7), "cell-3-7");
        assert_eq!(parse_cell_id("cell-3-7"), Some((3, 7)));
    }

    #[test]
    fn pulse_survives_unflips_until_the_next_flip() {
        assert_eq!(pulse_change(&[GridEvent::Unflipped(0, 0)]), None);
        assert_eq!(pulse_change(&[]), None);
        assert_eq!(pulse_change(&[GridEvent::Flipped(0, 0)]), Some(false));
        assert_eq!(
            pulse_change(&[GridEvent::Flipped(2, 1), GridEvent::Completed]),
            Some(true)
        );
        assert_eq!(
            pulse_change(&[
                GridEvent::Flipped(2, 1),
                GridEvent::Completed,
                GridEvent::Unflipped(0, 0),
            ]),
            Some(true)
        );
    }

    #[test]
    fn foreign_ids_are_rejected() {
        assert_eq!(parse_cell_id("grid"), None);
        assert_eq!(parse_cell_id("cell-3"), None);
        assert_eq!(parse_cell_id("cell-a-1"), None);
    }
}
