mod app;
mod callbacks;
mod draw;
mod net;
mod ticker;

use std::{cell::RefCell, rc::Rc};

use app::App;
use callbacks::{apply_grid_events, fit_settings_to_page, on_grid_click, on_resize, page_settings};
use draw::CanvasSurface;
use net::fetch_settings;
use shared::Settings;
use ticker::Ticker;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, CanvasRenderingContext2d, Element, HtmlCanvasElement};

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window().request_animation_frame(f.as_ref().unchecked_ref())
}

/// Milliseconds on the page clock.
fn now() -> f64 {
    window()
        .performance()
        .map_or(0.0, |performance| performance.now())
}

fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("missing {what} element"))
}

/// The `#particleCanvas` element, created inside the container when the page has none.
fn particle_canvas(container: &Element) -> Result<HtmlCanvasElement, JsValue> {
    match document().get_element_by_id("particleCanvas") {
        Some(element) => Ok(element.dyn_into::<HtmlCanvasElement>()?),
        None => {
            let canvas = document()
                .create_element("canvas")?
                .dyn_into::<HtmlCanvasElement>()?;

            canvas.set_id("particleCanvas");
            container.append_child(&canvas)?;

            Ok(canvas)
        }
    }
}

/// Server settings first, then the canvas' `data-settings`, then the defaults. The grid
/// size always follows the cells the page renders.
async fn resolve_settings(canvas: &HtmlCanvasElement, grid: &Element) -> Settings {
    let settings = match fetch_settings().await {
        Ok(settings) => settings,
        Err(err) => {
            console::info_2(&"using page settings:".into(), &err);
            page_settings(canvas)
        }
    };

    match fit_settings_to_page(settings.clone(), grid) {
        Ok(settings) => settings,
        Err(err) => {
            console::warn_2(&"keeping the configured grid size:".into(), &err);
            settings
        }
    }
}

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = run().await {
            console::error_1(&err);
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let container = document()
        .query_selector(".container")?
        .ok_or_else(|| missing(".container"))?;
    let grid = document()
        .get_element_by_id("grid")
        .ok_or_else(|| missing("#grid"))?;

    let canvas = particle_canvas(&container)?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let settings = resolve_settings(&canvas, &grid).await;
    let app = Rc::new(RefCell::new(App::new(settings, seed)));

    on_resize(&app, &canvas, &context, &container)?;

    let ticker = Ticker::new();

    {
        let app = app.clone();
        let context = context.clone();
        let grid = grid.clone();
        let next = ticker.clone();

        ticker.set_callback(Closure::new(move || {
            let mut app = app.borrow_mut();

            let events = app.update(now());

            if let Err(err) = apply_grid_events(&grid, &events) {
                console::error_1(&err);
            }

            let mut surface = CanvasSurface::new(&context, app.bounds());
            app.draw(&mut surface);

            if app.is_active() {
                next.schedule();
            } else {
                next.sleep();
            }
        }));
    }

    {
        let app = app.clone();
        let container = container.clone();
        let ticker = ticker.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            if let Err(err) = on_grid_click(&app, &container, event) {
                console::error_1(&err);
            }

            ticker.wake();
        });
        grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let ticker = ticker.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            if let Err(err) = on_resize(&app, &canvas, &context, &container) {
                console::error_1(&err);
            }

            ticker.wake();
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
