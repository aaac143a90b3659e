//! Spin Carousel entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, EventTarget, HtmlElement, HtmlImageElement, MouseEvent, PageTransitionEvent,
        TouchEvent,
    };

    use spin_carousel::platform::{FrameLoop, request_frame};
    use spin_carousel::{Carousel, CarouselError, CarouselOptions, Settings};

    /// Element the carousel mounts into
    const MOUNT_ID: &str = "updates-carousel";

    /// Mounted carousel plus the DOM it drives
    struct App {
        carousel: Carousel,
        stage: HtmlElement,
        wheel: HtmlElement,
        cards: Vec<HtmlElement>,
    }

    impl App {
        /// Size the stage, wheel and cards for the current config
        fn apply_layout(&self) {
            let (stage_w, stage_h) = self.carousel.stage_size();
            let layout = self.carousel.layout();

            let style = self.stage.style();
            let _ = style.set_property("perspective", &format!("{}px", self.carousel.perspective()));
            let _ = style.set_property("width", &format!("{}px", stage_w));
            let _ = style.set_property("height", &format!("{}px", stage_h));

            let style = self.wheel.style();
            let _ = style.set_property("width", &format!("{}px", layout.card_width));
            let _ = style.set_property("height", &format!("{}px", layout.card_height));
            let _ = style.set_property("margin-left", &format!("{}px", -layout.card_width / 2.0));
            let _ = style.set_property("margin-top", &format!("{}px", -layout.card_height / 2.0));

            for card in &self.cards {
                let style = card.style();
                let _ = style.set_property("width", &format!("{}px", layout.card_width));
                let _ = style.set_property("height", &format!("{}px", layout.card_height));
            }
        }

        /// Push this frame's projected card transforms to the DOM
        fn render(&self) {
            for (card, transform) in self.cards.iter().zip(self.carousel.transforms()) {
                let _ = card.style().set_property("transform", &transform.matrix3d_css());
            }
        }

        /// Log and drop rejected input
        fn report(result: Result<(), CarouselError>) {
            if let Err(e) = result {
                log::warn!("Ignored carousel input: {}", e);
            }
        }
    }

    fn now() -> f64 {
        js_sys::Date::now()
    }

    fn viewport_width() -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0)
    }

    /// Attach a listener for the lifetime of the page
    fn listen<E, F>(target: &EventTarget, name: &str, f: F)
    where
        E: FromWasmAbi + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(f);
        if let Err(e) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
            log::error!("Failed to listen for {}: {:?}", name, e);
        }
        closure.forget();
    }

    fn create_div(document: &Document, class: &str) -> Result<HtmlElement, CarouselError> {
        let el = document
            .create_element("div")
            .map_err(|e| CarouselError::Dom(format!("{:?}", e)))?;
        el.set_class_name(class);
        el.dyn_into::<HtmlElement>()
            .map_err(|_| CarouselError::Dom("div is not an HtmlElement".into()))
    }

    fn append(parent: &HtmlElement, child: &HtmlElement) -> Result<(), CarouselError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| CarouselError::Dom(format!("{:?}", e)))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Spin Carousel starting...");

        setup_theme();

        match mount() {
            Ok(_) => log::info!("Spin Carousel running!"),
            Err(e) => log::error!("Carousel not mounted: {}", e),
        }
    }

    /// Apply the saved theme and wire the toggle button
    fn setup_theme() {
        let settings = Rc::new(RefCell::new(Settings::load()));
        settings.borrow().apply();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(btn) = document.get_element_by_id("theme-toggle") {
            listen(&btn, "click", move |_event: MouseEvent| {
                let mut s = settings.borrow_mut();
                let theme = s.toggle_theme();
                s.apply();
                s.save();
                log::info!("Theme switched to {}", theme.as_str());
            });
        }
    }

    fn mount() -> Result<FrameLoop, CarouselError> {
        let window = web_sys::window().ok_or_else(|| CarouselError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| CarouselError::Dom("no document".into()))?;
        let root: HtmlElement = document
            .get_element_by_id(MOUNT_ID)
            .ok_or_else(|| CarouselError::Dom(format!("no #{} element", MOUNT_ID)))?
            .dyn_into()
            .map_err(|_| CarouselError::Dom(format!("#{} is not an HtmlElement", MOUNT_ID)))?;

        let options = match root.get_attribute("data-carousel") {
            Some(json) => CarouselOptions::from_json(&json)?,
            None => CarouselOptions::default(),
        };
        let carousel = Carousel::new(&options, viewport_width(), now());

        // Stage > wheel > cards > image
        let _ = root.style().set_property("user-select", "none");
        let stage = create_div(&document, "carousel-stage")?;
        let _ = stage.style().set_property("position", "relative");
        let wheel = create_div(&document, "carousel-wheel")?;
        {
            let style = wheel.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("left", "50%");
            let _ = style.set_property("top", "50%");
            let _ = style.set_property("transform-style", "preserve-3d");
        }
        append(&root, &stage)?;
        append(&stage, &wheel)?;

        let mut cards = Vec::with_capacity(carousel.layout().len());
        let mut images = Vec::with_capacity(carousel.layout().len());
        for index in 0..carousel.layout().len() {
            let card = create_div(&document, "carousel-card")?;
            {
                let style = card.style();
                let _ = style.set_property("position", "absolute");
                let _ = style.set_property("transform-style", "preserve-3d");
                let _ = style.set_property("will-change", "transform");
            }
            let face = create_div(&document, "carousel-card-face")?;
            let _ = face.style().set_property("backface-visibility", "hidden");

            let img: HtmlImageElement = document
                .create_element("img")
                .map_err(|e| CarouselError::Dom(format!("{:?}", e)))?
                .dyn_into()
                .map_err(|_| CarouselError::Dom("img is not an HtmlImageElement".into()))?;
            img.set_alt("Carousel item");
            img.set_draggable(false);
            let _ = img.set_attribute("loading", "lazy");
            if let Some(src) = carousel.image_source(index) {
                img.set_src(src);
            }

            append(&face, &img)?;
            append(&card, &face)?;
            append(&wheel, &card)?;
            cards.push(card);
            images.push(img);
        }

        let app = Rc::new(RefCell::new(App {
            carousel,
            stage,
            wheel,
            cards,
        }));
        {
            let a = app.borrow();
            a.apply_layout();
            a.render();
        }

        setup_image_fallback(&images, app.clone());
        setup_input_handlers(&root, app.clone());
        setup_resize(app.clone());

        let frame_loop = FrameLoop::new();
        setup_teardown(&frame_loop);
        schedule(app, frame_loop.clone());
        Ok(frame_loop)
    }

    /// Swap a failed image for the placeholder, once
    fn setup_image_fallback(images: &[HtmlImageElement], app: Rc<RefCell<App>>) {
        for (index, img) in images.iter().enumerate() {
            let app = app.clone();
            let target = img.clone();
            listen(img, "error", move |_event: web_sys::Event| {
                let mut a = app.borrow_mut();
                if a.carousel.mark_image_failed(index) {
                    if let Some(src) = a.carousel.image_source(index) {
                        target.set_src(src);
                    }
                }
            });
        }
    }

    fn setup_input_handlers(root: &HtmlElement, app: Rc<RefCell<App>>) {
        // Hover
        {
            let app = app.clone();
            listen(root, "mouseenter", move |_event: MouseEvent| {
                app.borrow_mut().carousel.hover_enter(now());
            });
        }
        {
            let app = app.clone();
            listen(root, "mouseleave", move |_event: MouseEvent| {
                app.borrow_mut().carousel.hover_leave(now());
            });
        }

        // Mouse drag
        {
            let app = app.clone();
            listen(root, "mousedown", move |event: MouseEvent| {
                let result = app.borrow_mut().carousel.drag_start(event.client_x() as f64, now());
                App::report(result);
            });
        }
        {
            let app = app.clone();
            listen(root, "mousemove", move |event: MouseEvent| {
                let result = app.borrow_mut().carousel.drag_move(event.client_x() as f64, now());
                App::report(result);
            });
        }
        {
            let app = app.clone();
            listen(root, "mouseup", move |_event: MouseEvent| {
                app.borrow_mut().carousel.drag_end(now());
            });
        }

        // Touch drag, primary contact only
        {
            let app = app.clone();
            listen(root, "touchstart", move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let result = app.borrow_mut().carousel.drag_start(touch.client_x() as f64, now());
                    App::report(result);
                }
            });
        }
        {
            let app = app.clone();
            listen(root, "touchmove", move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let result = app.borrow_mut().carousel.drag_move(touch.client_x() as f64, now());
                    App::report(result);
                }
            });
        }
        {
            listen(root, "touchend", move |_event: TouchEvent| {
                app.borrow_mut().carousel.drag_end(now());
            });
        }
    }

    /// Switch presets when the viewport crosses the breakpoint
    fn setup_resize(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        listen(&window, "resize", move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            if a.carousel.resize(viewport_width()) {
                a.apply_layout();
                a.render();
            }
        });
    }

    /// Cancel the loop when the page is unloaded (not when it is cached)
    fn setup_teardown(frame_loop: &FrameLoop) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let frame_loop = frame_loop.clone();
        listen(&window, "pagehide", move |event: PageTransitionEvent| {
            frame_loop.on_page_hide(event.persisted());
        });
    }

    fn schedule(app: Rc<RefCell<App>>, frame_loop: FrameLoop) {
        let handle = frame_loop.clone();
        request_frame(&handle, move |time: f64| {
            animation_frame(app, frame_loop, time);
        });
    }

    fn animation_frame(app: Rc<RefCell<App>>, frame_loop: FrameLoop, _time: f64) {
        if !frame_loop.begin_frame() {
            return;
        }
        {
            let mut a = app.borrow_mut();
            a.carousel.tick(now());
            a.render();
        }
        schedule(app, frame_loop);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    log::info!("Spin Carousel (native) starting...");
    log::info!("Native mode has no DOM - run with `trunk serve` for the web version");

    // Headless run: fling the wheel and watch it settle into auto-spin
    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use spin_carousel::{Carousel, CarouselOptions};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let mut carousel = Carousel::new(&CarouselOptions::default(), 1280.0, 0.0);
    let mut time = 0.0;

    let _ = carousel.drag_start(400.0, time);
    for x in [420.0, 460.0, 520.0, 600.0] {
        time += FRAME_MS;
        let _ = carousel.drag_move(x, time);
        carousel.tick(time);
    }
    carousel.drag_end(time);

    println!("\nframe  phase          rotation   velocity");
    for frame in 0..120 {
        time += FRAME_MS;
        let phase = carousel.tick(time);
        if frame % 10 == 0 {
            let motion = carousel.motion();
            println!(
                "{:5}  {:13}  {:9.3}  {:9.4}",
                frame,
                format!("{:?}", phase),
                motion.rotation_deg,
                motion.velocity_deg
            );
        }
    }

    println!("\nfinal wheel: {}", carousel.wheel_css());
    for t in carousel.transforms() {
        println!("  card {}: {} (facing {:.2})", t.index, t.slot_css(), t.facing());
    }
}
