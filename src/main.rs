use edu_portal::EduApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Arrancando EduAI");

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "EduAI",
        options,
        Box::new(|cc| Ok(Box::new(EduApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast;

    if let Err(err) = eframe::WebLogger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("{err:?}").into());
    }

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No hay documento");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("No se encontró el canvas the_canvas_id");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(EduApp::new(cc)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("No se pudo arrancar la app: {err:?}");
        }
    });
}
