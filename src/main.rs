use std::sync::Arc;

use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, point,
    px, size,
};

use purple_juridico::{
    adopt_window_appearance,
    preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore},
    views::AppView,
};

fn preference_store() -> Arc<dyn PreferenceStore> {
    match FilePreferenceStore::default_location() {
        Ok(store) => {
            log::info!("reading preferences from {}", store.path().display());
            Arc::new(store)
        }
        Err(err) => {
            log::warn!("{err}; preferences will only last for this session");
            Arc::new(MemoryPreferenceStore::new())
        }
    }
}

fn open_main_window(cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, size(px(420.), px(860.)), cx);

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Purple Jurídico".into()),
                appears_transparent: true,
                traffic_light_position: Some(point(px(10.), px(10.))),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| {
            adopt_window_appearance(window, cx);
            cx.new(AppView::new)
        },
    )
    .context("failed to open the main window")?;

    Ok(())
}

fn main() {
    env_logger::init();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .run(|cx: &mut App| {
            purple_juridico::init(cx, preference_store());

            if let Err(err) = open_main_window(cx) {
                log::error!("{err:#}");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
