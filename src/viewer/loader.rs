//! Concurrent image loading.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlImageElement;

use crate::error::Result;
use crate::frames::LoadEvent;
use crate::player::SequencePlayer;
use crate::render::CanvasSurface;

/// Start loading every frame at once. Each image is an independent future;
/// `on_ready` runs once, on the completion that makes the store ready.
pub fn load_all(
    player: &Rc<RefCell<SequencePlayer<CanvasSurface>>>,
    on_ready: Rc<dyn Fn()>,
) -> Result<()> {
    let pending: Vec<(usize, String)> = player
        .borrow()
        .store()
        .locators()
        .map(|(index, locator)| (index, locator.to_string()))
        .collect();
    tracing::info!("loading {} frames", pending.len());

    for (index, locator) in pending {
        let image = HtmlImageElement::new().map_err(|_| "Failed to create image element")?;
        image.set_src(&locator);
        player
            .borrow_mut()
            .renderer_mut()
            .surface_mut()
            .attach_image(index, image.clone());

        let player = Rc::clone(player);
        let on_ready = Rc::clone(&on_ready);
        spawn_local(async move {
            let decoded = JsFuture::from(image.decode()).await;
            let event = match decoded {
                Ok(_) => player.borrow_mut().frame_loaded(
                    index,
                    image.natural_width(),
                    image.natural_height(),
                ),
                Err(_) => player.borrow_mut().frame_failed(index),
            };
            if event == LoadEvent::BecameReady {
                on_ready();
            }
        });
    }
    Ok(())
}
