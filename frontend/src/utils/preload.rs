//! Animal image preloading, so a polygon popup can show its picture without
//! a visible fetch.
//!
//! All 60 images are requested concurrently at page load. Every request
//! races the browser's load/error events against a 5 second timer; whichever
//! settles first decides the item, later events are no-ops. The coordinator
//! itself never fails — a missing picture must not block the map — it only
//! tallies how the batch went. Repeated calls issue a fresh batch; there is
//! no dedup and no cancellation.

use futures::channel::oneshot;
use futures::future::{join_all, select, Either};
use futures::Future;
use gloo_console::{log, warn};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Animal species ids are dense in `[1, 60]`.
pub const ANIMAL_SPECIES_COUNT: u32 = 60;

/// Per-image deadline.
const LOAD_TIMEOUT_MS: u32 = 5000;

pub fn animal_species_ids() -> impl Iterator<Item = u32> {
    1..=ANIMAL_SPECIES_COUNT
}

/// Static path convention for an animal's picture.
pub fn animal_image_path(id: u32) -> String {
    format!("/zwierzaki/{}.webp", id)
}

/// How a single image load settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
    TimedOut,
}

/// Tally of one preload batch. Timeouts count as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreloadSummary {
    pub loaded: u32,
    pub failed: u32,
}

impl PreloadSummary {
    pub fn total(&self) -> u32 {
        self.loaded + self.failed
    }
}

/// Preloads the full animal picture set. Always resolves, whatever happens
/// to the individual images; the summary is the only signal.
pub async fn preload_animal_images() -> PreloadSummary {
    log!(format!(
        "Preloading {} animal images...",
        ANIMAL_SPECIES_COUNT
    ));
    let summary = run_preload(load_image).await;
    log!(format!(
        "Animal image preloading complete: {} loaded, {} failed",
        summary.loaded, summary.failed
    ));
    summary
}

/// Batch driver, generic over the per-image loader so the policy (one
/// attempt per id, concurrent fan-out, never fails) is testable without a
/// browser.
pub(crate) async fn run_preload<F, Fut>(loader: F) -> PreloadSummary
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = LoadOutcome>,
{
    let outcomes = join_all(
        animal_species_ids()
            .map(animal_image_path)
            .map(|path| loader(path)),
    )
    .await;

    outcomes
        .into_iter()
        .fold(PreloadSummary::default(), |mut summary, outcome| {
            match outcome {
                LoadOutcome::Loaded => summary.loaded += 1,
                LoadOutcome::Failed | LoadOutcome::TimedOut => summary.failed += 1,
            }
            summary
        })
}

/// Loads one image through the browser, racing load/error against the
/// timer. The first settled outcome wins; the handlers share a one-shot
/// slot, so whichever event fires later finds it empty and does nothing.
async fn load_image(path: String) -> LoadOutcome {
    let Ok(img) = HtmlImageElement::new() else {
        return LoadOutcome::Failed;
    };

    let (tx, rx) = oneshot::channel::<bool>();
    let slot = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let slot = slot.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = slot.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = {
        let slot = slot.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = slot.borrow_mut().take() {
                let _ = tx.send(false);
            }
        })
    };
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    img.set_src(&path);

    let timeout = TimeoutFuture::new(LOAD_TIMEOUT_MS);
    futures::pin_mut!(timeout);
    let outcome = match select(rx, timeout).await {
        Either::Left((Ok(true), _)) => LoadOutcome::Loaded,
        Either::Left(_) => {
            warn!(format!("Failed to preload: {}", path));
            LoadOutcome::Failed
        }
        Either::Right(_) => {
            warn!(format!("Timeout preloading: {}", path));
            LoadOutcome::TimedOut
        }
    };

    // The element may still fire events after we return; the handlers must
    // outlive this call.
    on_load.forget();
    on_error.forget();
    outcome
}
