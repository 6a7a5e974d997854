//! Reactive wiring of the preloader and the reveal choreography
//!
//! Both hooks only start work in the browser. On the server the preloader
//! stays at 0% with the loading flag up, which is exactly the first frame the
//! client hydrates.

use leptos::prelude::*;

/// Preloader state exposed to the view
#[derive(Clone, Copy)]
pub struct PreloaderSignals {
    pub progress: ReadSignal<f64>,
    pub is_loading: ReadSignal<bool>,
}

/// Start the preloader for the lifetime of the calling component
///
/// Progress climbs to 100 over the preload duration; the loading flag drops
/// after the settle delay. Unmounting cancels both timers.
pub fn use_preloader() -> PreloaderSignals {
    let (progress, set_progress) = signal(0.0_f64);
    let (is_loading, set_is_loading) = signal(true);

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use crate::core::{ChoreographyConfig, PreloadRun};
        use crate::ui::web::WebScheduler;

        let run = StoredValue::new_local(None::<PreloadRun>);

        Effect::new(move |_| {
            let started = PreloadRun::start(
                Rc::new(WebScheduler),
                ChoreographyConfig::default(),
                move |value| set_progress.set(value),
                move || set_is_loading.set(false),
            );
            run.set_value(Some(started));
        });

        on_cleanup(move || {
            run.try_update_value(Option::take);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (set_progress, set_is_loading);
    }

    PreloaderSignals {
        progress,
        is_loading,
    }
}

/// Activate the reveal choreography once `is_loading` turns false
///
/// Activation happens at most once per mount. Unmounting tears the
/// choreography down, cancelling every observer and animation it registered.
pub fn use_reveal_choreography(is_loading: ReadSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use leptos::logging::warn;

        use crate::core::{ChoreographyConfig, Choreographer};
        use crate::ui::web::{WebScheduler, WebStage};

        let choreographer = StoredValue::new_local(None::<Choreographer>);

        Effect::new(move |_| {
            if is_loading.get() {
                return;
            }
            if choreographer.with_value(Option::is_some) {
                return;
            }

            let Some(stage) = WebStage::new() else {
                warn!("no document to animate, reveal choreography skipped");
                return;
            };
            let mut reveal = Choreographer::new(
                Rc::new(stage),
                Rc::new(WebScheduler),
                ChoreographyConfig::default(),
            );
            if let Err(err) = reveal.activate() {
                warn!("reveal choreography not activated: {err}");
                return;
            }
            choreographer.set_value(Some(reveal));
        });

        on_cleanup(move || {
            choreographer.try_update_value(|slot| {
                if let Some(reveal) = slot.as_mut() {
                    reveal.deactivate();
                }
                slot.take()
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = is_loading;
    }
}
