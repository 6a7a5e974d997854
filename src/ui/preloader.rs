//! Full-screen preloader overlay

use leptos::prelude::*;

use crate::core::percent_label;

/// CSS width of the filled bar
fn bar_width(progress: f64) -> String {
    format!("{}%", progress.clamp(0.0, 100.0))
}

/// Brand wordmark with a progress bar, shown while the page is loading
#[component]
pub fn Preloader(progress: ReadSignal<f64>, is_loading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || is_loading.get()>
            <div class="fixed inset-0 z-[100000] flex flex-col items-center justify-center bg-[#0E0E0E]">
                <div class="flex flex-col items-center gap-8 px-6">
                    <h1 class="font-serif text-4xl tracking-tight text-white md:text-5xl lg:text-6xl">
                        "YERBA"
                        <span class="block text-[#B59F26]">"VERDE"</span>
                    </h1>

                    <div class="w-full max-w-md">
                        <div class="h-2 w-full overflow-hidden rounded-full bg-[#1E1E1E]">
                            <div
                                class="h-full rounded-full bg-gradient-to-r from-[#6B5C08] to-[#B59F26] transition-all duration-300 ease-out"
                                style:width=move || bar_width(progress.get())
                            ></div>
                        </div>
                        <p class="mt-4 text-center text-sm text-[#CCCCCC]">
                            {move || format!("{}%", percent_label(progress.get()))}
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
