//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Страница не найдена - Yerba Verde" />

        <div class="min-h-screen bg-[#0E0E0E] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="font-serif text-6xl font-bold text-[#B59F26] mb-4">"404"</h1>

                // Title
                <h2 class="font-serif text-2xl text-white mb-2">
                    "Страница не найдена"
                </h2>

                // Description
                <p class="text-[#CCCCCC] mb-8 max-w-md mx-auto">
                    "Такой страницы нет или она была перемещена."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 rounded-xl bg-gradient-to-r from-[#6B5C08] to-[#B59F26] text-white font-medium transition-opacity hover:opacity-90"
                >
                    "На главную"
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-white/55">
                    "2025 - Yerba Verde. Все права защищены."
                </p>
            </div>
        </div>
    }
}
