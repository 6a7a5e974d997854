//! Landing page component
//!
//! The Yerba Verde storefront: preloader overlay, promo marquee and the
//! scroll-revealed sections. Section ids and element classes are the hooks the
//! reveal choreography resolves its target groups with, so they follow
//! [`Region::anchor_id`] and [`TargetGroup::class_name`].

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{BENEFITS, DESIRE_GALLERY, OFFERS, ProductOffer, marquee_strip};
use crate::core::{Region, TargetGroup};
use crate::ui::common::{Button, ButtonVariant, Card};
use crate::ui::motion::{use_preloader, use_reveal_choreography};
use crate::ui::preloader::Preloader;

const HERO_BACKGROUND: &str = "background-image: radial-gradient(74.86% 63.04% at 50% 71.13%, rgba(14, 14, 14, 0) 0%, #0E0E0E 100%), linear-gradient(190.21deg, rgba(14, 14, 14, 0) 48.79%, #0E0E0E 91.19%), url(https://hebbkx1anhila5yf.public.blob.vercel-storage.com/hero-background-QatnDXVXAGi0F0KCe4tuAQxe2m4T4E.png); background-size: cover; background-position: center;";

const BOX_BACKGROUND: &str = "background-image: url(https://hebbkx1anhila5yf.public.blob.vercel-storage.com/box-image-f1qFMJiDw7Rhdpat9cdzPtUdrGnBUq.png); background-size: cover; background-position: center;";

const ORIGIN_COPY: &str =
    "От горных плантаций до вашей чашки — испытайте настоящую сущность натурального чая мате.";

const SETTLE_COPY: &str =
    "Не соглашайтесь на меньшее — выбирайте настоящую эссенцию вкуса и наслаждайтесь каждым глотком.";

/// Element classes for a target group plus its layout classes
fn target_class(target: TargetGroup, layout: &str) -> String {
    format!("{} {}", target.class_name(), layout)
}

/// Landing page with preloader and scroll-revealed sections
#[component]
pub fn LandingPage() -> impl IntoView {
    let preloader = use_preloader();
    use_reveal_choreography(preloader.is_loading);

    view! {
        <SeoMeta />

        <Preloader progress=preloader.progress is_loading=preloader.is_loading />

        <main class="w-full overflow-x-hidden bg-[#0E0E0E]">
            <Marquee />
            <HeroSection />
            <BenefitsSection />
            <AboutSection />
            <DesireSection />
            <InstigateSection />
            <WhySection />
            <PricingSection />
            <CtaSection />
            <Footer />
        </main>
    }
}

/// Promo strip; its content is rendered twice for a seamless loop
#[component]
fn Marquee() -> impl IntoView {
    let chips = marquee_strip()
        .into_iter()
        .map(|item| {
            if item.highlighted {
                view! {
                    <div class="flex items-center justify-center rounded-xl bg-white px-6 py-1.5 md:px-8">
                        <span class="font-serif text-xs font-normal text-black md:text-sm">{item.text}</span>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="flex items-center justify-center rounded-xl px-4 py-1.5 md:px-6">
                        <span class="font-serif text-xs font-normal text-white md:text-sm">{item.text}</span>
                    </div>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <div id=TargetGroup::MarqueeContent.container_id() class="w-full overflow-hidden bg-[#6B5C08] py-4">
            <div class=target_class(TargetGroup::MarqueeContent, "flex items-center gap-4 whitespace-nowrap")>
                {chips}
            </div>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section
            id=Region::Hero.anchor_id()
            class="relative flex min-h-[600px] w-full items-center justify-center px-6 py-16 md:min-h-[800px] md:px-20 md:py-24 lg:min-h-[1030px] lg:px-80"
            style=HERO_BACKGROUND
        >
            <div class="flex w-full max-w-7xl flex-col items-center gap-8 md:gap-12 lg:gap-14">
                <div class=target_class(TargetGroup::HeroContent, "flex flex-col items-center gap-5 text-center")>
                    <h1 class="text-balance font-serif text-3xl leading-tight tracking-tight text-white md:text-5xl lg:text-[56px]">
                        "Откройте настоящий вкус чая мате"
                    </h1>
                    <p class="max-w-4xl text-pretty text-base leading-relaxed tracking-tight text-[#CCCCCC] md:text-lg">
                        "Уникальный опыт, который превращает каждую чашку в особенный момент."
                    </p>
                    <div class="flex flex-wrap items-center justify-center gap-2.5">
                        <Button class="h-12 rounded-xl bg-white px-4 font-serif text-base text-[#0E0E0E] hover:bg-white/90 md:text-lg">
                            "Купить сейчас"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            class="h-12 rounded-xl border-[#CCCCCC] bg-transparent px-4 font-serif text-base text-white hover:bg-white/10 md:text-lg"
                        >
                            "Узнать больше"
                        </Button>
                    </div>
                </div>
                <div class=target_class(TargetGroup::HeroImage, "relative h-[300px] w-full max-w-2xl md:h-[400px] lg:h-[583px] lg:max-w-[884px]")>
                    <img
                        src="/images/design-mode/hero-image.png"
                        alt="Yerba Verde - премиальный чай мате"
                        class="h-full w-full object-contain"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <section id=Region::Benefits.anchor_id() class="w-full px-6 py-16 md:px-20 md:py-24 lg:px-80 lg:py-28">
            <div class="mx-auto flex max-w-7xl flex-col items-start gap-8 lg:flex-row lg:gap-12">
                <div class=target_class(TargetGroup::BenefitsTitle, "flex flex-col gap-6 lg:flex-1")>
                    <h2 class="text-balance font-serif text-3xl leading-tight tracking-tight text-white md:text-4xl lg:text-5xl">
                        "Непревзойденный вкус и качество"
                    </h2>
                    <p class="text-pretty text-base leading-relaxed tracking-tight text-white md:text-lg">
                        "Натуральный чай мате высшего качества, сбалансированный и ароматный, без добавления сахара, для настоящих ценителей традиционного напитка."
                    </p>
                </div>
                <div class="flex flex-col gap-2 lg:flex-1">
                    {BENEFITS
                        .iter()
                        .map(|benefit| view! {
                            <div class=target_class(TargetGroup::BenefitCards, "flex flex-col gap-2 rounded-[20px] bg-gradient-to-r from-[#6B5C08] to-[#0E0E0E] p-6 md:p-8")>
                                <h3 class="font-serif text-2xl leading-tight tracking-tight text-white md:text-4xl">
                                    {benefit.title}
                                </h3>
                                <p class="text-sm leading-relaxed tracking-tight text-white md:text-base">
                                    {benefit.body}
                                </p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id=Region::About.anchor_id() class="w-full px-6 py-16 md:px-20 md:py-24 lg:px-80 lg:py-28">
            <div class="mx-auto flex max-w-7xl flex-col items-center gap-8 lg:flex-row lg:gap-12">
                <div class=target_class(TargetGroup::AboutImage, "w-full lg:flex-1")>
                    <img
                        src="/images/design-mode/about-image.png"
                        alt="Карта происхождения чая мате"
                        class="h-auto w-full rounded-2xl object-cover"
                    />
                </div>
                <div class=target_class(TargetGroup::AboutContent, "flex flex-col gap-6 lg:flex-1")>
                    <h2 class="font-serif text-3xl leading-tight tracking-tight text-white md:text-4xl lg:text-5xl">
                        "Происхождение вкуса"
                    </h2>
                    <p class="text-pretty text-base leading-relaxed tracking-tight text-white md:text-lg">
                        "В одной из самых высокогорных точек Южной Америки рождается чай мате, который выделяется своим несравненным качеством. "
                        "На высоте более 1200 метров идеальный климат и плодородная почва создают условия для выращивания мате с уникальным ароматом и вкусом. "
                        "Каждый лист тщательно собирается, гарантируя сбалансированный и стойкий вкус, который делает каждую чашку особенной. "
                        {ORIGIN_COPY}
                    </p>
                    <Button class="h-12 w-full rounded-[20px] bg-gradient-to-r from-[#6B5C08] to-[#B59F26] font-serif text-lg text-white hover:opacity-90 md:text-xl">
                        "Купить сейчас"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DesireSection() -> impl IntoView {
    let last = DESIRE_GALLERY.len() - 1;

    view! {
        <section id=Region::Desire.anchor_id() class="w-full px-6 py-16 md:px-20 md:py-24 lg:px-80 lg:py-28">
            <div class="mx-auto max-w-7xl">
                <div class="rounded-[40px] border-2 border-[#1E1E1E] bg-[#0E0E0E] px-6 py-12 md:px-12 md:py-16 lg:px-24">
                    <h2 class=target_class(TargetGroup::DesireTitle, "mb-8 text-balance text-center font-serif text-3xl leading-tight tracking-tight text-white md:mb-12 md:text-4xl lg:text-[56px]")>
                        "Откройте для себя настоящий вкус традиции в любой момент"
                    </h2>
                    <div class="grid grid-cols-1 gap-6 md:grid-cols-3 md:gap-8">
                        {DESIRE_GALLERY
                            .iter()
                            .enumerate()
                            .map(|(index, picture)| {
                                // Only the last picture keeps its bottom corners rounded
                                let corners = if index == last {
                                    "overflow-hidden rounded-2xl"
                                } else {
                                    "overflow-hidden rounded-2xl rounded-b-none"
                                };
                                view! {
                                    <div class=target_class(TargetGroup::DesireImages, corners)>
                                        <img src=picture.src alt=picture.alt class="h-full w-full object-cover" />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InstigateSection() -> impl IntoView {
    view! {
        <section id=Region::Instigate.anchor_id() class="w-full px-6 py-16 md:px-20 md:py-24 lg:px-[420px] lg:py-28">
            <div class="mx-auto flex max-w-5xl flex-col items-center gap-8 md:gap-12">
                <div class=target_class(TargetGroup::InstigateContent, "flex flex-col gap-6 text-center")>
                    <h2 class="text-balance font-serif text-3xl leading-tight tracking-tight text-white md:text-4xl lg:text-[56px]">
                        "Чего вы ждете?"
                    </h2>
                    <p class="text-pretty text-base leading-relaxed tracking-tight text-[#CCCCCC] md:text-lg">
                        "Жизнь состоит из моментов, и хороший мате превращает простое в особенное. "
                        {SETTLE_COPY}
                    </p>
                </div>
                <div
                    class=target_class(TargetGroup::InstigateImage, "relative flex min-h-[400px] w-full items-end justify-center rounded-[40px] p-6 md:min-h-[600px] md:p-10 lg:min-h-[850px]")
                    style=BOX_BACKGROUND
                >
                    <Button class="h-16 w-full max-w-md rounded-[20px] bg-gradient-to-r from-[#6B5C08] to-[#B59F26] font-serif text-xl text-white hover:opacity-90 md:h-24 md:text-3xl lg:text-[32px]">
                        "Купить сейчас"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhySection() -> impl IntoView {
    view! {
        <section id=Region::Why.anchor_id() class="w-full px-6 py-16 md:px-20 md:py-24 lg:px-[420px] lg:py-28">
            <div class="mx-auto flex max-w-5xl flex-col items-center gap-8 md:gap-12">
                <div class=target_class(TargetGroup::WhyContent, "flex flex-col gap-6 text-center")>
                    <h2 class="text-balance font-serif text-3xl leading-tight tracking-tight text-white md:text-4xl lg:text-[56px]">
                        "Почему выбирают Yerba Verde?"
                    </h2>
                    <p class="text-pretty text-base leading-relaxed tracking-tight text-[#CCCCCC] md:text-lg">
                        "Жизнь состоит из моментов, и хороший мате превращает простое в особенное. "
                        {SETTLE_COPY}
                    </p>
                </div>
                <div class=target_class(TargetGroup::WhyImage, "w-full")>
                    <img
                        src="/images/design-mode/why-image.png"
                        alt="Почему выбирают Yerba Verde"
                        class="h-auto w-full rounded-2xl object-cover"
                    />
                </div>
            </div>
        </section>
    }
}

/// Price list
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id=Region::Pricing.anchor_id() class="w-full px-6 py-16 md:px-20 md:py-24 lg:px-[420px] lg:py-28">
            <div class="mx-auto grid max-w-5xl grid-cols-1 gap-6 md:grid-cols-2 md:gap-8">
                {OFFERS.iter().map(|offer| view! { <PricingCard offer=*offer /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(offer: ProductOffer) -> impl IntoView {
    view! {
        <Card class=target_class(TargetGroup::PricingCards, "flex flex-col gap-4 rounded-2xl border border-white/10 bg-gradient-to-br from-[#333333] to-[#0E0E0E] p-6 shadow-lg md:p-8")>
            <div class="aspect-square w-full overflow-hidden rounded-[20px] bg-[#6B5C08]">
                <img src=offer.image.src alt=offer.image.alt class="h-full w-full object-cover" />
            </div>
            <div class="flex flex-col gap-1">
                <h3 class="text-lg font-semibold tracking-tight text-white md:text-xl">{offer.title}</h3>
                <p class="text-sm text-white/55 md:text-base">{offer.subtitle}</p>
            </div>
            <p class="text-4xl font-bold tracking-tight text-white md:text-5xl">{offer.price_label()}</p>
            <p class="text-xs tracking-tight text-white md:text-sm">{offer.installment_label()}</p>
            <Button class="h-12 w-full rounded-xl bg-[#B59F26] text-base font-medium text-white hover:bg-[#B59F26]/90 md:text-lg">
                "КУПИТЬ"
            </Button>
        </Card>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section id=Region::Cta.anchor_id() class="w-full px-6 py-16 md:px-20 md:py-24 lg:px-[420px] lg:py-28">
            <div class="mx-auto max-w-5xl">
                <div class=target_class(TargetGroup::CtaBox, "flex flex-col items-center gap-6 rounded-[20px] bg-gradient-to-r from-[#6B5C08] to-[#B59F26] p-6 md:flex-row md:gap-8 md:p-12 lg:p-16")>
                    <p class="flex-1 text-balance text-center font-semibold leading-tight tracking-tight text-white md:text-left md:text-2xl lg:text-[26px]">
                        "Свяжитесь с нами прямо сейчас и узнайте больше о Yerba Verde!"
                    </p>
                    <Button class="h-12 w-full rounded-xl bg-[#0E0E0E] text-base text-white hover:bg-[#0E0E0E]/90 md:w-auto md:px-8 md:text-lg">
                        "Связаться с нами"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full border-t border-[#333333] px-6 py-12 md:px-20 lg:px-[420px]">
            <div class="mx-auto flex max-w-5xl flex-col items-center justify-center gap-6">
                <h2 class="font-serif text-2xl tracking-tight text-white md:text-3xl">
                    "YERBA " <span class="text-[#B59F26]">"VERDE"</span>
                </h2>
                <p class="text-center text-sm leading-relaxed tracking-tight text-white/55 md:text-base">
                    "2025 - Yerba Verde. Все права защищены."
                </p>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Yerba Verde - настоящий чай мате" />

        <Meta name="description" content="Натуральный чай мате Yerba Verde с высокогорных плантаций Южной Америки. Наборы для мате, рассрочка и скидка 10% на первый заказ." />
        <Meta name="keywords" content="чай мате, yerba mate, Yerba Verde, калабас, бомбилья, купить мате" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Yerba Verde - настоящий чай мате" />
        <Meta property="og:description" content="Уникальный опыт, который превращает каждую чашку в особенный момент." />
        <Meta property="og:image" content="/images/design-mode/hero-image.png" />

        <Link rel="icon" href="/favicon.ico" />
    }
}
