//! Reveal animation catalogue
//!
//! Every entrance animation on the page is a [`RevealAnimationSpec`]: a target
//! element group, the visual offset it starts from, what triggers it, and its
//! timing. The whole set is static and produced by [`reveal_catalogue`] in
//! page order.

use super::timing::ChoreographyConfig;

/// Named page regions that own reveal animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Hero,
    Benefits,
    About,
    Desire,
    Instigate,
    Why,
    Pricing,
    Cta,
}

impl Region {
    /// Regions in page order
    pub const ALL: [Region; 8] = [
        Region::Hero,
        Region::Benefits,
        Region::About,
        Region::Desire,
        Region::Instigate,
        Region::Why,
        Region::Pricing,
        Region::Cta,
    ];

    /// DOM id of the region's section
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Region::Hero => "hero",
            Region::Benefits => "benefits",
            Region::About => "about",
            Region::Desire => "desire",
            Region::Instigate => "instigate",
            Region::Why => "why",
            Region::Pricing => "pricing",
            Region::Cta => "cta",
        }
    }
}

/// Logical element groups the choreography animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetGroup {
    HeroContent,
    HeroImage,
    BenefitsTitle,
    BenefitCards,
    AboutImage,
    AboutContent,
    DesireTitle,
    DesireImages,
    InstigateContent,
    InstigateImage,
    WhyContent,
    WhyImage,
    PricingCards,
    CtaBox,
    MarqueeContent,
}

impl TargetGroup {
    pub const ALL: [TargetGroup; 15] = [
        TargetGroup::HeroContent,
        TargetGroup::HeroImage,
        TargetGroup::BenefitsTitle,
        TargetGroup::BenefitCards,
        TargetGroup::AboutImage,
        TargetGroup::AboutContent,
        TargetGroup::DesireTitle,
        TargetGroup::DesireImages,
        TargetGroup::InstigateContent,
        TargetGroup::InstigateImage,
        TargetGroup::WhyContent,
        TargetGroup::WhyImage,
        TargetGroup::PricingCards,
        TargetGroup::CtaBox,
        TargetGroup::MarqueeContent,
    ];

    /// CSS class carried by every element of the group
    pub fn class_name(&self) -> &'static str {
        match self {
            TargetGroup::HeroContent => "hero-content",
            TargetGroup::HeroImage => "hero-image",
            TargetGroup::BenefitsTitle => "benefits-title",
            TargetGroup::BenefitCards => "benefit-card",
            TargetGroup::AboutImage => "about-image",
            TargetGroup::AboutContent => "about-content",
            TargetGroup::DesireTitle => "desire-title",
            TargetGroup::DesireImages => "desire-image",
            TargetGroup::InstigateContent => "instigate-content",
            TargetGroup::InstigateImage => "instigate-image",
            TargetGroup::WhyContent => "why-content",
            TargetGroup::WhyImage => "why-image",
            TargetGroup::PricingCards => "pricing-card",
            TargetGroup::CtaBox => "cta-box",
            TargetGroup::MarqueeContent => "marquee-content",
        }
    }

    /// Region the group is rendered in; the marquee sits outside all regions
    pub fn region(&self) -> Option<Region> {
        match self {
            TargetGroup::HeroContent | TargetGroup::HeroImage => Some(Region::Hero),
            TargetGroup::BenefitsTitle | TargetGroup::BenefitCards => Some(Region::Benefits),
            TargetGroup::AboutImage | TargetGroup::AboutContent => Some(Region::About),
            TargetGroup::DesireTitle | TargetGroup::DesireImages => Some(Region::Desire),
            TargetGroup::InstigateContent | TargetGroup::InstigateImage => {
                Some(Region::Instigate)
            }
            TargetGroup::WhyContent | TargetGroup::WhyImage => Some(Region::Why),
            TargetGroup::PricingCards => Some(Region::Pricing),
            TargetGroup::CtaBox => Some(Region::Cta),
            TargetGroup::MarqueeContent => None,
        }
    }

    /// DOM id of the element that contains the group
    pub fn container_id(&self) -> &'static str {
        self.region().map(|region| region.anchor_id()).unwrap_or("marquee")
    }

    /// CSS selector resolving every element of the group, in document order
    pub fn selector(&self) -> String {
        format!("#{} .{}", self.container_id(), self.class_name())
    }
}

/// Opacity, translation (px) and scale of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    /// The element's natural resting look
    pub const REST: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Fully transparent, otherwise at rest
    pub const fn hidden() -> Self {
        VisualState {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn with_x(self, x: f64) -> Self {
        VisualState { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Self {
        VisualState { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    /// Linear interpolation towards `to`; `t` is already eased
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }
}

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Quartic decelerate, `1 - (1 - t)^4`
    #[default]
    Power3Out,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// What starts a reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Plays as soon as the choreography activates
    Immediate,
    /// Plays once the region's top edge crosses `threshold` of the viewport height
    Scroll { region: Region, threshold: f64 },
}

/// One entrance animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAnimationSpec {
    pub target: TargetGroup,
    pub from: VisualState,
    pub trigger: Trigger,
    pub duration_ms: f64,
    pub easing: Easing,
    pub delay_ms: f64,
    pub stagger_ms: f64,
}

impl RevealAnimationSpec {
    pub fn new(target: TargetGroup, from: VisualState, trigger: Trigger, duration_ms: f64) -> Self {
        Self {
            target,
            from,
            trigger,
            duration_ms,
            easing: Easing::default(),
            delay_ms: 0.0,
            stagger_ms: 0.0,
        }
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn stagger(mut self, ms: f64) -> Self {
        self.stagger_ms = ms;
        self
    }

    /// Region whose scroll position arms this spec, if any
    pub fn scroll_region(&self) -> Option<Region> {
        match self.trigger {
            Trigger::Immediate => None,
            Trigger::Scroll { region, .. } => Some(region),
        }
    }

    /// Offset of element `index` from the moment the spec starts playing
    pub fn element_start_ms(&self, index: usize) -> f64 {
        self.delay_ms + index as f64 * self.stagger_ms
    }

    /// Time until the last of `elements` has settled
    pub fn total_ms(&self, elements: usize) -> f64 {
        match elements {
            0 => 0.0,
            n => self.element_start_ms(n - 1) + self.duration_ms,
        }
    }

    /// Visual state of element `index`, `elapsed_ms` after the spec started
    pub fn sample(&self, index: usize, elapsed_ms: f64) -> VisualState {
        let local = elapsed_ms - self.element_start_ms(index);
        if local <= 0.0 {
            self.from
        } else if local >= self.duration_ms {
            VisualState::REST
        } else {
            let t = self.easing.apply(local / self.duration_ms);
            self.from.lerp(&VisualState::REST, t)
        }
    }
}

/// The full set of reveal animations in page order
pub fn reveal_catalogue(config: &ChoreographyConfig) -> Vec<RevealAnimationSpec> {
    use TargetGroup::*;

    let scroll = |region| Trigger::Scroll {
        region,
        threshold: config.scroll_threshold,
    };
    let faded = VisualState::hidden();

    vec![
        RevealAnimationSpec::new(HeroContent, faded.with_y(60.0), Trigger::Immediate, 1200.0),
        RevealAnimationSpec::new(HeroImage, faded.with_scale(0.9), Trigger::Immediate, 1200.0)
            .delay(300.0),
        RevealAnimationSpec::new(BenefitsTitle, faded.with_x(-60.0), scroll(Region::Benefits), 1000.0),
        RevealAnimationSpec::new(BenefitCards, faded.with_y(40.0), scroll(Region::Benefits), 800.0)
            .stagger(200.0),
        RevealAnimationSpec::new(AboutImage, faded.with_scale(0.95), scroll(Region::About), 1000.0),
        RevealAnimationSpec::new(AboutContent, faded.with_x(60.0), scroll(Region::About), 1000.0),
        RevealAnimationSpec::new(DesireTitle, faded.with_y(40.0), scroll(Region::Desire), 1000.0),
        RevealAnimationSpec::new(DesireImages, faded.with_y(60.0), scroll(Region::Desire), 800.0)
            .stagger(150.0),
        RevealAnimationSpec::new(
            InstigateContent,
            faded.with_y(40.0),
            scroll(Region::Instigate),
            1000.0,
        ),
        RevealAnimationSpec::new(
            InstigateImage,
            faded.with_scale(0.95),
            scroll(Region::Instigate),
            1200.0,
        )
        .delay(200.0),
        RevealAnimationSpec::new(WhyContent, faded.with_y(40.0), scroll(Region::Why), 1000.0),
        RevealAnimationSpec::new(WhyImage, faded.with_scale(0.95), scroll(Region::Why), 1000.0)
            .delay(200.0),
        RevealAnimationSpec::new(PricingCards, faded.with_y(60.0), scroll(Region::Pricing), 800.0)
            .stagger(150.0),
        RevealAnimationSpec::new(CtaBox, faded.with_scale(0.95), scroll(Region::Cta), 1000.0),
    ]
}

/// Regions with at least one scroll-bound spec, in page order, without repeats
pub fn scroll_regions(specs: &[RevealAnimationSpec]) -> Vec<Region> {
    let mut regions = Vec::new();
    for region in specs.iter().filter_map(RevealAnimationSpec::scroll_region) {
        if !regions.contains(&region) {
            regions.push(region);
        }
    }
    regions
}
