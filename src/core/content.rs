//! Page copy: marquee promos, benefits, gallery and the price list

/// One chip of the promo marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoItem {
    pub text: &'static str,
    /// Rendered as a white pill instead of plain text
    pub highlighted: bool,
}

pub const PROMO_ITEMS: [PromoItem; 2] = [
    PromoItem {
        text: "ПРОМОКОД: ПЕРВЫЙ10",
        highlighted: true,
    },
    PromoItem {
        text: "СКИДКА 10% НА ПЕРВЫЙ ЗАКАЗ",
        highlighted: false,
    },
];

/// How many times the promo pair repeats inside one copy of the strip
pub const PROMO_REPEATS: usize = 3;

/// Items of the marquee strip: one copy of the repeated promos, then the same
/// copy again so the loop point is invisible
pub fn marquee_strip() -> Vec<PromoItem> {
    let copy: Vec<PromoItem> = PROMO_ITEMS
        .iter()
        .copied()
        .cycle()
        .take(PROMO_ITEMS.len() * PROMO_REPEATS)
        .collect();
    copy.iter().chain(copy.iter()).copied().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub body: &'static str,
}

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        title: "100% Натуральный",
        body: "Чай мате из лучших плантаций Южной Америки, более 3000 листьев на килограмм.",
    },
    Benefit {
        title: "Мягкий и насыщенный вкус",
        body: "Идеальный баланс аромата и вкуса, без необходимости добавления сахара.",
    },
    Benefit {
        title: "Выращен в горах",
        body: "Растет на высоте более 1200 метров в идеальных климатических условиях, что обеспечивает уникальный и стойкий вкус.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picture {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const DESIRE_GALLERY: [Picture; 3] = [
    Picture {
        src: "/images/design-mode/desire-image-01.png",
        alt: "Yerba Verde - упаковка",
    },
    Picture {
        src: "/images/design-mode/desire-image-02.png",
        alt: "Yerba Verde - упаковка",
    },
    Picture {
        src: "/images/design-mode/desire-image-03.png",
        alt: "Yerba Verde - упаковка",
    },
];

/// One pricing card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductOffer {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub price_rub: u32,
    pub installment_months: u8,
    pub image: Picture,
}

impl ProductOffer {
    pub fn price_label(&self) -> String {
        format_rubles(self.price_rub)
    }

    pub fn installment_label(&self) -> String {
        format!("Рассрочка до {} месяцев", self.installment_months)
    }
}

pub const OFFERS: [ProductOffer; 4] = [
    ProductOffer {
        title: "Чай мате Yerba Verde",
        subtitle: "1 кг",
        price_rub: 2_500,
        installment_months: 3,
        image: Picture {
            src: "/images/design-mode/image-card-01.png",
            alt: "Чай мате Yerba Verde - 1 кг",
        },
    },
    ProductOffer {
        title: "Набор для мате Yerba Verde",
        subtitle: "Мате + Калабас + Бомбилья",
        price_rub: 7_500,
        installment_months: 4,
        image: Picture {
            src: "/images/design-mode/image-card-02.png",
            alt: "Набор для мате Yerba Verde",
        },
    },
    ProductOffer {
        title: "Набор 3 упаковки Yerba Verde",
        subtitle: "3 кг",
        price_rub: 6_900,
        installment_months: 3,
        image: Picture {
            src: "/images/design-mode/image-card-03.png",
            alt: "Набор 3 упаковки чая мате Yerba Verde",
        },
    },
    ProductOffer {
        title: "Набор 10 упаковок Yerba Verde",
        subtitle: "10 кг",
        price_rub: 19_900,
        installment_months: 4,
        image: Picture {
            src: "/images/design-mode/image-card-04.png",
            alt: "Набор 10 упаковок чая мате Yerba Verde",
        },
    },
];

/// Format a ruble amount with space-separated thousands, e.g. `2 500 р.`
pub fn format_rubles(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped.push_str(" р.");
    grouped
}
