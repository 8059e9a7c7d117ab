//! Display strings for synastry results.
//!
//! Everything here is a pure function of its arguments; the locale is always
//! passed in by the caller.

use crate::aspects::types::{AspectCore, AspectKind, AspectNature, AspectObjectRef, ChartSide};
use crate::chart::Planet;
use crate::houses::HouseOverlay;
use crate::scoring::CategoryKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "hi" | "hindi" => Ok(Locale::Hindi),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

pub fn planet_name(planet: Planet, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match planet {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
            Planet::NorthNode => "North Node",
            Planet::SouthNode => "South Node",
        },
        Locale::Hindi => match planet {
            Planet::Sun => "सूर्य",
            Planet::Moon => "चंद्र",
            Planet::Mercury => "बुध",
            Planet::Venus => "शुक्र",
            Planet::Mars => "मंगल",
            Planet::Jupiter => "गुरु",
            Planet::Saturn => "शनि",
            Planet::Uranus => "अरुण",
            Planet::Neptune => "वरुण",
            Planet::Pluto => "यम",
            Planet::NorthNode => "राहु",
            Planet::SouthNode => "केतु",
        },
    }
}

pub fn aspect_name(kind: AspectKind, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match kind {
            AspectKind::Conjunction => "conjunct",
            AspectKind::Opposition => "opposite",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
            AspectKind::Quincunx => "quincunx",
            AspectKind::SemiSextile => "semi-sextile",
        },
        Locale::Hindi => match kind {
            AspectKind::Conjunction => "युति",
            AspectKind::Opposition => "प्रतियुति",
            AspectKind::Trine => "त्रिकोण",
            AspectKind::Square => "केंद्र",
            AspectKind::Sextile => "षष्ठांश",
            AspectKind::Quincunx => "षडाष्टक",
            AspectKind::SemiSextile => "अर्ध-षष्ठांश",
        },
    }
}

fn nature_phrase(nature: AspectNature, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match nature {
            AspectNature::Major => "a powerful fusion of both energies",
            AspectNature::Harmonious => "an easy, supportive flow between you",
            AspectNature::Challenging => "friction that asks for conscious effort",
            AspectNature::Minor => "a subtle adjustment between you",
        },
        Locale::Hindi => match nature {
            AspectNature::Major => "दोनों ऊर्जाओं का शक्तिशाली मेल",
            AspectNature::Harmonious => "आप दोनों के बीच सहज, सहायक प्रवाह",
            AspectNature::Challenging => "घर्षण जिसके लिए सचेत प्रयास चाहिए",
            AspectNature::Minor => "आप दोनों के बीच सूक्ष्म समायोजन",
        },
    }
}

fn person(side: ChartSide, locale: Locale) -> String {
    match locale {
        Locale::English => format!("Person {}", side.number()),
        Locale::Hindi => format!("व्यक्ति {}", side.number()),
    }
}

/// Life area governed by a house (1-12).
pub fn life_area(house: u8, locale: Locale) -> &'static str {
    const ENGLISH: [&str; 12] = [
        "self & identity",
        "resources & values",
        "communication & siblings",
        "home & family",
        "romance & creativity",
        "daily work & health",
        "partnership",
        "intimacy & shared resources",
        "philosophy & travel",
        "career & public life",
        "friendship & hopes",
        "subconscious & spirituality",
    ];
    const HINDI: [&str; 12] = [
        "स्व और पहचान",
        "धन और मूल्य",
        "संवाद और भाई-बहन",
        "घर और परिवार",
        "प्रेम और रचनात्मकता",
        "दैनिक कार्य और स्वास्थ्य",
        "साझेदारी",
        "अंतरंगता और साझा संसाधन",
        "दर्शन और यात्रा",
        "करियर और सार्वजनिक जीवन",
        "मित्रता और आशाएँ",
        "अवचेतन और आध्यात्म",
    ];
    let index = (house.clamp(1, 12) - 1) as usize;
    match locale {
        Locale::English => ENGLISH[index],
        Locale::Hindi => HINDI[index],
    }
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

pub fn category_name(kind: CategoryKind, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match kind {
            CategoryKind::EmotionalBond => "Emotional Bond",
            CategoryKind::Romance => "Romance",
            CategoryKind::Communication => "Communication",
            CategoryKind::Stability => "Stability",
            CategoryKind::Growth => "Growth",
        },
        Locale::Hindi => match kind {
            CategoryKind::EmotionalBond => "भावनात्मक बंधन",
            CategoryKind::Romance => "रोमांस",
            CategoryKind::Communication => "संवाद",
            CategoryKind::Stability => "स्थिरता",
            CategoryKind::Growth => "विकास",
        },
    }
}

pub fn category_description(kind: CategoryKind, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match kind {
            CategoryKind::EmotionalBond => "How naturally your Sun and Moon support each other",
            CategoryKind::Romance => "Attraction and chemistry between Venus and Mars",
            CategoryKind::Communication => "Ease of understanding through Mercury",
            CategoryKind::Stability => "Long-term commitment shown by Saturn",
            CategoryKind::Growth => "Shared expansion and optimism through Jupiter",
        },
        Locale::Hindi => match kind {
            CategoryKind::EmotionalBond => "आपके सूर्य और चंद्र एक-दूसरे का कितना सहज साथ देते हैं",
            CategoryKind::Romance => "शुक्र और मंगल के बीच आकर्षण",
            CategoryKind::Communication => "बुध के माध्यम से समझ की सहजता",
            CategoryKind::Stability => "शनि द्वारा दर्शाई गई दीर्घकालिक प्रतिबद्धता",
            CategoryKind::Growth => "गुरु के माध्यम से साझा विकास और आशावाद",
        },
    }
}

/// Human-readable reading of one aspect.
pub fn interpret_aspect(
    from_ref: AspectObjectRef,
    to_ref: AspectObjectRef,
    aspect: &AspectCore,
    locale: Locale,
) -> String {
    let from = planet_name(from_ref.planet, locale);
    let to = planet_name(to_ref.planet, locale);
    let name = aspect_name(aspect.definition.kind, locale);
    let phrase = nature_phrase(aspect.definition.nature, locale);
    let orb = aspect.orb;
    match locale {
        Locale::English => {
            let motion = if aspect.is_exact {
                "exact"
            } else if aspect.is_applying {
                "applying"
            } else {
                "separating"
            };
            format!(
                "{}'s {} {} {}'s {} ({}, orb {:.1}°): {}",
                person(from_ref.side, locale),
                from,
                name,
                person(to_ref.side, locale),
                to,
                motion,
                orb,
                phrase
            )
        }
        Locale::Hindi => {
            let motion = if aspect.is_exact {
                "सटीक"
            } else if aspect.is_applying {
                "निकट आता"
            } else {
                "दूर जाता"
            };
            format!(
                "{} का {}, {} के {} से {} ({}, ओर्ब {:.1}°): {}",
                person(from_ref.side, locale),
                from,
                person(to_ref.side, locale),
                to,
                name,
                motion,
                orb,
                phrase
            )
        }
    }
}

/// Human-readable reading of one house placement.
pub fn describe_overlay(overlay: &HouseOverlay, locale: Locale) -> String {
    let planet = planet_name(overlay.planet, locale);
    match locale {
        Locale::English => format!(
            "{}'s {} falls in {}'s {} house ({})",
            person(overlay.source, locale),
            planet,
            person(overlay.source.other(), locale),
            ordinal(overlay.house),
            life_area(overlay.house, locale)
        ),
        Locale::Hindi => format!(
            "{} का {} {} के {}वें भाव ({}) में है",
            person(overlay.source, locale),
            planet,
            person(overlay.source.other(), locale),
            overlay.house,
            life_area(overlay.house, locale)
        ),
    }
}
