//! Business profile: the facts the page repeats in several places.
//!
//! Header, hero, contact block and footer all render phone numbers, emails
//! and the service list from here so they cannot drift apart.

use crate::inquiry::ServiceKind;

pub const BRAND_LEAD: &str = "T&H";
pub const BRAND_REST: &str = "General Contractor";
pub const LEGAL_NAME: &str = "T&H General Contractor LLC";
pub const HOME_TOWN: &str = "Humble, TX";
pub const POSTAL_LOCATION: &str = "Humble, TX 77338";
pub const YEARS_EXPERIENCE: &str = "20+";
pub const SERVICE_RADIUS_MILES: u32 = 50;

pub const SERVICE_AREA_TOWNS: [&str; 6] = [
    "Humble",
    "Houston",
    "Kingwood",
    "Atascocita",
    "Spring",
    "The Woodlands",
];

pub const SUBMIT_SUCCESS_NOTICE: &str = "Thank you! We'll contact you shortly.";
pub const SUBMIT_FAILURE_NOTICE: &str = "Something went wrong. Please call us directly.";

/// A phone line shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneLine {
    pub label: &'static str,
    pub display: &'static str,
}

impl PhoneLine {
    /// `tel:` deep link with formatting stripped.
    pub fn href(&self) -> String {
        let digits: String = self.display.chars().filter(char::is_ascii_digit).collect();
        format!("tel:{digits}")
    }
}

pub const MAIN_PHONE: PhoneLine = PhoneLine {
    label: "Main",
    display: "(832) 889-9903",
};

pub const OFFICE_PHONE: PhoneLine = PhoneLine {
    label: "Office",
    display: "(832) 447-4917",
};

pub const PHONES: [PhoneLine; 2] = [MAIN_PHONE, OFFICE_PHONE];

pub const PRIMARY_EMAIL: &str = "info@thgc-llc.com";
pub const EMAILS: [&str; 2] = [PRIMARY_EMAIL, "thgeneral17@gmail.com"];

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// In-page sections reachable from the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Services,
    About,
    Portfolio,
    Contact,
}

impl Anchor {
    /// Navigation order.
    pub const NAV: [Anchor; 4] = [
        Anchor::Services,
        Anchor::About,
        Anchor::Portfolio,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Services => "services",
            Anchor::About => "about",
            Anchor::Portfolio => "portfolio",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Services => "Services",
            Anchor::About => "About",
            Anchor::Portfolio => "Portfolio",
            Anchor::Contact => "Contact",
        }
    }

    /// Fragment link, for places that fall back to plain `<a href>`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.id())
    }
}

/// A service card in the services section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub kind: ServiceKind,
    pub description: &'static str,
    pub image: &'static str,
    pub highlights: [&'static str; 3],
}

impl ServiceOffering {
    pub fn title(&self) -> &'static str {
        self.kind.display_name()
    }
}

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        kind: ServiceKind::NewConstruction,
        description: "From ground up to move-in ready, we manage every phase of your construction project with expertise and attention to detail.",
        image: "https://images.unsplash.com/photo-1541888946425-d81bb19240f5",
        highlights: [
            "Residential & Commercial Buildings",
            "Custom Home Design & Build",
            "Complete Project Management",
        ],
    },
    ServiceOffering {
        kind: ServiceKind::Roofing,
        description: "Protect your investment with professional roofing services. We handle installations, repairs, and replacements with quality materials.",
        image: "https://images.unsplash.com/photo-1635424824849-1b09bdcc55b1",
        highlights: [
            "New Roof Installation",
            "Roof Repair & Maintenance",
            "Storm Damage Restoration",
        ],
    },
    ServiceOffering {
        kind: ServiceKind::Remodeling,
        description: "Transform your existing space into the home of your dreams. We bring fresh ideas and expert craftsmanship to every remodel.",
        image: "https://images.unsplash.com/photo-1517581177682-a085bb7ffb15",
        highlights: [
            "Kitchen & Bathroom Remodels",
            "Home Additions & Extensions",
            "Full Home Renovations",
        ],
    },
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?crop=entropy&cs=srgb&fm=jpg&q=85";

pub const PORTFOLIO: [&str; 9] = [
    "https://images.unsplash.com/photo-1694105050266-911023811297",
    "https://images.unsplash.com/photo-1630705684312-81b759243dde",
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9",
    "https://images.unsplash.com/photo-1523217582562-09d0def993a6",
    "https://images.unsplash.com/photo-1691425700585-c108acad6467",
    "https://images.unsplash.com/photo-1582268611958-ebfd161ef9cf",
    "https://images.pexels.com/photos/280229/pexels-photo-280229.jpeg",
    "https://images.unsplash.com/photo-1646592474227-52da98838a6f",
    "https://images.unsplash.com/photo-1646592491550-6ef7a11ecc58",
];

pub const WHY_CHOOSE_US: [&str; 4] = [
    "20+ Years of Experience",
    "Licensed & Insured",
    "100% Customer Satisfaction",
    "Financing Available",
];

/// Towns joined for the service-area blurb.
pub fn service_area_sentence() -> String {
    format!(
        "Serving {}, and surrounding communities in the Greater Houston area.",
        SERVICE_AREA_TOWNS.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_hrefs_strip_formatting() {
        assert_eq!(MAIN_PHONE.href(), "tel:8328899903");
        assert_eq!(OFFICE_PHONE.href(), "tel:8324474917");
    }

    #[test]
    fn mailto_links() {
        assert_eq!(mailto(PRIMARY_EMAIL), "mailto:info@thgc-llc.com");
        assert_eq!(mailto(EMAILS[1]), "mailto:thgeneral17@gmail.com");
    }

    #[test]
    fn anchors_match_section_ids() {
        let ids: Vec<_> = Anchor::NAV.iter().map(Anchor::id).collect();
        assert_eq!(ids, ["services", "about", "portfolio", "contact"]);
        assert_eq!(Anchor::Contact.fragment(), "#contact");
    }

    #[test]
    fn services_cover_form_options_except_other() {
        let kinds: Vec<_> = SERVICES.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [ServiceKind::NewConstruction, ServiceKind::Roofing, ServiceKind::Remodeling]
        );
        assert_eq!(SERVICES[1].title(), "Roofing Services");
    }

    #[test]
    fn service_area_lists_every_town() {
        let sentence = service_area_sentence();
        for town in SERVICE_AREA_TOWNS {
            assert!(sentence.contains(town), "missing {town}");
        }
    }
}
