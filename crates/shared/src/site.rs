//! Static promotional content rendered by the landing page.

pub struct Company {
    pub name: &'static str,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub registered_office: &'static str,
    pub facility_address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub instagram_handle: &'static str,
    pub instagram_url: &'static str,
    pub whatsapp_url: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Milestone {
    pub year: u16,
    pub text: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Upcoming {
    pub venue: &'static str,
    pub sports: &'static [&'static str],
}

pub struct Founder {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub bio_heading: &'static str,
    pub bio: &'static str,
    pub key_persons: &'static [&'static str],
}

pub const COMPANY: Company = Company {
    name: "FIVERINGS SPORTS PVT LTD",
    brand: "5Rings",
    tagline: "Everyone is our customer",
    registered_office: "#7A, Sivasakthi Colony, Villivakkam, Chennai 600049",
    facility_address: "#90, 1st Main Road, Ambattur Industrial Estate, Chennai 600058",
    phone: "+91 91502 77760",
    email: "info@5rings.in",
    instagram_handle: "@5rings_Sports",
    instagram_url: "https://www.instagram.com/5rings_sports",
    whatsapp_url: "https://wa.me/919150277760",
};

pub const STATS: &[Stat] = &[
    Stat {
        value: "6+",
        label: "Sports",
    },
    Stat {
        value: "1000+",
        label: "Members",
    },
    Stat {
        value: "Since 2018",
        label: "Years",
    },
];

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: 2018,
        text: "Started journey in Sports industry",
    },
    Milestone {
        year: 2021,
        text: "Inaugurated \"5Rings\" as Multi Sports facility",
    },
    Milestone {
        year: 2024,
        text: "Stepped into \"Sports tech\"",
    },
    Milestone {
        year: 2025,
        text: "Stepped into \"Food tech\"",
    },
    Milestone {
        year: 2026,
        text: "New Facility in Ayanambakkam, Chennai",
    },
];

pub const VISION: &str =
    "Everyone is our customer. Sports - Venue | School | Club. Digital automation & promotions.";

pub const MISSION: &str =
    "Multi sports as family's one stop. Geographical supervening. System automation & monitoring.";

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Sports Infrastructure",
        description: "World-class facilities",
    },
    Feature {
        title: "Coaching & Training",
        description: "Expert guidance",
    },
    Feature {
        title: "Guest Play",
        description: "Flexible memberships",
    },
    Feature {
        title: "Corporate Events",
        description: "Team building",
    },
    Feature {
        title: "Refreshments",
        description: "Healthy options",
    },
    Feature {
        title: "Sports Items",
        description: "Quality gear",
    },
];

pub const UPCOMING: &[Upcoming] = &[
    Upcoming {
        venue: "Indoor",
        sports: &["Fencing", "Kalari Adimurai"],
    },
    Upcoming {
        venue: "Outdoor",
        sports: &["Cricket Nets", "Volleyball", "Kabadi", "Karate"],
    },
];

pub const PARTNERS: &[&str] = &[
    "FC-TAMILIONS",
    "HAMMERPRO KICKBOXING",
    "MAK TABLE TENNIS",
    "KING STAR CRICKET",
    "ROYAL KINGS ARCHERY",
    "SILAMBAM",
];

pub const FOUNDER: Founder = Founder {
    name: "Radhakrishnan N",
    title: "MD & Founder",
    email: "info@5rings.in",
    bio_heading: "Passion of Sports",
    bio: "Son of Weaver, Graduate in Commerce, Career in Chartered Accountant profession, \
          Articled assistant of CA Firm, Internal Auditor of Automobile MNC, Self Employed \
          Consultant and Accountant, Interest in Games, Passionate in Sports - stepped in \
          \"5Rings - Multi Sports Facility\"",
    key_persons: &[
        "Radhakrishnan N",
        "Ashokkumar H",
        "Suriyaraaj K",
        "Rishikumar",
    ],
};
