//! Static page copy for the informational sections.

use chrono::NaiveDate;

pub const APP_NAME: &str = "AI Translator";
pub const HERO_TITLE: &str = "Translate documents\nwith the power of AI";
pub const HERO_SUBTITLE: &str =
    "Instant document translation into 100+ languages while keeping the formatting";
pub const DROP_HINT: &str = "Drag a file here or click to choose";
pub const UPLOAD_LIMITS: &str = "PDF, DOCX, TXT up to 50MB";
pub const EXTRACTING_LABEL: &str = "Extracting text from the file...";
pub const FOOTER: &str = "© 2024 AI Translator. All rights reserved.";

pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

pub static FEATURES: [Card; 3] = [
    Card {
        title: "Instant",
        body: "Translation in seconds",
    },
    Card {
        title: "Secure",
        body: "Your data stays protected",
    },
    Card {
        title: "Accurate",
        body: "AI technology",
    },
];

pub const ABOUT: [&str; 2] = [
    "We are a team of artificial intelligence and machine learning experts building \
     advanced solutions for document translation.",
    "Our mission is to make language barriers invisible for businesses and individuals \
     around the world using modern AI technology.",
];

pub static SERVICES: [Card; 4] = [
    Card {
        title: "Document translation",
        body: "PDF, Word, Excel, PowerPoint",
    },
    Card {
        title: "Web content",
        body: "Websites and applications",
    },
    Card {
        title: "Technical documentation",
        body: "Manuals and specifications",
    },
    Card {
        title: "Email correspondence",
        body: "Business correspondence",
    },
];

pub const PORTFOLIO_PROJECTS: u32 = 6;
pub const PORTFOLIO_CAPTION: &str = "Documentation translation";

pub struct BlogPost {
    pub title: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub published: &'static str,
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "How AI is changing the translation industry",
        published: "2024-10-15",
    },
    BlogPost {
        title: "Top 5 mistakes when translating documents",
        published: "2024-10-10",
    },
    BlogPost {
        title: "The future of machine translation",
        published: "2024-10-05",
    },
];

impl BlogPost {
    pub fn date_label(&self) -> String {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d")
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.published.to_string())
    }
}

pub static FAQ: [Card; 4] = [
    Card {
        title: "Which document formats do you support?",
        body: "PDF, DOCX and TXT files can be uploaded directly. The maximum file size is 50MB.",
    },
    Card {
        title: "How long does a translation take?",
        body: "Usually anywhere from a few seconds to a couple of minutes, depending on \
               the size of the document.",
    },
    Card {
        title: "Is my data safe?",
        body: "Yes, all data is encrypted and deleted after processing. We follow GDPR \
               and other security standards.",
    },
    Card {
        title: "Which languages do you support?",
        body: "More than 100 languages, including English, Russian, Chinese, Spanish, \
               French, German and many others.",
    },
];

pub const CONTACT_HEADING: &str = "Our contacts";
pub static CONTACTS: [Card; 3] = [
    Card {
        title: "Email",
        body: "info@aitranslator.com",
    },
    Card {
        title: "Phone",
        body: "+7 (495) 123-45-67",
    },
    Card {
        title: "Address",
        body: "Moscow, Primernaya st. 123",
    },
];
