//! Frequently asked questions bundled with the client.

use super::id::FaqId;

/// A single FAQ entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub id: FaqId,
    pub question: &'static str,
    pub answer: &'static str,
}

/// The FAQ list shown on the support page. Not fetched from the backend.
pub const BUNDLED_FAQS: &[Faq] = &[
    Faq {
        id: FaqId::new(1),
        question: "How do I join a society?",
        answer: "Open the society's page and press Join. Societies that require approval \
                 will list your request until an admin approves or rejects it.",
    },
    Faq {
        id: FaqId::new(2),
        question: "How do I leave a society?",
        answer: "Open the society's settings, go to the Danger Zone tab and choose \
                 Leave Society.",
    },
    Faq {
        id: FaqId::new(3),
        question: "Who can approve join requests?",
        answer: "Only society admins. Pending requests appear on the society's Join \
                 Requests page.",
    },
    Faq {
        id: FaqId::new(4),
        question: "Can I make my society private?",
        answer: "Yes. Admins can change visibility under Settings, Privacy. Private \
                 societies do not appear in search results.",
    },
    Faq {
        id: FaqId::new(5),
        question: "Who can create events?",
        answer: "By default moderators and admins. Admins can change this under \
                 Settings, Permissions.",
    },
    Faq {
        id: FaqId::new(6),
        question: "How do I contact support?",
        answer: "Use the contact form on this page. We reply by email, usually within \
                 two working days.",
    },
];
