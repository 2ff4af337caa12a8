//! Society summary card.

use crate::route::Route;
use crate::types::{Role, Society, SocietyId};

/// Maximum number of description characters shown on a card.
pub const EXCERPT_CHARS: usize = 120;

/// Display state for one society summary.
///
/// The join button is a local stub: pressing it flips `join_requested`
/// and nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocietyCard {
    pub id: SocietyId,
    pub name: String,
    pub category: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub member_label: String,
    pub role: Role,
    pub join_requested: bool,
}

impl SocietyCard {
    #[must_use]
    pub fn new(society: &Society) -> Self {
        Self {
            id: society.id,
            name: society.name.clone(),
            category: society.category.clone(),
            excerpt: excerpt(&society.description, EXCERPT_CHARS),
            image_url: society.image_url.clone(),
            member_label: member_label(society.member_count),
            role: society.role,
            join_requested: false,
        }
    }

    /// Where clicking the card navigates.
    #[must_use]
    pub const fn route(&self) -> Route {
        Route::Society(self.id)
    }

    /// Press the join button. Returns `true` the first time.
    pub const fn join(&mut self) -> bool {
        let changed = !self.join_requested;
        self.join_requested = true;
        changed
    }
}

/// "1 member" / "N members".
#[must_use]
pub fn member_label(count: u32) -> String {
    if count == 1 {
        "1 member".to_string()
    } else {
        format!("{count} members")
    }
}

/// Truncate `text` to at most `max_chars` characters, appending an ellipsis
/// when something was cut.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text.get(..cut).unwrap_or(text).trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::filter::fixtures::society;

    #[test]
    fn test_card_route_and_label() {
        let mut s = society(5, Role::Member);
        s.member_count = 1;
        let card = SocietyCard::new(&s);
        assert_eq!(card.route().path(), "/societies/5");
        assert_eq!(card.member_label, "1 member");
        assert_eq!(member_label(0), "0 members");
    }

    #[test]
    fn test_join_is_local_and_idempotent() {
        let mut card = SocietyCard::new(&society(1, Role::Member));
        assert!(card.join());
        assert!(!card.join());
        assert!(card.join_requested);
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("  short  ", 10), "short");
        assert_eq!(excerpt("abcdef", 3), "abc…");
        assert_eq!(excerpt("héllo wörld", 5), "héllo…");
    }
}
