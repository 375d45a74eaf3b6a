//! Text rendering of a `ListingView`.
//!
//! The host calls `render` after every operation and prints the result.
//! Rendering reads the view and never mutates it.

use std::fmt::{self, Write};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::form::Field;
use crate::listing::ListingView;
use crate::types::User;

const AVATAR_BASE: &str = "https://api.dicebear.com/9.x/personas/svg";
const AVATAR_SIZE: u32 = 64;

/// Generated avatar for `username`. The username is the seed, so the same
/// user always gets the same picture.
pub fn avatar_url(username: &str) -> String {
    let seed = utf8_percent_encode(username, NON_ALPHANUMERIC);
    format!("{AVATAR_BASE}?seed={seed}&size={AVATAR_SIZE}")
}

pub fn render(view: &ListingView) -> String {
    let mut out = String::new();
    write_view(&mut out, view).expect("writing to a String never fails");
    out
}

fn write_view(out: &mut impl Write, view: &ListingView) -> fmt::Result {
    if view.is_loading() {
        return writeln!(out, "Loading...");
    }

    if view.users().is_empty() {
        if view.load_failed() {
            writeln!(out, "Could not load users.")?;
        } else {
            writeln!(out, "No users to show.")?;
        }
    }

    for user in view.users() {
        write_card(out, user)?;
    }

    if let Some(user) = view.editing() {
        write_modal(out, view, user)?;
    }

    Ok(())
}

fn write_card(out: &mut impl Write, user: &User) -> fmt::Result {
    let heart = if user.liked { "[♥ liked]" } else { "[♡ like]" };
    writeln!(out, "+-- #{} ------------------------------", user.id)?;
    writeln!(out, "| Avatar:   {}", avatar_url(&user.username))?;
    writeln!(out, "| Username: {}", user.username)?;
    writeln!(out, "| Name:     {}", user.name)?;
    writeln!(out, "| Email:    {}", user.email)?;
    writeln!(out, "| Phone:    {}", user.phone)?;
    writeln!(out, "| Website:  {}", user.website)?;
    writeln!(out, "| {heart} [edit] [delete]")?;
    writeln!(out, "+------------------------------------")
}

fn write_modal(out: &mut impl Write, view: &ListingView, user: &User) -> fmt::Result {
    writeln!(out, "== Edit User (#{}) ==", user.id)?;
    for field in Field::ALL {
        writeln!(out, "{}: {}", field.label(), view.form().get(field))?;
        if let Some(message) = view.form().error(field) {
            writeln!(out, "  ! {message}")?;
        }
    }
    writeln!(out, "[save] [cancel]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, Company};

    fn bob() -> User {
        User {
            id: 1,
            name: "Bob".to_string(),
            username: "bob".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
            website: "bob.dev".to_string(),
            address: Address {
                street: "Main".to_string(),
                suite: "1".to_string(),
                city: "Town".to_string(),
                zipcode: "00001".to_string(),
            },
            company: Company {
                name: "Bob Co".to_string(),
                catch_phrase: "We build".to_string(),
            },
            liked: false,
        }
    }

    #[test]
    fn avatar_url_encodes_seed() {
        assert_eq!(
            avatar_url("Leopoldo_Corkery"),
            "https://api.dicebear.com/9.x/personas/svg?seed=Leopoldo%5FCorkery&size=64"
        );
        assert_eq!(
            avatar_url("bob"),
            "https://api.dicebear.com/9.x/personas/svg?seed=bob&size=64"
        );
    }

    #[test]
    fn fresh_view_renders_loading() {
        assert_eq!(render(&ListingView::new()), "Loading...\n");
    }

    #[test]
    fn loading_hides_everything_else() {
        let mut view = ListingView::new();
        view.start_loading();
        assert_eq!(render(&view), "Loading...\n");
    }

    #[test]
    fn card_shows_visible_fields() {
        let mut view = ListingView::new();
        view.finish_loading(Some(vec![bob()]));
        let text = render(&view);
        assert!(text.contains("Username: bob"));
        assert!(text.contains("Name:     Bob"));
        assert!(text.contains("Email:    a@b.com"));
        assert!(text.contains("Phone:    555"));
        assert!(text.contains("Website:  bob.dev"));
        assert!(text.contains("seed=bob"));
        assert!(text.contains("[♡ like]"));
    }

    #[test]
    fn liked_card_shows_filled_heart() {
        let mut view = ListingView::new();
        view.finish_loading(Some(vec![bob()]));
        view.toggle_like(1);
        assert!(render(&view).contains("[♥ liked]"));
    }

    #[test]
    fn empty_states_differ_on_failure() {
        let mut view = ListingView::new();
        view.finish_loading(Some(Vec::new()));
        assert_eq!(render(&view), "No users to show.\n");
        view.finish_loading(None);
        assert_eq!(render(&view), "Could not load users.\n");
    }

    #[test]
    fn modal_shows_inline_messages() {
        let mut view = ListingView::new();
        view.finish_loading(Some(vec![bob()]));
        view.begin_edit(1);
        view.form_mut().set(Field::Name, "");
        let _ = view.submit_edit();
        let text = render(&view);
        assert!(text.contains("== Edit User (#1) =="));
        assert!(text.contains("Name: \n  ! Please enter name"));
        assert!(!text.contains("Please enter email"));
    }
}
