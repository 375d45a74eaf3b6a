//! The listing view: owner of the in-memory user collection.
//!
//! # Design
//! All state lives in `ListingView` and every mutation goes through
//! `&mut self`, so there is exactly one writer. The collection is replaced
//! once by `finish_loading` and afterwards only patched in place (like,
//! edit) or narrowed (delete). Nothing here talks to the network except
//! through the `Fetcher` handed to `load`, and nothing is ever written back.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::fetcher::Fetcher;
use crate::form::EditForm;
use crate::types::User;

/// Prompt shown before a record is removed.
pub const DELETE_PROMPT: &str = "Are you sure to delete this user?";

/// A yes/no question put to whoever drives the view.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug)]
pub struct ListingView {
    users: Vec<User>,
    loading: bool,
    load_failed: bool,
    editing: Option<User>,
    form: EditForm,
}

/// A fresh view is loading: nothing has been fetched yet.
impl Default for ListingView {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            load_failed: false,
            editing: None,
            form: EditForm::default(),
        }
    }
}

impl ListingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the last load settled without data.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// The record open in the edit modal, as it was when editing began.
    pub fn editing(&self) -> Option<&User> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &EditForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EditForm {
        &mut self.form
    }

    /// Fetch once and install the result.
    pub fn load(&mut self, fetcher: &impl Fetcher) {
        self.start_loading();
        let result = fetcher.fetch_users();
        self.finish_loading(result);
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the collection with a fetch result and clear `loading`.
    ///
    /// `None` leaves an empty collection. Records repeating an earlier id
    /// are dropped so ids stay unique.
    pub fn finish_loading(&mut self, result: Option<Vec<User>>) {
        self.load_failed = result.is_none();
        let fetched = result.unwrap_or_default();

        let mut seen = HashSet::with_capacity(fetched.len());
        let mut users = Vec::with_capacity(fetched.len());
        for mut user in fetched {
            if !seen.insert(user.id) {
                warn!(id = user.id, "dropping user with duplicate id");
                continue;
            }
            user.liked = false;
            users.push(user);
        }

        debug!(count = users.len(), failed = self.load_failed, "load settled");
        self.users = users;
        self.loading = false;
    }

    /// Flip `liked` on the record with `id`. Returns false if there is none.
    pub fn toggle_like(&mut self, id: u64) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.liked = !user.liked;
                debug!(id, liked = user.liked, "toggled like");
                true
            }
            None => false,
        }
    }

    /// Open the edit modal for `id` and seed the form from it.
    pub fn begin_edit(&mut self, id: u64) -> bool {
        let Some(user) = self.users.iter().find(|u| u.id == id) else {
            return false;
        };
        self.form.seed(user);
        self.editing = Some(user.clone());
        debug!(id, "editing user");
        true
    }

    /// Validate the form and merge it into the record being edited.
    ///
    /// On error the modal stays open and the form keeps its inline
    /// messages. With no modal open this does nothing.
    pub fn submit_edit(&mut self) -> Result<(), ValidationError> {
        let Some(editing_id) = self.editing.as_ref().map(|u| u.id) else {
            return Ok(());
        };

        let values = match self.form.validate() {
            Ok(values) => values,
            Err(err) => {
                warn!(id = editing_id, error = %err, "validation failed");
                return Err(err);
            }
        };

        if let Some(user) = self.users.iter_mut().find(|u| u.id == editing_id) {
            user.apply(values);
        }
        self.editing = None;
        self.form.reset();
        debug!(id = editing_id, "saved edit");
        Ok(())
    }

    /// Close the modal without touching the collection.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Remove the record with `id` if `confirm` says yes.
    ///
    /// Returns true only when a record was actually removed.
    pub fn delete(&mut self, id: u64, confirm: &mut impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(id, "delete declined");
            return false;
        }
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() != before;
        debug!(id, removed, "delete confirmed");
        removed
    }
}
