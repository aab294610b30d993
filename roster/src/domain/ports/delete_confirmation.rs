//! Driving-side port asking the person at the screen to confirm a deletion.

use async_trait::async_trait;

/// Text shown by a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    /// Dialog heading.
    pub title: String,
    /// Question asked.
    pub message: String,
    /// Label of the accepting action.
    pub confirm_text: String,
    /// Label of the dismissing action.
    pub cancel_text: String,
}

impl ConfirmDialog {
    /// Dialog used before soft-deleting a user.
    ///
    /// # Examples
    /// ```
    /// use user_roster::domain::ports::ConfirmDialog;
    ///
    /// let dialog = ConfirmDialog::delete_user();
    /// assert_eq!(dialog.confirm_text, "Delete");
    /// ```
    #[must_use]
    pub fn delete_user() -> Self {
        Self {
            title: "Delete User".to_owned(),
            message: "Are you sure you want to delete this user?".to_owned(),
            confirm_text: "Delete".to_owned(),
            cancel_text: "Cancel".to_owned(),
        }
    }
}

/// Port answering a [`ConfirmDialog`] with yes or no.
///
/// A dismissed or unanswerable dialog counts as "no".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeleteConfirmation: Send {
    /// Show `dialog` and wait for the answer.
    async fn confirm(&mut self, dialog: &ConfirmDialog) -> bool;
}
