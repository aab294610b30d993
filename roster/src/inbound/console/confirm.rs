//! Confirmation dialog answered by one input line.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};

use crate::domain::ports::{ConfirmDialog, DeleteConfirmation};

/// [`DeleteConfirmation`] that prints the dialog and reads a `y`/`n` line.
///
/// Anything other than `y` or `yes` (case-insensitive), including end of
/// input or an I/O error, is a refusal.
pub struct LineConfirmation<'a, R, W> {
    lines: &'a mut Lines<R>,
    output: &'a mut W,
}

impl<'a, R, W> LineConfirmation<'a, R, W> {
    /// Borrow the console's input lines and output for one dialog.
    pub const fn new(lines: &'a mut Lines<R>, output: &'a mut W) -> Self {
        Self { lines, output }
    }
}

#[async_trait]
impl<R, W> DeleteConfirmation for LineConfirmation<'_, R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&mut self, dialog: &ConfirmDialog) -> bool {
        let prompt = format!(
            "{}\n{} [y] {} / [n] {}: ",
            dialog.title, dialog.message, dialog.confirm_text, dialog.cancel_text
        );
        if self.output.write_all(prompt.as_bytes()).await.is_err()
            || self.output.flush().await.is_err()
        {
            return false;
        }

        matches!(self.lines.next_line().await, Ok(Some(answer)) if is_affirmative(&answer))
    }
}

fn is_affirmative(answer: &str) -> bool {
    let trimmed = answer.trim();
    trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tokio::io::AsyncBufReadExt;

    #[rstest]
    #[case::short("y\n", true)]
    #[case::long_upper("YES\n", true)]
    #[case::padded("  y  \n", true)]
    #[case::no("n\n", false)]
    #[case::blank("\n", false)]
    #[case::eof("", false)]
    #[tokio::test]
    async fn interprets_answers(#[case] input: &str, #[case] expected: bool) {
        let mut lines = input.as_bytes().lines();
        let mut output = Vec::new();

        let answer = LineConfirmation::new(&mut lines, &mut output)
            .confirm(&ConfirmDialog::delete_user())
            .await;

        assert_eq!(answer, expected);
        let prompt = String::from_utf8(output).expect("utf8 prompt");
        assert_eq!(
            prompt,
            "Delete User\nAre you sure you want to delete this user? [y] Delete / [n] Cancel: "
        );
    }
}
