//! Scripted console sessions driving the users page end to end.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use rstest::{fixture, rstest};
use user_roster::domain::ports::FixtureUserSource;
use user_roster::domain::{User, UserDatasource, UserId, UsersPage};
use user_roster::inbound::console::run_console;

fn user(id: u64, name: &str) -> User {
    let mut user = User::named(UserId::new(id), name, name.to_lowercase());
    user.address.street = "Main St".to_owned();
    user.address.city = "Springfield".to_owned();
    user.website = format!("{}.example", name.to_lowercase());
    user
}

#[fixture]
fn datasource() -> Arc<UserDatasource> {
    Arc::new(UserDatasource::new(Arc::new(FixtureUserSource::new(vec![
        user(1, "Alice"),
        user(2, "Bob"),
    ]))))
}

async fn run_script(datasource: &Arc<UserDatasource>, script: &str) -> String {
    let mut page = UsersPage::new(Arc::clone(datasource));
    let mut output = Vec::new();
    run_console(&mut page, script.as_bytes(), &mut output)
        .await
        .expect("console session");
    String::from_utf8(output).expect("utf8 output")
}

#[rstest]
#[tokio::test]
async fn session_prints_table_on_start(datasource: Arc<UserDatasource>) {
    let transcript = run_script(&datasource, "quit\n").await;

    assert!(transcript.starts_with("Loading users...\n"));
    assert!(transcript.contains("| Alice |"));
    assert!(transcript.contains("Total users: 2\n"));
}

#[rstest]
#[tokio::test]
async fn confirmed_delete_hides_user(datasource: Arc<UserDatasource>) {
    let transcript = run_script(&datasource, "delete 1\ny\nlist\n").await;

    assert!(transcript.contains("Are you sure you want to delete this user?"));
    assert!(transcript.contains("User 1 deleted.\n"));
    assert!(transcript.trim_end().ends_with("Total users: 1\n>"));
    assert!(datasource.is_deleted(UserId::new(1)));
    assert_eq!(datasource.snapshot().len(), 1);
}

#[rstest]
#[tokio::test]
async fn declined_delete_keeps_user(datasource: Arc<UserDatasource>) {
    let transcript = run_script(&datasource, "delete 2\nn\n").await;

    assert!(transcript.contains("Deletion cancelled.\n"));
    assert!(!datasource.is_deleted(UserId::new(2)));
    assert_eq!(datasource.snapshot().len(), 2);
}

#[rstest]
#[tokio::test]
async fn delete_of_hidden_user_is_refused(datasource: Arc<UserDatasource>) {
    let transcript = run_script(&datasource, "delete 42\n").await;

    assert!(transcript.contains("No visible user with id 42.\n"));
    assert!(datasource.deleted_ids().is_empty());
}

#[rstest]
#[tokio::test]
async fn show_prints_detail_view(datasource: Arc<UserDatasource>) {
    let transcript = run_script(&datasource, "show 2\n").await;

    assert!(transcript.contains("Bob (@bob)\n"));
    assert!(transcript.contains("  Website: http://bob.example\n"));
}

#[rstest]
#[tokio::test]
async fn reload_keeps_deleted_users_hidden(datasource: Arc<UserDatasource>) {
    let transcript = run_script(&datasource, "delete 2\nyes\nreload\n").await;

    assert!(transcript.trim_end().ends_with("Total users: 1\n>"));
    assert_eq!(datasource.snapshot().len(), 1);
}

#[rstest]
#[tokio::test]
async fn bad_commands_print_hints(datasource: Arc<UserDatasource>) {
    let transcript = run_script(&datasource, "dance\nshow\nhelp\n").await;

    assert!(transcript.contains("unknown command `dance`"));
    assert!(transcript.contains("`show` needs a user id"));
    assert!(transcript.contains("delete <id>"));
}
