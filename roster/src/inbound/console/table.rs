//! Plain-text rendering of the users table and the detail view.

use crate::domain::{User, UserDetails};

const HEADERS: [&str; 6] = ["ID", "Name", "Address", "Phone", "Website", "Company"];

/// Render `users` as an aligned text table followed by a total line.
///
/// # Examples
/// ```
/// use user_roster::domain::{User, UserId};
/// use user_roster::inbound::console::render_table;
///
/// let table = render_table(&[User::named(UserId::new(1), "Alice", "alice")]);
/// assert!(table.starts_with("ID | Name"));
/// assert!(table.ends_with("Total users: 1\n"));
/// ```
#[must_use]
pub fn render_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users to display.\n".to_owned();
    }

    let rows: Vec<[String; 6]> = users.iter().map(row_cells).collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!("Total users: {}\n", users.len()));
    out
}

/// Render the detail view of one user.
#[must_use]
pub fn render_details(details: &UserDetails<'_>) -> String {
    let user = details.user();
    let [address_first, address_second] = details.address_lines();
    let [company_name, catch_phrase, tagline] = details.company_lines();

    [
        format!("{} (@{})", user.name, user.username),
        format!("  Email:   {}", user.email),
        format!("  Phone:   {}", user.phone),
        format!("  Website: {}", details.website_url()),
        format!("  Address: {address_first}"),
        format!("           {address_second}"),
        format!("  Map:     {}", details.map_url()),
        format!("  Company: {company_name}"),
        format!("           {catch_phrase}"),
        format!("           {tagline}"),
    ]
    .iter()
    .fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}

fn row_cells(user: &User) -> [String; 6] {
    [
        user.id.to_string(),
        user.name.clone(),
        format!("{}, {}", user.address.street, user.address.city),
        user.phone.clone(),
        user.website.clone(),
        user.company.name.clone(),
    ]
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
