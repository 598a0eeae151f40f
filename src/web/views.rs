//! Server-rendered HTML pages.
//!
//! Every page is wrapped in one shared layout. All interpolated values pass
//! through [`escape`].

use crate::domain::FieldError;
use crate::models::{Contact, ContactInput, UpdateContactInput};
use std::fmt::Write;

/// A row of the static sample listing on the home page.
pub struct Student {
    pub name: &'static str,
    pub email: &'static str,
}

pub const STUDENTS: &[Student] = &[
    Student {
        name: "Satria",
        email: "satria@example.com",
    },
    Student {
        name: "Aji",
        email: "aji@example.com",
    },
    Student {
        name: "Rama",
        email: "rama@example.com",
    },
];

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav class="navbar">
<a class="navbar-brand" href="/">Contact Book</a>
<a class="nav-link" href="/">Home</a>
<a class="nav-link" href="/about">About</a>
<a class="nav-link" href="/contact">Contact</a>
</nav>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body
    )
}

pub fn home_page(name: &str, students: &[Student]) -> String {
    let mut body = format!("<h1>Hello, {}!</h1>\n<ul class=\"students\">\n", escape(name));
    for student in students {
        let _ = writeln!(
            body,
            "<li>{} &lt;{}&gt;</li>",
            escape(student.name),
            escape(student.email)
        );
    }
    body.push_str("</ul>\n");
    layout("Home", &body)
}

pub fn about_page() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>A small address book for names, email addresses, and mobile numbers.</p>\n",
    )
}

pub fn contact_index_page(contacts: &[Contact], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Contact List</h1>\n");

    if let Some(message) = flash {
        let _ = writeln!(
            body,
            "<div class=\"alert alert-success\" role=\"alert\">{}</div>",
            escape(message)
        );
    }

    body.push_str("<a class=\"btn\" href=\"/contact/create\">Add Contact</a>\n");

    if contacts.is_empty() {
        body.push_str("<p class=\"empty\">No contact data yet.</p>\n");
        return layout("Contact", &body);
    }

    body.push_str(
        "<table class=\"table\">\n<thead><tr><th>#</th><th>Name</th><th>Email</th><th></th></tr></thead>\n<tbody>\n",
    );
    for (i, contact) in contacts.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/contact/{}\">Detail</a></td></tr>",
            i + 1,
            escape(&contact.name),
            escape(&contact.email),
            escape(contact.id.as_str())
        );
    }
    body.push_str("</tbody>\n</table>\n");

    layout("Contact", &body)
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div class=\"alert alert-danger\" role=\"alert\">\n<ul>\n");
    for error in errors {
        let _ = writeln!(
            out,
            "<li data-field=\"{}\">{}</li>",
            error.field,
            escape(&error.message)
        );
    }
    out.push_str("</ul>\n</div>\n");
    out
}

fn contact_fields(input: &ContactInput) -> String {
    format!(
        r#"<label for="name">Name</label>
<input type="text" id="name" name="name" required value="{name}">
<label for="email">Email</label>
<input type="email" id="email" name="email" required value="{email}">
<label for="phone">Phone</label>
<input type="text" id="phone" name="phone" required value="{phone}">
"#,
        name = escape(&input.name),
        email = escape(&input.email),
        phone = escape(&input.phone)
    )
}

pub fn create_contact_page(input: &ContactInput, errors: &[FieldError]) -> String {
    let body = format!(
        "<h1>Add Contact</h1>\n{errors}<form method=\"post\" action=\"/contact\">\n{fields}<button type=\"submit\">Add</button>\n</form>\n",
        errors = error_list(errors),
        fields = contact_fields(input)
    );
    layout("Contact | Create Data", &body)
}

pub fn edit_contact_page(input: &UpdateContactInput, errors: &[FieldError]) -> String {
    let body = format!(
        "<h1>Edit Contact</h1>\n{errors}<form method=\"post\" action=\"/contact?_method=PUT\">\n<input type=\"hidden\" name=\"_id\" value=\"{id}\">\n<input type=\"hidden\" name=\"oldEmail\" value=\"{old_email}\">\n{fields}<button type=\"submit\">Update</button>\n</form>\n",
        errors = error_list(errors),
        id = escape(&input.id),
        old_email = escape(&input.old_email),
        fields = contact_fields(&input.fields())
    );
    layout("Contact | Edit Data", &body)
}

pub fn contact_detail_page(contact: &Contact) -> String {
    let id = escape(contact.id.as_str());
    let body = format!(
        r#"<h1>Contact's Detail</h1>
<div class="card">
<h2>{name}</h2>
<p class="email">{email}</p>
<p class="phone">{phone}</p>
<a class="btn" href="/contact/{id}/edit">Edit</a>
<form method="post" action="/contact?_method=DELETE">
<input type="hidden" name="id" value="{id}">
<button type="submit" onclick="return confirm('Are you sure?');">Delete</button>
</form>
<a href="/contact">Back to contact list</a>
</div>
"#,
        name = escape(&contact.name),
        email = escape(&contact.email),
        phone = escape(&contact.phone),
        id = id
    );
    layout("Contact's Detail", &body)
}

pub fn not_found_page() -> String {
    layout("Not Found", "<h1>Page not found</h1>\n")
}

pub fn server_error_page() -> String {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>The contact store could not complete the request.</p>\n",
    )
}
