//! Minimal inline HTML rendering. Deliberately thin: the interesting logic
//! lives in the session and access-control modules, not here.

use crate::brittlebank::{
    auth::{Identity, Role},
    store::{Account, Message},
    toggles::Toggles,
};

/// HTML-escape the five significant characters.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/user/accounts\">User accounts</a> | \
         <a href=\"/admin/accounts\">Admin accounts</a> | <a href=\"/messages\">Messages</a> | \
         <a href=\"/login\">Login</a> | <a href=\"/logout\">Logout</a></nav>\n\
         {body}\n</body>\n</html>\n"
    )
}

fn whoami(user: &Identity) -> String {
    format!(
        "<p class=\"whoami\">Signed in as: {} (role: {})</p>",
        escape(user.display_name()),
        match user.role {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Admin => "admin",
        }
    )
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

#[must_use]
pub fn index(user: &Identity, toggles: &Toggles) -> String {
    let body = format!(
        "<h1>Brittlebank</h1>\n{}\n\
         <form method=\"post\" action=\"/toggle\">\n\
         <label><input type=\"checkbox\" name=\"xss\" value=\"on\"{}> Cross-site scripting demo</label><br>\n\
         <label><input type=\"checkbox\" name=\"bac\" value=\"on\"{}> Broken access control demo</label><br>\n\
         <button type=\"submit\">Save toggles</button>\n\
         </form>",
        whoami(user),
        checked(toggles.xss),
        checked(toggles.bac),
    );
    page("Brittlebank", &body)
}

#[must_use]
pub fn login(user: &Identity, error: Option<&str>) -> String {
    let error_html = error.map_or(String::new(), |message| {
        format!("<p class=\"error\">{}</p>\n", escape(message))
    });
    let body = format!(
        "<h1>Login</h1>\n{}\n{error_html}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <button type=\"submit\">Login</button>\n\
         </form>",
        whoami(user),
    );
    page("Login", &body)
}

#[must_use]
pub fn accounts(user: &Identity, accounts: &[Account], which: &str) -> String {
    let rows: String = accounts
        .iter()
        .map(|account| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                account.id,
                escape(account.name),
                account.balance
            )
        })
        .collect();
    let body = format!(
        "<h1>Accounts: {}</h1>\n{}\n\
         <table>\n<tr><th>Id</th><th>Name</th><th>Balance</th></tr>\n{rows}</table>",
        escape(which),
        whoami(user),
    );
    page("Accounts", &body)
}

/// Stored-XSS demo page. With the `xss` toggle on, message text and author
/// are interpolated raw; off, they are escaped.
#[must_use]
pub fn messages(user: &Identity, toggles: &Toggles, messages: &[Message]) -> String {
    let render = |text: &str| {
        if toggles.xss {
            text.to_string()
        } else {
            escape(text)
        }
    };

    let items: String = messages
        .iter()
        .map(|message| {
            format!(
                "<li id=\"message-{}\">{}: {}</li>\n",
                message.id,
                render(&message.author),
                render(&message.text)
            )
        })
        .collect();
    let body = format!(
        "<h1>Messages</h1>\n{}\n<ul>\n{items}</ul>\n\
         <form method=\"post\" action=\"/messages\">\n\
         <label>Message <input name=\"message\"></label>\n\
         <button type=\"submit\">Post</button>\n\
         </form>",
        whoami(user),
    );
    page("Messages", &body)
}

#[must_use]
pub fn forbidden() -> String {
    "<h2>403 Forbidden - You do not have access to this resource</h2>\n\
     <p><a href=\"/\">Back</a></p>\n"
        .to_string()
}
