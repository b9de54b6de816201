//! In-memory demo records: two fixed account lists and an append-only
//! message log for the stored-XSS demo.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: u32,
    pub name: &'static str,
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub author: String,
}

#[derive(Debug, Default)]
struct MessageLog {
    next_id: u64,
    entries: Vec<Message>,
}

/// Read/append-only repository behind a narrow interface, so a real store
/// could replace it without touching the handlers.
#[derive(Debug)]
pub struct Directory {
    admin: Vec<Account>,
    user: Vec<Account>,
    messages: Mutex<MessageLog>,
}

impl Directory {
    #[must_use]
    pub fn demo() -> Self {
        Self {
            admin: vec![Account {
                id: 1,
                name: "Admin Account",
                balance: 10_000,
            }],
            user: vec![
                Account {
                    id: 2,
                    name: "Alice",
                    balance: 50,
                },
                Account {
                    id: 3,
                    name: "Bob",
                    balance: 30,
                },
            ],
            messages: Mutex::new(MessageLog {
                next_id: 1,
                entries: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn accounts(&self, kind: AccountKind) -> &[Account] {
        match kind {
            AccountKind::User => &self.user,
            AccountKind::Admin => &self.admin,
        }
    }

    /// Append a message verbatim and return its id.
    pub fn append_message(&self, text: String, author: String) -> u64 {
        let mut log = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let id = log.next_id;
        log.next_id += 1;
        log.entries.push(Message { id, text, author });
        id
    }

    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        let log = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        log.entries.clone()
    }
}
