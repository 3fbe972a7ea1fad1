//! Localized text used by exports and API messages.

use std::str::FromStr;
use thiserror::Error;

/// Language for user-facing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

/// Returned when parsing an unsupported locale name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Fixed strings for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    /// Column headers: id, name, email, phone, company, created at
    pub columns: [&'static str; 6],
    pub generated_at: &'static str,
    pub empty: &'static str,
    pub footer: &'static str,
    pub client_added: &'static str,
    pub client_deleted: &'static str,
}

static EN: Labels = Labels {
    title: "Client list",
    columns: ["ID", "Name", "Email", "Phone", "Company", "CreatedAt"],
    generated_at: "Generated at",
    empty: "No clients to display.",
    footer: "Clientbook export",
    client_added: "Client added",
    client_deleted: "Client deleted",
};

static RU: Labels = Labels {
    title: "Список клиентов",
    columns: ["ID", "Имя", "Email", "Телефон", "Компания", "Дата создания"],
    generated_at: "Сформировано",
    empty: "Нет клиентов для отображения.",
    footer: "Выгрузка Clientbook",
    client_added: "Клиент добавлен",
    client_deleted: "Клиент удален",
};
