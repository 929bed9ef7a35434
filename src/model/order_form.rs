use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the three contact fields on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Phone,
    Address,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Phone, FormField::Address];

    /// Input label as shown above the field.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Ваше имя",
            FormField::Phone => "Телефон",
            FormField::Address => "Адрес доставки",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Иван Иванов",
            FormField::Phone => "+7 (999) 123-45-67",
            FormField::Address => "ул. Ленина, д. 1, кв. 10",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Address => "address",
        };
        f.write_str(id)
    }
}

/// Contact and delivery details typed by the shopper.
///
/// Values are opaque text. The only rule is that every field is non-empty at
/// submission time; whitespace counts as content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl OrderForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
        }
    }

    /// Replaces the field's content.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
