//! Frontend Models
//!
//! Data structures matching the catalog API payloads.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Catalog categories accepted by the backend
pub const SWEET_CATEGORIES: &[&str] = &[
    "Chocolate",
    "Candy",
    "Cake",
    "Pastry",
    "Nut-based",
    "Milk-based",
    "Dry Fruit",
    "Fruit-based",
    "Sugar-free",
];

/// Sweet (catalog item) as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Set by the backend on create only; restock/purchase never update it
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl Sweet {
    pub fn discounted_price(&self) -> f64 {
        discounted_price(self.price, self.discount)
    }

    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }

    /// Purchasable, judged by quantity alone
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Price after applying a percentage discount
pub fn discounted_price(price: f64, discount: f64) -> f64 {
    price - (price * discount / 100.0)
}

/// Two-decimal display form
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

// ========================
// Create Payload
// ========================

/// Body of `POST /addsweet`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
}

/// Raw add-form values, one string per input
#[derive(Debug, Clone, PartialEq)]
pub struct SweetDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub discount: String,
    pub description: String,
    pub image_url: String,
}

impl Default for SweetDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: SWEET_CATEGORIES[0].to_string(),
            price: "0".to_string(),
            quantity: "0".to_string(),
            discount: "0".to_string(),
            description: String::new(),
            image_url: String::new(),
        }
    }
}

impl SweetDraft {
    /// Validate the draft the way the backend will, producing the request body
    pub fn to_payload(&self) -> Result<NewSweet, ValidationError> {
        let name = self.name.trim();
        let name_len = name.chars().count();
        if name_len == 0 || name_len > 50 {
            return Err(ValidationError::NameLength);
        }

        if !SWEET_CATEGORIES.contains(&self.category.as_str()) {
            return Err(ValidationError::UnknownCategory(self.category.clone()));
        }

        let price: f64 = parse_field("price", &self.price)?;
        if !(price > 0.0) {
            return Err(ValidationError::NonPositivePrice);
        }

        let quantity: u32 = parse_field("quantity", &self.quantity)?;

        let discount: f64 = if self.discount.trim().is_empty() {
            0.0
        } else {
            parse_field("discount", &self.discount)?
        };
        if !(0.0..=100.0).contains(&discount) {
            return Err(ValidationError::DiscountRange);
        }

        let description = non_empty(&self.description);
        if description.as_ref().is_some_and(|d| d.chars().count() > 200) {
            return Err(ValidationError::DescriptionLength);
        }

        Ok(NewSweet {
            name: name.to_string(),
            category: self.category.clone(),
            price,
            quantity,
            discount,
            description,
            image_url: non_empty(&self.image_url),
            is_available: true,
        })
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field, value: raw.to_string() })
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a stock delta / purchase quantity; must be at least 1
pub fn parse_positive_quantity(raw: &str) -> Result<u32, ValidationError> {
    let quantity: u32 = parse_field("quantity", raw)?;
    if quantity == 0 {
        return Err(ValidationError::ZeroQuantity);
    }
    Ok(quantity)
}

// ========================
// Search Criteria
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    None,
    Name,
    Price,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::None, SortField::Name, SortField::Price];

    pub fn as_param(self) -> &'static str {
        match self {
            SortField::None => "",
            SortField::Name => "name",
            SortField::Price => "price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::None => "Relevance",
            SortField::Name => "Name",
            SortField::Price => "Price",
        }
    }

    pub fn from_param(raw: &str) -> Self {
        match raw {
            "name" => SortField::Name,
            "price" => SortField::Price,
            _ => SortField::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_param(raw: &str) -> Self {
        if raw == "desc" { SortOrder::Desc } else { SortOrder::Asc }
    }
}

/// Filter/sort criteria sent with every search
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    pub query: String,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub category: String,
}

impl SearchCriteria {
    /// Default criteria list the whole catalog
    pub fn is_default(&self) -> bool {
        *self == SearchCriteria::default()
    }

    pub fn query_params(&self) -> [(&'static str, &str); 4] {
        [
            ("query", self.query.as_str()),
            ("sort_by", self.sort_by.as_param()),
            ("order", self.order.as_param()),
            ("category", self.category.as_str()),
        ]
    }
}

// ========================
// Cart / Purchase
// ========================

/// Pending purchase line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    pub sweet_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRequest<'a> {
    pub items: &'a [CartEntry],
}

#[derive(Debug, Clone, Serialize)]
pub struct RestockRequest<'a> {
    pub quantity: u32,
    pub sweet_id: &'a str,
}

// ========================
// Responses
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub status: bool,
    #[serde(default)]
    pub sweets: Vec<Sweet>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    pub status: bool,
    #[serde(default)]
    pub sweet_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestockResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub updated_stock: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchaseResult {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub remaining_quantity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<PurchaseResult>,
}

impl PurchaseResponse {
    /// Entries the server refused inside an otherwise successful purchase
    pub fn rejected_entries(&self) -> usize {
        self.results.iter().filter(|r| !r.status).count()
    }
}

/// Common `{status, message}` shape of every response
pub trait Envelope {
    fn ok(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

macro_rules! impl_envelope {
    ($($ty:ty),* $(,)?) => {
        $(impl Envelope for $ty {
            fn ok(&self) -> bool {
                self.status
            }

            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        })*
    };
}

impl_envelope!(ListResponse, CreateResponse, RestockResponse, DeleteResponse, PurchaseResponse);
