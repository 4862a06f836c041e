use serde::Serialize;

/// Catalog product as stored by the repository.
///
/// `id` is assigned by the repository; a value of `0` means the record was
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub stock: i64,
    pub price: i64,
}

/// Validated input for creating a product. Carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub stock: i64,
    pub price: i64,
}

/// Validated subset of mutable fields sent with an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stock: Option<i64>,
    pub price: Option<i64>,
}

/// Update input with the addressed product id merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductParams {
    pub id: i64,
    pub changes: ProductChanges,
}

impl Product {
    /// Builds a product from freshly created data and the id the store assigned.
    pub fn from_params(id: i64, params: CreateProductParams) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            stock: params.stock,
            price: params.price,
        }
    }

    /// Returns `true` once a repository has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Overwrites every field present in `changes`, keeping the rest.
    pub fn apply(&mut self, changes: &ProductChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
    }
}
