use common::catalog::ProductCatalog;

pub struct ProductListComponent {
    /// Loaded products plus the filtered and visible views over them.
    pub catalog: ProductCatalog,

    /// A list request is in flight.
    pub loading: bool,

    /// Guard so the first-render load runs once.
    pub loaded: bool,
}

impl ProductListComponent {
    pub fn new() -> Self {
        Self {
            catalog: ProductCatalog::new(),
            loading: false,
            loaded: false,
        }
    }
}
