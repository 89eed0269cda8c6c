//! Wire paths, user-facing texts and the response literals agreed with the
//! products API. The literals are matched byte for byte, so they must not be
//! reworded without changing the server in the same release.

/// Base path of the products API.
pub const PRODUCTS_PATH: &str = "/bp/products";
/// Controller answering whether an id is already taken.
pub const VERIFICATION_PATH: &str = "/verification";

/// Page sizes offered by the list view. The first one is the default.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Lifetime of a toast before it clears itself.
pub const MESSAGE_LIFETIME_MS: u32 = 3000;

/// Texts shown to the user.
pub mod messages {
    pub const ERROR_SERVICE: &str =
        "Ha ocurrido un error al consumir el servicio, comuníquese con el equipo administrador.";
    pub const NO_DATA: &str = "No existen datos para mostrar.";
    pub const SAVE: &str = "Producto agregado con éxito";
    pub const UPDATE: &str = "Producto modificado con éxito";
    pub const ERROR_SAVE: &str = "No se pudo agregar el producto.";
    pub const ERROR_UPDATE: &str = "No se pudo modificar el producto.";
    pub const ID_EXIST: &str = "El ID ingresado ya existe, ingrese uno diferente.";
}

/// `message` values the server returns on success.
pub mod responses {
    pub const LIST_CORRECT: &str = "Success";
    pub const SAVE_CORRECT: &str = "Product added successfully";
    pub const UPDATE_CORRECT: &str = "Product updated successfully";
    pub const DELETE_CORRECT: &str = "Product removed successfully";
    pub const NOT_FOUND: &str = "Not product found with that identifier";
    pub const DUPLICATE_ID: &str = "Duplicate identifier found in the database";
    pub const INVALID_BODY: &str = "Invalid body, does not match the expected structure";
}
