//! Catalog screens: the searchable list, the create/edit form and the row menu.

pub mod form;
pub mod list;
pub mod menu;
