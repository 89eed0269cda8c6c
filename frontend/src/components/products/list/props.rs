use yew::prelude::*;

use crate::navigation::Route;
use crate::services::Services;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductListProps {
    pub services: Services,
    /// Asks the root component to switch views (add or edit form).
    pub on_navigate: Callback<Route>,
}
