use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Node};
use yew::prelude::*;

/// Per-row dropdown with the edit and delete actions.
#[derive(Properties, PartialEq)]
pub struct ProductMenuProps {
    pub on_edit: Callback<()>,
    pub on_delete: Callback<()>,
}

pub enum Msg {
    Toggle,
    Edit,
    Delete,
    /// A click landed somewhere in the document; `inside` tells whether it
    /// hit this menu.
    DocumentClick { inside: bool },
}

/// Open/closed state, kept apart from the DOM wiring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Closes the menu on a click outside it. Returns whether anything changed.
    pub fn document_click(&mut self, inside: bool) -> bool {
        if inside || !self.is_open {
            return false;
        }
        self.is_open = false;
        true
    }
}

/// `click` listener on the document, removed again when dropped.
struct DocumentClickListener {
    document: Document,
    closure: Closure<dyn FnMut(Event)>,
}

impl DocumentClickListener {
    fn register(root: NodeRef, callback: Callback<bool>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = root
                .get()
                .is_some_and(|menu| menu.contains(target.as_ref()));
            callback.emit(inside);
        });
        document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, closure })
    }
}

impl Drop for DocumentClickListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}

pub struct ProductMenuComponent {
    state: MenuState,
    root: NodeRef,
    listener: Option<DocumentClickListener>,
}

impl Component for ProductMenuComponent {
    type Message = Msg;
    type Properties = ProductMenuProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: MenuState::default(),
            root: NodeRef::default(),
            listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => self.state.toggle(),
            Msg::Edit => {
                self.state.close();
                ctx.props().on_edit.emit(());
            }
            Msg::Delete => {
                self.state.close();
                ctx.props().on_delete.emit(());
            }
            Msg::DocumentClick { inside } => return self.state.document_click(inside),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="product-menu" ref={self.root.clone()}>
                <button class="icon-btn" title="Opciones" onclick={link.callback(|_| Msg::Toggle)}>
                    <i class="material-icons">{"more_vert"}</i>
                </button>
                if self.state.is_open() {
                    <ul class="product-menu-options">
                        <li onclick={link.callback(|_| Msg::Edit)}>{"Editar"}</li>
                        <li onclick={link.callback(|_| Msg::Delete)}>{"Eliminar"}</li>
                    </ul>
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let callback = ctx.link().callback(|inside| Msg::DocumentClick { inside });
            self.listener = DocumentClickListener::register(self.root.clone(), callback);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.listener = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_outside_closes_an_open_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.document_click(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn click_inside_keeps_the_menu_open() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.document_click(true));
        assert!(menu.is_open());
    }

    #[test]
    fn click_outside_a_closed_menu_changes_nothing() {
        let mut menu = MenuState::default();
        assert!(!menu.document_click(false));
        assert!(!menu.is_open());
    }
}
