use yew::html::Scope;
use yew::prelude::*;

use common::catalog::initials;
use common::constants::PAGE_SIZE_OPTIONS;
use common::model::product::Product;
use common::validation::format_date;

use crate::components::products::menu::ProductMenuComponent;
use crate::helpers::{input_value, select_value};

use super::messages::Msg;
use super::state::ProductListComponent;

pub fn view(component: &ProductListComponent, ctx: &Context<ProductListComponent>) -> Html {
    let link = ctx.link();
    html! {
        <section class="product-list">
            { build_toolbar(component, link) }
            <div class="card">
                { build_table(component, link) }
                { build_footer(component, link) }
            </div>
        </section>
    }
}

fn build_toolbar(component: &ProductListComponent, link: &Scope<ProductListComponent>) -> Html {
    html! {
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search..."
                value={component.catalog.search_query().to_string()}
                oninput={link.callback(|e: InputEvent| Msg::Search(input_value(&e)))}
            />
            <button class="btn btn-primary" onclick={link.callback(|_| Msg::Add)}>
                {"Agregar"}
            </button>
        </div>
    }
}

fn build_table(component: &ProductListComponent, link: &Scope<ProductListComponent>) -> Html {
    let rows = component
        .catalog
        .visible_products()
        .iter()
        .map(|product| build_row(product, link))
        .collect::<Html>();

    html! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>{"Logo"}</th>
                    <th>{"Nombre del producto"}</th>
                    <th>{"Descripción"}</th>
                    <th>{"Fecha de liberación"}</th>
                    <th>{"Fecha de reestructuración"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                if component.loading {
                    <tr><td colspan="6" class="table-status">{"Cargando..."}</td></tr>
                } else {
                    { rows }
                }
            </tbody>
        </table>
    }
}

fn build_row(product: &Product, link: &Scope<ProductListComponent>) -> Html {
    let on_edit = {
        let product = product.clone();
        link.callback(move |_| Msg::Edit(product.clone()))
    };
    let on_delete = {
        let product = product.clone();
        link.callback(move |_| Msg::Delete(product.clone()))
    };

    html! {
        <tr key={product.id.clone()}>
            <td>
                <span class="avatar" title={product.logo.clone()}>{ initials(&product.name) }</span>
            </td>
            <td>{ product.name.clone() }</td>
            <td>{ product.description.clone() }</td>
            <td>{ format_date(product.date_release) }</td>
            <td>{ format_date(product.date_revision) }</td>
            <td>
                <ProductMenuComponent {on_edit} {on_delete} />
            </td>
        </tr>
    }
}

fn build_footer(component: &ProductListComponent, link: &Scope<ProductListComponent>) -> Html {
    let page_size = component.catalog.page_size();
    html! {
        <div class="list-footer">
            <span>{ format!("{} Resultados", component.catalog.total()) }</span>
            <select onchange={link.callback(|e: Event| Msg::PageSize(select_value(&e)))}>
                { for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == page_size}>{ size }</option>
                }) }
            </select>
        </div>
    }
}
