use yew::html::Scope;
use yew::prelude::*;

use common::form::{ProductField, SubmissionState};
use common::validation::{format_date, FieldErrors};

use crate::helpers::input_value;

use super::messages::Msg;
use super::state::ProductFormComponent;

pub fn view(component: &ProductFormComponent, ctx: &Context<ProductFormComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let title = if form.is_edit() { "Editar producto" } else { "Formulario de Registro" };
    let busy = form.state().in_flight();

    html! {
        <section class="product-form card">
            <div class="form-header">
                <button class="icon-btn" title="Volver" onclick={link.callback(|_| Msg::Back)}>
                    <i class="material-icons">{"arrow_back"}</i>
                </button>
                <h2>{ title }</h2>
            </div>
            <form
                novalidate={true}
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div class="form-grid">
                    { text_field(component, link, ProductField::Id, "ID", "text") }
                    { text_field(component, link, ProductField::Name, "Nombre", "text") }
                    { text_field(component, link, ProductField::Description, "Descripción", "text") }
                    { text_field(component, link, ProductField::Logo, "Logo", "text") }
                    { text_field(component, link, ProductField::DateRelease, "Fecha Liberación", "date") }
                    <div class="form-field">
                        <label for="date_revision">{"Fecha Revisión"}</label>
                        <input id="date_revision" type="date" disabled={true} value={form.date_revision().to_string()} />
                    </div>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" disabled={busy} onclick={link.callback(|_| Msg::Reset)}>
                        {"Reiniciar"}
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        { submit_label(form.state()) }
                    </button>
                </div>
            </form>
        </section>
    }
}

fn text_field(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
    field: ProductField,
    label: &'static str,
    input_type: &'static str,
) -> Html {
    let form = &component.form;
    let errors = form.field_errors(field, component.min_date);
    let id = field_name(field);
    let read_only = field == ProductField::Id && form.is_edit();
    let min = (field == ProductField::DateRelease).then(|| format_date(component.min_date));

    html! {
        <div class={classes!("form-field", errors.show.then_some("invalid"))}>
            <label for={id}>{ label }</label>
            <input
                id={id}
                type={input_type}
                min={min}
                disabled={read_only}
                value={form.value(field).to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::Input(field, input_value(&e)))}
                onblur={link.callback(move |_| Msg::Blur(field))}
            />
            if errors.show {
                <small class="field-error">{ error_text(field, &errors) }</small>
            }
        </div>
    }
}

fn field_name(field: ProductField) -> &'static str {
    match field {
        ProductField::Id => "id",
        ProductField::Name => "name",
        ProductField::Description => "description",
        ProductField::Logo => "logo",
        ProductField::DateRelease => "date_release",
    }
}

fn error_text(field: ProductField, errors: &FieldErrors) -> String {
    let rules = field.rules();
    if errors.required {
        "Este campo es requerido!".to_string()
    } else if errors.min_length || errors.max_length {
        format!(
            "Debe tener entre {} y {} caracteres.",
            rules.min_length.unwrap_or_default(),
            rules.max_length.unwrap_or_default()
        )
    } else if errors.min_date {
        "La fecha debe ser igual o mayor a la fecha actual.".to_string()
    } else {
        String::new()
    }
}

fn submit_label(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::CheckingUniqueness => "Verificando...",
        SubmissionState::Validating | SubmissionState::Submitting => "Enviando...",
        _ => "Enviar",
    }
}
