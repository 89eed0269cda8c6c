//! Product form state and the create/update submission flow.
//!
//! A submission moves through [`SubmissionState`]:
//!
//! ```text
//! Editing -> Validating -> CheckingUniqueness -> Submitting -> Succeeded | Failed
//!                 |          (create only)
//!                 +--> Editing   (invalid form, nothing is sent)
//! ```
//!
//! The synchronous half lives on [`ProductForm`] (`begin_submit` and
//! `finish_submit`); the network half is [`run_submission`], which owns no
//! form state so the UI can await it outside of its update loop.

use chrono::NaiveDate;

use crate::constants::{messages, responses};
use crate::error::ServiceError;
use crate::model::message::MessageType;
use crate::model::product::Product;
use crate::model::response::ApiResponse;
use crate::service::{Notifier, ProductApi};
use crate::validation::{
    DATE_RELEASE_RULES, DESCRIPTION_RULES, FieldErrors, FieldRules, ID_RULES, LOGO_RULES,
    NAME_RULES, Violation, add_one_year, one_year_after, parse_date, validate,
};

/// Editable inputs of the product form. The revision date is derived and has
/// no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Description,
        ProductField::Logo,
        ProductField::DateRelease,
    ];

    pub fn rules(&self) -> &'static FieldRules {
        match self {
            ProductField::Id => &ID_RULES,
            ProductField::Name => &NAME_RULES,
            ProductField::Description => &DESCRIPTION_RULES,
            ProductField::Logo => &LOGO_RULES,
            ProductField::DateRelease => &DATE_RELEASE_RULES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    /// Set once the user interacted with the field, or on a rejected submit.
    pub touched: bool,
}

impl FormField {
    fn filled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing an existing product. The id cannot change.
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Validating,
    CheckingUniqueness,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn in_flight(&self) -> bool {
        matches!(
            self,
            SubmissionState::Validating
                | SubmissionState::CheckingUniqueness
                | SubmissionState::Submitting
        )
    }
}

/// Everything the network half of a submission needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub product: Product,
    pub mode: FormMode,
}

/// How a submission attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    /// Create only: the id is taken, or could not be verified.
    IdExists,
    /// The server answered with an unexpected `message`.
    Rejected,
    /// Transport failure on the write request.
    ServiceError,
}

impl SubmissionOutcome {
    pub fn state(&self) -> SubmissionState {
        match self {
            SubmissionOutcome::Succeeded => SubmissionState::Succeeded,
            _ => SubmissionState::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    id: FormField,
    name: FormField,
    description: FormField,
    logo: FormField,
    date_release: FormField,
    date_revision: String,
    mode: FormMode,
    state: SubmissionState,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductForm {
    /// Empty form for a new product.
    pub fn new() -> Self {
        Self {
            id: FormField::default(),
            name: FormField::default(),
            description: FormField::default(),
            logo: FormField::default(),
            date_release: FormField::default(),
            date_revision: String::new(),
            mode: FormMode::Create,
            state: SubmissionState::Editing,
        }
    }

    /// Form prefilled with an existing product.
    pub fn for_edit(product: &Product) -> Self {
        let release = crate::validation::format_date(product.date_release);
        Self {
            id: FormField::filled(product.id.clone()),
            name: FormField::filled(product.name.clone()),
            description: FormField::filled(product.description.clone()),
            logo: FormField::filled(product.logo.clone()),
            date_revision: add_one_year(&release),
            date_release: FormField::filled(release),
            mode: FormMode::Edit {
                id: product.id.clone(),
            },
            state: SubmissionState::Editing,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Progress reported by [`run_submission`].
    pub fn set_state(&mut self, state: SubmissionState) {
        self.state = state;
    }

    pub fn field(&self, field: ProductField) -> &FormField {
        match field {
            ProductField::Id => &self.id,
            ProductField::Name => &self.name,
            ProductField::Description => &self.description,
            ProductField::Logo => &self.logo,
            ProductField::DateRelease => &self.date_release,
        }
    }

    fn field_mut(&mut self, field: ProductField) -> &mut FormField {
        match field {
            ProductField::Id => &mut self.id,
            ProductField::Name => &mut self.name,
            ProductField::Description => &mut self.description,
            ProductField::Logo => &mut self.logo,
            ProductField::DateRelease => &mut self.date_release,
        }
    }

    pub fn value(&self, field: ProductField) -> &str {
        &self.field(field).value
    }

    /// Derived revision date, `YYYY-MM-DD` or empty.
    pub fn date_revision(&self) -> &str {
        &self.date_revision
    }

    /// Stores user input. The id is read-only while editing. Changing the
    /// release date recomputes the revision date.
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        if field == ProductField::Id && self.is_edit() {
            return;
        }
        let value = value.into();
        if field == ProductField::DateRelease {
            self.date_revision = add_one_year(&value);
        }
        let slot = self.field_mut(field);
        slot.value = value;
        slot.touched = true;
        if !self.state.in_flight() {
            self.state = SubmissionState::Editing;
        }
    }

    pub fn touch(&mut self, field: ProductField) {
        self.field_mut(field).touched = true;
    }

    pub fn mark_all_as_touched(&mut self) {
        for field in ProductField::ALL {
            self.touch(field);
        }
    }

    pub fn violations(&self, field: ProductField, today: NaiveDate) -> Vec<Violation> {
        validate(self.value(field), field.rules(), today)
    }

    pub fn field_errors(&self, field: ProductField, today: NaiveDate) -> FieldErrors {
        FieldErrors::from_violations(&self.violations(field, today), self.field(field).touched)
    }

    pub fn is_valid(&self, today: NaiveDate) -> bool {
        ProductField::ALL
            .iter()
            .all(|field| self.violations(*field, today).is_empty())
    }

    /// Clears every editable value and the touched flags. The id of a product
    /// being edited is kept since it cannot be changed anyway.
    pub fn reset(&mut self) {
        for field in ProductField::ALL {
            if field == ProductField::Id && self.is_edit() {
                self.id.touched = false;
                continue;
            }
            *self.field_mut(field) = FormField::default();
        }
        self.date_revision.clear();
        if !self.state.in_flight() {
            self.state = SubmissionState::Editing;
        }
    }

    /// Validates the form and, when it passes, returns what must be sent.
    ///
    /// An invalid form marks every field as touched so its errors show up and
    /// goes back to editing. Returns `None` as well while a previous attempt
    /// is still in flight.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Option<SubmissionRequest> {
        if self.state.in_flight() {
            return None;
        }
        self.state = SubmissionState::Validating;

        if !self.is_valid(today) {
            self.mark_all_as_touched();
            self.state = SubmissionState::Editing;
            return None;
        }

        match self.to_product() {
            Some(product) => Some(SubmissionRequest {
                product,
                mode: self.mode.clone(),
            }),
            None => {
                self.state = SubmissionState::Editing;
                None
            }
        }
    }

    /// Records the result of [`run_submission`]. Success clears the form,
    /// failure keeps the values for correction.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) {
        if outcome == SubmissionOutcome::Succeeded {
            self.state = SubmissionState::Editing;
            self.reset();
        }
        self.state = outcome.state();
    }

    fn to_product(&self) -> Option<Product> {
        let date_release = parse_date(&self.date_release.value)?;
        let id = match &self.mode {
            FormMode::Create => self.id.value.clone(),
            FormMode::Edit { id } => id.clone(),
        };
        Some(Product {
            id,
            name: self.name.value.clone(),
            description: self.description.value.clone(),
            logo: self.logo.value.clone(),
            date_release,
            date_revision: one_year_after(date_release),
        })
    }
}

/// Sends a validated form to the API and reports the result to the user.
///
/// On create the id is verified first. A failed verification is reported as a
/// service error and then handled as if the id existed, so a create is never
/// attempted without a positive answer. `on_state` sees every transition.
pub async fn run_submission<A, N>(
    request: &SubmissionRequest,
    api: &A,
    notifier: &N,
    on_state: &dyn Fn(SubmissionState),
) -> SubmissionOutcome
where
    A: ProductApi + ?Sized,
    N: Notifier + ?Sized,
{
    let outcome = match &request.mode {
        FormMode::Create => create(&request.product, api, notifier, on_state).await,
        FormMode::Edit { id } => {
            on_state(SubmissionState::Submitting);
            write_outcome(
                api.update(id, &request.product).await,
                responses::UPDATE_CORRECT,
                messages::UPDATE,
                messages::ERROR_UPDATE,
                notifier,
            )
        }
    };
    on_state(outcome.state());
    outcome
}

async fn create<A, N>(
    product: &Product,
    api: &A,
    notifier: &N,
    on_state: &dyn Fn(SubmissionState),
) -> SubmissionOutcome
where
    A: ProductApi + ?Sized,
    N: Notifier + ?Sized,
{
    on_state(SubmissionState::CheckingUniqueness);
    let exists = match api.check_id_exists(&product.id).await {
        Ok(exists) => exists,
        Err(_) => {
            notifier.show_message(messages::ERROR_SERVICE, MessageType::Error);
            true
        }
    };
    if exists {
        notifier.show_message(messages::ID_EXIST, MessageType::Error);
        return SubmissionOutcome::IdExists;
    }

    on_state(SubmissionState::Submitting);
    write_outcome(
        api.create(product).await,
        responses::SAVE_CORRECT,
        messages::SAVE,
        messages::ERROR_SAVE,
        notifier,
    )
}

fn write_outcome<N>(
    result: Result<ApiResponse, ServiceError>,
    expected: &str,
    success_text: &str,
    failure_text: &str,
    notifier: &N,
) -> SubmissionOutcome
where
    N: Notifier + ?Sized,
{
    match result {
        Ok(response) if response.message == expected => {
            notifier.show_message(success_text, MessageType::Success);
            SubmissionOutcome::Succeeded
        }
        Ok(_) => {
            notifier.show_message(failure_text, MessageType::Error);
            SubmissionOutcome::Rejected
        }
        Err(_) => {
            notifier.show_message(messages::ERROR_SERVICE, MessageType::Error);
            SubmissionOutcome::ServiceError
        }
    }
}
