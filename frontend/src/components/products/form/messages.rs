use common::form::{ProductField, SubmissionOutcome, SubmissionState};

pub enum Msg {
    Input(ProductField, String),
    Blur(ProductField),
    Reset,
    Submit,
    Progress(SubmissionState),
    Finished(SubmissionOutcome),
    Back,
}
