pub mod config;
pub mod fill;
pub mod schema;
pub mod validate;

use formgate_core::form::SubmitHandler;
use formgate_core::schema::SignupData;
use tracing::info;

/// Keeps the accepted record for printing once the form has reset.
#[derive(Debug, Default)]
pub struct Capture {
    pub submitted: Option<SignupData>,
}

impl SubmitHandler for Capture {
    fn on_valid_submit(&mut self, data: SignupData) {
        info!(record = ?data, "sign-up accepted");
        self.submitted = Some(data);
    }
}
