use std::sync::Arc;

use catalog::ProjectCatalog;
use mail_relay::{MailRelay, RelayCredentials};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<ProjectCatalog>,
    pub(crate) relay: Arc<dyn MailRelay>,
    pub(crate) credentials: RelayCredentials,
}
