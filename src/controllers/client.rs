//! Client update form controller

use std::sync::Arc;

use validator::Validate;

use crate::error::AppResult;
use crate::models::Client;
use crate::navigation::Navigator;
use crate::services::EntityApi;

/// Form state bound to the client editor. No binding-critical constraints
/// beyond the identifier itself.
#[derive(Debug, Clone, Default, Validate)]
pub struct ClientForm {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

pub struct ClientUpdateController {
    clients: Arc<dyn EntityApi<Client>>,
    navigator: Arc<dyn Navigator>,
    pub is_saving: bool,
    pub edit_form: ClientForm,
}

impl ClientUpdateController {
    pub fn new(clients: Arc<dyn EntityApi<Client>>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            clients,
            navigator,
            is_saving: false,
            edit_form: ClientForm::default(),
        }
    }

    pub fn initialize(&mut self, client: &Client) {
        self.update_form(client);
    }

    pub async fn save(&mut self) -> AppResult<()> {
        self.edit_form.validate()?;
        self.is_saving = true;
        let client = self.create_from_form();
        let result = if client.id.is_some() {
            self.clients.update(&client).await
        } else {
            self.clients.create(&client).await
        };
        self.is_saving = false;
        match result {
            Ok(_) => {
                self.previous_state();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Client save failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn previous_state(&self) {
        self.navigator.back();
    }

    fn update_form(&mut self, client: &Client) {
        self.edit_form = ClientForm {
            id: client.id,
            first_name: client.first_name.clone(),
            last_name: client.last_name.clone(),
            email: client.email.clone(),
            address: client.address.clone(),
            phone: client.phone.clone(),
        };
    }

    fn create_from_form(&self) -> Client {
        Client {
            id: self.edit_form.id,
            first_name: self.edit_form.first_name.clone(),
            last_name: self.edit_form.last_name.clone(),
            email: self.edit_form.email.clone(),
            address: self.edit_form.address.clone(),
            phone: self.edit_form.phone.clone(),
        }
    }
}
