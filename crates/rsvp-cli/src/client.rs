//! # RSVP Client
//!
//! HTTP client for communicating with `rsvp-node`.

use reqwest::{Client, Response, StatusCode};
use rsvp_registry::{
    payload, AddGuestCommand, AdditionalGuest, GuestList, GuestRecord, UpdateGuestCommand,
};
use serde_json::{json, Value};

use crate::error::{ClientError, ClientResult};

/// Default node address.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8088";

/// HTTP client for the RSVP node API.
///
/// Every response is checked with the registry's payload parsers before it
/// is handed back, so callers only ever see well-formed guests.
///
/// # Examples
///
/// ```rust,no_run
/// use rsvp_cli::RsvpClient;
///
/// # async fn run() -> rsvp_cli::ClientResult<()> {
/// let client = RsvpClient::new("http://127.0.0.1:8088")?;
/// let list = client.list_guests().await?;
/// println!("{} guests invited", list.guests.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RsvpClient {
    base_url: String,
    http: Client,
}

impl RsvpClient {
    /// Creates a new client for the node at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every guest with the head-count summary.
    ///
    /// # Errors
    ///
    /// Fails on network errors, rejections, or a malformed list.
    pub async fn list_guests(&self) -> ClientResult<GuestList> {
        let res = self
            .http
            .get(format!("{}/api/guestList", self.base_url))
            .send()
            .await?;
        let body = read_json(res).await?;
        Ok(payload::parse_guest_list(&body)?)
    }

    /// Fetches one guest by name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] if the guest does not exist.
    pub async fn load_guest(&self, name: &str) -> ClientResult<GuestRecord> {
        let res = self
            .http
            .get(format!("{}/api/loadGuest", self.base_url))
            .query(&[("name", name)])
            .send()
            .await?;
        let body = read_json(res).await?;
        Ok(payload::parse_loaded_guest(&body)?)
    }

    /// Invites a guest.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] if the node refuses the invitation.
    pub async fn add_guest(&self, command: &AddGuestCommand) -> ClientResult<()> {
        let res = self
            .http
            .post(format!("{}/api/addGuest", self.base_url))
            .json(&add_body(command))
            .send()
            .await?;
        let body = read_json(res).await?;
        Ok(payload::parse_confirmation(&body, "saved")?)
    }

    /// Records a guest's answers.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] if the node refuses the update.
    pub async fn update_guest(&self, command: &UpdateGuestCommand) -> ClientResult<()> {
        let res = self
            .http
            .post(format!("{}/api/updateGuest", self.base_url))
            .json(&update_body(command))
            .send()
            .await?;
        let body = read_json(res).await?;
        Ok(payload::parse_confirmation(&body, "updated")?)
    }
}

/// Reads a 200 body as JSON and a 400 body as the rejection text.
async fn read_json(res: Response) -> ClientResult<Value> {
    match res.status() {
        StatusCode::OK => {
            let bytes = res.bytes().await?;
            serde_json::from_slice(&bytes).map_err(|e| ClientError::NotJson(e.to_string()))
        }
        StatusCode::BAD_REQUEST => Err(ClientError::Rejected(res.text().await?)),
        status => Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
        }),
    }
}

fn add_body(command: &AddGuestCommand) -> Value {
    json!({
        "name": command.name,
        "host": command.host.as_str(),
        "isFamily": command.is_family,
    })
}

fn update_body(command: &UpdateGuestCommand) -> Value {
    let mut body = json!({
        "name": command.name,
        "dietary": command.dietary,
    });
    match &command.additional {
        AdditionalGuest::Unknown => {}
        AdditionalGuest::NotBringing => body["additional"] = Value::Bool(false),
        AdditionalGuest::Bringing { name, dietary } => {
            body["additional"] = Value::Bool(true);
            body["additionalName"] = Value::from(name.as_str());
            body["additionalDietary"] = Value::from(dietary.as_str());
        }
    }
    body
}
