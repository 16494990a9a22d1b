//! CLI command implementations.

use rsvp_registry::{
    AddGuestCommand, AdditionalGuest, GuestList, GuestRecord, Host, HostSummary,
    UpdateGuestCommand,
};
use std::fmt::Write;
use thiserror::Error;

use crate::client::RsvpClient;
use crate::error::ClientError;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Input rejected before anything was sent.
    #[error("{0}")]
    Input(&'static str),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// What the guest said about a companion, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionAnswer {
    Unknown,
    NotBringing,
    Bringing { name: String, dietary: String },
}

/// Print the guest list and the per-host summary.
pub async fn list(client: &RsvpClient) -> Result<()> {
    let list = client.list_guests().await?;
    print!("{}", render_guest_list(&list));
    Ok(())
}

/// Print one guest.
pub async fn show(client: &RsvpClient, name: &str) -> Result<()> {
    let guest = client.load_guest(name).await?;
    print!("{}", render_guest(&guest));
    Ok(())
}

/// Invite a guest.
pub async fn add(client: &RsvpClient, name: &str, host: Host, is_family: bool) -> Result<()> {
    let command = add_command(name, host, is_family)?;
    tracing::info!(name = %command.name, host = %host, "Inviting guest");
    client.add_guest(&command).await?;
    println!("Invited {} as a guest of {host}", command.name);
    Ok(())
}

/// Record a guest's answers.
pub async fn update(
    client: &RsvpClient,
    name: &str,
    dietary: &str,
    companion: CompanionAnswer,
) -> Result<()> {
    let command = update_command(name, dietary, companion)?;
    tracing::info!(name = %command.name, "Recording answers");
    client.update_guest(&command).await?;
    println!("Saved answers for {}", command.name);
    Ok(())
}

/// Builds an invitation, refusing a blank name.
pub fn add_command(name: &str, host: Host, is_family: bool) -> Result<AddGuestCommand> {
    if name.trim().is_empty() {
        return Err(CliError::Input("guest missing a name"));
    }
    Ok(AddGuestCommand::new(name, host, is_family))
}

/// Builds an update, refusing blank answers.
pub fn update_command(
    name: &str,
    dietary: &str,
    companion: CompanionAnswer,
) -> Result<UpdateGuestCommand> {
    if dietary.trim().is_empty() {
        return Err(CliError::Input("guest missing dietary"));
    }
    let additional = match companion {
        CompanionAnswer::Unknown => AdditionalGuest::Unknown,
        CompanionAnswer::NotBringing => AdditionalGuest::NotBringing,
        CompanionAnswer::Bringing { name, dietary } => {
            if name.trim().is_empty() {
                return Err(CliError::Input("additional guest missing a name"));
            }
            if dietary.trim().is_empty() {
                return Err(CliError::Input("additional guest missing dietary"));
            }
            AdditionalGuest::bringing(name, dietary)
        }
    };
    Ok(UpdateGuestCommand::new(name, dietary, additional))
}

/// Renders the list view: one line per guest, then one line per host.
pub fn render_guest_list(list: &GuestList) -> String {
    let mut out = String::new();
    for guest in &list.guests {
        let _ = writeln!(
            out,
            "{}  Guest of {} {}",
            guest.name(),
            guest.host(),
            guest.additional().head_count_label()
        );
    }
    if !list.guests.is_empty() {
        out.push('\n');
    }
    for host in Host::ALL {
        let _ = writeln!(out, "{}", render_host_summary(host, list.summary.host(host)));
    }
    out
}

/// Renders `<range> guest(s) of <host> (<famNum> family)`.
pub fn render_host_summary(host: Host, counts: &HostSummary) -> String {
    let range = if counts.min == counts.max {
        counts.min.to_string()
    } else {
        format!("{}-{}", counts.min, counts.max)
    };
    format!("{range} guest(s) of {host} ({} family)", counts.fam_num)
}

/// Renders the detail view of one guest.
pub fn render_guest(guest: &GuestRecord) -> String {
    let family = if guest.is_family() { "family" } else { "not family" };
    let dietary = if guest.dietary().is_empty() {
        "(not answered)"
    } else {
        guest.dietary()
    };
    let companion = match guest.additional() {
        AdditionalGuest::Unknown => "unknown".to_string(),
        AdditionalGuest::NotBringing => "none".to_string(),
        AdditionalGuest::Bringing { name, dietary } => format!("{name} (dietary: {dietary})"),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}, guest of {}, {family}", guest.name(), guest.host());
    let _ = writeln!(out, "Dietary restrictions: {dietary}");
    let _ = writeln!(out, "Additional guest: {companion}");
    out
}
