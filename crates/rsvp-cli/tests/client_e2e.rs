//! End-to-end tests for the CLI client against a real node on an ephemeral port.

use rsvp_cli::{ClientError, RsvpClient};
use rsvp_node::api::{create_router, AppState};
use rsvp_registry::{AddGuestCommand, AdditionalGuest, Host, UpdateGuestCommand};

async fn spawn_node() -> RsvpClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(AppState::default()))
            .await
            .unwrap();
    });
    RsvpClient::new(format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_invite_answer_and_list() {
    let client = spawn_node().await;

    client
        .add_guest(&AddGuestCommand::new("zhiyuan", Host::James, true))
        .await
        .unwrap();
    client
        .add_guest(&AddGuestCommand::new("Ada Lovelace", Host::Molly, false))
        .await
        .unwrap();
    client
        .update_guest(&UpdateGuestCommand::new(
            "zhiyuan",
            "none",
            AdditionalGuest::bringing("fx", "happy"),
        ))
        .await
        .unwrap();

    let guest = client.load_guest("zhiyuan").await.unwrap();
    assert_eq!(guest.dietary(), "none");
    assert_eq!(guest.additional(), &AdditionalGuest::bringing("fx", "happy"));

    let ada = client.load_guest("Ada Lovelace").await.unwrap();
    assert_eq!(ada.host(), Host::Molly);
    assert!(ada.additional().is_unknown());

    let list = client.list_guests().await.unwrap();
    assert_eq!(list.guests.len(), 2);
    let james = list.summary.host(Host::James);
    assert_eq!((james.min, james.max, james.fam_num), (2, 2, 1));
    let molly = list.summary.host(Host::Molly);
    assert_eq!((molly.min, molly.max, molly.fam_num), (1, 2, 0));
}

#[tokio::test]
async fn test_rejections_carry_server_text() {
    let client = spawn_node().await;

    client
        .add_guest(&AddGuestCommand::new("zhiyuan", Host::James, true))
        .await
        .unwrap();

    let err = client
        .add_guest(&AddGuestCommand::new("zhiyuan", Host::Molly, false))
        .await
        .unwrap_err();
    assert!(matches!(&err, ClientError::Rejected(msg) if msg == "guest already added"));

    let err = client.load_guest("nobody").await.unwrap_err();
    assert_eq!(err.to_string(), "no guest with name 'nobody'");

    let err = client
        .update_guest(&UpdateGuestCommand::new(
            "nobody",
            "none",
            AdditionalGuest::NotBringing,
        ))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no guest with name 'nobody'");
}

#[tokio::test]
async fn test_unreachable_node_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RsvpClient::new(format!("http://{addr}")).unwrap();
    let err = client.list_guests().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
