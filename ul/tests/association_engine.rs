//! Integration tests for the message-level [`AssociationEngine`], exercising
//! full client/server pairs over real loopback sockets.

use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use dicom_core::{dicom_value, DataElement, VR};
use dicom_dictionary_std::{tags, uids::VERIFICATION};
use dicom_object::InMemDicomObject;
use dicom_ul::association::{AssociationEngine, ClientAssociationOptions, ServerAssociationOptions};

fn echo_request(message_id: u16) -> InMemDicomObject {
    InMemDicomObject::command_from_element_iter([
        DataElement::new(tags::AFFECTED_SOP_CLASS_UID, VR::UI, dicom_value!(VERIFICATION)),
        DataElement::new(tags::COMMAND_FIELD, VR::US, dicom_value!(U16, [0x0030])),
        DataElement::new(tags::MESSAGE_ID, VR::US, dicom_value!(U16, [message_id])),
        DataElement::new(
            tags::COMMAND_DATA_SET_TYPE,
            VR::US,
            dicom_value!(U16, [0x0101]),
        ),
    ])
}

fn echo_response(message_id: u16, status: u16) -> InMemDicomObject {
    InMemDicomObject::command_from_element_iter([
        DataElement::new(tags::AFFECTED_SOP_CLASS_UID, VR::UI, dicom_value!(VERIFICATION)),
        DataElement::new(tags::COMMAND_FIELD, VR::US, dicom_value!(U16, [0x8030])),
        DataElement::new(
            tags::MESSAGE_ID_BEING_RESPONDED_TO,
            VR::US,
            dicom_value!(U16, [message_id]),
        ),
        DataElement::new(
            tags::COMMAND_DATA_SET_TYPE,
            VR::US,
            dicom_value!(U16, [0x0101]),
        ),
        DataElement::new(tags::STATUS, VR::US, dicom_value!(U16, [status])),
    ])
}

#[test]
fn echo_round_trip_through_engine() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let server_addr = listener.local_addr().unwrap();

    let server_handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let server = ServerAssociationOptions::new()
            .accept_any()
            .with_abstract_syntax(VERIFICATION)
            .ae_title("THIS-SCP")
            .establish(stream)
            .unwrap();

        let engine = AssociationEngine::from_server(
            server,
            "THIS-SCP",
            1,
            1,
            Some(Duration::from_secs(5)),
        )
        .unwrap();

        let request = engine.get_message().unwrap();
        assert_eq!(request.command.message_id, Some(1));
        assert!(!request.command.has_dataset);

        let pc_id = request.presentation_context_id;
        let response = echo_response(1, 0x0000);
        engine.send_response(pc_id, &response, None).unwrap();

        engine.release().unwrap();
    });

    thread::sleep(Duration::from_millis(10));

    let client = ClientAssociationOptions::new()
        .with_abstract_syntax(VERIFICATION)
        .calling_ae_title("THIS-SCU")
        .called_ae_title("THIS-SCP")
        .read_timeout(Duration::from_secs(5))
        .establish(server_addr)
        .unwrap();

    let engine = AssociationEngine::from_client(
        client,
        "THIS-SCU",
        "THIS-SCP",
        1,
        1,
        Some(Duration::from_secs(5)),
    )
    .unwrap();

    let pc_id = engine.presentation_contexts()[0].id;
    let message_id = engine.next_message_id();
    assert_eq!(message_id, 1);

    let request = echo_request(message_id);
    engine.send_request(pc_id, &request, None).unwrap();

    let response = engine.get_response(message_id).unwrap();
    assert_eq!(response.command.status, Some(0x0000));

    engine.release().unwrap();
    server_handle.join().unwrap();
}

#[test]
fn operations_window_rejects_extra_invoked_request() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let server_addr = listener.local_addr().unwrap();

    let server_handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let server = ServerAssociationOptions::new()
            .accept_any()
            .with_abstract_syntax(VERIFICATION)
            .ae_title("THIS-SCP")
            .establish(stream)
            .unwrap();

        let engine = AssociationEngine::from_server(
            server,
            "THIS-SCP",
            1,
            1,
            Some(Duration::from_secs(5)),
        )
        .unwrap();

        // drain the single request the client is allowed to have in flight
        let request = engine.get_message().unwrap();
        let pc_id = request.presentation_context_id;
        engine
            .send_response(pc_id, &echo_response(1, 0x0000), None)
            .unwrap();

        engine.release().unwrap();
    });

    thread::sleep(Duration::from_millis(10));

    let client = ClientAssociationOptions::new()
        .with_abstract_syntax(VERIFICATION)
        .calling_ae_title("THIS-SCU")
        .called_ae_title("THIS-SCP")
        .read_timeout(Duration::from_secs(5))
        .establish(server_addr)
        .unwrap();

    let engine = AssociationEngine::from_client(
        client,
        "THIS-SCU",
        "THIS-SCP",
        1,
        1,
        Some(Duration::from_secs(5)),
    )
    .unwrap();

    let pc_id = engine.presentation_contexts()[0].id;

    let first_id = engine.next_message_id();
    engine
        .send_request(pc_id, &echo_request(first_id), None)
        .unwrap();

    // a second invoked request while the first is still outstanding must be
    // rejected by the asynchronous operations window (max_ops_invoked = 1)
    let second_id = engine.next_message_id();
    let err = engine
        .send_request(pc_id, &echo_request(second_id), None)
        .unwrap_err();
    assert!(matches!(err, dicom_ul::association::engine::Error::TooManyOperationsInvoked { limit: 1 }));

    let response = engine.get_response(first_id).unwrap();
    assert_eq!(response.command.status, Some(0x0000));

    engine.release().unwrap();
    server_handle.join().unwrap();
}

#[test]
fn performed_operations_window_aborts_on_excess_inbound_request() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let server_addr = listener.local_addr().unwrap();

    let server_handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let server = ServerAssociationOptions::new()
            .accept_any()
            .with_abstract_syntax(VERIFICATION)
            .ae_title("THIS-SCP")
            .establish(stream)
            .unwrap();

        // max_ops_performed = 1: a second inbound request before the first
        // is answered must blow the window and abort the association.
        let engine = AssociationEngine::from_server(
            server,
            "THIS-SCP",
            1,
            1,
            Some(Duration::from_secs(5)),
        )
        .unwrap();

        let first = engine.get_message().unwrap();
        assert_eq!(first.command.message_id, Some(1));

        // the second request was already rejected by the reader thread, so
        // the next pop observes the resulting terminal error instead.
        let err = engine.get_message().unwrap_err();
        assert!(format!("{err}").to_lowercase().contains("performed"));
    });

    thread::sleep(Duration::from_millis(10));

    let client = ClientAssociationOptions::new()
        .with_abstract_syntax(VERIFICATION)
        .calling_ae_title("THIS-SCU")
        .called_ae_title("THIS-SCP")
        .read_timeout(Duration::from_secs(5))
        .establish(server_addr)
        .unwrap();

    let engine = AssociationEngine::from_client(
        client,
        "THIS-SCU",
        "THIS-SCP",
        2,
        2,
        Some(Duration::from_secs(5)),
    )
    .unwrap();

    let pc_id = engine.presentation_contexts()[0].id;

    let first_id = engine.next_message_id();
    engine
        .send_request(pc_id, &echo_request(first_id), None)
        .unwrap();
    let second_id = engine.next_message_id();
    engine
        .send_request(pc_id, &echo_request(second_id), None)
        .unwrap();

    server_handle.join().unwrap();
}

#[test]
fn scu_only_requestor_cannot_send_responses() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let server_addr = listener.local_addr().unwrap();

    let server_handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let server = ServerAssociationOptions::new()
            .accept_any()
            .with_abstract_syntax(VERIFICATION)
            .ae_title("THIS-SCP")
            .establish(stream)
            .unwrap();

        let engine = AssociationEngine::from_server(
            server,
            "THIS-SCP",
            1,
            1,
            Some(Duration::from_secs(5)),
        )
        .unwrap();

        let request = engine.get_message().unwrap();
        let pc_id = request.presentation_context_id;
        engine
            .send_response(pc_id, &echo_response(1, 0x0000), None)
            .unwrap();

        engine.release().unwrap();
    });

    thread::sleep(Duration::from_millis(10));

    let client = ClientAssociationOptions::new()
        .with_abstract_syntax(VERIFICATION)
        .calling_ae_title("THIS-SCU")
        .called_ae_title("THIS-SCP")
        .read_timeout(Duration::from_secs(5))
        .establish(server_addr)
        .unwrap();

    let engine = AssociationEngine::from_client(
        client,
        "THIS-SCU",
        "THIS-SCP",
        1,
        1,
        Some(Duration::from_secs(5)),
    )
    .unwrap();

    let pc_id = engine.presentation_contexts()[0].id;

    // the requestor never asked for the SCP role, so it must not be able to
    // act as one: attempting to send a response is rejected locally.
    let err = engine
        .send_response(pc_id, &echo_response(1, 0x0000), None)
        .unwrap_err();
    assert!(matches!(
        err,
        dicom_ul::association::engine::Error::RoleNotGranted { role: "SCP", .. }
    ));

    let message_id = engine.next_message_id();
    engine
        .send_request(pc_id, &echo_request(message_id), None)
        .unwrap();
    engine.get_response(message_id).unwrap();

    engine.release().unwrap();
    server_handle.join().unwrap();
}
