use crate::pdu::reader::*;
use crate::pdu::writer::*;
use crate::pdu::*;
use std::io::Cursor;

#[test]
fn can_read_write_associate_rq() -> crate::pdu::writer::Result<()> {
    let association_rq = Pdu::AssociationRQ(AssociationRQ {
        protocol_version: 2,
        calling_ae_title: "calling ae".to_string(),
        called_ae_title: "called ae".to_string(),
        application_context_name: "application context name".to_string(),
        presentation_contexts: vec![
            PresentationContextProposed::new(
                1,
                "abstract 1".to_string(),
                vec!["transfer 1".to_string(), "transfer 2".to_string()],
            ),
            PresentationContextProposed::new(
                3,
                "abstract 2".to_string(),
                vec!["transfer 3".to_string(), "transfer 4".to_string()],
            ),
        ],
        user_variables: vec![
            UserVariableItem::ImplementationClassUID("class uid".to_string()),
            UserVariableItem::ImplementationVersionName("version name".to_string()),
            UserVariableItem::MaxLength(23),
            UserVariableItem::AsynchronousOperationsWindow {
                max_ops_invoked: 1,
                max_ops_performed: 1,
            },
            UserVariableItem::RoleSelection {
                sop_class_uid: "abstract 1".to_string(),
                scu_role: true,
                scp_role: true,
            },
        ],
    });

    let mut bytes = vec![0u8; 0];
    write_pdu(&mut bytes, &association_rq)?;

    let result = read_pdu(&mut Cursor::new(&bytes), DEFAULT_MAX_PDU, true).unwrap();

    let Pdu::AssociationRQ(AssociationRQ {
        protocol_version,
        calling_ae_title,
        called_ae_title,
        application_context_name,
        presentation_contexts,
        user_variables,
    }) = result
    else {
        panic!("expected an A-ASSOCIATE-RQ PDU");
    };

    assert_eq!(protocol_version, 2);
    assert_eq!(calling_ae_title, "calling ae".to_string());
    assert_eq!(called_ae_title, "called ae".to_string());
    assert_eq!(
        application_context_name,
        "application context name".to_string()
    );
    assert_eq!(presentation_contexts.len(), 2);
    assert_eq!(presentation_contexts[0].abstract_syntax, "abstract 1");
    assert_eq!(presentation_contexts[0].transfer_syntaxes.len(), 2);
    assert_eq!(presentation_contexts[0].transfer_syntaxes[0], "transfer 1");
    assert_eq!(presentation_contexts[0].transfer_syntaxes[1], "transfer 2");
    assert_eq!(presentation_contexts[1].abstract_syntax, "abstract 2");
    assert_eq!(presentation_contexts[1].transfer_syntaxes.len(), 2);
    assert_eq!(presentation_contexts[1].transfer_syntaxes[0], "transfer 3");
    assert_eq!(presentation_contexts[1].transfer_syntaxes[1], "transfer 4");
    assert_eq!(user_variables.len(), 5);
    assert!(matches!(
        user_variables[0],
        UserVariableItem::ImplementationClassUID(_)
    ));
    assert!(matches!(
        user_variables[1],
        UserVariableItem::ImplementationVersionName(_)
    ));
    assert!(matches!(user_variables[2], UserVariableItem::MaxLength(_)));
    assert!(matches!(
        user_variables[3],
        UserVariableItem::AsynchronousOperationsWindow {
            max_ops_invoked: 1,
            max_ops_performed: 1,
        }
    ));
    assert!(matches!(
        &user_variables[4],
        UserVariableItem::RoleSelection { scu_role: true, scp_role: true, .. }
    ));

    Ok(())
}

#[test]
fn can_read_write_pdata() -> crate::pdu::writer::Result<()> {
    let pdata_rq = Pdu::PData {
        data: vec![PDataValue {
            presentation_context_id: 3,
            value_type: PDataValueType::Command,
            is_last: true,
            data: vec![0, 0, 0, 0],
        }],
    };

    let mut bytes = vec![0u8; 0];
    write_pdu(&mut bytes, &pdata_rq)?;

    let result = read_pdu(&mut Cursor::new(&bytes), DEFAULT_MAX_PDU, true).unwrap();

    let Pdu::PData { data } = result else {
        panic!("expected a P-DATA-TF PDU");
    };
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].presentation_context_id, 3);
    assert!(matches!(data[0].value_type, PDataValueType::Command));
    assert!(data[0].is_last);
    assert_eq!(data[0].data, vec![0, 0, 0, 0]);

    Ok(())
}
