//! Association requestor module
//!
//! The module provides an abstraction for a DICOM association
//! in which this application entity requests an association
//! with another, taking on the role of a service class user (SCU).
//! See [`ClientAssociationOptions`] for details and examples.
use std::{
    borrow::Cow,
    net::{TcpStream, ToSocketAddrs},
};

use snafu::{ensure, OptionExt, ResultExt};

use crate::pdu::{
    reader::read_pdu, writer::write_pdu, AssociationAC, AssociationRJ, AssociationRJResult,
    AssociationRJSource, AssociationRQ, Pdu, PresentationContextProposed,
    PresentationContextResultReason, UserVariableItem, DEFAULT_MAX_PDU,
};

use super::uid::trim_uid;
use super::{
    MissingAbstractSyntaxSnafu, NoAcceptedPresentationContextsSnafu, ProtocolVersionMismatchSnafu,
    ReceiveSnafu, RejectedSnafu, SendSnafu, UnexpectedPduSnafu, UnknownPduSnafu,
};
use super::{Error, Result};

/// A negotiated presentation context from the point of view of the requestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegotiatedPresentationContext<'a> {
    pub id: u8,
    pub abstract_syntax: &'a str,
    pub transfer_syntax: &'a str,
    /// Whether this end of the association acts as SCU for this context.
    pub scu_role: bool,
    /// Whether this end of the association acts as SCP for this context.
    pub scp_role: bool,
}

/// A DICOM association builder for the requesting (client) node.
/// The final outcome is a [`ClientAssociation`].
///
/// This is the standard way of requesting and establishing
/// an association with another DICOM node,
/// that one usually taking the role of a service class provider (SCP).
///
/// # Example
///
/// ```no_run
/// # use dicom_ul::association::client::ClientAssociationOptions;
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let association = ClientAssociationOptions::new()
///    .with_abstract_syntax("1.2.840.10008.1.1")
///    .with_transfer_syntax("1.2.840.10008.1.2.1")
///    .establish("129.168.0.5:104")?;
/// # Ok(())
/// # }
/// ```
///
/// The SCU will admit by default the transfer syntaxes
/// _Implicit VR Little Endian_ and _Explicit VR Little Endian_.
/// Other transfer syntaxes can be requested via `with_transfer_syntax`.
#[derive(Debug, Clone)]
pub struct ClientAssociationOptions {
    calling_ae_title: Cow<'static, str>,
    called_ae_title: Cow<'static, str>,
    application_context_name: Cow<'static, str>,
    abstract_syntax_uids: Vec<Cow<'static, str>>,
    transfer_syntax_uids: Vec<Cow<'static, str>>,
    /// abstract syntaxes for which this node additionally proposes to act as SCP
    scp_abstract_syntax_uids: Vec<Cow<'static, str>>,
    protocol_version: u16,
    max_pdu_length: u32,
    /// maximum number of outstanding operations this node will invoke
    max_ops_invoked: u16,
    /// maximum number of outstanding operations this node will perform
    max_ops_performed: u16,
}

impl Default for ClientAssociationOptions {
    fn default() -> Self {
        ClientAssociationOptions {
            calling_ae_title: "THIS-SCU".into(),
            called_ae_title: "ANY-SCP".into(),
            application_context_name: "1.2.840.10008.3.1.1.1".into(),
            abstract_syntax_uids: Vec::new(),
            transfer_syntax_uids: Vec::new(),
            scp_abstract_syntax_uids: Vec::new(),
            protocol_version: 1,
            max_pdu_length: DEFAULT_MAX_PDU,
            max_ops_invoked: 1,
            max_ops_performed: 1,
        }
    }
}

impl ClientAssociationOptions {
    /// Create a new set of options for establishing an association.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the calling application entity title for the association,
    /// which refers to this DICOM node.
    ///
    /// The default is `THIS-SCU`.
    pub fn calling_ae_title<T>(mut self, calling_ae_title: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.calling_ae_title = calling_ae_title.into();
        self
    }

    /// Define the called application entity title for the association,
    /// which refers to the target DICOM node.
    ///
    /// The default is `ANY-SCP`.
    pub fn called_ae_title<T>(mut self, called_ae_title: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.called_ae_title = called_ae_title.into();
        self
    }

    /// Include this abstract syntax
    /// in the list of proposed presentation contexts.
    pub fn with_abstract_syntax<T>(mut self, abstract_syntax_uid: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.abstract_syntax_uids.push(abstract_syntax_uid.into());
        self
    }

    /// Include this transfer syntax in each proposed presentation context.
    pub fn with_transfer_syntax<T>(mut self, transfer_syntax_uid: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.transfer_syntax_uids.push(transfer_syntax_uid.into());
        self
    }

    /// Additionally propose that this node act as SCP
    /// (not just SCU) for the given abstract syntax,
    /// via a role selection sub-item.
    ///
    /// This is relevant for service classes with a storage commitment
    /// or retrieve sub-operation, such as C-GET and C-MOVE, where the
    /// association requestor plays both roles.
    pub fn with_scp_role<T>(mut self, abstract_syntax_uid: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.scp_abstract_syntax_uids
            .push(abstract_syntax_uid.into());
        self
    }

    /// Override the maximum expected PDU length.
    pub fn max_pdu_length(mut self, value: u32) -> Self {
        self.max_pdu_length = value;
        self
    }

    /// Set the maximum number of operations this node will invoke
    /// asynchronously (see asynchronous operations window negotiation).
    /// A value of `1` (the default) effectively disables async operations.
    pub fn max_ops_invoked(mut self, value: u16) -> Self {
        self.max_ops_invoked = value;
        self
    }

    /// Set the maximum number of operations this node will perform
    /// asynchronously. A value of `1` (the default) effectively disables
    /// async operations.
    pub fn max_ops_performed(mut self, value: u16) -> Self {
        self.max_ops_performed = value;
        self
    }

    /// Initiate the TCP connection and negotiate the association.
    pub fn establish<A: ToSocketAddrs>(self, address: A) -> Result<ClientAssociation> {
        let socket = TcpStream::connect(address).context(super::ConnectSnafu)?;
        self.establish_with(socket)
    }

    /// Negotiate an association over an already-connected stream.
    pub fn establish_with(self, mut socket: TcpStream) -> Result<ClientAssociation> {
        let ClientAssociationOptions {
            calling_ae_title,
            called_ae_title,
            application_context_name,
            abstract_syntax_uids,
            mut transfer_syntax_uids,
            scp_abstract_syntax_uids,
            protocol_version,
            max_pdu_length,
            max_ops_invoked,
            max_ops_performed,
        } = self;

        // fail if no abstract syntaxes were provided: they represent intent,
        // should not be omitted by the user
        ensure!(
            !abstract_syntax_uids.is_empty(),
            MissingAbstractSyntaxSnafu
        );

        // provide default transfer syntaxes
        if transfer_syntax_uids.is_empty() {
            // Explicit VR Little Endian
            transfer_syntax_uids.push("1.2.840.10008.1.2.1".into());
            // Implicit VR Little Endian
            transfer_syntax_uids.push("1.2.840.10008.1.2".into());
        }

        let presentation_contexts: Vec<_> = abstract_syntax_uids
            .into_iter()
            .enumerate()
            .map(|(i, abstract_syntax)| {
                let id = (i * 2 + 1) as u8;
                let mut pc = PresentationContextProposed::new(
                    id,
                    trim_uid(Cow::from(abstract_syntax.as_ref())).to_string(),
                    transfer_syntax_uids.iter().map(|uid| uid.to_string()).collect(),
                );
                if scp_abstract_syntax_uids
                    .iter()
                    .any(|uid| uid.as_ref() == abstract_syntax.as_ref())
                {
                    pc.requestor_is_scp = true;
                }
                pc
            })
            .collect();

        let mut user_variables = vec![
            UserVariableItem::MaxLength(max_pdu_length),
            UserVariableItem::ImplementationClassUID(
                crate::IMPLEMENTATION_CLASS_UID.to_string(),
            ),
            UserVariableItem::ImplementationVersionName(
                crate::IMPLEMENTATION_VERSION_NAME.to_string(),
            ),
        ];
        if max_ops_invoked != 1 || max_ops_performed != 1 {
            user_variables.push(UserVariableItem::AsynchronousOperationsWindow {
                max_ops_invoked,
                max_ops_performed,
            });
        }
        for pc in &presentation_contexts {
            if pc.requestor_is_scp {
                user_variables.push(UserVariableItem::RoleSelection {
                    sop_class_uid: pc.abstract_syntax.clone(),
                    scu_role: pc.requestor_is_scu,
                    scp_role: pc.requestor_is_scp,
                });
            }
        }

        let msg = Pdu::AssociationRQ(AssociationRQ {
            protocol_version,
            calling_ae_title: calling_ae_title.to_string(),
            called_ae_title: called_ae_title.to_string(),
            application_context_name: application_context_name.to_string(),
            presentation_contexts: presentation_contexts.clone(),
            user_variables,
        });

        // send request
        write_pdu(&mut socket, &msg).context(SendSnafu)?;

        // receive response
        let msg = read_pdu(&mut socket, max_pdu_length, true).context(ReceiveSnafu)?;

        match msg {
            Pdu::AssociationAC(AssociationAC {
                protocol_version: protocol_version_scp,
                application_context_name: _,
                called_ae_title: _,
                calling_ae_title: _,
                presentation_contexts: presentation_contexts_scp,
                user_variables: ac_user_variables,
            }) => {
                ensure!(
                    protocol_version == protocol_version_scp,
                    ProtocolVersionMismatchSnafu {
                        expected: protocol_version,
                        got: protocol_version_scp,
                    }
                );

                let accepted: Vec<_> = presentation_contexts_scp
                    .into_iter()
                    .filter(|c| c.reason == PresentationContextResultReason::Acceptance)
                    .filter_map(|c| {
                        let proposed = presentation_contexts.iter().find(|p| p.id == c.id)?;
                        // An accepted context must echo back one of the transfer
                        // syntaxes we proposed for it; an empty or foreign value
                        // means the acceptor did not really accept the context.
                        if c.transfer_syntax.is_empty()
                            || !proposed
                                .transfer_syntaxes
                                .iter()
                                .any(|ts| ts == &c.transfer_syntax)
                        {
                            return None;
                        }
                        // Intersect our proposed roles with the peer's RoleSelection
                        // reply for this abstract syntax, if any; a peer that never
                        // replies with a role selection item is assumed not to act
                        // as SCP for it.
                        let (peer_scu, peer_scp) = ac_user_variables
                            .iter()
                            .find_map(|item| match item {
                                UserVariableItem::RoleSelection {
                                    sop_class_uid,
                                    scu_role,
                                    scp_role,
                                } if trim_uid(Cow::from(sop_class_uid.as_str()))
                                    == trim_uid(Cow::from(proposed.abstract_syntax.as_str())) =>
                                {
                                    Some((*scu_role, *scp_role))
                                }
                                _ => None,
                            })
                            .unwrap_or((true, false));
                        Some(AcceptedPresentationContext {
                            id: c.id,
                            abstract_syntax: proposed.abstract_syntax.clone(),
                            transfer_syntax: c.transfer_syntax,
                            scu_role: proposed.requestor_is_scu && peer_scu,
                            scp_role: proposed.requestor_is_scp && peer_scp,
                        })
                    })
                    .collect();

                ensure!(
                    !accepted.is_empty(),
                    NoAcceptedPresentationContextsSnafu
                );

                let peer_max_pdu_length = ac_user_variables
                    .iter()
                    .find_map(|item| match item {
                        UserVariableItem::MaxLength(len) => Some(*len),
                        _ => None,
                    })
                    .unwrap_or(DEFAULT_MAX_PDU);
                let peer_max_pdu_length = if peer_max_pdu_length == 0 {
                    u32::MAX
                } else {
                    peer_max_pdu_length
                };

                let (peer_max_ops_invoked, peer_max_ops_performed) = ac_user_variables
                    .iter()
                    .find_map(|item| match item {
                        UserVariableItem::AsynchronousOperationsWindow {
                            max_ops_invoked,
                            max_ops_performed,
                        } => Some((*max_ops_invoked, *max_ops_performed)),
                        _ => None,
                    })
                    .unwrap_or((1, 1));

                Ok(ClientAssociation {
                    presentation_contexts: accepted,
                    peer_max_pdu_length,
                    max_pdu_length,
                    peer_max_ops_invoked,
                    peer_max_ops_performed,
                    handed_off: false,
                    socket,
                })
            }
            Pdu::AssociationRJ(association_rj) => RejectedSnafu { association_rj }.fail(),
            pdu @ Pdu::AbortRQ { .. }
            | pdu @ Pdu::ReleaseRQ
            | pdu @ Pdu::AssociationRQ { .. }
            | pdu @ Pdu::PData { .. }
            | pdu @ Pdu::ReleaseRP => UnexpectedPduSnafu { pdu }.fail(),
            pdu @ Pdu::Unknown { .. } => UnknownPduSnafu { pdu }.fail(),
        }
    }
}

/// An accorded presentation context, from the requestor's perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedPresentationContext {
    pub id: u8,
    pub abstract_syntax: String,
    pub transfer_syntax: String,
    pub scu_role: bool,
    pub scp_role: bool,
}

/// A DICOM upper layer association from the perspective
/// of an association requestor.
///
/// Sending and receiving whole PDUs is provided by
/// [`send`](ClientAssociation::send) and [`receive`](ClientAssociation::receive).
/// When the value falls out of scope,
/// the program will attempt to gracefully release the association
/// and shut down the underlying TCP connection.
#[derive(Debug)]
pub struct ClientAssociation {
    /// the presentation contexts accorded by the acceptor
    presentation_contexts: Vec<AcceptedPresentationContext>,
    /// the maximum PDU length accepted by the peer
    peer_max_pdu_length: u32,
    /// the maximum PDU length this node is willing to receive
    max_pdu_length: u32,
    /// the maximum number of operations the peer declared it will invoke
    peer_max_ops_invoked: u16,
    /// the maximum number of operations the peer declared it will perform
    peer_max_ops_performed: u16,
    /// whether ownership of the socket has been handed off to a
    /// message-level engine via [`ClientAssociation::into_parts`], in which
    /// case `Drop` must not also attempt a graceful release
    handed_off: bool,
    /// The TCP stream to the other DICOM node
    socket: TcpStream,
}

impl ClientAssociation {
    /// Retrieve the presentation contexts accorded by the acceptor.
    pub fn presentation_contexts(&self) -> &[AcceptedPresentationContext] {
        &self.presentation_contexts
    }

    /// Retrieve the maximum PDU length accepted by the peer.
    pub fn peer_max_pdu_length(&self) -> u32 {
        self.peer_max_pdu_length
    }

    /// Retrieve the asynchronous operations window the peer declared
    /// (defaults to `(1, 1)` if the peer did not negotiate one).
    pub fn peer_max_ops(&self) -> (u16, u16) {
        (self.peer_max_ops_invoked, self.peer_max_ops_performed)
    }

    /// Access the underlying TCP stream.
    pub fn inner_stream(&self) -> &TcpStream {
        &self.socket
    }

    /// Consume this association, returning its constituent parts needed to
    /// build a message-level [`crate::association::engine::Association`]:
    /// the negotiated presentation contexts, the peer's max PDU length, this
    /// node's own max PDU length, the peer's declared async ops window, and
    /// the underlying socket. The returned socket is a duplicate handle to
    /// the same connection; marks this association as handed off so `Drop`
    /// does not also attempt a graceful release.
    pub fn into_parts(
        mut self,
    ) -> Result<(
        Vec<AcceptedPresentationContext>,
        u32,
        u32,
        (u16, u16),
        TcpStream,
    )> {
        let socket = self.socket.try_clone().context(super::ConnectSnafu)?;
        self.handed_off = true;
        Ok((
            std::mem::take(&mut self.presentation_contexts),
            self.peer_max_pdu_length,
            self.max_pdu_length,
            (self.peer_max_ops_invoked, self.peer_max_ops_performed),
            socket,
        ))
    }

    /// Send a PDU message to the other intervenient.
    pub fn send(&mut self, msg: &Pdu) -> Result<()> {
        write_pdu(&mut self.socket, msg).context(SendSnafu)
    }

    /// Read a PDU message from the other intervenient.
    pub fn receive(&mut self) -> Result<Pdu> {
        read_pdu(&mut self.socket, self.max_pdu_length, true).context(ReceiveSnafu)
    }

    /// Gracefully release the association.
    pub fn release(&mut self) -> Result<()> {
        write_pdu(&mut self.socket, &Pdu::ReleaseRQ).context(SendSnafu)?;

        let pdu = read_pdu(&mut self.socket, self.max_pdu_length, true).context(ReceiveSnafu)?;

        match pdu {
            Pdu::ReleaseRP => {}
            pdu @ Pdu::AbortRQ { .. }
            | pdu @ Pdu::AssociationAC { .. }
            | pdu @ Pdu::AssociationRJ { .. }
            | pdu @ Pdu::AssociationRQ { .. }
            | pdu @ Pdu::PData { .. }
            | pdu @ Pdu::ReleaseRQ => return UnexpectedPduSnafu { pdu }.fail(),
            pdu @ Pdu::Unknown { .. } => return UnknownPduSnafu { pdu }.fail(),
        }

        let _ = self.socket.shutdown(std::net::Shutdown::Both);
        Ok(())
    }

    /// Abort the association abruptly, without a graceful release.
    pub fn abort(&mut self) -> Result<()> {
        use crate::pdu::{AbortRQServiceProviderReason, AbortRQSource};
        let _ = write_pdu(
            &mut self.socket,
            &Pdu::AbortRQ {
                source: AbortRQSource::ServiceProvider(
                    AbortRQServiceProviderReason::ReasonNotSpecified,
                ),
            },
        );
        let _ = self.socket.shutdown(std::net::Shutdown::Both);
        Ok(())
    }
}

impl Drop for ClientAssociation {
    fn drop(&mut self) {
        if !self.handed_off {
            let _ = self.release();
        }
    }
}

#[allow(unused_imports)]
use Error as _; // keep `Error` re-exported via `super::Error` for downstream matching
