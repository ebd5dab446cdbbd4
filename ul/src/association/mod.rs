//! Association module
//!
//! The module provides an abstraction for a DICOM association,
//! as well as primitives shared between the requestor ([`client`])
//! and acceptor ([`server`]) sides.
//!
//! An association is negotiated over a byte stream (usually TCP)
//! by exchanging association PDUs (see [`crate::pdu`]),
//! after which the two nodes may exchange P-DATA PDUs
//! carrying DIMSE command and data set fragments
//! until one of them releases or aborts the connection.
use std::time::Duration;

use bytes::BytesMut;
use snafu::{ResultExt, Snafu};

use crate::pdu::{AssociationRJ, Pdu};

pub mod client;
pub mod engine;
pub mod pdata;
pub mod server;
pub mod uid;

#[cfg(test)]
mod tests;

pub use client::{ClientAssociation, ClientAssociationOptions};
pub use engine::{AssociationEngine, AssociationMessage, EngineConfig, PresentationContextInfo, Transport};
pub use server::{ServerAssociation, ServerAssociationOptions};

#[cfg(feature = "async")]
pub use server::AsyncServerAssociation;

/// The error type for association-related operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Could not connect to the remote application entity
    #[snafu(display("Could not connect to remote node"))]
    Connect {
        source: std::io::Error,
        backtrace: snafu::Backtrace,
    },

    /// Could not set the socket's read timeout
    #[snafu(display("Could not set read timeout"))]
    SetReadTimeout {
        source: std::io::Error,
        backtrace: snafu::Backtrace,
    },

    /// Could not set the socket's write timeout
    #[snafu(display("Could not set write timeout"))]
    SetWriteTimeout {
        source: std::io::Error,
        backtrace: snafu::Backtrace,
    },

    /// No abstract syntax was proposed or accepted
    #[snafu(display("No abstract syntaxes were proposed or accepted"))]
    MissingAbstractSyntax { backtrace: snafu::Backtrace },

    /// None of the proposed presentation contexts were accepted
    #[snafu(display("None of the proposed presentation contexts were accepted"))]
    NoAcceptedPresentationContexts { backtrace: snafu::Backtrace },

    /// The acceptor replied with a different protocol version
    #[snafu(display("Protocol version mismatch: expected {}, got {}", expected, got))]
    ProtocolVersionMismatch {
        expected: u16,
        got: u16,
        backtrace: snafu::Backtrace,
    },

    /// Could not receive a PDU from the peer
    #[snafu(display("Could not receive PDU from peer"))]
    Receive {
        #[snafu(backtrace)]
        source: crate::pdu::reader::Error,
    },

    /// The association was rejected by the peer
    #[snafu(display("Association rejected: {:?}", association_rj))]
    Rejected {
        association_rj: AssociationRJ,
        backtrace: snafu::Backtrace,
    },

    /// Could not send a PDU to the peer
    #[snafu(display("Could not send PDU to peer"))]
    Send {
        #[snafu(backtrace)]
        source: crate::pdu::writer::Error,
    },

    /// An unexpected PDU was received at this point of the protocol
    #[snafu(display("Unexpected PDU: {:?}", pdu))]
    UnexpectedPdu {
        pdu: Pdu,
        backtrace: snafu::Backtrace,
    },

    /// An unrecognized PDU was received
    #[snafu(display("Unknown PDU: {:?}", pdu))]
    UnknownPdu {
        pdu: Pdu,
        backtrace: snafu::Backtrace,
    },

    /// The peer requested a release while the association was still being negotiated
    #[snafu(display("Association was aborted by the peer"))]
    Aborted { backtrace: snafu::Backtrace },

    /// Could not encode a PDU to be sent
    #[snafu(display("Could not encode PDU"))]
    SendPdu {
        #[snafu(backtrace)]
        source: crate::pdu::writer::Error,
    },

    /// Could not write the encoded PDU to the wire
    #[snafu(display("Could not write PDU to the wire"))]
    WireSend {
        source: std::io::Error,
        backtrace: snafu::Backtrace,
    },

    /// The encoded PDU surpasses what the peer declared it is willing to receive
    #[snafu(display(
        "PDU of {} bytes is too large for the peer's maximum of {} bytes",
        pdu_length,
        max_pdu_length
    ))]
    PduTooLargeToSend {
        pdu_length: u32,
        max_pdu_length: u32,
        backtrace: snafu::Backtrace,
    },

    /// No TLS configuration was provided for a TLS association
    #[cfg(any(feature = "sync-tls", feature = "async-tls"))]
    #[snafu(display("No TLS configuration was provided"))]
    TlsConfigMissing { backtrace: snafu::Backtrace },

    /// Could not establish a TLS connection
    #[cfg(any(feature = "sync-tls", feature = "async-tls"))]
    #[snafu(display("Could not establish TLS connection"))]
    TlsConnection {
        source: rustls::Error,
        backtrace: snafu::Backtrace,
    },

    /// An operation did not complete within the configured timeout
    #[cfg(feature = "async")]
    #[snafu(display("Operation timed out"))]
    Timeout { backtrace: snafu::Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Common role taken by an application entity in a presentation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceClassRole {
    /// Service class user
    Scu,
    /// Service class provider
    Scp,
}

/// Options affecting the behavior of the underlying TCP socket of an
/// association.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocketOptions {
    /// Timeout for individual read operations.
    pub read_timeout: Option<Duration>,
    /// Timeout for individual write operations.
    pub write_timeout: Option<Duration>,
    /// Timeout for establishing the underlying connection.
    pub connection_timeout: Option<Duration>,
}

/// The outcome of a successful association negotiation from the acceptor's
/// perspective, ready to be turned into a [`ServerAssociation`].
pub(crate) struct NegotiatedOptions {
    pub peer_max_pdu_length: u32,
    pub user_variables: Vec<crate::pdu::UserVariableItem>,
    pub presentation_contexts: Vec<crate::pdu::PresentationContextNegotiated>,
    pub peer_ae_title: String,
}

/// Common attributes of a negotiated DICOM upper layer association,
/// regardless of which end of the connection established it.
pub trait Association {
    /// Obtain a view of the negotiated presentation contexts.
    fn presentation_contexts(&self) -> &[crate::pdu::PresentationContextNegotiated];

    /// Retrieve the maximum PDU length admitted by the acceptor.
    fn acceptor_max_pdu_length(&self) -> u32;

    /// Retrieve the maximum PDU length admitted by the requestor.
    fn requestor_max_pdu_length(&self) -> u32;

    /// Obtain the remote DICOM node's application entity title.
    fn peer_ae_title(&self) -> &str;

    /// Obtain the user variables received from the peer during negotiation.
    fn user_variables(&self) -> &[crate::pdu::UserVariableItem];
}

/// A socket-like resource which can be shut down independently of being
/// dropped, so that an association can release or abort the connection
/// deterministically.
pub trait CloseSocket {
    /// Shut down both directions of the underlying connection.
    fn close(&mut self) -> std::io::Result<()>;
}

impl CloseSocket for std::net::TcpStream {
    fn close(&mut self) -> std::io::Result<()> {
        self.shutdown(std::net::Shutdown::Both)
    }
}

#[cfg(feature = "sync-tls")]
impl CloseSocket for rustls::StreamOwned<rustls::ServerConnection, std::net::TcpStream> {
    fn close(&mut self) -> std::io::Result<()> {
        self.sock.shutdown(std::net::Shutdown::Both)
    }
}

pub(crate) mod private {
    use crate::pdu::Pdu;

    /// Sealed counterpart of [`super::SyncAssociation`],
    /// implemented by the concrete association types
    /// to provide the actual I/O behind `send`/`receive`/`close`.
    pub trait SyncAssociationSealed<S> {
        fn send(&mut self, pdu: &Pdu) -> super::Result<()>;
        fn receive(&mut self) -> super::Result<Pdu>;
        fn close(&mut self) -> std::io::Result<()>;
    }

    /// Sealed counterpart of [`super::AsyncAssociation`].
    #[cfg(feature = "async")]
    pub trait AsyncAssociationSealed<S> {
        fn send(
            &mut self,
            pdu: &Pdu,
        ) -> impl std::future::Future<Output = super::Result<()>> + Send;
        fn receive(&mut self) -> impl std::future::Future<Output = super::Result<Pdu>> + Send;
        fn close(&mut self) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
    }
}

/// A synchronous, established DICOM upper layer association.
///
/// The most common operations of an established association are
/// [`send`](SyncAssociation::send) and [`receive`](SyncAssociation::receive).
/// Large data set fragments are easier to send through the P-Data writer
/// abstraction (see [`pdata::PDataWriter`]).
pub trait SyncAssociation<S>: private::SyncAssociationSealed<S>
where
    S: std::io::Read + std::io::Write,
{
    /// Obtain mutable access to the underlying stream.
    fn inner_stream(&mut self) -> &mut S;

    /// Obtain mutable access to the underlying stream
    /// together with the association's read buffer.
    fn get_mut(&mut self) -> (&mut S, &mut BytesMut);

    /// Send a PDU message to the other intervenient.
    fn send(&mut self, pdu: &Pdu) -> Result<()> {
        private::SyncAssociationSealed::send(self, pdu)
    }

    /// Read a PDU message from the other intervenient.
    fn receive(&mut self) -> Result<Pdu> {
        private::SyncAssociationSealed::receive(self)
    }

    /// Shut down the underlying connection, terminating the association
    /// without an orderly release.
    fn close(&mut self) -> std::io::Result<()> {
        private::SyncAssociationSealed::close(self)
    }
}

/// An asynchronous, established DICOM upper layer association.
#[cfg(feature = "async")]
pub trait AsyncAssociation<S>: private::AsyncAssociationSealed<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send,
{
    /// Obtain mutable access to the underlying stream.
    fn inner_stream(&mut self) -> &mut S;

    /// Obtain mutable access to the underlying stream
    /// together with the association's read buffer.
    fn get_mut(&mut self) -> (&mut S, &mut BytesMut);

    /// Send a PDU message to the other intervenient.
    fn send(&mut self, pdu: &Pdu) -> impl std::future::Future<Output = Result<()>> + Send {
        private::AsyncAssociationSealed::send(self, pdu)
    }

    /// Read a PDU message from the other intervenient.
    fn receive(&mut self) -> impl std::future::Future<Output = Result<Pdu>> + Send {
        private::AsyncAssociationSealed::receive(self)
    }

    /// Shut down the underlying connection, terminating the association
    /// without an orderly release.
    fn close(&mut self) -> impl std::future::Future<Output = std::io::Result<()>> + Send {
        private::AsyncAssociationSealed::close(self)
    }
}

/// Encode a PDU into `buffer`, ensuring that it does not surpass
/// `max_pdu_length`, the maximum PDU length that the peer declared
/// it is willing to receive.
pub(crate) fn encode_pdu(buffer: &mut Vec<u8>, pdu: &Pdu, max_pdu_length: u32) -> Result<()> {
    crate::pdu::writer::write_pdu(buffer, pdu).context(SendPduSnafu)?;
    snafu::ensure!(
        max_pdu_length == 0 || buffer.len() as u32 <= max_pdu_length,
        PduTooLargeToSendSnafu {
            pdu_length: buffer.len() as u32,
            max_pdu_length,
        }
    );
    Ok(())
}

/// Read a single PDU from the wire.
///
/// `read_buffer` is kept for reuse by callers across successive
/// invocations; the message itself is always read straight from `socket`.
pub(crate) fn read_pdu_from_wire<R>(
    socket: &mut R,
    _read_buffer: &mut BytesMut,
    max_pdu_length: u32,
    strict: bool,
) -> Result<Pdu>
where
    R: std::io::Read,
{
    crate::pdu::reader::read_pdu(socket, max_pdu_length, strict).context(ReceiveSnafu)
}

/// Read a single PDU from an asynchronous stream.
///
/// The PDU header is read first to learn the body's length,
/// after which the whole message is buffered and parsed using the
/// same logic as the synchronous reader.
#[cfg(feature = "async")]
pub(crate) async fn read_pdu_from_wire_async<R>(
    socket: &mut R,
    read_buffer: &mut BytesMut,
    max_pdu_length: u32,
    strict: bool,
) -> Result<Pdu>
where
    R: tokio::io::AsyncRead + Unpin,
{
    use tokio::io::AsyncReadExt;

    read_buffer.clear();
    let mut header = [0_u8; crate::pdu::PDU_HEADER_SIZE as usize];
    socket
        .read_exact(&mut header)
        .await
        .context(WireSendSnafu)?;

    let pdu_length = u32::from_be_bytes([header[2], header[3], header[4], header[5]]);
    read_buffer.extend_from_slice(&header);
    read_buffer.resize(read_buffer.len() + pdu_length as usize, 0);
    let body_start = crate::pdu::PDU_HEADER_SIZE as usize;
    socket
        .read_exact(&mut read_buffer[body_start..])
        .await
        .context(WireSendSnafu)?;

    let mut cursor = std::io::Cursor::new(&read_buffer[..]);
    crate::pdu::reader::read_pdu(&mut cursor, max_pdu_length, strict).context(ReceiveSnafu)
}

/// Apply an optional timeout to a future, mapping an elapsed deadline
/// to [`Error::Timeout`].
#[cfg(feature = "async")]
pub(crate) async fn timeout<T, F>(duration: Option<Duration>, fut: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    match duration {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .unwrap_or_else(|_| TimeoutSnafu.fail()),
        None => fut.await,
    }
}
